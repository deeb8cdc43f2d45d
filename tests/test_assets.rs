use std::fs;
use std::path::{Path, PathBuf};

use platformer_game::assets::*;

fn asset_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "platformer_game_{name}_{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn bundled_sprites_load() {
    let set = SpriteSet::load(&asset_dir());
    for sprite in [&set.player, &set.enemy, &set.coin, &set.platform] {
        assert!(!sprite.placeholder);
        assert!(sprite.height() > 0);
    }
    assert_eq!(set.player.height(), 2);
}

#[test]
fn missing_sprite_falls_back_to_placeholder() {
    let sprite = load_sprite(&asset_dir(), "no_such_sprite");
    assert!(sprite.placeholder);
    assert_eq!(sprite, Sprite::placeholder());
}

#[test]
fn empty_sprite_file_falls_back_to_placeholder() {
    let dir = scratch_dir("empty");
    fs::write(dir.join("blank.txt"), "\n   \n").unwrap();
    assert!(load_sprite(&dir, "blank").placeholder);
}

#[test]
fn sprite_set_from_missing_dir_is_all_placeholders() {
    let set = SpriteSet::load(Path::new("/definitely/not/here"));
    assert!(set.player.placeholder);
    assert!(set.player_left.placeholder);
    assert!(set.coin.placeholder);
}

#[test]
fn trailing_blank_lines_are_dropped() {
    let sprite = Sprite::from_text("ab\ncd\n\n\n").unwrap();
    assert_eq!(sprite.rows, vec!["ab", "cd"]);
    assert_eq!(sprite.width(), 2);
}

#[test]
fn mirroring_swaps_direction_glyphs() {
    let sprite = Sprite::from_text("(o>\n/|_").unwrap();
    let flipped = sprite.mirrored();
    assert_eq!(flipped.rows, vec!["<o)", "_|\\"]);
}

#[test]
fn mirroring_twice_is_identity() {
    let set = SpriteSet::load(&asset_dir());
    assert_eq!(set.player.mirrored().mirrored(), set.player);
    assert_eq!(set.enemy_left.mirrored(), set.enemy);
}

#[test]
fn facing_picks_the_prepared_variant() {
    let set = SpriteSet::load(&asset_dir());
    assert_eq!(set.player_facing(true), &set.player);
    assert_eq!(set.player_facing(false), &set.player_left);
    assert_eq!(set.enemy_facing(false), &set.enemy_left);
}
