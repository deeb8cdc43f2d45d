use std::path::Path;

use platformer_game::config::*;

#[test]
fn defaults_match_the_classic_tuning() {
    let c = GameConfig::default();
    assert_eq!(c.screen_width, 800.0);
    assert_eq!(c.screen_height, 600.0);
    assert_eq!(c.fps, 60);
    assert_eq!(c.gravity, 0.8);
    assert_eq!(c.jump_strength, -16.0);
    assert_eq!(c.player_speed, 5.0);
    assert_eq!(c.starting_lives, 3);
    assert_eq!(c.coin_value, 10);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let c = GameConfig::from_json(r#"{ "gravity": 1.2, "starting_lives": 5 }"#).unwrap();
    assert_eq!(c.gravity, 1.2);
    assert_eq!(c.starting_lives, 5);
    assert_eq!(c.screen_width, 800.0);
    assert_eq!(c.asset_dir, "assets");
}

#[test]
fn empty_object_is_the_default_config() {
    assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
}

#[test]
fn positive_jump_strength_is_rejected() {
    let err = GameConfig::from_json(r#"{ "jump_strength": 16.0 }"#).unwrap_err();
    assert!(err.contains("jump_strength"), "{err}");
}

#[test]
fn zero_lives_and_zero_fps_are_rejected() {
    assert!(GameConfig::from_json(r#"{ "starting_lives": 0 }"#).is_err());
    assert!(GameConfig::from_json(r#"{ "fps": 0 }"#).is_err());
    assert!(GameConfig::from_json(r#"{ "screen_width": 100.0 }"#).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let err = GameConfig::from_json("{ gravity: ").unwrap_err();
    assert!(err.contains("JSON parse error"), "{err}");
}

#[test]
fn missing_file_reports_its_path() {
    let err = GameConfig::load(Path::new("/no/such/platformer.json")).unwrap_err();
    assert!(err.contains("Failed to read config"), "{err}");
    assert!(err.contains("/no/such/platformer.json"), "{err}");
}

#[test]
fn load_reads_a_file_from_disk() {
    let path = std::env::temp_dir().join(format!("platformer_cfg_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "fps": 30 }"#).unwrap();
    let c = GameConfig::load(&path).unwrap();
    assert_eq!(c.fps, 30);
    let _ = std::fs::remove_file(&path);
}
