//! Text-art sprites loaded by name from the asset directory.
//!
//! A sprite that cannot be loaded is replaced by a solid placeholder block
//! so the game keeps running; the failure only shows up in the log.

use std::fs;
use std::path::Path;

const PLACEHOLDER_GLYPH: char = '█';
const PLACEHOLDER_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub rows: Vec<String>,
    /// True when this is the stand-in for a sprite that failed to load.
    pub placeholder: bool,
}

impl Sprite {
    pub fn from_text(text: &str) -> Option<Sprite> {
        let rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        // Drop trailing blank lines but keep leading ones (they offset the art).
        let last = rows.iter().rposition(|r| !r.is_empty())?;
        Some(Sprite {
            rows: rows[..=last].to_vec(),
            placeholder: false,
        })
    }

    pub fn placeholder() -> Sprite {
        let row: String = std::iter::repeat(PLACEHOLDER_GLYPH)
            .take(PLACEHOLDER_SIZE)
            .collect();
        Sprite {
            rows: vec![row; PLACEHOLDER_SIZE],
            placeholder: true,
        }
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Horizontal flip: rows are padded to a common width, reversed, and
    /// direction glyphs swapped.  Mirroring twice gives back the original.
    pub fn mirrored(&self) -> Sprite {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let pad = width - row.chars().count();
                row.chars()
                    .chain(std::iter::repeat(' ').take(pad))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .map(mirror_glyph)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        Sprite {
            rows,
            placeholder: self.placeholder,
        }
    }
}

fn mirror_glyph(c: char) -> char {
    match c {
        '<' => '>',
        '>' => '<',
        '/' => '\\',
        '\\' => '/',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '▌' => '▐',
        '▐' => '▌',
        other => other,
    }
}

/// Load `<dir>/<name>.txt`, falling back to a placeholder on any failure.
pub fn load_sprite(dir: &Path, name: &str) -> Sprite {
    let path = dir.join(format!("{name}.txt"));
    let loaded = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read sprite {}: {e}", path.display()))
        .and_then(|raw| {
            Sprite::from_text(&raw).ok_or_else(|| format!("Sprite {} is empty", path.display()))
        });

    match loaded {
        Ok(sprite) => sprite,
        Err(err) => {
            log::warn!("{err}; using placeholder");
            Sprite::placeholder()
        }
    }
}

/// Every sprite the renderer needs, with left-facing variants prepared once.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    pub player: Sprite,
    pub player_left: Sprite,
    pub enemy: Sprite,
    pub enemy_left: Sprite,
    pub coin: Sprite,
    pub platform: Sprite,
}

impl SpriteSet {
    pub fn load(dir: &Path) -> SpriteSet {
        let player = load_sprite(dir, "player");
        let enemy = load_sprite(dir, "enemy");
        SpriteSet {
            player_left: player.mirrored(),
            enemy_left: enemy.mirrored(),
            player,
            enemy,
            coin: load_sprite(dir, "coin"),
            platform: load_sprite(dir, "platform"),
        }
    }

    pub fn player_facing(&self, facing_right: bool) -> &Sprite {
        if facing_right {
            &self.player
        } else {
            &self.player_left
        }
    }

    pub fn enemy_facing(&self, facing_right: bool) -> &Sprite {
        if facing_right {
            &self.enemy
        } else {
            &self.enemy_left
        }
    }
}
