//! Tuning values for the simulation and the terminal shell.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override.

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FPS: u32 = 60;
pub const GRAVITY: f32 = 0.8;
pub const JUMP_STRENGTH: f32 = -16.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const STARTING_LIVES: u32 = 3;
pub const COIN_VALUE: u32 = 10;
pub const ASSET_DIR: &str = "assets";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    /// Added to `velocity_y` every frame (units/frame²).
    pub gravity: f32,
    /// Initial `velocity_y` of a jump; negative is upward.
    pub jump_strength: f32,
    pub player_speed: f32,
    pub starting_lives: u32,
    pub coin_value: u32,
    pub asset_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_speed: PLAYER_SPEED,
            starting_lives: STARTING_LIVES,
            coin_value: COIN_VALUE,
            asset_dir: ASSET_DIR.to_string(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<GameConfig, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        Self::from_json(&raw)
            .map_err(|e| format!("Invalid config {}: {e}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<GameConfig, String> {
        let config: GameConfig =
            serde_json::from_str(raw).map_err(|e| format!("JSON parse error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        // Level layouts need room for `x ∈ [50, width - 150]` and a ground strip.
        if self.screen_width < 200.0 || self.screen_height < 100.0 {
            return Err(format!(
                "screen must be at least 200x100, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.fps == 0 {
            return Err("fps must be positive".to_string());
        }
        if self.jump_strength >= 0.0 {
            return Err(format!(
                "jump_strength must be negative (upward), got {}",
                self.jump_strength
            ));
        }
        if self.starting_lives == 0 {
            return Err("starting_lives must be at least 1".to_string());
        }
        Ok(())
    }
}
