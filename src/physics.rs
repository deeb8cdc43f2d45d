//! Per-frame movement for the player, enemies and coins.
//!
//! Like the rest of the game logic, each function takes the entity by
//! reference and returns its next value.

use crate::config::GameConfig;
use crate::entities::{spawn_point, Coin, Enemy, Platform, Player};

const COIN_PHASE_STEP: f32 = 0.1;
const COIN_BOB_AMPLITUDE: f32 = 3.0;

// ── Input-driven player changes ───────────────────────────────────────────────

/// Start a jump.  Only possible from the ground; no double jumps.
pub fn jump(player: &Player, config: &GameConfig) -> Player {
    if !player.on_ground {
        return *player;
    }
    Player {
        velocity_y: config.jump_strength,
        on_ground: false,
        ..*player
    }
}

pub fn move_left(player: &Player, config: &GameConfig) -> Player {
    Player {
        velocity_x: -config.player_speed,
        ..*player
    }
}

pub fn move_right(player: &Player, config: &GameConfig) -> Player {
    Player {
        velocity_x: config.player_speed,
        ..*player
    }
}

pub fn stop(player: &Player) -> Player {
    Player {
        velocity_x: 0.0,
        ..*player
    }
}

/// Put the player back on the spawn point with no vertical speed.
pub fn respawn(player: &Player, config: &GameConfig) -> Player {
    let mut next = *player;
    next.bounds.set_center(spawn_point(config));
    next.velocity_y = 0.0;
    next
}

// ── Player step ───────────────────────────────────────────────────────────────

/// Advance the player one frame: gravity, then move-and-resolve on X, then
/// on Y, then keep the player inside the screen horizontally.
pub fn step_player(player: &Player, platforms: &[Platform], config: &GameConfig) -> Player {
    let mut p = *player;

    p.velocity_y += config.gravity;

    // ── X axis ───────────────────────────────────────────────────────────────
    p.bounds.x += p.velocity_x;
    if p.velocity_x > 0.0 {
        p.facing_right = true;
    } else if p.velocity_x < 0.0 {
        p.facing_right = false;
    }

    for platform in platforms {
        if !p.bounds.intersects(&platform.bounds) {
            continue;
        }
        if p.velocity_x > 0.0 {
            p.bounds.set_right(platform.bounds.left());
        } else if p.velocity_x < 0.0 {
            p.bounds.set_left(platform.bounds.right());
        }
    }

    // ── Y axis ───────────────────────────────────────────────────────────────
    p.bounds.y += p.velocity_y;
    p.on_ground = false;

    for platform in platforms {
        if !p.bounds.intersects(&platform.bounds) {
            continue;
        }
        if p.velocity_y > 0.0 {
            p.bounds.set_bottom(platform.bounds.top());
            p.velocity_y = 0.0;
            p.on_ground = true;
        } else if p.velocity_y < 0.0 {
            p.bounds.set_top(platform.bounds.bottom());
            p.velocity_y = 0.0;
        }
    }

    // Screen edges (horizontal only; falling out the bottom is a game event)
    if p.bounds.left() < 0.0 {
        p.bounds.set_left(0.0);
    }
    if p.bounds.right() > config.screen_width {
        p.bounds.set_right(config.screen_width);
    }

    p
}

// ── Enemies & coins ───────────────────────────────────────────────────────────

/// Walk one frame along the patrol, turning around at either bound.
pub fn step_enemy(enemy: &Enemy) -> Enemy {
    let mut e = *enemy;
    e.bounds.x += e.velocity_x;

    if e.bounds.left() <= e.min_x {
        e.bounds.set_left(e.min_x);
        e.velocity_x = e.velocity_x.abs();
    } else if e.bounds.right() >= e.max_x {
        e.bounds.set_right(e.max_x);
        e.velocity_x = -e.velocity_x.abs();
    }

    // Derived from the velocity, never toggled, so it cannot drift.
    e.facing_right = e.velocity_x > 0.0;
    e
}

/// Cosmetic bob around the spawn height.
pub fn step_coin(coin: &Coin) -> Coin {
    let phase = coin.phase + COIN_PHASE_STEP;
    let mut c = *coin;
    c.phase = phase;
    c.bounds.y = coin.original_y + (COIN_BOB_AMPLITUDE * phase.sin()).round();
    c
}
