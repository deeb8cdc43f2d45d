//! Level generation.
//!
//! Levels 1 and 2 use hand-authored layouts; from level 3 on, platforms are
//! placed at random.  All randomness comes through a [`RandomSource`] so
//! callers control determinism (seeded `StdRng` in tests, `thread_rng` in
//! the game).

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Coin, Enemy, Level, Platform, ENEMY_SIZE};

const GROUND_HEIGHT: f32 = 50.0;
const PLATFORM_HEIGHT: f32 = 20.0;
const RANDOM_PLATFORM_COUNT: usize = 8;
/// Coins float this far above the platform top (centre to surface).
const COIN_LIFT: f32 = 25.0;
const COIN_CHANCE: f64 = 0.7;
/// Platforms must be wider than this to carry an enemy.
const ENEMY_MIN_PLATFORM_WIDTH: f32 = 100.0;
const MIN_COINS: usize = 3;

const LEVEL_ONE: &[(f32, f32, f32, f32)] = &[
    (100.0, 400.0, 200.0, 20.0),
    (400.0, 300.0, 150.0, 20.0),
    (250.0, 200.0, 100.0, 20.0),
    (550.0, 450.0, 200.0, 20.0),
    (650.0, 200.0, 150.0, 20.0),
];

const LEVEL_TWO: &[(f32, f32, f32, f32)] = &[
    (50.0, 450.0, 150.0, 20.0),
    (300.0, 400.0, 100.0, 20.0),
    (500.0, 350.0, 100.0, 20.0),
    (650.0, 250.0, 150.0, 20.0),
    (400.0, 200.0, 100.0, 20.0),
    (200.0, 150.0, 100.0, 20.0),
    (50.0, 250.0, 100.0, 20.0),
];

/// The draws the level builder needs.
///
/// Every `rand::Rng` is a `RandomSource`; tests may also implement it
/// directly to pin every draw to a fixed value.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn chance(&mut self) -> f64;
    /// Uniform integer in `[low, high]`.
    fn int_in(&mut self, low: i32, high: i32) -> i32;
    /// Uniform index in `[0, len)`; `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn chance(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Probability that a wide platform carries an enemy on `level`.
///
/// Grows by 0.1 per level and saturates at 1.0 from level 6 on.
pub fn enemy_chance(level: u32) -> f64 {
    let keep_clear = (0.6 - level as f64 * 0.1).max(0.0);
    1.0 - keep_clear
}

/// The non-ground platforms for `level` (top-left x, y, width, height).
fn platform_layout(
    level: u32,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> Vec<(f32, f32, f32, f32)> {
    match level {
        1 => LEVEL_ONE.to_vec(),
        2 => LEVEL_TWO.to_vec(),
        _ => {
            let max_x = (config.screen_width - 150.0) as i32;
            (0..RANDOM_PLATFORM_COUNT)
                .map(|i| {
                    let x = rng.int_in(50, max_x) as f32;
                    let y = 150.0 + i as f32 * 60.0;
                    let width = rng.int_in(80, 200) as f32;
                    (x, y, width, PLATFORM_HEIGHT)
                })
                .collect()
        }
    }
}

fn coin_above(platform: &Platform) -> Coin {
    let b = platform.bounds;
    Coin::centered_at(b.left() + (b.width / 2.0).floor(), b.top() - COIN_LIFT)
}

fn enemy_on(platform: &Platform) -> Enemy {
    let b = platform.bounds;
    Enemy::new(
        b.left() + (b.width / 2.0).floor(),
        b.top() - ENEMY_SIZE,
        b.left(),
        b.right(),
    )
}

/// Build the platforms, coins and enemies for `level` (1-based).
pub fn build_level(level: u32, config: &GameConfig, rng: &mut impl RandomSource) -> Level {
    let ground = Platform::new(
        0.0,
        config.screen_height - GROUND_HEIGHT,
        config.screen_width,
        GROUND_HEIGHT,
    );

    let mut platforms = vec![ground];
    let mut coins = Vec::new();
    let mut enemies = Vec::new();
    // Indices into `platforms` that did not get a coin on the first pass.
    let mut bare = Vec::new();

    for (x, y, width, height) in platform_layout(level, config, rng) {
        let platform = Platform::new(x, y, width, height);

        if rng.chance() < COIN_CHANCE {
            coins.push(coin_above(&platform));
        } else {
            bare.push(platforms.len());
        }

        if width > ENEMY_MIN_PLATFORM_WIDTH && rng.chance() < enemy_chance(level) {
            enemies.push(enemy_on(&platform));
        }

        platforms.push(platform);
    }

    // Top up to the minimum coin count: bare platforms first, without
    // replacement, then any non-ground platform.
    let elevated = platforms.len() - 1;
    if coins.len() < MIN_COINS && elevated == 0 {
        log::warn!("Level {level} has no platforms above ground; skipping coin backfill");
    } else {
        while coins.len() < MIN_COINS {
            let idx = if bare.is_empty() {
                1 + rng.index(elevated)
            } else {
                bare.swap_remove(rng.index(bare.len()))
            };
            coins.push(coin_above(&platforms[idx]));
        }
    }

    log::debug!(
        "Built level {level}: {} platforms, {} coins, {} enemies",
        platforms.len(),
        coins.len(),
        enemies.len()
    );

    Level {
        platforms,
        coins,
        enemies,
    }
}
