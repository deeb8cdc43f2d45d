//! Game entity types. Pure data, no logic.

use crate::config::GameConfig;
use crate::geometry::{Point, Rect};

// ── Sprite footprints (world units) ───────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const ENEMY_SIZE: f32 = 30.0;
pub const COIN_SIZE: f32 = 15.0;
/// Patrol speed an enemy spawns with, moving right.
pub const ENEMY_SPEED: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
    Controls,
}

// ── Static & dynamic entities ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub bounds: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coin {
    pub bounds: Rect,
    /// Top edge at spawn; the bob animation oscillates around it.
    pub original_y: f32,
    pub phase: f32,
}

impl Coin {
    /// A coin centred on `(cx, cy)`.
    pub fn centered_at(cx: f32, cy: f32) -> Self {
        let bounds = Rect::from_center(cx, cy, COIN_SIZE, COIN_SIZE);
        Self {
            bounds,
            original_y: bounds.top(),
            phase: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub bounds: Rect,
    pub velocity_x: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub facing_right: bool,
}

impl Enemy {
    /// An enemy with its top-left at `(x, y)`, patrolling `[min_x, max_x]`.
    pub fn new(x: f32, y: f32, min_x: f32, max_x: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            velocity_x: ENEMY_SPEED,
            min_x,
            max_x,
            facing_right: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub bounds: Rect,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing_right: bool,
}

impl Player {
    /// A fresh player standing still at the spawn point.
    pub fn spawn(config: &GameConfig) -> Self {
        let at = spawn_point(config);
        Self {
            bounds: Rect::from_center(at.x, at.y, PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_x: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            facing_right: true,
        }
    }
}

/// Where the player's centre is placed on spawn and respawn.
pub fn spawn_point(config: &GameConfig) -> Point {
    Point::new(
        (config.screen_width / 4.0).floor(),
        (config.screen_height / 2.0).floor(),
    )
}

/// Borrowed view over any drawable thing in the world.
#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Platform(&'a Platform),
    Coin(&'a Coin),
    Enemy(&'a Enemy),
    Player(&'a Player),
}

impl Entity<'_> {
    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Platform(p) => p.bounds,
            Entity::Coin(c) => c.bounds,
            Entity::Enemy(e) => e.bounds,
            Entity::Player(p) => p.bounds,
        }
    }
}

// ── Level & session ───────────────────────────────────────────────────────────

/// Everything generated for one level index.  `platforms[0]` is the ground.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    /// 1-based level index.
    pub level: u32,
    pub status: GameStatus,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            level: 1,
            status: GameStatus::Menu,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub session: Session,
    pub world: Level,
    pub player: Player,
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    /// Every entity in draw order: platforms, coins, enemies, then the player.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.world
            .platforms
            .iter()
            .map(Entity::Platform)
            .chain(self.world.coins.iter().map(Entity::Coin))
            .chain(self.world.enemies.iter().map(Entity::Enemy))
            .chain(std::iter::once(Entity::Player(&self.player)))
    }
}
