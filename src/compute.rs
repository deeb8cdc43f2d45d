//! Pure game-logic functions: the game state machine.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, a random source) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected random source and
//! log output.

use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Level, Player, Session};
use crate::level::{build_level, RandomSource};
use crate::physics;

/// Discrete commands from keys or buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    ShowControls,
    Back,
    Quit,
    /// Escape while playing: back to the menu, session kept.
    Pause,
    Confirm,
    Jump,
}

/// Continuous horizontal input, sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Idle,
}

#[derive(Clone, Debug)]
pub enum Transition {
    Continue(GameState),
    Quit,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// The state at program start: on the menu, with level 1 laid out behind it.
pub fn new_game(config: GameConfig, rng: &mut impl RandomSource) -> GameState {
    GameState {
        session: Session::new(&config),
        world: build_level(1, &config, rng),
        player: Player::spawn(&config),
        frame: 0,
        config,
    }
}

/// A fresh session (score, lives, level 1) already in play.
fn restart(state: &GameState, rng: &mut impl RandomSource) -> GameState {
    log::info!("Starting new game");
    GameState {
        session: Session {
            status: GameStatus::Playing,
            ..Session::new(&state.config)
        },
        world: build_level(1, &state.config, rng),
        player: Player::spawn(&state.config),
        ..state.clone()
    }
}

fn with_status(state: &GameState, status: GameStatus) -> GameState {
    GameState {
        session: Session {
            status,
            ..state.session.clone()
        },
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one discrete action.  Actions that mean nothing in the current
/// state leave it unchanged.
pub fn apply_action(
    state: &GameState,
    action: Action,
    rng: &mut impl RandomSource,
) -> Transition {
    use GameStatus::*;

    let next = match (state.session.status, action) {
        (Menu, Action::Start) => restart(state, rng),
        (Menu, Action::ShowControls) => with_status(state, Controls),
        (Menu, Action::Quit) => return Transition::Quit,
        (Controls, Action::Back) => with_status(state, Menu),
        (Playing, Action::Pause) => with_status(state, Menu),
        (Playing, Action::Jump) => GameState {
            player: physics::jump(&state.player, &state.config),
            ..state.clone()
        },
        (GameOver, Action::Confirm) => restart(state, rng),
        (GameOver, Action::Back) => with_status(state, Menu),
        _ => state.clone(),
    };
    Transition::Continue(next)
}

/// Set the player's horizontal velocity from the held direction.
pub fn steer(state: &GameState, steer: Steer) -> GameState {
    if state.session.status != GameStatus::Playing {
        return state.clone();
    }
    let player = match steer {
        Steer::Left => physics::move_left(&state.player, &state.config),
        Steer::Right => physics::move_right(&state.player, &state.config),
        Steer::Idle => physics::stop(&state.player),
    };
    GameState {
        player,
        ..state.clone()
    }
}

// ── Per-frame tick (randomness is injected) ────────────────────────────

/// Advance the simulation by one frame.  Outside of `Playing` only the
/// frame counter moves (it drives background animation).
pub fn tick(state: &GameState, rng: &mut impl RandomSource) -> GameState {
    let frame = state.frame + 1;
    if state.session.status != GameStatus::Playing {
        return GameState {
            frame,
            ..state.clone()
        };
    }

    let config = &state.config;
    let mut session = state.session.clone();

    // ── 1. Movement ──────────────────────────────────────────────────────────
    let mut player = physics::step_player(&state.player, &state.world.platforms, config);
    let enemies: Vec<_> = state.world.enemies.iter().map(physics::step_enemy).collect();
    let coins: Vec<_> = state.world.coins.iter().map(physics::step_coin).collect();

    // ── 2. Coin pickup ───────────────────────────────────────────────────────
    let (taken, coins): (Vec<_>, Vec<_>) = coins
        .into_iter()
        .partition(|c| c.bounds.intersects(&player.bounds));
    session.score += config.coin_value * taken.len() as u32;

    let mut world = Level {
        platforms: state.world.platforms.clone(),
        coins,
        enemies,
    };

    // ── 3. Level complete ────────────────────────────────────────────────────
    if world.coins.is_empty() {
        session.level += 1;
        log::info!("Level complete, advancing to level {}", session.level);
        world = build_level(session.level, config, rng);
        player = Player::spawn(config);
    }

    // ── 4. Enemy contact, then falling off the bottom ────────────────────────
    let hit_enemy = world
        .enemies
        .iter()
        .any(|e| e.bounds.intersects(&player.bounds));
    if hit_enemy {
        player = lose_life(&mut session, &player, config, "enemy contact");
    }

    if session.status == GameStatus::Playing && player.bounds.top() > config.screen_height {
        player = lose_life(&mut session, &player, config, "fell off the screen");
    }

    GameState {
        session,
        world,
        player,
        frame,
        ..state.clone()
    }
}

/// Take a life, respawn the player and end the game when none are left.
fn lose_life(session: &mut Session, player: &Player, config: &GameConfig, cause: &str) -> Player {
    session.lives = session.lives.saturating_sub(1);
    log::info!("Life lost ({cause}), {} remaining", session.lives);
    if session.lives == 0 {
        session.status = GameStatus::GameOver;
        log::info!(
            "Game over: score {}, reached level {}",
            session.score,
            session.level
        );
    }
    physics::respawn(player, config)
}
