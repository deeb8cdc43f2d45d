mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use platformer_game::assets::SpriteSet;
use platformer_game::compute::{apply_action, new_game, steer, tick, Action, Steer, Transition};
use platformer_game::config::GameConfig;
use platformer_game::entities::{GameState, GameStatus};
use platformer_game::geometry::Point;
use platformer_game::menu::button_at;

use display::Viewport;

// ── Held-key constants ────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// The discrete action a key press means in `status`, if any.
fn key_action(status: GameStatus, code: KeyCode) -> Option<Action> {
    use GameStatus::*;

    match (status, code) {
        (Menu, KeyCode::Enter | KeyCode::Char('1')) => Some(Action::Start),
        (Menu, KeyCode::Char('c' | 'C')) => Some(Action::ShowControls),
        (Menu, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Some(Action::Quit),
        (Controls, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b' | 'B')) => {
            Some(Action::Back)
        }
        (Playing, KeyCode::Char(' ' | 'w' | 'W') | KeyCode::Up) => Some(Action::Jump),
        (Playing, KeyCode::Esc) => Some(Action::Pause),
        (GameOver, KeyCode::Enter) => Some(Action::Confirm),
        (GameOver, KeyCode::Esc | KeyCode::Char('b' | 'B')) => Some(Action::Back),
        _ => None,
    }
}

// ── Logging & configuration ───────────────────────────────────────────────────

fn log_path() -> PathBuf {
    std::env::temp_dir().join("platformer_game.log")
}

/// Log to a file: stderr is unusable while the terminal is in raw mode.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(log_path()) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // Without a log file, keep logging off rather than garbling the screen.
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn load_config(arg: Option<String>) -> GameConfig {
    let Some(path) = arg else {
        log::info!("No config file given, using defaults");
        return GameConfig::default();
    };
    match GameConfig::load(Path::new(&path)) {
        Ok(config) => {
            log::info!("Loaded config from {path}");
            config
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            GameConfig::default()
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit action or Ctrl-C.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which direction keys are still
/// "fresh" (within `HOLD_WINDOW` frames) and steer the player accordingly,
/// so jumping while holding a direction works.  One-shot keys (jump, escape,
/// enter) fire on the press itself.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence.
///
/// Events are drained with a zero-timeout poll, so the loop stays on one
/// thread and never blocks outside the frame-rate sleep.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let frame_budget = Duration::from_secs(1) / state.config.fps;

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut pointer: Option<Point> = None;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, &state);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut actions: Vec<Action> = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
                        {
                            log::info!("Interrupted");
                            return Ok(());
                        }
                        actions.extend(key_action(state.session.status, code));
                        key_frame.insert(code, frame);
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => {
                    pointer = view.to_world(column, row);
                    if kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(p) = pointer {
                            actions.extend(button_at(state.session.status, &state.config, p));
                        }
                    }
                }
                _ => {}
            }
        }

        // ── Discrete actions, in arrival order ────────────────────────────────
        for action in actions {
            // Each action sees the state the previous one produced.
            match apply_action(&state, action, &mut rng) {
                Transition::Continue(next) => state = next,
                Transition::Quit => {
                    log::info!("Quit from menu");
                    return Ok(());
                }
            }
        }

        // ── Held direction, sampled once per frame ────────────────────────────
        let left = any_held(
            &key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        let right = any_held(
            &key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );
        let direction = if left {
            Steer::Left
        } else if right {
            Steer::Right
        } else {
            Steer::Idle
        };
        state = steer(&state, direction);

        state = tick(&state, &mut rng);

        display::render(out, &state, sprites, &view, pointer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    log::info!("Platformer starting...");

    let config = load_config(std::env::args().nth(1));
    let sprites = SpriteSet::load(Path::new(&config.asset_dir));
    let state = new_game(config, &mut thread_rng());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let result = game_loop(&mut out, state, &sprites);
    if let Err(err) = &result {
        log::error!("Game loop failed: {err}");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("Platformer exited");
    result
}
