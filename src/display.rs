//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! the 800×600 world into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use platformer_game::assets::{Sprite, SpriteSet};
use platformer_game::entities::{Entity, GameState, GameStatus};
use platformer_game::geometry::{Point, Rect};
use platformer_game::menu::{buttons_for, Button, ButtonTone};

// ── Colour palette ────────────────────────────────────────────────────────────

const SKY_DAY: (u8, u8, u8) = (135, 206, 235);
const SKY_EVENING: (u8, u8, u8) = (100, 150, 200);
const SKY_NIGHT: (u8, u8, u8) = (20, 20, 50);
const C_PLATFORM: (u8, u8, u8) = (139, 69, 19);
const C_COIN: (u8, u8, u8) = (255, 215, 0);
const C_ENEMY: (u8, u8, u8) = (255, 0, 0);
const C_PLAYER: (u8, u8, u8) = (30, 144, 255);
const C_PLACEHOLDER: (u8, u8, u8) = (255, 0, 0);
const C_WHITE: (u8, u8, u8) = (255, 255, 255);
const C_BLACK: (u8, u8, u8) = (0, 0, 0);
const C_GAME_OVER: (u8, u8, u8) = (255, 0, 0);
const C_HINT: (u8, u8, u8) = (200, 200, 200);

/// Brightness left after the dark overlay is applied behind each modal screen.
fn overlay_shade(status: GameStatus) -> f32 {
    match status {
        GameStatus::Playing => 1.0,
        GameStatus::Menu | GameStatus::GameOver => 0.5,
        GameStatus::Controls => 0.25,
    }
}

fn shade((r, g, b): (u8, u8, u8), factor: f32) -> Color {
    let s = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Color::Rgb {
        r: s(r),
        g: s(g),
        b: s(b),
    }
}

fn sky_for(level: u32) -> (u8, u8, u8) {
    match level {
        1 => SKY_DAY,
        2 => SKY_EVENING,
        _ => SKY_NIGHT,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world units onto the terminal grid.
///
/// Row 0 holds the HUD and the last row the key hint; the rows between are
/// the play field, which always shows the whole world.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, state: &GameState) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(3),
            world_width: state.config.screen_width,
            world_height: state.config.screen_height,
        }
    }

    fn field_rows(&self) -> u16 {
        self.rows - 2
    }

    fn cell_width(&self) -> f32 {
        self.world_width / self.cols as f32
    }

    fn cell_height(&self) -> f32 {
        self.world_height / self.field_rows() as f32
    }

    /// Terminal row of world `y` (may fall outside the field).
    fn row_of(&self, y: f32) -> i32 {
        (y / self.cell_height()).floor() as i32 + 1
    }

    fn col_of(&self, x: f32) -> i32 {
        (x / self.cell_width()).floor() as i32
    }

    /// Cells covered by `rect`, clipped to the play field, as
    /// `(col, row, width, height)`.  Anything visible covers at least one cell.
    pub fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col_of(rect.left());
        let c1 = ((rect.right() / self.cell_width()).ceil() as i32).max(c0 + 1);
        let r0 = self.row_of(rect.top());
        let r1 = ((rect.bottom() / self.cell_height()).ceil() as i32 + 1).max(r0 + 1);

        let c0 = c0.max(0);
        let c1 = c1.min(self.cols as i32);
        let r0 = r0.max(1);
        let r1 = r1.min(self.rows as i32 - 1);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, (c1 - c0) as u16, (r1 - r0) as u16))
    }

    /// World point at the centre of a terminal cell, if the cell is in the field.
    pub fn to_world(&self, col: u16, row: u16) -> Option<Point> {
        if col >= self.cols || row == 0 || row >= self.rows - 1 {
            return None;
        }
        Some(Point::new(
            (col as f32 + 0.5) * self.cell_width(),
            ((row - 1) as f32 + 0.5) * self.cell_height(),
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `pointer` is the hovered world point, if any.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    sprites: &SpriteSet,
    view: &Viewport,
    pointer: Option<Point>,
) -> std::io::Result<()> {
    let status = state.session.status;
    let dim = overlay_shade(status);
    let sky = sky_for(state.session.level);

    out.queue(style::SetBackgroundColor(shade(sky, dim)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_scenery(out, state, view, dim)?;
    for entity in state.entities() {
        draw_entity(out, entity, sprites, view, dim)?;
    }
    draw_hud(out, state, view)?;
    draw_controls_hint(out, status, view)?;

    match status {
        GameStatus::Playing => {}
        GameStatus::Menu => draw_menu(out, state, view)?,
        GameStatus::Controls => draw_controls(out, view)?,
        GameStatus::GameOver => draw_game_over(out, state, view)?,
    }
    for button in buttons_for(status, &state.config) {
        draw_button(out, &button, view, button.is_hovered(pointer))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Drifting clouds on levels 1–2, drifting stars from level 3 on.
fn draw_scenery<W: Write>(
    out: &mut W,
    state: &GameState,
    view: &Viewport,
    dim: f32,
) -> std::io::Result<()> {
    let width = state.config.screen_width;
    let height = state.config.screen_height;
    let frame = state.frame as f32;
    out.queue(style::SetForegroundColor(shade(C_WHITE, dim)))?;

    if state.session.level <= 2 {
        for i in 0..5 {
            let x = (frame / 3.0 + i as f32 * 200.0) % (width + 200.0) - 100.0;
            let cloud = Rect::new(x, 50.0 + i as f32 * 30.0, 70.0, 30.0);
            if let Some((col, row, w, h)) = view.cells(&cloud) {
                for dy in 0..h {
                    out.queue(cursor::MoveTo(col, row + dy))?;
                    out.queue(Print("░".repeat(w as usize)))?;
                }
            }
        }
    } else {
        for i in 0..20 {
            let x = (i as f32 * 40.0 + frame / 6.0) % width;
            let y = (i as f32 * 25.0) % (height - 100.0);
            if let Some((col, row, _, _)) = view.cells(&Rect::new(x, y, 1.0, 1.0)) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("·"))?;
            }
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    entity: Entity<'_>,
    sprites: &SpriteSet,
    view: &Viewport,
    dim: f32,
) -> std::io::Result<()> {
    let (sprite, colour, tiled) = match entity {
        Entity::Platform(_) => (&sprites.platform, C_PLATFORM, true),
        Entity::Coin(_) => (&sprites.coin, C_COIN, false),
        Entity::Enemy(e) => (sprites.enemy_facing(e.facing_right), C_ENEMY, false),
        Entity::Player(p) => (sprites.player_facing(p.facing_right), C_PLAYER, false),
    };
    let colour = if sprite.placeholder { C_PLACEHOLDER } else { colour };

    let Some((col, row, w, h)) = view.cells(&entity.bounds()) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(shade(colour, dim)))?;
    for dy in 0..h {
        let line = sprite_row(sprite, dy as usize, w as usize, tiled);
        if line.trim().is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

/// One row of `sprite` cut (or, for platforms, repeated) to `width` cells.
fn sprite_row(sprite: &Sprite, dy: usize, width: usize, tiled: bool) -> String {
    if sprite.rows.is_empty() {
        return String::new();
    }
    if tiled {
        let row: Vec<char> = sprite.rows[dy % sprite.rows.len()].chars().collect();
        if row.is_empty() {
            return String::new();
        }
        return (0..width).map(|i| row[i % row.len()]).collect();
    }
    sprite
        .rows
        .get(dy)
        .map(|r| r.chars().take(width).collect())
        .unwrap_or_default()
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let session = &state.session;
    out.queue(style::SetForegroundColor(shade(C_WHITE, 1.0)))?;

    // Score, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {}", session.score)))?;

    // Level, centre, only while playing
    if session.status == GameStatus::Playing {
        let level_str = format!("Level: {}", session.level);
        let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
        out.queue(cursor::MoveTo(lx, 0))?;
        out.queue(Print(&level_str))?;
    }

    // Lives, right
    let lives_str = format!("Lives: {}", session.lives);
    let rx = view.cols.saturating_sub(lives_str.len() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    status: GameStatus,
    view: &Viewport,
) -> std::io::Result<()> {
    let hint = match status {
        GameStatus::Menu => "ENTER : Start   C : Controls   Q : Quit   (or click)",
        GameStatus::Controls => "ESC / B : Back",
        GameStatus::Playing => "← → / A D : Move   SPACE / ↑ / W : Jump   ESC : Menu",
        GameStatus::GameOver => "ENTER : Play again   ESC / B : Menu",
    };
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(shade(C_HINT, 1.0)))?;
    out.queue(Print(clip(hint, view.cols.saturating_sub(1))))?;
    Ok(())
}

// ── Modal screens ─────────────────────────────────────────────────────────────

fn clip(text: &str, max: u16) -> String {
    text.chars().take(max as usize).collect()
}

/// Print `text` centred horizontally at world height `y`.
fn draw_text_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    text: &str,
    y: f32,
    colour: (u8, u8, u8),
) -> std::io::Result<()> {
    let row = view.row_of(y);
    if row < 1 || row >= view.rows as i32 - 1 {
        return Ok(());
    }
    let text = clip(text, view.cols);
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row as u16))?;
    out.queue(style::SetForegroundColor(shade(colour, 1.0)))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let height = state.config.screen_height;
    draw_text_centered(out, view, "★  PLATFORMER  ★", height / 6.0, C_WHITE)
}

fn draw_controls<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    draw_text_centered(out, view, "CONTROLS", 50.0, C_WHITE)?;

    let lines = [
        "Arrow Keys / A,D - Move Left/Right",
        "Space / Up / W - Jump",
        "ESC - Return to Menu",
        "",
        "Collect all coins to advance to next level",
        "Avoid enemies or lose a life",
        "Game ends when all lives are lost",
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text_centered(out, view, line, 150.0 + i as f32 * 40.0, C_WHITE)?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let mid = state.config.screen_height / 2.0;
    let session = &state.session;

    draw_text_centered(out, view, "GAME  OVER", state.config.screen_height / 4.0, C_GAME_OVER)?;
    draw_text_centered(
        out,
        view,
        &format!("Final Score: {}", session.score),
        mid - 50.0,
        C_WHITE,
    )?;
    draw_text_centered(
        out,
        view,
        &format!("Levels Completed: {}", session.level.saturating_sub(1)),
        mid,
        C_WHITE,
    )?;
    draw_text_centered(out, view, "Press ENTER to play again", mid + 50.0, C_WHITE)
}

fn draw_button<W: Write>(
    out: &mut W,
    button: &Button,
    view: &Viewport,
    hovered: bool,
) -> std::io::Result<()> {
    let (base, hover) = match button.tone {
        ButtonTone::Go => ((0, 255, 0), (100, 255, 100)),
        ButtonTone::Info => ((255, 255, 0), (255, 255, 100)),
        ButtonTone::Danger => ((255, 0, 0), (255, 100, 100)),
        ButtonTone::Neutral => ((0, 0, 255), (100, 100, 255)),
    };
    let Some((col, row, w, h)) = view.cells(&button.rect) else {
        return Ok(());
    };

    out.queue(style::SetBackgroundColor(shade(
        if hovered { hover } else { base },
        1.0,
    )))?;
    out.queue(style::SetForegroundColor(shade(C_BLACK, 1.0)))?;
    let label = clip(button.label, w);
    let label_row = row + h / 2;
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        if row + dy == label_row {
            let pad = w as usize - label.chars().count();
            let left = pad / 2;
            out.queue(Print(format!(
                "{}{}{}",
                " ".repeat(left),
                label,
                " ".repeat(pad - left)
            )))?;
        } else {
            out.queue(Print(" ".repeat(w as usize)))?;
        }
    }
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    Ok(())
}
