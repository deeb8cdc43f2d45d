//! Clickable buttons on the Menu, Controls and GameOver screens.
//!
//! Buttons live in world coordinates so hit-testing stays independent of
//! the terminal size; the renderer maps them to cells.

use crate::compute::Action;
use crate::config::GameConfig;
use crate::entities::GameStatus;
use crate::geometry::{Point, Rect};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_SPACING: f32 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonTone {
    Go,
    Info,
    Danger,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: Action,
    pub tone: ButtonTone,
}

impl Button {
    pub fn is_hovered(&self, pointer: Option<Point>) -> bool {
        pointer.is_some_and(|p| self.rect.contains_point(p))
    }
}

/// The buttons shown for `status`, top to bottom.
pub fn buttons_for(status: GameStatus, config: &GameConfig) -> Vec<Button> {
    let x = config.screen_width / 2.0 - BUTTON_WIDTH / 2.0;
    let at = |y: f32| Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT);

    match status {
        GameStatus::Menu => {
            let top = config.screen_height / 2.0;
            vec![
                Button {
                    rect: at(top),
                    label: "Start Game",
                    action: Action::Start,
                    tone: ButtonTone::Go,
                },
                Button {
                    rect: at(top + BUTTON_SPACING),
                    label: "Controls",
                    action: Action::ShowControls,
                    tone: ButtonTone::Info,
                },
                Button {
                    rect: at(top + 2.0 * BUTTON_SPACING),
                    label: "Quit",
                    action: Action::Quit,
                    tone: ButtonTone::Danger,
                },
            ]
        }
        GameStatus::Controls | GameStatus::GameOver => vec![Button {
            rect: at(config.screen_height - 100.0),
            label: "Back",
            action: Action::Back,
            tone: ButtonTone::Neutral,
        }],
        GameStatus::Playing => Vec::new(),
    }
}

/// The action of the button under `point`, if any.
pub fn button_at(status: GameStatus, config: &GameConfig, point: Point) -> Option<Action> {
    buttons_for(status, config)
        .into_iter()
        .find(|b| b.rect.contains_point(point))
        .map(|b| b.action)
}
