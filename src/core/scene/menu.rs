//=========================================================================
// Menu Scene
//=========================================================================
//
// Vertical list of buttons sized from the configured resolution.
//
// Input:
//   ArrowUp / ArrowDown → move selection (clamped, no wraparound)
//   Enter               → switch to the selected item's scene
//   Escape              → quit
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneKind};
use crate::core::config::{ConfigStore, Resolution};
use crate::core::error::GameError;
use crate::core::input::KeyCode;
use crate::core::surface::{Color, Rect, Surface};

//=== Menu Items ==========================================================

/// Button labels and the scene each one opens, top to bottom.
pub const MENU_ITEMS: [(&str, SceneKind); 3] = [
    ("Play: Solo", SceneKind::Solo),
    ("Play: Two", SceneKind::TwoPlayer),
    ("Settings", SceneKind::Settings),
];

const LABEL_SIZE: u32 = 24;
const LABEL_INSET: i32 = 40;

//=== MenuLayout ==========================================================

/// Button geometry derived from a display resolution.
///
/// Buttons are a tenth of the display in each dimension, never smaller
/// than 160×90, horizontally centred, and stacked with a fixed gap
/// starting just above mid-height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub button_width: u32,
    pub button_height: u32,
    pub x: i32,
    pub y: i32,
}

impl MenuLayout {
    pub const MIN_BUTTON_WIDTH: u32 = 160;
    pub const MIN_BUTTON_HEIGHT: u32 = 90;
    pub const GAP: u32 = 10;
    const TOP_OFFSET: i32 = 20;

    pub fn for_resolution(resolution: Resolution) -> Self {
        let button_width = (resolution.width / 10).max(Self::MIN_BUTTON_WIDTH);
        let button_height = (resolution.height / 10).max(Self::MIN_BUTTON_HEIGHT);

        Self {
            button_width,
            button_height,
            x: resolution.width as i32 / 2 - button_width as i32 / 2,
            y: resolution.height as i32 / 2 - button_height as i32 - Self::TOP_OFFSET,
        }
    }

    /// Rectangle of the button at `index` (0 is the top button).
    pub fn button(&self, index: usize) -> Rect {
        let stride = (self.button_height + Self::GAP) as i32;
        Rect::new(
            self.x,
            self.y + index as i32 * stride,
            self.button_width,
            self.button_height,
        )
    }
}

//=== MenuScene ===========================================================

/// Main menu. Selection always starts on the first item.
#[derive(Debug, Default)]
pub struct MenuScene {
    selected: usize,
}

impl MenuScene {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Index of the highlighted item.
    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl Scene for MenuScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Menu
    }

    fn on_key_down(&mut self, key: KeyCode, ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
        match key {
            KeyCode::Escape => ctx.quit(),
            KeyCode::ArrowUp => self.selected = self.selected.saturating_sub(1),
            KeyCode::ArrowDown => self.selected = (self.selected + 1).min(MENU_ITEMS.len() - 1),
            KeyCode::Enter => ctx.switch_to(MENU_ITEMS[self.selected].1),
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, surface: &mut Surface, config: &ConfigStore) -> Result<(), GameError> {
        let layout = MenuLayout::for_resolution(config.resolution()?);

        surface.fill(Color::BLACK);
        for (i, (label, _)) in MENU_ITEMS.iter().enumerate() {
            let rect = layout.button(i);
            let fill = if i == self.selected {
                Color::BLUE_GRAY
            } else {
                Color::GRAY
            };
            surface.fill_rect(rect, fill);

            // Fixed inset; long labels may run past the button edge.
            let text_y = rect.y + rect.height as i32 / 2 - 8;
            surface.draw_text(label, rect.x + LABEL_INSET, text_y, LABEL_SIZE, Color::WHITE);
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
