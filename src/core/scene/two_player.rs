//=========================================================================
// Two-Player Scene
//=========================================================================
//
// Local match between two keyboard rackets.
//
// Input:
//   W / S                  → first player's hold-up / hold-down
//   ArrowUp / ArrowDown    → second player's hold-up / hold-down
//   Escape                 → back to Menu
//
// Key-down sets the hold flag, key-up clears it. With the default
// `RacketRouting::Shared` both key sets drive the first racket.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneKind};
use crate::core::config::ConfigStore;
use crate::core::error::GameError;
use crate::core::gameplay::{GameplayUpdate, MatchState, Racket};
use crate::core::input::KeyCode;
use crate::core::surface::{Color, Surface};

//=== RacketRouting =======================================================

/// Which racket the second player's keys drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RacketRouting {
    /// Both key sets drive the first racket.
    #[default]
    Shared,

    /// Deviation: arrow keys drive the second racket.
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Up,
    Down,
}

//=== TwoPlayerScene ======================================================

#[derive(Debug)]
pub struct TwoPlayerScene {
    state: MatchState,
    routing: RacketRouting,
}

impl TwoPlayerScene {
    pub fn new() -> Self {
        Self::with_routing(RacketRouting::default())
    }

    pub fn with_routing(routing: RacketRouting) -> Self {
        Self {
            state: MatchState::two_player(),
            routing,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn routing(&self) -> RacketRouting {
        self.routing
    }

    /// Resolves a movement key to the racket it drives and the intent.
    fn bind(&mut self, key: KeyCode) -> Option<(&mut Racket, Intent)> {
        let (second_player, intent) = match key {
            KeyCode::KeyW => (false, Intent::Up),
            KeyCode::KeyS => (false, Intent::Down),
            KeyCode::ArrowUp => (true, Intent::Up),
            KeyCode::ArrowDown => (true, Intent::Down),
            _ => return None,
        };

        let racket = if second_player && self.routing == RacketRouting::Split {
            &mut self.state.second_racket
        } else {
            &mut self.state.first_racket
        };
        Some((racket, intent))
    }

    fn set_hold(&mut self, key: KeyCode, held: bool) {
        if let Some((racket, intent)) = self.bind(key) {
            match intent {
                Intent::Up => racket.hold_up = held,
                Intent::Down => racket.hold_down = held,
            }
        }
    }
}

impl Default for TwoPlayerScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TwoPlayerScene {
    fn kind(&self) -> SceneKind {
        SceneKind::TwoPlayer
    }

    fn on_key_down(&mut self, key: KeyCode, ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
        if key == KeyCode::Escape {
            ctx.switch_to(SceneKind::Menu);
        }
        self.set_hold(key, true);
        Ok(())
    }

    fn on_key_up(&mut self, key: KeyCode, _ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
        self.set_hold(key, false);
        Ok(())
    }

    fn update(&mut self, delta: Duration) {
        self.state.update(delta);
    }

    fn draw(&mut self, surface: &mut Surface, _config: &ConfigStore) -> Result<(), GameError> {
        surface.fill(Color::BLACK);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
