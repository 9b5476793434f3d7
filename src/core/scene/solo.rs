//=========================================================================
// Solo Scene
//=========================================================================
//
// Player against the computer. No key bindings yet: the scene only runs
// the gameplay hook and clears the frame.
//
//=========================================================================

use std::time::Duration;

use super::{Scene, SceneContext, SceneKind};
use crate::core::config::ConfigStore;
use crate::core::error::GameError;
use crate::core::gameplay::{GameplayUpdate, MatchState};
use crate::core::input::KeyCode;
use crate::core::surface::{Color, Surface};

#[derive(Debug)]
pub struct SoloScene {
    state: MatchState,
}

impl SoloScene {
    pub fn new() -> Self {
        Self {
            state: MatchState::solo(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }
}

impl Default for SoloScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SoloScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Solo
    }

    fn on_key_down(&mut self, _key: KeyCode, _ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
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
