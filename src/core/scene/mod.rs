//=========================================================================
// Scene System
//=========================================================================
//
// One scene is active at a time. Scenes receive key events and draw the
// frame; they never own the Player, they talk to it through the
// `SceneContext` lent for each call.
//
// Transitions:
// ```text
//   Menu ──Enter──> Solo | TwoPlayer | Settings
//   Menu ──Escape──> quit
//   Settings ──Escape──> Menu
//   Settings ──Enter──> save, recreate display, Menu
//   TwoPlayer ──Escape──> Menu
// ```
//
// There is no scene stack: a switch drops the old scene and builds a
// fresh one from its `SceneKind`.
//
//=========================================================================

//=== Module Declarations =================================================

mod menu;
mod settings;
mod solo;
mod transition_queue;
mod two_player;

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::config::ConfigStore;
use crate::core::error::GameError;
use crate::core::input::KeyCode;
use crate::core::surface::Surface;

//=== Public API ==========================================================

pub use menu::{MenuLayout, MenuScene, MENU_ITEMS};
pub use settings::{SettingsScene, SAVE_HINT};
pub use solo::SoloScene;
pub use transition_queue::{SceneRequest, TransitionQueue};
pub use two_player::{RacketRouting, TwoPlayerScene};

//=== SceneKind ===========================================================

/// Identifies each scene variant; doubles as the scene factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Menu,
    Settings,
    Solo,
    TwoPlayer,
}

impl SceneKind {
    /// Builds a fresh scene of this kind with default cursor state.
    pub fn build(self) -> Box<dyn Scene> {
        match self {
            Self::Menu => Box::new(MenuScene::new()),
            Self::Settings => Box::new(SettingsScene::new()),
            Self::Solo => Box::new(SoloScene::new()),
            Self::TwoPlayer => Box::new(TwoPlayerScene::new()),
        }
    }
}

//=== SceneContext ========================================================

/// What a scene may touch while handling input: the live settings
/// document and the Player's request queue.
pub struct SceneContext<'a> {
    config: &'a mut ConfigStore,
    requests: &'a mut TransitionQueue,
}

impl<'a> SceneContext<'a> {
    pub fn new(config: &'a mut ConfigStore, requests: &'a mut TransitionQueue) -> Self {
        Self { config, requests }
    }

    pub fn config(&self) -> &ConfigStore {
        &*self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut *self.config
    }

    /// Asks the Player to replace the active scene.
    pub fn switch_to(&mut self, kind: SceneKind) {
        self.requests.push(SceneRequest::Switch(kind));
    }

    /// Asks the Player to re-create the display at the configured size.
    pub fn recreate_display(&mut self) {
        self.requests.push(SceneRequest::RecreateDisplay);
    }

    /// Asks the Player to stop running.
    pub fn quit(&mut self) {
        self.requests.push(SceneRequest::Quit);
    }
}

//=== Scene Trait =========================================================

/// Behaviour of one full-screen mode.
///
/// Only `kind`, `on_key_down` and `draw` are required; key release and
/// the gameplay update default to doing nothing.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Called for every key press while this scene is active.
    fn on_key_down(&mut self, key: KeyCode, ctx: &mut SceneContext<'_>) -> Result<(), GameError>;

    /// Called for every key release while this scene is active.
    fn on_key_up(&mut self, _key: KeyCode, _ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
        Ok(())
    }

    /// Called once per frame after input, before drawing.
    fn update(&mut self, _delta: Duration) {}

    /// Renders the scene into `surface`.
    fn draw(&mut self, surface: &mut Surface, config: &ConfigStore) -> Result<(), GameError>;
}

//=========================================================================
// Unit Tests
//=========================================================================
