//=========================================================================
// Core Systems
//
// Platform-independent game state: settings, the software display
// surface, key events, scenes and the Player that ties them together.
//
// Nothing in here touches the window system. The platform layer feeds
// `PlatformEvent`s in and presents `Player::surface()` out, so every
// module below can be driven headlessly from tests.
//
//=========================================================================

pub mod config;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod platform_bridge;
pub mod player;
pub mod scene;
pub mod surface;

//=== Public API ==========================================================

pub use config::{ConfigError, ConfigStore, Resolution, Setting};
pub use error::GameError;
pub use player::Player;
pub use scene::{Scene, SceneKind};
pub use surface::{Color, Rect, Surface};
