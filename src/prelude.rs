//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use holy_pong::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::app::{App, AppBuilder, AppError};

// Settings
pub use crate::core::config::{ConfigError, ConfigStore, Resolution, Setting};

// Player and scenes
pub use crate::core::error::GameError;
pub use crate::core::player::Player;
pub use crate::core::scene::{Scene, SceneContext, SceneKind, SceneRequest};

// Input and rendering
pub use crate::core::input::{InputEvent, KeyCode};
pub use crate::core::platform_bridge::{PlatformEvent, TickControl};
pub use crate::core::surface::{Color, Rect, Surface};
