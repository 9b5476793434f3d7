//=========================================================================
// Game Errors
//=========================================================================

use thiserror::Error;

use crate::core::config::ConfigError;

/// Failure raised by a scene handler or the Player.
///
/// Nothing is retried: a `GameError` ends the event loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
