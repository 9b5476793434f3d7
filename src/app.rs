//=========================================================================
// Application
//
// Entry point that wires the settings file, the Player and the window.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run()──>  [Event Loop]
//         │                      │
//         ├─ with_config_path()  ├─ loads config, builds Player
//         └─ with_title()        ├─ opens bridge channel
//                                └─ blocks until exit or fatal error
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::info;
use pixels::{Error as PixelsError, TextureError};
use thiserror::Error;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigError, ConfigStore, DEFAULT_CONFIG_PATH};
use crate::core::error::GameError;
use crate::core::platform_bridge;
use crate::core::player::Player;
use crate::platform::Platform;

/// Window title shown for the whole session.
pub const DEFAULT_TITLE: &str = "Holy sheet";

//=== AppError ============================================================

/// Fatal runtime errors. The first one stops the event loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("failed to create event loop")]
    CreateEventLoop(#[source] EventLoopError),

    #[error("failed to create window")]
    CreateWindow(#[source] OsError),

    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),

    #[error("failed to present frame: {0}")]
    Present(#[source] PixelsError),

    #[error("failed to resize frame buffer: {0}")]
    Resize(#[source] TextureError),

    #[error("event loop terminated with error")]
    EventLoopRun(#[source] EventLoopError),
}

//=== AppBuilder ==========================================================

/// Builder for configuring an [`App`].
///
/// # Default Values
///
/// - **Config path**: `cfg.json`
/// - **Title**: `Holy sheet`
///
/// ```no_run
/// use holy_pong::AppBuilder;
///
/// AppBuilder::new()
///     .with_config_path("settings/cfg.json")
///     .build()
///     .run()
///     .expect("game failed");
/// ```
#[derive(Debug, Clone)]
pub struct AppBuilder {
    config_path: PathBuf,
    title: String,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Sets the settings file loaded at startup and written on save.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> App {
        App {
            config_path: self.config_path,
            title: self.title,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== App =================================================================

/// Configured game runtime.
#[derive(Debug)]
pub struct App {
    config_path: PathBuf,
    title: String,
}

impl App {
    /// Loads the settings, opens the window and runs until the Player
    /// stops or a fatal error occurs.
    ///
    /// Config errors surface before any window exists.
    pub fn run(self) -> Result<(), AppError> {
        info!("Loading settings from {}", self.config_path.display());
        let config = ConfigStore::load(&self.config_path)?;
        let player = Player::new(config)?;

        let (tx, collector) = platform_bridge::channel();
        let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;

        let mut platform = Platform::new(player, tx, collector, self.title);
        event_loop
            .run_app(&mut platform)
            .map_err(AppError::EventLoopRun)?;

        platform.finish()?;
        info!("Shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
