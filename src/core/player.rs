//=========================================================================
// Player
//=========================================================================
//
// Owner of everything the game loop touches: the settings document, the
// display surface, the active scene and the running flag.
//
// Frame pipeline:
// ```text
//   frame(events, delta)
//     ├─ for each event (arrival order)
//     │    ├─ Input  → active scene → apply queued requests
//     │    └─ WindowClosed → running = false
//     ├─ scene.update(delta)
//     └─ scene.draw(surface)      (skipped once not running)
// ```
//
// Requests raised by a scene are applied as soon as its handler returns,
// so the next event already reaches the new scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::config::{ConfigStore, Resolution};
use crate::core::error::GameError;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformEvent, TickControl};
use crate::core::scene::{Scene, SceneContext, SceneKind, SceneRequest, TransitionQueue};
use crate::core::surface::Surface;

//=== Player ==============================================================

pub struct Player {
    config: ConfigStore,
    surface: Surface,
    scene: Box<dyn Scene>,
    requests: TransitionQueue,
    running: bool,
}

impl Player {
    //--- Construction -----------------------------------------------------

    /// Creates the display surface at the configured resolution and opens
    /// the menu.
    ///
    /// Fails before allocating anything if `screen_size` is missing or
    /// unparsable.
    pub fn new(config: ConfigStore) -> Result<Self, GameError> {
        let resolution = config.resolution()?;
        info!("Creating {} display surface", resolution);

        Ok(Self {
            config,
            surface: Surface::with_resolution(resolution),
            scene: SceneKind::Menu.build(),
            requests: TransitionQueue::new(),
            running: true,
        })
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one iteration of the game loop.
    ///
    /// Returns `Exit` once the running flag has been cleared. The last
    /// frame is not drawn.
    pub fn frame(
        &mut self,
        events: &[PlatformEvent],
        delta: Duration,
    ) -> Result<TickControl, GameError> {
        for event in events {
            match event {
                PlatformEvent::Input(input) => self.handle_event(*input)?,
                PlatformEvent::WindowClosed => {
                    info!("Window closed");
                    self.running = false;
                }
            }
        }

        self.scene.update(delta);
        if !self.running {
            return Ok(TickControl::Exit);
        }

        self.draw()?;
        Ok(TickControl::Continue)
    }

    /// Routes one key event to the active scene and applies whatever it
    /// requested.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), GameError> {
        trace!("{:?} -> {:?}", event, self.scene.kind());

        let mut ctx = SceneContext::new(&mut self.config, &mut self.requests);
        match event {
            InputEvent::KeyDown(key) => self.scene.on_key_down(key, &mut ctx)?,
            InputEvent::KeyUp(key) => self.scene.on_key_up(key, &mut ctx)?,
        }

        self.apply_requests()
    }

    /// Draws the active scene into the display surface.
    pub fn draw(&mut self) -> Result<(), GameError> {
        self.scene.draw(&mut self.surface, &self.config)
    }

    //--- Display ----------------------------------------------------------

    /// Replaces the display surface with one at the configured resolution.
    ///
    /// The old surface is copied onto the new one at the origin and then
    /// dropped.
    pub fn recreate_display(&mut self) -> Result<(), GameError> {
        let resolution = self.config.resolution()?;

        let mut surface = Surface::with_resolution(resolution);
        surface.blit(&self.surface, 0, 0);
        let old = std::mem::replace(&mut self.surface, surface);

        info!("Display recreated: {} -> {}", old.resolution(), resolution);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn display_size(&self) -> Resolution {
        self.surface.resolution()
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_requests(&mut self) -> Result<(), GameError> {
        for request in self.requests.take() {
            debug!("Applying {:?}", request);
            match request {
                SceneRequest::Switch(kind) => {
                    info!("Scene {:?} -> {:?}", self.scene.kind(), kind);
                    self.scene = kind.build();
                }
                SceneRequest::RecreateDisplay => self.recreate_display()?,
                SceneRequest::Quit => self.running = false,
            }
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
