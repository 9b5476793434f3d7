//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the Player via the bridge channel,
// and presents the Player's surface through `pixels`.
//
// Architecture:
// ```text
//  Main Thread
//  ┌───────────────────────────────────────────────┐
//  │  Winit Event Loop                             │
//  │   ├─ KeyboardInput → input_processor ──┐      │
//  │   ├─ CloseRequested ───────────────────┤      │
//  │   │    └─ runs the closing frame at once │      │
//  │   │                                    ↓      │
//  │   │                        Sender<PlatformEvent>
//  │   │                                    │      │
//  │   └─ RedrawRequested (frame boundary)  │      │
//  │        ├─ EventCollector::collect_frame()     │
//  │        ├─ Player::frame(events, delta)        │
//  │        ├─ sync window + buffer size           │
//  │        └─ copy surface → pixels → render      │
//  └───────────────────────────────────────────────┘
// ```
//
// The first fatal error is stored and ends the event loop; `App::run`
// picks it up through `finish()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Sender;
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::app::AppError;
use crate::core::config::Resolution;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::core::player::Player;

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - no window yet
/// 2. **Resume**: window and pixel buffer created at the Player's size
/// 3. **Frames**: one `Player::frame` per `RedrawRequested`
/// 4. **Shutdown**: Player stops or a fatal error is stored → loop exits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Presenter bound to the window.
    pixels: Option<Pixels<'static>>,

    /// Size of the pixel buffer currently presented.
    presented: Resolution,

    event_sender: Sender<PlatformEvent>,
    collector: EventCollector,
    player: Player,
    title: String,
    last_frame: Instant,
    failure: Option<AppError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        player: Player,
        event_sender: Sender<PlatformEvent>,
        collector: EventCollector,
        title: String,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            pixels: None,
            presented: player.display_size(),
            event_sender,
            collector,
            player,
            title,
            last_frame: Instant::now(),
            failure: None,
        }
    }

    /// Consumes the platform after the event loop returned.
    pub(crate) fn finish(mut self) -> Result<(), AppError> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn send(&self, event: PlatformEvent) {
        if let Err(err) = self.event_sender.send(event) {
            warn!(target: "platform::input", "Channel disconnected, dropping {:?}", err.0);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!(target: "platform", "{}", err);
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    /// Runs one Player frame and presents it.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let channel = self.collector.collect_frame();

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let control = match self.player.frame(self.collector.events(), delta) {
            Ok(control) => control,
            Err(err) => return self.fail(event_loop, err.into()),
        };

        if control == TickControl::Exit || channel == TickControl::Exit {
            info!(target: "platform", "Player stopped, leaving event loop");
            event_loop.exit();
            return;
        }

        if let Err(err) = self.present() {
            return self.fail(event_loop, err);
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Copies the Player's surface into the pixel buffer, resizing the
    /// window and the buffer first if the display was recreated.
    fn present(&mut self) -> Result<(), AppError> {
        let (Some(window), Some(pixels)) = (&self.window, &mut self.pixels) else {
            return Ok(());
        };

        let surface = self.player.surface();
        let size = surface.resolution();
        if size != self.presented {
            info!(target: "platform", "Resizing window {} -> {}", self.presented, size);
            let _ = window.request_inner_size(PhysicalSize::new(size.width, size.height));
            pixels
                .resize_buffer(size.width, size.height)
                .map_err(AppError::Resize)?;
            self.presented = size;
        }

        pixels.frame_mut().copy_from_slice(surface.as_rgba());
        pixels.render().map_err(AppError::Present)
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and presenter if they don't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let size = self.player.display_size();
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(size.width, size.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, AppError::CreateWindow(err)),
        };

        let inner = window.inner_size();
        let texture = SurfaceTexture::new(inner.width, inner.height, Arc::clone(&window));
        let pixels = match Pixels::new(size.width, size.height, texture) {
            Ok(pixels) => pixels,
            Err(err) => return self.fail(event_loop, AppError::CreateRenderer(err)),
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            inner.width,
            inner.height,
            window.scale_factor()
        );

        self.presented = size;
        self.last_frame = Instant::now();
        window.request_redraw();
        self.pixels = Some(pixels);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                // A hidden window may not be redrawn again; run the
                // closing frame here.
                self.redraw(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(key_event) {
                    Some(input) => {
                        trace!(target: "platform::input", "{:?}", input);
                        self.send(input.into());
                    }
                    None => trace!(target: "platform::input", "Key ignored"),
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = &mut self.pixels {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        warn!(target: "platform", "Surface resize failed: {}", err);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
