//=========================================================================
// Holy Pong: Library Root
//
// A Pong-style game shell: a keyboard-driven scene machine (Menu,
// Settings, Solo, Two-Player) over a JSON settings document, rendered
// into a software surface and presented in a Winit window.
//
// Typical usage:
// ```no_run
// use holy_pong::AppBuilder;
//
// fn main() -> Result<(), holy_pong::AppError> {
//     AppBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs without a window (settings, scenes,
// the Player). It is public so the game can be driven headlessly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and the `pixels` presenter.
//
mod app;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use app::{App, AppBuilder, AppError, DEFAULT_TITLE};
