//=========================================================================
// Input
//=========================================================================
//
// Game-side keyboard vocabulary. Conversion from winit lives in
// `platform::input_processor`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};
