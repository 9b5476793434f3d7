//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core event type.
//
// The platform layer pushes one `PlatformEvent` per OS event into the
// bridge channel; the core drains them at the frame boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the Player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// A key went down or up.
    Input(InputEvent),

    /// Window close requested by the user or the OS.
    WindowClosed,
}

impl From<InputEvent> for PlatformEvent {
    fn from(event: InputEvent) -> Self {
        Self::Input(event)
    }
}
