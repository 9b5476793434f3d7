//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the Player.
//
// Components:
// - `interface`: the event type crossing the bridge
// - `event_collector`: core-side, frame-boundary draining of the channel
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{channel, EventCollector};
pub use event_collector::TickControl;
pub use interface::PlatformEvent;
