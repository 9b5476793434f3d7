//=========================================================================
// Event Collector
//=========================================================================
//
// Frame-boundary drain of the platform event channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events() → Player::frame()
//
// Every pending event is drained each frame, preserving arrival order.
// A disconnected channel means the platform side is gone.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::trace;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== Channel =============================================================

/// Opens the bridge: the platform keeps the sender, the Player's frame
/// driver keeps the collector.
///
/// Unbounded, since sends and the per-frame drain both run on the winit
/// thread and a full queue could never empty.
pub(crate) fn channel() -> (Sender<PlatformEvent>, EventCollector) {
    let (tx, rx) = unbounded();
    (tx, EventCollector::new(rx))
}

//=== EventCollector ======================================================

/// Drains platform events into a per-frame buffer.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<PlatformEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Replaces the buffer with everything queued since the last frame.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();

        loop {
            match self.receiver.try_recv() {
                Ok(event) => self.events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.events.is_empty() {
                        return TickControl::Exit;
                    }
                    break;
                }
            }
        }

        if !self.events.is_empty() {
            trace!("Collected {} platform event(s)", self.events.len());
        }
        TickControl::Continue
    }

    /// Events collected by the last `collect_frame` call.
    pub(crate) fn events(&self) -> &[PlatformEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
