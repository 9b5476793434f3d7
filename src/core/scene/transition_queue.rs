//=========================================================================
// Transition Queue
//=========================================================================
//
// FIFO of requests raised by the active scene.
//
// Scenes push requests through their `SceneContext` while handling a
// key; the Player drains the queue as soon as the handler returns, so a
// requested switch is in effect before the next event is dispatched.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKind;

//=== SceneRequest ========================================================

/// Something a scene asks the Player to do on its behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Replace the active scene with a fresh instance of this kind.
    Switch(SceneKind),

    /// Re-create the display surface at the configured resolution,
    /// carrying the current frame over at the origin.
    RecreateDisplay,

    /// Stop the main loop after the current frame.
    Quit,
}

//=== TransitionQueue =====================================================

/// Queue of scene requests, applied in the order they were pushed.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<SceneRequest>,
}

impl TransitionQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request.
    pub fn push(&mut self, request: SceneRequest) {
        self.queue.push(request);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_returns_fifo_and_empties() {
        let mut queue = TransitionQueue::new();
        queue.push(SceneRequest::RecreateDisplay);
        queue.push(SceneRequest::Switch(SceneKind::Menu));
        assert_eq!(queue.len(), 2);

        let taken = queue.take();
        assert_eq!(
            taken,
            vec![SceneRequest::RecreateDisplay, SceneRequest::Switch(SceneKind::Menu)]
        );
        assert!(queue.is_empty());
    }
}
