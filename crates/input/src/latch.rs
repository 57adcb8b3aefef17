use crate::InputEvent;

/// Buffers edge events that arrive between ticks.
///
/// Device callbacks are not synchronized with the frame loop, so edges are
/// queued here in arrival order and handed to the next tick in one batch.
/// Nothing is coalesced: two jump presses between ticks are two edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeLatch {
    pending: Vec<InputEvent>,
}

impl EdgeLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge. Called from the device layer at any time between ticks.
    pub fn push(&mut self, event: InputEvent) {
        tracing::trace!(?event, pending = self.pending.len(), "latched input edge");
        self.pending.push(event);
    }

    /// Take every pending edge, leaving the latch empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending edges without delivering them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sprint level after applying every pending edge, if any sprint edge is pending.
    pub fn pending_sprint_level(&self) -> Option<bool> {
        self.pending
            .iter()
            .rev()
            .find_map(|event| event.sprint_level())
    }
}
