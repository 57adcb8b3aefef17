//! Input collaborator: the device-facing side of the controller.
//!
//! The motion core consumes two continuous axes per frame and a stream of
//! discrete edge events. It never reads raw device state.
//!
//! # Invariants
//! - Axis values are consumed, never mutated, by the core.
//! - Every jump edge delivered between two ticks is observed by exactly one tick.

pub mod action;
pub mod latch;
pub mod scripted;
pub mod source;

pub use action::InputEvent;
pub use latch::EdgeLatch;
pub use scripted::{InputFrame, ScriptedInput};
pub use source::InputSource;

pub fn crate_info() -> &'static str {
    concat!("strider-input v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
