//! Motion core: turns per-frame input and contact state into one displacement
//! and an updated body/camera orientation.
//!
//! # Invariants
//! - Horizontal velocity is rebuilt from input every frame and never accumulates.
//! - Vertical velocity is the only component carried between frames.
//! - Camera pitch stays within `[-upper_look_limit, lower_look_limit]`.
//! - The mover is asked to move exactly once per frame.

pub mod contact;
pub mod controller;
pub mod replay;
pub mod rig;
pub mod tuning;

pub use contact::{CameraRig, CollisionFlags, CollisionMover, GroundContact, StepOffset};
pub use controller::{LookUpdate, MotionController, MotionEvent, MotionState, VerticalPhase};
pub use replay::{InputRecording, RecordedFrame, RecordingError};
pub use rig::{CharacterRig, FrameReport, InputSession, RigBuilder, SetupError};
pub use tuning::{TuningError, TuningParameters};

pub fn crate_info() -> &'static str {
    concat!("strider-motion v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("motion"));
    }
}
