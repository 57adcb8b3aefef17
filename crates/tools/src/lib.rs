//! Developer tooling: motion inspector and event timeline.
//!
//! # Invariants
//! - Tools only read controller state; they never feed back into motion.

pub mod inspector;
pub mod timeline;

pub use inspector::{MotionInspector, MotionSummary};
pub use timeline::EventTimeline;

pub fn crate_info() -> &'static str {
    concat!("strider-tools v", env!("CARGO_PKG_VERSION"))
}
