//! Reference collaborators for running the motion core without an engine.
//!
//! `FlatArena` is a kinematic mover over a flat floor with optional raised
//! platforms and an optional ceiling. It resolves contacts by clamping against
//! planes, nothing more: no slopes, no sweeps against arbitrary geometry.

pub mod arena;
pub mod camera;

pub use arena::{ArenaConfig, FlatArena, Platform};
pub use camera::HeadCamera;

pub fn crate_info() -> &'static str {
    concat!("strider-arena v", env!("CARGO_PKG_VERSION"))
}
