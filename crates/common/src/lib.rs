//! Shared types for the strider workspace: body transform and axis conventions.
//!
//! # Conventions
//! - +Y is up, +Z is the body's forward axis, +X is its right axis.
//! - Angles crossing crate boundaries are expressed in degrees.

pub mod types;

pub use types::{Transform, forward, pitch_rotation, right, yaw_degrees, yaw_rotation};
