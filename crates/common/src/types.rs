use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform of the controlled body: position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Transform at `position` with identity rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        forward(self.rotation)
    }

    pub fn right(&self) -> Vec3 {
        right(self.rotation)
    }
}

/// Local +Z axis of `rotation` in world space.
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}

/// Local +X axis of `rotation` in world space.
pub fn right(rotation: Quat) -> Vec3 {
    rotation * Vec3::X
}

/// Rotation of `degrees` around the world vertical axis.
///
/// Positive yaw turns forward (+Z) toward right (+X).
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

/// Rotation of `degrees` around the local horizontal axis.
///
/// Positive pitch tilts forward downward.
pub fn pitch_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(degrees.to_radians())
}

/// Heading of `rotation` projected on the horizontal plane, in degrees in (-180, 180].
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let f = forward(rotation);
    f.x.atan2(f.z).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.forward(), Vec3::Z);
        assert_eq!(t.right(), Vec3::X);
    }

    #[test]
    fn positive_yaw_turns_forward_toward_right() {
        let r = yaw_rotation(90.0);
        assert!(forward(r).abs_diff_eq(Vec3::X, EPS));
        assert!(right(r).abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn positive_pitch_looks_down() {
        let f = forward(pitch_rotation(30.0));
        assert!(f.y < 0.0);
    }

    #[test]
    fn yaw_degrees_recovers_heading() {
        assert!((yaw_degrees(yaw_rotation(45.0)) - 45.0).abs() < 1e-3);
        assert!((yaw_degrees(yaw_rotation(-120.0)) + 120.0).abs() < 1e-3);
        assert!(yaw_degrees(Quat::IDENTITY).abs() < EPS);
    }
}
