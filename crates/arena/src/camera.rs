use glam::{Quat, Vec3};
use strider_motion::CameraRig;

/// Camera mounted on the body at a fixed eye height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadCamera {
    pub local_rotation: Quat,
    pub eye_height: f32,
}

impl Default for HeadCamera {
    fn default() -> Self {
        Self {
            local_rotation: Quat::IDENTITY,
            eye_height: 1.6,
        }
    }
}

impl HeadCamera {
    /// World-space view direction for a body with the given orientation.
    pub fn view_direction(&self, body_rotation: Quat) -> Vec3 {
        strider_common::forward(body_rotation * self.local_rotation)
    }

    /// World-space eye position for a body whose feet are at `feet`.
    pub fn eye_position(&self, feet: Vec3) -> Vec3 {
        feet + Vec3::Y * self.eye_height
    }
}

impl CameraRig for HeadCamera {
    fn set_local_pitch(&mut self, rotation: Quat) {
        self.local_rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_applied_in_body_space() {
        let mut cam = HeadCamera::default();
        cam.set_local_pitch(strider_common::pitch_rotation(90.0));
        let body = strider_common::yaw_rotation(90.0);
        assert!(cam.view_direction(body).abs_diff_eq(Vec3::NEG_Y, 1e-5));

        cam.set_local_pitch(Quat::IDENTITY);
        assert!(cam.view_direction(body).abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn eye_sits_above_feet() {
        let cam = HeadCamera::default();
        assert_eq!(cam.eye_position(Vec3::new(1.0, 0.0, 2.0)), Vec3::new(1.0, 1.6, 2.0));
    }
}
