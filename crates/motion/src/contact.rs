//! Collaborator contracts on the world side: the collision mover and the camera.

use glam::{Quat, Vec3};

/// Which sides of the collision volume touched something during the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollisionFlags(pub u8);

impl CollisionFlags {
    pub const NONE: Self = Self(0);
    pub const SIDES: Self = Self(1 << 0);
    pub const ABOVE: Self = Self(1 << 1);
    pub const BELOW: Self = Self(1 << 2);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for CollisionFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for CollisionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Contact state the core reads once per frame, produced by the previous move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroundContact {
    pub grounded: bool,
    pub ceiling_hit: bool,
}

impl GroundContact {
    /// Sample a mover.
    ///
    /// A ceiling hit is only reported when the flags are exactly `ABOVE`:
    /// brushing a wall while touching the ceiling does not stop the body.
    pub fn from_mover<M: CollisionMover + ?Sized>(mover: &M) -> Self {
        Self {
            grounded: mover.is_grounded(),
            ceiling_hit: mover.collision_flags() == CollisionFlags::ABOVE,
        }
    }
}

/// Step climbing state of a mover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOffset {
    /// The mover climbs steps up to this height.
    Active(f32),
    /// Step climbing is off until the body is grounded again.
    Suspended,
}

impl StepOffset {
    pub fn is_suspended(self) -> bool {
        matches!(self, Self::Suspended)
    }

    /// Height the mover will climb; zero while suspended.
    pub fn height(self) -> f32 {
        match self {
            Self::Active(h) => h,
            Self::Suspended => 0.0,
        }
    }
}

/// Swept, collision-aware translation of the character volume.
///
/// `is_grounded` and `collision_flags` describe the result of the most
/// recent `move_by` call.
pub trait CollisionMover {
    fn is_grounded(&self) -> bool;

    fn collision_flags(&self) -> CollisionFlags;

    /// Translate by `displacement`, resolving collisions against the world.
    fn move_by(&mut self, displacement: Vec3);

    fn step_offset(&self) -> StepOffset;

    fn set_step_offset(&mut self, step: StepOffset);
}

/// The camera attached to the body. Only its local pitch is driven.
pub trait CameraRig {
    /// Set the camera's local rotation. Absolute, not incremental.
    fn set_local_pitch(&mut self, rotation: Quat);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flags(CollisionFlags, bool);

    impl CollisionMover for Flags {
        fn is_grounded(&self) -> bool {
            self.1
        }
        fn collision_flags(&self) -> CollisionFlags {
            self.0
        }
        fn move_by(&mut self, _: Vec3) {}
        fn step_offset(&self) -> StepOffset {
            StepOffset::Active(0.3)
        }
        fn set_step_offset(&mut self, _: StepOffset) {}
    }

    #[test]
    fn flags_combine() {
        let f = CollisionFlags::ABOVE | CollisionFlags::SIDES;
        assert!(f.contains(CollisionFlags::ABOVE));
        assert!(f.contains(CollisionFlags::SIDES));
        assert!(!f.contains(CollisionFlags::BELOW));
        assert!(CollisionFlags::NONE.is_empty());
    }

    #[test]
    fn ceiling_hit_requires_exactly_above() {
        let c = GroundContact::from_mover(&Flags(CollisionFlags::ABOVE, false));
        assert!(c.ceiling_hit);
        assert!(!c.grounded);

        let brushing = CollisionFlags::ABOVE | CollisionFlags::SIDES;
        let c = GroundContact::from_mover(&Flags(brushing, false));
        assert!(!c.ceiling_hit);
    }

    #[test]
    fn grounded_comes_from_mover() {
        let c = GroundContact::from_mover(&Flags(CollisionFlags::BELOW, true));
        assert!(c.grounded);
        assert!(!c.ceiling_hit);
    }

    #[test]
    fn suspended_step_has_zero_height() {
        assert!(StepOffset::Suspended.is_suspended());
        assert_eq!(StepOffset::Suspended.height(), 0.0);
        assert_eq!(StepOffset::Active(0.3).height(), 0.3);
        assert!(!StepOffset::Active(0.0).is_suspended());
    }
}
