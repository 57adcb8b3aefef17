use glam::{Vec2, Vec3};
use strider_common::Transform;
use strider_motion::{CollisionFlags, CollisionMover, StepOffset};

/// Axis-aligned raised block standing on the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Minimum corner on the XZ plane.
    pub min: Vec2,
    /// Maximum corner on the XZ plane.
    pub max: Vec2,
    /// Height of the top surface.
    pub height: f32,
}

impl Platform {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.y && z <= self.max.y
    }
}

/// Static layout of an arena.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    pub floor_height: f32,
    /// Height of the ceiling plane, if any.
    pub ceiling_height: Option<f32>,
    pub platforms: Vec<Platform>,
    /// Height of the body from feet to head.
    pub body_height: f32,
    pub step_offset: f32,
    pub spawn: Vec3,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            floor_height: 0.0,
            ceiling_height: None,
            platforms: Vec::new(),
            body_height: 1.8,
            step_offset: 0.3,
            spawn: Vec3::ZERO,
        }
    }
}

/// Kinematic mover for a body in a [`ArenaConfig`] layout.
///
/// The body's position is its feet. Contact flags and the grounded state
/// describe the last `move_by` call only.
#[derive(Debug, Clone)]
pub struct FlatArena {
    config: ArenaConfig,
    transform: Transform,
    flags: CollisionFlags,
    step: StepOffset,
    moves: u64,
}

impl FlatArena {
    pub fn new(config: ArenaConfig) -> Self {
        let mut transform = Transform::at(config.spawn);
        let ground = ground_height(&config, config.spawn.x, config.spawn.z);
        let flags = if transform.position.y <= ground {
            transform.position.y = ground;
            CollisionFlags::BELOW
        } else {
            CollisionFlags::NONE
        };
        let step = StepOffset::Active(config.step_offset);
        Self {
            config,
            transform,
            flags,
            step,
            moves: 0,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Number of `move_by` calls so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Highest walkable surface under `(x, z)`.
    pub fn ground_height(&self, x: f32, z: f32) -> f32 {
        ground_height(&self.config, x, z)
    }
}

fn ground_height(config: &ArenaConfig, x: f32, z: f32) -> f32 {
    config
        .platforms
        .iter()
        .filter(|p| p.contains(x, z))
        .map(|p| p.height)
        .fold(config.floor_height, f32::max)
}

impl CollisionMover for FlatArena {
    fn is_grounded(&self) -> bool {
        self.flags.contains(CollisionFlags::BELOW)
    }

    fn collision_flags(&self) -> CollisionFlags {
        self.flags
    }

    fn move_by(&mut self, displacement: Vec3) {
        let start = self.transform.position;
        let mut target = start + displacement;
        let mut flags = CollisionFlags::NONE;

        // Horizontal: climb what the step offset allows, otherwise stop at the edge.
        let ground_there = self.ground_height(target.x, target.z);
        if ground_there > target.y {
            let rise = ground_there - start.y;
            if rise <= self.step.height() {
                target.y = ground_there;
            } else {
                target.x = start.x;
                target.z = start.z;
                flags |= CollisionFlags::SIDES;
            }
        }

        let ground = self.ground_height(target.x, target.z);
        if target.y <= ground {
            target.y = ground;
            if displacement.y <= 0.0 {
                flags |= CollisionFlags::BELOW;
            }
        }

        if let Some(ceiling) = self.config.ceiling_height {
            let head = target.y + self.config.body_height;
            if displacement.y > 0.0 && head >= ceiling {
                target.y = ceiling - self.config.body_height;
                flags |= CollisionFlags::ABOVE;
            }
        }

        if flags != self.flags {
            tracing::trace!(from = ?self.flags, to = ?flags, "arena contact changed");
        }
        self.transform.position = target;
        self.flags = flags;
        self.moves += 1;
    }

    fn step_offset(&self) -> StepOffset {
        self.step
    }

    fn set_step_offset(&mut self, step: StepOffset) {
        self.step = step;
    }
}
