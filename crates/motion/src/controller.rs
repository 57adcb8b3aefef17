use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use strider_common::{forward, pitch_rotation, right, yaw_degrees, yaw_rotation};

use crate::contact::{CollisionMover, GroundContact, StepOffset};
use crate::tuning::TuningParameters;

/// Vertical state, selected every frame from the mover's grounded flag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalPhase {
    Grounded,
    Airborne,
}

impl VerticalPhase {
    pub fn from_contact(contact: GroundContact) -> Self {
        if contact.grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }
}

/// Something notable the controller did during a frame.
///
/// Purely observational: nothing in the controller reads the log back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MotionEvent {
    /// Vertical velocity was set to the jump force.
    Jumped { force: f32 },
    /// A jump press arrived while airborne and was dropped.
    JumpIgnored,
    SprintChanged { sprinting: bool },
    LeftGround,
    /// Grounded again. `impact_speed` is the downward speed carried into contact.
    Landed { impact_speed: f32 },
    CeilingHit,
    StepOffsetRestored { height: f32 },
}

/// Everything the controller carries from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Horizontal part is rebuilt from input each frame; vertical part accumulates.
    pub velocity: Vec3,
    pub sprinting: bool,
    /// Camera pitch in degrees. Positive looks down.
    pub camera_pitch: f32,
    pub body_rotation: Quat,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            sprinting: false,
            camera_pitch: 0.0,
            body_rotation: Quat::IDENTITY,
        }
    }
}

/// Result of integrating one look delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookUpdate {
    /// Absolute local rotation for the camera.
    pub pitch: Quat,
    /// Incremental yaw that was composed onto the body this frame.
    pub yaw_delta: Quat,
}

/// Per-frame movement and look state machine.
///
/// Each operation is a pure update of [`MotionState`] except
/// [`resolve_vertical_motion`](Self::resolve_vertical_motion), which may
/// toggle the mover's step offset, and
/// [`apply_final_movement`](Self::apply_final_movement), the single point
/// where state turns into a world-affecting move.
#[derive(Debug, Clone)]
pub struct MotionController {
    tuning: TuningParameters,
    state: MotionState,
    /// Phase resolved on the previous frame. `None` before the first frame.
    phase: Option<VerticalPhase>,
    event_log: Vec<MotionEvent>,
}

impl MotionController {
    pub fn new(tuning: TuningParameters) -> Self {
        Self::with_state(tuning, MotionState::default())
    }

    /// Start from an explicit state, e.g. a spawn orientation.
    pub fn with_state(tuning: TuningParameters, state: MotionState) -> Self {
        Self {
            tuning,
            state,
            phase: None,
            event_log: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn is_sprinting(&self) -> bool {
        self.state.sprinting
    }

    pub fn camera_pitch(&self) -> f32 {
        self.state.camera_pitch
    }

    pub fn body_rotation(&self) -> Quat {
        self.state.body_rotation
    }

    /// Body heading in degrees, wrapped to (-180, 180].
    pub fn yaw_degrees(&self) -> f32 {
        yaw_degrees(self.state.body_rotation)
    }

    /// Phase resolved on the most recent frame.
    pub fn phase(&self) -> Option<VerticalPhase> {
        self.phase
    }

    /// Body forward axis in world space.
    pub fn forward(&self) -> Vec3 {
        forward(self.state.body_rotation)
    }

    /// Body right axis in world space.
    pub fn right(&self) -> Vec3 {
        right(self.state.body_rotation)
    }

    /// Rebuild horizontal velocity from the movement axis.
    ///
    /// The axis is not normalized, so diagonal input is faster than straight
    /// input. The vertical component is carried over untouched.
    pub fn update_movement_intent(&mut self, movement_axis: Vec2, forward: Vec3, right: Vec3) {
        let speed = self.tuning.speed(self.state.sprinting);
        let vertical = self.state.velocity.y;
        let mut velocity = forward * movement_axis.y * speed + right * movement_axis.x * speed;
        velocity.y = vertical;
        self.state.velocity = velocity;
    }

    pub fn set_sprinting(&mut self, pressed: bool) {
        if self.state.sprinting == pressed {
            return;
        }
        self.state.sprinting = pressed;
        tracing::debug!(sprinting = pressed, "sprint level changed");
        self.event_log
            .push(MotionEvent::SprintChanged { sprinting: pressed });
    }

    /// Handle a jump press. Returns whether the jump was taken.
    ///
    /// Airborne presses are dropped, not queued.
    pub fn on_jump_triggered(&mut self, grounded: bool) -> bool {
        if !grounded {
            tracing::trace!("jump pressed while airborne, ignored");
            self.event_log.push(MotionEvent::JumpIgnored);
            return false;
        }
        let force = self.tuning.jump_force;
        self.state.velocity.y = force;
        tracing::debug!(force, "jumped");
        self.event_log.push(MotionEvent::Jumped { force });
        true
    }

    /// Integrate a look delta into camera pitch and body yaw.
    pub fn update_look(&mut self, look_axis: Vec2) -> LookUpdate {
        let pitch = self.state.camera_pitch - look_axis.y * self.tuning.vertical_speed;
        self.state.camera_pitch = self.tuning.clamp_pitch(pitch);

        let yaw_delta = yaw_rotation(look_axis.x * self.tuning.horizontal_speed);
        self.state.body_rotation = (self.state.body_rotation * yaw_delta).normalize();

        LookUpdate {
            pitch: pitch_rotation(self.state.camera_pitch),
            yaw_delta,
        }
    }

    /// Apply gravity or ground handling for this frame's contact state.
    pub fn resolve_vertical_motion<M: CollisionMover + ?Sized>(
        &mut self,
        contact: GroundContact,
        dt: f32,
        mover: &mut M,
    ) -> VerticalPhase {
        let phase = VerticalPhase::from_contact(contact);
        self.record_transition(phase);

        match phase {
            VerticalPhase::Airborne => {
                self.state.velocity.y -= self.tuning.gravity * dt;
                if contact.ceiling_hit {
                    self.state.velocity = Vec3::ZERO;
                    mover.set_step_offset(StepOffset::Suspended);
                    tracing::debug!("ceiling hit, velocity zeroed and step offset suspended");
                    self.event_log.push(MotionEvent::CeilingHit);
                }
            }
            VerticalPhase::Grounded => {
                if mover.step_offset().is_suspended() {
                    let height = self.tuning.default_step_offset;
                    mover.set_step_offset(StepOffset::Active(height));
                    tracing::debug!(height, "step offset restored");
                    self.event_log
                        .push(MotionEvent::StepOffsetRestored { height });
                }
            }
        }

        self.phase = Some(phase);
        phase
    }

    /// Hand this frame's displacement to the mover. Returns the displacement.
    pub fn apply_final_movement<M: CollisionMover + ?Sized>(&self, dt: f32, mover: &mut M) -> Vec3 {
        let displacement = self.state.velocity * dt;
        mover.move_by(displacement);
        displacement
    }

    /// Drain the motion event log.
    pub fn drain_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the motion event log.
    pub fn events(&self) -> &[MotionEvent] {
        &self.event_log
    }

    /// Deterministic hash of the carried state, for replay comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let s = &self.state;
        for v in [
            s.velocity.x,
            s.velocity.y,
            s.velocity.z,
            s.camera_pitch,
            s.body_rotation.x,
            s.body_rotation.y,
            s.body_rotation.z,
            s.body_rotation.w,
        ] {
            mix(&mut h, &v.to_le_bytes());
        }
        mix(&mut h, &[s.sprinting as u8]);
        h
    }

    fn record_transition(&mut self, next: VerticalPhase) {
        match (self.phase, next) {
            (Some(VerticalPhase::Grounded), VerticalPhase::Airborne) => {
                tracing::trace!("left ground");
                self.event_log.push(MotionEvent::LeftGround);
            }
            (Some(VerticalPhase::Airborne), VerticalPhase::Grounded) => {
                let impact_speed = (-self.state.velocity.y).max(0.0);
                tracing::debug!(impact_speed, "landed");
                self.event_log.push(MotionEvent::Landed { impact_speed });
            }
            _ => {}
        }
    }
}
