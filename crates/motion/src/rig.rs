//! Wiring: the controller bound to its mover and camera, driven by an input session.

use glam::{Quat, Vec3};
use strider_input::{InputEvent, InputFrame, InputSource};

use crate::contact::{CameraRig, CollisionMover, GroundContact};
use crate::controller::{MotionController, MotionEvent, MotionState, VerticalPhase};
use crate::replay::InputRecording;
use crate::tuning::TuningParameters;

/// Fatal configuration errors detected while assembling a rig.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

/// Assembles a [`CharacterRig`] from explicitly supplied collaborators.
pub struct RigBuilder<M, C> {
    tuning: TuningParameters,
    mover: Option<M>,
    camera: Option<C>,
    body_rotation: Quat,
}

impl<M: CollisionMover, C: CameraRig> RigBuilder<M, C> {
    pub fn new(tuning: TuningParameters) -> Self {
        Self {
            tuning,
            mover: None,
            camera: None,
            body_rotation: Quat::IDENTITY,
        }
    }

    pub fn mover(mut self, mover: M) -> Self {
        self.mover = Some(mover);
        self
    }

    pub fn camera(mut self, camera: C) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Initial body orientation.
    pub fn facing(mut self, rotation: Quat) -> Self {
        self.body_rotation = rotation;
        self
    }

    /// Build the rig. Fails if the mover or the camera was never supplied.
    pub fn build(self) -> Result<CharacterRig<M, C>, SetupError> {
        let mover = self
            .mover
            .ok_or(SetupError::MissingCollaborator("collision mover"))?;
        let mut camera = self
            .camera
            .ok_or(SetupError::MissingCollaborator("camera"))?;

        let state = MotionState {
            body_rotation: self.body_rotation,
            ..MotionState::default()
        };
        let controller = MotionController::with_state(self.tuning, state);
        camera.set_local_pitch(strider_common::pitch_rotation(controller.camera_pitch()));

        tracing::info!("character rig assembled");
        Ok(CharacterRig {
            controller,
            mover,
            camera,
            ticks: 0,
        })
    }
}

/// A motion controller together with the mover and camera it drives.
pub struct CharacterRig<M, C> {
    controller: MotionController,
    mover: M,
    camera: C,
    ticks: u64,
}

/// What a single frame produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1.
    pub tick: u64,
    /// Displacement handed to the mover.
    pub displacement: Vec3,
    pub phase: VerticalPhase,
    pub camera_pitch: f32,
    /// Velocity after the frame.
    pub velocity: Vec3,
}

impl<M: CollisionMover, C: CameraRig> CharacterRig<M, C> {
    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Frames run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Attach an input source for the lifetime of the returned session.
    ///
    /// The source is enabled now and disabled when the session is dropped.
    pub fn attach<'a, S: InputSource + ?Sized>(
        &'a mut self,
        input: &'a mut S,
    ) -> InputSession<'a, M, C, S> {
        input.enable();
        tracing::debug!(tick = self.ticks, "input attached");
        InputSession { rig: self, input }
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::JumpPressed => {
                let grounded = self.mover.is_grounded();
                self.controller.on_jump_triggered(grounded);
            }
            InputEvent::SprintPressed => self.controller.set_sprinting(true),
            InputEvent::SprintReleased => self.controller.set_sprinting(false),
        }
    }

    fn step(&mut self, frame: &InputFrame, dt: f32) -> FrameReport {
        let _span = tracing::trace_span!("motion_frame", tick = self.ticks + 1).entered();

        for event in &frame.events {
            self.dispatch(*event);
        }

        let forward = self.controller.forward();
        let right = self.controller.right();
        self.controller
            .update_movement_intent(frame.movement, forward, right);

        let look = self.controller.update_look(frame.look);
        self.camera.set_local_pitch(look.pitch);

        let contact = GroundContact::from_mover(&self.mover);
        let phase = self
            .controller
            .resolve_vertical_motion(contact, dt, &mut self.mover);
        let displacement = self.controller.apply_final_movement(dt, &mut self.mover);

        self.ticks += 1;
        let report = FrameReport {
            tick: self.ticks,
            displacement,
            phase,
            camera_pitch: self.controller.camera_pitch(),
            velocity: self.controller.velocity(),
        };
        tracing::trace!(
            phase = ?report.phase,
            displacement = ?report.displacement,
            "frame complete"
        );
        report
    }
}

/// An input source bound to a rig.
///
/// Holding the session is what keeps the source attached: dropping it
/// disables the source and releases both borrows.
pub struct InputSession<'a, M: CollisionMover, C: CameraRig, S: InputSource + ?Sized> {
    rig: &'a mut CharacterRig<M, C>,
    input: &'a mut S,
}

impl<M: CollisionMover, C: CameraRig, S: InputSource + ?Sized> InputSession<'_, M, C, S> {
    /// Run one frame: edge events, movement intent, look, vertical resolution, move.
    pub fn tick(&mut self, dt: f32) -> FrameReport {
        let frame = self.poll();
        self.rig.step(&frame, dt)
    }

    /// Run one frame and append the input it consumed to `recording`.
    pub fn tick_recorded(&mut self, dt: f32, recording: &mut InputRecording) -> FrameReport {
        let frame = self.poll();
        let report = self.rig.step(&frame, dt);
        recording.push(dt, frame);
        report
    }

    pub fn rig(&self) -> &CharacterRig<M, C> {
        self.rig
    }

    /// Drain the controller's motion event log mid-session.
    pub fn drain_motion_events(&mut self) -> Vec<MotionEvent> {
        self.rig.controller.drain_events()
    }

    fn poll(&mut self) -> InputFrame {
        let events = self.input.drain_events();
        InputFrame {
            movement: self.input.movement_axis(),
            look: self.input.look_axis(),
            events,
        }
    }
}

impl<M: CollisionMover, C: CameraRig, S: InputSource + ?Sized> Drop for InputSession<'_, M, C, S> {
    fn drop(&mut self) {
        self.input.disable();
        tracing::debug!(tick = self.rig.ticks, "input detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{CollisionFlags, StepOffset};
    use glam::Vec2;
    use strider_input::ScriptedInput;

    #[derive(Default)]
    struct Floor {
        moves: Vec<Vec3>,
    }

    impl CollisionMover for Floor {
        fn is_grounded(&self) -> bool {
            true
        }
        fn collision_flags(&self) -> CollisionFlags {
            CollisionFlags::BELOW
        }
        fn move_by(&mut self, displacement: Vec3) {
            self.moves.push(displacement);
        }
        fn step_offset(&self) -> StepOffset {
            StepOffset::Active(0.3)
        }
        fn set_step_offset(&mut self, _: StepOffset) {}
    }

    #[derive(Default)]
    struct Camera {
        pitch: Option<Quat>,
    }

    impl CameraRig for Camera {
        fn set_local_pitch(&mut self, rotation: Quat) {
            self.pitch = Some(rotation);
        }
    }

    fn rig() -> CharacterRig<Floor, Camera> {
        RigBuilder::new(TuningParameters::default())
            .mover(Floor::default())
            .camera(Camera::default())
            .build()
            .unwrap()
    }

    #[test]
    fn missing_mover_is_a_setup_error() {
        let result = RigBuilder::<Floor, Camera>::new(TuningParameters::default())
            .camera(Camera::default())
            .build();
        assert!(matches!(
            result,
            Err(SetupError::MissingCollaborator("collision mover"))
        ));
    }

    #[test]
    fn missing_camera_is_a_setup_error() {
        let result = RigBuilder::<Floor, Camera>::new(TuningParameters::default())
            .mover(Floor::default())
            .build();
        assert!(matches!(result, Err(SetupError::MissingCollaborator("camera"))));
    }

    #[test]
    fn build_sets_initial_camera_pitch() {
        let r = rig();
        assert_eq!(r.camera().pitch, Some(Quat::IDENTITY));
        assert_eq!(r.ticks(), 0);
    }

    #[test]
    fn session_enables_and_disables_input() {
        let mut r = rig();
        let mut input = ScriptedInput::new(vec![InputFrame::idle()]);
        {
            let mut session = r.attach(&mut input);
            session.tick(0.1);
            assert_eq!(session.rig().ticks(), 1);
        }
        assert!(!input.is_enabled());
    }

    #[test]
    fn tick_moves_once_per_frame() {
        let mut r = rig();
        let mut input = ScriptedInput::new(vec![
            InputFrame::idle().with_movement(Vec2::Y),
            InputFrame::idle().with_movement(Vec2::Y),
        ]);
        let mut session = r.attach(&mut input);
        let report = session.tick(0.5);
        session.tick(0.5);
        drop(session);

        assert_eq!(report.tick, 1);
        assert_eq!(report.displacement, Vec3::new(0.0, 0.0, 2.5));
        assert_eq!(report.phase, VerticalPhase::Grounded);
        assert_eq!(r.mover().moves.len(), 2);
    }

    #[test]
    fn facing_orients_movement() {
        let mut r = RigBuilder::new(TuningParameters::default())
            .mover(Floor::default())
            .camera(Camera::default())
            .facing(strider_common::yaw_rotation(90.0))
            .build()
            .unwrap();
        let mut input = ScriptedInput::new(vec![InputFrame::idle().with_movement(Vec2::Y)]);
        let report = r.attach(&mut input).tick(1.0);
        assert!(report.displacement.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn look_pushes_pitch_to_camera() {
        let mut r = rig();
        let mut input =
            ScriptedInput::new(vec![InputFrame::idle().with_look(Vec2::new(0.0, 2.0))]);
        let report = r.attach(&mut input).tick(0.016);
        assert_eq!(report.camera_pitch, -20.0);
        let expected = strider_common::pitch_rotation(-20.0);
        assert!(r.camera().pitch.unwrap().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn recorded_ticks_capture_input() {
        let mut r = rig();
        let mut input = ScriptedInput::new(vec![
            InputFrame::idle().with_event(InputEvent::SprintPressed),
        ]);
        let mut recording = InputRecording::new();
        r.attach(&mut input).tick_recorded(0.25, &mut recording);

        assert_eq!(recording.len(), 1);
        assert_eq!(recording.frames[0].dt, 0.25);
        assert_eq!(recording.frames[0].input.events, vec![InputEvent::SprintPressed]);
        assert!(r.controller().is_sprinting());
    }
}
