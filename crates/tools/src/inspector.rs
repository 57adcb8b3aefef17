use strider_motion::{CameraRig, CharacterRig, CollisionMover, StepOffset, VerticalPhase};

/// Read-only queries against a rig for debugging and development output.
pub struct MotionInspector;

impl MotionInspector {
    /// Snapshot the controller and mover state.
    pub fn summary<M: CollisionMover, C: CameraRig>(rig: &CharacterRig<M, C>) -> MotionSummary {
        let controller = rig.controller();
        let v = controller.velocity();
        MotionSummary {
            tick: rig.ticks(),
            velocity: [v.x, v.y, v.z],
            horizontal_speed: glam::Vec2::new(v.x, v.z).length(),
            camera_pitch: controller.camera_pitch(),
            yaw: controller.yaw_degrees(),
            phase: controller.phase(),
            sprinting: controller.is_sprinting(),
            step_offset: rig.mover().step_offset(),
        }
    }
}

/// Summary of motion state for the inspector.
#[derive(Debug, Clone)]
pub struct MotionSummary {
    pub tick: u64,
    pub velocity: [f32; 3],
    pub horizontal_speed: f32,
    pub camera_pitch: f32,
    pub yaw: f32,
    /// `None` until the first frame has run.
    pub phase: Option<VerticalPhase>,
    pub sprinting: bool,
    pub step_offset: StepOffset,
}

impl std::fmt::Display for MotionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match self.phase {
            Some(VerticalPhase::Grounded) => "grounded",
            Some(VerticalPhase::Airborne) => "airborne",
            None => "idle",
        };
        let step = match self.step_offset {
            StepOffset::Active(h) => format!("{h:.2}"),
            StepOffset::Suspended => "suspended".to_string(),
        };
        write!(
            f,
            "Motion: tick={} {} vel=({:.2}, {:.2}, {:.2}) speed={:.2} pitch={:.1} yaw={:.1} sprint={} step={}",
            self.tick,
            phase,
            self.velocity[0],
            self.velocity[1],
            self.velocity[2],
            self.horizontal_speed,
            self.camera_pitch,
            self.yaw,
            self.sprinting,
            step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use strider_arena::{ArenaConfig, FlatArena, HeadCamera};
    use strider_input::{InputEvent, InputFrame, ScriptedInput};
    use strider_motion::{RigBuilder, TuningParameters};

    fn rig() -> CharacterRig<FlatArena, HeadCamera> {
        RigBuilder::new(TuningParameters::default())
            .mover(FlatArena::new(ArenaConfig::default()))
            .camera(HeadCamera::default())
            .build()
            .unwrap()
    }

    #[test]
    fn summary_before_first_frame() {
        let r = rig();
        let summary = MotionInspector::summary(&r);
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.phase, None);
        assert_eq!(summary.step_offset, StepOffset::Active(0.3));
        assert!(format!("{summary}").contains("idle"));
    }

    #[test]
    fn summary_after_sprinting_frame() {
        let mut r = rig();
        let mut input = ScriptedInput::new(vec![
            InputFrame::idle()
                .with_movement(Vec2::new(1.0, 0.0))
                .with_event(InputEvent::SprintPressed),
        ]);
        r.attach(&mut input).tick(0.1);

        let summary = MotionInspector::summary(&r);
        assert_eq!(summary.tick, 1);
        assert_eq!(summary.phase, Some(VerticalPhase::Grounded));
        assert!(summary.sprinting);
        assert!((summary.horizontal_speed - 8.0).abs() < 1e-5);
    }

    #[test]
    fn summary_display() {
        let s = format!("{}", MotionInspector::summary(&rig()));
        assert!(s.contains("tick=0"));
        assert!(s.contains("step=0.30"));
    }
}
