//! Canned input scripts and arena layouts for the CLI.

use glam::{Vec2, Vec3};
use strider_arena::{ArenaConfig, FlatArena, HeadCamera, Platform};
use strider_input::{InputEvent, InputFrame};
use strider_motion::{CharacterRig, RigBuilder, TuningParameters};

/// Layout knobs exposed on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub ceiling: Option<f32>,
    pub step_height: f32,
}

/// Arena with a floor, one step-up platform ahead of the spawn, and an optional ceiling.
pub fn arena(layout: Layout, tuning: &TuningParameters) -> FlatArena {
    FlatArena::new(ArenaConfig {
        ceiling_height: layout.ceiling,
        platforms: vec![Platform {
            min: Vec2::new(-4.0, 4.0),
            max: Vec2::new(4.0, 8.0),
            height: layout.step_height,
        }],
        step_offset: tuning.default_step_offset,
        spawn: Vec3::ZERO,
        ..ArenaConfig::default()
    })
}

pub fn rig(
    tuning: TuningParameters,
    layout: Layout,
) -> Result<CharacterRig<FlatArena, HeadCamera>, strider_motion::SetupError> {
    let mover = arena(layout, &tuning);
    RigBuilder::new(tuning)
        .mover(mover)
        .camera(HeadCamera::default())
        .build()
}

/// Walk forward, jump early, sprint through the middle third, sweep the view
/// and jump again near the end.
pub fn walk_and_jump(ticks: usize) -> Vec<InputFrame> {
    let third = ticks / 3;
    (0..ticks)
        .map(|i| {
            let mut frame = InputFrame::idle().with_movement(Vec2::new(0.0, 1.0));
            if i == 5 || i + 20 == ticks {
                frame = frame.with_event(InputEvent::JumpPressed);
            }
            if i == third {
                frame = frame.with_event(InputEvent::SprintPressed);
            }
            if i == 2 * third {
                frame = frame.with_event(InputEvent::SprintReleased);
            }
            if i > 2 * third {
                let sweep = if (i / 15) % 2 == 0 { 0.2 } else { -0.2 };
                frame = frame.with_look(Vec2::new(0.3, sweep));
            }
            frame
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_has_requested_length_and_edges() {
        let frames = walk_and_jump(90);
        assert_eq!(frames.len(), 90);
        let jumps = frames
            .iter()
            .filter(|f| f.events.contains(&InputEvent::JumpPressed))
            .count();
        assert_eq!(jumps, 2);
        assert!(frames[30].events.contains(&InputEvent::SprintPressed));
        assert!(frames[60].events.contains(&InputEvent::SprintReleased));
    }

    #[test]
    fn arena_uses_tuned_step_offset() {
        use strider_motion::{CollisionMover, StepOffset};

        let tuning = TuningParameters {
            default_step_offset: 0.45,
            ..Default::default()
        };
        let a = arena(
            Layout {
                ceiling: None,
                step_height: 0.25,
            },
            &tuning,
        );
        assert_eq!(a.step_offset(), StepOffset::Active(0.45));
    }
}
