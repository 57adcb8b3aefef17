//! Input recordings: capture the frames a session consumed and play them back.
//!
//! The controller is deterministic with respect to its input and the mover's
//! responses, so replaying a recording into a fresh rig over the same world
//! reproduces every intermediate state hash.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strider_input::{InputFrame, ScriptedInput};

use crate::contact::{CameraRig, CollisionMover};
use crate::rig::CharacterRig;

/// Errors from reading or writing recordings.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One frame of recorded input with the timestep it ran at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub dt: f32,
    #[serde(flatten)]
    pub input: InputFrame,
}

/// Append-only sequence of recorded frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecording {
    pub frames: Vec<RecordedFrame>,
}

impl InputRecording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dt: f32, input: InputFrame) {
        self.frames.push(RecordedFrame { dt, input });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of every frame's timestep.
    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.dt).sum()
    }

    /// An input source that plays the recorded frames back in order.
    pub fn script(&self) -> ScriptedInput {
        ScriptedInput::new(self.frames.iter().map(|f| f.input.clone()).collect())
    }

    /// Drive `rig` through every recorded frame. Returns the controller's
    /// state hash after each frame.
    pub fn replay<M: CollisionMover, C: CameraRig>(
        &self,
        rig: &mut CharacterRig<M, C>,
    ) -> Vec<u64> {
        let _span = tracing::debug_span!("replay", frames = self.frames.len()).entered();
        let mut input = self.script();
        let mut session = rig.attach(&mut input);
        self.frames
            .iter()
            .map(|frame| {
                session.tick(frame.dt);
                session.rig().controller().state_hash()
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, RecordingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, RecordingError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordingError> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            frames = self.frames.len(),
            "saved recording"
        );
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}
