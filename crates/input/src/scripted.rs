use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{EdgeLatch, InputEvent, InputSource};

/// One frame of device state: both axes plus the edges fired during the frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub movement: Vec2,
    pub look: Vec2,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    /// A frame with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_look(mut self, look: Vec2) -> Self {
        self.look = look;
        self
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// Input source that plays back a fixed list of frames.
///
/// Each `drain_events` call starts the next frame: its edges are latched and
/// returned, and its axes become the values read until the following call.
/// Once the script is exhausted the axes of the last frame are held and no
/// further scripted edges fire. Edges pushed with [`ScriptedInput::push_event`]
/// are delivered on the next drain, after the frame's own edges.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    cursor: usize,
    current: InputFrame,
    latch: EdgeLatch,
    enabled: bool,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Deliver an edge outside the script, as a device callback would.
    pub fn push_event(&mut self, event: InputEvent) {
        if self.enabled {
            self.latch.push(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Frames not yet started.
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn movement_axis(&self) -> Vec2 {
        if self.enabled {
            self.current.movement
        } else {
            Vec2::ZERO
        }
    }

    fn look_axis(&self) -> Vec2 {
        if self.enabled {
            self.current.look
        } else {
            Vec2::ZERO
        }
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        if !self.enabled {
            return Vec::new();
        }
        let deferred = self.latch.drain();
        if let Some(frame) = self.frames.get(self.cursor) {
            self.current = frame.clone();
            self.cursor += 1;
            for event in &self.current.events {
                self.latch.push(*event);
            }
        } else {
            self.current.events.clear();
        }
        for event in deferred {
            self.latch.push(event);
        }
        self.latch.drain()
    }

    fn enable(&mut self) {
        tracing::debug!(frames = self.frames.len(), "scripted input enabled");
        self.enabled = true;
    }

    fn disable(&mut self) {
        tracing::debug!(cursor = self.cursor, "scripted input disabled");
        self.enabled = false;
        self.latch.clear();
    }
}
