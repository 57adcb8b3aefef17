use serde::{Deserialize, Serialize};

/// A discrete edge produced by the device layer.
///
/// Fired once when a button crosses its threshold. Sprint is driven as a
/// level by its press/release pair; jump only fires on press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    JumpPressed,
    SprintPressed,
    SprintReleased,
}

impl InputEvent {
    /// Sprint level implied by this edge, if it is a sprint edge.
    pub fn sprint_level(self) -> Option<bool> {
        match self {
            Self::SprintPressed => Some(true),
            Self::SprintReleased => Some(false),
            Self::JumpPressed => None,
        }
    }
}
