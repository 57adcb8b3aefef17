//! Tuning parameters: the entire configuration surface of the controller.
//!
//! Values are loaded once and never change while a rig is running. Ranges
//! are not validated: negative speeds or limits produce whatever motion the
//! arithmetic yields. `suspicious_fields` exists so hosts can log them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or encoding tuning files.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported tuning file format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Speeds are in units per second, look limits in degrees, look speeds in
/// degrees per unit of look axis, gravity in units per second squared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningParameters {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// How far the camera may pitch up, as a positive magnitude.
    pub upper_look_limit: f32,
    /// How far the camera may pitch down, as a positive magnitude.
    pub lower_look_limit: f32,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    /// Step offset the mover is restored to after a ceiling hit.
    pub default_step_offset: f32,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 8.0,
            upper_look_limit: 80.0,
            lower_look_limit: 80.0,
            horizontal_speed: 10.0,
            vertical_speed: 10.0,
            jump_force: 8.0,
            gravity: 30.0,
            default_step_offset: 0.3,
        }
    }
}

impl TuningParameters {
    /// Planar speed for the current sprint level.
    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    /// Clamp a pitch angle to `[-upper_look_limit, lower_look_limit]`.
    ///
    /// The lower bound is checked first, so inverted limits resolve to
    /// `-upper_look_limit` for low values instead of panicking.
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        if pitch < -self.upper_look_limit {
            -self.upper_look_limit
        } else if pitch > self.lower_look_limit {
            self.lower_look_limit
        } else {
            pitch
        }
    }

    /// Names of fields holding values outside their sensible range.
    pub fn suspicious_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("upper_look_limit", self.upper_look_limit),
            ("lower_look_limit", self.lower_look_limit),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
            ("default_step_offset", self.default_step_offset),
        ];
        checks
            .into_iter()
            .filter(|(_, v)| !v.is_finite() || *v < 0.0)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, TuningError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, TuningError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load tuning from a `.yaml`/`.yml` or `.json` file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let tuning = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(TuningError::UnsupportedFormat(path.to_path_buf())),
        };

        let suspicious = tuning.suspicious_fields();
        if !suspicious.is_empty() {
            tracing::warn!(
                path = %path.display(),
                ?suspicious,
                "tuning values out of range, loading as-is"
            );
        }
        tracing::debug!(path = %path.display(), "loaded tuning");
        Ok(tuning)
    }
}
