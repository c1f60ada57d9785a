use serde::{Deserialize, Serialize};

use crate::StrokeStyle;

pub const DEFAULT_CANVAS_ID: &str = "input";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid tracker config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("canvas id must not be empty")]
    EmptyCanvasId,
    #[error("stroke color must not be empty")]
    EmptyColor,
    #[error("stroke width must be a positive number, got {0}")]
    InvalidWidth(f64),
}

/// Settings the host page can override before the tracker attaches.
///
/// Every field is optional in JSON; missing fields fall back to the
/// defaults (`input` canvas, 2 unit red stroke).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub canvas_id: String,
    pub style: StrokeStyle,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            style: StrokeStyle::default(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_id.trim().is_empty() {
            return Err(ConfigError::EmptyCanvasId);
        }
        if self.style.color.trim().is_empty() {
            return Err(ConfigError::EmptyColor);
        }
        if !self.style.width.is_finite() || self.style.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.style.width));
        }
        Ok(())
    }
}
