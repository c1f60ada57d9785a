use serde::{Deserialize, Serialize};

pub mod config;
pub mod event;
pub mod source;
pub mod surface;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, TrackerConfig};
pub use event::{KeyRelease, PointerMove, ESCAPE_KEY_CODE};
pub use source::{attach, KeyEventSource, KeyHandler, PointerEventSource, PointerHandler};
pub use surface::DrawingSurface;
pub use tracker::{PathState, PointerOutcome, StrokeTracker};

pub const DEFAULT_STROKE_COLOR: &str = "#FF0000";
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR.to_string(),
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}
