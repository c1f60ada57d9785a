use tracing::{debug, info, trace};

use crate::event::{KeyRelease, PointerMove};
use crate::surface::DrawingSurface;
use crate::{Point, StrokeStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathState {
    Idle,
    Tracing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    Ignored,
    PathStarted(Point),
    Segment { from: Point, to: Point },
}

/// Turns pointer samples into connected segments on a [`DrawingSurface`].
///
/// `path_open` decides whether a sample extends the current stroke or starts
/// a new one; Escape flips it. `drawing_enabled` pauses input entirely.
pub struct StrokeTracker<S> {
    surface: S,
    drawing_enabled: bool,
    path_open: bool,
    cursor: Option<Point>,
}

impl<S: DrawingSurface> StrokeTracker<S> {
    pub fn new(mut surface: S, style: &StrokeStyle) -> Self {
        surface.apply_style(style);
        Self {
            surface,
            drawing_enabled: true,
            path_open: false,
            cursor: None,
        }
    }

    pub fn on_pointer_move(&mut self, event: &PointerMove) -> PointerOutcome {
        if !self.drawing_enabled {
            return PointerOutcome::Ignored;
        }
        let point = event.local_point();
        if !point.is_finite() {
            return PointerOutcome::Ignored;
        }

        let outcome = match (self.path_open, self.cursor) {
            (true, Some(from)) => {
                self.surface.line_to(point);
                self.surface.stroke();
                trace!(
                    from.x = from.x,
                    from.y = from.y,
                    to.x = point.x,
                    to.y = point.y,
                    "segment"
                );
                PointerOutcome::Segment { from, to: point }
            }
            // Opened by a toggle before any sample: a line to nowhere only
            // sets the start point, same as lineTo on an empty canvas path.
            (true, None) | (false, _) => {
                self.surface.begin_path();
                self.surface.move_to(point);
                self.path_open = true;
                debug!(x = point.x, y = point.y, "path started");
                PointerOutcome::PathStarted(point)
            }
        };
        self.cursor = Some(point);
        outcome
    }

    /// Returns whether the key toggled the path state.
    pub fn on_key_up(&mut self, event: &KeyRelease) -> bool {
        if !event.is_escape() {
            return false;
        }
        self.path_open = !self.path_open;
        info!(path_open = self.path_open, "path toggled");
        true
    }

    pub fn enable(&mut self) {
        self.set_drawing_enabled(true);
    }

    pub fn disable(&mut self) {
        self.set_drawing_enabled(false);
    }

    /// Disabling pauses input, closes the open path and forgets the cursor,
    /// so the next enabled sample starts fresh even if Escape reopened the
    /// path meanwhile. Rendered pixels are left alone.
    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        if self.drawing_enabled == enabled {
            return;
        }
        self.drawing_enabled = enabled;
        if !enabled {
            self.path_open = false;
            self.cursor = None;
        }
        debug!(drawing_enabled = enabled, "drawing toggled");
    }

    pub fn drawing_enabled(&self) -> bool {
        self.drawing_enabled
    }

    pub fn path_open(&self) -> bool {
        self.path_open
    }

    pub fn path_state(&self) -> PathState {
        if self.path_open {
            PathState::Tracing
        } else {
            PathState::Idle
        }
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

}
