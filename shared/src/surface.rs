use crate::{Point, StrokeStyle};

/// Path construction primitives of a 2D drawing context.
///
/// The host owns the underlying context; implementors are usually cheap
/// handles onto it.
pub trait DrawingSurface {
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn stroke(&mut self);

    fn apply_style(&mut self, style: &StrokeStyle) {
        self.set_stroke_color(&style.color);
        self.set_line_width(style.width);
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn set_stroke_color(&mut self, color: &str) {
        (**self).set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, point: Point) {
        (**self).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        (**self).line_to(point);
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }
}
