use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{KeyRelease, PointerMove};
use crate::source::{KeyEventSource, KeyHandler, PointerEventSource, PointerHandler};
use crate::surface::DrawingSurface;
use crate::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    StrokeColor(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn strokes(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Stroke).count()
    }

    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut current = None;
        let mut segments = Vec::new();
        for op in &self.ops {
            match op {
                Op::MoveTo(point) => current = Some(*point),
                Op::LineTo(point) => {
                    if let Some(from) = current {
                        segments.push((from, *point));
                    }
                    current = Some(*point);
                }
                _ => {}
            }
        }
        segments
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(Op::StrokeColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(Op::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(Op::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

/// Event source driven by hand from tests.
#[derive(Clone, Default)]
pub struct ManualSource {
    pointer: Rc<RefCell<Vec<PointerHandler>>>,
    keys: Rc<RefCell<Vec<KeyHandler>>>,
}

impl ManualSource {
    pub fn move_to(&self, event: PointerMove) {
        for handler in self.pointer.borrow_mut().iter_mut() {
            handler(event);
        }
    }

    pub fn key_up(&self, key_code: u32) {
        for handler in self.keys.borrow_mut().iter_mut() {
            handler(KeyRelease::new(key_code));
        }
    }
}

impl PointerEventSource for ManualSource {
    type Error = std::convert::Infallible;

    fn subscribe_pointer_move(&self, handler: PointerHandler) -> Result<(), Self::Error> {
        self.pointer.borrow_mut().push(handler);
        Ok(())
    }
}

impl KeyEventSource for ManualSource {
    type Error = std::convert::Infallible;

    fn subscribe_key_up(&self, handler: KeyHandler) -> Result<(), Self::Error> {
        self.keys.borrow_mut().push(handler);
        Ok(())
    }
}
