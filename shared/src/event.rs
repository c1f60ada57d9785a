use crate::Point;

pub const ESCAPE_KEY_CODE: u32 = 27;

/// A mouse movement sample in page coordinates, together with the page
/// offset of the surface it landed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub client_x: f64,
    pub client_y: f64,
    pub offset_left: f64,
    pub offset_top: f64,
}

impl PointerMove {
    pub fn new(client_x: f64, client_y: f64, offset_left: f64, offset_top: f64) -> Self {
        Self {
            client_x,
            client_y,
            offset_left,
            offset_top,
        }
    }

    pub fn local_point(&self) -> Point {
        Point {
            x: self.client_x - self.offset_left,
            y: self.client_y - self.offset_top,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyRelease {
    pub key_code: u32,
}

impl KeyRelease {
    pub fn new(key_code: u32) -> Self {
        Self { key_code }
    }

    pub fn is_escape(&self) -> bool {
        self.key_code == ESCAPE_KEY_CODE
    }
}
