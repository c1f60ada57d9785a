use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use redpen_shared::StrokeTracker;

use crate::render::CanvasSurface;

pub type SharedTracker = Rc<RefCell<StrokeTracker<CanvasSurface>>>;

/// JS-facing view of an attached tracker.
#[wasm_bindgen]
pub struct TrackerHandle {
    tracker: SharedTracker,
}

impl TrackerHandle {
    pub fn new(tracker: SharedTracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &SharedTracker {
        &self.tracker
    }
}

#[wasm_bindgen]
impl TrackerHandle {
    #[wasm_bindgen(js_name = setDrawingEnabled)]
    pub fn set_drawing_enabled(&self, enabled: bool) {
        self.tracker.borrow_mut().set_drawing_enabled(enabled);
    }

    #[wasm_bindgen(js_name = drawingEnabled)]
    pub fn drawing_enabled(&self) -> bool {
        self.tracker.borrow().drawing_enabled()
    }

    #[wasm_bindgen(js_name = pathOpen)]
    pub fn path_open(&self) -> bool {
        self.tracker.borrow().path_open()
    }
}
