use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use redpen_shared::{
    KeyEventSource, KeyHandler, KeyRelease, PointerEventSource, PointerHandler, PointerMove,
};

pub fn mouse_to_pointer_move(canvas: &HtmlCanvasElement, event: &MouseEvent) -> PointerMove {
    PointerMove::new(
        event.client_x() as f64,
        event.client_y() as f64,
        canvas.offset_left() as f64,
        canvas.offset_top() as f64,
    )
}

/// `mousemove` on the canvas.
pub struct CanvasPointerSource {
    canvas: HtmlCanvasElement,
}

impl CanvasPointerSource {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl PointerEventSource for CanvasPointerSource {
    type Error = JsValue;

    fn subscribe_pointer_move(&self, mut handler: PointerHandler) -> Result<(), JsValue> {
        let canvas = self.canvas.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            handler(mouse_to_pointer_move(&canvas, &event));
        });
        self.canvas
            .add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
        Ok(())
    }
}

/// `keyup` on the document.
pub struct DocumentKeySource {
    document: Document,
}

impl DocumentKeySource {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl KeyEventSource for DocumentKeySource {
    type Error = JsValue;

    fn subscribe_key_up(&self, mut handler: KeyHandler) -> Result<(), JsValue> {
        let onkeyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handler(KeyRelease::new(event.key_code()));
        });
        self.document
            .add_event_listener_with_callback("keyup", onkeyup.as_ref().unchecked_ref())?;
        onkeyup.forget();
        Ok(())
    }
}
