use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement};

use redpen_shared::{StrokeTracker, TrackerConfig};

use crate::dom::{
    debug_enabled, document_ready_state, get_element, load_config, parse_config,
    window_and_document,
};
use crate::input::{CanvasPointerSource, DocumentKeySource};
use crate::logging::init_logging;
use crate::render::CanvasSurface;
use crate::state::{SharedTracker, TrackerHandle};

pub const HANDLE_GLOBAL: &str = "redpen";

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (window, document) = window_and_document()?;
    init_logging(debug_enabled(&window));
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() != Some("loading") {
        started.set(true);
        report_start(start_app());
        return Ok(());
    }

    let onready_started = started.clone();
    let onready = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onready_started.replace(true) {
            return;
        }
        report_start(start_app());
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())?;
    onready.forget();

    Ok(())
}

// A failed start leaves the page without input handling; the console
// message is the only trace of it.
fn report_start(result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

fn start_app() -> Result<(), JsValue> {
    let (window, document) = window_and_document()?;
    let debug = debug_enabled(&window);

    let config = load_config(&document)?;
    if debug {
        web_sys::console::log_1(
            &format!(
                "redpen starting canvas_id={} color={} width={}",
                config.canvas_id, config.style.color, config.style.width
            )
            .into(),
        );
    }

    let handle = attach_to_document(&document, &config)?;
    Reflect::set(
        window.as_ref(),
        &JsValue::from_str(HANDLE_GLOBAL),
        &JsValue::from(handle),
    )?;
    if debug {
        web_sys::console::log_1(
            &format!("redpen attached, handle at window.{HANDLE_GLOBAL}").into(),
        );
    }
    Ok(())
}

/// Attaches a tracker to the configured canvas of the current document.
/// `config_json` may omit any field; `None` uses the defaults.
#[wasm_bindgen]
pub fn attach(config_json: Option<String>) -> Result<TrackerHandle, JsValue> {
    let (_, document) = window_and_document()?;
    let config = match config_json {
        Some(text) => parse_config(&text)?,
        None => TrackerConfig::default(),
    };
    attach_to_document(&document, &config)
}

pub fn attach_to_document(
    document: &Document,
    config: &TrackerConfig,
) -> Result<TrackerHandle, JsValue> {
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let canvas: HtmlCanvasElement = get_element(document, &config.canvas_id)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let tracker: SharedTracker = Rc::new(RefCell::new(StrokeTracker::new(
        CanvasSurface::new(ctx),
        &config.style,
    )));
    redpen_shared::attach(
        &tracker,
        &CanvasPointerSource::new(canvas.clone()),
        &DocumentKeySource::new(document.clone()),
    )?;

    {
        let click_tracker = tracker.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            click_tracker.borrow_mut().enable();
        });
        canvas.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    tracing::debug!(canvas_id = %config.canvas_id, "tracker attached");
    Ok(TrackerHandle::new(tracker))
}
