mod app;
mod dom;
mod input;
mod logging;
mod render;
mod state;

pub use app::{attach, attach_to_document, run, HANDLE_GLOBAL};
pub use dom::{debug_flag, load_config, CONFIG_ELEMENT_ID};
pub use input::{mouse_to_pointer_move, CanvasPointerSource, DocumentKeySource};
pub use logging::init_logging;
pub use render::CanvasSurface;
pub use state::{SharedTracker, TrackerHandle};
