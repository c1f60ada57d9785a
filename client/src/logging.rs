use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Routes `tracing` output to the browser console. Only the first call
/// installs a subscriber.
pub fn init_logging(debug: bool) {
    let max_level = if debug { Level::TRACE } else { Level::INFO };
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .set_report_logs_in_timings(false)
        .build();
    let subscriber = tracing_subscriber::registry().with(WASMLayer::new(config));
    if tracing::subscriber::set_global_default(subscriber).is_err() && debug {
        web_sys::console::log_1(&"tracing subscriber already installed".into());
    }
}
