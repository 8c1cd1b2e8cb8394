use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Wire the ambient services before anything renders: panic messages to
/// the console, browser clock for log timestamps, and the bridge logger
/// feeding both the console and the on-page debug panel.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));
    domain::logging::init_logger(Box::new(app::SignalLogger::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🛡️ Crypto Guardian initialized");
}
