pub mod config;
pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use config::{DashboardConfig, FallbackPolicy};
pub use service::DashboardHandler;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated. Logging is installed later,
/// when the handler knows the configured level.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
