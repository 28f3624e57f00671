//! Synthetic multi-asset price feed with a navigable candlestick chart
//! engine: tick generation, multi-timeframe candle aggregation, technical
//! indicators and the viewport/transform math that turns an unbounded
//! history into pixel-space drawing instructions.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

use crate::domain::logging::LogComponent;

/// Install the engine's logging sink. Safe to call more than once; later
/// calls are ignored.
pub fn initialize() {
    let logger = Box::new(infrastructure::logging::TracingLogger::new_development());
    domain::logging::init_logger(logger);
    crate::log_info!(LogComponent::Presentation("Initialize"), "engine initialized");
}
