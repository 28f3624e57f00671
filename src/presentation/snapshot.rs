//! Serializable engine snapshots for UI consumers.
//!
//! The UI layer (or any external sampler, e.g. a countdown animation loop)
//! reads engine state through these DTOs instead of touching domain types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::{ChartService, SimulationService};
use crate::domain::chart::VisibleWindow;
use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Candle;
use crate::log_debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleDto {
    pub time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&Candle> for CandleDto {
    fn from(candle: &Candle) -> Self {
        Self {
            time: candle.time.value(),
            open: candle.ohlc.open.value(),
            high: candle.ohlc.high.value(),
            low: candle.ohlc.low.value(),
            close: candle.ohlc.close.value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindowDto {
    pub symbol: String,
    pub timeframe: String,
    pub start_index: usize,
    pub end_index: usize,
    pub price_lo: f64,
    pub price_hi: f64,
    pub at_latest: bool,
    pub candles: Vec<CandleDto>,
}

impl VisibleWindowDto {
    pub fn from_window(symbol: &str, window: &VisibleWindow) -> Self {
        Self {
            symbol: symbol.to_string(),
            timeframe: window.timeframe.to_string(),
            start_index: window.start_index,
            end_index: window.end_index,
            price_lo: window.price_range.lo,
            price_hi: window.price_range.hi,
            at_latest: window.is_at_latest,
            candles: window.candles.iter().map(CandleDto::from).collect(),
        }
    }
}

/// One sampled view of the engine: every asset's latest price plus the
/// focused chart's visible window (absent when there is nothing to draw).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub now: u64,
    pub prices: BTreeMap<String, f64>,
    pub window: Option<VisibleWindowDto>,
}

impl EngineSnapshot {
    pub fn capture(
        now: u64,
        simulation: &SimulationService,
        chart_service: &ChartService,
    ) -> Self {
        let prices = simulation
            .assets()
            .iter()
            .map(|asset| (asset.symbol.value().to_string(), asset.current_price().value()))
            .collect();

        let symbol = chart_service.chart().symbol.clone();
        let window = simulation.asset(&symbol).and_then(|asset| {
            chart_service
                .visible_window(asset)
                .map(|window| VisibleWindowDto::from_window(symbol.value(), &window))
        });

        if window.is_none() {
            log_debug!(
                LogComponent::Presentation("Snapshot"),
                "no renderable window for {}",
                symbol
            );
        }

        Self { now, prices, window }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::SerializationError(e.to_string()))
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::SerializationError(e.to_string()))
    }
}
