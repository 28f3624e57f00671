use std::collections::BTreeMap;

use super::viewport::ViewportState;
use crate::domain::market_data::{IndicatorKind, IndicatorParams, Price, Symbol, Timeframe};

/// Value Object - Enabled indicator set
///
/// Purely a display toggle; duplicate-free and iterated in a stable order so
/// derived output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSelection {
    enabled: BTreeMap<IndicatorKind, IndicatorParams>,
}

impl IndicatorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an indicator on/off. Returns whether it is enabled afterwards.
    pub fn toggle(&mut self, kind: IndicatorKind, params: IndicatorParams) -> bool {
        if self.enabled.remove(&kind).is_some() {
            false
        } else {
            self.enabled.insert(kind, params);
            true
        }
    }

    pub fn enable(&mut self, kind: IndicatorKind, params: IndicatorParams) {
        self.enabled.insert(kind, params);
    }

    pub fn disable(&mut self, kind: IndicatorKind) {
        self.enabled.remove(&kind);
    }

    pub fn is_enabled(&self, kind: IndicatorKind) -> bool {
        self.enabled.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndicatorKind, IndicatorParams)> + '_ {
        self.enabled.iter().map(|(kind, params)| (*kind, *params))
    }
}

/// Value Object - Trade progress overlay input
///
/// Supplied by the settlement collaborator; the chart only folds the entry
/// price into auto-ranging and passes the countdown fraction through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeMarker {
    pub entry_price: Price,
    time_left: f64,
}

impl TradeMarker {
    pub fn new(entry_price: Price, time_left_fraction: f64) -> Self {
        let time_left =
            if time_left_fraction.is_finite() { time_left_fraction.clamp(0.0, 1.0) } else { 0.0 };
        Self { entry_price, time_left }
    }

    pub fn time_left_fraction(&self) -> f64 {
        self.time_left
    }
}

/// Domain entity - Chart
///
/// One chart instance: which asset and timeframe it displays, its viewport,
/// its indicator toggles and the optional trade overlay. The candle data
/// itself stays with the aggregator; the chart never owns or mutates it.
#[derive(Debug, Clone)]
pub struct Chart {
    pub symbol: Symbol,
    timeframe: Timeframe,
    pub viewport: ViewportState,
    pub indicators: IndicatorSelection,
    pub trade_marker: Option<TradeMarker>,
}

impl Chart {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            timeframe: Timeframe::OneMinute,
            viewport: ViewportState::default(),
            indicators: IndicatorSelection::new(),
            trade_marker: None,
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Switch timeframe. Always snaps back to live (offset 0) while keeping
    /// the zoom step.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if timeframe != self.timeframe {
            self.timeframe = timeframe;
            self.viewport = self.viewport.go_to_latest();
        }
    }

    pub fn set_trade_marker(&mut self, marker: Option<TradeMarker>) {
        self.trade_marker = marker;
    }
}
