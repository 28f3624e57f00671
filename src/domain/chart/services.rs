//! Chart window derivation: visible slice, auto price range and crosshair
//! inversion. Read-only over the candle series; every output is a fresh
//! value.

use super::entities::{Chart, TradeMarker};
use super::value_objects::{PRICE_PAD, PlotGeometry, PlotTransform, PriceRange};
use crate::domain::market_data::{
    Candle, CandleSeries, IndicatorKind, IndicatorOutput, Price, Timeframe, Timestamp,
    compute_indicator,
};

/// Renderable view of one chart frame: the visible candles, the transforms
/// that place them, and the index-aligned indicator series.
#[derive(Debug, Clone)]
pub struct VisibleWindow {
    pub candles: Vec<Candle>,
    /// Absolute index of the first visible candle in the full series.
    pub start_index: usize,
    /// Absolute end index, exclusive.
    pub end_index: usize,
    pub price_range: PriceRange,
    pub transform: PlotTransform,
    pub timeframe: Timeframe,
    pub is_at_latest: bool,
    pub live_price: f64,
    /// Enabled indicators computed over the full series, aligned by absolute
    /// candle index.
    pub indicators: Vec<(IndicatorKind, IndicatorOutput)>,
    pub trade_marker: Option<TradeMarker>,
}

/// Crosshair lookup result: the candle under the cursor plus the price and
/// bucket time at the pointer position.
#[derive(Debug, Clone)]
pub struct CrosshairHit {
    /// Absolute index of the hovered candle.
    pub index: usize,
    pub candle: Candle,
    /// Price at the pointer's Y position.
    pub price: f64,
    /// Bucket time of the hovered candle.
    pub time: Timestamp,
    /// Snapped X center of the hovered candle slot.
    pub snap_x: f64,
}

/// Domain service - Chart window derivation
pub struct ChartWindowService;

impl ChartWindowService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the renderable window for one chart against its series.
    ///
    /// Returns `None` for an empty series - the explicit "nothing to draw"
    /// signal; all other degenerate cases (flat prices, single candle) are
    /// absorbed by the range guards.
    pub fn visible_window(
        &self,
        series: &CandleSeries,
        chart: &Chart,
        geometry: &PlotGeometry,
        live_price: Price,
    ) -> Option<VisibleWindow> {
        let total = series.len();
        if total == 0 {
            return None;
        }

        let (start, len) = chart.viewport.visible_bounds(total);
        let candles = series.slice(start, len);
        let is_at_latest = chart.viewport.is_at_latest(total);

        let closes = series.closes();
        let indicators: Vec<(IndicatorKind, IndicatorOutput)> = chart
            .indicators
            .iter()
            .map(|(kind, params)| (kind, compute_indicator(kind, params, &closes)))
            .collect();

        let price_range = auto_price_range(
            &candles,
            start,
            start + len,
            is_at_latest.then_some(live_price.value()),
            chart.trade_marker.as_ref(),
            &indicators,
        );

        let transform = PlotTransform::new(*geometry, price_range, len);

        Some(VisibleWindow {
            candles,
            start_index: start,
            end_index: start + len,
            price_range,
            transform,
            timeframe: chart.timeframe(),
            is_at_latest,
            live_price: live_price.value(),
            indicators,
            trade_marker: chart.trade_marker,
        })
    }

    /// Invert a pointer position into the hovered candle and price.
    pub fn crosshair(&self, window: &VisibleWindow, x: f64, y: f64) -> Option<CrosshairHit> {
        if window.candles.is_empty() {
            return None;
        }
        let local = window.transform.x_to_index(x).min(window.candles.len() - 1);
        let candle = window.candles[local].clone();
        Some(CrosshairHit {
            index: window.start_index + local,
            time: candle.time,
            price: window.transform.y_to_price(y),
            snap_x: window.transform.index_to_x(local),
            candle,
        })
    }
}

impl Default for ChartWindowService {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-ranged price bounds of the visible window: candle extremes, the live
/// price while following the feed, the trade entry marker and any visible
/// band values, padded so nothing touches the plot edges.
fn auto_price_range(
    candles: &[Candle],
    start: usize,
    end: usize,
    live_price: Option<f64>,
    trade_marker: Option<&TradeMarker>,
    indicators: &[(IndicatorKind, IndicatorOutput)],
) -> PriceRange {
    let mut range = match candles.first() {
        Some(first) => PriceRange::from_value(first.ohlc.close.value()),
        None => PriceRange::from_value(1.0),
    };

    for candle in candles {
        range.fold(candle.ohlc.low.value());
        range.fold(candle.ohlc.high.value());
    }

    if let Some(price) = live_price {
        range.fold(price);
    }

    if let Some(marker) = trade_marker {
        range.fold(marker.entry_price.value());
    }

    for (kind, output) in indicators {
        if *kind != IndicatorKind::Bollinger {
            continue;
        }
        for band in [&output.secondary, &output.tertiary].into_iter().flatten() {
            for value in band.iter().take(end).skip(start).flatten() {
                range.fold(*value);
            }
        }
    }

    range.padded(PRICE_PAD)
}
