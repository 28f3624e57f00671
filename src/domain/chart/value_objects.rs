//! Plot-space value objects: geometry, auto-ranged price bounds and the
//! affine transforms between data space and pixel space.

use serde::{Deserialize, Serialize};

use crate::domain::market_data::CandleSeries;

/// Ratio of a candle slot left empty between neighbouring candles.
pub const SPACING_RATIO: f64 = 0.2;
/// Minimum candle body width in pixels.
pub const MIN_CANDLE_WIDTH: f64 = 1.0;
/// Multiplicative padding applied to the auto price range (±0.1%).
pub const PRICE_PAD: f64 = 0.001;

/// Value Object - Plot geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin_left: 8.0,
            // Price axis on the right, time axis at the bottom.
            margin_right: 64.0,
            margin_top: 8.0,
            margin_bottom: 24.0,
        }
    }
}

impl PlotGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(1.0)
    }

    pub fn plot_right(&self) -> f64 {
        self.plot_left() + self.plot_width()
    }

    pub fn plot_bottom(&self) -> f64 {
        self.plot_top() + self.plot_height()
    }
}

/// Value Object - Price range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriceRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo <= hi { Self { lo, hi } } else { Self { lo: hi, hi: lo } }
    }

    pub fn from_value(value: f64) -> Self {
        Self { lo: value, hi: value }
    }

    /// Widen the range to include `value`. Non-finite values are ignored.
    pub fn fold(&mut self, value: f64) {
        if value.is_finite() {
            self.lo = self.lo.min(value);
            self.hi = self.hi.max(value);
        }
    }

    /// Multiplicative padding keeping candles off the plot edges.
    pub fn padded(self, fraction: f64) -> Self {
        Self { lo: self.lo * (1.0 - fraction), hi: self.hi * (1.0 + fraction) }
    }

    /// Range span with the degenerate-range guard: a flat window spans 1.0
    /// instead of dividing by zero.
    pub fn span(&self) -> f64 {
        let span = self.hi - self.lo;
        if span > 0.0 { span } else { 1.0 }
    }
}

/// Value Object - Plot transform
///
/// Affine maps between the visible slice and pixel space. `price_to_y` /
/// `y_to_price` are mutual inverses over the price range; `x_to_index` is the
/// rounded, clamped inverse of `index_to_x` used for crosshair lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    pub geometry: PlotGeometry,
    pub range: PriceRange,
    pub visible_len: usize,
}

impl PlotTransform {
    pub fn new(geometry: PlotGeometry, range: PriceRange, visible_len: usize) -> Self {
        Self { geometry, range, visible_len: visible_len.max(1) }
    }

    /// Horizontal size of one candle slot.
    pub fn candle_step(&self) -> f64 {
        self.geometry.plot_width() / self.visible_len as f64
    }

    /// Drawn candle width after spacing.
    pub fn candle_width(&self) -> f64 {
        (self.candle_step() * (1.0 - SPACING_RATIO)).max(MIN_CANDLE_WIDTH)
    }

    /// Center X of the visible slot `index`.
    pub fn index_to_x(&self, index: usize) -> f64 {
        self.geometry.plot_left() + (index as f64 + 0.5) * self.candle_step()
    }

    /// Rounded inverse of [`Self::index_to_x`], clamped to the slice bounds.
    pub fn x_to_index(&self, x: f64) -> usize {
        let raw = ((x - self.geometry.plot_left()) / self.candle_step() - 0.5).round();
        let clamped = raw.max(0.0) as usize;
        clamped.min(self.visible_len - 1)
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        self.geometry.plot_top()
            + (self.range.hi - price) / self.range.span() * self.geometry.plot_height()
    }

    pub fn y_to_price(&self, y: f64) -> f64 {
        self.range.hi - (y - self.geometry.plot_top()) / self.geometry.plot_height() * self.range.span()
    }
}

/// Value Object - Minimap transform
///
/// Independent affine map over the entire series used for the overview strip
/// and its highlighted viewport rectangle. Same source series as the main
/// transform, independently scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapTransform {
    pub width: f64,
    pub height: f64,
    pub total: usize,
    pub range: PriceRange,
}

impl MinimapTransform {
    /// `None` when the series is empty - nothing to draw.
    pub fn from_series(series: &CandleSeries, width: f64, height: f64) -> Option<Self> {
        let (lo, hi) = series.price_range()?;
        Some(Self { width, height, total: series.len(), range: PriceRange::new(lo, hi) })
    }

    pub fn index_to_x(&self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.width / self.total.max(1) as f64
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        (self.range.hi - price) / self.range.span() * self.height
    }

    /// Pixel edges `(x0, x1)` of the viewport rectangle for the visible
    /// slice `[start, start + len)`.
    pub fn view_rect(&self, start: usize, len: usize) -> (f64, f64) {
        let per_candle = self.width / self.total.max(1) as f64;
        (start as f64 * per_candle, (start + len) as f64 * per_candle)
    }
}
