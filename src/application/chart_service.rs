//! Chart application service: one per on-screen chart instance. Routes
//! navigation input through the viewport reducer and answers window queries
//! against series it never mutates.

use crate::config::IndicatorDefaults;
use crate::domain::chart::{
    Chart, ChartWindowService, CrosshairHit, NavAction, PlotGeometry, TradeMarker, VisibleWindow,
    reduce,
};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{IndicatorKind, LiveAsset, Symbol, Timeframe};
use crate::log_debug;

/// Application service - Chart instance
pub struct ChartService {
    chart: Chart,
    geometry: PlotGeometry,
    window_service: ChartWindowService,
    indicator_defaults: IndicatorDefaults,
    drag_origin: Option<usize>,
}

impl ChartService {
    pub fn new(symbol: Symbol) -> Self {
        Self::with_config(symbol, PlotGeometry::default(), IndicatorDefaults::default())
    }

    pub fn with_config(
        symbol: Symbol,
        geometry: PlotGeometry,
        indicator_defaults: IndicatorDefaults,
    ) -> Self {
        Self {
            chart: Chart::new(symbol),
            geometry,
            window_service: ChartWindowService::new(),
            indicator_defaults,
            drag_origin: None,
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.geometry.width = width;
        self.geometry.height = height;
    }

    /// Switch the displayed timeframe; always snaps back to live.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.chart.set_timeframe(timeframe);
        log_debug!(
            LogComponent::Application("ChartService"),
            "{} timeframe -> {}",
            self.chart.symbol,
            timeframe
        );
    }

    /// Toggle an indicator with the configured default parameters. Returns
    /// whether it is enabled afterwards.
    pub fn toggle_indicator(&mut self, kind: IndicatorKind) -> bool {
        let params = self.indicator_defaults.params_for(kind);
        self.chart.indicators.toggle(kind, params)
    }

    pub fn set_trade_marker(&mut self, marker: Option<TradeMarker>) {
        self.chart.set_trade_marker(marker);
    }

    /// Apply a navigation action against the current history length.
    pub fn apply(&mut self, action: NavAction, total: usize) {
        self.chart.viewport = reduce(self.chart.viewport, action, total);
    }

    /// Record the drag anchor. Subsequent [`Self::drag_move`] calls resolve
    /// against this offset rather than accumulating per-frame deltas.
    pub fn begin_drag(&mut self, total: usize) {
        self.drag_origin = Some(self.chart.viewport.effective_offset(total));
    }

    /// Move the viewport for an in-flight drag by the total pixel delta
    /// since [`Self::begin_drag`].
    pub fn drag_move(&mut self, pixel_delta: f64, total: usize) {
        if let Some(origin_offset) = self.drag_origin {
            let visible = self.chart.viewport.visible_count().min(total.max(1));
            let candle_width = self.geometry.plot_width() / visible as f64;
            self.apply(
                NavAction::DragTo { origin_offset, pixel_delta, candle_width },
                total,
            );
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Derive the renderable window from the asset this chart displays.
    /// `None` means nothing to draw.
    pub fn visible_window(&self, asset: &LiveAsset) -> Option<VisibleWindow> {
        let series = asset.series(self.chart.timeframe())?;
        self.window_service.visible_window(
            series,
            &self.chart,
            &self.geometry,
            asset.current_price(),
        )
    }

    pub fn crosshair(&self, window: &VisibleWindow, x: f64, y: f64) -> Option<CrosshairHit> {
        self.window_service.crosshair(window, x, y)
    }
}
