//! Pixel-space drawing instructions.
//!
//! The engine's rendering boundary: plain data a canvas, GPU or image
//! backend can consume unchanged. Vertex-like structs are `bytemuck` Pod so
//! a GPU consumer can upload them directly.

use bytemuck::{Pod, Zeroable};

use crate::domain::chart::{MinimapTransform, VisibleWindow};
use crate::domain::market_data::{CandleSeries, IndicatorKind};
use crate::time_utils::format_time_label;

/// Minimum rendered body height so dojis stay visible.
pub const MIN_BODY_HEIGHT: f64 = 1.0;

/// Attributes of a single candle for instanced drawing, in pixel space.
/// Y grows downward; `body_top` is the smaller coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CandleInstance {
    pub x: f32,
    pub width: f32,
    pub body_top: f32,
    pub body_bottom: f32,
    pub high_y: f32,
    pub low_y: f32,
    /// 1.0 for bullish, 0.0 for bearish
    pub bullish: f32,
    pub _padding: f32,
}

/// One polyline vertex in pixel space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
}

/// A price-space indicator polyline (SMA, EMA, Bollinger middle).
#[derive(Debug, Clone)]
pub struct IndicatorPolyline {
    pub kind: IndicatorKind,
    pub vertices: Vec<LineVertex>,
}

/// Oscillator polyline with Y normalized to 0..1 (0 = top of its panel);
/// the renderer places the panel.
#[derive(Debug, Clone)]
pub struct OscillatorStrip {
    pub kind: IndicatorKind,
    pub vertices: Vec<LineVertex>,
}

/// Bollinger band outlines in pixel space.
#[derive(Debug, Clone)]
pub struct BandInstructions {
    pub upper: Vec<LineVertex>,
    pub lower: Vec<LineVertex>,
}

/// Trade progress overlay: entry line plus countdown fraction.
#[derive(Debug, Clone, Copy)]
pub struct ProgressMarker {
    pub entry_y: f32,
    pub time_left_fraction: f32,
}

/// Overview strip over the entire series with the viewport rectangle.
#[derive(Debug, Clone)]
pub struct MinimapInstructions {
    pub width: f32,
    pub height: f32,
    pub polyline: Vec<LineVertex>,
    /// Pixel edges (x0, x1) of the highlighted viewport rectangle.
    pub view_rect: (f32, f32),
}

/// Time axis label anchored at a candle center.
#[derive(Debug, Clone)]
pub struct TimeLabel {
    pub x: f32,
    pub text: String,
}

/// Everything the render collaborator needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameInstructions {
    pub candles: Vec<CandleInstance>,
    pub indicator_lines: Vec<IndicatorPolyline>,
    pub oscillators: Vec<OscillatorStrip>,
    pub bands: Option<BandInstructions>,
    /// Live price line while the view follows the feed.
    pub price_line_y: Option<f32>,
    pub progress: Option<ProgressMarker>,
    pub minimap: Option<MinimapInstructions>,
    pub time_labels: Vec<TimeLabel>,
}

/// Infrastructure service - Frame builder
pub struct FrameBuilder {
    pub minimap_width: f64,
    pub minimap_height: f64,
}

impl FrameBuilder {
    pub fn new(minimap_width: f64, minimap_height: f64) -> Self {
        Self { minimap_width, minimap_height }
    }

    /// Translate a derived window (plus the full series for the minimap)
    /// into drawing instructions.
    pub fn build(&self, window: &VisibleWindow, series: &CandleSeries) -> FrameInstructions {
        let transform = &window.transform;

        let mut candles = Vec::with_capacity(window.candles.len());
        for (i, candle) in window.candles.iter().enumerate() {
            let open_y = transform.price_to_y(candle.ohlc.open.value());
            let close_y = transform.price_to_y(candle.ohlc.close.value());
            let body_top = open_y.min(close_y);
            let mut body_bottom = open_y.max(close_y);
            if body_bottom - body_top < MIN_BODY_HEIGHT {
                body_bottom = body_top + MIN_BODY_HEIGHT;
            }
            candles.push(CandleInstance {
                x: transform.index_to_x(i) as f32,
                width: transform.candle_width() as f32,
                body_top: body_top as f32,
                body_bottom: body_bottom as f32,
                high_y: transform.price_to_y(candle.ohlc.high.value()) as f32,
                low_y: transform.price_to_y(candle.ohlc.low.value()) as f32,
                bullish: if candle.is_bullish() { 1.0 } else { 0.0 },
                _padding: 0.0,
            });
        }

        let mut indicator_lines = Vec::new();
        let mut oscillators = Vec::new();
        let mut bands = None;
        for (kind, output) in &window.indicators {
            if kind.is_oscillator() {
                oscillators.push(OscillatorStrip {
                    kind: *kind,
                    vertices: self.oscillator_vertices(window, &output.primary),
                });
                continue;
            }
            indicator_lines.push(IndicatorPolyline {
                kind: *kind,
                vertices: self.price_vertices(window, &output.primary),
            });
            if *kind == IndicatorKind::Bollinger {
                if let (Some(upper), Some(lower)) = (&output.secondary, &output.tertiary) {
                    bands = Some(BandInstructions {
                        upper: self.price_vertices(window, upper),
                        lower: self.price_vertices(window, lower),
                    });
                }
            }
        }

        let price_line_y =
            window.is_at_latest.then(|| transform.price_to_y(window.live_price) as f32);

        let progress = window.trade_marker.map(|marker| ProgressMarker {
            entry_y: transform.price_to_y(marker.entry_price.value()) as f32,
            time_left_fraction: marker.time_left_fraction() as f32,
        });

        let minimap =
            MinimapTransform::from_series(series, self.minimap_width, self.minimap_height).map(
                |map| {
                    let polyline = series
                        .candles()
                        .iter()
                        .enumerate()
                        .map(|(i, candle)| LineVertex {
                            x: map.index_to_x(i) as f32,
                            y: map.price_to_y(candle.ohlc.close.value()) as f32,
                        })
                        .collect();
                    let rect = map.view_rect(
                        window.start_index,
                        window.end_index - window.start_index,
                    );
                    MinimapInstructions {
                        width: self.minimap_width as f32,
                        height: self.minimap_height as f32,
                        polyline,
                        view_rect: (rect.0 as f32, rect.1 as f32),
                    }
                },
            );

        let time_labels = self.time_labels(window);

        FrameInstructions {
            candles,
            indicator_lines,
            oscillators,
            bands,
            price_line_y,
            progress,
            minimap,
            time_labels,
        }
    }

    /// Visible vertices of a full-series indicator, mapped through the price
    /// transform. Undefined lookback indices simply produce no vertex.
    fn price_vertices(
        &self,
        window: &VisibleWindow,
        values: &[Option<f64>],
    ) -> Vec<LineVertex> {
        let transform = &window.transform;
        let mut vertices = Vec::new();
        for (local, absolute) in (window.start_index..window.end_index).enumerate() {
            if let Some(Some(value)) = values.get(absolute) {
                vertices.push(LineVertex {
                    x: transform.index_to_x(local) as f32,
                    y: transform.price_to_y(*value) as f32,
                });
            }
        }
        vertices
    }

    /// Oscillator vertices with Y mapped from 0..100 onto 1..0.
    fn oscillator_vertices(
        &self,
        window: &VisibleWindow,
        values: &[Option<f64>],
    ) -> Vec<LineVertex> {
        let transform = &window.transform;
        let mut vertices = Vec::new();
        for (local, absolute) in (window.start_index..window.end_index).enumerate() {
            if let Some(Some(value)) = values.get(absolute) {
                vertices.push(LineVertex {
                    x: transform.index_to_x(local) as f32,
                    y: (1.0 - (*value / 100.0).clamp(0.0, 1.0)) as f32,
                });
            }
        }
        vertices
    }

    /// A handful of evenly spaced bucket labels along the visible slice.
    fn time_labels(&self, window: &VisibleWindow) -> Vec<TimeLabel> {
        let len = window.candles.len();
        if len == 0 {
            return Vec::new();
        }
        let step = (len / 6).max(1);
        window
            .candles
            .iter()
            .enumerate()
            .step_by(step)
            .map(|(i, candle)| TimeLabel {
                x: window.transform.index_to_x(i) as f32,
                text: format_time_label(candle.time.value(), window.timeframe),
            })
            .collect()
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new(160.0, 40.0)
    }
}
