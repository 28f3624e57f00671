//! Technical indicator library.
//!
//! Every function is pure, operates on a dense close-price sequence and
//! returns a series of the same length. Indices without enough lookback hold
//! `None` so indicator values stay aligned with their candles; a zero period
//! or a series shorter than the lookback yields an all-`None` series rather
//! than an error.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Indicator values aligned index-for-index with the close series.
pub type IndicatorSeries = Vec<Option<f64>>;

/// Value Object - Indicator identifier
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum IndicatorKind {
    #[strum(serialize = "sma")]
    #[serde(rename = "sma")]
    Sma,

    #[strum(serialize = "ema")]
    #[serde(rename = "ema")]
    Ema,

    #[strum(serialize = "bollinger")]
    #[serde(rename = "bollinger")]
    Bollinger,

    #[strum(serialize = "rsi")]
    #[serde(rename = "rsi")]
    Rsi,
}

impl IndicatorKind {
    pub fn default_params(self) -> IndicatorParams {
        match self {
            IndicatorKind::Sma => IndicatorParams { period: 20, band_mult: 2.0 },
            IndicatorKind::Ema => IndicatorParams { period: 12, band_mult: 2.0 },
            IndicatorKind::Bollinger => IndicatorParams { period: 20, band_mult: 2.0 },
            IndicatorKind::Rsi => IndicatorParams { period: 14, band_mult: 2.0 },
        }
    }

    /// Oscillators render on their own 0..100 panel instead of price space.
    pub fn is_oscillator(self) -> bool {
        matches!(self, IndicatorKind::Rsi)
    }
}

/// Parameters for an indicator computation. `band_mult` only matters for
/// Bollinger bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub period: usize,
    pub band_mult: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self { period: 20, band_mult: 2.0 }
    }
}

/// Output of an indicator computation. Multi-output indicators use
/// secondary/tertiary (Bollinger: upper/lower).
#[derive(Debug, Clone)]
pub struct IndicatorOutput {
    pub primary: IndicatorSeries,
    pub secondary: Option<IndicatorSeries>,
    pub tertiary: Option<IndicatorSeries>,
}

/// Compute an indicator series from close prices. Total over its input
/// domain: bad parameters degrade to all-`None`, never an error.
pub fn compute_indicator(
    kind: IndicatorKind,
    params: IndicatorParams,
    closes: &[f64],
) -> IndicatorOutput {
    match kind {
        IndicatorKind::Sma => IndicatorOutput {
            primary: sma(closes, params.period),
            secondary: None,
            tertiary: None,
        },
        IndicatorKind::Ema => IndicatorOutput {
            primary: ema(closes, params.period),
            secondary: None,
            tertiary: None,
        },
        IndicatorKind::Bollinger => {
            let bands = bollinger(closes, params.period, params.band_mult);
            IndicatorOutput {
                primary: bands.middle,
                secondary: Some(bands.upper),
                tertiary: Some(bands.lower),
            }
        }
        IndicatorKind::Rsi => IndicatorOutput {
            primary: rsi(closes, params.period),
            secondary: None,
            tertiary: None,
        },
    }
}

/// Simple Moving Average. Undefined before index `period - 1`.
pub fn sma(closes: &[f64], period: usize) -> IndicatorSeries {
    let len = closes.len();
    let mut out = vec![None; len];
    if period == 0 || len < period {
        return out;
    }
    let mut sum: f64 = closes[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);
    for i in period..len {
        sum += closes[i] - closes[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Exponential Moving Average, seeded with the SMA of the first `period`
/// values; thereafter `ema = close * k + prev * (1 - k)` with
/// `k = 2 / (period + 1)`.
pub fn ema(closes: &[f64], period: usize) -> IndicatorSeries {
    let len = closes.len();
    let mut out = vec![None; len];
    if period == 0 || len < period {
        return out;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut prev = closes[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(prev);
    for i in period..len {
        prev = closes[i] * k + prev * (1.0 - k);
        out[i] = Some(prev);
    }
    out
}

/// Bollinger band outputs, each aligned with the close series.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Bollinger bands: SMA middle, population standard deviation over the same
/// trailing window. Zero variance is valid and collapses both bands onto the
/// middle.
pub fn bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerBands {
    let len = closes.len();
    let middle = sma(closes, period);
    let mut upper = vec![None; len];
    let mut lower = vec![None; len];

    if period > 0 && len >= period {
        for i in (period - 1)..len {
            let Some(mean) = middle[i] else { continue };
            let window = &closes[i + 1 - period..=i];
            let variance =
                window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / period as f64;
            let std_dev = variance.sqrt();
            upper[i] = Some(mean + mult * std_dev);
            lower[i] = Some(mean - mult * std_dev);
        }
    }

    BollingerBands { upper, middle, lower }
}

/// Wilder's smoothed RSI. Undefined before index `period`. A window with no
/// losses saturates at 100 instead of dividing by zero.
pub fn rsi(closes: &[f64], period: usize) -> IndicatorSeries {
    let len = closes.len();
    let mut out = vec![None; len];
    if period == 0 || len < period + 1 {
        return out;
    }

    let mut gains = vec![0.0f64; len];
    let mut losses = vec![0.0f64; len];
    for i in 1..len {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    // Seed: simple mean of the first `period` changes.
    let mut avg_gain: f64 = gains[1..=period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[1..=period].iter().sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    // Wilder smoothing with factor 1/period.
    for i in (period + 1)..len {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
