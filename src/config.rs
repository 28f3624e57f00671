//! Engine configuration: every tunable the simulation and chart layers read.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::market_data::{IndicatorKind, IndicatorParams, Timeframe};

/// Per-asset feed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub symbol: String,
    pub base_price: f64,
    /// Symmetric relative shock bound per tick (e.g. 0.0008 = ±0.08%).
    pub volatility: f64,
}

impl AssetConfig {
    pub fn new(symbol: &str, base_price: f64, volatility: f64) -> Self {
        Self { symbol: symbol.to_string(), base_price, volatility }
    }
}

/// Default indicator periods, overridable per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorDefaults {
    pub sma_period: usize,
    pub ema_period: usize,
    pub bollinger_period: usize,
    pub bollinger_mult: f64,
    pub rsi_period: usize,
}

impl Default for IndicatorDefaults {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 12,
            bollinger_period: 20,
            bollinger_mult: 2.0,
            rsi_period: 14,
        }
    }
}

impl IndicatorDefaults {
    pub fn params_for(&self, kind: IndicatorKind) -> IndicatorParams {
        match kind {
            IndicatorKind::Sma => IndicatorParams { period: self.sma_period, band_mult: 1.0 },
            IndicatorKind::Ema => IndicatorParams { period: self.ema_period, band_mult: 1.0 },
            IndicatorKind::Bollinger => {
                IndicatorParams { period: self.bollinger_period, band_mult: self.bollinger_mult }
            }
            IndicatorKind::Rsi => IndicatorParams { period: self.rsi_period, band_mult: 1.0 },
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulation step interval driven by the embedder's timer.
    pub tick_interval_ms: u64,
    /// Rolling history cap per (asset, timeframe) series.
    pub candle_cap: usize,
    /// Timeframes every asset aggregates into.
    pub timeframes: Vec<Timeframe>,
    pub indicator_defaults: IndicatorDefaults,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub assets: Vec<AssetConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 800,
            candle_cap: 500,
            timeframes: vec![
                Timeframe::OneMinute,
                Timeframe::FiveMinutes,
                Timeframe::FifteenMinutes,
                Timeframe::ThirtyMinutes,
                Timeframe::OneHour,
            ],
            indicator_defaults: IndicatorDefaults::default(),
            seed: None,
            assets: vec![
                AssetConfig::new("BTCUSDT", 65_000.0, 0.0008),
                AssetConfig::new("ETHUSDT", 3_500.0, 0.0010),
                AssetConfig::new("SOLUSDT", 150.0, 0.0015),
                AssetConfig::new("XRPUSDT", 0.55, 0.0020),
            ],
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.candle_cap == 0 {
            return Err(EngineError::ConfigError("candle_cap must be positive".to_string()));
        }
        if self.timeframes.is_empty() {
            return Err(EngineError::ConfigError("at least one timeframe required".to_string()));
        }
        if self.assets.is_empty() {
            return Err(EngineError::ConfigError("at least one asset required".to_string()));
        }
        for asset in &self.assets {
            if asset.symbol.is_empty() {
                return Err(EngineError::ConfigError("asset symbol cannot be empty".to_string()));
            }
            if !(asset.base_price.is_finite() && asset.base_price > 0.0) {
                return Err(EngineError::ConfigError(format!(
                    "base price for {} must be positive",
                    asset.symbol
                )));
            }
            if !(asset.volatility.is_finite() && asset.volatility > 0.0) {
                return Err(EngineError::ConfigError(format!(
                    "volatility for {} must be positive",
                    asset.symbol
                )));
            }
        }
        Ok(())
    }
}
