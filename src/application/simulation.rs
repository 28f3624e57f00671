//! Simulation service: the single driver of tick generation and candle
//! aggregation.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::EngineConfig;
use crate::domain::errors::EngineResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    CandleSeries, LiveAsset, Price, Symbol, TickGenerator, Timeframe, Timestamp, seed_history,
};
use crate::log_info;

/// Result of one simulation step.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub updated_prices: HashMap<Symbol, f64>,
    /// Every (asset, timeframe) series touched by this step; read the series
    /// back through [`SimulationService::series`].
    pub updated_series: Vec<(Symbol, Timeframe)>,
}

/// Application service - Market simulation
///
/// Owns every [`LiveAsset`] and its tick generator. `tick` is strictly
/// sequential: all prices are generated first, then each asset fans its
/// price out into all of its timeframe series, so no reader can observe a
/// partially updated step.
pub struct SimulationService {
    config: EngineConfig,
    assets: Vec<LiveAsset>,
    feeds: HashMap<Symbol, TickGenerator>,
}

impl SimulationService {
    /// Build all assets with history seeded backward from `now`.
    pub fn new(config: EngineConfig, now: Timestamp) -> EngineResult<Self> {
        config.validate()?;

        let mut master = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut assets = Vec::with_capacity(config.assets.len());
        let mut feeds = HashMap::new();

        for asset_config in &config.assets {
            let symbol = Symbol::new(asset_config.symbol.clone())?;
            let mut seeder = StdRng::seed_from_u64(master.next_u64());

            let mut series_by_timeframe = HashMap::new();
            for timeframe in &config.timeframes {
                let series = seed_history(
                    &mut seeder,
                    asset_config.base_price,
                    asset_config.volatility,
                    *timeframe,
                    config.candle_cap,
                    now,
                );
                series_by_timeframe.insert(*timeframe, series);
            }

            feeds.insert(
                symbol.clone(),
                TickGenerator::new(master.next_u64(), asset_config.volatility),
            );
            assets.push(LiveAsset::new(
                symbol,
                Price::from(asset_config.base_price),
                series_by_timeframe,
            ));
        }

        log_info!(
            LogComponent::Application("Simulation"),
            "seeded {} assets x {} timeframes with {} candles each",
            assets.len(),
            config.timeframes.len(),
            config.candle_cap
        );

        Ok(Self { config, assets, feeds })
    }

    /// Advance the simulation by one step at `now`.
    pub fn tick(&mut self, now: Timestamp) -> TickReport {
        // Phase 1: every asset's next price, before any aggregation reads it.
        let mut next_prices = Vec::with_capacity(self.assets.len());
        for asset in &self.assets {
            let price = match self.feeds.get_mut(&asset.symbol) {
                Some(feed) => feed.next_price(asset.current_price()),
                None => asset.current_price(),
            };
            next_prices.push(price);
        }

        // Phase 2: fan out into all timeframe series, asset by asset.
        let mut updated_prices = HashMap::with_capacity(self.assets.len());
        let mut updated_series =
            Vec::with_capacity(self.assets.len() * self.config.timeframes.len());
        for (asset, price) in self.assets.iter_mut().zip(next_prices) {
            asset.apply_tick(price, now);
            updated_prices.insert(asset.symbol.clone(), asset.current_price().value());
            for timeframe in &self.config.timeframes {
                updated_series.push((asset.symbol.clone(), *timeframe));
            }
        }

        TickReport { updated_prices, updated_series }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn assets(&self) -> &[LiveAsset] {
        &self.assets
    }

    pub fn asset(&self, symbol: &Symbol) -> Option<&LiveAsset> {
        self.assets.iter().find(|asset| &asset.symbol == symbol)
    }

    pub fn series(&self, symbol: &Symbol, timeframe: Timeframe) -> Option<&CandleSeries> {
        self.asset(symbol)?.series(timeframe)
    }
}
