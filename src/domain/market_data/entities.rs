use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

pub use super::value_objects::{Ohlc, Price, Symbol, Timeframe, Timestamp};

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: Timestamp,
    pub ohlc: Ohlc,
}

impl Candle {
    pub fn new(time: Timestamp, ohlc: Ohlc) -> Self {
        Self { time, ohlc }
    }

    /// Flat candle where every price equals `price` (skipped-bucket filler).
    pub fn flat(time: Timestamp, price: Price) -> Self {
        Self { time, ohlc: Ohlc::new(price, price, price, price) }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlc.close >= self.ohlc.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlc.close < self.ohlc.open
    }

    pub fn body_size(&self) -> Price {
        Price::from((self.ohlc.close.value() - self.ohlc.open.value()).abs())
    }
}

/// Domain entity - Candle series
///
/// Bounded rolling history for one (asset, timeframe) pair. The aggregation
/// path is the only writer; every other component reads it and derives fresh
/// values.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    candles: VecDeque<Candle>,
    cap: usize,
}

impl CandleSeries {
    pub fn new(cap: usize) -> Self {
        Self { candles: VecDeque::with_capacity(cap.min(4096)), cap }
    }

    /// Append a pre-built candle (history seeding), evicting from the front
    /// once the cap is exceeded.
    pub fn push(&mut self, candle: Candle) {
        self.candles.push_back(candle);
        while self.candles.len() > self.cap {
            self.candles.pop_front();
        }
    }

    /// Fold one tick into the series for the given timeframe.
    ///
    /// The tick either extends the candle of its bucket in place or opens a
    /// new candle at the previous close. Buckets skipped between the last
    /// candle and the tick are filled with flat candles so `time` values stay
    /// contiguous at exactly one period per candle.
    pub fn apply_tick(&mut self, price: Price, timestamp: Timestamp, timeframe: Timeframe) {
        let period_ms = timeframe.duration_ms();
        let bucket = timestamp.align_to(period_ms);

        if let Some(last) = self.candles.back_mut() {
            // A tick for the current bucket extends the candle in place; a
            // late tick behind it folds into the last candle the same way so
            // the OHLC invariant survives clock jitter.
            if bucket <= last.time {
                if price > last.ohlc.high {
                    last.ohlc.high = price;
                }
                if price < last.ohlc.low {
                    last.ohlc.low = price;
                }
                last.ohlc.close = price;
                return;
            }
        }

        let prev_close = self.candles.back().map(|c| c.ohlc.close).unwrap_or(price);

        if let Some(last_time) = self.candles.back().map(|c| c.time.value()) {
            let mut t = last_time + period_ms;
            while t < bucket.value() {
                self.push(Candle::flat(Timestamp::from_millis(t), prev_close));
                t += period_ms;
            }
        }

        let open = prev_close;
        let high = if price > open { price } else { open };
        let low = if price < open { price } else { open };
        self.push(Candle::new(bucket, Ohlc::new(open, high, low, price)));
    }

    pub fn candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Maximum number of candles retained
    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// Fresh copy of `len` candles starting at `start`, clipped to bounds.
    pub fn slice(&self, start: usize, len: usize) -> Vec<Candle> {
        self.candles.iter().skip(start).take(len).cloned().collect()
    }

    /// Dense close-price sequence, one entry per candle index.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.ohlc.close.value()).collect()
    }

    /// Get the (low, high) price range over all candles
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.candles.is_empty() {
            return None;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for candle in &self.candles {
            lo = lo.min(candle.ohlc.low.value());
            hi = hi.max(candle.ohlc.high.value());
        }
        Some((lo, hi))
    }
}

/// Domain entity - Live asset
///
/// One per tradable asset: the current simulated price plus the rolling
/// candle history for every configured timeframe. Created once at startup
/// with seeded history and mutated in place on every simulation step.
#[derive(Debug, Clone)]
pub struct LiveAsset {
    pub symbol: Symbol,
    current_price: Price,
    series_by_timeframe: HashMap<Timeframe, CandleSeries>,
}

impl LiveAsset {
    pub fn new(
        symbol: Symbol,
        current_price: Price,
        series_by_timeframe: HashMap<Timeframe, CandleSeries>,
    ) -> Self {
        Self { symbol, current_price, series_by_timeframe }
    }

    pub fn current_price(&self) -> Price {
        self.current_price
    }

    pub fn series(&self, timeframe: Timeframe) -> Option<&CandleSeries> {
        self.series_by_timeframe.get(&timeframe)
    }

    pub fn timeframes(&self) -> impl Iterator<Item = Timeframe> + '_ {
        self.series_by_timeframe.keys().copied()
    }

    /// Fan one tick out into every timeframe series of this asset.
    ///
    /// A non-valid price keeps the previous price and leaves the series
    /// untouched, so the asset can never enter a non-positive or NaN state.
    pub fn apply_tick(&mut self, price: Price, now: Timestamp) {
        if !price.is_valid() {
            return;
        }
        self.current_price = price;
        for (timeframe, series) in self.series_by_timeframe.iter_mut() {
            series.apply_tick(price, now, *timeframe);
        }
    }
}
