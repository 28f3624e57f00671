//! Synthetic price feed: bounded random walk plus backward history seeding.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::entities::{Candle, CandleSeries};
use super::value_objects::{Ohlc, Price, Timeframe, Timestamp};

/// Fraction of the scaled step volatility a wick may extend past the body.
const WICK_RATIO: f64 = 0.5;

/// Domain service - Tick generator
///
/// Produces the next price for one asset as `prev * (1 + shock)` with the
/// shock drawn uniformly from the symmetric volatility band. The caller owns
/// the resulting state change; the generator itself only holds its RNG.
#[derive(Debug, Clone)]
pub struct TickGenerator {
    rng: StdRng,
    volatility: f64,
}

impl TickGenerator {
    pub fn new(seed: u64, volatility: f64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), volatility }
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Next price of the walk. Falls back to `prev` whenever the step would
    /// produce a non-finite or non-positive price.
    pub fn next_price(&mut self, prev: Price) -> Price {
        let shock = self.rng.gen_range(-self.volatility..=self.volatility);
        let next = Price::from(prev.value() * (1.0 + shock));
        if next.is_valid() { next } else { prev }
    }
}

/// Seed one timeframe's history with `cap` candles ending at the bucket that
/// contains `now`.
///
/// The walk runs backward from `base_price`, so the newest close always
/// equals the configured base price and every timeframe of an asset agrees on
/// the latest price. Per-step volatility is scaled by sqrt(period / 60s) so
/// longer timeframes show proportionally larger candles.
pub fn seed_history(
    rng: &mut StdRng,
    base_price: f64,
    volatility: f64,
    timeframe: Timeframe,
    cap: usize,
    now: Timestamp,
) -> CandleSeries {
    let mut series = CandleSeries::new(cap);
    if cap == 0 {
        return series;
    }

    let period_ms = timeframe.duration_ms();
    let step_vol = volatility * timeframe.volatility_scale();

    // Closes, walked backward from the base price.
    let mut closes = vec![base_price; cap];
    for i in (0..cap.saturating_sub(1)).rev() {
        let shock = rng.gen_range(-step_vol..=step_vol);
        let older = closes[i + 1] * (1.0 - shock);
        closes[i] = if older.is_finite() && older > 0.0 { older } else { closes[i + 1] };
    }

    let last_bucket = now.align_to(period_ms).value();
    let start = last_bucket.saturating_sub((cap as u64 - 1) * period_ms);

    for (i, &close) in closes.iter().enumerate() {
        let time = start + i as u64 * period_ms;
        let open = if i == 0 { close } else { closes[i - 1] };
        let body_hi = open.max(close);
        let body_lo = open.min(close);
        let high = body_hi * (1.0 + rng.gen_range(0.0..=step_vol * WICK_RATIO));
        let low = body_lo * (1.0 - rng.gen_range(0.0..=step_vol * WICK_RATIO));
        series.push(Candle::new(
            Timestamp::from_millis(time),
            Ohlc::new(
                Price::from(open),
                Price::from(high),
                Price::from(low.max(f64::MIN_POSITIVE)),
                Price::from(close),
            ),
        ));
    }

    series
}
