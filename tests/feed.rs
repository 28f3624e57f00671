use rand::SeedableRng;
use rand::rngs::StdRng;

use price_chart_sim::domain::market_data::{
    Price, TickGenerator, Timeframe, Timestamp, seed_history,
};

#[test]
fn same_seed_reproduces_the_walk() {
    let mut a = TickGenerator::new(7, 0.0008);
    let mut b = TickGenerator::new(7, 0.0008);
    let mut pa = Price::from(100.0);
    let mut pb = Price::from(100.0);

    for _ in 0..200 {
        pa = a.next_price(pa);
        pb = b.next_price(pb);
        assert_eq!(pa.value(), pb.value());
    }
}

#[test]
fn walk_never_goes_non_positive() {
    // Absurd volatility so raw steps would frequently cross zero.
    let mut feed = TickGenerator::new(3, 5.0);
    let mut price = Price::from(1.0);

    for _ in 0..1_000 {
        price = feed.next_price(price);
        assert!(price.value().is_finite());
        assert!(price.value() > 0.0);
    }
}

#[test]
fn shocks_stay_within_the_volatility_band() {
    let mut feed = TickGenerator::new(11, 0.0008);
    let mut price = Price::from(100.0);

    for _ in 0..1_000 {
        let next = feed.next_price(price);
        let shock = (next.value() - price.value()).abs() / price.value();
        assert!(shock <= 0.0008 + 1e-12);
        price = next;
    }
}

#[test]
fn seeded_history_is_aligned_gap_free_and_anchored_at_base_price() {
    let mut rng = StdRng::seed_from_u64(9);
    let now = Timestamp::from_millis(1_700_000_123_456);
    let series = seed_history(&mut rng, 65_000.0, 0.0008, Timeframe::FiveMinutes, 500, now);

    assert_eq!(series.len(), 500);
    assert_eq!(series.latest().unwrap().ohlc.close.value(), 65_000.0);
    assert_eq!(series.latest().unwrap().time.value(), 1_700_000_123_456 / 300_000 * 300_000);

    let candles: Vec<_> = series.candles().iter().cloned().collect();
    for pair in candles.windows(2) {
        assert_eq!(pair[1].time.value() - pair[0].time.value(), 300_000);
        assert_eq!(pair[1].ohlc.open.value(), pair[0].ohlc.close.value());
    }
    for candle in &candles {
        assert_eq!(candle.time.value() % 300_000, 0);
        assert!(candle.ohlc.is_valid());
        assert!(candle.ohlc.low.value() > 0.0);
    }
}

#[test]
fn seeded_history_is_deterministic_per_seed() {
    let now = Timestamp::from_millis(1_700_000_123_456);
    let mut rng_a = StdRng::seed_from_u64(21);
    let mut rng_b = StdRng::seed_from_u64(21);
    let a = seed_history(&mut rng_a, 150.0, 0.0015, Timeframe::OneMinute, 500, now);
    let b = seed_history(&mut rng_b, 150.0, 0.0015, Timeframe::OneMinute, 500, now);
    assert_eq!(a.candles(), b.candles());
}

#[test]
fn longer_timeframes_get_proportionally_larger_bodies() {
    let now = Timestamp::from_millis(1_700_000_123_456);
    let mean_body = |timeframe: Timeframe| {
        let mut rng = StdRng::seed_from_u64(5);
        let series = seed_history(&mut rng, 1_000.0, 0.0008, timeframe, 500, now);
        let sum: f64 = series
            .candles()
            .iter()
            .map(|c| (c.ohlc.close.value() - c.ohlc.open.value()).abs() / c.ohlc.open.value())
            .sum();
        sum / series.len() as f64
    };

    let m1 = mean_body(Timeframe::OneMinute);
    let h1 = mean_body(Timeframe::OneHour);
    // sqrt(60) ~ 7.75x scaling; allow generous slack for the random draw.
    assert!(h1 > m1 * 2.0, "h1 {} should dwarf m1 {}", h1, m1);
}
