use price_chart_sim::domain::market_data::{CandleSeries, Price, Timeframe, Timestamp};

const T0: u64 = 1_699_999_980_000;

fn run_buckets(cap: usize, buckets: u64) -> CandleSeries {
    let mut series = CandleSeries::new(cap);
    for i in 0..buckets {
        series.apply_tick(
            Price::from(100.0 + i as f64),
            Timestamp::from_millis(T0 + i * 60_000),
            Timeframe::OneMinute,
        );
    }
    series
}

#[test]
fn length_never_exceeds_cap() {
    let series = run_buckets(500, 520);
    assert_eq!(series.len(), 500);
    assert_eq!(series.cap(), 500);
}

#[test]
fn eviction_drops_oldest_candles_only() {
    let series = run_buckets(500, 520);

    // The 20 oldest buckets are gone, recency preserved.
    assert_eq!(series.candles().front().unwrap().time.value(), T0 + 20 * 60_000);
    assert_eq!(series.latest().unwrap().time.value(), T0 + 519 * 60_000);
    assert_eq!(series.latest().unwrap().ohlc.close.value(), 100.0 + 519.0);
}

#[test]
fn retained_candles_are_unaffected_by_eviction() {
    let capped = run_buckets(500, 520);
    let uncapped = run_buckets(600, 520);

    // Same ticks without eviction: the surviving 500 candles are identical.
    let tail: Vec<_> = uncapped.candles().iter().skip(20).cloned().collect();
    let kept: Vec<_> = capped.candles().iter().cloned().collect();
    assert_eq!(kept, tail);
}
