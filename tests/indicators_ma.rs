use price_chart_sim::domain::market_data::{
    IndicatorKind, IndicatorParams, compute_indicator, ema, sma,
};

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {}, got {}", b, a);
}

#[test]
fn sma_known_values() {
    let data: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let result = sma(&data, 3);

    assert_eq!(result.len(), data.len());
    assert_eq!(result[0], None);
    assert_eq!(result[1], None);
    approx(result[2].unwrap(), 2.0);
    approx(result[3].unwrap(), 3.0);
    approx(result[9].unwrap(), 9.0);
}

#[test]
fn sma_over_constant_series_is_the_constant() {
    let data = vec![42.5; 100];
    let result = sma(&data, 20);
    for (i, value) in result.iter().enumerate() {
        if i < 19 {
            assert_eq!(*value, None);
        } else {
            approx(value.unwrap(), 42.5);
        }
    }
}

#[test]
fn ema_is_seeded_with_sma_then_smooths() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let result = ema(&data, 2);

    assert_eq!(result[0], None);
    // Seed at index 1: SMA of first two values.
    approx(result[1].unwrap(), 1.5);
    // k = 2/3: ema = close * k + prev * (1 - k)
    approx(result[2].unwrap(), 2.5);
    approx(result[3].unwrap(), 3.5);
    approx(result[4].unwrap(), 4.5);
}

#[test]
fn ema_over_constant_series_stays_at_the_constant() {
    let data = vec![7.25; 60];
    let result = ema(&data, 12);
    for value in result.iter().skip(11) {
        approx(value.unwrap(), 7.25);
    }
}

#[test]
fn short_series_and_zero_period_yield_all_undefined() {
    let data = vec![1.0, 2.0, 3.0];
    assert!(sma(&data, 5).iter().all(|v| v.is_none()));
    assert!(ema(&data, 5).iter().all(|v| v.is_none()));
    assert!(sma(&data, 0).iter().all(|v| v.is_none()));
    assert!(ema(&data, 0).iter().all(|v| v.is_none()));
    assert_eq!(sma(&data, 5).len(), 3);
    assert!(sma(&[], 5).is_empty());
}

#[test]
fn compute_indicator_dispatches_and_keeps_alignment() {
    let data: Vec<f64> = (1..=30).map(|i| i as f64).collect();
    let output =
        compute_indicator(IndicatorKind::Sma, IndicatorParams { period: 10, band_mult: 1.0 }, &data);

    assert_eq!(output.primary.len(), 30);
    assert!(output.primary[8].is_none());
    assert!(output.primary[9].is_some());
    assert!(output.secondary.is_none());
    assert!(output.tertiary.is_none());
}
