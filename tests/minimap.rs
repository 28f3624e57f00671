use price_chart_sim::domain::chart::MinimapTransform;
use price_chart_sim::domain::market_data::{Candle, CandleSeries, Price, Timestamp};

fn flat_series(closes: &[f64]) -> CandleSeries {
    let mut series = CandleSeries::new(500);
    for (i, close) in closes.iter().enumerate() {
        series.push(Candle::flat(Timestamp::from_millis(i as u64 * 60_000), Price::from(*close)));
    }
    series
}

#[test]
fn empty_series_has_nothing_to_draw() {
    let series = CandleSeries::new(500);
    assert!(MinimapTransform::from_series(&series, 200.0, 50.0).is_none());
}

#[test]
fn maps_the_entire_series_onto_the_strip() {
    let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let series = flat_series(&closes);
    let map = MinimapTransform::from_series(&series, 200.0, 50.0).unwrap();

    assert_eq!(map.total, 10);
    assert_eq!(map.index_to_x(0), 10.0);
    assert_eq!(map.index_to_x(9), 190.0);

    // Highest price at the top of the strip, lowest at the bottom.
    assert_eq!(map.price_to_y(10.0), 0.0);
    assert_eq!(map.price_to_y(1.0), 50.0);
}

#[test]
fn view_rect_tracks_the_visible_slice() {
    let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let series = flat_series(&closes);
    let map = MinimapTransform::from_series(&series, 200.0, 50.0).unwrap();

    assert_eq!(map.view_rect(0, 10), (0.0, 200.0));
    assert_eq!(map.view_rect(5, 2), (100.0, 140.0));

    let (x0, x1) = map.view_rect(3, 4);
    assert!(x0 < x1);
    assert!(x0 >= 0.0 && x1 <= 200.0);
}

#[test]
fn flat_price_history_does_not_divide_by_zero() {
    let series = flat_series(&[42.0; 20]);
    let map = MinimapTransform::from_series(&series, 200.0, 50.0).unwrap();
    assert!(map.price_to_y(42.0).is_finite());
}
