use price_chart_sim::application::{ChartService, SimulationService};
use price_chart_sim::config::{AssetConfig, EngineConfig};
use price_chart_sim::domain::chart::NavAction;
use price_chart_sim::domain::market_data::{IndicatorKind, Symbol, Timeframe, Timestamp};

const NOW: u64 = 1_700_000_000_000;

fn engine() -> SimulationService {
    let config = EngineConfig {
        seed: Some(7),
        assets: vec![AssetConfig::new("BTCUSDT", 65_000.0, 0.0008)],
        timeframes: vec![Timeframe::OneMinute, Timeframe::FiveMinutes],
        ..EngineConfig::default()
    };
    SimulationService::new(config, Timestamp::from_millis(NOW)).unwrap()
}

#[test]
fn timeframe_switch_snaps_back_to_live() {
    let simulation = engine();
    let symbol = Symbol::from("BTCUSDT");
    let mut chart = ChartService::new(symbol.clone());

    let total = simulation.series(&symbol, Timeframe::OneMinute).unwrap().len();
    chart.apply(NavAction::ScrollBy(200), total);
    assert_eq!(chart.chart().viewport.scroll_offset, 200);

    chart.set_timeframe(Timeframe::FiveMinutes);
    assert_eq!(chart.chart().viewport.scroll_offset, 0);
    assert_eq!(chart.chart().timeframe(), Timeframe::FiveMinutes);

    // Switching back: the one-minute history was maintained all along.
    chart.set_timeframe(Timeframe::OneMinute);
    assert_eq!(simulation.series(&symbol, Timeframe::OneMinute).unwrap().len(), 500);
}

#[test]
fn window_query_works_end_to_end() {
    let mut simulation = engine();
    let symbol = Symbol::from("BTCUSDT");
    let mut chart = ChartService::new(symbol.clone());
    chart.toggle_indicator(IndicatorKind::Sma);

    for i in 0..5u64 {
        simulation.tick(Timestamp::from_millis(NOW + i * 800));
    }

    let asset = simulation.asset(&symbol).unwrap();
    let window = chart.visible_window(asset).unwrap();
    assert_eq!(window.candles.len(), 100);
    assert!(window.is_at_latest);
    assert_eq!(window.indicators.len(), 1);

    // The hovered candle in the middle of the plot resolves to a real candle.
    let x = window.transform.index_to_x(50);
    let y = (window.transform.geometry.plot_top() + window.transform.geometry.plot_bottom()) / 2.0;
    let hit = chart.crosshair(&window, x, y).unwrap();
    assert_eq!(hit.index, window.start_index + 50);
    assert!(hit.price >= window.price_range.lo && hit.price <= window.price_range.hi);
}

#[test]
fn indicator_toggle_round_trips() {
    let mut chart = ChartService::new(Symbol::from("BTCUSDT"));
    assert!(chart.toggle_indicator(IndicatorKind::Ema));
    assert!(chart.chart().indicators.is_enabled(IndicatorKind::Ema));
    assert!(!chart.toggle_indicator(IndicatorKind::Ema));
    assert!(!chart.chart().indicators.is_enabled(IndicatorKind::Ema));
}

#[test]
fn drag_gesture_resolves_against_its_anchor() {
    let simulation = engine();
    let symbol = Symbol::from("BTCUSDT");
    let mut chart = ChartService::new(symbol.clone());
    let total = simulation.series(&symbol, Timeframe::OneMinute).unwrap().len();

    chart.apply(NavAction::ScrollBy(50), total);
    chart.begin_drag(total);

    // Default geometry: plot width 728px over 100 candles, 7.28px a candle.
    chart.drag_move(-72.8, total);
    assert_eq!(chart.chart().viewport.scroll_offset, 60);

    // Same gesture, larger cumulative delta: still anchored at 50.
    chart.drag_move(-145.6, total);
    assert_eq!(chart.chart().viewport.scroll_offset, 70);

    chart.end_drag();
    // Without an active drag the move is ignored.
    chart.drag_move(500.0, total);
    assert_eq!(chart.chart().viewport.scroll_offset, 70);
}

#[test]
fn viewport_navigation_keeps_zoom_and_scroll_consistent() {
    let simulation = engine();
    let symbol = Symbol::from("BTCUSDT");
    let mut chart = ChartService::new(symbol.clone());
    let total = simulation.series(&symbol, Timeframe::OneMinute).unwrap().len();

    chart.apply(NavAction::GoToOldest, total);
    assert_eq!(chart.chart().viewport.scroll_offset, 400);

    chart.apply(NavAction::ZoomIn, total);
    assert_eq!(chart.chart().viewport.scroll_offset, 400);
    assert_eq!(chart.chart().viewport.visible_count(), 75);

    chart.apply(NavAction::GoToLatest, total);
    assert!(chart.chart().viewport.is_at_latest(total));
}
