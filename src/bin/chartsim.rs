//! Demo driver: runs the simulation on a fixed timer, pokes the viewport
//! and samples the engine the way a UI layer would.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use price_chart_sim::application::{ChartService, SimulationService};
use price_chart_sim::config::EngineConfig;
use price_chart_sim::domain::chart::NavAction;
use price_chart_sim::domain::market_data::{IndicatorKind, Symbol, Timeframe, Timestamp};
use price_chart_sim::infrastructure::rendering::FrameBuilder;
use price_chart_sim::presentation::EngineSnapshot;

fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    price_chart_sim::initialize();

    let config = EngineConfig::default();
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut simulation = SimulationService::new(config, Timestamp::from_millis(now_ms()))?;

    let symbol = Symbol::from("BTCUSDT");
    let mut chart = ChartService::new(symbol.clone());
    chart.set_timeframe(Timeframe::FiveMinutes);
    chart.toggle_indicator(IndicatorKind::Sma);
    chart.toggle_indicator(IndicatorKind::Bollinger);

    for step in 0..10u32 {
        let report = simulation.tick(Timestamp::from_millis(now_ms()));
        if let Some(price) = report.updated_prices.get(&symbol) {
            tracing::info!(step, price = *price, "tick");
        }

        if step == 4 {
            let total =
                simulation.series(&symbol, chart.chart().timeframe()).map_or(0, |s| s.len());
            chart.apply(NavAction::ZoomIn, total);
            chart.apply(NavAction::ScrollBy(50), total);
        }
        if step == 7 {
            let total =
                simulation.series(&symbol, chart.chart().timeframe()).map_or(0, |s| s.len());
            chart.apply(NavAction::GoToLatest, total);
        }

        thread::sleep(tick_interval);
    }

    let snapshot = EngineSnapshot::capture(now_ms(), &simulation, &chart);
    println!("{}", snapshot.to_json()?);

    if let Some(asset) = simulation.asset(&symbol) {
        if let Some(window) = chart.visible_window(asset) {
            if let Some(series) = asset.series(chart.chart().timeframe()) {
                let frame = FrameBuilder::default().build(&window, series);
                tracing::info!(
                    candles = frame.candles.len(),
                    indicator_lines = frame.indicator_lines.len(),
                    has_minimap = frame.minimap.is_some(),
                    "frame built"
                );
            }
        }
    }

    Ok(())
}
