use chrono::{DateTime, Utc};

use crate::domain::market_data::Timeframe;

/// Format a bucket timestamp for the time axis using UTC components.
///
/// Intraday timeframes label buckets as `HH:MM`; the hour timeframe adds the
/// day so scrolling far back stays unambiguous.
pub fn format_time_label(timestamp_ms: u64, timeframe: Timeframe) -> String {
    let date = DateTime::<Utc>::from_timestamp_millis(timestamp_ms as i64).unwrap_or_default();
    match timeframe {
        Timeframe::OneHour => date.format("%d.%m %H:%M").to_string(),
        _ => date.format("%H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_time_label;
    use crate::domain::market_data::Timeframe;

    #[test]
    fn formats_intraday_as_hours_minutes() {
        // 2021-01-01 00:00:00 UTC
        let ts = 1_609_459_200_000u64;
        assert_eq!(format_time_label(ts, Timeframe::OneMinute), "00:00");
        assert_eq!(format_time_label(ts + 90_000, Timeframe::OneMinute), "00:01");
    }

    #[test]
    fn hour_timeframe_includes_day() {
        let ts = 1_609_459_200_000u64;
        assert_eq!(format_time_label(ts, Timeframe::OneHour), "01.01 00:00");
    }
}
