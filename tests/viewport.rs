use price_chart_sim::domain::chart::{DEFAULT_ZOOM_INDEX, ViewportState, ZOOM_LEVELS};

#[test]
fn zoom_ladder_is_ascending() {
    for pair in ZOOM_LEVELS.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!(ZOOM_LEVELS.len() >= 5);
}

#[test]
fn default_view_follows_the_feed() {
    let state = ViewportState::default();
    assert_eq!(state.zoom_index, DEFAULT_ZOOM_INDEX);
    assert_eq!(state.visible_count(), 100);
    assert_eq!(state.scroll_offset, 0);
    assert!(state.is_at_latest(500));
}

#[test]
fn visible_bounds_cover_the_most_recent_slice() {
    let state = ViewportState::default();
    assert_eq!(state.visible_bounds(500), (400, 100));
    assert_eq!(state.visible_bounds(100), (0, 100));
}

#[test]
fn short_history_shows_everything() {
    let state = ViewportState::default();
    assert_eq!(state.visible_bounds(50), (0, 50));
    assert_eq!(state.max_offset(50), 0);
    assert!(state.is_at_latest(50));

    assert_eq!(state.visible_bounds(0), (0, 0));
}

#[test]
fn scrolled_view_moves_back_in_history() {
    let state = ViewportState { zoom_index: DEFAULT_ZOOM_INDEX, scroll_offset: 150 };
    assert_eq!(state.effective_offset(500), 150);
    assert_eq!(state.visible_bounds(500), (250, 100));
    assert!(!state.is_at_latest(500));
}

#[test]
fn go_to_oldest_and_latest_hit_the_extremes() {
    let state = ViewportState::default();
    let oldest = state.go_to_oldest(500);
    assert_eq!(oldest.scroll_offset, 400);
    assert_eq!(oldest.visible_bounds(500), (0, 100));

    let latest = oldest.go_to_latest();
    assert_eq!(latest.scroll_offset, 0);
    assert!(latest.is_at_latest(500));
}
