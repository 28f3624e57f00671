use price_chart_sim::domain::chart::{NavAction, ViewportState, ZOOM_LEVELS, reduce};

#[test]
fn zoom_out_never_leaves_the_ladder() {
    let mut state = ViewportState { zoom_index: 0, scroll_offset: 0 };
    for _ in 0..20 {
        state = state.zoom_out();
        assert!(state.zoom_index < ZOOM_LEVELS.len());
    }
    assert_eq!(state.zoom_index, ZOOM_LEVELS.len() - 1);
}

#[test]
fn zoom_in_never_goes_below_zero() {
    let mut state = ViewportState { zoom_index: ZOOM_LEVELS.len() - 1, scroll_offset: 0 };
    for _ in 0..20 {
        state = state.zoom_in();
    }
    assert_eq!(state.zoom_index, 0);
    assert_eq!(state.visible_count(), ZOOM_LEVELS[0]);
}

#[test]
fn zooming_preserves_the_scroll_offset() {
    let state = ViewportState { zoom_index: 3, scroll_offset: 123 };

    let zoomed_in = reduce(state, NavAction::ZoomIn, 500);
    assert_eq!(zoomed_in.scroll_offset, 123);
    assert_eq!(zoomed_in.visible_count(), ZOOM_LEVELS[2]);

    let zoomed_out = reduce(state, NavAction::ZoomOut, 500);
    assert_eq!(zoomed_out.scroll_offset, 123);
    assert_eq!(zoomed_out.visible_count(), ZOOM_LEVELS[4]);
}

#[test]
fn wider_zoom_shrinks_the_effective_offset_when_history_runs_out() {
    // 500 candles, offset 350: zooming out to 300 visible leaves only 200
    // candles of slack, so the effective offset clamps.
    let state = ViewportState { zoom_index: ZOOM_LEVELS.len() - 1, scroll_offset: 350 };
    assert_eq!(state.visible_count(), 300);
    assert_eq!(state.effective_offset(500), 200);
    assert_eq!(state.visible_bounds(500), (0, 300));
}
