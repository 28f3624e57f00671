//! Viewport state machine: zoom ladder plus scroll offset over an unbounded
//! candle history.
//!
//! Navigation is expressed as an immutable state value plus a pure reducer so
//! keyboard, wheel and drag gestures all funnel through the same clamped
//! arithmetic and cannot desynchronize.

use serde::{Deserialize, Serialize};

/// Fixed ascending ladder of visible-candle counts.
pub const ZOOM_LEVELS: [usize; 7] = [30, 50, 75, 100, 150, 200, 300];

/// Index into [`ZOOM_LEVELS`] charts start at (100 candles).
pub const DEFAULT_ZOOM_INDEX: usize = 3;

/// Value Object - Viewport state
///
/// `scroll_offset` counts candles back from the most recent; it is stored as
/// requested and clamped against the current history length on use, so a
/// shrinking or growing series can never put the viewport out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom_index: usize,
    pub scroll_offset: usize,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { zoom_index: DEFAULT_ZOOM_INDEX, scroll_offset: 0 }
    }
}

impl ViewportState {
    pub fn visible_count(&self) -> usize {
        ZOOM_LEVELS[self.zoom_index.min(ZOOM_LEVELS.len() - 1)]
    }

    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.visible_count())
    }

    pub fn effective_offset(&self, total: usize) -> usize {
        self.scroll_offset.min(self.max_offset(total))
    }

    pub fn is_at_latest(&self, total: usize) -> bool {
        self.effective_offset(total) == 0
    }

    /// `(start, len)` of the visible slice within a series of `total`
    /// candles. `len` is `min(visible_count, total)` and the slice always
    /// lies inside `[0, total)`.
    pub fn visible_bounds(&self, total: usize) -> (usize, usize) {
        let len = self.visible_count().min(total);
        let start = total - self.effective_offset(total) - len;
        (start, len)
    }

    /// One step towards fewer, larger candles. Keeps the scroll offset.
    pub fn zoom_in(self) -> Self {
        Self { zoom_index: self.zoom_index.saturating_sub(1), ..self }
    }

    /// One step towards more, smaller candles. Keeps the scroll offset.
    pub fn zoom_out(self) -> Self {
        Self { zoom_index: (self.zoom_index + 1).min(ZOOM_LEVELS.len() - 1), ..self }
    }

    /// The single authoritative scroll entry point. Positive deltas move
    /// further into history; the result is clamped into `[0, max_offset]`.
    pub fn scroll_by(self, delta: i64, total: usize) -> Self {
        let max = self.max_offset(total) as i64;
        let next = (self.scroll_offset as i64 + delta).clamp(0, max);
        Self { scroll_offset: next as usize, ..self }
    }

    pub fn go_to_latest(self) -> Self {
        Self { scroll_offset: 0, ..self }
    }

    pub fn go_to_oldest(self, total: usize) -> Self {
        Self { scroll_offset: self.max_offset(total), ..self }
    }
}

/// Navigation actions fed to [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    ZoomIn,
    ZoomOut,
    ScrollBy(i64),
    GoToLatest,
    GoToOldest,
    /// Drag gesture: total pixel delta since the drag began, resolved against
    /// the offset captured at drag start so per-frame rounding cannot drift.
    DragTo { origin_offset: usize, pixel_delta: f64, candle_width: f64 },
}

/// Pure navigation reducer over the viewport state.
pub fn reduce(state: ViewportState, action: NavAction, total: usize) -> ViewportState {
    match action {
        NavAction::ZoomIn => state.zoom_in(),
        NavAction::ZoomOut => state.zoom_out(),
        NavAction::ScrollBy(delta) => state.scroll_by(delta, total),
        NavAction::GoToLatest => state.go_to_latest(),
        NavAction::GoToOldest => state.go_to_oldest(total),
        NavAction::DragTo { origin_offset, pixel_delta, candle_width } => {
            let width = if candle_width > 0.0 { candle_width } else { 1.0 };
            let dragged = (pixel_delta / width).round() as i64;
            ViewportState { scroll_offset: origin_offset, ..state }.scroll_by(-dragged, total)
        }
    }
}
