// File: crates/chart-core/src/types.rs
// Summary: Shared layout types and constants (gutter, bottom band, label offsets).

use serde::{Deserialize, Serialize};

/// Default width of the left gutter reserved for value-axis labels.
pub const GUTTER: f64 = 60.0;
/// Default height of the bottom band reserved for time-axis labels.
pub const BOTTOM_BAND: f64 = 40.0;
/// Gap between adjacent candle/volume slots.
pub const SLOT_SPACING: f64 = 2.0;
/// Slots never get narrower than this, even when they overflow the plot.
pub const MIN_ITEM_WIDTH: f64 = 2.0;

/// Horizontal inset of value labels inside the gutter.
pub const VALUE_LABEL_X: f64 = 5.0;
/// Value labels sit slightly below their tick so the text centres on it.
pub const VALUE_LABEL_NUDGE: f64 = 4.0;
/// Distance of the time-label baseline from the bottom edge.
pub const TIME_LABEL_OFFSET: f64 = 10.0;

/// Value-axis labels on price and line charts.
pub const VALUE_LABELS: usize = 5;
/// Value-axis labels on volume charts.
pub const VOLUME_LABELS: usize = 3;
/// Upper bound on time-axis labels.
pub const TIME_LABELS: usize = 5;

/// Reserved margins around the plot area, in pixels.
/// Contract: both fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub gutter: f64,
    pub bottom_band: f64,
}

impl Layout {
    pub const fn new(gutter: f64, bottom_band: f64) -> Self {
        Self { gutter, bottom_band }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(GUTTER, BOTTOM_BAND)
    }
}
