// File: crates/chart-core/src/chart.rs
// Summary: Per-chart display options shared by the candlestick, line, and volume renderers.
// Notes:
// - Every option struct deserializes with `#[serde(default)]`, so a config file
//   only needs the fields it overrides.
// - None of the toggles feed into scale computation.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::text::LabelFormat;
use crate::theme::{Palette, Rgba};
use crate::types::{Layout, SLOT_SPACING, TIME_LABELS, VALUE_LABELS, VOLUME_LABELS};

fn check_label_count(count: usize) -> ChartResult<()> {
    if count < 2 {
        return Err(ChartError::InvalidLabelCount(count));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickOptions {
    pub layout: Layout,
    pub palette: Palette,
    /// Gap between candle slots, in pixels.
    pub spacing: f64,
    pub wick_width: f64,
    pub value_labels: usize,
    /// Upper bound; fewer are drawn when there are fewer candles.
    pub time_labels: usize,
    pub format: LabelFormat,
    pub show_grid: bool,
    pub show_labels: bool,
}

impl Default for CandlestickOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            palette: Palette::default(),
            spacing: SLOT_SPACING,
            wick_width: 1.0,
            value_labels: VALUE_LABELS,
            time_labels: TIME_LABELS,
            format: LabelFormat::Currency,
            show_grid: true,
            show_labels: true,
        }
    }
}

impl CandlestickOptions {
    pub fn validate(&self) -> ChartResult<()> {
        check_label_count(self.value_labels)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub layout: Layout,
    pub palette: Palette,
    /// Overrides `palette.accent` for the line, area, and markers.
    pub color: Option<Rgba>,
    pub line_width: f64,
    pub dot_radius: f64,
    pub value_labels: usize,
    pub time_labels: usize,
    pub format: LabelFormat,
    pub show_dots: bool,
    pub show_grid: bool,
    pub show_area: bool,
    pub show_labels: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            palette: Palette::default(),
            color: None,
            line_width: 2.0,
            dot_radius: 3.0,
            value_labels: VALUE_LABELS,
            time_labels: TIME_LABELS,
            format: LabelFormat::Currency,
            show_dots: true,
            show_grid: true,
            show_area: true,
            show_labels: true,
        }
    }
}

impl LineOptions {
    pub fn validate(&self) -> ChartResult<()> {
        check_label_count(self.value_labels)
    }

    pub fn line_color(&self) -> Rgba {
        self.color.unwrap_or(self.palette.accent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeOptions {
    pub layout: Layout,
    pub palette: Palette,
    pub spacing: f64,
    pub value_labels: usize,
    pub time_labels: usize,
    pub format: LabelFormat,
    pub show_grid: bool,
    pub show_labels: bool,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            palette: Palette::default(),
            spacing: SLOT_SPACING,
            value_labels: VOLUME_LABELS,
            time_labels: TIME_LABELS,
            format: LabelFormat::Volume,
            show_grid: false,
            show_labels: true,
        }
    }
}

impl VolumeOptions {
    pub fn validate(&self) -> ChartResult<()> {
        check_label_count(self.value_labels)
    }
}
