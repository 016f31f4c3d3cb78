// File: crates/chart-core/src/view.rs
// Summary: Viewport sizing, derived plot area, and the timeframe selector value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::types::Layout;

/// Total pixel size of the drawing surface handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Plot area left after reserving the gutter and bottom band.
    pub fn plot(&self, layout: &Layout) -> PlotArea {
        PlotArea {
            left: layout.gutter,
            right: self.width,
            width: (self.width - layout.gutter).max(0.0),
            height: (self.height - layout.bottom_band).max(0.0),
        }
    }
}

/// Region between the gutter and the right edge, from y = 0 down to the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    /// Right edge of the surface; gridlines run all the way here.
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// y of the plot floor (the top of the time-label band).
    #[inline]
    pub fn floor(&self) -> f64 {
        self.height
    }
}

/// Candle interval chosen in the host's selector. Display-only: the engine
/// renders whatever data it is given and never resamples to this interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[default]
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [Timeframe::M5, Timeframe::M15, Timeframe::H1, Timeframe::H4, Timeframe::D1];

    pub const fn as_str(self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    pub fn duration(self) -> chrono::Duration {
        match self {
            Timeframe::M5 => chrono::Duration::minutes(5),
            Timeframe::M15 => chrono::Duration::minutes(15),
            Timeframe::H1 => chrono::Duration::hours(1),
            Timeframe::H4 => chrono::Duration::hours(4),
            Timeframe::D1 => chrono::Duration::days(1),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownTimeframe(s.to_string()))
    }
}
