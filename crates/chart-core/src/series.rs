// File: crates/chart-core/src/series.rs
// Summary: Input records for candlestick, line, and volume charts.
// Notes:
// - Renderers take these as plain slices and never re-validate fields.
//   `Candle::try_new` is available for callers that want the OHLC check.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One OHLCV bucket. `time` is a display label, not parsed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(time: impl Into<String>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self { time: time.into(), open, high, low, close, volume }
    }

    /// Construct a candle enforcing OHLC invariants:
    /// low <= min(open,close) and high >= max(open,close), and low <= high.
    pub fn try_new(
        time: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> ChartResult<Self> {
        let time = time.into();
        let reason = if low > high {
            Some("low above high")
        } else if low > open.min(close) {
            Some("low above min(open,close)")
        } else if high < open.max(close) {
            Some("high below max(open,close)")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(ChartError::MalformedCandle { time, reason }),
            None => Ok(Self { time, open, high, low, close, volume }),
        }
    }

    /// A flat candle (`close == open`) counts as up.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// One sample of a scalar series (price history, portfolio value).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarPoint {
    pub time: String,
    pub value: f64,
}

impl ScalarPoint {
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self { time: time.into(), value }
    }

    /// Close prices of `candles` as a line series.
    pub fn closes(candles: &[Candle]) -> Vec<ScalarPoint> {
        candles.iter().map(|c| ScalarPoint::new(c.time.clone(), c.close)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub time: String,
    pub volume: f64,
    pub is_up: bool,
}

impl VolumeBar {
    pub fn new(time: impl Into<String>, volume: f64, is_up: bool) -> Self {
        Self { time: time.into(), volume, is_up }
    }

    pub fn from_candle(candle: &Candle) -> Self {
        Self { time: candle.time.clone(), volume: candle.volume, is_up: candle.is_up() }
    }

    pub fn from_candles(candles: &[Candle]) -> Vec<VolumeBar> {
        candles.iter().map(VolumeBar::from_candle).collect()
    }
}

/// Anything with a display time, used by the time-axis sampler.
pub trait Timed {
    fn time(&self) -> &str;
}

impl Timed for Candle {
    fn time(&self) -> &str { &self.time }
}

impl Timed for ScalarPoint {
    fn time(&self) -> &str { &self.time }
}

impl Timed for VolumeBar {
    fn time(&self) -> &str { &self.time }
}
