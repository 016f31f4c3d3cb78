// File: crates/chart-core/src/text.rs
// Summary: Axis label text formatting with K/M/B abbreviation.

use serde::{Deserialize, Serialize};

// Largest first; the first threshold the magnitude reaches wins.
const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// How value-axis numbers are turned into label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Prices and portfolio values: two decimals, abbreviated from 1K up.
    Currency,
    /// Traded volume: at most one decimal, abbreviated from 1K up.
    Volume,
}

impl LabelFormat {
    pub const fn decimals(self) -> usize {
        match self {
            LabelFormat::Currency => 2,
            LabelFormat::Volume => 1,
        }
    }

    pub fn format(self, value: f64) -> String {
        // avoid "-0.00"
        let value = if value == 0.0 { 0.0 } else { value };
        if let Some(short) = abbreviate(value, self.decimals()) {
            return short;
        }
        match self {
            LabelFormat::Currency => format!("{value:.2}"),
            LabelFormat::Volume => {
                // `{}` drops a trailing ".0", so whole volumes print bare
                let rounded = round_to(value, 1);
                format!("{}", if rounded == 0.0 { 0.0 } else { rounded })
            }
        }
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `value` scaled to the largest unit it reaches once rounded to `decimals`,
/// or `None` when it stays below 1 000.
///
/// Rounding happens before the unit is picked, so `999_999.0` at two decimals
/// reads `1.00M` rather than `1000.00K`.
pub fn abbreviate(value: f64, decimals: usize) -> Option<String> {
    let magnitude = value.abs();
    UNITS
        .iter()
        .find(|(threshold, _)| round_to(magnitude / (threshold / 1e3), decimals) >= 1e3)
        .map(|(threshold, suffix)| format!("{:.*}{}", decimals, value / threshold, suffix))
}
