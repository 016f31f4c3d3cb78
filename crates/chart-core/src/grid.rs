// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced tick layout helpers.

use crate::error::{ChartError, ChartResult};

/// `steps` values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> ChartResult<Vec<f64>> {
    if steps < 2 {
        return Err(ChartError::InvalidLabelCount(steps));
    }
    let step = (end - start) / (steps as f64 - 1.0);
    // pin the last value so float drift never moves the upper endpoint
    Ok((0..steps)
        .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
        .collect())
}

/// Up to `max_count` indices spread over `[0, len - 1]`:
/// `floor(i * (len - 1) / (count - 1))` with `count = min(max_count, len)`.
/// Duplicates (possible only when the count is clamped) are dropped.
pub fn sample_indices(len: usize, max_count: usize) -> Vec<usize> {
    let count = max_count.min(len);
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let mut out: Vec<usize> = (0..count).map(|i| i * (len - 1) / (count - 1)).collect();
            out.dedup();
            out
        }
    }
}
