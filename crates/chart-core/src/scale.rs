// File: crates/chart-core/src/scale.rs
// Summary: Domain-to-pixel transforms: inverted value (Y) scale, continuous and slotted X scales.

use crate::types::MIN_ITEM_WIDTH;

/// Fraction of the raw range added above and below the data extrema.
pub const PADDING: f64 = 0.05;

/// Closed numeric interval of the data before mapping to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max over `values`; `None` for an empty sequence.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen both ends by `fraction` of the raw span. A zero span stays zero.
    pub fn padded(self, fraction: f64) -> Self {
        let pad = self.span() * fraction;
        Self { min: self.min - pad, max: self.max + pad }
    }

    /// True when the span is zero or not finite, i.e. it cannot be divided by.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span == 0.0 || !span.is_finite()
    }
}

/// Vertical value scale mapping a domain onto `[plot_height, 0]` pixels
/// (pixel y grows downward, values grow upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    domain: Domain,
    plot_height: f64,
    // where every value lands when the domain has no span
    degenerate_px: f64,
}

impl ValueScale {
    /// A degenerate domain maps to the vertical centre of the plot.
    pub fn new(domain: Domain, plot_height: f64) -> Self {
        Self { domain, plot_height, degenerate_px: plot_height * 0.5 }
    }

    /// A degenerate domain maps to the plot floor. Used for quantities that
    /// grow up from zero, so an all-zero series draws nothing.
    pub fn anchored_at_floor(domain: Domain, plot_height: f64) -> Self {
        Self { domain, plot_height, degenerate_px: plot_height }
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn plot_height(&self) -> f64 {
        self.plot_height
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        if self.domain.is_degenerate() {
            return self.degenerate_px;
        }
        self.plot_height - ((value - self.domain.min) / self.domain.span()) * self.plot_height
    }

    /// Inverse of `to_px`. A degenerate domain (or a zero-height plot) has
    /// no inverse; the domain minimum is returned instead.
    pub fn to_value(&self, py: f64) -> f64 {
        if self.domain.is_degenerate() || self.plot_height <= 0.0 {
            return self.domain.min;
        }
        self.domain.min + ((self.plot_height - py) / self.plot_height) * self.domain.span()
    }
}

/// Horizontal placement of the i-th of `len()` data items.
pub trait HorizontalScale {
    fn len(&self) -> usize;
    /// Anchor x of item `index` (left edge for slots, the point itself for lines).
    fn x(&self, index: usize) -> f64;
    /// Visual centre of item `index`.
    fn center(&self, index: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Points spread edge to edge across the plot width (line charts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    pub left_px: f64,
    pub plot_width: f64,
    pub count: usize,
}

impl ContinuousScale {
    pub fn new(left_px: f64, plot_width: f64, count: usize) -> Self {
        Self { left_px, plot_width, count }
    }
}

impl HorizontalScale for ContinuousScale {
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn x(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.left_px + self.plot_width * 0.5;
        }
        self.left_px + (index as f64 / (self.count - 1) as f64) * self.plot_width
    }

    #[inline]
    fn center(&self, index: usize) -> f64 {
        self.x(index)
    }
}

/// Fixed-width slots laid out left to right (candlestick and volume charts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScale {
    pub left_px: f64,
    pub item_width: f64,
    pub spacing: f64,
    pub count: usize,
}

impl SlotScale {
    /// `item_width = max(plot_width / count - spacing, MIN_ITEM_WIDTH)`.
    pub fn new(left_px: f64, plot_width: f64, count: usize, spacing: f64) -> Self {
        let item_width = if count == 0 {
            MIN_ITEM_WIDTH
        } else {
            (plot_width / count as f64 - spacing).max(MIN_ITEM_WIDTH)
        };
        Self { left_px, item_width, spacing, count }
    }
}

impl HorizontalScale for SlotScale {
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn x(&self, index: usize) -> f64 {
        self.left_px + index as f64 * (self.item_width + self.spacing)
    }

    #[inline]
    fn center(&self, index: usize) -> f64 {
        self.x(index) + self.item_width * 0.5
    }
}
