// File: crates/chart-core/src/axis.rs
// Summary: Value and time axes: evenly spaced ticks, their labels, and gridlines.

use crate::error::ChartResult;
use crate::geometry::{Anchor, Geometry, Label, LabelAxis, Line, Paint, RenderModel, Role};
use crate::grid::{linspace, sample_indices};
use crate::scale::{HorizontalScale, ValueScale};
use crate::series::Timed;
use crate::text::LabelFormat;
use crate::theme::Rgba;
use crate::types::{TIME_LABEL_OFFSET, VALUE_LABEL_NUDGE, VALUE_LABEL_X};
use crate::view::PlotArea;

const GRID_WIDTH: f64 = 0.5;
const GRID_DASH: (f64, f64) = (5.0, 5.0);

/// A value and the pixel row it maps to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub ticks: Vec<Tick>,
    pub format: LabelFormat,
}

impl ValueAxis {
    /// Exactly `count` ticks spanning the scale's domain, endpoints included.
    /// Fails with `InvalidLabelCount` when `count < 2`.
    pub fn build(scale: &ValueScale, count: usize, format: LabelFormat) -> ChartResult<Self> {
        let domain = scale.domain();
        let ticks = linspace(domain.min, domain.max, count)?
            .into_iter()
            .map(|value| Tick { value, y: scale.to_px(value) })
            .collect();
        Ok(Self { ticks, format })
    }

    pub fn labels(&self, color: Rgba) -> Vec<Label> {
        self.ticks
            .iter()
            .map(|t| Label {
                x: VALUE_LABEL_X,
                y: t.y + VALUE_LABEL_NUDGE,
                text: self.format.format(t.value),
                anchor: Anchor::Start,
                axis: LabelAxis::Value,
                color,
            })
            .collect()
    }

    /// One dashed horizontal line per tick, from the gutter to the right edge.
    pub fn push_grid(&self, model: &mut RenderModel, plot: &PlotArea, color: Rgba) {
        let paint = Paint::dashed(color, GRID_WIDTH, GRID_DASH);
        for t in &self.ticks {
            model.push(Role::Grid, Geometry::Line(Line::new(plot.left, t.y, plot.right, t.y)), paint);
        }
    }
}

/// An input index chosen for a time label and where it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeTick {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    pub ticks: Vec<TimeTick>,
}

impl TimeAxis {
    /// Up to `max_labels` evenly spread items, labelled at their visual centre.
    pub fn build<T: Timed, S: HorizontalScale>(data: &[T], scale: &S, max_labels: usize) -> Self {
        let ticks = sample_indices(data.len(), max_labels)
            .into_iter()
            .map(|index| TimeTick { index, x: scale.center(index), text: data[index].time().to_string() })
            .collect();
        Self { ticks }
    }

    /// Labels centred under their item, on a baseline inside the bottom band.
    pub fn labels(&self, surface_height: f64, color: Rgba) -> Vec<Label> {
        let y = surface_height - TIME_LABEL_OFFSET;
        self.ticks
            .iter()
            .map(|t| Label {
                x: t.x,
                y,
                text: t.text.clone(),
                anchor: Anchor::Middle,
                axis: LabelAxis::Time,
                color,
            })
            .collect()
    }
}
