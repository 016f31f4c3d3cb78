// File: crates/chart-core/src/volume.rs
// Summary: Volume bar geometry growing up from the plot floor.

use tracing::{debug, trace};

use crate::axis::{TimeAxis, ValueAxis};
use crate::chart::VolumeOptions;
use crate::error::ChartResult;
use crate::geometry::{Geometry, Paint, Rect, RenderModel, Role};
use crate::scale::{Domain, HorizontalScale, SlotScale, ValueScale};
use crate::series::VolumeBar;
use crate::view::Viewport;

/// Render `bars` against an unpadded `[0, max volume]` domain.
///
/// Bars share the candlestick slot layout so both charts line up when stacked.
/// When every volume is zero the domain is degenerate and all bars sit on the
/// floor with zero height.
pub fn render_volume_chart(
    bars: &[VolumeBar],
    width: f64,
    height: f64,
    opts: &VolumeOptions,
) -> ChartResult<RenderModel> {
    opts.validate()?;
    if bars.is_empty() {
        trace!("no volume bars; returning empty model");
        return Ok(RenderModel::default());
    }

    let viewport = Viewport::new(width, height);
    let plot = viewport.plot(&opts.layout);
    let max_volume = bars.iter().fold(0.0_f64, |m, b| m.max(b.volume));
    let domain = Domain::new(0.0, max_volume);
    if domain.is_degenerate() {
        trace!(bars = bars.len(), "zero volume range; bars collapse to the floor");
    }
    let ys = ValueScale::anchored_at_floor(domain, plot.height);
    let xs = SlotScale::new(plot.left, plot.width, bars.len(), opts.spacing);
    let axis = ValueAxis::build(&ys, opts.value_labels, opts.format)?;
    let palette = &opts.palette;

    let mut model = RenderModel::default();
    if opts.show_grid {
        axis.push_grid(&mut model, &plot, palette.grid);
    }

    let base = ys.to_px(0.0);
    for (i, bar) in bars.iter().enumerate() {
        let top = ys.to_px(bar.volume);
        let rect = Rect::from_xywh(xs.x(i), top.min(base), xs.item_width, (base - top).max(0.0));
        let paint = Paint::fill(palette.direction(bar.is_up)).with_opacity(palette.volume_opacity);
        model.push(Role::VolumeBar, Geometry::Rect(rect), paint);
    }

    if opts.show_labels {
        model.labels.extend(axis.labels(palette.text));
        let time = TimeAxis::build(bars, &xs, opts.time_labels);
        model.labels.extend(time.labels(viewport.height, palette.text));
    }

    debug!(
        bars = bars.len(),
        max_volume,
        primitives = model.primitives.len(),
        "rendered volume chart"
    );
    Ok(model)
}
