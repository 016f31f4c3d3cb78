// File: crates/chart-core/src/candles.rs
// Summary: Candlestick geometry: one wick line and one body rect per candle.

use tracing::{debug, trace};

use crate::axis::{TimeAxis, ValueAxis};
use crate::chart::CandlestickOptions;
use crate::error::ChartResult;
use crate::geometry::{Geometry, Line, Paint, Rect, RenderModel, Role};
use crate::scale::{Domain, HorizontalScale, SlotScale, ValueScale, PADDING};
use crate::series::Candle;
use crate::view::Viewport;

/// Bodies never collapse below this height, so a doji stays visible.
pub const MIN_BODY_HEIGHT: f64 = 1.0;

/// Lowest low to highest high.
fn price_domain(candles: &[Candle]) -> Option<Domain> {
    let first = candles.first()?;
    let (min, max) = candles
        .iter()
        .fold((first.low, first.high), |(lo, hi), c| (lo.min(c.low), hi.max(c.high)));
    Some(Domain::new(min, max))
}

/// Render `candles` into a `width` x `height` surface.
///
/// Output order: gridlines, then wick + body per candle in input order, with
/// value and time labels alongside. An empty slice yields an empty model.
/// Malformed candles (`low > high` etc.) are drawn as given.
pub fn render_candlestick_chart(
    candles: &[Candle],
    width: f64,
    height: f64,
    opts: &CandlestickOptions,
) -> ChartResult<RenderModel> {
    opts.validate()?;
    let Some(domain) = price_domain(candles) else {
        trace!("no candles; returning empty model");
        return Ok(RenderModel::default());
    };

    let viewport = Viewport::new(width, height);
    let plot = viewport.plot(&opts.layout);
    let domain = domain.padded(PADDING);
    if domain.is_degenerate() {
        trace!(price = domain.min, "flat price domain; centring candles");
    }
    let ys = ValueScale::new(domain, plot.height);
    let xs = SlotScale::new(plot.left, plot.width, candles.len(), opts.spacing);
    let axis = ValueAxis::build(&ys, opts.value_labels, opts.format)?;
    let palette = &opts.palette;

    let mut model = RenderModel::default();
    if opts.show_grid {
        axis.push_grid(&mut model, &plot, palette.grid);
    }

    for (i, c) in candles.iter().enumerate() {
        let color = palette.direction(c.is_up());
        let cx = xs.center(i);

        let wick = Line::new(cx, ys.to_px(c.high), cx, ys.to_px(c.low));
        model.push(Role::Wick, Geometry::Line(wick), Paint::stroke(color, opts.wick_width));

        let top = ys.to_px(c.open.max(c.close));
        let bottom = ys.to_px(c.open.min(c.close));
        let body = Rect::from_xywh(xs.x(i), top, xs.item_width, (bottom - top).max(MIN_BODY_HEIGHT));
        model.push(Role::Body, Geometry::Rect(body), Paint::fill(color));
    }

    if opts.show_labels {
        model.labels.extend(axis.labels(palette.text));
        let time = TimeAxis::build(candles, &xs, opts.time_labels);
        model.labels.extend(time.labels(viewport.height, palette.text));
    }

    debug!(
        candles = candles.len(),
        primitives = model.primitives.len(),
        labels = model.labels.len(),
        "rendered candlestick chart"
    );
    Ok(model)
}
