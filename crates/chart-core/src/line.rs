// File: crates/chart-core/src/line.rs
// Summary: Line and area geometry for scalar series (price or portfolio value over time).

use tracing::{debug, trace};

use crate::axis::{TimeAxis, ValueAxis};
use crate::chart::LineOptions;
use crate::error::ChartResult;
use crate::geometry::{Circle, Geometry, Paint, Path, RenderModel, Role};
use crate::scale::{ContinuousScale, Domain, HorizontalScale, ValueScale, PADDING};
use crate::series::ScalarPoint;
use crate::view::Viewport;

/// Render `points` as a straight-segment polyline, with optional area fill,
/// point markers, gridlines, and labels.
///
/// Draw order: grid, area, line, markers. A single point yields a one-vertex
/// path centred horizontally; an empty slice yields an empty model.
pub fn render_line_chart(
    points: &[ScalarPoint],
    width: f64,
    height: f64,
    opts: &LineOptions,
) -> ChartResult<RenderModel> {
    opts.validate()?;
    let Some(domain) = Domain::from_values(points.iter().map(|p| p.value)) else {
        trace!("no points; returning empty model");
        return Ok(RenderModel::default());
    };

    let viewport = Viewport::new(width, height);
    let plot = viewport.plot(&opts.layout);
    let domain = domain.padded(PADDING);
    if domain.is_degenerate() {
        trace!(value = domain.min, points = points.len(), "flat value domain; centring line");
    }
    let ys = ValueScale::new(domain, plot.height);
    let xs = ContinuousScale::new(plot.left, plot.width, points.len());
    let axis = ValueAxis::build(&ys, opts.value_labels, opts.format)?;
    let color = opts.line_color();

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (xs.x(i), ys.to_px(p.value)))
        .collect();

    let mut model = RenderModel::default();
    if opts.show_grid {
        axis.push_grid(&mut model, &plot, opts.palette.grid);
    }

    if opts.show_area {
        model.push(
            Role::Area,
            Geometry::Path(area_path(&coords, plot.floor())),
            Paint::fill(color).with_opacity(opts.palette.area_opacity),
        );
    }

    let mut line = Path::with_capacity(coords.len());
    for &(x, y) in &coords {
        line.push(x, y);
    }
    model.push(Role::Line, Geometry::Path(line), Paint::stroke(color, opts.line_width));

    if opts.show_dots {
        for &(cx, cy) in &coords {
            model.push(
                Role::Marker,
                Geometry::Circle(Circle { cx, cy, r: opts.dot_radius }),
                Paint::fill(color),
            );
        }
    }

    if opts.show_labels {
        model.labels.extend(axis.labels(opts.palette.text));
        let time = TimeAxis::build(points, &xs, opts.time_labels);
        model.labels.extend(time.labels(viewport.height, opts.palette.text));
    }

    debug!(
        points = points.len(),
        primitives = model.primitives.len(),
        labels = model.labels.len(),
        "rendered line chart"
    );
    Ok(model)
}

/// The line dropped to `floor` at both ends and closed.
fn area_path(coords: &[(f64, f64)], floor: f64) -> Path {
    let mut path = Path::with_capacity(coords.len() + 2);
    if let (Some(&(first_x, _)), Some(&(last_x, _))) = (coords.first(), coords.last()) {
        path.push(first_x, floor);
        for &(x, y) in coords {
            path.push(x, y);
        }
        path.push(last_x, floor);
    }
    path.close()
}
