// File: crates/chart-core/tests/scale.rs
// Purpose: Value and horizontal scale transforms, including degenerate domains.

use chart_core::scale::{ContinuousScale, Domain, HorizontalScale, SlotScale, ValueScale, PADDING};
use chart_core::types::Layout;
use chart_core::Viewport;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn padded_endpoints_map_to_plot_edges() {
    let domain = Domain::new(95.0, 115.0).padded(PADDING);
    assert!(approx(domain.min, 94.0));
    assert!(approx(domain.max, 116.0));

    let s = ValueScale::new(domain, 260.0);
    assert!(approx(s.to_px(domain.min), 260.0));
    assert!(approx(s.to_px(domain.max), 0.0));
    assert!(approx(s.to_px(105.0), 130.0));
}

#[test]
fn inverse_round_trips_inside_domain() {
    let s = ValueScale::new(Domain::new(-3.0, 9.0), 120.0);
    for v in [-3.0, 0.0, 2.5, 9.0] {
        assert!(approx(s.to_value(s.to_px(v)), v));
    }
}

#[test]
fn degenerate_domain_centres_or_anchors() {
    let flat = Domain::new(5.0, 5.0).padded(PADDING);
    assert!(flat.is_degenerate());

    let centred = ValueScale::new(flat, 200.0);
    for v in [f64::MIN, -1.0, 5.0, 1e300] {
        assert_eq!(centred.to_px(v), 100.0);
    }
    assert_eq!(centred.to_value(37.0), 5.0);

    let floor = ValueScale::anchored_at_floor(Domain::new(0.0, 0.0), 80.0);
    assert_eq!(floor.to_px(0.0), 80.0);
}

#[test]
fn nan_span_counts_as_degenerate() {
    let d = Domain::new(f64::NAN, 1.0);
    assert!(d.is_degenerate());
    assert!(ValueScale::new(d, 10.0).to_px(0.5).is_finite());
}

#[test]
fn domain_from_values() {
    assert_eq!(Domain::from_values(Vec::<f64>::new()), None);
    assert_eq!(Domain::from_values([3.0, -1.0, 7.0]), Some(Domain::new(-1.0, 7.0)));
}

#[test]
fn continuous_scale_spreads_and_centres_single_point() {
    let s = ContinuousScale::new(60.0, 300.0, 4);
    assert!(approx(s.x(0), 60.0));
    assert!(approx(s.x(3), 360.0));
    assert!(approx(s.center(1), 160.0));

    let one = ContinuousScale::new(60.0, 300.0, 1);
    assert!(approx(one.x(0), 210.0));
}

#[test]
fn slot_scale_width_and_positions() {
    let s = SlotScale::new(60.0, 340.0, 2, 2.0);
    assert!(approx(s.item_width, 168.0));
    assert!(approx(s.x(1), 230.0));
    assert!(approx(s.center(0), 144.0));

    let crowded = SlotScale::new(60.0, 10.0, 50, 2.0);
    assert!(approx(crowded.item_width, 2.0));
    assert_eq!(crowded.len(), 50);
}

#[test]
fn viewport_reserves_gutter_and_band() {
    let plot = Viewport::new(400.0, 300.0).plot(&Layout::default());
    assert!(approx(plot.left, 60.0));
    assert!(approx(plot.width, 340.0));
    assert!(approx(plot.height, 260.0));
    assert!(approx(plot.right, 400.0));

    let tiny = Viewport::new(20.0, 10.0).plot(&Layout::default());
    assert_eq!(tiny.width, 0.0);
    assert_eq!(tiny.height, 0.0);
}
