// File: crates/chart-core/tests/volume.rs
// Purpose: Volume bar heights, zero-volume guard, colours, and abbreviated labels.

use chart_core::geometry::Rect;
use chart_core::{
    render_volume_chart, Candle, ChartError, Geometry, LabelAxis, Palette, RenderModel, Role, VolumeBar, VolumeOptions,
};

const W: f64 = 360.0;
const H: f64 = 120.0;
const FLOOR: f64 = H - 40.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn rects(model: &RenderModel) -> Vec<Rect> {
    model
        .shapes(Role::VolumeBar)
        .filter_map(|s| match s.geometry {
            Geometry::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

#[test]
fn bars_grow_up_from_the_floor_in_proportion() {
    let bars = vec![
        VolumeBar::new("a", 1000.0, true),
        VolumeBar::new("b", 500.0, false),
        VolumeBar::new("c", 0.0, true),
    ];
    let model = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    let r = rects(&model);
    assert_eq!(r.len(), 3);
    assert!(r.iter().all(|b| approx(b.bottom(), FLOOR)));
    assert!(approx(r[0].h, FLOOR));
    assert!(approx(r[1].h, FLOOR / 2.0));
    assert!(approx(r[2].h, 0.0));
}

#[test]
fn all_zero_volume_renders_flat_bars() {
    let bars = vec![VolumeBar::new("a", 0.0, true), VolumeBar::new("b", 0.0, false)];
    let model = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    let r = rects(&model);
    assert_eq!(r.len(), 2);
    for b in &r {
        assert_eq!(b.h, 0.0);
        assert!(b.y.is_finite());
    }
    let values: Vec<&str> = model.labels_on(LabelAxis::Value).map(|l| l.text.as_str()).collect();
    assert_eq!(values, ["0", "0", "0"]);
}

#[test]
fn colour_and_opacity_follow_direction() {
    let palette = Palette::light();
    let bars = vec![VolumeBar::new("a", 10.0, true), VolumeBar::new("b", 20.0, false)];
    let model = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    let paints: Vec<_> = model.shapes(Role::VolumeBar).map(|s| s.paint).collect();
    assert_eq!(paints[0].fill, Some(palette.up));
    assert_eq!(paints[1].fill, Some(palette.down));
    assert!(paints.iter().all(|p| approx(p.opacity, 0.7)));
}

#[test]
fn three_value_labels_with_suffixes() {
    let bars = vec![VolumeBar::new("a", 1_500_000.0, true), VolumeBar::new("b", 2_000.0, true)];
    let model = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    let values: Vec<&str> = model.labels_on(LabelAxis::Value).map(|l| l.text.as_str()).collect();
    assert_eq!(values, ["0", "750.0K", "1.5M"]);
    // labels hang 4px under their tick
    let ys: Vec<f64> = model.labels_on(LabelAxis::Value).map(|l| l.y).collect();
    assert!(approx(ys[0], FLOOR + 4.0));
    assert!(approx(ys[2], 4.0));
}

#[test]
fn bars_share_candle_slot_layout() {
    let candles = vec![
        Candle::new("09:00", 100.0, 110.0, 95.0, 105.0, 1000.0),
        Candle::new("10:00", 105.0, 115.0, 100.0, 98.0, 1500.0),
    ];
    let bars = VolumeBar::from_candles(&candles);
    assert!(bars[0].is_up && !bars[1].is_up);

    let model = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    let r = rects(&model);
    // (360 - 60) / 2 - 2
    assert!(approx(r[0].w, 148.0));
    assert!(approx(r[1].x, 60.0 + 150.0));
}

#[test]
fn grid_is_opt_in() {
    let bars = vec![VolumeBar::new("a", 10.0, true)];
    let off = render_volume_chart(&bars, W, H, &VolumeOptions::default()).unwrap();
    assert_eq!(off.shapes(Role::Grid).count(), 0);
    let on = render_volume_chart(&bars, W, H, &VolumeOptions { show_grid: true, ..Default::default() }).unwrap();
    assert_eq!(on.shapes(Role::Grid).count(), 3);
}

#[test]
fn label_count_below_two_fails_fast() {
    let bars = [VolumeBar::new("a", 10.0, true), VolumeBar::new("b", 20.0, false)];
    let opts = VolumeOptions { value_labels: 0, ..Default::default() };
    assert_eq!(render_volume_chart(&bars, W, H, &opts).unwrap_err(), ChartError::InvalidLabelCount(0));
    assert_eq!(render_volume_chart(&[], W, H, &opts).unwrap_err(), ChartError::InvalidLabelCount(0));
}
