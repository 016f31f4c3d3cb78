// File: crates/chart-core/tests/labels.rs
// Purpose: Tick sampling, time index selection, label formatting, and timeframe parsing.

use chart_core::grid::{linspace, sample_indices};
use chart_core::scale::{ContinuousScale, Domain, ValueScale};
use chart_core::text::abbreviate;
use chart_core::{ChartError, LabelFormat, Rgba, ScalarPoint, Timeframe, TimeAxis, ValueAxis};

#[test]
fn value_axis_has_exactly_k_even_ticks() {
    let scale = ValueScale::new(Domain::new(94.0, 116.0), 260.0);
    for k in [2, 3, 5, 9] {
        let axis = ValueAxis::build(&scale, k, LabelFormat::Currency).unwrap();
        assert_eq!(axis.ticks.len(), k);
        assert_eq!(axis.ticks.first().unwrap().value, 94.0);
        assert_eq!(axis.ticks.last().unwrap().value, 116.0);
        let step = 22.0 / (k - 1) as f64;
        for w in axis.ticks.windows(2) {
            assert!((w[1].value - w[0].value - step).abs() < 1e-9);
        }
    }
}

#[test]
fn fewer_than_two_labels_is_rejected() {
    let scale = ValueScale::new(Domain::new(0.0, 1.0), 100.0);
    assert_eq!(ValueAxis::build(&scale, 1, LabelFormat::Currency), Err(ChartError::InvalidLabelCount(1)));
    assert_eq!(linspace(0.0, 1.0, 0), Err(ChartError::InvalidLabelCount(0)));
}

#[test]
fn time_indices_cover_both_ends() {
    assert_eq!(sample_indices(0, 5), Vec::<usize>::new());
    assert_eq!(sample_indices(1, 5), vec![0]);
    assert_eq!(sample_indices(2, 5), vec![0, 1]);
    assert_eq!(sample_indices(3, 5), vec![0, 1, 2]);
    assert_eq!(sample_indices(10, 5), vec![0, 2, 4, 6, 9]);
    assert_eq!(sample_indices(100, 5), vec![0, 24, 49, 74, 99]);
    assert_eq!(sample_indices(10, 0), Vec::<usize>::new());
}

#[test]
fn time_axis_reads_labels_from_data() {
    let points: Vec<ScalarPoint> = (0..7).map(|i| ScalarPoint::new(format!("{i}:00"), i as f64)).collect();
    let xs = ContinuousScale::new(60.0, 300.0, points.len());
    let axis = TimeAxis::build(&points, &xs, 5);
    let texts: Vec<&str> = axis.ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["0:00", "1:00", "3:00", "4:00", "6:00"]);
    assert_eq!(axis.ticks.last().unwrap().x, 360.0);
}

#[test]
fn currency_labels() {
    assert_eq!(LabelFormat::Currency.format(94.0), "94.00");
    assert_eq!(LabelFormat::Currency.format(0.123), "0.12");
    assert_eq!(LabelFormat::Currency.format(1_234.5), "1.23K");
    assert_eq!(LabelFormat::Currency.format(65_000.0), "65.00K");
    assert_eq!(LabelFormat::Currency.format(2_500_000.0), "2.50M");
    assert_eq!(LabelFormat::Currency.format(3_100_000_000.0), "3.10B");
    assert_eq!(LabelFormat::Currency.format(-0.0), "0.00");
}

#[test]
fn volume_labels() {
    assert_eq!(LabelFormat::Volume.format(0.0), "0");
    assert_eq!(LabelFormat::Volume.format(750.0), "750");
    assert_eq!(LabelFormat::Volume.format(999.5), "999.5");
    assert_eq!(LabelFormat::Volume.format(1_000.0), "1.0K");
    assert_eq!(LabelFormat::Volume.format(1_500_000.0), "1.5M");
    assert_eq!(LabelFormat::Volume.format(7_300_000_000.0), "7.3B");
}

#[test]
fn small_volume_labels_keep_one_decimal() {
    assert_eq!(LabelFormat::Volume.format(1.0 / 3.0), "0.3");
    assert_eq!(LabelFormat::Volume.format(1.0 / 6.0), "0.2");
    assert_eq!(LabelFormat::Volume.format(-0.01), "0");

    let ys = ValueScale::anchored_at_floor(Domain::new(0.0, 1.0 / 3.0), 100.0);
    let axis = ValueAxis::build(&ys, 3, LabelFormat::Volume).unwrap();
    let text: Vec<String> = axis.labels(Rgba::from_rgb(0, 0, 0)).into_iter().map(|l| l.text).collect();
    assert_eq!(text, ["0", "0.2", "0.3"]);
}

#[test]
fn rounding_carries_into_next_unit() {
    assert_eq!(LabelFormat::Currency.format(999_999.0), "1.00M");
    assert_eq!(LabelFormat::Volume.format(999_960.0), "1.0M");
    assert_eq!(LabelFormat::Currency.format(999.996), "1.00K");
    assert_eq!(LabelFormat::Currency.format(999.994), "999.99");
    assert_eq!(LabelFormat::Volume.format(999.96), "1.0K");
}

#[test]
fn abbreviation_uses_magnitude() {
    assert_eq!(abbreviate(-2_000.0, 1).as_deref(), Some("-2.0K"));
    assert_eq!(abbreviate(999.0, 1), None);
}

#[test]
fn timeframes_parse_and_display() {
    let names: Vec<String> = Timeframe::ALL.iter().map(|tf| tf.to_string()).collect();
    assert_eq!(names, ["5m", "15m", "1h", "4h", "1d"]);
    assert_eq!("4H".parse::<Timeframe>(), Ok(Timeframe::H4));
    assert_eq!(" 15m ".parse::<Timeframe>(), Ok(Timeframe::M15));
    assert!(matches!("2w".parse::<Timeframe>(), Err(ChartError::UnknownTimeframe(_))));
    assert_eq!(Timeframe::default(), Timeframe::H1);
    assert_eq!(Timeframe::H4.duration(), chrono::Duration::hours(4));
}
