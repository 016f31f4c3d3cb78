// File: crates/demo/src/main.rs
// Summary: Demo loads OHLCV CSV and renders candlestick, line, and volume charts to SVG and JSON.

mod config;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{
    render_candlestick_chart, render_line_chart, render_volume_chart, Candle, RenderModel, ScalarPoint, Timeframe,
    VolumeBar,
};
use chrono::DateTime;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[derive(Parser, Debug)]
#[command(name = "chart-demo", about = "Render OHLCV CSV data to chart geometry (SVG + JSON)")]
struct Args {
    /// OHLCV CSV file with a header row.
    input: PathBuf,
    /// Optional TOML file overriding sizes, palette, and chart options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    /// Palette preset; wins over the config file.
    #[arg(long)]
    palette: Option<String>,
    /// Timeframe recorded in the log and the JSON bundle; charts are not resampled.
    #[arg(long)]
    timeframe: Option<Timeframe>,
}

#[derive(Serialize)]
struct ModelBundle<'a> {
    source: String,
    timeframe: Timeframe,
    candles: &'a RenderModel,
    line: &'a RenderModel,
    volume: &'a RenderModel,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut cfg = DemoConfig::load(args.config.as_deref())?;
    if let Some(name) = &args.palette {
        cfg.apply_palette(name);
    }
    if let Some(tf) = args.timeframe {
        cfg.timeframe = tf;
    }

    anyhow::ensure!(args.input.exists(), "file not found: {}", args.input.display());
    let candles = load_ohlcv_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(rows = candles.len(), file = %args.input.display(), timeframe = %cfg.timeframe, "loaded candles");
    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter");
    }

    let points = ScalarPoint::closes(&candles);
    let bars = VolumeBar::from_candles(&candles);

    let price = render_candlestick_chart(&candles, cfg.width, cfg.price_height, &cfg.candles)?;
    let line = render_line_chart(&points, cfg.width, cfg.line_height, &cfg.line)?;
    let volume = render_volume_chart(&bars, cfg.width, cfg.volume_height, &cfg.volume)?;

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");

    let charts = [
        ("candles", &price, cfg.price_height, &cfg.candles.palette),
        ("line", &line, cfg.line_height, &cfg.line.palette),
        ("volume", &volume, cfg.volume_height, &cfg.volume.palette),
    ];
    for (suffix, model, height, palette) in charts {
        let background = (palette.name != "light").then_some(chart_core::Rgba::from_rgb(0, 0, 0));
        let doc = svg::render_svg(model, cfg.width, height, background)
            .map_err(|e| anyhow::anyhow!("formatting {suffix} svg: {e}"))?;
        let path = args.out.join(format!("{stem}_{suffix}.svg"));
        std::fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
        info!(file = %path.display(), shapes = model.primitives.len(), labels = model.labels.len(), "wrote chart");
    }

    let bundle = ModelBundle {
        source: args.input.display().to_string(),
        timeframe: cfg.timeframe,
        candles: &price,
        line: &line,
        volume: &volume,
    };
    let json_path = args.out.join(format!("{stem}_models.json"));
    std::fs::write(&json_path, serde_json::to_string_pretty(&bundle)?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    info!(file = %json_path.display(), "wrote render models");

    Ok(())
}

/// Load a Binance-like OHLCV CSV. Rows missing any of open/high/low/close are skipped.
fn load_ohlcv_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v", "base_volume"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok());

        let time = i_time
            .and_then(|ix| rec.get(ix))
            .map(time_label)
            .unwrap_or_else(|| row.to_string());

        match (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            (Some(o), Some(h), Some(l), Some(c)) => {
                out.push(Candle::new(time, o, h, l, c, parse(i_volume).unwrap_or(0.0)));
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a full OHLC set were skipped");
    }
    Ok(out)
}

/// Epoch seconds or milliseconds become `MM-DD HH:MM` (UTC); anything else is kept verbatim.
fn time_label(raw: &str) -> String {
    let Ok(n) = raw.parse::<i64>() else {
        return raw.to_string();
    };
    let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) if n > 10_i64.pow(9) => dt.format("%m-%d %H:%M").to_string(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_times_become_readable_labels() {
        assert_eq!(time_label("1700000000"), "11-14 22:13");
        assert_eq!(time_label("1700000000000"), "11-14 22:13");
        assert_eq!(time_label("09:00"), "09:00");
        assert_eq!(time_label("42"), "42");
    }

    #[test]
    fn timeframe_flag_is_described_as_display_only() {
        use clap::CommandFactory;

        let args = Args::try_parse_from(["chart-demo", "data.csv", "--timeframe", "4H"]).unwrap();
        assert_eq!(args.timeframe, Some(Timeframe::H4));
        assert!(Args::try_parse_from(["chart-demo", "data.csv", "--timeframe", "2w"]).is_err());

        let cmd = Args::command();
        let help = cmd
            .get_arguments()
            .find(|a| a.get_id() == "timeframe")
            .and_then(|a| a.get_help())
            .map(|h| h.to_string())
            .unwrap_or_default();
        assert!(help.contains("not resampled"), "{help}");
        assert!(!help.contains("title"), "{help}");
    }

    #[test]
    fn loads_csv_with_aliased_headers() {
        let dir = std::env::temp_dir().join(format!("chart-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.csv");
        std::fs::write(
            &path,
            "Time,O,H,L,C,Vol\n09:00,100,110,95,105,1000\n10:00,105,115,100,110,1500\nbad,x,1,1,1,1\n",
        )
        .unwrap();

        let candles = load_ohlcv_csv(&path).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1], Candle::new("10:00", 105.0, 115.0, 100.0, 110.0, 1500.0));
        std::fs::remove_dir_all(&dir).ok();
    }
}
