// File: crates/demo/src/config.rs
// Summary: TOML configuration for the demo: surface sizes, palette, and per-chart options.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{theme, CandlestickOptions, LineOptions, Timeframe, VolumeOptions};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: f64,
    pub price_height: f64,
    pub line_height: f64,
    pub volume_height: f64,
    /// Preset name applied to all three charts ("light", "dark", ...).
    pub palette: Option<String>,
    pub timeframe: Timeframe,
    pub candles: CandlestickOptions,
    pub line: LineOptions,
    pub volume: VolumeOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            price_height: 300.0,
            line_height: 200.0,
            volume_height: 120.0,
            palette: None,
            timeframe: Timeframe::default(),
            candles: CandlestickOptions::default(),
            line: LineOptions::default(),
            volume: VolumeOptions::default(),
        }
    }
}

impl DemoConfig {
    /// Defaults when `path` is `None`; otherwise the file's overrides on top of them.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?;
                toml::from_str::<DemoConfig>(&raw).with_context(|| format!("parsing config {}", p.display()))?
            }
            None => DemoConfig::default(),
        };
        if let Some(name) = cfg.palette.clone() {
            cfg.apply_palette(&name);
        }
        Ok(cfg)
    }

    pub fn apply_palette(&mut self, name: &str) {
        let palette = theme::find(name);
        if !palette.name.eq_ignore_ascii_case(name) {
            tracing::warn!(requested = name, using = %palette.name, "unknown palette");
        }
        self.candles.palette = palette.clone();
        self.line.palette = palette.clone();
        self.volume.palette = palette;
        self.palette = Some(name.to_string());
    }
}
