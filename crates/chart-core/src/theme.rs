// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes passed explicitly into every renderer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbb`; alpha is left to the caller.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha channel in `0.0..=1.0`.
    pub fn alpha_f64(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub name: String,
    /// Rising candles and volume bars.
    pub up: Rgba,
    /// Falling candles and volume bars.
    pub down: Rgba,
    /// Default line and area colour.
    pub accent: Rgba,
    pub grid: Rgba,
    pub text: Rgba,
    pub volume_opacity: f64,
    pub area_opacity: f64,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            up: Rgba::from_rgb(0x34, 0xc7, 0x59),
            down: Rgba::from_rgb(0xff, 0x3b, 0x30),
            accent: Rgba::from_rgb(0x00, 0x7a, 0xff),
            grid: Rgba::from_rgb(0xc6, 0xc6, 0xc8),
            text: Rgba::from_rgb(0x00, 0x00, 0x00),
            volume_opacity: 0.7,
            area_opacity: 0.1,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            up: Rgba::from_rgb(0x30, 0xd1, 0x58),
            down: Rgba::from_rgb(0xff, 0x45, 0x3a),
            accent: Rgba::from_rgb(0x0a, 0x84, 0xff),
            grid: Rgba::from_rgb(0x38, 0x38, 0x3a),
            text: Rgba::from_rgb(0xff, 0xff, 0xff),
            volume_opacity: 0.7,
            area_opacity: 0.1,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark".into(),
            up: Rgba::from_rgb(0x00, 0xff, 0x00),
            down: Rgba::from_rgb(0xff, 0x00, 0x00),
            accent: Rgba::from_rgb(0x00, 0xff, 0xff),
            grid: Rgba::from_rgb(0x22, 0x22, 0x22),
            text: Rgba::from_rgb(0xff, 0xff, 0xff),
            volume_opacity: 0.8,
            area_opacity: 0.2,
        }
    }

    /// Colour for a rising (`true`) or falling bar.
    #[inline]
    pub fn direction(&self, is_up: bool) -> Rgba {
        if is_up { self.up } else { self.down }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::light(), Palette::dark(), Palette::high_contrast_dark()]
}

/// Find a palette by its `name`, falling back to light.
pub fn find(name: &str) -> Palette {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Palette::light)
}
