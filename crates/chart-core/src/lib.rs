// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the three chart renderers and their model types.

pub mod axis;
pub mod candles;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;
pub mod volume;

pub use axis::{TimeAxis, ValueAxis};
pub use candles::render_candlestick_chart;
pub use chart::{CandlestickOptions, LineOptions, VolumeOptions};
pub use error::{ChartError, ChartResult};
pub use geometry::{Anchor, Geometry, Label, LabelAxis, Paint, RenderModel, Role, Shape};
pub use line::render_line_chart;
pub use scale::{Domain, ValueScale};
pub use series::{Candle, ScalarPoint, VolumeBar};
pub use text::LabelFormat;
pub use theme::{Palette, Rgba};
pub use types::Layout;
pub use view::{Timeframe, Viewport};
pub use volume::render_volume_chart;
