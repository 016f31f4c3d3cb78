// File: crates/chart-core/src/geometry.rs
// Summary: Drawable primitives and the render model returned by every renderer.

use serde::{Deserialize, Serialize};

use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn bottom(&self) -> f64 { self.y + self.h }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Ordered vertices joined by straight segments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<PathPoint>,
    /// Closed paths connect the last vertex back to the first.
    pub closed: bool,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n), closed: false }
    }
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push(PathPoint { x, y });
    }
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Line(Line),
    Rect(Rect),
    Path(Path),
    Circle(Circle),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// Dash/gap lengths; `None` draws a solid stroke.
    pub dash: Option<(f64, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub stroke: Option<Stroke>,
    pub fill: Option<Rgba>,
    pub opacity: f64,
}

impl Paint {
    pub fn fill(color: Rgba) -> Self {
        Self { stroke: None, fill: Some(color), opacity: 1.0 }
    }
    pub fn stroke(color: Rgba, width: f64) -> Self {
        Self { stroke: Some(Stroke { color, width, dash: None }), fill: None, opacity: 1.0 }
    }
    pub fn dashed(color: Rgba, width: f64, dash: (f64, f64)) -> Self {
        Self { stroke: Some(Stroke { color, width, dash: Some(dash) }), fill: None, opacity: 1.0 }
    }
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// What a shape represents; lets hosts layer or restyle without re-deriving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Grid,
    Wick,
    Body,
    Line,
    Area,
    Marker,
    VolumeBar,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub role: Role,
    pub geometry: Geometry,
    pub paint: Paint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Which axis a label belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAxis {
    Value,
    Time,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    pub axis: LabelAxis,
    pub color: Rgba,
}

/// Everything one renderer call produces, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub primitives: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.labels.is_empty()
    }

    pub fn push(&mut self, role: Role, geometry: Geometry, paint: Paint) {
        self.primitives.push(Shape { role, geometry, paint });
    }

    pub fn shapes(&self, role: Role) -> impl Iterator<Item = &Shape> + '_ {
        self.primitives.iter().filter(move |s| s.role == role)
    }

    pub fn labels_on(&self, axis: LabelAxis) -> impl Iterator<Item = &Label> + '_ {
        self.labels.iter().filter(move |l| l.axis == axis)
    }
}
