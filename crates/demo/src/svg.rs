// File: crates/demo/src/svg.rs
// Summary: Serializes a RenderModel into a standalone SVG document.

use std::fmt::{self, Write};

use chart_core::geometry::{Anchor, Geometry, Paint, Path, Shape};
use chart_core::{Label, RenderModel, Rgba};

const FONT_SIZE: f64 = 10.0;

pub fn render_svg(model: &RenderModel, width: f64, height: f64, background: Option<Rgba>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    if let Some(bg) = background {
        writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.hex())?;
    }
    for shape in &model.primitives {
        write_shape(&mut out, shape)?;
    }
    for label in &model.labels {
        write_label(&mut out, label)?;
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_shape(out: &mut String, shape: &Shape) -> fmt::Result {
    let paint = paint_attrs(&shape.paint)?;
    match &shape.geometry {
        Geometry::Line(l) => writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{paint}/>"#,
            l.x1, l.y1, l.x2, l.y2
        ),
        Geometry::Rect(r) => writeln!(
            out,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{paint}/>"#,
            r.x, r.y, r.w, r.h
        ),
        Geometry::Path(p) => writeln!(out, r#"  <path d="{}"{paint}/>"#, path_data(p)?),
        Geometry::Circle(c) => writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}"{paint}/>"#,
            c.cx, c.cy, c.r
        ),
    }
}

fn path_data(path: &Path) -> Result<String, fmt::Error> {
    let mut d = String::new();
    for (i, p) in path.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        write!(d, "{}{cmd} {:.2} {:.2}", if i == 0 { "" } else { " " }, p.x, p.y)?;
    }
    if path.closed && !path.points.is_empty() {
        d.push_str(" Z");
    }
    Ok(d)
}

fn paint_attrs(paint: &Paint) -> Result<String, fmt::Error> {
    let mut attrs = String::new();
    match paint.fill {
        Some(fill) => {
            write!(attrs, r#" fill="{}""#, fill.hex())?;
            write_channel_alpha(&mut attrs, "fill-opacity", fill)?;
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = paint.stroke {
        write!(attrs, r#" stroke="{}" stroke-width="{}""#, stroke.color.hex(), stroke.width)?;
        write_channel_alpha(&mut attrs, "stroke-opacity", stroke.color)?;
        if let Some((dash, gap)) = stroke.dash {
            write!(attrs, r#" stroke-dasharray="{dash},{gap}""#)?;
        }
    }
    if paint.opacity < 1.0 {
        write!(attrs, r#" opacity="{}""#, paint.opacity)?;
    }
    Ok(attrs)
}

// Opaque colours emit nothing.
fn write_channel_alpha(attrs: &mut String, name: &str, color: Rgba) -> fmt::Result {
    if color.a == u8::MAX {
        return Ok(());
    }
    write!(attrs, r#" {name}="{:.3}""#, color.alpha_f64())
}

fn write_label(out: &mut String, label: &Label) -> fmt::Result {
    let anchor = match label.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let mut text_alpha = String::new();
    write_channel_alpha(&mut text_alpha, "fill-opacity", label.color)?;
    writeln!(
        out,
        r#"  <text x="{:.2}" y="{:.2}" font-size="{FONT_SIZE}" text-anchor="{anchor}" fill="{}"{text_alpha}>{}</text>"#,
        label.x,
        label.y,
        label.color.hex(),
        escape(&label.text)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
