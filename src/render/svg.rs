use std::fmt::Write as _;

use crate::compile::plan::{DrawOp, Layer, RenderPlan};
use crate::foundation::core::FillRule;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::render::backend::PlanRenderer;
use crate::style::color::Color;
use crate::style::fill::{Fill, LinearGradient};

/// Writes a plan as standalone SVG 1.1 markup.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    /// Output width and height in user units; the viewBox always spans the plan canvas.
    /// `None` keeps the canvas size.
    pub size: Option<f64>,
}

impl PlanRenderer for SvgRenderer {
    type Output = String;

    fn render_plan(&mut self, plan: &RenderPlan) -> QrStyleResult<String> {
        write_svg(plan, self.size).map_err(|e| QrStyleError::serde(format!("write svg: {e}")))
    }
}

/// Render `plan` to an SVG string at its natural size.
pub fn plan_to_svg(plan: &RenderPlan) -> QrStyleResult<String> {
    SvgRenderer::default().render_plan(plan)
}

fn write_svg(plan: &RenderPlan, size: Option<f64>) -> Result<String, std::fmt::Error> {
    let c = plan.canvas_size;
    let out_size = size.unwrap_or(c);
    let mut s = String::with_capacity(4096);
    writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" width="{w}" height="{w}" viewBox="0 0 {c} {c}">"#,
        w = out_size,
        c = c,
    )?;

    if !plan.gradients.is_empty() {
        s.push_str("<defs>\n");
        for g in &plan.gradients {
            write_gradient(&mut s, g)?;
        }
        s.push_str("</defs>\n");
    }

    for layer in &plan.layers {
        write_layer(&mut s, layer)?;
    }

    s.push_str("</svg>\n");
    Ok(s)
}

fn write_gradient(s: &mut String, g: &LinearGradient) -> std::fmt::Result {
    writeln!(
        s,
        r#"<linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
        escape_attr(&g.id),
        g.start.x,
        g.start.y,
        g.end.x,
        g.end.y
    )?;
    for stop in &g.stops {
        write!(
            s,
            r#"<stop offset="{}" stop-color="{}""#,
            stop.offset,
            stop.color.to_hex()
        )?;
        if !stop.color.is_opaque() {
            write!(s, r#" stop-opacity="{}""#, stop.color.opacity())?;
        }
        s.push_str("/>\n");
    }
    s.push_str("</linearGradient>\n");
    Ok(())
}

fn write_layer(s: &mut String, layer: &Layer) -> std::fmt::Result {
    writeln!(s, r#"<g data-layer="{}">"#, layer.kind.name())?;
    for op in &layer.ops {
        write_op(s, op)?;
    }
    s.push_str("</g>\n");
    Ok(())
}

fn write_op(s: &mut String, op: &DrawOp) -> std::fmt::Result {
    match op {
        DrawOp::FillPath {
            path,
            fill,
            rule,
            opacity,
        } => {
            write!(s, r#"<path d="{}""#, path.to_svg())?;
            write_paint(s, "fill", fill)?;
            if *rule == FillRule::EvenOdd {
                write!(s, r#" fill-rule="{}""#, rule.as_svg())?;
            }
            write_opacity(s, *opacity)?;
            s.push_str("/>\n");
        }
        DrawOp::StrokePath { path, color, width } => {
            write!(s, r#"<path d="{}" fill="none""#, path.to_svg())?;
            write_paint(s, "stroke", &Fill::solid(*color))?;
            write!(s, r#" stroke-width="{width}""#)?;
            s.push_str("/>\n");
        }
        DrawOp::Image {
            href,
            rect,
            opacity,
        } => {
            write!(
                s,
                r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" xlink:href="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                escape_attr(href)
            )?;
            write_opacity(s, *opacity)?;
            s.push_str("/>\n");
        }
        DrawOp::Text {
            text,
            position,
            font_size,
            color,
        } => {
            write!(
                s,
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="{}" font-weight="bold""#,
                position.x, position.y, font_size
            )?;
            write_paint(s, "fill", &Fill::solid(*color))?;
            writeln!(s, ">{}</text>", escape_text(text))?;
        }
    }
    Ok(())
}

fn write_paint(s: &mut String, attr: &str, fill: &Fill) -> std::fmt::Result {
    match fill {
        Fill::Solid { color } => write_color(s, attr, *color),
        Fill::Gradient { id } => write!(s, r#" {attr}="url(#{})""#, escape_attr(id)),
    }
}

fn write_color(s: &mut String, attr: &str, color: Color) -> std::fmt::Result {
    write!(s, r#" {attr}="{}""#, color.to_hex())?;
    if !color.is_opaque() {
        write!(s, r#" {attr}-opacity="{}""#, color.opacity())?;
    }
    Ok(())
}

fn write_opacity(s: &mut String, opacity: f64) -> std::fmt::Result {
    if opacity < 1.0 {
        write!(s, r#" opacity="{opacity}""#)?;
    }
    Ok(())
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;").replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
