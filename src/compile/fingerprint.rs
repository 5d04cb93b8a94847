use kurbo::PathEl;

use crate::compile::plan::{DrawOp, LayerKind, PlanWarning, RenderPlan};
use crate::foundation::core::{BezPath, FillRule, Point, Rect};
use crate::foundation::math::Fnv1a64;
use crate::matrix::adapter::Corner;
use crate::style::color::Color;
use crate::style::fill::{Fill, LinearGradient};

/// 128-bit content hash of a [`RenderPlan`], stable across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PlanFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl std::fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub(crate) fn fingerprint_plan(plan: &RenderPlan) -> PlanFingerprint {
    let mut h = PairHasher::new();
    h.f64(plan.canvas_size);
    h.f64(plan.content_offset.x);
    h.f64(plan.content_offset.y);
    h.f64(plan.cell_size);
    h.u64(plan.matrix_size as u64);
    h.u64(plan.module_count as u64);

    h.u64(plan.gradients.len() as u64);
    for g in &plan.gradients {
        write_gradient(&mut h, g);
    }

    h.u64(plan.layers.len() as u64);
    for layer in &plan.layers {
        write_layer_kind(&mut h, layer.kind);
        h.u64(layer.ops.len() as u64);
        for op in &layer.ops {
            write_op(&mut h, op);
        }
    }

    h.u64(plan.warnings.len() as u64);
    for w in &plan.warnings {
        match *w {
            PlanWarning::LogoTooLarge { covered, limit } => {
                h.u8(0);
                h.f64(covered);
                h.f64(limit);
            }
            PlanWarning::LogoShrunk { from, to } => {
                h.u8(1);
                h.f64(from);
                h.f64(to);
            }
        }
    }

    h.finish()
}

fn write_gradient(h: &mut PairHasher, g: &LinearGradient) {
    h.str(&g.id);
    h.point(g.start);
    h.point(g.end);
    h.u64(g.stops.len() as u64);
    for stop in &g.stops {
        h.f64(stop.offset);
        h.color(stop.color);
    }
}

fn write_layer_kind(h: &mut PairHasher, kind: LayerKind) {
    match kind {
        LayerKind::Background => h.u8(0),
        LayerKind::BackgroundImage => h.u8(1),
        LayerKind::FrameUnderlay => h.u8(2),
        LayerKind::ModuleFill => h.u8(3),
        LayerKind::Eye { corner } => {
            h.u8(4);
            h.u8(match corner {
                Corner::TopLeft => 0,
                Corner::TopRight => 1,
                Corner::BottomLeft => 2,
            });
        }
        LayerKind::Logo => h.u8(5),
        LayerKind::FrameOverlay => h.u8(6),
    }
}

fn write_op(h: &mut PairHasher, op: &DrawOp) {
    match op {
        DrawOp::FillPath {
            path,
            fill,
            rule,
            opacity,
        } => {
            h.u8(0);
            h.path(path);
            match fill {
                Fill::Solid { color } => {
                    h.u8(0);
                    h.color(*color);
                }
                Fill::Gradient { id } => {
                    h.u8(1);
                    h.str(id);
                }
            }
            h.u8(match rule {
                FillRule::NonZero => 0,
                FillRule::EvenOdd => 1,
            });
            h.f64(*opacity);
        }
        DrawOp::StrokePath { path, color, width } => {
            h.u8(1);
            h.path(path);
            h.color(*color);
            h.f64(*width);
        }
        DrawOp::Image {
            href,
            rect,
            opacity,
        } => {
            h.u8(2);
            h.str(href);
            h.rect(*rect);
            h.f64(*opacity);
        }
        DrawOp::Text {
            text,
            position,
            font_size,
            color,
        } => {
            h.u8(3);
            h.str(text);
            h.point(*position);
            h.f64(*font_size);
            h.color(*color);
        }
    }
}

/// Two independently seeded FNV-1a streams fed the same bytes.
struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
            b: Fnv1a64::new(Fnv1a64::ALT_BASIS),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn point(&mut self, p: Point) {
        self.f64(p.x);
        self.f64(p.y);
    }

    fn rect(&mut self, r: Rect) {
        self.f64(r.x0);
        self.f64(r.y0);
        self.f64(r.x1);
        self.f64(r.y1);
    }

    fn color(&mut self, c: Color) {
        self.a.write_bytes(&[c.r, c.g, c.b, c.a]);
        self.b.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn path(&mut self, path: &BezPath) {
        self.u64(path.elements().len() as u64);
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    self.u8(0);
                    self.point(p);
                }
                PathEl::LineTo(p) => {
                    self.u8(1);
                    self.point(p);
                }
                PathEl::QuadTo(p1, p2) => {
                    self.u8(2);
                    self.point(p1);
                    self.point(p2);
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    self.u8(3);
                    self.point(p1);
                    self.point(p2);
                    self.point(p3);
                }
                PathEl::ClosePath => self.u8(4),
            }
        }
    }

    fn finish(self) -> PlanFingerprint {
        PlanFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
