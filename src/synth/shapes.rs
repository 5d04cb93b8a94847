use kurbo::{Circle, RoundedRect, RoundedRectRadii};

use crate::foundation::core::{BezPath, Point, Rect};
use crate::style::settings::DotStyle;

/// Flattening tolerance handed to kurbo when converting shapes to path elements.
pub(crate) const TOLERANCE: f64 = 0.1;

/// Append a closed kurbo shape to `path` as a new sub-path.
pub(crate) fn push_shape(path: &mut BezPath, shape: &impl kurbo::Shape) {
    path.extend(shape.path_elements(TOLERANCE));
}

pub(crate) fn push_polygon(path: &mut BezPath, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
}

pub(crate) fn push_circle(path: &mut BezPath, center: Point, radius: f64) {
    push_shape(path, &Circle::new(center, radius));
}

pub(crate) fn push_rounded_rect(
    path: &mut BezPath,
    rect: Rect,
    radii: impl Into<RoundedRectRadii>,
) {
    push_shape(path, &RoundedRect::from_rect(rect, radii));
}

/// Append the fragment for one module cell of side `s` with top-left `origin`.
pub fn push_dot(path: &mut BezPath, style: DotStyle, origin: Point, s: f64) {
    let (x, y) = (origin.x, origin.y);
    let center = Point::new(x + s / 2.0, y + s / 2.0);
    let cell = Rect::new(x, y, x + s, y + s);
    match style {
        DotStyle::Square => push_shape(path, &cell),
        DotStyle::Dots => push_circle(path, center, 0.35 * s),
        DotStyle::ExtraRounded => push_circle(path, center, 0.5 * s),
        DotStyle::Rounded => {
            push_rounded_rect(path, cell, RoundedRectRadii::new(0.0, 0.0, 0.5 * s, 0.0));
        }
        DotStyle::Classy | DotStyle::Diamond => push_polygon(
            path,
            &[
                Point::new(center.x, y),
                Point::new(x + s, center.y),
                Point::new(center.x, y + s),
                Point::new(x, center.y),
            ],
        ),
        DotStyle::Star => push_star(path, center, s / 2.0, s / 5.0),
        DotStyle::Cross => push_cross(path, cell),
        DotStyle::Heart => push_heart(path, cell),
    }
}

/// Four cusps at `outer` from the center, each pair joined by a quadratic bowed toward the
/// center through a control point at `inner` on both axes.
fn push_star(path: &mut BezPath, c: Point, outer: f64, inner: f64) {
    path.move_to((c.x, c.y - outer));
    path.quad_to((c.x + inner, c.y - inner), (c.x + outer, c.y));
    path.quad_to((c.x + inner, c.y + inner), (c.x, c.y + outer));
    path.quad_to((c.x - inner, c.y + inner), (c.x - outer, c.y));
    path.quad_to((c.x - inner, c.y - inner), (c.x, c.y - outer));
    path.close_path();
}

fn push_cross(path: &mut BezPath, cell: Rect) {
    let t = cell.width() / 3.0;
    let (x0, y0, x1, y1) = (cell.x0, cell.y0, cell.x1, cell.y1);
    let (a, b) = (x0 + t, x0 + 2.0 * t);
    let (c, d) = (y0 + t, y0 + 2.0 * t);
    push_polygon(
        path,
        &[
            Point::new(a, y0),
            Point::new(b, y0),
            Point::new(b, c),
            Point::new(x1, c),
            Point::new(x1, d),
            Point::new(b, d),
            Point::new(b, y1),
            Point::new(a, y1),
            Point::new(a, d),
            Point::new(x0, d),
            Point::new(x0, c),
            Point::new(a, c),
        ],
    );
}

fn push_heart(path: &mut BezPath, cell: Rect) {
    let s = cell.width();
    let p = |u: f64, v: f64| Point::new(cell.x0 + u * s, cell.y0 + v * s);
    path.move_to(p(0.5, 0.3));
    path.curve_to(p(0.5, 0.05), p(0.05, 0.05), p(0.05, 0.35));
    path.curve_to(p(0.05, 0.6), p(0.35, 0.75), p(0.5, 0.9));
    path.curve_to(p(0.65, 0.75), p(0.95, 0.6), p(0.95, 0.35));
    path.curve_to(p(0.95, 0.05), p(0.5, 0.05), p(0.5, 0.3));
    path.close_path();
}

#[cfg(test)]
#[path = "../../tests/unit/synth/shapes.rs"]
mod tests;
