use kurbo::RoundedRectRadii;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::geometry::planner::Geometry;
use crate::matrix::adapter::{Corner, FINDER_SIZE};
use crate::style::fill::{Fill, ResolvedFills};
use crate::style::settings::{EyeFrame, EyeStyle};
use crate::synth::shapes::{push_circle, push_rounded_rect, push_shape};

/// Finder pattern drawing for one corner.
#[derive(Clone, Debug, PartialEq)]
pub struct EyeShapes {
    /// Which finder this is.
    pub corner: Corner,
    /// Top-left of the 7x7 block in canvas coordinates.
    pub origin: Point,
    /// Outer ring: two sub-paths filled with the even-odd rule.
    pub outer: BezPath,
    /// Inner 3x3 center.
    pub inner: BezPath,
    /// Fill shared by `outer` and `inner`.
    pub fill: Fill,
}

/// Ring and center shapes for the three finder corners, in drawing order.
pub fn synthesize_finders(
    geom: &Geometry,
    frame: EyeFrame,
    style: EyeStyle,
    fills: &ResolvedFills,
) -> Vec<EyeShapes> {
    Corner::ALL
        .into_iter()
        .map(|corner| {
            let (row, col) = corner.origin(geom.matrix_size);
            let origin = geom.cell_rect(row, col).origin();
            EyeShapes {
                corner,
                origin,
                outer: outer_ring(frame, corner, origin, geom.cell_size),
                inner: inner_center(style, origin, geom.cell_size),
                fill: fills.eye(corner).clone(),
            }
        })
        .collect()
}

/// Outer 7x7 ring at `origin`. The second sub-path is the hole.
pub fn outer_ring(frame: EyeFrame, corner: Corner, origin: Point, s: f64) -> BezPath {
    let side = FINDER_SIZE as f64 * s;
    let outer = Rect::from_origin_size(origin, (side, side));
    let hole = outer.inset(-s);
    let mut path = BezPath::new();
    match frame {
        EyeFrame::Square => {
            push_shape(&mut path, &outer);
            push_shape(&mut path, &hole);
        }
        EyeFrame::Circle => {
            push_circle(&mut path, outer.center(), 3.5 * s);
            push_circle(&mut path, outer.center(), 2.5 * s);
        }
        EyeFrame::Rounded => {
            push_rounded_rect(&mut path, outer, 2.5 * s);
            push_rounded_rect(&mut path, hole, s);
        }
        EyeFrame::Leaf => {
            push_rounded_rect(&mut path, outer, leaf_radii(corner, 3.0 * s));
            push_shape(&mut path, &hole);
        }
    }
    path
}

/// The leaf's rounded corner points away from the symbol; the opposite corner stays square.
fn leaf_radii(corner: Corner, r: f64) -> RoundedRectRadii {
    match corner {
        Corner::TopLeft => RoundedRectRadii::new(r, 0.0, 0.0, 0.0),
        Corner::TopRight => RoundedRectRadii::new(0.0, r, 0.0, 0.0),
        Corner::BottomLeft => RoundedRectRadii::new(0.0, 0.0, 0.0, r),
    }
}

/// Inner 3x3 center, offset two cells into the block.
pub fn inner_center(style: EyeStyle, origin: Point, s: f64) -> BezPath {
    let rect = Rect::from_origin_size((origin.x + 2.0 * s, origin.y + 2.0 * s), (3.0 * s, 3.0 * s));
    let mut path = BezPath::new();
    match style {
        EyeStyle::Square => push_shape(&mut path, &rect),
        EyeStyle::Circle => push_circle(&mut path, rect.center(), 1.5 * s),
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/synth/finder.rs"]
mod tests;
