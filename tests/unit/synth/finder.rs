use super::*;
use crate::foundation::core::subpath_count;
use crate::style::color::Color;
use crate::style::fill::resolve_fills;
use crate::style::settings::{FrameKind, StyleSettings};
use kurbo::Shape;

fn evenodd_contains(path: &BezPath, p: Point) -> bool {
    path.winding(p) % 2 != 0
}

#[test]
fn origins_follow_corners_and_offset() {
    let geom = Geometry::plan(25, 4, FrameKind::None);
    let fills = resolve_fills(&StyleSettings::default());
    let eyes = synthesize_finders(&geom, EyeFrame::Square, EyeStyle::Square, &fills);
    let origins: Vec<_> = eyes.iter().map(|e| (e.corner, e.origin)).collect();
    assert_eq!(
        origins,
        vec![
            (Corner::TopLeft, Point::new(40.0, 40.0)),
            (Corner::TopRight, Point::new(220.0, 40.0)),
            (Corner::BottomLeft, Point::new(40.0, 220.0)),
        ]
    );
}

#[test]
fn every_ring_has_a_hole() {
    let origin = Point::new(0.0, 0.0);
    for frame in EyeFrame::ALL {
        for corner in Corner::ALL {
            let ring = outer_ring(frame, corner, origin, 10.0);
            assert_eq!(subpath_count(&ring), 2, "{frame:?}");
            // Band between the outer edge and the hole.
            assert!(evenodd_contains(&ring, Point::new(35.0, 5.0)), "{frame:?}");
            // Hole center.
            assert!(!evenodd_contains(&ring, Point::new(35.0, 35.0)), "{frame:?}");
            let bb = ring.bounding_box();
            assert!((bb.width() - 70.0).abs() < 0.01, "{frame:?} {bb:?}");
        }
    }
}

#[test]
fn leaf_rounds_the_outward_corner_only() {
    let s = 10.0;
    let tl = outer_ring(EyeFrame::Leaf, Corner::TopLeft, Point::ZERO, s);
    assert!(!evenodd_contains(&tl, Point::new(1.0, 1.0)));
    assert!(evenodd_contains(&tl, Point::new(69.0, 69.0)));
    assert!(evenodd_contains(&tl, Point::new(69.0, 1.0)));

    let tr = outer_ring(EyeFrame::Leaf, Corner::TopRight, Point::ZERO, s);
    assert!(!evenodd_contains(&tr, Point::new(69.0, 1.0)));
    assert!(evenodd_contains(&tr, Point::new(1.0, 69.0)));

    let bl = outer_ring(EyeFrame::Leaf, Corner::BottomLeft, Point::ZERO, s);
    assert!(!evenodd_contains(&bl, Point::new(1.0, 69.0)));
    assert!(evenodd_contains(&bl, Point::new(69.0, 1.0)));
}

#[test]
fn inner_center_is_three_cells() {
    let sq = inner_center(EyeStyle::Square, Point::new(100.0, 0.0), 10.0);
    assert_eq!(sq.bounding_box(), Rect::new(120.0, 20.0, 150.0, 50.0));
    let circle = inner_center(EyeStyle::Circle, Point::new(100.0, 0.0), 10.0);
    let bb = circle.bounding_box();
    assert!((bb.width() - 30.0).abs() < 0.01);
    assert!((bb.center().x - 135.0).abs() < 1e-9);
    assert!(!circle.contains(Point::new(120.5, 20.5)));
}

#[test]
fn eye_fills_follow_the_cascade() {
    let settings = StyleSettings {
        foreground_color: Color::rgb(1, 1, 1),
        eye_color: Some(Color::rgb(2, 2, 2)),
        eye_color_tr: Some(Color::rgb(3, 3, 3)),
        ..StyleSettings::default()
    };
    let geom = Geometry::plan(21, 0, FrameKind::None);
    let eyes = synthesize_finders(
        &geom,
        EyeFrame::Rounded,
        EyeStyle::Circle,
        &resolve_fills(&settings),
    );
    assert_eq!(eyes[0].fill, Fill::solid(Color::rgb(2, 2, 2)));
    assert_eq!(eyes[1].fill, Fill::solid(Color::rgb(3, 3, 3)));
    assert_eq!(eyes[2].fill, Fill::solid(Color::rgb(2, 2, 2)));
}
