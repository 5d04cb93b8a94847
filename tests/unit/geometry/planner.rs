use super::*;

#[test]
fn no_margin_no_frame() {
    let g = Geometry::plan(21, 0, FrameKind::None);
    assert_eq!(g.canvas_size, 210.0);
    assert_eq!(g.content_offset, Vec2::ZERO);
    assert_eq!(g.data_area_size(), 210.0);
}

#[test]
fn any_margin_snaps_to_four_cells() {
    for margin in [1, 4, 9] {
        let g = Geometry::plan(21, margin, FrameKind::None);
        assert_eq!(g.quiet_zone_cells, 4);
        assert_eq!(g.canvas_size, 290.0);
        assert_eq!(g.content_offset, Vec2::new(40.0, 40.0));
    }
}

#[test]
fn frames_grow_canvas_and_shift_content() {
    let base = Geometry::plan(25, 4, FrameKind::None);
    let cases = [
        (FrameKind::Border, 100.0, Vec2::new(50.0, 50.0)),
        (FrameKind::Badge, 140.0, Vec2::new(70.0, 20.0)),
        (FrameKind::Phone, 100.0, Vec2::new(50.0, 80.0)),
    ];
    for (frame, grow, shift) in cases {
        let g = Geometry::plan(25, 4, frame);
        assert_eq!(g.base_canvas, base.base_canvas);
        assert_eq!(g.canvas_size, base.canvas_size + grow, "{frame:?}");
        assert_eq!(g.content_offset, base.content_offset + shift, "{frame:?}");
    }
}

#[test]
fn cell_rects_follow_offset() {
    let g = Geometry::plan(21, 0, FrameKind::Badge);
    assert_eq!(g.cell_rect(0, 0), Rect::new(70.0, 20.0, 80.0, 30.0));
    assert_eq!(g.cell_rect(2, 3), Rect::new(100.0, 40.0, 110.0, 50.0));
    assert_eq!(g.data_area(), Rect::new(70.0, 20.0, 280.0, 230.0));
}
