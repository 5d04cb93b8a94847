use super::*;
use crate::foundation::core::subpath_count;
use crate::style::settings::FrameKind;

fn all_dark(size: usize) -> QrMatrix {
    QrMatrix::from_modules(size, vec![true; size * size]).unwrap()
}

#[test]
fn skips_finder_cells() {
    let m = all_dark(21);
    let geom = Geometry::plan(21, 0, FrameKind::None);
    let shapes = synthesize_modules(&m, &geom, DotStyle::Square, None);
    assert_eq!(shapes.len(), 441 - 147);
    assert_eq!(subpath_count(&shapes.path), shapes.len());
    assert!(shapes.cells.iter().all(|&(r, c)| !m.is_finder(r, c)));
}

#[test]
fn bottom_right_corner_is_data() {
    let m = all_dark(21);
    let geom = Geometry::plan(21, 0, FrameKind::None);
    let shapes = synthesize_modules(&m, &geom, DotStyle::Dots, None);
    assert!(shapes.cells.contains(&(20, 20)));
    assert!(shapes.cells.contains(&(14, 14)));
    assert!(!shapes.cells.contains(&(20, 0)));
}

#[test]
fn light_modules_are_not_drawn() {
    let mut rows = vec![vec![false; 21]; 21];
    rows[10][10] = true;
    rows[10][11] = true;
    rows[0][0] = true;
    let m = QrMatrix::from_rows(&rows).unwrap();
    let geom = Geometry::plan(21, 4, FrameKind::None);
    let shapes = synthesize_modules(&m, &geom, DotStyle::Heart, None);
    assert_eq!(shapes.cells, vec![(10, 10), (10, 11)]);
}

#[test]
fn logo_box_removes_every_intersecting_module() {
    let m = all_dark(21);
    let geom = Geometry::plan(21, 0, FrameKind::None);
    let logo = LogoBox::centered(&geom, 25.0, 8.0);
    let shapes = synthesize_modules(&m, &geom, DotStyle::Square, Some(&logo));
    assert_eq!(shapes.len(), 294 - 49);
    for &(r, c) in &shapes.cells {
        assert!(!logo.intersects_cell(geom.cell_rect(r, c)), "({r},{c})");
    }
    assert!(!shapes.cells.contains(&(7, 7)));
    assert!(!shapes.cells.contains(&(13, 13)));
    assert!(shapes.cells.contains(&(6, 10)));
    assert!(shapes.cells.contains(&(14, 10)));
}

#[test]
fn fragments_sit_at_content_offset() {
    use kurbo::Shape;
    let mut rows = vec![vec![false; 21]; 21];
    rows[8][9] = true;
    let m = QrMatrix::from_rows(&rows).unwrap();
    let geom = Geometry::plan(21, 4, FrameKind::Badge);
    let shapes = synthesize_modules(&m, &geom, DotStyle::Square, None);
    let bb = shapes.path.bounding_box();
    assert_eq!(bb, geom.cell_rect(8, 9));
    assert_eq!(bb.x0, 40.0 + 70.0 + 90.0);
    assert_eq!(bb.y0, 40.0 + 20.0 + 80.0);
}
