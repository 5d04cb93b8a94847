use crate::foundation::core::{Rect, Vec2};
use crate::style::settings::FrameKind;

/// Side of one module cell in canvas units.
pub const CELL_SIZE: f64 = 10.0;

/// Quiet-zone width in cells whenever a margin is requested.
pub const QUIET_ZONE_CELLS: usize = 4;

/// Canvas layout for one render.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Side of one module cell.
    pub cell_size: f64,
    /// Matrix side in modules.
    pub matrix_size: usize,
    /// Quiet-zone width in cells (0 or 4).
    pub quiet_zone_cells: usize,
    /// Canvas side before any frame adjustment.
    pub base_canvas: f64,
    /// Final square canvas side.
    pub canvas_size: f64,
    /// Top-left corner of the module grid in canvas coordinates.
    pub content_offset: Vec2,
}

impl Geometry {
    /// Lay out a matrix of side `matrix_size` with the given margin and frame.
    pub fn plan(matrix_size: usize, margin_size: u32, frame: FrameKind) -> Self {
        let quiet_zone_cells = if margin_size > 0 { QUIET_ZONE_CELLS } else { 0 };
        let base_canvas = (matrix_size + 2 * quiet_zone_cells) as f64 * CELL_SIZE;
        let quiet = quiet_zone_cells as f64 * CELL_SIZE;
        let (grow, shift) = frame_delta(frame);
        Self {
            cell_size: CELL_SIZE,
            matrix_size,
            quiet_zone_cells,
            base_canvas,
            canvas_size: base_canvas + grow,
            content_offset: Vec2::new(quiet, quiet) + shift,
        }
    }

    /// Side of the module grid (without quiet zone).
    pub fn data_area_size(&self) -> f64 {
        self.matrix_size as f64 * self.cell_size
    }

    /// Module grid rectangle in canvas coordinates.
    pub fn data_area(&self) -> Rect {
        let o = self.content_offset.to_point();
        let side = self.data_area_size();
        Rect::new(o.x, o.y, o.x + side, o.y + side)
    }

    /// Cell rectangle of module `(row, col)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let x = self.content_offset.x + col as f64 * self.cell_size;
        let y = self.content_offset.y + row as f64 * self.cell_size;
        Rect::new(x, y, x + self.cell_size, y + self.cell_size)
    }
}

/// Canvas growth and content shift contributed by a frame variant.
pub fn frame_delta(frame: FrameKind) -> (f64, Vec2) {
    match frame {
        FrameKind::None => (0.0, Vec2::ZERO),
        FrameKind::Border => (100.0, Vec2::new(50.0, 50.0)),
        FrameKind::Badge => (140.0, Vec2::new(70.0, 20.0)),
        FrameKind::Phone => (100.0, Vec2::new(50.0, 80.0)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/planner.rs"]
mod tests;
