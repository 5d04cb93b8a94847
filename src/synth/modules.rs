use crate::foundation::core::BezPath;
use crate::geometry::exclusion::LogoBox;
use crate::geometry::planner::Geometry;
use crate::matrix::adapter::QrMatrix;
use crate::style::settings::DotStyle;
use crate::synth::shapes::push_dot;

/// Merged data-module path plus the cells it was built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleShapes {
    /// One sub-path per drawn module, sharing a single fill.
    pub path: BezPath,
    /// `(row, col)` of every drawn module, row-major.
    pub cells: Vec<(usize, usize)>,
}

impl ModuleShapes {
    /// Number of drawn modules.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no module was drawn.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Build the merged path for every dark module outside the finders and the logo box.
pub fn synthesize_modules(
    matrix: &QrMatrix,
    geom: &Geometry,
    style: DotStyle,
    logo: Option<&LogoBox>,
) -> ModuleShapes {
    let mut out = ModuleShapes::default();
    for (row, col) in matrix.iter_dark() {
        if matrix.is_finder(row, col) {
            continue;
        }
        let cell = geom.cell_rect(row, col);
        if logo.is_some_and(|b| b.intersects_cell(cell)) {
            continue;
        }
        push_dot(&mut out.path, style, cell.origin(), geom.cell_size);
        out.cells.push((row, col));
    }
    tracing::debug!(modules = out.cells.len(), ?style, "synthesized module path");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/synth/modules.rs"]
mod tests;
