use crate::foundation::error::{QrStyleError, QrStyleResult};

/// Side of a finder pattern, in modules.
pub const FINDER_SIZE: usize = 7;

/// Side of the smallest QR symbol (version 1).
pub const MIN_MATRIX_SIZE: usize = 21;

/// Corner that holds a finder pattern. The bottom-right corner never has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// Top-left finder.
    TopLeft,
    /// Top-right finder.
    TopRight,
    /// Bottom-left finder.
    BottomLeft,
}

impl Corner {
    /// The three finder corners in drawing order.
    pub const ALL: [Self; 3] = [Self::TopLeft, Self::TopRight, Self::BottomLeft];

    /// `(row, col)` of the finder block's top-left module in a matrix of side `size`.
    pub fn origin(self, size: usize) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, size - FINDER_SIZE),
            Self::BottomLeft => (size - FINDER_SIZE, 0),
        }
    }
}

/// Immutable square module grid produced by a QR encoder.
///
/// `true` means a dark ("on") module. The grid is validated once at construction; every lookup
/// afterwards is infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Wrap a row-major module buffer of side `size`.
    pub fn from_modules(size: usize, modules: Vec<bool>) -> QrStyleResult<Self> {
        if size < MIN_MATRIX_SIZE {
            return Err(QrStyleError::invalid_matrix(format!(
                "size {size} is below the minimum of {MIN_MATRIX_SIZE}"
            )));
        }
        let expected = size
            .checked_mul(size)
            .ok_or_else(|| QrStyleError::invalid_matrix(format!("size {size} overflows")))?;
        if modules.len() != expected {
            return Err(QrStyleError::invalid_matrix(format!(
                "expected {expected} modules for size {size}, got {}",
                modules.len()
            )));
        }
        Ok(Self { size, modules })
    }

    /// Build from nested rows; every row must be as long as the number of rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> QrStyleResult<Self> {
        let size = rows.len();
        let mut modules = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(QrStyleError::invalid_matrix(format!(
                    "matrix is not square: row {i} has {} modules, expected {size}",
                    row.len()
                )));
            }
            modules.extend_from_slice(row);
        }
        Self::from_modules(size, modules)
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(row, col)` is dark. Out-of-range lookups are light.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.modules[row * self.size + col]
    }

    /// Finder corner whose 7x7 block contains `(row, col)`, if any.
    pub fn finder_corner(&self, row: usize, col: usize) -> Option<Corner> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let far = self.size - FINDER_SIZE;
        match (row < FINDER_SIZE, col < FINDER_SIZE, row >= far, col >= far) {
            (true, true, _, _) => Some(Corner::TopLeft),
            (true, _, _, true) => Some(Corner::TopRight),
            (_, true, true, _) => Some(Corner::BottomLeft),
            _ => None,
        }
    }

    /// Whether `(row, col)` belongs to one of the three finder patterns.
    pub fn is_finder(&self, row: usize, col: usize) -> bool {
        self.finder_corner(row, col).is_some()
    }

    /// Number of dark modules in the whole grid.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }

    /// Row-major iterator over the `(row, col)` of every dark module.
    pub fn iter_dark(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i / size, i % size))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/adapter.rs"]
mod tests;
