use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::geometry::planner::Geometry;
use crate::matrix::adapter::QrMatrix;
use crate::style::settings::{LogoSafety, StyleSettings};

/// Largest logo size, in percent of the data area, the shrink policy starts from.
const MAX_LOGO_PERCENT: f64 = 100.0;

/// Centered logo area and the padded patch that hides modules beneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoBox {
    /// Logo size as a percentage of the data area side.
    pub size_percent: f64,
    /// Padding between image and patch edge.
    pub padding: f64,
    /// Padded exclusion rectangle in canvas coordinates.
    pub bounds: Rect,
    /// Image rectangle (bounds inset by padding).
    pub image: Rect,
}

impl LogoBox {
    /// Box for a logo of `size_percent` of the data area, centered on the data area.
    pub fn centered(geom: &Geometry, size_percent: f64, padding: f64) -> Self {
        let size_percent = size_percent.max(0.0);
        let padding = padding.max(0.0);
        let logo_side = geom.data_area_size() * size_percent / 100.0;
        let half = logo_side / 2.0 + padding;
        let center = geom.data_area().center();
        let bounds = Rect::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        );
        Self {
            size_percent,
            padding,
            bounds,
            image: bounds.inset(-padding),
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Whether `cell` overlaps the padded box with positive area. Touching edges do not count.
    pub fn intersects_cell(&self, cell: Rect) -> bool {
        cell.x0 < self.bounds.x1
            && cell.x1 > self.bounds.x0
            && cell.y0 < self.bounds.y1
            && cell.y1 > self.bounds.y0
    }
}

/// Logo exclusion box for `settings`, or `None` when the logo layer is inactive.
pub fn exclusion_box(geom: &Geometry, settings: &StyleSettings) -> Option<LogoBox> {
    settings.active_logo()?;
    Some(LogoBox::centered(
        geom,
        settings.logo_size,
        settings.logo_padding,
    ))
}

/// Fraction of non-finder cells (dark or light) that the box hides.
pub fn covered_fraction(matrix: &QrMatrix, geom: &Geometry, logo: &LogoBox) -> f64 {
    let size = matrix.size();
    let mut eligible = 0usize;
    let mut covered = 0usize;
    for row in 0..size {
        for col in 0..size {
            if matrix.is_finder(row, col) {
                continue;
            }
            eligible += 1;
            if logo.intersects_cell(geom.cell_rect(row, col)) {
                covered += 1;
            }
        }
    }
    if eligible == 0 {
        return 0.0;
    }
    covered as f64 / eligible as f64
}

/// Outcome of the logo safety policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogoVerdict {
    /// No check was made.
    Unchecked,
    /// The box is within the error-correction budget.
    Fits {
        /// Covered fraction.
        covered: f64,
        /// Recoverable fraction.
        limit: f64,
    },
    /// The box exceeds the budget and is drawn anyway.
    TooLarge {
        /// Covered fraction.
        covered: f64,
        /// Recoverable fraction.
        limit: f64,
    },
    /// The logo was shrunk. `covered` stays above `limit` when the padding alone is too large.
    Shrunk {
        /// Requested size percentage.
        from: f64,
        /// Size percentage actually drawn.
        to: f64,
        /// Covered fraction at the drawn size.
        covered: f64,
        /// Recoverable fraction.
        limit: f64,
    },
}

/// Final logo box after applying the configured safety policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoPlacement {
    /// Box to exclude and draw; `None` when the logo layer is inactive.
    pub logo: Option<LogoBox>,
    /// What the safety policy decided.
    pub verdict: LogoVerdict,
}

/// Compute the exclusion box and run the `logoSafety` policy against it.
pub fn place_logo(
    matrix: &QrMatrix,
    geom: &Geometry,
    settings: &StyleSettings,
) -> QrStyleResult<LogoPlacement> {
    let Some(logo) = exclusion_box(geom, settings) else {
        return Ok(LogoPlacement {
            logo: None,
            verdict: LogoVerdict::Unchecked,
        });
    };
    if settings.logo_safety == LogoSafety::Off {
        return Ok(LogoPlacement {
            logo: Some(logo),
            verdict: LogoVerdict::Unchecked,
        });
    }

    let limit = settings.error_correction_level.recovery_fraction();
    let covered = covered_fraction(matrix, geom, &logo);
    tracing::debug!(covered, limit, policy = ?settings.logo_safety, "logo safety check");
    if covered <= limit {
        return Ok(LogoPlacement {
            logo: Some(logo),
            verdict: LogoVerdict::Fits { covered, limit },
        });
    }

    match settings.logo_safety {
        LogoSafety::Off | LogoSafety::Warn => {
            tracing::warn!(covered, limit, "logo hides more modules than error correction restores");
            Ok(LogoPlacement {
                logo: Some(logo),
                verdict: LogoVerdict::TooLarge { covered, limit },
            })
        }
        LogoSafety::Reject => Err(QrStyleError::LogoTooLarge { covered, limit }),
        LogoSafety::Shrink => {
            let from = logo.size_percent;
            // At 100% the logo already spans the data area, so larger sizes hide nothing more.
            let mut shrunk = if from > MAX_LOGO_PERCENT {
                LogoBox::centered(geom, MAX_LOGO_PERCENT, logo.padding)
            } else {
                logo
            };
            let mut now = covered;
            while now > limit && shrunk.size_percent > 0.0 {
                let next = (shrunk.size_percent - 1.0).max(0.0);
                shrunk = LogoBox::centered(geom, next, logo.padding);
                now = covered_fraction(matrix, geom, &shrunk);
            }
            if now > limit {
                tracing::warn!(
                    from,
                    covered = now,
                    limit,
                    "logo padding alone hides more modules than error correction restores"
                );
            } else {
                tracing::warn!(from, to = shrunk.size_percent, covered = now, limit, "logo shrunk");
            }
            Ok(LogoPlacement {
                logo: Some(shrunk),
                verdict: LogoVerdict::Shrunk {
                    from,
                    to: shrunk.size_percent,
                    covered: now,
                    limit,
                },
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/exclusion.rs"]
mod tests;
