use crate::foundation::core::Point;
use crate::matrix::adapter::Corner;
use crate::style::color::Color;
use crate::style::settings::{GradientDirection, StyleSettings};

/// Identifier of the shared module gradient inside a plan.
pub const MAIN_GRADIENT_ID: &str = "qr-gradient";

/// Paint for a filled shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Reference to a [`LinearGradient`] declared in the plan.
    Gradient {
        /// Gradient identifier.
        id: String,
    },
}

impl Fill {
    /// Flat color fill.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }
}

/// One color stop of a linear gradient.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Stop position in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Linear gradient expressed in percentages of the painted shape's bounding box.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    /// Identifier referenced by [`Fill::Gradient`].
    pub id: String,
    /// Start point, in percent (`0..=100` on both axes).
    pub start: Point,
    /// End point, in percent.
    pub end: Point,
    /// Color stops, ordered by offset.
    pub stops: Vec<GradientStop>,
}

impl GradientDirection {
    /// Start and end points of the gradient vector in percent of the bounding box.
    pub fn vector(self) -> (Point, Point) {
        match self {
            Self::Deg0 => (Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
            Self::Deg45 => (Point::new(0.0, 100.0), Point::new(100.0, 0.0)),
            Self::Deg90 => (Point::new(0.0, 100.0), Point::new(0.0, 0.0)),
            Self::Deg135 => (Point::new(0.0, 0.0), Point::new(100.0, 100.0)),
        }
    }
}

/// Fills shared by every shape of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFills {
    /// Module fill, also the fallback for eyes without overrides.
    pub main: Fill,
    /// Gradient definition when `main` references one.
    pub gradient: Option<LinearGradient>,
    /// Top-left eye fill.
    pub eye_tl: Fill,
    /// Top-right eye fill.
    pub eye_tr: Fill,
    /// Bottom-left eye fill.
    pub eye_bl: Fill,
}

impl ResolvedFills {
    /// Fill for the finder pattern at `corner`.
    pub fn eye(&self, corner: Corner) -> &Fill {
        match corner {
            Corner::TopLeft => &self.eye_tl,
            Corner::TopRight => &self.eye_tr,
            Corner::BottomLeft => &self.eye_bl,
        }
    }
}

/// Resolve the main fill, the optional gradient and the three eye fills.
pub fn resolve_fills(settings: &StyleSettings) -> ResolvedFills {
    let (main, gradient) = if settings.use_gradient {
        let (start, end) = settings.gradient_direction.vector();
        let gradient = LinearGradient {
            id: MAIN_GRADIENT_ID.to_owned(),
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: settings.gradient_start,
                },
                GradientStop {
                    offset: 1.0,
                    color: settings.gradient_end,
                },
            ],
        };
        (
            Fill::Gradient {
                id: MAIN_GRADIENT_ID.to_owned(),
            },
            Some(gradient),
        )
    } else {
        (Fill::solid(settings.foreground_color), None)
    };

    let eye = |corner_override| resolve_eye_fill(corner_override, settings.eye_color, &main);
    ResolvedFills {
        eye_tl: eye(settings.eye_color_tl),
        eye_tr: eye(settings.eye_color_tr),
        eye_bl: eye(settings.eye_color_bl),
        main,
        gradient,
    }
}

/// Corner override, then universal eye color, then the main fill.
pub fn resolve_eye_fill(
    corner_override: Option<Color>,
    universal: Option<Color>,
    main: &Fill,
) -> Fill {
    corner_override
        .or(universal)
        .map(Fill::solid)
        .unwrap_or_else(|| main.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/style/fill.rs"]
mod tests;
