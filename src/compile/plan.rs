use crate::compile::fingerprint::{PlanFingerprint, fingerprint_plan};
use crate::compile::overlay::{LayerInputs, compose_layers};
use crate::foundation::core::{BezPath, FillRule, Point, Rect, Vec2, serialize_svg_path};
use crate::foundation::error::QrStyleResult;
use crate::geometry::exclusion::{LogoVerdict, place_logo};
use crate::geometry::planner::Geometry;
use crate::matrix::adapter::{Corner, QrMatrix};
use crate::style::color::Color;
use crate::style::fill::{Fill, LinearGradient, resolve_fills};
use crate::style::settings::StyleSettings;
use crate::synth::finder::synthesize_finders;
use crate::synth::modules::synthesize_modules;

/// Renderer-agnostic description of one styled QR code.
///
/// Layers are ordered back to front. Every coordinate is in canvas units on a square canvas of
/// side `canvas_size`; consumers scale as they like and never need the matrix or settings again.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// Side of the square canvas.
    pub canvas_size: f64,
    /// Top-left corner of the module grid.
    pub content_offset: Vec2,
    /// Side of one module cell.
    pub cell_size: f64,
    /// Matrix side in modules.
    pub matrix_size: usize,
    /// Number of data modules in the merged module path.
    pub module_count: usize,
    /// Gradient definitions referenced by [`Fill::Gradient`].
    pub gradients: Vec<LinearGradient>,
    /// Draw layers, back to front.
    pub layers: Vec<Layer>,
    /// Non-fatal findings made while planning.
    pub warnings: Vec<PlanWarning>,
}

impl RenderPlan {
    /// First layer of the given kind.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Gradient definition by id.
    pub fn gradient(&self, id: &str) -> Option<&LinearGradient> {
        self.gradients.iter().find(|g| g.id == id)
    }

    /// Stable content hash of the plan.
    pub fn fingerprint(&self) -> PlanFingerprint {
        fingerprint_plan(self)
    }
}

/// One group of draw operations with a semantic role.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Role of the layer.
    pub kind: LayerKind,
    /// Operations in paint order.
    pub ops: Vec<DrawOp>,
}

/// Semantic role of a [`Layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum LayerKind {
    /// Solid canvas fill.
    Background,
    /// Full-bleed background image.
    BackgroundImage,
    /// Frame parts drawn beneath the code.
    FrameUnderlay,
    /// Merged data-module path.
    ModuleFill,
    /// Finder pattern at one corner.
    Eye {
        /// Finder corner.
        corner: Corner,
    },
    /// Logo patch and image.
    Logo,
    /// Frame parts drawn above the code.
    FrameOverlay,
}

impl LayerKind {
    /// Stable kebab-case name, e.g. `module-fill` or `eye-tl`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::BackgroundImage => "background-image",
            Self::FrameUnderlay => "frame-underlay",
            Self::ModuleFill => "module-fill",
            Self::Eye {
                corner: Corner::TopLeft,
            } => "eye-tl",
            Self::Eye {
                corner: Corner::TopRight,
            } => "eye-tr",
            Self::Eye {
                corner: Corner::BottomLeft,
            } => "eye-bl",
            Self::Logo => "logo",
            Self::FrameOverlay => "frame-overlay",
        }
    }
}

/// A single paint operation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Fill a path.
    FillPath {
        /// Path, serialized as SVG path data.
        #[serde(serialize_with = "serialize_svg_path")]
        path: BezPath,
        /// Paint.
        fill: Fill,
        /// Winding rule.
        rule: FillRule,
        /// Extra opacity multiplier in `[0, 1]`.
        opacity: f64,
    },
    /// Stroke a path with a solid color.
    StrokePath {
        /// Path, serialized as SVG path data.
        #[serde(serialize_with = "serialize_svg_path")]
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke width in canvas units.
        width: f64,
    },
    /// Draw an externally supplied image stretched into `rect`.
    Image {
        /// Image reference exactly as configured.
        href: String,
        /// Target rectangle.
        rect: Rect,
        /// Opacity in `[0, 1]`.
        opacity: f64,
    },
    /// Draw a single line of text centered on `position`'s x, with `position.y` as baseline.
    Text {
        /// Text content.
        text: String,
        /// Anchor point.
        position: Point,
        /// Font size in canvas units.
        font_size: f64,
        /// Text color.
        color: Color,
    },
}

/// Non-fatal planning finding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// The logo hides more modules than the error-correction level restores.
    LogoTooLarge {
        /// Covered fraction.
        covered: f64,
        /// Recoverable fraction.
        limit: f64,
    },
    /// The logo was shrunk; a `LogoTooLarge` follows when even 0% is over budget.
    LogoShrunk {
        /// Requested size percentage.
        from: f64,
        /// Drawn size percentage.
        to: f64,
    },
}

/// Plan a styled rendering of `matrix`.
#[tracing::instrument(skip(matrix, settings), fields(size = matrix.size()))]
pub fn compile_plan(matrix: &QrMatrix, settings: &StyleSettings) -> QrStyleResult<RenderPlan> {
    let geom = Geometry::plan(matrix.size(), settings.margin_size, settings.frame);
    tracing::debug!(
        canvas = geom.canvas_size,
        offset_x = geom.content_offset.x,
        offset_y = geom.content_offset.y,
        "geometry planned"
    );

    let placement = place_logo(matrix, &geom, settings)?;
    let fills = resolve_fills(settings);
    let modules = synthesize_modules(
        matrix,
        &geom,
        settings.dot_style,
        placement.logo.as_ref(),
    );
    let eyes = synthesize_finders(&geom, settings.eye_frame, settings.eye_style, &fills);

    let warnings = match placement.verdict {
        LogoVerdict::TooLarge { covered, limit } => vec![PlanWarning::LogoTooLarge { covered, limit }],
        LogoVerdict::Shrunk {
            from,
            to,
            covered,
            limit,
        } => {
            let mut warnings = vec![PlanWarning::LogoShrunk { from, to }];
            if covered > limit {
                warnings.push(PlanWarning::LogoTooLarge { covered, limit });
            }
            warnings
        }
        LogoVerdict::Unchecked | LogoVerdict::Fits { .. } => Vec::new(),
    };

    let module_count = modules.len();
    let layers = compose_layers(LayerInputs {
        geom: &geom,
        settings,
        main_fill: &fills.main,
        modules,
        eyes,
        logo: placement.logo.as_ref(),
    });

    Ok(RenderPlan {
        canvas_size: geom.canvas_size,
        content_offset: geom.content_offset,
        cell_size: geom.cell_size,
        matrix_size: geom.matrix_size,
        module_count,
        gradients: fills.gradient.into_iter().collect(),
        layers,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
