//! qrstyle renders QR codes with styled modules, finder patterns, gradients, logos and frames.
//!
//! The engine is a pure function from an encoded module matrix plus [`StyleSettings`] to a
//! renderer-agnostic [`RenderPlan`]:
//!
//! - Encode a payload through a [`MatrixEncoder`] (the default delegates to the `qrcode` crate)
//! - Plan geometry, exclude modules under the logo, synthesize module and finder paths
//! - Stack layers back to front into the plan
//!
//! The plan can be serialized as JSON, written as SVG with [`SvgRenderer`], or rasterized with
//! [`RasterRenderer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod foundation;
mod geometry;
mod matrix;
mod render;
mod style;
mod synth;

pub use crate::foundation::core::{BezPath, FillRule, Point, Rect, Vec2};
pub use crate::foundation::error::{QrStyleError, QrStyleResult};

pub use crate::compile::fingerprint::PlanFingerprint;
pub use crate::compile::overlay::BADGE_FONT_SIZE;
pub use crate::compile::plan::{DrawOp, Layer, LayerKind, PlanWarning, RenderPlan, compile_plan};
pub use crate::geometry::exclusion::{
    LogoBox, LogoPlacement, LogoVerdict, covered_fraction, exclusion_box, place_logo,
};
pub use crate::geometry::planner::{CELL_SIZE, Geometry, QUIET_ZONE_CELLS, frame_delta};
pub use crate::matrix::adapter::{Corner, FINDER_SIZE, MIN_MATRIX_SIZE, QrMatrix};
pub use crate::matrix::encoder::{MatrixEncoder, QrcodeEncoder};
pub use crate::render::backend::{FrameRGBA, PlanRenderer};
pub use crate::render::pipeline::{
    BatchOptions, render, render_batch, render_batch_with, render_matrix, render_with_encoder,
};
pub use crate::render::raster::{RasterRenderer, demultiplied, write_png};
pub use crate::render::svg::{SvgRenderer, plan_to_svg};
pub use crate::style::color::Color;
pub use crate::style::fill::{
    Fill, GradientStop, LinearGradient, MAIN_GRADIENT_ID, ResolvedFills, resolve_eye_fill,
    resolve_fills,
};
pub use crate::style::settings::{
    DotStyle, EcLevel, EyeFrame, EyeStyle, FrameKind, GradientDirection, LogoSafety,
    StyleSettings,
};
pub use crate::synth::finder::{EyeShapes, inner_center, outer_ring, synthesize_finders};
pub use crate::synth::modules::{ModuleShapes, synthesize_modules};
pub use crate::synth::shapes::push_dot;
