use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::compile::plan::RenderPlan;
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::foundation::math::unpremultiply_u8;
use crate::render::backend::{FrameRGBA, PlanRenderer};
use crate::render::svg::plan_to_svg;

/// Largest raster side accepted, in pixels.
const MAX_DIM: u32 = 16_384;

/// Rasterizes a plan by way of its SVG form (usvg + resvg).
pub struct RasterRenderer {
    scale: f32,
    resources_dir: Option<PathBuf>,
    fontdb: Option<Arc<usvg::fontdb::Database>>,
}

impl RasterRenderer {
    /// Renderer producing `scale` pixels per canvas unit.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            resources_dir: None,
            fontdb: None,
        }
    }

    /// Resolve relative image references against `dir`.
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = Some(dir.into());
        self
    }

    fn options(&mut self) -> usvg::Options<'static> {
        let fontdb = self
            .fontdb
            .get_or_insert_with(|| {
                let mut db = usvg::fontdb::Database::new();
                db.load_system_fonts();
                tracing::debug!(faces = db.len(), "loaded system fonts");
                Arc::new(db)
            })
            .clone();
        usvg::Options {
            resources_dir: self.resources_dir.clone(),
            fontdb,
            ..Default::default()
        }
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PlanRenderer for RasterRenderer {
    type Output = FrameRGBA;

    #[tracing::instrument(skip(self, plan), fields(scale = self.scale))]
    fn render_plan(&mut self, plan: &RenderPlan) -> QrStyleResult<FrameRGBA> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(QrStyleError::validation(format!(
                "raster scale must be positive, got {}",
                self.scale
            )));
        }
        let side = (plan.canvas_size as f32 * self.scale).ceil();
        if !side.is_finite() || side < 1.0 || side > MAX_DIM as f32 {
            return Err(QrStyleError::validation(format!(
                "raster size {side} outside 1..={MAX_DIM}"
            )));
        }
        let side = side as u32;

        let svg = plan_to_svg(plan)?;
        let opts = self.options();
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| QrStyleError::validation(format!("parse generated svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
            .ok_or_else(|| QrStyleError::validation("failed to allocate pixmap"))?;
        let xform = resvg::tiny_skia::Transform::from_scale(self.scale, self.scale);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width: side,
            height: side,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

/// Straight-alpha copy of `frame`'s pixels.
pub fn demultiplied(frame: &FrameRGBA) -> Vec<u8> {
    if !frame.premultiplied {
        return frame.data.clone();
    }
    let mut out = frame.data.clone();
    for px in out.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = unpremultiply_u8(px[0], a);
        px[1] = unpremultiply_u8(px[1], a);
        px[2] = unpremultiply_u8(px[2], a);
    }
    out
}

/// Write `frame` to `path` as a PNG.
pub fn write_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> QrStyleResult<()> {
    let path = path.as_ref();
    let data = demultiplied(frame);
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| QrStyleError::Other(anyhow::anyhow!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
