use crate::compile::plan::RenderPlan;
use crate::foundation::error::QrStyleResult;

/// A rendered image as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// A consumer that turns a [`RenderPlan`] into some output without re-deriving geometry.
pub trait PlanRenderer {
    /// What the consumer produces.
    type Output;

    /// Render one plan.
    fn render_plan(&mut self, plan: &RenderPlan) -> QrStyleResult<Self::Output>;
}
