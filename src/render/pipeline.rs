use rayon::prelude::*;

use crate::compile::plan::{RenderPlan, compile_plan};
use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::matrix::adapter::QrMatrix;
use crate::matrix::encoder::{MatrixEncoder, QrcodeEncoder};
use crate::style::settings::StyleSettings;

/// Encode `data` with the default encoder and plan its styled rendering.
///
/// Pipeline:
/// 1. [`QrcodeEncoder`] at `settings.error_correction_level`
/// 2. [`render_matrix`]
pub fn render(data: &str, settings: &StyleSettings) -> QrStyleResult<RenderPlan> {
    render_with_encoder(&QrcodeEncoder, data, settings)
}

/// Same as [`render`] with a caller-supplied encoder. Encoder errors are returned untouched.
#[tracing::instrument(skip(encoder, data, settings), fields(bytes = data.len()))]
pub fn render_with_encoder(
    encoder: &dyn MatrixEncoder,
    data: &str,
    settings: &StyleSettings,
) -> QrStyleResult<RenderPlan> {
    let matrix = encoder.encode(data, settings.error_correction_level)?;
    render_matrix(&matrix, settings)
}

/// Plan the styled rendering of an already-encoded matrix.
pub fn render_matrix(matrix: &QrMatrix, settings: &StyleSettings) -> QrStyleResult<RenderPlan> {
    compile_plan(matrix, settings)
}

/// Threading configuration for [`render_batch_with`].
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Render payloads on a rayon pool.
    pub parallel: bool,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Render many payloads with shared settings on the global rayon pool. Results keep input order.
pub fn render_batch<S>(payloads: &[S], settings: &StyleSettings) -> Vec<QrStyleResult<RenderPlan>>
where
    S: AsRef<str> + Sync,
{
    payloads
        .par_iter()
        .map(|p| render(p.as_ref(), settings))
        .collect()
}

/// [`render_batch`] with explicit threading. Fails only if the thread pool cannot be built.
#[tracing::instrument(skip(payloads, settings), fields(count = payloads.len()))]
pub fn render_batch_with<S>(
    payloads: &[S],
    settings: &StyleSettings,
    opts: &BatchOptions,
) -> QrStyleResult<Vec<QrStyleResult<RenderPlan>>>
where
    S: AsRef<str> + Sync,
{
    if !opts.parallel {
        tracing::debug!("sequential batch");
        return Ok(payloads
            .iter()
            .map(|p| render(p.as_ref(), settings))
            .collect());
    }
    let pool = build_thread_pool(opts.threads)?;
    Ok(pool.install(|| render_batch(payloads, settings)))
}

fn build_thread_pool(threads: Option<usize>) -> QrStyleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(QrStyleError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| QrStyleError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
