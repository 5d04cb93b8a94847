use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::matrix::adapter::QrMatrix;
use crate::style::settings::EcLevel;

/// Turns a payload into a module matrix.
///
/// Implementations own all QR encoding concerns (mode selection, version choice, masking). The
/// renderer only consumes the resulting grid.
pub trait MatrixEncoder: Send + Sync {
    /// Encode `data` at the requested error-correction level.
    fn encode(&self, data: &str, level: EcLevel) -> QrStyleResult<QrMatrix>;
}

/// Default encoder backed by the `qrcode` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl MatrixEncoder for QrcodeEncoder {
    fn encode(&self, data: &str, level: EcLevel) -> QrStyleResult<QrMatrix> {
        let code = qrcode::QrCode::with_error_correction_level(data.as_bytes(), level.into())
            .map_err(QrStyleError::encoder)?;
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        tracing::debug!(size, bytes = data.len(), ?level, "encoded matrix");
        QrMatrix::from_modules(size, modules)
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => Self::L,
            EcLevel::M => Self::M,
            EcLevel::Q => Self::Q,
            EcLevel::H => Self::H,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/encoder.rs"]
mod tests;
