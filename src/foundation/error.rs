/// Convenience result type used across qrstyle.
pub type QrStyleResult<T> = Result<T, QrStyleError>;

/// Top-level error taxonomy used by the rendering pipeline.
#[derive(thiserror::Error, Debug)]
pub enum QrStyleError {
    /// The module matrix is missing, not square, or smaller than a version-1 symbol.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// A settings enum holds a value outside its known variants (strict parsing only).
    #[error("invalid settings value for `{field}`: \"{value}\"")]
    InvalidSettingsValue {
        /// Settings key, as spelled in configuration.
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// The logo exclusion zone hides more modules than the error-correction level can restore.
    #[error(
        "logo too large: covers {:.1}% of data modules, limit is {:.1}%",
        covered * 100.0,
        limit * 100.0
    )]
    LogoTooLarge {
        /// Fraction of non-finder modules hidden by the exclusion zone.
        covered: f64,
        /// Fraction the selected error-correction level can recover.
        limit: f64,
    },

    /// The external matrix encoder failed; the source error is kept as-is.
    #[error("matrix encoder failed: {0}")]
    Encoder(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrStyleError {
    /// Build a [`QrStyleError::InvalidMatrix`] value.
    pub fn invalid_matrix(msg: impl Into<String>) -> Self {
        Self::InvalidMatrix(msg.into())
    }

    /// Build a [`QrStyleError::InvalidSettingsValue`] value.
    pub fn invalid_setting(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSettingsValue {
            field,
            value: value.into(),
        }
    }

    /// Wrap an encoder failure without altering it.
    pub fn encoder(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoder(Box::new(err))
    }

    /// Build a [`QrStyleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrStyleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
