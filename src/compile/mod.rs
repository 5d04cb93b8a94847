pub(crate) mod fingerprint;
pub(crate) mod overlay;
pub(crate) mod plan;
