pub(crate) mod color;
pub(crate) mod fill;
pub(crate) mod settings;
