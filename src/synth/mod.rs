pub(crate) mod finder;
pub(crate) mod modules;
pub(crate) mod shapes;
