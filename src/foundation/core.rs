pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Winding rule used when filling a path made of several sub-paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Every enclosed region is painted.
    #[default]
    NonZero,
    /// Regions enclosed an even number of times are left unpainted (ring/donut shapes).
    EvenOdd,
}

impl FillRule {
    /// SVG `fill-rule` attribute value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

/// Serialize a path as SVG path data (`M0 0L10 0...`) rather than a list of elements.
pub(crate) fn serialize_svg_path<S>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.to_svg())
}

/// Number of sub-paths (one per `MoveTo`) in `path`.
#[cfg(test)]
pub(crate) fn subpath_count(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count()
}
