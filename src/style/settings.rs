use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::style::color::Color;

/// A fully-resolved style configuration for one render call.
///
/// Keys follow the camelCase spelling of the settings store (`dotStyle`, `eyeColorTL`, ...).
/// Every field is optional on input; missing keys take the [`Default`] value. Parsing is lenient
/// so that settings written by newer editors still render:
///
/// - enum values that are not recognized fall back to the default variant (with a warning log)
/// - booleans and numbers may be given as strings (`"true"`, `"25"`)
/// - nullable colors and URLs treat the empty string as unset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSettings {
    /// Shape drawn for each data module.
    pub dot_style: DotStyle,
    /// Shape of the outer 7x7 finder ring.
    pub eye_frame: EyeFrame,
    /// Shape of the inner 3x3 finder center.
    pub eye_style: EyeStyle,
    /// Solid module color (used when the gradient is disabled).
    pub foreground_color: Color,
    /// Canvas base color; also used for the logo patch.
    pub background_color: Color,
    /// Fill modules with a linear gradient instead of `foreground_color`.
    #[serde(deserialize_with = "flex::boolean")]
    pub use_gradient: bool,
    /// Gradient color at the start point.
    pub gradient_start: Color,
    /// Gradient color at the end point.
    pub gradient_end: Color,
    /// Gradient angle preset.
    pub gradient_direction: GradientDirection,
    /// Universal finder color override.
    #[serde(deserialize_with = "flex::optional_color")]
    pub eye_color: Option<Color>,
    /// Top-left finder color override (highest precedence).
    #[serde(rename = "eyeColorTL", deserialize_with = "flex::optional_color")]
    pub eye_color_tl: Option<Color>,
    /// Top-right finder color override (highest precedence).
    #[serde(rename = "eyeColorTR", deserialize_with = "flex::optional_color")]
    pub eye_color_tr: Option<Color>,
    /// Bottom-left finder color override (highest precedence).
    #[serde(rename = "eyeColorBL", deserialize_with = "flex::optional_color")]
    pub eye_color_bl: Option<Color>,
    /// Draw a centered logo.
    #[serde(deserialize_with = "flex::boolean")]
    pub logo_enabled: bool,
    /// Image reference for the logo (URL, data URI or path understood by the renderer).
    #[serde(deserialize_with = "flex::optional_text")]
    pub logo_url: Option<String>,
    /// Logo side as a percentage of the data area side.
    #[serde(deserialize_with = "flex::number")]
    pub logo_size: f64,
    /// Logo image opacity in `[0, 1]`.
    #[serde(deserialize_with = "flex::number")]
    pub logo_opacity: f64,
    /// Padding in canvas units between the logo image and the edge of its patch.
    #[serde(deserialize_with = "flex::number")]
    pub logo_padding: f64,
    /// Full-canvas background image reference.
    #[serde(deserialize_with = "flex::optional_text")]
    pub bg_image: Option<String>,
    /// Background image opacity in `[0, 1]`.
    #[serde(deserialize_with = "flex::number")]
    pub bg_opacity: f64,
    /// Decorative frame variant.
    pub frame: FrameKind,
    /// Frame paint color.
    pub frame_color: Color,
    /// Caption for the badge frame.
    pub frame_text: String,
    /// Quiet zone in modules; any nonzero value snaps to the standard 4-module zone.
    #[serde(deserialize_with = "flex::count")]
    pub margin_size: u32,
    /// Error-correction level handed to the matrix encoder.
    pub error_correction_level: EcLevel,
    /// What to do when the logo hides more modules than the error correction can restore.
    pub logo_safety: LogoSafety,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            dot_style: DotStyle::default(),
            eye_frame: EyeFrame::default(),
            eye_style: EyeStyle::default(),
            foreground_color: Color::BLACK,
            background_color: Color::WHITE,
            use_gradient: false,
            gradient_start: Color::BLACK,
            gradient_end: Color::rgb(0x4f, 0x46, 0xe5),
            gradient_direction: GradientDirection::default(),
            eye_color: None,
            eye_color_tl: None,
            eye_color_tr: None,
            eye_color_bl: None,
            logo_enabled: false,
            logo_url: None,
            logo_size: 20.0,
            logo_opacity: 1.0,
            logo_padding: 5.0,
            bg_image: None,
            bg_opacity: 1.0,
            frame: FrameKind::default(),
            frame_color: Color::BLACK,
            frame_text: "SCAN ME".to_owned(),
            margin_size: 4,
            error_correction_level: EcLevel::default(),
            logo_safety: LogoSafety::default(),
        }
    }
}

impl StyleSettings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> QrStyleResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| QrStyleError::validation(format!("parse style settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> QrStyleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            QrStyleError::validation(format!("open style settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse settings from a JSON string.
    pub fn from_json_str(s: &str) -> QrStyleResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| QrStyleError::validation(format!("parse style settings JSON: {e}")))
    }

    /// Parse settings from an already-decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> QrStyleResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| QrStyleError::validation(format!("invalid style settings: {e}")))
    }

    /// Build settings from a flat key/value map, as kept by a string settings store.
    ///
    /// Unknown keys are ignored.
    pub fn from_key_values<I, K, V>(pairs: I) -> QrStyleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::default().with_overrides(pairs)
    }

    /// Return a copy with the given `key = value` pairs applied on top.
    pub fn with_overrides<I, K, V>(&self, pairs: I) -> QrStyleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut value = serde_json::to_value(self)
            .map_err(|e| QrStyleError::serde(format!("serialize style settings: {e}")))?;
        let map = value
            .as_object_mut()
            .ok_or_else(|| QrStyleError::serde("style settings did not serialize to an object"))?;
        for (k, v) in pairs {
            map.insert(k.into(), serde_json::Value::String(v.into()));
        }
        Self::from_json_value(value)
    }

    /// Logo reference when the logo layer is active (enabled and a non-empty URL is set).
    pub fn active_logo(&self) -> Option<&str> {
        if !self.logo_enabled {
            return None;
        }
        self.logo_url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Background image reference, if any.
    pub fn active_bg_image(&self) -> Option<&str> {
        self.bg_image.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// A settings enum that can be parsed from its configuration spelling and has a fallback.
pub(crate) trait SettingValue: FromStr<Err = QrStyleError> + Default {
    const FIELD: &'static str;
}

/// Lowercase and drop separators so `extra-rounded`, `extra_rounded` and `extraRounded` agree.
fn normalize_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: SettingValue,
{
    let Some(raw) = Option::<flex::Scalar>::deserialize(deserializer)? else {
        return Ok(T::default());
    };
    let text = raw.into_text();
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(text.parse::<T>().unwrap_or_else(|err| {
        tracing::warn!(field = T::FIELD, value = %text, %err, "falling back to default variant");
        T::default()
    }))
}

macro_rules! lenient_setting {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserialize_lenient(deserializer)
                }
            }
        )+
    };
}

lenient_setting!(
    DotStyle,
    EyeFrame,
    EyeStyle,
    FrameKind,
    GradientDirection,
    EcLevel,
    LogoSafety,
);

/// Shape used for each data module outside the finder patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotStyle {
    /// Axis-aligned unit square.
    #[default]
    Square,
    /// Small inscribed circle.
    Dots,
    /// Square with a rounded bottom-right corner.
    Rounded,
    /// Full inscribed circle.
    ExtraRounded,
    /// Diamond touching the cell edge midpoints.
    Classy,
    /// Diamond touching the cell edge midpoints.
    Diamond,
    /// Four-cusp star.
    Star,
    /// Plus sign.
    Cross,
    /// Heart.
    Heart,
}

impl DotStyle {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Square,
        Self::Dots,
        Self::Rounded,
        Self::ExtraRounded,
        Self::Classy,
        Self::Diamond,
        Self::Star,
        Self::Cross,
        Self::Heart,
    ];
}

impl FromStr for DotStyle {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "square" => Ok(Self::Square),
            "dots" | "dot" => Ok(Self::Dots),
            "rounded" => Ok(Self::Rounded),
            "extrarounded" => Ok(Self::ExtraRounded),
            "classy" => Ok(Self::Classy),
            "diamond" => Ok(Self::Diamond),
            "star" => Ok(Self::Star),
            "cross" => Ok(Self::Cross),
            "heart" => Ok(Self::Heart),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for DotStyle {
    const FIELD: &'static str = "dotStyle";
}

/// Shape of the outer finder ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeFrame {
    /// Square ring.
    #[default]
    Square,
    /// Rounded-rectangle ring.
    Rounded,
    /// Circular ring.
    Circle,
    /// One rounded corner opposite a square corner.
    Leaf,
}

impl EyeFrame {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Square, Self::Rounded, Self::Circle, Self::Leaf];
}

impl FromStr for EyeFrame {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "square" => Ok(Self::Square),
            "rounded" => Ok(Self::Rounded),
            "circle" => Ok(Self::Circle),
            "leaf" => Ok(Self::Leaf),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for EyeFrame {
    const FIELD: &'static str = "eyeFrame";
}

/// Shape of the inner finder center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    /// Filled 3x3 square.
    #[default]
    Square,
    /// Inscribed circle.
    Circle,
}

impl FromStr for EyeStyle {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "square" => Ok(Self::Square),
            "circle" | "dot" => Ok(Self::Circle),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for EyeStyle {
    const FIELD: &'static str = "eyeStyle";
}

/// Decorative frame around the code; every variant except `None` grows the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// No frame.
    #[default]
    None,
    /// Stroked rounded border.
    Border,
    /// Card with a caption band below the code.
    Badge,
    /// Phone mockup with a notch above the code.
    Phone,
}

impl FrameKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Border, Self::Badge, Self::Phone];
}

impl FromStr for FrameKind {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "none" => Ok(Self::None),
            "border" => Ok(Self::Border),
            "badge" => Ok(Self::Badge),
            "phone" => Ok(Self::Phone),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for FrameKind {
    const FIELD: &'static str = "frame";
}

/// Linear gradient angle preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// 0 degrees: left to right.
    #[default]
    Deg0,
    /// 45 degrees: bottom-left to top-right.
    Deg45,
    /// 90 degrees: bottom to top.
    Deg90,
    /// 135 degrees: top-left to bottom-right.
    Deg135,
}

impl GradientDirection {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg45, Self::Deg90, Self::Deg135];

    /// Angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg45 => 45,
            Self::Deg90 => 90,
            Self::Deg135 => 135,
        }
    }
}

impl FromStr for GradientDirection {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        let key = key.strip_suffix("deg").unwrap_or(&key);
        match key {
            "0" => Ok(Self::Deg0),
            "45" => Ok(Self::Deg45),
            "90" => Ok(Self::Deg90),
            "135" => Ok(Self::Deg135),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for GradientDirection {
    const FIELD: &'static str = "gradientDirection";
}

impl Serialize for GradientDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.degrees())
    }
}

/// QR error-correction level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EcLevel {
    /// Low: about 7% of codewords recoverable.
    L,
    /// Medium: about 15% recoverable.
    #[default]
    M,
    /// Quartile: about 25% recoverable.
    Q,
    /// High: about 30% recoverable.
    H,
}

impl EcLevel {
    /// Approximate fraction of the symbol that can be damaged and still decode.
    pub fn recovery_fraction(self) -> f64 {
        match self {
            Self::L => 0.07,
            Self::M => 0.15,
            Self::Q => 0.25,
            Self::H => 0.30,
        }
    }
}

impl FromStr for EcLevel {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "l" | "low" => Ok(Self::L),
            "m" | "medium" => Ok(Self::M),
            "q" | "quartile" => Ok(Self::Q),
            "h" | "high" => Ok(Self::H),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for EcLevel {
    const FIELD: &'static str = "errorCorrectionLevel";
}

/// Policy applied when the logo exclusion zone exceeds the error-correction budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSafety {
    /// No check; the logo is drawn at the requested size.
    #[default]
    Off,
    /// Draw as requested, but attach a warning to the plan.
    Warn,
    /// Reduce the logo size until it fits the budget.
    Shrink,
    /// Fail the render with [`QrStyleError::LogoTooLarge`].
    Reject,
}

impl FromStr for LogoSafety {
    type Err = QrStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "off" | "none" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "shrink" => Ok(Self::Shrink),
            "reject" => Ok(Self::Reject),
            _ => Err(QrStyleError::invalid_setting(Self::FIELD, s)),
        }
    }
}

impl SettingValue for LogoSafety {
    const FIELD: &'static str = "logoSafety";
}

mod flex {
    use serde::{Deserialize, Deserializer, de::Error as _};

    use crate::style::color::Color;

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum Scalar {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    impl Scalar {
        pub(super) fn into_text(self) -> String {
            match self {
                Self::Bool(b) => b.to_string(),
                Self::Int(i) => i.to_string(),
                Self::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                Self::Float(f) => f.to_string(),
                Self::Text(s) => s,
            }
        }
    }

    pub(super) fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match Option::<Scalar>::deserialize(d)? {
            None => Ok(false),
            Some(Scalar::Bool(b)) => Ok(b),
            Some(Scalar::Int(i)) => Ok(i != 0),
            Some(Scalar::Float(f)) => Ok(f != 0.0),
            Some(Scalar::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                other => Err(D::Error::custom(format!(
                    "expected a boolean, got \"{other}\""
                ))),
            },
        }
    }

    pub(super) fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let v = match Scalar::deserialize(d)? {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
            Scalar::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("expected a number, got \"{s}\"")))?,
            Scalar::Bool(b) => {
                return Err(D::Error::custom(format!("expected a number, got {b}")));
            }
        };
        if !v.is_finite() {
            return Err(D::Error::custom("number must be finite"));
        }
        Ok(v)
    }

    pub(super) fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let v = number(d)?;
        if v < 0.0 {
            return Err(D::Error::custom(format!("expected a non-negative count, got {v}")));
        }
        Ok(v.round().min(f64::from(u32::MAX)) as u32)
    }

    pub(super) fn optional_color<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Color>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Other(Color),
        }

        match Option::<Repr>::deserialize(d)? {
            None => Ok(None),
            Some(Repr::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Repr::Text(s)) => Color::parse(&s).map(Some).map_err(D::Error::custom),
            Some(Repr::Other(c)) => Ok(Some(c)),
        }
    }

    pub(super) fn optional_text<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<String>::deserialize(d)?.filter(|s| !s.trim().is_empty()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/settings.rs"]
mod tests;
