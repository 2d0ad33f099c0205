use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes from either the channel struct or a `#rrggbb` / `#rrggbbaa`
/// hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ChartError;

    fn try_from(repr: ColorRepr) -> ChartResult<Self> {
        let color = match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex)?,
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Self::rgba(red, green, blue, alpha),
        };
        color.validate()?;
        Ok(color)
    }
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{hex}` has a non-hex channel"))
            })
        };
        let alpha = if digits.len() == 8 {
            f64::from(channel(6)?) / 255.0
        } else {
            1.0
        };
        Ok(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Returns the same color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Alternating dash/gap lengths in pixels. Empty means a solid stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashPattern(SmallVec<[f64; 4]>);

impl DashPattern {
    #[must_use]
    pub fn solid() -> Self {
        Self(SmallVec::new())
    }

    pub fn new(segments: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let pattern = Self(segments.into_iter().collect());
        pattern.validate()?;
        Ok(pattern)
    }

    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[f64] {
        &self.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .0
            .iter()
            .any(|segment| !segment.is_finite() || *segment < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash segments must be finite and >= 0".to_owned(),
            ));
        }
        if !self.0.is_empty() && self.0.iter().all(|segment| *segment == 0.0) {
            return Err(ChartError::InvalidData(
                "dash pattern must contain a non-zero segment".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Font used for in-plot labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size_px: f64,
    pub family: String,
}

impl Font {
    #[must_use]
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }

    #[must_use]
    pub fn system_ui(size_px: f64) -> Self {
        Self::new(size_px, "system-ui")
    }

    /// CSS shorthand, e.g. `10px system-ui`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.family.is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
