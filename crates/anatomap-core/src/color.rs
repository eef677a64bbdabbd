use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An opaque sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand (case-insensitive, surrounding whitespace
    /// ignored).
    ///
    /// Scale stops are interpolated channel by channel, so only opaque hex forms are accepted
    /// here; palette entries may use any CSS color (see [`is_css_color`]).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        if !s.starts_with('#') || !matches!(s.len(), 4 | 7) {
            return None;
        }
        let color = s.parse::<svgtypes::Color>().ok()?;
        Some(Self::rgb(color.red, color.green, color.blue))
    }

    /// Channel-wise linear blend; `factor` 0 yields `self`, 1 yields `other`.
    ///
    /// Each channel is rounded half away from zero, which matches `Math.round` for the
    /// non-negative values produced here.
    pub fn lerp(self, other: Self, factor: f64) -> Self {
        fn channel(lo: u8, hi: u8, factor: f64) -> u8 {
            let lo = f64::from(lo);
            let hi = f64::from(hi);
            (lo + (hi - lo) * factor).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(self.r, other.r, factor),
            g: channel(self.g, other.g, factor),
            b: channel(self.b, other.b, factor),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s).ok_or_else(|| Error::InvalidColor {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

/// Returns true when `s` parses as a CSS color (hex, `rgb()`, `hsl()`, named colors, ...).
pub fn is_css_color(s: &str) -> bool {
    s.trim().parse::<svgtypes::Color>().is_ok()
}
