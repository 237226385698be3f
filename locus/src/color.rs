use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LocusError;

/// Color with an alpha channel.
///
/// Serialized as a `#aarrggbb` hex string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = LocusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_argb_hex()
    }
}

impl FromStr for Color {
    type Err = LocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::argb(0, 0, 0, 0);
    /// Black color: `#ff000000`
    pub const BLACK: Color = Color::argb(255, 0, 0, 0);
    /// White color: `#ffffffff`
    pub const WHITE: Color = Color::argb(255, 255, 255, 255);

    /// Constructs color from its channels, alpha first.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Parses a color from `#rrggbb` (opaque) or `#aarrggbb` notation. Both cases of hex digits are accepted.
    pub fn from_hex(hex: &str) -> Result<Self, LocusError> {
        let invalid = || LocusError::InvalidColor(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            log::debug!("Color string '{hex}' contains non-hex characters");
            return Err(invalid());
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).map_err(|_| invalid())
        };

        match digits.len() {
            6 => Ok(Self::argb(255, channel(0)?, channel(1)?, channel(2)?)),
            8 => Ok(Self::argb(
                channel(0)?,
                channel(1)?,
                channel(2)?,
                channel(3)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Converts the color into `#rrggbb` notation. The alpha channel is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color into `#aarrggbb` notation.
    pub fn to_argb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }

    /// Converts the color into CSS `rgba(r, g, b, opacity)` notation.
    pub fn to_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.opacity())
    }

    /// Opacity of the color between `0` (transparent) and `1` (opaque).
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Returns a copy of the color with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns a copy of the color with the opacity between `0` and `1`. Values outside of the range are clamped.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha channel.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }
}
