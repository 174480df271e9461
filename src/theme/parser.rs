//! Color value parsing utilities

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error type for color parsing failures
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
    #[error("Invalid rgba color format: {0}")]
    InvalidRgba(String),
    #[error("Alpha out of range [0, 1]: {0}")]
    AlphaOutOfRange(String),
    #[error("Unknown color format: {0}")]
    UnknownFormat(String),
}

/// A palette color, either opaque `#rrggbb` or translucent `rgba(r, g, b, a)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Hex(u8, u8, u8),
    Rgba(u8, u8, u8, f32),
}

impl ColorValue {
    /// Build an opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        ColorValue::Hex((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        ColorValue::Rgba(r, g, b, a)
    }

    /// Red, green and blue channels, alpha dropped
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            ColorValue::Hex(r, g, b) | ColorValue::Rgba(r, g, b, _) => (r, g, b),
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            ColorValue::Hex(..) => 1.0,
            ColorValue::Rgba(_, _, _, a) => a,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ColorValue::Hex(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            ColorValue::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a color from `#rrggbb` or `rgba(r, g, b, a)` text
pub fn parse_color(input: &str) -> Result<ColorValue, ColorParseError> {
    let input = input.trim();

    if input.starts_with('#') {
        return parse_hex_color(input);
    }

    if let Some(inner) = input
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgba_color(input, inner);
    }

    Err(ColorParseError::UnknownFormat(input.to_string()))
}

/// Parse hex color in format #RRGGBB
fn parse_hex_color(hex: &str) -> Result<ColorValue, ColorParseError> {
    let digits = &hex[1..];
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
    };
    Ok(ColorValue::Hex(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_rgba_color(input: &str, inner: &str) -> Result<ColorValue, ColorParseError> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [r, g, b, a] = parts.as_slice() else {
        return Err(ColorParseError::InvalidRgba(input.to_string()));
    };

    let channel = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| ColorParseError::InvalidRgba(input.to_string()))
    };
    let alpha = a
        .parse::<f32>()
        .map_err(|_| ColorParseError::InvalidRgba(input.to_string()))?;
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(ColorParseError::AlphaOutOfRange(input.to_string()));
    }

    Ok(ColorValue::Rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_color(&value).map_err(|e| D::Error::custom(format!("Failed to parse color: {e}")))
    }
}

impl Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
