use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Error returned when a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Expected exactly 6 hex digits (after an optional `#`).
    Length(usize),
    /// A character outside `[0-9a-fA-F]`.
    InvalidDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Length(n) => write!(f, "expected 6 hex digits, found {n}"),
            ColorParseError::InvalidDigit(c) => write!(f, "invalid hex digit '{c}'"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// An opaque 8-bit RGB color, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color. The leading `#` is optional; surrounding
    /// whitespace is rejected.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let count = digits.chars().count();
        if count != 6 {
            return Err(ColorParseError::Length(count));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            // unreachable after the digit check, kept total
            _ => Err(ColorParseError::InvalidDigit('?')),
        }
    }

    /// Parse `s`, keeping `fallback` when it is not a valid color.
    pub fn parse_or(s: &str, fallback: Rgb) -> Rgb {
        match Self::parse(s) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Ignoring color {s:?}: {e}");
                fallback
            }
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Attach an opacity, clamped into [0, 1].
    pub fn rgba(&self, alpha: f32) -> Rgba {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Rgba { r: self.r, g: self.g, b: self.b, a }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// An RGB color with opacity, as painted by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgba(59, 130, 246, 0.1)`.
    pub fn to_css(&self) -> String {
        if *self == Self::TRANSPARENT {
            return "transparent".to_string();
        }
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One color stop of a gradient; `offset` is in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: Rgba,
    pub offset: f32,
}

impl GradientStop {
    pub fn new(color: Rgba, offset: f32) -> Self {
        Self { color, offset }
    }

    /// CSS stop syntax, e.g. `rgba(255, 255, 255, 0.4) 40%`.
    pub fn to_css(&self) -> String {
        format!("{} {}%", self.color.to_css(), self.offset)
    }
}
