//! RGBA color type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// An 8-bit-per-channel RGBA color.
///
/// Serializes as a `#RRGGBBAA` hex string and deserializes from any
/// form accepted by [`Color::from_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Characters are validated before length, so `"#GG"` reports a
    /// bad character rather than a bad length.
    pub fn from_hex(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(TableError::EmptyColor);
        }
        let digits = input.strip_prefix('#').unwrap_or(input);

        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(TableError::InvalidColorChar {
                input: digits.to_string(),
                ch,
            });
        }

        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();
        let byte = |hi: u8, lo: u8| (hi << 4) | lo;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(byte(*r, *r), byte(*g, *g), byte(*b, *b))),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(byte(*r1, *r2), byte(*g1, *g2), byte(*b1, *b2))),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::rgba(
                byte(*r1, *r2),
                byte(*g1, *g2),
                byte(*b1, *b2),
                byte(*a1, *a2),
            )),
            other => Err(TableError::InvalidColorLength {
                input: digits.to_string(),
                len: other.len(),
            }),
        }
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Return a copy with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TableError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}
