//! Font descriptors.

use serde::{Deserialize, Serialize};

/// Default font family when no style in the cascade names one.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Weight/slant combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Combine independent bold/italic flags.
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Regular,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }
}

/// A fully resolved font request: family, pixel size, style.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FontStyle::Regular)
    }
}
