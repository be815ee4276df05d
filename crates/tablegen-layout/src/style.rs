//! Style records and field-wise merging.
//!
//! A [`Style`] is a bag of independently optional visual attributes.
//! An absent field means "inherit from the enclosing scope"; the
//! cascade is table -> section -> row -> cell, later scopes winning.

use serde::{Deserialize, Serialize};
use tablegen_types::font::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use tablegen_types::{Color, FontSpec, FontStyle, Padding};

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Optional visual attributes for a table, section, row or cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub border_color: Option<Color>,
    /// Uniform border width, used for any edge without its own value.
    pub border_width: Option<f32>,
    pub border_top: Option<f32>,
    pub border_right: Option<f32>,
    pub border_bottom: Option<f32>,
    pub border_left: Option<f32>,
    pub padding: Option<Padding>,
    pub h_align: Option<HAlign>,
    pub v_align: Option<VAlign>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_style: Option<FontStyle>,
}

/// Resolved border widths for the four edges of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Style {
    /// The fully populated style every table starts from.
    pub fn table_default() -> Self {
        Self {
            background: Some(Color::WHITE),
            text_color: Some(Color::BLACK),
            border_color: Some(Color::BLACK),
            border_width: Some(1.0),
            padding: Some(Padding::uniform(8.0)),
            h_align: Some(HAlign::Left),
            v_align: Some(VAlign::Top),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_style: Some(FontStyle::Regular),
            ..Self::default()
        }
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Every field takes `other`'s value when present, else keeps
    /// `self`'s. `None` returns a copy of `self`.
    pub fn merge(&self, other: Option<&Style>) -> Style {
        let Some(o) = other else {
            return self.clone();
        };
        Style {
            background: o.background.or(self.background),
            text_color: o.text_color.or(self.text_color),
            border_color: o.border_color.or(self.border_color),
            border_width: o.border_width.or(self.border_width),
            border_top: o.border_top.or(self.border_top),
            border_right: o.border_right.or(self.border_right),
            border_bottom: o.border_bottom.or(self.border_bottom),
            border_left: o.border_left.or(self.border_left),
            padding: o.padding.or(self.padding),
            h_align: o.h_align.or(self.h_align),
            v_align: o.v_align.or(self.v_align),
            font_family: o.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: o.font_size.or(self.font_size),
            font_style: o.font_style.or(self.font_style),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Font request for this style, absent fields filled with the
    /// library defaults.
    pub fn font_spec(&self) -> FontSpec {
        FontSpec::new(
            self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY),
            self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            self.font_style.unwrap_or_default(),
        )
    }

    /// Cell padding, zero when unset.
    pub fn padding_or_zero(&self) -> Padding {
        self.padding.unwrap_or(Padding::ZERO)
    }

    /// Per-edge border widths: the edge's own value, else the uniform
    /// width, else zero.
    pub fn border_edges(&self) -> EdgeWidths {
        let uniform = self.border_width.unwrap_or(0.0);
        EdgeWidths {
            top: self.border_top.unwrap_or(uniform),
            right: self.border_right.unwrap_or(uniform),
            bottom: self.border_bottom.unwrap_or(uniform),
            left: self.border_left.unwrap_or(uniform),
        }
    }
}

impl EdgeWidths {
    pub fn is_zero(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }
}
