//! Fluent construction of [`Style`] values.

use tablegen_layout::{HAlign, Style, VAlign};
use tablegen_types::{Color, FontStyle, Padding, Result, TableError};

use super::keep_first;

/// Accumulates style fields; only fields that are set end up in the
/// built [`Style`].
#[derive(Debug, Default)]
pub struct StyleBuilder {
    style: Style,
    error: Option<TableError>,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing style instead of an empty one.
    pub fn from_style(style: Style) -> Self {
        Self { style, error: None }
    }

    pub fn background(&mut self, color: Color) -> &mut Self {
        self.style.background = Some(color);
        self
    }

    /// Background from a hex string; a parse error is kept until build.
    pub fn background_hex(&mut self, hex: &str) -> &mut Self {
        if let Some(color) = self.parse(hex) {
            self.style.background = Some(color);
        }
        self
    }

    pub fn text_color(&mut self, color: Color) -> &mut Self {
        self.style.text_color = Some(color);
        self
    }

    pub fn text_color_hex(&mut self, hex: &str) -> &mut Self {
        if let Some(color) = self.parse(hex) {
            self.style.text_color = Some(color);
        }
        self
    }

    pub fn border_color(&mut self, color: Color) -> &mut Self {
        self.style.border_color = Some(color);
        self
    }

    pub fn border_color_hex(&mut self, hex: &str) -> &mut Self {
        if let Some(color) = self.parse(hex) {
            self.style.border_color = Some(color);
        }
        self
    }

    /// Uniform border width for all edges.
    pub fn border(&mut self, width: f32) -> &mut Self {
        self.style.border_width = Some(width);
        self
    }

    pub fn border_top(&mut self, width: f32) -> &mut Self {
        self.style.border_top = Some(width);
        self
    }

    pub fn border_right(&mut self, width: f32) -> &mut Self {
        self.style.border_right = Some(width);
        self
    }

    pub fn border_bottom(&mut self, width: f32) -> &mut Self {
        self.style.border_bottom = Some(width);
        self
    }

    pub fn border_left(&mut self, width: f32) -> &mut Self {
        self.style.border_left = Some(width);
        self
    }

    pub fn padding(&mut self, padding: Padding) -> &mut Self {
        self.style.padding = Some(padding);
        self
    }

    pub fn padding_all(&mut self, value: f32) -> &mut Self {
        self.padding(Padding::uniform(value))
    }

    pub fn font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.style.font_family = Some(family.into());
        self
    }

    pub fn font_size(&mut self, size: f32) -> &mut Self {
        self.style.font_size = Some(size);
        self
    }

    /// Bold, keeping italic if it was already requested.
    pub fn bold(&mut self) -> &mut Self {
        let italic = self.style.font_style.is_some_and(FontStyle::is_italic);
        self.style.font_style = Some(FontStyle::from_flags(true, italic));
        self
    }

    /// Italic, keeping bold if it was already requested.
    pub fn italic(&mut self) -> &mut Self {
        let bold = self.style.font_style.is_some_and(FontStyle::is_bold);
        self.style.font_style = Some(FontStyle::from_flags(bold, true));
        self
    }

    pub fn h_align(&mut self, align: HAlign) -> &mut Self {
        self.style.h_align = Some(align);
        self
    }

    pub fn v_align(&mut self, align: VAlign) -> &mut Self {
        self.style.v_align = Some(align);
        self
    }

    /// The finished style, or the first error recorded while building.
    pub fn build(self) -> Result<Style> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.style),
        }
    }

    pub(crate) fn finish(self) -> (Style, Option<TableError>) {
        (self.style, self.error)
    }

    fn parse(&mut self, hex: &str) -> Option<Color> {
        match Color::from_hex(hex) {
            Ok(color) => Some(color),
            Err(e) => {
                keep_first(&mut self.error, Some(e));
                None
            },
        }
    }
}

/// Run `configure` against a fresh builder.
pub(crate) fn configure_style(
    configure: impl FnOnce(&mut StyleBuilder),
) -> (Style, Option<TableError>) {
    let mut builder = StyleBuilder::new();
    configure(&mut builder);
    builder.finish()
}
