//! Text measurement seam.

use tablegen_types::FontSpec;

/// Reference string for line height: covers an ascender and a
/// descender.
pub const LINE_HEIGHT_SAMPLE: &str = "Ag";

/// Measures text in a given font.
///
/// Implementations must be pure and deterministic for a given font.
pub trait TextMeasurer {
    /// Width in pixels of `text` laid out on a single line.
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32;

    /// Height of one line, taken from [`LINE_HEIGHT_SAMPLE`].
    fn line_height(&self, font: &FontSpec) -> f32;
}

/// Font-free measurer with fixed per-character metrics scaled by the
/// font size. Used for layout without font files and in benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct SimpleTextMeasurer {
    /// Advance per character as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for SimpleTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for SimpleTextMeasurer {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().filter(|c| !c.is_control()).count() as f32 * font.size * self.advance_ratio
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        font.size * self.line_height_ratio
    }
}
