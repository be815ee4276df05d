//! Glyph outline extraction.
//!
//! Outlines are emitted in font design units (y-up); the renderer
//! applies scale and the y flip when rasterizing.

use tiny_skia::{Path, PathBuilder};

/// Feeds ttf-parser outline commands into a tiny-skia path.
pub struct GlyphOutlineBuilder {
    builder: PathBuilder,
}

impl GlyphOutlineBuilder {
    pub fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    /// The completed path, `None` for glyphs without contours.
    pub fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl Default for GlyphOutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Outline of `glyph` in design units.
pub fn outline_glyph(face: &ttf_parser::Face<'_>, glyph: ttf_parser::GlyphId) -> Option<Path> {
    let mut builder = GlyphOutlineBuilder::new();
    face.outline_glyph(glyph, &mut builder)?;
    builder.finish()
}

/// Hollow box used to draw characters in the built-in font.
///
/// The inner contour runs the opposite way so the non-zero winding
/// rule leaves it unfilled.
pub fn tofu_box(left: f32, bottom: f32, right: f32, top: f32, stroke: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(left, bottom);
    pb.line_to(right, bottom);
    pb.line_to(right, top);
    pb.line_to(left, top);
    pb.close();

    let (il, ib, ir, it) = (left + stroke, bottom + stroke, right - stroke, top - stroke);
    if il < ir && ib < it {
        pb.move_to(il, ib);
        pb.line_to(il, it);
        pb.line_to(ir, it);
        pb.line_to(ir, ib);
        pb.close();
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttf_parser::OutlineBuilder;

    #[test]
    fn builder_produces_path() {
        let mut b = GlyphOutlineBuilder::new();
        b.move_to(0.0, 0.0);
        b.line_to(100.0, 0.0);
        b.quad_to(150.0, 50.0, 100.0, 100.0);
        b.curve_to(80.0, 120.0, 20.0, 120.0, 0.0, 100.0);
        b.close();
        let path = b.finish().expect("path");
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.top(), 0.0);
        assert!(bounds.right() > 100.0);
    }

    #[test]
    fn empty_builder_has_no_path() {
        assert!(GlyphOutlineBuilder::new().finish().is_none());
    }

    #[test]
    fn tofu_box_bounds() {
        let path = tofu_box(50.0, 0.0, 550.0, 700.0, 60.0).expect("path");
        let b = path.bounds();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (50.0, 0.0, 550.0, 700.0));
    }

    #[test]
    fn thick_stroke_gives_solid_box() {
        assert!(tofu_box(0.0, 0.0, 10.0, 10.0, 20.0).is_some());
    }
}
