//! RGBA8 software framebuffer backed by a `tiny_skia::Pixmap`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tablegen_types::{Color, Rect, Result, TableError};
use tiny_skia::{FillRule, Paint, Pixmap, Transform};

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// A software RGBA framebuffer.
///
/// Drawing composites source-over. Pixels are stored premultiplied and
/// read back as straight RGBA.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pixmap: Pixmap,
}

fn solid_paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
}

impl Framebuffer {
    /// A `width` x `height` buffer filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Render`] if either dimension is zero or
    /// exceeds [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let pixmap = (width <= MAX_DIMENSION && height <= MAX_DIMENSION)
            .then(|| Pixmap::new(width, height))
            .flatten()
            .ok_or_else(|| {
                TableError::Render(format!(
                    "invalid canvas size {width}x{height} (max {MAX_DIMENSION})"
                ))
            })?;
        let mut fb = Self { pixmap };
        fb.clear(background);
        Ok(fb)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA bytes, row-major.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Color at (`x`, `y`), `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    /// Fill `rect`, snapping its edges to the nearest pixel boundary.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 || rect.is_empty() {
            return;
        }
        let (w, h) = (self.width() as f32, self.height() as f32);
        let snapped = tiny_skia::Rect::from_ltrb(
            rect.x.round().clamp(0.0, w),
            rect.y.round().clamp(0.0, h),
            rect.right().round().clamp(0.0, w),
            rect.bottom().round().clamp(0.0, h),
        );
        // Edges that snap together leave nothing to fill.
        if let Some(snapped) = snapped {
            self.pixmap
                .fill_rect(snapped, &solid_paint(color, false), Transform::identity(), None);
        }
    }

    /// Fill an antialiased `path` mapped through `transform`.
    pub fn fill_path(&mut self, path: &tiny_skia::Path, transform: Transform, color: Color) {
        if color.a == 0 {
            return;
        }
        self.pixmap
            .fill_path(path, &solid_paint(color, true), FillRule::Winding, transform, None);
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_png(&mut out)?;
        Ok(out)
    }

    /// Write as an 8-bit RGBA PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_png(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_png<W: Write>(&self, w: W) -> Result<()> {
        let mut encoder = png::Encoder::new(w, self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(png_error)?;
        writer.write_image_data(&self.to_rgba()).map_err(png_error)?;
        writer.finish().map_err(png_error)
    }
}

fn png_error(e: png::EncodingError) -> TableError {
    match e {
        png::EncodingError::IoError(io) => TableError::Io(io),
        other => TableError::Render(format!("PNG encoding failed: {other}")),
    }
}
