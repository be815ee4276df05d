//! Paint layer: walks a measured grid and draws each cell.
//!
//! Per cell, following the usual painting order:
//! 1. Background -- `fill_rect()` with the effective background
//! 2. Borders -- one `fill_rect()` per edge, inside the cell box
//! 3. Text -- wrapped inside the padded box, aligned per line

use tablegen_fonts::{Font, FontCache};
use tablegen_layout::text::wrap_text;
use tablegen_layout::{GridCell, HAlign, MeasuredGrid, Style, StyleResolver, TableModel, VAlign};
use tablegen_types::{Color, Rect, Result};
use tiny_skia::Transform;

use crate::framebuffer::Framebuffer;
use crate::options::RenderOptions;

// -------------------------------------------------------------------
// Public entry point
// -------------------------------------------------------------------

/// Paint `grid` (measured from `model`) into a new framebuffer.
///
/// The canvas is the table size plus margins, rounded up. An empty
/// grid produces a 1x1 canvas of the background color.
pub fn paint_table(
    model: &TableModel,
    grid: &MeasuredGrid<'_>,
    fonts: &FontCache,
    options: &RenderOptions,
) -> Result<Framebuffer> {
    if grid.is_empty() {
        return Framebuffer::new(1, 1, options.background);
    }

    let margin = options.margin;
    let width = (grid.total_width() + margin.horizontal()).ceil().max(1.0) as u32;
    let height = (grid.total_height() + margin.vertical()).ceil().max(1.0) as u32;
    let mut fb = Framebuffer::new(width, height, options.background)?;

    let styles = StyleResolver::new(model);
    for cell in grid.cells() {
        let style = styles.effective(cell);
        let mut bounds = grid.cell_rect(cell);
        bounds.x += margin.left;
        bounds.y += margin.top;
        paint_cell(&mut fb, cell, bounds, &style, fonts);
    }

    log::debug!(
        "painted {} cells onto {width}x{height} canvas",
        grid.cells().len()
    );
    Ok(fb)
}

// -------------------------------------------------------------------
// Cell painting
// -------------------------------------------------------------------

fn paint_cell(
    fb: &mut Framebuffer,
    cell: &GridCell<'_>,
    bounds: Rect,
    style: &Style,
    fonts: &FontCache,
) {
    // 1. Background.
    if let Some(bg) = style.background {
        fb.fill_rect(bounds, bg);
    }

    // 2. Borders.
    paint_borders(fb, bounds, style);

    // 3. Text.
    if !cell.cell.text.is_empty() {
        paint_text(fb, &cell.cell.text, bounds, style, fonts);
    }
}

/// Draw each edge with a positive width as a filled strip inside
/// `bounds`.
fn paint_borders(fb: &mut Framebuffer, bounds: Rect, style: &Style) {
    let edges = style.border_edges();
    if edges.is_zero() {
        return;
    }
    let color = style.border_color.unwrap_or(Color::BLACK);

    if edges.top > 0.0 {
        fb.fill_rect(Rect::new(bounds.x, bounds.y, bounds.width, edges.top), color);
    }
    if edges.right > 0.0 {
        let x = bounds.right() - edges.right;
        fb.fill_rect(Rect::new(x, bounds.y, edges.right, bounds.height), color);
    }
    if edges.bottom > 0.0 {
        let y = bounds.bottom() - edges.bottom;
        fb.fill_rect(Rect::new(bounds.x, y, bounds.width, edges.bottom), color);
    }
    if edges.left > 0.0 {
        fb.fill_rect(Rect::new(bounds.x, bounds.y, edges.left, bounds.height), color);
    }
}

/// Wrap and draw `text` inside the padded cell box.
fn paint_text(fb: &mut Framebuffer, text: &str, bounds: Rect, style: &Style, fonts: &FontCache) {
    let inner = bounds.inset(&style.padding_or_zero());
    if inner.is_empty() {
        return;
    }

    let spec = style.font_spec();
    let font = fonts.get(&spec);
    let lines = wrap_text(text, inner.width, &spec, fonts);
    let line_height = font.line_height();
    let text_height = line_height * lines.len() as f32;

    let v_offset = match style.v_align.unwrap_or_default() {
        VAlign::Top => 0.0,
        VAlign::Middle => (inner.height - text_height) / 2.0,
        VAlign::Bottom => inner.height - text_height,
    };
    let color = style.text_color.unwrap_or(Color::BLACK);
    let h_align = style.h_align.unwrap_or_default();

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_width = font.measure_width(line);
        let x = match h_align {
            HAlign::Left => inner.x,
            HAlign::Center => inner.x + (inner.width - line_width) / 2.0,
            HAlign::Right => inner.right() - line_width,
        };
        let y = inner.y + v_offset + i as f32 * line_height;
        draw_line(fb, &font, line, x, y, color);
    }
}

/// Rasterize one line of text with its top-left corner at (`x`, `y`).
fn draw_line(fb: &mut Framebuffer, font: &Font, line: &str, x: f32, y: f32, color: Color) {
    let scale = font.scale();
    let baseline = y + font.baseline();

    for glyph in font.layout_glyphs(line) {
        let Some(path) = glyph.path else {
            continue;
        };
        // Outlines are y-up in design units.
        let transform = Transform::from_row(scale, 0.0, 0.0, -scale, x + glyph.x, baseline);
        fb.fill_path(&path, transform, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablegen_fonts::FontProvider;
    use tablegen_layout::{Cell, Row, Section, measure_table};
    use tablegen_types::Padding;

    fn builtin_fonts() -> FontCache {
        FontCache::new(FontProvider::new())
    }

    fn two_cell_model() -> TableModel {
        TableModel {
            body: Section::new(vec![Row::from_texts(["ab", "cd"])]),
            ..TableModel::default()
        }
    }

    #[test]
    fn empty_table_is_one_pixel() {
        let model = TableModel::default();
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let options = RenderOptions::default().with_background(Color::RED);
        let fb = paint_table(&model, &grid, &fonts, &options).unwrap();
        assert_eq!((fb.width(), fb.height()), (1, 1));
        assert_eq!(fb.pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn canvas_is_table_plus_margin() {
        let model = two_cell_model();
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let options = RenderOptions::default().with_margin(Padding::new(1.0, 2.0, 3.0, 4.0));
        let fb = paint_table(&model, &grid, &fonts, &options).unwrap();
        assert_eq!(fb.width(), (grid.total_width() + 6.0).ceil() as u32);
        assert_eq!(fb.height(), (grid.total_height() + 4.0).ceil() as u32);
        // Margin keeps the transparent canvas background.
        assert_eq!(fb.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn borders_and_background_are_painted() {
        let model = two_cell_model();
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let fb = paint_table(&model, &grid, &fonts, &RenderOptions::default()).unwrap();

        // Top-left pixel is on the 1px black border.
        assert_eq!(fb.pixel(0, 0), Some(Color::BLACK));
        // Inside the padding, away from text, is the white background.
        assert_eq!(fb.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn text_pixels_use_text_color() {
        let mut model = two_cell_model();
        model.style.text_color = Some(Color::BLUE);
        // Large enough that glyph strokes fully cover some pixels.
        model.style.font_size = Some(48.0);
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let fb = paint_table(&model, &grid, &fonts, &RenderOptions::default()).unwrap();

        let blue = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y).is_some_and(|p| p.b > 200 && p.r < 50))
            .count();
        assert!(blue > 0, "expected some text pixels");
    }

    #[test]
    fn no_borders_when_width_is_zero() {
        let mut model = two_cell_model();
        model.style.border_width = Some(0.0);
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let fb = paint_table(&model, &grid, &fonts, &RenderOptions::default()).unwrap();
        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn per_edge_border_overrides_uniform() {
        let mut model = two_cell_model();
        model.style.border_width = Some(0.0);
        model.style.border_left = Some(3.0);
        model.style.border_color = Some(Color::RED);
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        let fb = paint_table(&model, &grid, &fonts, &RenderOptions::default()).unwrap();
        assert_eq!(fb.pixel(2, 5), Some(Color::RED));
        assert_eq!(fb.pixel(3, 5), Some(Color::WHITE));
        assert_eq!(fb.pixel(5, 0), Some(Color::WHITE));
    }

    #[test]
    fn padding_larger_than_cell_skips_text() {
        let mut model = two_cell_model();
        model.style.padding = Some(Padding::uniform(0.0));
        model.columns = vec![
            tablegen_layout::ColumnSpec::Fixed(4.0),
            tablegen_layout::ColumnSpec::Fixed(4.0),
        ];
        let cell_style = Style {
            padding: Some(Padding::uniform(10.0)),
            ..Style::default()
        };
        model.body.rows[0].cells[0] = Cell::new("ab").with_style(cell_style);
        let fonts = builtin_fonts();
        let grid = measure_table(&model, &fonts);
        // Must not panic; the padded box is empty.
        assert!(paint_table(&model, &grid, &fonts, &RenderOptions::default()).is_ok());
    }
}
