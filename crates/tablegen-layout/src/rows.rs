//! Row height solving.
//!
//! Heights come from wrapped text at the final column widths. Single
//! row cells set each row's height directly; row-spanning cells then
//! top up their rows evenly if the rows they cover are too short.

use crate::cascade::StyleResolver;
use crate::grid::GridCell;
use crate::measure::TextMeasurer;
use crate::text::wrapped_height;

/// Height of each row given the final column widths.
pub fn measure_row_heights(
    cells: &[GridCell<'_>],
    col_widths: &[f32],
    styles: &StyleResolver,
    measurer: &dyn TextMeasurer,
    row_count: usize,
) -> Vec<f32> {
    let mut heights = vec![0.0_f32; row_count];

    // Pass 1: single-row cells.
    for gc in cells.iter().filter(|gc| gc.row_span == 1) {
        let required = cell_height(gc, col_widths, styles, measurer);
        if let Some(h) = heights.get_mut(gc.row) {
            *h = h.max(required);
        }
    }

    // Pass 2: row-spanning cells distribute any deficit evenly.
    for gc in cells.iter().filter(|gc| gc.row_span > 1) {
        let end = (gc.row + gc.row_span).min(row_count);
        if gc.row >= end {
            continue;
        }
        let required = cell_height(gc, col_widths, styles, measurer);
        let current: f32 = heights[gc.row..end].iter().sum();
        if required > current {
            let per_row = (required - current) / (end - gc.row) as f32;
            for h in &mut heights[gc.row..end] {
                *h += per_row;
            }
        }
    }

    heights
}

/// Wrapped text height at the cell's spanned width, plus vertical
/// padding; zero for empty text.
fn cell_height(
    gc: &GridCell<'_>,
    col_widths: &[f32],
    styles: &StyleResolver,
    measurer: &dyn TextMeasurer,
) -> f32 {
    if gc.cell.text.is_empty() {
        return 0.0;
    }
    let style = styles.effective(gc);
    let padding = style.padding_or_zero();
    let span_width: f32 = col_widths.iter().skip(gc.col).take(gc.col_span).sum();
    let available = span_width - padding.horizontal();
    let text_height = wrapped_height(&gc.cell.text, available, &style.font_spec(), measurer);
    text_height + padding.vertical()
}
