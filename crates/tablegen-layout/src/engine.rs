//! Layout pass orchestration.

use crate::cascade::StyleResolver;
use crate::columns::{apply_max_width, measure_column_widths};
use crate::grid::resolve_grid;
use crate::measure::TextMeasurer;
use crate::measured::MeasuredGrid;
use crate::model::TableModel;
use crate::rows::measure_row_heights;

/// Lay out `model` and return its measured grid.
///
/// Always succeeds. A table with no rows, or only empty rows, yields
/// [`MeasuredGrid::empty`].
pub fn measure_table<'a>(model: &'a TableModel, measurer: &dyn TextMeasurer) -> MeasuredGrid<'a> {
    // Step 1: Resolve grid positions accounting for spans.
    let grid = resolve_grid(model.rows(), model.columns.len());
    if grid.cells.is_empty() {
        log::debug!("table has no cells, returning empty grid");
        return MeasuredGrid::empty();
    }

    let styles = StyleResolver::new(model);

    // Step 2: Natural column widths.
    let mut col_widths =
        measure_column_widths(&grid.cells, model, &styles, measurer, grid.col_count);

    // Step 3: Max-width constraint.
    if let Some(max_width) = model.max_width {
        apply_max_width(&mut col_widths, max_width, &model.columns);
    }

    // Step 4: Row heights at the final column widths.
    let row_heights =
        measure_row_heights(&grid.cells, &col_widths, &styles, measurer, grid.row_count);

    let measured = MeasuredGrid::new(col_widths, row_heights, grid.cells);
    log::debug!(
        "measured {}x{} table ({} cells): {:.1} x {:.1}",
        measured.row_count(),
        measured.column_count(),
        measured.cells().len(),
        measured.total_width(),
        measured.total_height(),
    );
    measured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ColumnSpec, Row, Section};
    use crate::test_utils::{FixedMeasurer, body_model, model_from_rows};

    #[test]
    fn two_by_three_auto_table() {
        let model = body_model(&[&["a", "bb", "ccc"], &["dddd", "e", "ff"]], 4.0);
        let grid = measure_table(&model, &FixedMeasurer);

        // Column maxima: 32, 16, 24 plus 8 padding each.
        assert_eq!(grid.column_widths(), [40.0, 24.0, 32.0]);
        assert_eq!(grid.total_width(), 96.0);
        // Every row is one 16px line plus 8 padding.
        assert_eq!(grid.row_heights(), [24.0, 24.0]);
        assert_eq!(grid.total_height(), 48.0);
        assert_eq!(grid.cells().len(), 6);
    }

    #[test]
    fn max_width_shrinks_auto_columns() {
        let mut model = body_model(&[&["a", "bb", "ccc"], &["dddd", "e", "ff"]], 4.0);
        model.max_width = Some(48.0);
        let grid = measure_table(&model, &FixedMeasurer);

        let widths = grid.column_widths();
        assert!(grid.total_width() <= 48.0 + 1e-3);
        // Proportional to 40 : 24 : 32.
        assert!((widths[0] / widths[1] - 40.0 / 24.0).abs() < 1e-4);
        assert!((widths[2] / widths[1] - 32.0 / 24.0).abs() < 1e-4);
    }

    #[test]
    fn max_width_spares_fixed_columns() {
        let mut model = body_model(&[&["a", "bbbbbbbbbb"]], 0.0);
        model.columns = vec![ColumnSpec::Fixed(30.0)];
        model.max_width = Some(70.0);
        let grid = measure_table(&model, &FixedMeasurer);
        assert_eq!(grid.column_widths()[0], 30.0);
        assert!((grid.column_widths()[1] - 40.0).abs() < 1e-4);
        // "bbbbbbbbbb" (80px) now wraps by character into two lines.
        assert_eq!(grid.row_heights(), [32.0]);
    }

    #[test]
    fn empty_table() {
        let model = TableModel::default();
        let grid = measure_table(&model, &FixedMeasurer);
        assert!(grid.is_empty());
        assert_eq!(grid.total_width(), 0.0);
    }

    #[test]
    fn rows_without_cells_are_empty() {
        let model = TableModel {
            body: Section::new(vec![Row::default(), Row::default()]),
            columns: vec![ColumnSpec::Fixed(50.0)],
            ..TableModel::default()
        };
        assert!(measure_table(&model, &FixedMeasurer).is_empty());
    }

    #[test]
    fn header_and_footer_rows_are_laid_out() {
        let model = TableModel {
            header: Some(Section::new(vec![Row::from_texts(["Name", "Qty"])])),
            body: Section::new(vec![Row::from_texts(["apple", "3"])]),
            footer: Some(Section::new(vec![Row::from_texts(["total", "3"])])),
            ..TableModel::default()
        };
        let grid = measure_table(&model, &FixedMeasurer);
        assert_eq!(grid.row_count(), 3);
        // "apple"/"total" = 40 + 16 default padding.
        assert_eq!(grid.column_widths()[0], 56.0);
        assert_eq!(grid.row_y(2), 64.0);
    }

    #[test]
    fn spans_place_cells_and_size_rows() {
        let model = model_from_rows(
            vec![
                vec![Cell::new("A").with_spans(1, 2), Cell::new("B")],
                vec![Cell::new("C")],
            ],
            0.0,
        );
        let grid = measure_table(&model, &FixedMeasurer);
        let c = grid.cells()[2];
        assert_eq!((c.row, c.col), (1, 1));
        assert_eq!(grid.span_height(0, 2), 32.0);
        let rect = grid.cell_rect(&grid.cells()[0]);
        assert_eq!(rect.height, 32.0);
        assert_eq!(rect.width, 8.0);
    }
}
