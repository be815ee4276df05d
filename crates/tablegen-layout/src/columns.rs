//! Column width solving.
//!
//! Fixed columns take their declared width. Auto columns take the
//! widest single-line text of any single-column cell in them, plus
//! horizontal padding. Cells spanning several columns do not
//! contribute. An optional maximum width then shrinks Auto columns
//! proportionally.

use crate::cascade::StyleResolver;
use crate::grid::GridCell;
use crate::measure::TextMeasurer;
use crate::model::{ColumnSpec, TableModel};

/// Natural width of each column before any max-width constraint.
pub fn measure_column_widths(
    cells: &[GridCell<'_>],
    model: &TableModel,
    styles: &StyleResolver,
    measurer: &dyn TextMeasurer,
    col_count: usize,
) -> Vec<f32> {
    let mut widths: Vec<f32> = (0..col_count)
        .map(|c| match model.column_spec(c) {
            ColumnSpec::Fixed(w) => w,
            ColumnSpec::Auto => 0.0,
        })
        .collect();

    for gc in cells.iter().filter(|gc| gc.col_span == 1) {
        if model.column_spec(gc.col).is_fixed() {
            continue;
        }
        let content = cell_content_width(gc, styles, measurer);
        log::trace!("cell ({}, {}) content width {content}", gc.row, gc.col);
        widths[gc.col] = widths[gc.col].max(content);
    }

    widths
}

/// Unwrapped text width plus left/right padding; zero for empty text.
fn cell_content_width(
    gc: &GridCell<'_>,
    styles: &StyleResolver,
    measurer: &dyn TextMeasurer,
) -> f32 {
    if gc.cell.text.is_empty() {
        return 0.0;
    }
    let style = styles.effective(gc);
    let text_width = measurer.measure_width(&gc.cell.text, &style.font_spec());
    text_width + style.padding_or_zero().horizontal()
}

/// Shrink Auto columns so the total fits `max_width`.
///
/// Does nothing when the total already fits. Otherwise each Auto
/// column gets `width / auto_total * (max_width - fixed_total)`. When
/// there is no Auto width to scale or the Fixed columns alone reach
/// the limit, the widths are left as they are and the table
/// overflows.
pub fn apply_max_width(widths: &mut [f32], max_width: f32, columns: &[ColumnSpec]) {
    let total: f32 = widths.iter().sum();
    if total <= max_width {
        return;
    }

    let is_fixed = |i: usize| columns.get(i).is_some_and(ColumnSpec::is_fixed);

    let fixed_total: f32 = (0..widths.len()).filter(|&i| is_fixed(i)).map(|i| widths[i]).sum();
    let auto_total: f32 = (0..widths.len()).filter(|&i| !is_fixed(i)).map(|i| widths[i]).sum();
    let remaining = max_width - fixed_total;

    if auto_total <= 0.0 || remaining <= 0.0 {
        log::warn!(
            "cannot fit table into max width {max_width}: fixed columns use {fixed_total}, \
             auto columns use {auto_total}"
        );
        return;
    }

    for (i, w) in widths.iter_mut().enumerate() {
        if !is_fixed(i) {
            *w = *w / auto_total * remaining;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::resolve_grid;
    use crate::model::Cell;
    use crate::style::Style;
    use crate::test_utils::{FixedMeasurer, body_model, model_from_rows};

    fn natural_widths(model: &TableModel) -> Vec<f32> {
        let grid = resolve_grid(model.rows(), model.columns.len());
        let styles = StyleResolver::new(model);
        measure_column_widths(&grid.cells, model, &styles, &FixedMeasurer, grid.col_count)
    }

    #[test]
    fn auto_width_is_widest_text_plus_padding() {
        let model = body_model(&[&["a", "bbb"], &["cccc", "d"]], 5.0);
        // col 0: "cccc" = 32 + 10; col 1: "bbb" = 24 + 10.
        assert_eq!(natural_widths(&model), [42.0, 34.0]);
    }

    #[test]
    fn fixed_column_ignores_content() {
        let mut model = body_model(&[&["a very long text", "b"]], 0.0);
        model.columns = vec![ColumnSpec::Fixed(20.0)];
        assert_eq!(natural_widths(&model), [20.0, 8.0]);
    }

    #[test]
    fn spanning_cell_does_not_widen_columns() {
        let model = model_from_rows(
            vec![
                vec![Cell::new("a very wide spanning cell").with_spans(2, 1)],
                vec![Cell::new("a"), Cell::new("b")],
            ],
            0.0,
        );
        assert_eq!(natural_widths(&model), [8.0, 8.0]);
    }

    #[test]
    fn empty_text_contributes_zero() {
        let model = body_model(&[&["", ""]], 8.0);
        assert_eq!(natural_widths(&model), [0.0, 0.0]);
    }

    #[test]
    fn cell_font_size_affects_width() {
        let big = Style {
            font_size: Some(24.0),
            ..Style::default()
        };
        let model = model_from_rows(vec![vec![Cell::new("ab").with_style(big)]], 0.0);
        // 24 / 1.5 = 16px per char.
        assert_eq!(natural_widths(&model), [32.0]);
    }

    #[test]
    fn declared_columns_beyond_content_are_zero_or_fixed() {
        let mut model = body_model(&[&["a"]], 0.0);
        model.columns = vec![ColumnSpec::Auto, ColumnSpec::Auto, ColumnSpec::Fixed(15.0)];
        assert_eq!(natural_widths(&model), [8.0, 0.0, 15.0]);
    }

    // -- max width ----------------------------------------------------

    #[test]
    fn shrink_is_proportional_and_spares_fixed() {
        let mut widths = vec![100.0, 50.0, 300.0];
        let cols = [ColumnSpec::Fixed(100.0), ColumnSpec::Auto];
        apply_max_width(&mut widths, 250.0, &cols);
        // remaining 150 split 50:300 across the auto columns.
        assert_eq!(widths[0], 100.0);
        assert!((widths[1] - 150.0 * 50.0 / 350.0).abs() < 1e-4);
        assert!((widths[2] - 150.0 * 300.0 / 350.0).abs() < 1e-4);
        assert!((widths.iter().sum::<f32>() - 250.0).abs() < 1e-3);
    }

    #[test]
    fn no_shrink_when_it_fits() {
        let mut widths = vec![10.0, 20.0];
        apply_max_width(&mut widths, 30.0, &[]);
        assert_eq!(widths, [10.0, 20.0]);
    }

    #[test]
    fn fixed_columns_over_limit_leave_widths_alone() {
        let mut widths = vec![200.0, 40.0];
        let cols = [ColumnSpec::Fixed(200.0)];
        apply_max_width(&mut widths, 150.0, &cols);
        assert_eq!(widths, [200.0, 40.0]);
    }

    #[test]
    fn all_fixed_leaves_widths_alone() {
        let mut widths = vec![80.0, 80.0];
        let cols = [ColumnSpec::Fixed(80.0), ColumnSpec::Fixed(80.0)];
        apply_max_width(&mut widths, 100.0, &cols);
        assert_eq!(widths, [80.0, 80.0]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shrunk_auto_widths_fit(
                widths in proptest::collection::vec(1.0f32..200.0, 1..8),
                fixed_mask in proptest::collection::vec(any::<bool>(), 8),
                ratio in 0.1f32..0.99,
            ) {
                let cols: Vec<ColumnSpec> = widths
                    .iter()
                    .zip(&fixed_mask)
                    .map(|(&w, &f)| if f { ColumnSpec::Fixed(w) } else { ColumnSpec::Auto })
                    .collect();
                let total: f32 = widths.iter().sum();
                let max = total * ratio;
                let mut shrunk = widths.clone();
                apply_max_width(&mut shrunk, max, &cols);

                let fixed_total: f32 = widths.iter().zip(&cols)
                    .filter(|(_, c)| c.is_fixed()).map(|(w, _)| w).sum();
                for (i, c) in cols.iter().enumerate() {
                    if c.is_fixed() {
                        prop_assert_eq!(shrunk[i], widths[i]);
                    }
                }
                if fixed_total < max && fixed_total < total {
                    let auto_sum: f32 = shrunk.iter().zip(&cols)
                        .filter(|(_, c)| !c.is_fixed()).map(|(w, _)| w).sum();
                    prop_assert!(auto_sum <= (max - fixed_total) * 1.001 + 1e-3);
                }
            }
        }
    }
}
