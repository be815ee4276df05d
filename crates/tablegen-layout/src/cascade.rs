//! Effective style resolution for grid cells.
//!
//! The cascade is table -> section -> row -> cell. The first three
//! levels are shared by every cell in a row, so they are merged once
//! per row up front and only the cell level is merged on lookup.

use crate::grid::GridCell;
use crate::model::TableModel;
use crate::style::Style;

/// Precomputed per-row styles for one table.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    /// Table, section and row styles merged, indexed by global row.
    row_styles: Vec<Style>,
    /// Fallback for rows outside the table.
    table_style: Style,
}

impl StyleResolver {
    pub fn new(model: &TableModel) -> Self {
        let mut row_styles = Vec::with_capacity(model.row_count());
        for section in model.sections() {
            let section_style = model.style.merge(section.style.as_ref());
            for row in &section.rows {
                row_styles.push(section_style.merge(row.style.as_ref()));
            }
        }
        Self {
            row_styles,
            table_style: model.style.clone(),
        }
    }

    /// Table, section and row styles merged for global row `row`.
    pub fn row_style(&self, row: usize) -> &Style {
        self.row_styles.get(row).unwrap_or(&self.table_style)
    }

    /// Fully merged style for a placed cell.
    pub fn effective(&self, cell: &GridCell<'_>) -> Style {
        self.row_style(cell.row).merge(cell.cell.style.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::resolve_grid;
    use crate::model::{Cell, Row, Section};
    use tablegen_types::Color;

    #[test]
    fn cascade_through_all_levels() {
        let table_style = Style {
            background: Some(Color::WHITE),
            font_size: Some(12.0),
            ..Style::default()
        };
        let cell = Cell::new("x").with_style(Style {
            background: Some(Color::YELLOW),
            font_size: Some(14.0),
            ..Style::default()
        });
        let row = Row {
            cells: vec![cell],
            style: Some(Style {
                text_color: Some(Color::BLUE),
                ..Style::default()
            }),
        };
        let body = Section {
            rows: vec![row],
            style: Some(Style {
                background: Some(Color::LIGHT_GRAY),
                text_color: Some(Color::BLACK),
                ..Style::default()
            }),
        };
        let model = TableModel {
            body,
            style: table_style,
            ..TableModel::default()
        };

        let resolver = StyleResolver::new(&model);
        let grid = resolve_grid(model.rows(), 0);
        let eff = resolver.effective(&grid.cells[0]);
        assert_eq!(eff.background, Some(Color::YELLOW));
        assert_eq!(eff.text_color, Some(Color::BLUE));
        assert_eq!(eff.font_size, Some(14.0));
    }

    #[test]
    fn section_styles_apply_to_their_rows_only() {
        let bold_header = Style {
            font_style: Some(tablegen_types::FontStyle::Bold),
            ..Style::default()
        };
        let model = TableModel {
            header: Some(Section {
                rows: vec![Row::from_texts(["H"])],
                style: Some(bold_header),
            }),
            body: Section::new(vec![Row::from_texts(["B"])]),
            ..TableModel::default()
        };
        let resolver = StyleResolver::new(&model);
        assert_eq!(
            resolver.row_style(0).font_style,
            Some(tablegen_types::FontStyle::Bold)
        );
        assert_eq!(
            resolver.row_style(1).font_style,
            Some(tablegen_types::FontStyle::Regular)
        );
    }

    #[test]
    fn out_of_range_row_uses_table_style() {
        let model = TableModel::default();
        let resolver = StyleResolver::new(&model);
        assert_eq!(resolver.row_style(42), &Style::table_default());
    }
}
