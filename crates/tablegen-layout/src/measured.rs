//! The output of a layout pass.

use tablegen_types::Rect;

use crate::grid::GridCell;

/// Column widths, row heights and placed cells for one table.
///
/// Offsets are prefix sums, computed once at construction.
#[derive(Debug, Clone, Default)]
pub struct MeasuredGrid<'a> {
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    cells: Vec<GridCell<'a>>,
    col_offsets: Vec<f32>,
    row_offsets: Vec<f32>,
}

impl<'a> MeasuredGrid<'a> {
    pub fn new(column_widths: Vec<f32>, row_heights: Vec<f32>, cells: Vec<GridCell<'a>>) -> Self {
        let col_offsets = prefix_sums(&column_widths);
        let row_offsets = prefix_sums(&row_heights);
        Self {
            column_widths,
            row_heights,
            cells,
            col_offsets,
            row_offsets,
        }
    }

    /// The canonical empty grid: no columns, no rows, no cells.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }

    pub fn cells(&self) -> &[GridCell<'a>] {
        &self.cells
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    pub fn total_width(&self) -> f32 {
        self.col_offsets.last().copied().unwrap_or(0.0)
    }

    pub fn total_height(&self) -> f32 {
        self.row_offsets.last().copied().unwrap_or(0.0)
    }

    /// Left edge of column `col`. Indices past the end give the total
    /// width.
    pub fn column_x(&self, col: usize) -> f32 {
        offset_at(&self.col_offsets, col)
    }

    /// Top edge of row `row`. Indices past the end give the total
    /// height.
    pub fn row_y(&self, row: usize) -> f32 {
        offset_at(&self.row_offsets, row)
    }

    /// Width of `count` columns starting at `start`, clamped to the grid.
    pub fn span_width(&self, start: usize, count: usize) -> f32 {
        self.column_x(start.saturating_add(count)) - self.column_x(start)
    }

    /// Height of `count` rows starting at `start`, clamped to the grid.
    pub fn span_height(&self, start: usize, count: usize) -> f32 {
        self.row_y(start.saturating_add(count)) - self.row_y(start)
    }

    /// Border box of a placed cell, relative to the table origin.
    pub fn cell_rect(&self, cell: &GridCell<'_>) -> Rect {
        Rect::new(
            self.column_x(cell.col),
            self.row_y(cell.row),
            self.span_width(cell.col, cell.col_span),
            self.span_height(cell.row, cell.row_span),
        )
    }
}

/// `[0, a, a+b, ...]`, one longer than the input.
fn prefix_sums(values: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(values.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for v in values {
        acc += v;
        out.push(acc);
    }
    out
}

fn offset_at(offsets: &[f32], idx: usize) -> f32 {
    offsets
        .get(idx)
        .or_else(|| offsets.last())
        .copied()
        .unwrap_or(0.0)
}
