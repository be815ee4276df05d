//! Span resolution: assigns every cell a grid position.
//!
//! Cells are placed left to right at the first column where their whole
//! column span is free, skipping slots already claimed by row-spanning
//! cells from earlier rows.

use crate::model::{Cell, Row};

/// A cell placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
    /// Row index (zero-based, across all sections).
    pub row: usize,
    /// Column index (zero-based).
    pub col: usize,
    /// Number of rows spanned (>= 1).
    pub row_span: usize,
    /// Number of columns spanned (>= 1).
    pub col_span: usize,
    /// The source cell.
    pub cell: &'a Cell,
}

impl GridCell<'_> {
    /// Index of the last row this cell covers.
    pub fn last_row(&self) -> usize {
        self.row + self.row_span - 1
    }

    /// Index of the last column this cell covers.
    pub fn last_col(&self) -> usize {
        self.col + self.col_span - 1
    }

    /// Whether (`row`, `col`) lies inside this cell's rectangle.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..=self.last_row()).contains(&row) && (self.col..=self.last_col()).contains(&col)
    }
}

/// Result of span resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGrid<'a> {
    pub cells: Vec<GridCell<'a>>,
    pub col_count: usize,
    pub row_count: usize,
}

/// Place every cell of `rows` on the grid.
///
/// `declared_cols` is the length of the table's column-spec list; the
/// column count is the larger of it and the furthest column reached.
/// The row count is always the number of source rows: row spans never
/// add rows.
pub fn resolve_grid<'a, I>(rows: I, declared_cols: usize) -> ResolvedGrid<'a>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let mut cells = Vec::new();
    let mut col_count = declared_cols;
    let mut row_count = 0;

    for (row_idx, row) in rows.into_iter().enumerate() {
        row_count = row_idx + 1;
        let mut col_idx = 0;

        for cell in &row.cells {
            let row_span = cell.row_span.max(1);
            let col_span = cell.col_span.max(1);
            // Skip slots claimed by earlier row spans.
            col_idx = next_free_col(&occupied, row_idx, col_idx, col_span);

            mark_occupied(&mut occupied, row_idx, col_idx, row_span, col_span);

            cells.push(GridCell {
                row: row_idx,
                col: col_idx,
                row_span,
                col_span,
                cell,
            });

            col_idx += col_span;
            col_count = col_count.max(col_idx);
        }
    }

    if cells.is_empty() {
        col_count = 0;
    }

    log::trace!(
        "resolved {} cells into {row_count}x{col_count} grid",
        cells.len()
    );

    ResolvedGrid {
        cells,
        col_count,
        row_count,
    }
}

/// Find the first column at or after `start` where `[col, col + width)`
/// is free at `row_idx`.
fn next_free_col(occupied: &[Vec<bool>], row_idx: usize, start: usize, width: usize) -> usize {
    let Some(row) = occupied.get(row_idx) else {
        return start;
    };
    let taken = |c: usize| row.get(c).copied().unwrap_or(false);
    let mut col = start;
    while let Some(blocked) = (col..col + width).rev().find(|&c| taken(c)) {
        col = blocked + 1;
    }
    col
}

/// Mark grid slots as occupied for a cell spanning multiple rows and
/// columns.
fn mark_occupied(
    occupied: &mut Vec<Vec<bool>>,
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
) {
    if occupied.len() < row + row_span {
        occupied.resize_with(row + row_span, Vec::new);
    }
    for row_occ in &mut occupied[row..row + row_span] {
        if row_occ.len() < col + col_span {
            row_occ.resize(col + col_span, false);
        }
        for slot in row_occ.iter_mut().skip(col).take(col_span) {
            *slot = true;
        }
    }
}
