//! Immutable table data model.

use crate::style::Style;

/// A single cell: text plus span and style information.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    /// Number of columns spanned (>= 1).
    pub col_span: usize,
    /// Number of rows spanned (>= 1).
    pub row_span: usize,
    /// Explicit width hint carried for consumers; the column solver
    /// sizes columns from content and column specs only.
    pub width: Option<f32>,
    pub style: Option<Style>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            col_span: 1,
            row_span: 1,
            width: None,
            style: None,
        }
    }

    /// Set both spans, clamping each to at least 1.
    pub fn with_spans(mut self, col_span: usize, row_span: usize) -> Self {
        self.col_span = col_span.max(1);
        self.row_span = row_span.max(1);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new("")
    }
}

/// An ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub style: Option<Style>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, style: None }
    }

    /// Row of unstyled single-span cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Cell::new).collect())
    }
}

/// Header, body or footer: an ordered sequence of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub rows: Vec<Row>,
    pub style: Option<Style>,
}

impl Section {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, style: None }
    }
}

/// Column sizing rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnSpec {
    /// Fit to the widest single-column cell.
    #[default]
    Auto,
    /// Exactly this many pixels.
    Fixed(f32),
}

impl ColumnSpec {
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// A complete table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub header: Option<Section>,
    pub body: Section,
    pub footer: Option<Section>,
    /// Table-level style, the root of the cascade.
    pub style: Style,
    /// Upper bound on the sum of column widths.
    pub max_width: Option<f32>,
    /// Index-aligned with grid columns; missing entries are `Auto`.
    pub columns: Vec<ColumnSpec>,
}

impl Default for TableModel {
    fn default() -> Self {
        Self {
            header: None,
            body: Section::default(),
            footer: None,
            style: Style::table_default(),
            max_width: None,
            columns: Vec::new(),
        }
    }
}

impl TableModel {
    /// Sections in paint order: header, body, footer.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.header
            .iter()
            .chain(std::iter::once(&self.body))
            .chain(self.footer.iter())
    }

    /// All rows across sections, in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections().flat_map(|s| s.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.sections().map(|s| s.rows.len()).sum()
    }

    /// Spec for `col`, `Auto` beyond the declared list.
    pub fn column_spec(&self, col: usize) -> ColumnSpec {
        self.columns.get(col).copied().unwrap_or_default()
    }
}
