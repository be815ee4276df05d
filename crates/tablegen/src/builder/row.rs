use tablegen_layout::{Cell, Row, Style};
use tablegen_types::TableError;

use super::cell::CellBuilder;
use super::keep_first;
use super::style::{StyleBuilder, configure_style};

/// Builds one [`Row`] cell by cell.
#[derive(Debug, Default)]
pub struct RowBuilder {
    row: Row,
    error: Option<TableError>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the configured fields over the row's current style.
    pub fn style(&mut self, configure: impl FnOnce(&mut StyleBuilder)) -> &mut Self {
        let (style, err) = configure_style(configure);
        keep_first(&mut self.error, err);
        self.row.style = Some(match &self.row.style {
            Some(existing) => existing.merge(Some(&style)),
            None => style,
        });
        self
    }

    /// Merge a prebuilt style over the row's current style.
    pub fn with_style(&mut self, style: &Style) -> &mut Self {
        self.row.style = Some(match &self.row.style {
            Some(existing) => existing.merge(Some(style)),
            None => style.clone(),
        });
        self
    }

    /// Append a plain cell.
    pub fn cell(&mut self, text: impl Into<String>) -> &mut Self {
        self.row.cells.push(Cell::new(text));
        self
    }

    /// Append a cell configured through a [`CellBuilder`].
    pub fn cell_with(
        &mut self,
        text: impl Into<String>,
        configure: impl FnOnce(&mut CellBuilder),
    ) -> &mut Self {
        let mut builder = CellBuilder::new(text);
        configure(&mut builder);
        let (cell, err) = builder.finish();
        keep_first(&mut self.error, err);
        self.row.cells.push(cell);
        self
    }

    /// Append an already built cell.
    pub fn push_cell(&mut self, cell: Cell) -> &mut Self {
        self.row.cells.push(cell);
        self
    }

    /// Append one plain cell per text.
    pub fn cells<I, S>(&mut self, texts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row.cells.extend(texts.into_iter().map(Cell::new));
        self
    }

    pub(crate) fn finish(self) -> (Row, Option<TableError>) {
        (self.row, self.error)
    }
}
