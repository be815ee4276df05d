use tablegen_layout::{Row, Section, Style};
use tablegen_types::TableError;

use super::keep_first;
use super::row::RowBuilder;
use super::style::{StyleBuilder, configure_style};

/// Builds a header, body or footer [`Section`].
#[derive(Debug, Default)]
pub struct SectionBuilder {
    section: Section,
    error: Option<TableError>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&mut self, configure: impl FnOnce(&mut StyleBuilder)) -> &mut Self {
        let (style, err) = configure_style(configure);
        keep_first(&mut self.error, err);
        self.section.style = Some(match &self.section.style {
            Some(existing) => existing.merge(Some(&style)),
            None => style,
        });
        self
    }

    /// Merge a prebuilt style over the section's current style.
    pub fn with_style(&mut self, style: &Style) -> &mut Self {
        self.section.style = Some(match &self.section.style {
            Some(existing) => existing.merge(Some(style)),
            None => style.clone(),
        });
        self
    }

    /// Append a row configured through a [`RowBuilder`].
    pub fn row(&mut self, configure: impl FnOnce(&mut RowBuilder)) -> &mut Self {
        let mut builder = RowBuilder::new();
        configure(&mut builder);
        let (row, err) = builder.finish();
        keep_first(&mut self.error, err);
        self.section.rows.push(row);
        self
    }

    /// Append a row of plain cells.
    pub fn row_texts<I, S>(&mut self, texts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section.rows.push(Row::from_texts(texts));
        self
    }

    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.section.rows.push(row);
        self
    }

    pub fn rows(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        self.section.rows.extend(rows);
        self
    }

    pub(crate) fn finish(self) -> (Section, Option<TableError>) {
        (self.section, self.error)
    }
}

/// Run `configure` against a fresh section builder.
pub(crate) fn configure_section(
    configure: impl FnOnce(&mut SectionBuilder),
) -> (Section, Option<TableError>) {
    let mut builder = SectionBuilder::new();
    configure(&mut builder);
    builder.finish()
}
