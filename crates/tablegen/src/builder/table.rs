use tablegen_layout::{Style, TableModel};
use tablegen_types::{Padding, Result, TableError};

use super::columns::ColumnsBuilder;
use super::keep_first;
use super::section::{SectionBuilder, configure_section};
use super::style::{StyleBuilder, configure_style};
use crate::Table;

/// Entry point for building a [`Table`].
///
/// Starts from [`Style::table_default`]. Nested builders are configured
/// through closures; any invalid input (a zero span, a malformed hex
/// color) is remembered and the first one is returned by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct TableBuilder {
    model: TableModel,
    error: Option<TableError>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            model: TableModel::default(),
            error: None,
        }
    }

    pub fn default_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.model.style.font_family = Some(family.into());
        self.model.style.font_size = Some(size);
        self
    }

    /// Table-wide cell padding: `horizontal` left/right, `vertical`
    /// top/bottom.
    pub fn cell_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.model.style.padding = Some(Padding::symmetric(horizontal, vertical));
        self
    }

    pub fn cell_padding_all(mut self, padding: f32) -> Self {
        self.model.style.padding = Some(Padding::uniform(padding));
        self
    }

    pub fn border(mut self, width: f32) -> Self {
        self.model.style.border_width = Some(width);
        self
    }

    /// Upper bound on the total column width.
    pub fn width(mut self, max_width: f32) -> Self {
        self.model.max_width = Some(max_width);
        self
    }

    pub fn columns(mut self, configure: impl FnOnce(&mut ColumnsBuilder)) -> Self {
        let mut builder = ColumnsBuilder::new();
        configure(&mut builder);
        self.model.columns = builder.finish();
        self
    }

    /// Replace the header section.
    pub fn header(mut self, configure: impl FnOnce(&mut SectionBuilder)) -> Self {
        let (section, err) = configure_section(configure);
        keep_first(&mut self.error, err);
        self.model.header = Some(section);
        self
    }

    /// Replace the body section.
    pub fn body(mut self, configure: impl FnOnce(&mut SectionBuilder)) -> Self {
        let (section, err) = configure_section(configure);
        keep_first(&mut self.error, err);
        self.model.body = section;
        self
    }

    /// Replace the footer section.
    pub fn footer(mut self, configure: impl FnOnce(&mut SectionBuilder)) -> Self {
        let (section, err) = configure_section(configure);
        keep_first(&mut self.error, err);
        self.model.footer = Some(section);
        self
    }

    /// Merge `even` into body rows 0, 2, 4... and `odd` into rows 1, 3,
    /// 5... over each row's own style.
    ///
    /// Only rows already in the body are affected, so call this after
    /// [`body`](Self::body).
    pub fn alternate_rows(mut self, even: &Style, odd: &Style) -> Self {
        for (index, row) in self.model.body.rows.iter_mut().enumerate() {
            let stripe = if index % 2 == 0 { even } else { odd };
            let base = row.style.take().unwrap_or_default();
            row.style = Some(base.merge(Some(stripe)));
        }
        self
    }

    /// [`alternate_rows`](Self::alternate_rows) with both styles built
    /// through closures.
    pub fn alternate_rows_with(
        mut self,
        even: impl FnOnce(&mut StyleBuilder),
        odd: impl FnOnce(&mut StyleBuilder),
    ) -> Self {
        let (even, even_err) = configure_style(even);
        let (odd, odd_err) = configure_style(odd);
        keep_first(&mut self.error, even_err);
        keep_first(&mut self.error, odd_err);
        self.alternate_rows(&even, &odd)
    }

    /// Merge the configured fields over the table style.
    pub fn style(mut self, configure: impl FnOnce(&mut StyleBuilder)) -> Self {
        let (style, err) = configure_style(configure);
        keep_first(&mut self.error, err);
        self.model.style = self.model.style.merge(Some(&style));
        self
    }

    /// Merge a prebuilt style over the table style.
    pub fn with_style(mut self, style: &Style) -> Self {
        self.model.style = self.model.style.merge(Some(style));
        self
    }

    pub fn build(self) -> Result<Table> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Table::new(self.model)),
        }
    }
}
