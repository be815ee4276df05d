//! Fluent construction of a single [`Cell`].

use tablegen_layout::{Cell, HAlign, Style, VAlign};
use tablegen_types::{FontStyle, TableError};

use super::keep_first;
use super::style::{StyleBuilder, configure_style};

#[derive(Debug)]
pub struct CellBuilder {
    cell: Cell,
    error: Option<TableError>,
}

impl CellBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            cell: Cell::new(text),
            error: None,
        }
    }

    /// Columns spanned. Zero is rejected when the table is built.
    pub fn col_span(&mut self, span: usize) -> &mut Self {
        if span == 0 {
            keep_first(
                &mut self.error,
                Some(TableError::InvalidSpan {
                    axis: "column",
                    value: span,
                }),
            );
        } else {
            self.cell.col_span = span;
        }
        self
    }

    /// Rows spanned. Zero is rejected when the table is built.
    pub fn row_span(&mut self, span: usize) -> &mut Self {
        if span == 0 {
            keep_first(
                &mut self.error,
                Some(TableError::InvalidSpan {
                    axis: "row",
                    value: span,
                }),
            );
        } else {
            self.cell.row_span = span;
        }
        self
    }

    pub fn width(&mut self, width: f32) -> &mut Self {
        self.cell.width = Some(width);
        self
    }

    pub fn align(&mut self, h: HAlign, v: VAlign) -> &mut Self {
        self.h_align(h).v_align(v)
    }

    pub fn h_align(&mut self, align: HAlign) -> &mut Self {
        self.style_mut().h_align = Some(align);
        self
    }

    pub fn v_align(&mut self, align: VAlign) -> &mut Self {
        self.style_mut().v_align = Some(align);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        let style = self.style_mut();
        let italic = style.font_style.is_some_and(FontStyle::is_italic);
        style.font_style = Some(FontStyle::from_flags(true, italic));
        self
    }

    pub fn italic(&mut self) -> &mut Self {
        let style = self.style_mut();
        let bold = style.font_style.is_some_and(FontStyle::is_bold);
        style.font_style = Some(FontStyle::from_flags(bold, true));
        self
    }

    /// Merge the configured fields over the cell's current style.
    pub fn style(&mut self, configure: impl FnOnce(&mut StyleBuilder)) -> &mut Self {
        let (style, err) = configure_style(configure);
        keep_first(&mut self.error, err);
        self.cell.style = Some(match &self.cell.style {
            Some(existing) => existing.merge(Some(&style)),
            None => style,
        });
        self
    }

    /// Merge a prebuilt style over the cell's current style.
    pub fn with_style(&mut self, style: &Style) -> &mut Self {
        self.cell.style = Some(match &self.cell.style {
            Some(existing) => existing.merge(Some(style)),
            None => style.clone(),
        });
        self
    }

    pub(crate) fn finish(self) -> (Cell, Option<TableError>) {
        (self.cell, self.error)
    }

    fn style_mut(&mut self) -> &mut Style {
        self.cell.style.get_or_insert_with(Style::default)
    }
}
