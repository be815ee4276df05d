//! TOML table documents.
//!
//! A document describes a whole table declaratively:
//!
//! ```toml
//! theme = "light"
//! max_width = 480
//! columns = ["auto", 120]
//!
//! [style]
//! font_size = 14
//!
//! [header]
//! rows = [["Item", "Notes"]]
//!
//! [body]
//! rows = [
//!     ["apple", "crisp"],
//!     { style = { background = "#FFF3C4" }, cells = ["pear", { text = "soft", col_span = 1 }] },
//! ]
//!
//! [render]
//! background = "#FFFFFF"
//! margin = { top = 8, right = 8, bottom = 8, left = 8 }
//! ```
//!
//! Colors go through the hex parser while deserializing, so a bad
//! color fails [`TableDocument::from_toml`]. Spans are checked by the
//! builders when the document is turned into a [`Table`].

use std::path::Path;

use serde::Deserialize;
use tablegen_layout::{ColumnSpec, Style};
use tablegen_render::RenderOptions;
use tablegen_types::{Result, TableError};

use crate::Table;
use crate::builder::{RowBuilder, SectionBuilder, TableBuilder};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableDocument {
    /// Theme applied beneath `style` and the section styles.
    pub theme: Option<ThemeMode>,
    /// Table-level style overrides.
    pub style: Style,
    pub max_width: Option<f32>,
    pub columns: Vec<ColumnDoc>,
    pub header: Option<SectionDoc>,
    pub body: SectionDoc,
    pub footer: Option<SectionDoc>,
    pub render: RenderOptions,
}

/// `"auto"` or a fixed pixel width.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColumnDoc {
    Fixed(f32),
    Keyword(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionDoc {
    pub style: Option<Style>,
    pub rows: Vec<RowDoc>,
}

/// A bare list of cells, or a table with a style and cells.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowDoc {
    Cells(Vec<CellDoc>),
    Styled(StyledRow),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyledRow {
    #[serde(default)]
    pub style: Option<Style>,
    pub cells: Vec<CellDoc>,
}

/// Plain text, or a table with spans, width and style.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellDoc {
    Text(String),
    Full(CellSpec),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSpec {
    pub text: String,
    #[serde(default = "one")]
    pub col_span: usize,
    #[serde(default = "one")]
    pub row_span: usize,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub style: Option<Style>,
}

fn one() -> usize {
    1
}

impl ColumnDoc {
    fn to_spec(&self) -> Result<ColumnSpec> {
        match self {
            Self::Fixed(width) if *width >= 0.0 => Ok(ColumnSpec::Fixed(*width)),
            Self::Fixed(width) => Err(TableError::Document(format!(
                "column width must not be negative, got {width}"
            ))),
            Self::Keyword(k) if k.eq_ignore_ascii_case("auto") => Ok(ColumnSpec::Auto),
            Self::Keyword(k) => Err(TableError::Document(format!(
                "unknown column kind {k:?}, expected \"auto\" or a width"
            ))),
        }
    }
}

impl TableDocument {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded table document {}", path.as_ref().display());
        Self::from_toml(&text)
    }

    /// Build the table this document describes.
    ///
    /// Style precedence, lowest first: builder defaults, theme, the
    /// document's `style`. Sections and rows layer the same way.
    pub fn into_table(self) -> Result<Table> {
        let columns = self
            .columns
            .iter()
            .map(ColumnDoc::to_spec)
            .collect::<Result<Vec<_>>>()?;
        let theme = self.theme.map(ThemeMode::theme);

        let mut builder = TableBuilder::new();
        if let Some(theme) = &theme {
            builder = builder.with_style(&theme.table);
        }
        builder = builder.with_style(&self.style);
        if let Some(max_width) = self.max_width {
            builder = builder.width(max_width);
        }
        if !columns.is_empty() {
            builder = builder.columns(|c| {
                for spec in &columns {
                    match spec {
                        ColumnSpec::Auto => c.auto(),
                        ColumnSpec::Fixed(width) => c.fixed(*width),
                    };
                }
            });
        }

        if let Some(header) = self.header {
            let themed = theme.as_ref().map(|t| &t.header);
            builder = builder.header(|h| header.fill(h, themed, None));
        }
        let stripes = theme.as_ref().map(|t| (&t.row, &t.alternating_row));
        let body = self.body;
        builder = builder.body(|b| body.fill(b, None, stripes));
        if let Some(footer) = self.footer {
            builder = builder.footer(|f| footer.fill(f, None, None));
        }
        builder.build()
    }
}

impl SectionDoc {
    fn fill(
        self,
        section: &mut SectionBuilder,
        themed: Option<&Style>,
        stripes: Option<(&Style, &Style)>,
    ) {
        if let Some(style) = themed {
            section.with_style(style);
        }
        if let Some(style) = &self.style {
            section.with_style(style);
        }
        for (index, row) in self.rows.into_iter().enumerate() {
            let stripe = stripes.map(|(even, odd)| if index % 2 == 0 { even } else { odd });
            section.row(|r| {
                if let Some(stripe) = stripe.filter(|s| !s.is_empty()) {
                    r.with_style(stripe);
                }
                row.fill(r);
            });
        }
    }
}

impl RowDoc {
    fn fill(self, row: &mut RowBuilder) {
        let cells = match self {
            Self::Cells(cells) => cells,
            Self::Styled(styled) => {
                if let Some(style) = &styled.style {
                    row.with_style(style);
                }
                styled.cells
            },
        };
        for cell in cells {
            match cell {
                CellDoc::Text(text) => {
                    row.cell(text);
                },
                CellDoc::Full(spec) => {
                    row.cell_with(spec.text, |c| {
                        c.col_span(spec.col_span).row_span(spec.row_span);
                        if let Some(width) = spec.width {
                            c.width(width);
                        }
                        if let Some(style) = &spec.style {
                            c.with_style(style);
                        }
                    });
                },
            }
        }
    }
}
