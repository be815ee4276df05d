//! Tables rendered to images.
//!
//! Build a [`Table`] with [`TableBuilder`], from a TOML
//! [`TableDocument`], or from serializable records with
//! [`records_to_table`]; lay it out against any
//! [`TextMeasurer`](tablegen_layout::TextMeasurer) and paint it with a
//! [`FontCache`].
//!
//! ```ignore
//! let table = TableBuilder::new()
//!     .header(|h| {
//!         h.row_texts(["Name", "Qty"]);
//!     })
//!     .body(|b| {
//!         b.row_texts(["apple", "3"]);
//!     })
//!     .build()?;
//! let fonts = FontCache::system();
//! table.render(&fonts, &RenderOptions::default())?.save_png("fruit.png")?;
//! ```

pub mod builder;
pub mod document;
pub mod records;
pub mod theme;

pub use builder::{
    CellBuilder, ColumnsBuilder, RowBuilder, SectionBuilder, StyleBuilder, TableBuilder,
};
pub use document::TableDocument;
pub use records::{FieldCache, GeneratorOptions, format_field_name, records_to_table};
pub use theme::{TableTheme, ThemeMode};

pub use tablegen_fonts::{FontCache, FontProvider};
pub use tablegen_layout::{
    Cell, ColumnSpec, HAlign, MeasuredGrid, Row, Section, Style, TableModel, TextMeasurer, VAlign,
};
pub use tablegen_render::{Framebuffer, RenderOptions};
pub use tablegen_types::{Color, FontStyle, Padding, Result, TableError};

/// A finished, immutable table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    model: TableModel,
}

impl Table {
    pub fn new(model: TableModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn into_model(self) -> TableModel {
        self.model
    }

    /// Measure the table. The grid borrows cells from this table.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> MeasuredGrid<'_> {
        tablegen_layout::measure_table(&self.model, measurer)
    }

    /// Lay out with `fonts` and paint into a new framebuffer.
    pub fn render(&self, fonts: &FontCache, options: &RenderOptions) -> Result<Framebuffer> {
        let grid = self.layout(fonts);
        log::debug!(
            "rendering {}x{} table ({:.1}x{:.1}px)",
            grid.row_count(),
            grid.column_count(),
            grid.total_width(),
            grid.total_height()
        );
        tablegen_render::paint_table(&self.model, &grid, fonts, options)
    }
}

impl From<TableModel> for Table {
    fn from(model: TableModel) -> Self {
        Self::new(model)
    }
}
