//! Table layout engine.
//!
//! Turns an immutable [`TableModel`] (header/body/footer sections of
//! rows of cells, each level optionally styled) into a
//! [`MeasuredGrid`]: resolved cell positions, column widths, and row
//! heights. The pipeline is strictly one-way:
//!
//! ```text
//! TableModel -> resolve_grid -> column widths (+ max-width shrink)
//!            -> row heights -> MeasuredGrid
//! ```
//!
//! Text measurement is delegated to a [`TextMeasurer`], so the engine
//! itself never touches font files.

pub mod cascade;
pub mod columns;
pub mod engine;
pub mod grid;
pub mod measure;
pub mod measured;
pub mod model;
pub mod rows;
pub mod style;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cascade::StyleResolver;
pub use engine::measure_table;
pub use grid::GridCell;
pub use measure::{SimpleTextMeasurer, TextMeasurer};
pub use measured::MeasuredGrid;
pub use model::{Cell, ColumnSpec, Row, Section, TableModel};
pub use style::{EdgeWidths, HAlign, Style, VAlign};
