//! Fluent builders producing a [`Table`](crate::Table).
//!
//! ```ignore
//! let table = TableBuilder::new()
//!     .header(|h| {
//!         h.style(|s| {
//!             s.bold();
//!         })
//!         .row_texts(["Name", "Qty"]);
//!     })
//!     .body(|b| {
//!         b.row_texts(["apple", "3"]);
//!     })
//!     .build()?;
//! ```

pub mod cell;
pub mod columns;
pub mod row;
pub mod section;
pub mod style;
pub mod table;

pub use cell::CellBuilder;
pub use columns::ColumnsBuilder;
pub use row::RowBuilder;
pub use section::SectionBuilder;
pub use style::StyleBuilder;
pub use table::TableBuilder;

use tablegen_types::TableError;

/// Store `err` unless an earlier error is already held.
pub(crate) fn keep_first(slot: &mut Option<TableError>, err: Option<TableError>) {
    if slot.is_none() {
        *slot = err;
    }
}
