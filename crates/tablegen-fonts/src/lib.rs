//! Font resolution and measurement for tablegen.
//!
//! [`FontProvider`] resolves a requested family/size/style against a
//! font database, walking a fixed fallback list and finally a built-in
//! box font, so a request never fails. [`FontCache`] memoizes resolved
//! fonts per (family, size, style) and is the [`TextMeasurer`] the
//! layout engine and renderer share.
//!
//! [`TextMeasurer`]: tablegen_layout::TextMeasurer

pub mod cache;
pub mod font;
pub mod glyph;
pub mod provider;

pub use cache::{FontCache, FontKey};
pub use font::{Font, PlacedGlyph};
pub use provider::{FALLBACK_FAMILIES, FontProvider};
