//! Foundation types for tablegen.
//!
//! This crate holds the value types shared by every tablegen crate:
//! RGBA colors and hex parsing, edge/rectangle geometry, font
//! descriptors, and the common error type.

pub mod color;
pub mod error;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use error::{Result, TableError};
pub use font::{FontSpec, FontStyle};
pub use geometry::{Padding, Rect};
