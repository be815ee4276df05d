//! Table rasterization.
//!
//! Paints a [`MeasuredGrid`](tablegen_layout::MeasuredGrid) into an
//! RGBA [`Framebuffer`] and encodes it as PNG. Per cell the paint order
//! is background, borders, then text.

pub mod framebuffer;
pub mod options;
pub mod paint;

pub use framebuffer::Framebuffer;
pub use options::RenderOptions;
pub use paint::paint_table;
