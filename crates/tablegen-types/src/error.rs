//! Error types for tablegen.

use std::io;

/// Errors produced by tablegen.
///
/// The layout core itself is total; these cover input validation
/// (colors, spans, documents) and the I/O edges of the renderer.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("hex color string cannot be empty")]
    EmptyColor,

    #[error("invalid hex color length: #{input} ({len} digits, expected 3, 6, or 8)")]
    InvalidColorLength { input: String, len: usize },

    #[error("invalid hex color format: #{input} (unexpected character {ch:?})")]
    InvalidColorChar { input: String, ch: char },

    #[error("{axis} span must be at least 1, got {value}")]
    InvalidSpan { axis: &'static str, value: usize },

    #[error("font error: {0}")]
    Font(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TableError>;
