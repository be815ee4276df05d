//! Render configuration.

use serde::{Deserialize, Serialize};
use tablegen_types::{Color, Padding};

/// Canvas settings for a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Fill for the whole canvas before cells are painted.
    pub background: Color,
    /// Space around the table.
    pub margin: Padding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            margin: Padding::ZERO,
        }
    }
}

impl RenderOptions {
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_margin(mut self, margin: Padding) -> Self {
        self.margin = margin;
        self
    }
}
