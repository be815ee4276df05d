//! Edge and rectangle geometry in floating-point pixels.

use serde::{Deserialize, Serialize};

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Top padding in pixels.
    pub top: f32,
    /// Right padding in pixels.
    pub right: f32,
    /// Bottom padding in pixels.
    pub bottom: f32,
    /// Left padding in pixels.
    pub left: f32,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create uniform padding on all sides.
    pub const fn uniform(p: f32) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: f32, v: f32) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Create padding with individual side values.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rectangle by `padding`. The result may have a
    /// negative size when the padding exceeds the rectangle; callers
    /// check [`Rect::is_empty`].
    pub fn inset(&self, padding: &Padding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: self.width - padding.horizontal(),
            height: self.height - padding.vertical(),
        }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
