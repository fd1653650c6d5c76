//! Layout geometry primitives
//!
//! Rectangles, points and the deterministic font metrics every layout
//! decision in the engine is made with. Text extents are approximated
//! from character count and pixel size so that auto-shrink and
//! collision checks behave identically in tests and in the host.

use serde::{Deserialize, Serialize};

/// A point in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Top edge
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center X coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center Y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Move each edge independently: positive `dx1`/`dy1` push the
    /// left/top edges inward, negative `dx2`/`dy2` pull the
    /// right/bottom edges inward.
    pub fn adjusted(&self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> Self {
        Self {
            x: self.x + dx1,
            y: self.y + dy1,
            width: self.width + dx2 - dx1,
            height: self.height + dy2 - dy1,
        }
    }

    /// True when the rectangle has no drawable area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Font description. The engine only cares about the pixel size; family
/// selection is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Glyph pixel size, never shrunk below 1.0
    pub pixel_size: f64,
}

impl Font {
    /// Create a font with the given pixel size
    pub fn with_pixel_size(pixel_size: f64) -> Self {
        Self {
            pixel_size: pixel_size.max(1.0),
        }
    }

    /// Metrics for this font
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics {
            pixel_size: self.pixel_size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::with_pixel_size(12.0)
    }
}

/// Deterministic text metrics derived from the font pixel size.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pixel_size: f64,
}

impl FontMetrics {
    /// Line height
    pub fn height(&self) -> f64 {
        self.pixel_size * 1.5
    }

    /// Approximate rendered width of a string
    pub fn width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.pixel_size * 0.6
    }
}
