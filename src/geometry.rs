//! Box geometry value types.
//!
//! [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)

use serde::{Deserialize, Serialize};

/// A rectangle described by its two extents.
///
/// A plain value type: construction takes width and height, and the
/// area is derived on demand rather than stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its extents.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area covered by the rectangle.
    #[must_use]
    pub const fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether either extent is zero, i.e. the rectangle covers no
    /// area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_width_times_height() {
        let rect = Rect::new(3.0, 4.0);
        assert!((rect.area() - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(5.0, 0.0).is_empty());
        assert!(!Rect::new(5.0, 1.0).is_empty());
    }
}
