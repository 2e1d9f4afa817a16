//! Geometry primitives for selection and collision tests.
//!
//! Vectors throughout the crate are [`glam::Vec2`]. The vector operations the
//! simulation needs map directly onto glam: componentwise add/sub, scalar
//! multiply,
//! [`Vec2::length`], and [`Vec2::normalize_or_zero`] (normalizing the zero
//! vector yields the zero vector rather than dividing by zero).
//!
//! This module adds the axis-aligned rectangle used for the selection marquee
//! and for unit collision squares.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the 2D plane.
///
/// Stored as normalized `min`/`max` corners: every constructor sorts its
/// inputs componentwise, so the drag direction of a marquee never matters.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use skirmish_core::math::Rect;
///
/// let a = Rect::from_corners(Vec2::new(10.0, 40.0), Vec2::new(30.0, 20.0));
/// let b = Rect::from_corners(Vec2::new(30.0, 20.0), Vec2::new(10.0, 40.0));
/// assert_eq!(a, b);
/// assert_eq!(a.min(), Vec2::new(10.0, 20.0));
/// assert_eq!(a.size(), Vec2::new(20.0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    /// Creates a rectangle spanning two arbitrary corner points.
    ///
    /// The corners are normalized componentwise, so `from_corners(a, b)`
    /// and `from_corners(b, a)` produce the same rectangle.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a square of the given side length centered on a point.
    ///
    /// This is the shape of a unit's collision rectangle.
    #[must_use]
    pub fn centered(center: Vec2, side: f32) -> Self {
        let half = Vec2::splat(side / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the top-left (componentwise minimum) corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the bottom-right (componentwise maximum) corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns the rectangle's width and height.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Exclusive overlap test against another rectangle.
    ///
    /// Rectangles that merely touch along an edge or corner do **not**
    /// overlap. A zero-area rectangle overlaps only when its point lies
    /// strictly inside the other rectangle.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
