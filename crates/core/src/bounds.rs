//! Axis-aligned bounds.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2D<S> {
    /// Minimum X coordinate.
    pub min_x: S,
    /// Minimum Y coordinate.
    pub min_y: S,
    /// Maximum X coordinate.
    pub max_x: S,
    /// Maximum Y coordinate.
    pub max_y: S,
}

impl<S: RealField + Copy> Aabb2D<S> {
    /// Creates a new bounding box from min/max corners.
    pub fn new(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the bounding box of a point set.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[(S, S)]) -> Option<Self> {
        let (&(first_x, first_y), rest) = points.split_first()?;
        let mut aabb = Self::new(first_x, first_y, first_x, first_y);
        for &(x, y) in rest {
            if x < aabb.min_x {
                aabb.min_x = x;
            }
            if y < aabb.min_y {
                aabb.min_y = y;
            }
            if x > aabb.max_x {
                aabb.max_x = x;
            }
            if y > aabb.max_y {
                aabb.max_y = y;
            }
        }
        Some(aabb)
    }

    /// Returns the extent along X.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the extent along Y.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the center point.
    pub fn center(&self) -> (S, S) {
        let two = S::one() + S::one();
        (
            (self.min_x + self.max_x) / two,
            (self.min_y + self.max_y) / two,
        )
    }

    /// Checks if a point lies inside the box (boundary inclusive).
    pub fn contains(&self, x: S, y: S) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns true if the box has zero extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= S::zero() || self.height() <= S::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_and_extents() {
        let aabb = Aabb2D::new(0.0, 0.0, 10.0, 5.0);
        assert_relative_eq!(aabb.width(), 10.0);
        assert_relative_eq!(aabb.height(), 5.0);
        assert!(!aabb.is_degenerate());
    }

    #[test]
    fn test_from_points() {
        let points = vec![(10.0, 20.0), (50.0, 20.0), (50.0, 60.0), (10.0, 60.0)];
        let aabb = Aabb2D::from_points(&points).unwrap();
        assert_relative_eq!(aabb.min_x, 10.0);
        assert_relative_eq!(aabb.min_y, 20.0);
        assert_relative_eq!(aabb.max_x, 50.0);
        assert_relative_eq!(aabb.max_y, 60.0);
    }

    #[test]
    fn test_from_points_empty() {
        let aabb: Option<Aabb2D<f64>> = Aabb2D::from_points(&[]);
        assert!(aabb.is_none());
    }

    #[test]
    fn test_contains() {
        let aabb = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
        assert!(aabb.contains(5.0, 5.0));
        assert!(aabb.contains(0.0, 0.0));
        assert!(aabb.contains(10.0, 10.0));
        assert!(!aabb.contains(10.1, 5.0));
        assert!(!aabb.contains(-0.1, 5.0));
    }

    #[test]
    fn test_center() {
        let aabb = Aabb2D::new(0.0, 0.0, 10.0, 4.0);
        let (cx, cy) = aabb.center();
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 2.0);
    }

    #[test]
    fn test_degenerate() {
        let flat = Aabb2D::new(0.0, 3.0, 10.0, 3.0);
        assert!(flat.is_degenerate());
        assert_relative_eq!(flat.height(), 0.0);
    }
}
