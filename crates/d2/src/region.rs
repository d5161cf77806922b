//! Concrete 2D region types.

use geo::{Area, Coord, Intersects, LineString, Point, Polygon};
use gridplace_core::bounds::Aabb2D;
use gridplace_core::region::Region;
use gridplace_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded planar region described by a polygon.
///
/// The exterior ring is the placeable area; interior holes are regions where
/// membership tests report false. Rings do not need to repeat their first
/// vertex.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonRegion {
    /// Outer boundary of the region.
    exterior: Vec<(f64, f64)>,

    /// Interior holes (excluded from membership).
    holes: Vec<Vec<(f64, f64)>>,

    /// Width (for rectangular regions).
    width: Option<f64>,

    /// Height (for rectangular regions).
    height: Option<f64>,

    /// Cached area.
    #[cfg_attr(feature = "serde", serde(skip))]
    cached_area: Option<f64>,
}

impl PolygonRegion {
    /// Creates a region from polygon vertices.
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self {
            exterior: vertices,
            holes: Vec::new(),
            width: None,
            height: None,
            cached_area: None,
        }
    }

    /// Creates a rectangular region anchored at the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self {
            exterior: vec![(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)],
            holes: Vec::new(),
            width: Some(width),
            height: Some(height),
            cached_area: Some(width * height),
        }
    }

    /// Adds an interior hole.
    pub fn with_hole(mut self, vertices: Vec<(f64, f64)>) -> Self {
        self.holes.push(vertices);
        self.cached_area = None;
        self
    }

    /// Returns the width (if rectangular).
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Returns the height (if rectangular).
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the exterior vertices.
    pub fn exterior(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    /// Returns the interior holes.
    pub fn holes(&self) -> &[Vec<(f64, f64)>] {
        &self.holes
    }

    fn to_geo(&self) -> Polygon<f64> {
        let ring = |vertices: &[(f64, f64)]| {
            LineString::from(
                vertices
                    .iter()
                    .map(|&(x, y)| Coord { x, y })
                    .collect::<Vec<_>>(),
            )
        };
        let interiors = self.holes.iter().map(|hole| ring(hole)).collect();
        Polygon::new(ring(&self.exterior), interiors)
    }

    fn calculate_area(&self) -> f64 {
        // unsigned_area already subtracts interior rings
        self.to_geo().unsigned_area()
    }
}

impl Region for PolygonRegion {
    type Scalar = f64;

    fn extent(&self) -> Aabb2D<f64> {
        Aabb2D::from_points(&self.exterior).unwrap_or(Aabb2D::new(0.0, 0.0, 0.0, 0.0))
    }

    fn measure(&self) -> f64 {
        if let Some(area) = self.cached_area {
            area
        } else {
            self.calculate_area()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.exterior.len() < 3 {
            return Err(Error::InvalidRegion(
                "region must have at least 3 vertices".into(),
            ));
        }

        for &(x, y) in self
            .exterior
            .iter()
            .chain(self.holes.iter().flatten())
        {
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::InvalidRegion(format!(
                    "region has a non-finite vertex ({x}, {y})"
                )));
            }
        }

        if let (Some(w), Some(h)) = (self.width, self.height) {
            if w < 0.0 || h < 0.0 {
                return Err(Error::InvalidRegion(
                    "width and height must be non-negative".into(),
                ));
            }
        }

        Ok(())
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        // Intersects treats boundary points as inside; points in a hole are
        // outside, points on a hole edge are inside.
        self.to_geo().intersects(&Point::new(x, y))
    }
}
