//! The region trait: a bounded planar area points can be placed on.

use crate::bounds::Aabb2D;
use crate::Result;
use nalgebra::RealField;

/// Trait for bounded planar regions that placements can be generated over.
///
/// A region only has to answer three geometric questions: its bounding
/// extent, its area, and whether a given point belongs to it. The region is
/// treated as read-only for the duration of a generation call; implementors
/// must not require interior mutability for these queries.
pub trait Region: Clone + Send + Sync {
    /// The coordinate type (f32 or f64).
    type Scalar: RealField + Copy;

    /// Returns the axis-aligned bounding extent of the region.
    fn extent(&self) -> Aabb2D<Self::Scalar>;

    /// Returns the area of the region.
    fn measure(&self) -> Self::Scalar;

    /// Validates the region and returns an error if it is unusable.
    fn validate(&self) -> Result<()>;

    /// Checks if a point belongs to the region. Boundary points count as
    /// inside.
    fn contains_point(&self, x: Self::Scalar, y: Self::Scalar) -> bool;

    /// Returns true if the region has zero extent on either axis.
    fn is_degenerate(&self) -> bool {
        self.extent().is_degenerate()
    }
}
