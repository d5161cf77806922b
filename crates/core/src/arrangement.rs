//! Arrangement: the result of a layout generation.

use crate::bounds::Aabb2D;
use crate::placement::PlacedItem;
use crate::region::Region;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of placed items plus the region they were generated for.
///
/// Created once per generation call and immutable thereafter. Items are
/// ordered row-major: non-decreasing Y, and for equal Y, non-decreasing X.
/// Two arrangements generated from identical inputs are value-equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "R: Serialize, R::Scalar: Serialize",
        deserialize = "R: Deserialize<'de>, R::Scalar: Deserialize<'de>"
    ))
)]
pub struct Arrangement<R: Region> {
    items: Vec<PlacedItem<R::Scalar>>,
    region: R,
    rows: usize,
    cols: usize,
}

impl<R: Region> Arrangement<R> {
    /// Creates an arrangement from generated items and the source region.
    ///
    /// `rows` and `cols` are the candidate lattice dimensions; under a
    /// clipping policy `items` may hold fewer than `rows * cols` entries.
    pub fn new(items: Vec<PlacedItem<R::Scalar>>, region: R, rows: usize, cols: usize) -> Self {
        Self {
            items,
            region,
            rows,
            cols,
        }
    }

    /// Returns the placed items in generation order.
    pub fn items(&self) -> &[PlacedItem<R::Scalar>] {
        &self.items
    }

    /// Returns the region the arrangement was generated for.
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Returns the number of lattice rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of lattice columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items were placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the placed items in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedItem<R::Scalar>> {
        self.items.iter()
    }

    /// Iterates over the item origins in generation order.
    pub fn origins(&self) -> impl Iterator<Item = (R::Scalar, R::Scalar)> + '_ {
        self.items.iter().map(|item| item.origin)
    }

    /// Computes the bounding box of the placed origins.
    ///
    /// Returns `None` if the arrangement is empty.
    pub fn bounds(&self) -> Option<Aabb2D<R::Scalar>> {
        let origins: Vec<(R::Scalar, R::Scalar)> = self.origins().collect();
        Aabb2D::from_points(&origins)
    }

    /// Consumes the arrangement and returns its items.
    pub fn into_items(self) -> Vec<PlacedItem<R::Scalar>> {
        self.items
    }
}

impl<'a, R: Region> IntoIterator for &'a Arrangement<R> {
    type Item = &'a PlacedItem<R::Scalar>;
    type IntoIter = std::slice::Iter<'a, PlacedItem<R::Scalar>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
