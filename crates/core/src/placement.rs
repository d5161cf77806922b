//! Placed item representation.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single item placed at a generated grid point.
///
/// Records the origin point plus the lattice row and column it was produced
/// at. Items are never mutated after creation and never aliased with one
/// another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem<S> {
    /// Origin point of the item.
    pub origin: (S, S),

    /// Lattice row index (increasing Y).
    pub row: usize,

    /// Lattice column index (increasing X).
    pub col: usize,
}

impl<S: RealField + Copy> PlacedItem<S> {
    /// Creates a placed item at the given origin and lattice indices.
    pub fn new(x: S, y: S, row: usize, col: usize) -> Self {
        Self {
            origin: (x, y),
            row,
            col,
        }
    }

    /// Returns the X coordinate of the origin.
    pub fn x(&self) -> S {
        self.origin.0
    }

    /// Returns the Y coordinate of the origin.
    pub fn y(&self) -> S {
        self.origin.1
    }
}
