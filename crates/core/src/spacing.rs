//! Placement spacing configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spacing between adjacent placement points, one step per axis.
///
/// This is per-call configuration input; the generator never stores it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spacing {
    /// Step along the X axis.
    pub x: f64,
    /// Step along the Y axis.
    pub y: f64,
}

impl Spacing {
    /// Creates a spacing with independent steps per axis.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a spacing with the same step on both axes.
    pub fn uniform(step: f64) -> Self {
        Self { x: step, y: step }
    }

    /// Validates the spacing: both steps must be strictly positive and
    /// finite.
    pub fn validate(&self) -> Result<()> {
        if !self.x.is_finite() || self.x <= 0.0 {
            return Err(Error::InvalidSpacing(format!(
                "spacing.x must be strictly positive, got {}",
                self.x
            )));
        }
        if !self.y.is_finite() || self.y <= 0.0 {
            return Err(Error::InvalidSpacing(format!(
                "spacing.y must be strictly positive, got {}",
                self.y
            )));
        }
        Ok(())
    }
}
