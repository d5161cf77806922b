//! Grid layout generation.

use gridplace_core::{Arrangement, Error, LayoutGenerator, PlacedItem, Region, Result, Spacing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for f64 rounding at the far edge of an axis, so that an extent
/// that is an exact multiple of the step still includes the final point.
const EDGE_EPS: f64 = 1e-9;

/// Membership policy for candidate lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridPolicy {
    /// Keep every candidate point over the region's bounding extent,
    /// regardless of membership. This is the default.
    #[default]
    BoundingBox,
    /// Keep only points the region contains. Boundary points count as
    /// inside. Changes output cardinality relative to [`Self::BoundingBox`].
    Clipped,
}

/// Configuration for the grid generator.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Membership policy for candidate points.
    pub policy: GridPolicy,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the membership policy.
    pub fn with_policy(mut self, policy: GridPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// 2D grid layout generator.
///
/// Produces a deterministic row-major lattice of placement points over a
/// region's bounding extent: all X positions for a given Y before advancing
/// Y, both increasing. Holds no state other than its configuration, so a
/// single generator may be shared across threads and repeated calls with
/// identical inputs yield value-equal arrangements.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    config: Config,
}

impl GridGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the candidate lattice for `region` as a lazy, restartable
    /// iterator in row-major order.
    ///
    /// The iterator is unaffected by the membership policy; it always yields
    /// the full bounding-extent lattice. Each coordinate is recomputed from
    /// its lattice index, so iteration never accumulates rounding error.
    ///
    /// A spacing so small relative to the extent that an axis step count
    /// cannot be represented in `usize` fails with [`Error::InvalidSpacing`].
    pub fn grid_points<R>(&self, region: &R, spacing: &Spacing) -> Result<GridPoints>
    where
        R: Region<Scalar = f64>,
    {
        region.validate()?;
        spacing.validate()?;

        let extent = region.extent();
        let cols = axis_steps(extent.width(), spacing.x).ok_or_else(|| {
            Error::InvalidSpacing(format!(
                "spacing.x of {} is too small for a region extent of {}",
                spacing.x,
                extent.width()
            ))
        })?;
        let rows = axis_steps(extent.height(), spacing.y).ok_or_else(|| {
            Error::InvalidSpacing(format!(
                "spacing.y of {} is too small for a region extent of {}",
                spacing.y,
                extent.height()
            ))
        })?;

        Ok(GridPoints {
            min_x: extent.min_x,
            min_y: extent.min_y,
            step_x: spacing.x,
            step_y: spacing.y,
            cols,
            rows,
            row: 0,
            col: 0,
        })
    }

    /// Generates an arrangement of placed items over `region`.
    ///
    /// One item is created per retained lattice point; under
    /// [`GridPolicy::Clipped`] points outside the region are dropped. A
    /// degenerate region (zero extent on an axis) collapses that axis to a
    /// single step rather than failing, so the minimal output is one item at
    /// the region's min corner.
    pub fn generate<R>(&self, region: &R, spacing: &Spacing) -> Result<Arrangement<R>>
    where
        R: Region<Scalar = f64>,
    {
        let points = self.grid_points(region, spacing)?;
        let rows = points.rows();
        let cols = points.cols();
        let clipped = self.config.policy == GridPolicy::Clipped;

        let mut items = Vec::with_capacity(rows.saturating_mul(cols));
        for (index, (x, y)) in points.enumerate() {
            if clipped && !region.contains_point(x, y) {
                continue;
            }
            items.push(PlacedItem::new(x, y, index / cols, index % cols));
        }

        log::debug!(
            "generated {} of {} candidate points ({} rows x {} cols, {:?})",
            items.len(),
            rows.saturating_mul(cols),
            rows,
            cols,
            self.config.policy
        );

        Ok(Arrangement::new(items, region.clone(), rows, cols))
    }
}

impl<R: Region<Scalar = f64>> LayoutGenerator<R> for GridGenerator {
    fn generate(&self, region: &R, spacing: &Spacing) -> Result<Arrangement<R>> {
        GridGenerator::generate(self, region, spacing)
    }
}

/// Generates an arrangement with the default (bounding-box) policy.
///
/// Convenience wrapper over [`GridGenerator::generate`].
pub fn generate_arrangement<R>(region: &R, spacing: &Spacing) -> Result<Arrangement<R>>
where
    R: Region<Scalar = f64>,
{
    GridGenerator::default_config().generate(region, spacing)
}

/// Number of lattice steps along one axis.
///
/// A step larger than the extent, or a zero extent, still yields one step at
/// the axis minimum. Returns `None` when the count does not fit in `usize`;
/// float-to-int casts saturate, so the ratio is range-checked before the
/// final increment.
fn axis_steps(extent: f64, step: f64) -> Option<usize> {
    if extent <= 0.0 {
        return Some(1);
    }
    let steps = (extent / step + EDGE_EPS).floor();
    if steps >= usize::MAX as f64 {
        return None;
    }
    (steps as usize).checked_add(1)
}

/// Lazy row-major lattice iterator.
///
/// Finite, exact-size, and `Clone` (cloning restarts from the clone's
/// current position). Produced by [`GridGenerator::grid_points`].
#[derive(Debug, Clone)]
pub struct GridPoints {
    min_x: f64,
    min_y: f64,
    step_x: f64,
    step_y: f64,
    cols: usize,
    rows: usize,
    row: usize,
    col: usize,
}

impl GridPoints {
    /// Returns the number of lattice rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of lattice columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Iterator for GridPoints {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.row >= self.rows {
            return None;
        }
        let point = (
            self.min_x + self.col as f64 * self.step_x,
            self.min_y + self.row as f64 * self.step_y,
        );
        self.col += 1;
        if self.col >= self.cols {
            self.col = 0;
            self.row += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .rows
            .saturating_sub(self.row)
            .saturating_mul(self.cols)
            .saturating_sub(self.col);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridPoints {}

impl std::iter::FusedIterator for GridPoints {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::PolygonRegion;
    use gridplace_core::Error;

    #[test]
    fn test_axis_steps() {
        assert_eq!(axis_steps(10.0, 5.0), Some(3)); // 0, 5, 10
        assert_eq!(axis_steps(9.9, 5.0), Some(2)); // 0, 5
        assert_eq!(axis_steps(4.0, 5.0), Some(1)); // step exceeds extent
        assert_eq!(axis_steps(0.0, 5.0), Some(1)); // degenerate axis
        assert_eq!(axis_steps(0.3, 0.1), Some(4)); // exact multiple despite rounding
    }

    #[test]
    fn test_axis_steps_unrepresentable_count() {
        // Valid inputs whose ratio exceeds usize::MAX must not wrap or panic
        assert_eq!(axis_steps(1e20, 1e-6), None);
        assert_eq!(axis_steps(f64::MAX, f64::MIN_POSITIVE), None);
    }

    #[test]
    fn test_reference_scenario() {
        // Extent 0..10 x 0..5, spacing (5, 5): six points, row-major.
        let region = PolygonRegion::rectangle(10.0, 5.0);
        let spacing = Spacing::new(5.0, 5.0);

        let arrangement = generate_arrangement(&region, &spacing).unwrap();
        let origins: Vec<(f64, f64)> = arrangement.origins().collect();
        assert_eq!(
            origins,
            vec![
                (0.0, 0.0),
                (5.0, 0.0),
                (10.0, 0.0),
                (0.0, 5.0),
                (5.0, 5.0),
                (10.0, 5.0),
            ]
        );
        assert_eq!(arrangement.rows(), 2);
        assert_eq!(arrangement.cols(), 3);
    }

    #[test]
    fn test_lattice_indices() {
        let region = PolygonRegion::rectangle(10.0, 5.0);
        let arrangement = generate_arrangement(&region, &Spacing::new(5.0, 5.0)).unwrap();

        let last = arrangement.items().last().unwrap();
        assert_eq!(last.row, 1);
        assert_eq!(last.col, 2);
    }

    #[test]
    fn test_single_point_when_spacing_exceeds_extent() {
        let region = PolygonRegion::rectangle(4.0, 3.0);
        let arrangement = generate_arrangement(&region, &Spacing::uniform(10.0)).unwrap();

        assert_eq!(arrangement.len(), 1);
        assert_eq!(arrangement.items()[0].origin, (0.0, 0.0));
    }

    #[test]
    fn test_degenerate_region_single_point() {
        // Zero-height triangle: extent collapses on Y
        let region = PolygonRegion::new(vec![(2.0, 3.0), (8.0, 3.0), (5.0, 3.0)]);
        let arrangement = generate_arrangement(&region, &Spacing::uniform(10.0)).unwrap();

        assert_eq!(arrangement.len(), 1);
        assert_eq!(arrangement.items()[0].origin, (2.0, 3.0));
    }

    #[test]
    fn test_invalid_spacing() {
        let region = PolygonRegion::rectangle(10.0, 10.0);
        let err = generate_arrangement(&region, &Spacing::new(0.0, 5.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidSpacing(_)));
    }

    #[test]
    fn test_invalid_region() {
        let region = PolygonRegion::new(Vec::new());
        let err = generate_arrangement(&region, &Spacing::uniform(5.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
    }

    #[test]
    fn test_clipped_policy_drops_outside_points() {
        // Right triangle over a 10x10 extent: the upper-right half of the
        // bounding-box lattice lies outside the hypotenuse.
        let region = PolygonRegion::new(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let spacing = Spacing::uniform(5.0);

        let unclipped = generate_arrangement(&region, &spacing).unwrap();
        assert_eq!(unclipped.len(), 9);

        let clipped = GridGenerator::new(Config::new().with_policy(GridPolicy::Clipped))
            .generate(&region, &spacing)
            .unwrap();
        // (10,5), (5,10), (10,10) fall outside; edge points stay.
        assert_eq!(clipped.len(), 6);
        assert!(clipped
            .origins()
            .all(|(x, y)| region.contains_point(x, y)));
    }

    #[test]
    fn test_grid_points_iterator() {
        let region = PolygonRegion::rectangle(10.0, 5.0);
        let generator = GridGenerator::default_config();
        let points = generator
            .grid_points(&region, &Spacing::new(5.0, 5.0))
            .unwrap();

        assert_eq!(points.len(), 6);
        assert_eq!(points.rows(), 2);
        assert_eq!(points.cols(), 3);

        // Restartable: a clone yields the same sequence
        let first: Vec<_> = points.clone().collect();
        let second: Vec<_> = points.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn test_grid_points_size_hint_mid_iteration() {
        let region = PolygonRegion::rectangle(10.0, 5.0);
        let mut points = GridGenerator::default_config()
            .grid_points(&region, &Spacing::new(5.0, 5.0))
            .unwrap();

        points.next();
        points.next();
        assert_eq!(points.len(), 4);
        assert_eq!(points.by_ref().count(), 4);
        assert_eq!(points.len(), 0);
        assert!(points.next().is_none());
    }

    #[test]
    fn test_idempotence() {
        let region = PolygonRegion::new(vec![(1.0, 2.0), (9.0, 2.0), (9.0, 8.0), (1.0, 8.0)]);
        let spacing = Spacing::new(2.5, 3.0);

        let first = generate_arrangement(&region, &spacing).unwrap();
        let second = generate_arrangement(&region, &spacing).unwrap();
        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn test_ordering_invariant() {
        let region = PolygonRegion::new(vec![(-4.0, -2.0), (7.0, -2.0), (7.0, 6.0), (-4.0, 6.0)]);
        let arrangement = generate_arrangement(&region, &Spacing::new(3.0, 2.0)).unwrap();

        for pair in arrangement.items().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(b.y() > a.y() || (b.y() == a.y() && b.x() > a.x()));
        }
    }
}
