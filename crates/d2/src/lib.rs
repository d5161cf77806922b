//! # Gridplace 2D
//!
//! Deterministic grid placement generation over bounded planar regions.
//!
//! Given a region and a spacing, the generator produces a row-major lattice
//! of placement points over the region's bounding extent and attaches a
//! lightweight placed-item record to each. The result is an [`Arrangement`]:
//! the ordered item sequence plus the region it was generated for.
//!
//! ## Features
//!
//! - Polygonal regions with holes ([`PolygonRegion`])
//! - Deterministic row-major ordering (increasing Y, then increasing X)
//! - Bounding-box or clipped membership policy ([`GridPolicy`])
//! - Lazy lattice production for large grids ([`GridGenerator::grid_points`])
//!
//! ## Quick Start
//!
//! ```rust
//! use gridplace_d2::{generate_arrangement, PolygonRegion, Spacing};
//!
//! let region = PolygonRegion::rectangle(10.0, 5.0);
//! let arrangement = generate_arrangement(&region, &Spacing::new(5.0, 5.0)).unwrap();
//!
//! // 3 columns x 2 rows over the bounding extent
//! assert_eq!(arrangement.len(), 6);
//! assert_eq!(arrangement.items()[0].origin, (0.0, 0.0));
//! ```
//!
//! ## Membership Policy
//!
//! By default every candidate lattice point over the bounding extent is kept
//! ([`GridPolicy::BoundingBox`]). To drop points the region does not
//! contain, configure the generator with [`GridPolicy::Clipped`]:
//!
//! ```rust
//! use gridplace_d2::{Config, GridGenerator, GridPolicy, PolygonRegion, Spacing};
//!
//! let triangle = PolygonRegion::new(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
//! let generator = GridGenerator::new(Config::new().with_policy(GridPolicy::Clipped));
//!
//! let arrangement = generator.generate(&triangle, &Spacing::uniform(5.0)).unwrap();
//! assert!(arrangement.len() < 9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod generator;
pub mod region;

pub use generator::{generate_arrangement, Config, GridGenerator, GridPoints, GridPolicy};
pub use region::PolygonRegion;

// Re-export the core types callers need alongside the generator.
pub use gridplace_core::{
    Aabb2D, Arrangement, Error, LayoutGenerator, PlacedItem, Region, Result, Spacing,
};
