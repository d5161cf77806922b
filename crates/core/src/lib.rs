//! # Gridplace Core
//!
//! Core traits and value types for the gridplace layout engine.
//!
//! This crate provides the foundational abstractions shared by concrete
//! layout implementations:
//!
//! - **Region trait**: [`Region`] - a bounded planar area with a computable
//!   extent and a point-membership test
//! - **Generator trait**: [`LayoutGenerator`] - common interface for layout
//!   generators
//! - **Value types**: [`Aabb2D`], [`Spacing`], [`PlacedItem`], [`Arrangement`]
//!
//! Concrete regions and the grid generator itself live in `gridplace-d2`.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod arrangement;
pub mod bounds;
pub mod error;
pub mod layout;
pub mod placement;
pub mod region;
pub mod spacing;

// Re-exports
pub use arrangement::Arrangement;
pub use bounds::Aabb2D;
pub use error::{Error, Result};
pub use layout::LayoutGenerator;
pub use placement::PlacedItem;
pub use region::Region;
pub use spacing::Spacing;
