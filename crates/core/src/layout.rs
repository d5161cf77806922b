//! Layout generator trait.

use crate::arrangement::Arrangement;
use crate::region::Region;
use crate::spacing::Spacing;
use crate::Result;

/// Trait for layout generators that place items over a region.
///
/// Generators are pure: a call has no observable side effects, shares no
/// state with prior calls, and may run concurrently from multiple callers as
/// long as the region is not mutated during the call.
pub trait LayoutGenerator<R: Region> {
    /// Generates an arrangement of placed items over `region`.
    fn generate(&self, region: &R, spacing: &Spacing) -> Result<Arrangement<R>>;
}
