//! Crossing extraction: two producers, one capability.
//!
//! A [`CrossingSource`] yields the cyclic crossing sequence for one analysis
//! run. The geometric source derives it from the 3D loop by scanning the
//! projection; the symbolic source builds the same structure from a Gauss
//! code, bypassing geometry. Downstream stages never care which path
//! produced the sequence.

pub mod gauss;
pub mod geometric;

use crate::knot_error::KnotError;
use crate::topology::crossing::CrossingSequence;
use crate::topology::polymer::Polymer;

pub use gauss::GaussCode;

/// Capability: produce a crossing sequence from some loop description.
pub trait CrossingSource {
    /// Build the ordered crossing sequence for one run.
    fn extract(&self) -> Result<CrossingSequence, KnotError>;
}

impl CrossingSource for Polymer {
    fn extract(&self) -> Result<CrossingSequence, KnotError> {
        geometric::extract_crossings(self)
    }
}
