//! # lattice-knot
//!
//! lattice-knot is a Rust library for detecting and classifying knots in closed
//! self-avoiding loops on the cubic lattice, the polymer model used in
//! simulations of circular DNA and ring polymers. It projects a loop to a
//! regular planar diagram, simplifies the diagram by Reidemeister moves, and
//! computes topological invariants from the result.
//!
//! ## Features
//! - Geometric crossing extraction from 3D lattice loops via a sheared planar
//!   projection
//! - Symbolic crossing extraction from Gauss codes, bypassing geometry
//! - Reidemeister reduction (types I, II, III and a macro cancellation rule)
//! - Signed Dowker notation
//! - Alexander matrix, writhe, and exact big-integer evaluation of the
//!   Alexander polynomial determinant at integer parameters
//!
//! ## Exactness
//!
//! Invariants are decided by exact values: all determinant arithmetic uses
//! `BigInt` with fraction-free elimination, and the final division is checked
//! for exactness rather than assumed.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! lattice-knot = "0.3"
//! ```
//!
//! The typical entry point is [`pipeline::analyze`] over either a parsed
//! [`topology::polymer::Polymer`] or a [`extract::GaussCode`].

// Re-export our major subsystems:
pub mod algs;
pub mod extract;
pub mod knot_error;
pub mod pipeline;
pub mod report;
pub mod topology;

pub use knot_error::KnotError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        build_alexander, crossing_sign, encode_dowker, match_partners, reduce, AlexEntry,
        AlexanderInvariants, AlexanderMatrix,
    };
    pub use crate::extract::{CrossingSource, GaussCode};
    pub use crate::knot_error::KnotError;
    pub use crate::pipeline::{analyze, parse_t, AnalysisOptions, InvariantOutcome, KnotAnalysis};
    pub use crate::report::render;
    pub use crate::topology::crossing::{CrossId, Crossing, CrossingKind, CrossingSequence};
    pub use crate::topology::direction::Direction;
    pub use crate::topology::path::{PathGrid, PathNode};
    pub use crate::topology::polymer::{AxisOrder, Polymer};
}
