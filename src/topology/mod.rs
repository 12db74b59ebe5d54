//! Top-level module for the lattice path model.
//!
//! This module provides the core types for representing a closed lattice loop
//! and the crossing records derived from its planar projection:
//! - The six-symbol direction alphabet of unit lattice steps
//! - The polymer (ordered site list) and its dense per-site path grid
//! - Crossing records and the arena-backed cyclic crossing sequence
//!
//! Most users will interact with these types indirectly through the
//! extractors and the analysis pipeline.

pub mod crossing;
pub mod direction;
pub mod path;
pub mod polymer;

pub use crossing::{CrossId, Crossing, CrossingKind, CrossingSequence};
pub use direction::Direction;
pub use path::{PathGrid, PathNode};
pub use polymer::{AxisOrder, Polymer};
