//! Algorithms over crossing sequences: partner matching, Reidemeister
//! reduction, Dowker notation and Alexander invariants.

pub mod alexander;
pub mod dowker;
pub mod partner;
pub mod reduce;

pub use alexander::{
    build_alexander, crossing_sign, AlexEntry, AlexanderInvariants, AlexanderMatrix,
};
pub use dowker::encode_dowker;
pub use partner::match_partners;
pub use reduce::reduce;
