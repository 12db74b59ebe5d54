//! KnotError: unified error type for lattice-knot public APIs
//!
//! Every fallible operation in the crate reports through this enum so callers
//! see one descriptive failure per run instead of panics or partial results.
//! Degenerate-but-valid diagrams (no crossings, no underpass, zero
//! determinant) are *not* errors; they are carried in the analysis result.

use thiserror::Error;

/// Unified error type for lattice-knot operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnotError {
    /// A coordinate line did not contain three parsable integers.
    #[error("coordinate line {line}: expected three whitespace-separated integers")]
    MalformedCoordinateLine {
        /// 1-based line number in the input text.
        line: usize,
    },
    /// Two consecutive path points do not differ by exactly one unit in one axis.
    #[error("vertex {index}: consecutive points are not unit-adjacent on the lattice")]
    NonAdjacentPoints {
        /// 0-based index of the first vertex of the offending segment.
        index: usize,
    },
    /// Two path vertices occupy the same lattice site (fill invariant broken).
    #[error("site ({x},{y},{z}) is occupied by more than one path vertex")]
    DuplicateSite { x: i64, y: i64, z: i64 },
    /// A path point lies outside the non-negative lattice box.
    #[error("vertex {index}: negative coordinate outside the lattice")]
    NegativeCoordinate { index: usize },
    /// A Gauss-code token was shorter than the minimal `<role><sign><label>` form.
    #[error("Gauss code element {element}: token too short")]
    GaussTokenTooShort {
        /// 1-based position of the token in the input.
        element: usize,
    },
    /// A Gauss-code token did not start with the `a` (over) or `b` (under) role letter.
    #[error("Gauss code element {element}: role must be 'a' (over) or 'b' (under), found {found:?}")]
    GaussBadRole { element: usize, found: char },
    /// The label part of a Gauss-code token was not an integer.
    #[error("Gauss code element {element}: unparsable crossing label")]
    GaussBadLabel { element: usize },
    /// The extractor produced an odd number of crossing records.
    ///
    /// Each physical crossing contributes exactly two records, so an odd count
    /// means the loop is malformed (non-closed, self-touching or non-filling).
    #[error("odd crossing-record count {count}: each physical crossing must contribute two records")]
    OddCrossingCount { count: usize },
    /// No other record shares a record's `(over, under)` key.
    #[error("incomplete partner: no matching record for crossing at position {position}")]
    IncompletePartner { position: usize },
    /// The matched partner has the same over/under kind.
    #[error("partner kind should be opposite at position {position}")]
    PartnerKindConflict { position: usize },
    /// Fraction-free elimination produced a non-exact final division.
    ///
    /// The accumulated pivot product must divide the diagonal product exactly;
    /// a remainder indicates a structural defect upstream, never a rounding
    /// concern (all arithmetic is exact).
    #[error("fraction-free elimination: final division left a nonzero remainder")]
    InexactElimination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_positions() {
        let e = KnotError::MalformedCoordinateLine { line: 7 };
        assert!(e.to_string().contains("line 7"));
        let e = KnotError::GaussBadRole {
            element: 3,
            found: 'q',
        };
        assert!(e.to_string().contains("element 3"));
        assert!(e.to_string().contains("'q'"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            KnotError::OddCrossingCount { count: 5 },
            KnotError::OddCrossingCount { count: 5 },
        );
        assert_ne!(
            KnotError::IncompletePartner { position: 1 },
            KnotError::PartnerKindConflict { position: 1 },
        );
    }
}
