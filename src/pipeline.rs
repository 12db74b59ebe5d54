//! End-to-end analysis: extraction, matching, reduction, invariants.
//!
//! One call takes any [`CrossingSource`] and a set of options and returns a
//! [`KnotAnalysis`] carrying every computed quantity. Degenerate inputs
//! (too few crossings, no underpass) are outcomes, not errors; errors are
//! reserved for malformed input and structural defects.

use crate::algs::{build_alexander, encode_dowker, match_partners, reduce, AlexanderInvariants};
use crate::extract::CrossingSource;
use crate::knot_error::KnotError;
use num_bigint::BigInt;

/// Knobs for one analysis run.
#[derive(Copy, Clone, Debug)]
pub struct AnalysisOptions {
    /// Run Reidemeister reduction before computing invariants.
    pub reduce: bool,
    /// Evaluate the Alexander minor determinant.
    pub determinant: bool,
    /// Integer parameter for the determinant evaluation.
    pub t: i64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            reduce: true,
            determinant: true,
            t: 1,
        }
    }
}

/// Parse a user-supplied parameter string, falling back to `t = 1`.
pub fn parse_t(text: &str) -> i64 {
    text.trim().parse().unwrap_or(1)
}

/// What the run concluded about the diagram.
#[derive(Clone, Debug)]
pub enum InvariantOutcome {
    /// Fewer than two crossing records survive: trivially unknotted.
    TooFewCrossings,
    /// No under-record exists, so no invariant is defined.
    NoUnderpass,
    /// Full invariant set for a nondegenerate diagram.
    Computed {
        /// Signed Dowker code.
        dowker: Vec<i64>,
        /// Alexander matrix and writhe.
        alexander: AlexanderInvariants,
        /// Minor determinant at `t`, when requested.
        determinant: Option<BigInt>,
    },
}

/// Result of one analysis run.
#[derive(Clone, Debug)]
pub struct KnotAnalysis {
    /// Crossing count (pairs) straight out of extraction.
    pub crossings_before: usize,
    /// Crossing count after reduction; `None` when reduction was off.
    pub crossings_after: Option<usize>,
    /// Invariants or the degenerate verdict.
    pub outcome: InvariantOutcome,
    /// Parameter the determinant was evaluated at.
    pub t: i64,
}

/// Run the full pipeline over one crossing source.
///
/// # Errors
/// Propagates extraction errors and any structural defect detected by
/// partner matching or the invariant stages.
pub fn analyze(
    source: &dyn CrossingSource,
    options: AnalysisOptions,
) -> Result<KnotAnalysis, KnotError> {
    let mut seq = source.extract()?;
    let records = seq.len();
    let crossings_before = records / 2;
    log::debug!("extracted {records} crossing records");

    if records < 2 {
        return Ok(KnotAnalysis {
            crossings_before,
            crossings_after: None,
            outcome: InvariantOutcome::TooFewCrossings,
            t: options.t,
        });
    }

    match_partners(&mut seq)?;

    let crossings_after = if options.reduce {
        reduce(&mut seq);
        Some(seq.len() / 2)
    } else {
        None
    };

    if seq.len() < 2 {
        return Ok(KnotAnalysis {
            crossings_before,
            crossings_after,
            outcome: InvariantOutcome::TooFewCrossings,
            t: options.t,
        });
    }

    let Some(alexander) = build_alexander(&mut seq)? else {
        return Ok(KnotAnalysis {
            crossings_before,
            crossings_after,
            outcome: InvariantOutcome::NoUnderpass,
            t: options.t,
        });
    };
    let Some(dowker) = encode_dowker(&seq)? else {
        return Ok(KnotAnalysis {
            crossings_before,
            crossings_after,
            outcome: InvariantOutcome::NoUnderpass,
            t: options.t,
        });
    };

    let determinant = if options.determinant {
        Some(alexander.matrix.minor_determinant(options.t)?)
    } else {
        None
    };

    Ok(KnotAnalysis {
        crossings_before,
        crossings_after,
        outcome: InvariantOutcome::Computed {
            dowker,
            alexander,
            determinant,
        },
        t: options.t,
    })
}
