//! Plain-text rendering of an analysis run.
//!
//! Output mirrors the quantities in [`KnotAnalysis`] line by line so a run
//! can be diffed against a previous one; nothing here is machine-parsed.

use crate::pipeline::{InvariantOutcome, KnotAnalysis};
use itertools::Itertools;
use std::fmt::Write;

/// Render one analysis as a multi-line report.
pub fn render(analysis: &KnotAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Number of crossings in projection: {}",
        analysis.crossings_before
    );
    // Matching runs whenever at least one crossing pair was extracted; a
    // failed match never reaches rendering.
    if analysis.crossings_before >= 1 {
        let _ = writeln!(out, "Crossing partners matched.");
    }
    if let Some(after) = analysis.crossings_after {
        let _ = writeln!(out, "Number of crossings after reduction: {after}");
    }
    match &analysis.outcome {
        InvariantOutcome::TooFewCrossings => {
            let _ = writeln!(out, "Too few crossings: the loop is trivially unknotted.");
        }
        InvariantOutcome::NoUnderpass => {
            let _ = writeln!(out, "No underpass found: invariants are undefined.");
        }
        InvariantOutcome::Computed {
            dowker,
            alexander,
            determinant,
        } => {
            let _ = writeln!(out, "Begin Dowker notation:");
            let _ = writeln!(out, "{}", dowker.iter().join(","));
            let _ = writeln!(out, "End Dowker notation.");
            let _ = writeln!(
                out,
                "Alexander matrix ({k} x {k}):",
                k = alexander.matrix.size()
            );
            for row in alexander.matrix.rows() {
                let _ = writeln!(out, "{}", row.iter().map(|e| e.symbol()).join(","));
            }
            let _ = writeln!(out, "Writhe: {}", alexander.writhe);
            if let Some(det) = determinant {
                let _ = writeln!(
                    out,
                    "Alexander polynomial at t = {}: {det}",
                    analysis.t
                );
            }
        }
    }
    out
}
