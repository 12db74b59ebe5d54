//! Signed Dowker notation for a reduced, partner-matched sequence.
//!
//! The walk starts at the first under-record in cyclic order, so the same
//! physical diagram traversed from a different start yields a rotated but
//! not relabeled code; callers must not assume codes are start-invariant.

use crate::knot_error::KnotError;
use crate::topology::crossing::{CrossingKind, CrossingSequence};

/// Encode the sequence as signed Dowker notation.
///
/// For each even traversal position (counted from the canonical start) the
/// code holds the 1-based position of that record's partner, negated when the
/// record itself is an over-record.
///
/// Returns `Ok(None)` when the sequence contains no under-record (an open or
/// trivial diagram) — a degenerate outcome, not an error.
///
/// # Errors
/// `IncompletePartner` if a record was never matched or its partner no longer
/// survives in the order; the pipeline matches partners first, so this only
/// signals a structural defect.
pub fn encode_dowker(seq: &CrossingSequence) -> Result<Option<Vec<i64>>, KnotError> {
    let Some(start) = seq.iter().position(|c| c.kind == CrossingKind::Under) else {
        return Ok(None);
    };
    let n = seq.len();
    let mut partner_pos = Vec::with_capacity(n);
    for i in 0..n {
        let id = seq.id_at(i);
        let partner = seq
            .record(id)
            .partner
            .ok_or(KnotError::IncompletePartner { position: i })?;
        let pos = seq
            .position_of(partner)
            .ok_or(KnotError::IncompletePartner { position: i })?;
        partner_pos.push(pos);
    }
    let mut code = Vec::with_capacity(n / 2);
    for i in (0..n).step_by(2) {
        let pos = (start + i) % n;
        // Renumber the partner position relative to the canonical start.
        let p = if partner_pos[pos] >= start {
            partner_pos[pos] - start
        } else {
            partner_pos[pos] + n - start
        };
        let mut value = (p + 1) as i64;
        if seq.at(pos).kind == CrossingKind::Over {
            value = -value;
        }
        code.push(value);
    }
    Ok(Some(code))
}
