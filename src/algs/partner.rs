//! Partner matching: pair the two records of each physical crossing.
//!
//! Both records of one intersection share the same `(over, under)` key, so a
//! quadratic key search over the sequence is enough; n is the number of
//! projection crossings of a single loop, not a scaling bottleneck.

use crate::knot_error::KnotError;
use crate::topology::crossing::CrossingSequence;

/// Install the bidirectional partner reference on every record.
///
/// # Errors
/// - `IncompletePartner` when a record's key appears only once;
/// - `PartnerKindConflict` when the matched record plays the same role.
///
/// A wrong match is never installed silently; the first inconsistency aborts
/// the run.
pub fn match_partners(seq: &mut CrossingSequence) -> Result<(), KnotError> {
    let n = seq.len();
    for i in 0..n {
        let id = seq.id_at(i);
        let key = seq.record(id).key();
        let kind = seq.record(id).kind;
        let mut partner = None;
        for k in 0..n {
            if k == i {
                continue;
            }
            let other = seq.id_at(k);
            if seq.record(other).key() == key {
                if seq.record(other).kind == kind {
                    return Err(KnotError::PartnerKindConflict { position: i });
                }
                partner = Some(other);
                break;
            }
        }
        let partner = partner.ok_or(KnotError::IncompletePartner { position: i })?;
        seq.record_mut(id).partner = Some(partner);
    }
    log::debug!("matched {} partner pairs", n / 2);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::gauss::parse_gauss;

    #[test]
    fn matching_is_an_involution_with_opposite_kinds() {
        let mut seq = parse_gauss("a+1,b+2,a+3,b+1,a+2,b+3").unwrap();
        match_partners(&mut seq).unwrap();
        for &id in seq.order() {
            let p = seq.record(id).partner.unwrap();
            assert_eq!(seq.record(p).partner, Some(id));
            assert_ne!(seq.record(p).kind, seq.record(id).kind);
        }
    }

    #[test]
    fn unpaired_key_is_incomplete() {
        let mut seq = parse_gauss("a+1,b+1,a+2").unwrap();
        let err = match_partners(&mut seq).unwrap_err();
        assert_eq!(err, KnotError::IncompletePartner { position: 2 });
    }

    #[test]
    fn same_kind_pair_is_a_conflict() {
        let mut seq = parse_gauss("a+1,a+1").unwrap();
        let err = match_partners(&mut seq).unwrap_err();
        assert_eq!(err, KnotError::PartnerKindConflict { position: 0 });
    }
}
