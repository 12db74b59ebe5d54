//! Alexander invariants: arc labeling, matrix construction, writhe and the
//! exact determinant of the principal minor.
//!
//! Two passes over the reduced, partner-matched sequence, both walked from
//! the same canonical under-crossing as the Dowker encoder. The labeling
//! pass numbers underpasses 1..K and assigns each over-record the cyclic arc
//! (generator) it belongs to; the matrix pass classifies each underpass from
//! its direction pair and emits one symbolic row per underpass. Entries stay
//! symbolic in {0, 1, -1, t, t-1, -t} until the determinant evaluates them
//! at the caller's integer parameter.
//!
//! All determinant arithmetic is exact `BigInt`; no floating point appears
//! anywhere in this module because invariants are decided by exact values.
//! Crossing classification follows Vologodskii et al. (Sov. Phys.-JETP 39,
//! 1974); writhe bookkeeping follows Deguchi & Tsurusaki (Phys. Lett. A 174,
//! 1993).

use crate::knot_error::KnotError;
use crate::topology::crossing::{CrossingKind, CrossingSequence};
use crate::topology::direction::Direction;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Symbolic Alexander matrix entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlexEntry {
    Zero,
    One,
    NegOne,
    T,
    TMinusOne,
    NegT,
}

impl AlexEntry {
    /// Evaluate at an integer parameter.
    pub fn eval(self, t: i64) -> BigInt {
        match self {
            AlexEntry::Zero => BigInt::zero(),
            AlexEntry::One => BigInt::one(),
            AlexEntry::NegOne => -BigInt::one(),
            AlexEntry::T => BigInt::from(t),
            AlexEntry::TMinusOne => BigInt::from(t - 1),
            AlexEntry::NegT => BigInt::from(-t),
        }
    }

    /// Symbolic rendering for the row dump.
    pub const fn symbol(self) -> &'static str {
        match self {
            AlexEntry::Zero => "0",
            AlexEntry::One => "1",
            AlexEntry::NegOne => "-1",
            AlexEntry::T => "t",
            AlexEntry::TMinusOne => "t-1",
            AlexEntry::NegT => "-t",
        }
    }
}

/// K x K symbolic Alexander matrix, one row per underpass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlexanderMatrix {
    k: usize,
    rows: Vec<Vec<AlexEntry>>,
}

impl AlexanderMatrix {
    /// Number of underpasses K (the matrix is K x K).
    #[inline]
    pub fn size(&self) -> usize {
        self.k
    }

    /// Symbolic rows in underpass order.
    #[inline]
    pub fn rows(&self) -> &[Vec<AlexEntry>] {
        &self.rows
    }

    /// Evaluate every entry at the integer parameter `t`.
    pub fn evaluate(&self, t: i64) -> Vec<Vec<BigInt>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|e| e.eval(t)).collect())
            .collect()
    }

    /// Exact determinant of the (K-1) x (K-1) principal minor at `t`.
    ///
    /// Fraction-free elimination: each subtracted row is first scaled by the
    /// pivot and the accumulated pivot product is divided out of the final
    /// diagonal product, so every intermediate value is an integer. A column
    /// with no nonzero pivot candidate makes the determinant exactly zero;
    /// elimination stops early and reports it as a value, never as an
    /// arithmetic fault. Division only ever happens by the accumulated pivot
    /// product, which is nonzero whenever elimination proceeded past the
    /// column that contributed it.
    ///
    /// # Errors
    /// `InexactElimination` if the final division leaves a remainder. The
    /// division is exact for any true run of the elimination above; the check
    /// guards against structural defects, not rounding.
    pub fn minor_determinant(&self, t: i64) -> Result<BigInt, KnotError> {
        let n = if self.k > 1 { self.k - 1 } else { self.k };
        let mut m = self.evaluate(t);
        let mut excess = BigInt::one();
        let mut negate = false;
        for i in 0..n {
            let Some(p) = (i..n).find(|&j| !m[j][i].is_zero()) else {
                return Ok(BigInt::zero());
            };
            if p != i {
                m.swap(i, p);
                negate = !negate;
            }
            for j in i + 1..n {
                let pivot = m[i][i].clone();
                let factor = std::mem::replace(&mut m[j][i], BigInt::zero());
                excess *= &pivot;
                for c in i + 1..n {
                    let sub = &m[i][c] * &factor;
                    m[j][c] = &m[j][c] * &pivot - sub;
                }
            }
        }
        let mut det = BigInt::one();
        for (i, row) in m.iter().enumerate().take(n) {
            det *= &row[i];
        }
        if (&det % &excess) != BigInt::zero() {
            return Err(KnotError::InexactElimination);
        }
        let quotient = det / excess;
        Ok(if negate { -quotient } else { quotient })
    }
}

/// Matrix and writhe for one diagram.
#[derive(Clone, Debug)]
pub struct AlexanderInvariants {
    /// Symbolic Alexander matrix, K x K.
    pub matrix: AlexanderMatrix,
    /// Signed sum of the per-underpass crossing orientations.
    pub writhe: i64,
}

/// Writhe contribution of a crossing from its traversal direction pair.
///
/// Returns `+1` for a Type II underpass, `-1` for Type I, `None` when the
/// pair is not a perpendicular in-plane combination (cannot arise from the
/// extractors).
pub fn crossing_sign(over: Direction, under: Direction) -> Option<i8> {
    use Direction::*;
    match (over, under) {
        (Forward, Left) | (Right, Forward) | (Left, Back) | (Back, Right) => Some(1),
        (Left, Forward) | (Forward, Right) | (Back, Left) | (Right, Back) => Some(-1),
        _ => None,
    }
}

/// Label arcs and underpasses, then build the matrix and writhe.
///
/// Returns `Ok(None)` when the sequence has no under-record (degenerate
/// diagram, same criterion as the Dowker encoder).
///
/// # Errors
/// `IncompletePartner` if a record carries no matched partner.
pub fn build_alexander(
    seq: &mut CrossingSequence,
) -> Result<Option<AlexanderInvariants>, KnotError> {
    let Some(start) = seq.iter().position(|c| c.kind == CrossingKind::Under) else {
        return Ok(None);
    };
    let n = seq.len();
    let k_total = n / 2;

    // Labeling pass: underpass numbers are sequential, arc numbers cycle
    // 1..K and advance after every underpass visited.
    let mut under_num = 0usize;
    let mut gen_num = 1usize;
    for i in 0..n {
        let id = seq.id_at((start + i) % n);
        let record = seq.record_mut(id);
        if record.kind == CrossingKind::Under {
            under_num += 1;
            record.underpass_num = under_num;
            gen_num = if gen_num >= k_total { 1 } else { gen_num + 1 };
        } else {
            record.generator_num = gen_num;
        }
    }

    // Matrix/writhe pass.
    let mut writhe = 0i64;
    let mut rows = vec![vec![AlexEntry::Zero; k_total]; k_total];
    for l in 0..n {
        let pos = (start + l) % n;
        let id = seq.id_at(pos);
        if seq.record(id).kind != CrossingKind::Under {
            continue;
        }
        let partner = seq
            .record(id)
            .partner
            .ok_or(KnotError::IncompletePartner { position: pos })?;
        let i_gen = seq.record(partner).generator_num;
        let k = seq.record(id).underpass_num;
        let sign = crossing_sign(seq.record(id).over_dir, seq.record(id).under_dir).unwrap_or(0);
        seq.record_mut(id).sign = sign;
        writhe += i64::from(sign);

        let col_k = k - 1;
        // Column k+1 wraps from K back to 1, matching the cyclic arc labels.
        let col_next = k % k_total;
        let next_gen = (k % k_total) + 1;
        let row = &mut rows[col_k];
        if k_total == 1 {
            // A single underpass has a 1x1 matrix; the wrapped +1 column
            // coincides with column k and is dropped.
            row[col_k] = AlexEntry::NegOne;
        } else if i_gen == k || i_gen == next_gen {
            row[col_k] = AlexEntry::NegOne;
            row[col_next] = AlexEntry::One;
        } else {
            match sign {
                1 => {
                    row[col_k] = AlexEntry::NegT;
                    row[col_next] = AlexEntry::One;
                    row[i_gen - 1] = AlexEntry::TMinusOne;
                }
                -1 => {
                    row[col_k] = AlexEntry::One;
                    row[col_next] = AlexEntry::NegT;
                    row[i_gen - 1] = AlexEntry::TMinusOne;
                }
                _ => {
                    // Unclassifiable direction pair: fall back to the simple
                    // row so the matrix stays well-formed.
                    row[col_k] = AlexEntry::NegOne;
                    row[col_next] = AlexEntry::One;
                }
            }
        }
    }

    Ok(Some(AlexanderInvariants {
        matrix: AlexanderMatrix { k: k_total, rows },
        writhe,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::partner::match_partners;
    use crate::extract::gauss::parse_gauss;

    fn trefoil() -> CrossingSequence {
        let mut seq = parse_gauss("a+1,b+2,a+3,b+1,a+2,b+3").unwrap();
        match_partners(&mut seq).unwrap();
        seq
    }

    #[test]
    fn trefoil_matrix_rows() {
        use AlexEntry::*;
        let inv = build_alexander(&mut trefoil()).unwrap().unwrap();
        assert_eq!(inv.matrix.size(), 3);
        assert_eq!(inv.matrix.rows()[0], vec![NegT, One, TMinusOne]);
        assert_eq!(inv.matrix.rows()[1], vec![TMinusOne, NegT, One]);
        assert_eq!(inv.matrix.rows()[2], vec![One, TMinusOne, NegT]);
    }

    #[test]
    fn trefoil_writhe_is_three() {
        let inv = build_alexander(&mut trefoil()).unwrap().unwrap();
        assert_eq!(inv.writhe, 3);
    }

    #[test]
    fn trefoil_determinant_values() {
        let inv = build_alexander(&mut trefoil()).unwrap().unwrap();
        // |Delta(-1)| = 3 for the trefoil; Delta(1) = +-1 for any knot.
        assert_eq!(inv.matrix.minor_determinant(-1).unwrap(), BigInt::from(3));
        assert_eq!(inv.matrix.minor_determinant(1).unwrap(), BigInt::from(1));
    }

    #[test]
    fn entries_come_from_the_symbolic_alphabet() {
        let inv = build_alexander(&mut trefoil()).unwrap().unwrap();
        for row in inv.matrix.rows() {
            for e in row {
                assert!(matches!(
                    e,
                    AlexEntry::Zero
                        | AlexEntry::One
                        | AlexEntry::NegOne
                        | AlexEntry::T
                        | AlexEntry::TMinusOne
                        | AlexEntry::NegT
                ));
            }
        }
    }

    #[test]
    fn no_underpass_is_degenerate() {
        let mut seq = parse_gauss("a+1,a+2").unwrap();
        assert!(build_alexander(&mut seq).unwrap().is_none());
    }

    #[test]
    fn zero_pivot_column_reports_zero() {
        use AlexEntry::*;
        let m = AlexanderMatrix {
            k: 3,
            rows: vec![
                vec![Zero, One, Zero],
                vec![Zero, NegOne, Zero],
                vec![Zero, Zero, Zero],
            ],
        };
        // First minor column is all zero: determinant is exactly zero.
        assert_eq!(m.minor_determinant(1).unwrap(), BigInt::zero());
    }

    #[test]
    fn row_swaps_keep_the_true_sign() {
        use AlexEntry::*;
        // The 2x2 principal minor evaluates to [[0,1],[2,0]] at t=2, whose
        // determinant is -2 and needs one row swap to eliminate.
        let m = AlexanderMatrix {
            k: 3,
            rows: vec![
                vec![Zero, One, Zero],
                vec![T, Zero, Zero],
                vec![Zero, Zero, One],
            ],
        };
        assert_eq!(m.minor_determinant(2).unwrap(), BigInt::from(-2));
    }

    #[test]
    fn sign_table_covers_both_types() {
        use Direction::*;
        assert_eq!(crossing_sign(Forward, Left), Some(1));
        assert_eq!(crossing_sign(Back, Right), Some(1));
        assert_eq!(crossing_sign(Left, Forward), Some(-1));
        assert_eq!(crossing_sign(Right, Back), Some(-1));
        assert_eq!(crossing_sign(Forward, Back), None);
        assert_eq!(crossing_sign(Up, Forward), None);
    }

    #[test]
    fn single_crossing_has_a_one_by_one_matrix() {
        let mut seq = parse_gauss("a+1,b+1").unwrap();
        match_partners(&mut seq).unwrap();
        let inv = build_alexander(&mut seq).unwrap().unwrap();
        assert_eq!(inv.matrix.size(), 1);
        assert_eq!(inv.matrix.rows()[0], vec![AlexEntry::NegOne]);
        assert_eq!(inv.matrix.minor_determinant(5).unwrap(), BigInt::from(-1));
    }
}
