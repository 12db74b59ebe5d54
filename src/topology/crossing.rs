//! Crossing records and the cyclic crossing sequence.
//!
//! Every physical intersection of the projected loop is represented by two
//! records, one playing the over role and one the under role, ordered by the
//! loop's traversal. The partner relation plus position-based adjacency makes
//! this a graph with back-references, so records live in an arena addressed
//! by stable [`CrossId`]; the cyclic order is a separate id list and
//! `partner` is stored as an id, never a direct reference. Deleting a record
//! removes its id from the order list and leaves the arena slot untouched,
//! which keeps repeated mutation by the reducer trivially safe.

use crate::topology::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a record plays at its physical intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossingKind {
    /// The strand passing above in the projected-out axis.
    Over,
    /// The strand passing below.
    Under,
}

impl CrossingKind {
    /// The complementary role.
    #[inline]
    pub const fn opposite(self) -> CrossingKind {
        match self {
            CrossingKind::Over => CrossingKind::Under,
            CrossingKind::Under => CrossingKind::Over,
        }
    }
}

/// Stable arena handle for a crossing record.
///
/// Ids are dense indices into the arena and stay valid for the whole run,
/// including across deletions from the order list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CrossId(usize);

impl CrossId {
    /// Raw arena index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Debug for CrossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CrossId").field(&self.0).finish()
    }
}

impl fmt::Display for CrossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One over- or under-view of a physical projection crossing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Crossing {
    /// Over or under role of this record.
    pub kind: CrossingKind,
    /// Segment index (or symbolic label) of the overpassing strand.
    pub over_seg: i64,
    /// Segment index (or symbolic label) of the underpassing strand.
    pub under_seg: i64,
    /// Projected intersection point; `None` for symbolic (Gauss) records.
    pub proj: Option<(f64, f64)>,
    /// True when the vertically-projected segment lies over the horizontal one.
    pub vertical_over: bool,
    /// Traversal direction of the overpassing segment at the crossing.
    pub over_dir: Direction,
    /// Traversal direction of the underpassing segment at the crossing.
    pub under_dir: Direction,
    /// Arena id of the complementary record, set by partner matching.
    pub partner: Option<CrossId>,
    /// Sequential underpass label (1-based, under records only).
    pub underpass_num: usize,
    /// Arc label of the overpassing strand (1-based, over records only).
    pub generator_num: usize,
    /// Writhe contribution, -1/0/+1, set during matrix construction.
    pub sign: i8,
}

impl Crossing {
    /// Fresh, unmatched record.
    pub fn new(
        kind: CrossingKind,
        over_seg: i64,
        under_seg: i64,
        proj: Option<(f64, f64)>,
        vertical_over: bool,
        over_dir: Direction,
        under_dir: Direction,
    ) -> Self {
        Self {
            kind,
            over_seg,
            under_seg,
            proj,
            vertical_over,
            over_dir,
            under_dir,
            partner: None,
            underpass_num: 0,
            generator_num: 0,
            sign: 0,
        }
    }

    /// Matching key identifying the physical intersection.
    #[inline]
    pub fn key(&self) -> (i64, i64) {
        (self.over_seg, self.under_seg)
    }
}

/// Ordered, cyclic container of crossing records.
///
/// # Invariants
/// - Every id in `order` addresses a live arena slot; ids appear at most once.
/// - Reduction removes ids from `order` only, so partner ids held by
///   surviving records never dangle.
/// - After partner matching, `partner(partner(c)) == c` and kinds alternate
///   within each pair.
#[derive(Clone, Debug, Default)]
pub struct CrossingSequence {
    records: Vec<Crossing>,
    order: Vec<CrossId>,
}

impl CrossingSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the traversal order.
    pub fn push(&mut self, crossing: Crossing) -> CrossId {
        let id = CrossId(self.records.len());
        self.records.push(crossing);
        self.order.push(id);
        id
    }

    /// Number of records still in the traversal order.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the traversal order is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Surviving ids in traversal order.
    #[inline]
    pub fn order(&self) -> &[CrossId] {
        &self.order
    }

    /// Record behind an arena id.
    #[inline]
    pub fn record(&self, id: CrossId) -> &Crossing {
        &self.records[id.0]
    }

    /// Mutable record behind an arena id.
    #[inline]
    pub fn record_mut(&mut self, id: CrossId) -> &mut Crossing {
        &mut self.records[id.0]
    }

    /// Id at a traversal position.
    #[inline]
    pub fn id_at(&self, pos: usize) -> CrossId {
        self.order[pos]
    }

    /// Record at a traversal position.
    #[inline]
    pub fn at(&self, pos: usize) -> &Crossing {
        self.record(self.order[pos])
    }

    /// Matching key at a traversal position.
    #[inline]
    pub fn key_at(&self, pos: usize) -> (i64, i64) {
        self.at(pos).key()
    }

    /// Current traversal position of an id, if it survives.
    pub fn position_of(&self, id: CrossId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }

    /// Remove the record at a traversal position from the order list.
    ///
    /// The arena slot stays live; ids held elsewhere remain valid.
    pub fn remove_at(&mut self, pos: usize) -> CrossId {
        self.order.remove(pos)
    }

    /// Remove the first occurrence of `id` from the order list, if present.
    pub fn remove_id(&mut self, id: CrossId) -> bool {
        match self.position_of(id) {
            Some(pos) => {
                self.order.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Swap two traversal positions in place.
    #[inline]
    pub fn swap_positions(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Records in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &Crossing> {
        self.order.iter().map(|&id| &self.records[id.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(CrossId, usize);

    fn rec(kind: CrossingKind, key: i64) -> Crossing {
        Crossing::new(
            kind,
            key,
            key,
            None,
            true,
            Direction::Forward,
            Direction::Left,
        )
    }

    #[test]
    fn push_preserves_order_and_ids() {
        let mut seq = CrossingSequence::new();
        let a = seq.push(rec(CrossingKind::Over, 1));
        let b = seq.push(rec(CrossingKind::Under, 1));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.id_at(0), a);
        assert_eq!(seq.id_at(1), b);
        assert_eq!(seq.key_at(0), (1, 1));
    }

    #[test]
    fn removal_keeps_arena_slots_alive() {
        let mut seq = CrossingSequence::new();
        let a = seq.push(rec(CrossingKind::Over, 1));
        let b = seq.push(rec(CrossingKind::Under, 2));
        let removed = seq.remove_at(0);
        assert_eq!(removed, a);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.position_of(a), None);
        assert_eq!(seq.position_of(b), Some(0));
        // The slot is still addressable through its id.
        assert_eq!(seq.record(a).key(), (1, 1));
    }

    #[test]
    fn remove_id_is_idempotent() {
        let mut seq = CrossingSequence::new();
        let a = seq.push(rec(CrossingKind::Over, 1));
        assert!(seq.remove_id(a));
        assert!(!seq.remove_id(a));
    }

    #[test]
    fn swap_exchanges_positions_only() {
        let mut seq = CrossingSequence::new();
        let a = seq.push(rec(CrossingKind::Over, 1));
        let b = seq.push(rec(CrossingKind::Under, 2));
        seq.swap_positions(0, 1);
        assert_eq!(seq.id_at(0), b);
        assert_eq!(seq.id_at(1), a);
    }

    #[test]
    fn kind_opposite_flips() {
        assert_eq!(CrossingKind::Over.opposite(), CrossingKind::Under);
        assert_eq!(CrossingKind::Under.opposite(), CrossingKind::Over);
    }
}
