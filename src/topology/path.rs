//! `PathGrid`: dense site-to-vertex lookup for a polymer.
//!
//! The geometric extractor needs to ask "which path vertex occupies site
//! (x,y,z), and in which directions do its two segments leave?" for every
//! site it scans along the depth axis. This module builds that lookup once
//! per run and validates the loop while doing so: consecutive vertices must
//! be unit-adjacent, and no two vertices may share a site (the fill
//! invariant).

use crate::knot_error::KnotError;
use crate::topology::direction::Direction;
use crate::topology::polymer::Polymer;

/// Per-site adjacency of one path vertex.
///
/// Segment `i` is the unit edge from vertex `i` to vertex `i+1 (mod N)`, so
/// the incoming segment of vertex `i` is `i-1 (mod N)` and the outgoing one
/// is `i` itself. Directions are relative to this site.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathNode {
    /// Index of the segment arriving at this vertex.
    pub prev_seg: usize,
    /// Index of the segment leaving this vertex.
    pub next_seg: usize,
    /// Direction from this site to its predecessor vertex.
    pub prev_dir: Direction,
    /// Direction from this site to its successor vertex.
    pub next_dir: Direction,
}

/// Dense `side³` occupancy grid of [`PathNode`]s.
#[derive(Clone, Debug)]
pub struct PathGrid {
    side: usize,
    nodes: Vec<Option<PathNode>>,
}

impl PathGrid {
    /// Build the grid from a polymer, validating adjacency and occupancy.
    ///
    /// # Errors
    /// - `NonAdjacentPoints` when a vertex and its cyclic neighbor do not
    ///   differ by one unit in one axis;
    /// - `DuplicateSite` when two vertices occupy the same site.
    pub fn build(polymer: &Polymer) -> Result<Self, KnotError> {
        let side = polymer.side();
        let mut nodes = vec![None; side * side * side];
        let points = polymer.points();
        for (i, &site) in points.iter().enumerate() {
            let prev = points[polymer.prev_index(i)];
            let next = points[polymer.next_index(i)];
            let prev_dir =
                Direction::between(site, prev).ok_or(KnotError::NonAdjacentPoints { index: i })?;
            let next_dir =
                Direction::between(site, next).ok_or(KnotError::NonAdjacentPoints { index: i })?;
            let slot = &mut nodes[Self::offset(side, site)];
            if slot.is_some() {
                return Err(KnotError::DuplicateSite {
                    x: site[0],
                    y: site[1],
                    z: site[2],
                });
            }
            *slot = Some(PathNode {
                prev_seg: polymer.prev_index(i),
                next_seg: i,
                prev_dir,
                next_dir,
            });
        }
        Ok(Self { side, nodes })
    }

    #[inline]
    fn offset(side: usize, site: [i64; 3]) -> usize {
        let [x, y, z] = site.map(|c| c as usize);
        (x * side + y) * side + z
    }

    /// Node occupying `site`, if any.
    ///
    /// Sites outside the box report `None` rather than panicking so scan
    /// loops can probe neighbors freely.
    #[inline]
    pub fn node(&self, site: [i64; 3]) -> Option<&PathNode> {
        if site.iter().any(|&c| c < 0 || c as usize >= self.side) {
            return None;
        }
        self.nodes[Self::offset(self.side, site)].as_ref()
    }

    /// Edge length of the grid box.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polymer {
        Polymer::from_points(vec![[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]]).unwrap()
    }

    #[test]
    fn records_segment_indices_and_directions() {
        let grid = PathGrid::build(&square()).unwrap();
        let n = grid.node([0, 0, 0]).unwrap();
        assert_eq!(n.next_seg, 0);
        assert_eq!(n.prev_seg, 3);
        assert_eq!(n.next_dir, Direction::Forward);
        assert_eq!(n.prev_dir, Direction::Right);
        let n = grid.node([1, 1, 0]).unwrap();
        assert_eq!(n.next_seg, 2);
        assert_eq!(n.next_dir, Direction::Back);
    }

    #[test]
    fn vacant_and_out_of_box_sites_are_none() {
        let grid = PathGrid::build(&square()).unwrap();
        assert!(grid.node([0, 0, 1]).is_none());
        assert!(grid.node([5, 0, 0]).is_none());
        assert!(grid.node([-1, 0, 0]).is_none());
    }

    #[test]
    fn non_adjacent_consecutive_points_error() {
        let p = Polymer::from_points(vec![[0, 0, 0], [2, 0, 0]]).unwrap();
        let err = PathGrid::build(&p).unwrap_err();
        assert!(matches!(err, KnotError::NonAdjacentPoints { .. }));
    }

    #[test]
    fn revisited_site_errors() {
        // 0 -> 1 -> 0 revisits the origin before closing.
        let p = Polymer::from_points(vec![[0, 0, 0], [1, 0, 0], [0, 0, 0], [1, 0, 0]]).unwrap();
        let err = PathGrid::build(&p).unwrap_err();
        assert_eq!(err, KnotError::DuplicateSite { x: 0, y: 0, z: 0 });
    }
}
