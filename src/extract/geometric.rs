//! Geometric crossing extraction from the 3D loop.
//!
//! The projection drops the `z` axis with the shear `x -> x + z/side`,
//! `y -> y + z/side`, so two in-plane segments at different depths cross
//! whenever their projected images intersect. For every vertex whose
//! outgoing segment lies in the plane, the extractor scans the depth column
//! of the relevant endpoint in one direction and emits a record for each
//! perpendicular segment found there. The sixteen cases (four in-plane
//! directions, two scan sides, two partner directions) fix the over/under
//! role, the vertical-over flag and the direction pair per case; every
//! downstream sign depends on reproducing them exactly.
//!
//! Segments along the depth axis never cross anything themselves; they only
//! displace the strand so that a nearer in-plane segment can pass over it.

use crate::knot_error::KnotError;
use crate::topology::crossing::{Crossing, CrossingKind, CrossingSequence};
use crate::topology::direction::Direction;
use crate::topology::path::PathGrid;
use crate::topology::polymer::Polymer;

/// Scan the projected loop and collect its crossing records in traversal order.
///
/// # Errors
/// Propagates path validation errors from [`PathGrid::build`], and returns
/// `Err(OddCrossingCount)` when the scan produces an odd number of records —
/// a malformed or self-touching loop, never a partial result.
pub fn extract_crossings(polymer: &Polymer) -> Result<CrossingSequence, KnotError> {
    let grid = PathGrid::build(polymer)?;
    let side = polymer.side() as i64;
    let depth = |z: i64| z as f64 / side as f64;
    let mut seq = CrossingSequence::new();

    for (i, &[x, y, z]) in polymer.points().iter().enumerate() {
        let node = grid
            .node([x, y, z])
            .expect("grid was built from this polymer");
        let under = i as i64;
        match node.next_dir {
            // Segment to (x+1, y, z). The smaller-x endpoint looks up its
            // depth column for y-running segments, the larger-x endpoint
            // looks down.
            Direction::Forward => {
                for zt in z + 1..side {
                    let Some(n) = grid.node([x, y, zt]) else { continue };
                    let proj = Some((x as f64 + depth(zt), y as f64 + depth(z)));
                    if n.next_dir == Direction::Left {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.next_seg as i64,
                            under,
                            proj,
                            true,
                            Direction::Left,
                            Direction::Forward,
                        ));
                    }
                    if n.prev_dir == Direction::Left {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.prev_seg as i64,
                            under,
                            proj,
                            true,
                            Direction::Right,
                            Direction::Forward,
                        ));
                    }
                }
                for zt in 0..z {
                    let Some(n) = grid.node([x + 1, y, zt]) else { continue };
                    let proj = Some((x as f64 + 1.0 + depth(zt), y as f64 + depth(z)));
                    if n.next_dir == Direction::Right {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.next_seg as i64,
                            proj,
                            false,
                            Direction::Forward,
                            Direction::Right,
                        ));
                    }
                    if n.prev_dir == Direction::Right {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.prev_seg as i64,
                            proj,
                            false,
                            Direction::Forward,
                            Direction::Left,
                        ));
                    }
                }
            }
            // Segment to (x-1, y, z); mirror of Forward with the scan sides
            // and depth orders reversed.
            Direction::Back => {
                for zt in (0..z).rev() {
                    let Some(n) = grid.node([x, y, zt]) else { continue };
                    let proj = Some((x as f64 + depth(zt), y as f64 + depth(z)));
                    if n.next_dir == Direction::Right {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.next_seg as i64,
                            proj,
                            false,
                            Direction::Back,
                            Direction::Right,
                        ));
                    }
                    if n.prev_dir == Direction::Right {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.prev_seg as i64,
                            proj,
                            false,
                            Direction::Back,
                            Direction::Left,
                        ));
                    }
                }
                for zt in (z + 1..side).rev() {
                    let Some(n) = grid.node([x - 1, y, zt]) else { continue };
                    let proj = Some((x as f64 - 1.0 + depth(zt), y as f64 + depth(z)));
                    if n.next_dir == Direction::Left {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.next_seg as i64,
                            under,
                            proj,
                            true,
                            Direction::Left,
                            Direction::Back,
                        ));
                    }
                    if n.prev_dir == Direction::Left {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.prev_seg as i64,
                            under,
                            proj,
                            true,
                            Direction::Right,
                            Direction::Back,
                        ));
                    }
                }
            }
            // Segment to (x, y+1, z); the roles of the axes swap, so the
            // vertical-over flag flips relative to the x-running cases.
            Direction::Right => {
                for zt in z + 1..side {
                    let Some(n) = grid.node([x, y, zt]) else { continue };
                    let proj = Some((x as f64 + depth(z), y as f64 + depth(zt)));
                    if n.next_dir == Direction::Back {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.next_seg as i64,
                            under,
                            proj,
                            false,
                            Direction::Back,
                            Direction::Right,
                        ));
                    }
                    if n.prev_dir == Direction::Back {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.prev_seg as i64,
                            under,
                            proj,
                            false,
                            Direction::Forward,
                            Direction::Right,
                        ));
                    }
                }
                for zt in 0..z {
                    let Some(n) = grid.node([x, y + 1, zt]) else { continue };
                    let proj = Some((x as f64 + depth(z), y as f64 + 1.0 + depth(zt)));
                    if n.next_dir == Direction::Forward {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.next_seg as i64,
                            proj,
                            true,
                            Direction::Right,
                            Direction::Forward,
                        ));
                    }
                    if n.prev_dir == Direction::Forward {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.prev_seg as i64,
                            proj,
                            true,
                            Direction::Right,
                            Direction::Back,
                        ));
                    }
                }
            }
            // Segment to (x, y-1, z); mirror of Right.
            Direction::Left => {
                for zt in (0..z).rev() {
                    let Some(n) = grid.node([x, y, zt]) else { continue };
                    let proj = Some((x as f64 + depth(z), y as f64 + depth(zt)));
                    if n.next_dir == Direction::Forward {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.next_seg as i64,
                            proj,
                            true,
                            Direction::Left,
                            Direction::Forward,
                        ));
                    }
                    if n.prev_dir == Direction::Forward {
                        seq.push(Crossing::new(
                            CrossingKind::Over,
                            under,
                            n.prev_seg as i64,
                            proj,
                            true,
                            Direction::Left,
                            Direction::Back,
                        ));
                    }
                }
                for zt in (z + 1..side).rev() {
                    let Some(n) = grid.node([x, y - 1, zt]) else { continue };
                    let proj = Some((x as f64 + depth(z), y as f64 - 1.0 + depth(zt)));
                    if n.next_dir == Direction::Back {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.next_seg as i64,
                            under,
                            proj,
                            false,
                            Direction::Back,
                            Direction::Left,
                        ));
                    }
                    if n.prev_dir == Direction::Back {
                        seq.push(Crossing::new(
                            CrossingKind::Under,
                            n.prev_seg as i64,
                            under,
                            proj,
                            false,
                            Direction::Forward,
                            Direction::Left,
                        ));
                    }
                }
            }
            Direction::Up | Direction::Down => {}
        }
    }

    if seq.len() % 2 != 0 {
        return Err(KnotError::OddCrossingCount { count: seq.len() });
    }
    log::debug!(
        "geometric extraction: {} records ({} crossings) from {} vertices",
        seq.len(),
        seq.len() / 2,
        polymer.len()
    );
    Ok(seq)
}
