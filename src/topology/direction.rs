//! `Direction`: the 6-symbol alphabet of unit lattice steps.
//!
//! Every segment of a lattice polymer runs along exactly one coordinate axis,
//! so the direction from a vertex to either neighbor is one of six symbols.
//! The projection used by the crossing extractor drops the `z` axis; only the
//! four in-plane symbols can appear on a crossing record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a unit segment, relative to its starting vertex.
///
/// Axis convention: `Forward`/`Back` are ±x, `Right`/`Left` are ±y,
/// `Up`/`Down` are ±z.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    Forward,
    /// -x
    Back,
    /// +y
    Right,
    /// -y
    Left,
    /// +z
    Up,
    /// -z
    Down,
}

impl Direction {
    /// Direction from `from` to `to`, which must be unit-adjacent lattice sites.
    ///
    /// Returns `None` when the points are not adjacent (identical, diagonal or
    /// further apart); callers turn that into a parse error.
    pub fn between(from: [i64; 3], to: [i64; 3]) -> Option<Direction> {
        match [to[0] - from[0], to[1] - from[1], to[2] - from[2]] {
            [1, 0, 0] => Some(Direction::Forward),
            [-1, 0, 0] => Some(Direction::Back),
            [0, 1, 0] => Some(Direction::Right),
            [0, -1, 0] => Some(Direction::Left),
            [0, 0, 1] => Some(Direction::Up),
            [0, 0, -1] => Some(Direction::Down),
            _ => None,
        }
    }

    /// Unit coordinate delta of this direction.
    #[inline]
    pub const fn delta(self) -> [i64; 3] {
        match self {
            Direction::Forward => [1, 0, 0],
            Direction::Back => [-1, 0, 0],
            Direction::Right => [0, 1, 0],
            Direction::Left => [0, -1, 0],
            Direction::Up => [0, 0, 1],
            Direction::Down => [0, 0, -1],
        }
    }

    /// The opposite symbol (the direction of the same segment traversed backwards).
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for the four directions lying in the projection plane (±x, ±y).
    #[inline]
    pub const fn in_plane(self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::Forward => 'F',
            Direction::Back => 'B',
            Direction::Right => 'R',
            Direction::Left => 'L',
            Direction::Up => 'U',
            Direction::Down => 'D',
        };
        write!(f, "{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_covers_all_six_axes() {
        let o = [2, 2, 2];
        assert_eq!(Direction::between(o, [3, 2, 2]), Some(Direction::Forward));
        assert_eq!(Direction::between(o, [1, 2, 2]), Some(Direction::Back));
        assert_eq!(Direction::between(o, [2, 3, 2]), Some(Direction::Right));
        assert_eq!(Direction::between(o, [2, 1, 2]), Some(Direction::Left));
        assert_eq!(Direction::between(o, [2, 2, 3]), Some(Direction::Up));
        assert_eq!(Direction::between(o, [2, 2, 1]), Some(Direction::Down));
    }

    #[test]
    fn non_adjacent_points_have_no_direction() {
        assert_eq!(Direction::between([0, 0, 0], [0, 0, 0]), None);
        assert_eq!(Direction::between([0, 0, 0], [1, 1, 0]), None);
        assert_eq!(Direction::between([0, 0, 0], [2, 0, 0]), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [
            Direction::Forward,
            Direction::Back,
            Direction::Right,
            Direction::Left,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(d.opposite().opposite(), d);
            let [dx, dy, dz] = d.delta();
            assert_eq!(d.opposite().delta(), [-dx, -dy, -dz]);
        }
    }

    #[test]
    fn only_depth_axis_is_out_of_plane() {
        assert!(Direction::Forward.in_plane());
        assert!(Direction::Left.in_plane());
        assert!(!Direction::Up.in_plane());
        assert!(!Direction::Down.in_plane());
    }
}
