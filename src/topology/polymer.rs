//! `Polymer`: the closed, site-filling lattice loop.
//!
//! A polymer is an ordered list of lattice points; the loop implicitly closes
//! from the last point back to the first. Points come from whitespace-separated
//! integer triples, one per line, optionally read under a cyclic axis rotation
//! so the same text can be projected along each of the three axes.

use crate::knot_error::KnotError;
use serde::{Deserialize, Serialize};

/// Which coordinate each of the three tokens on a line becomes.
///
/// Rotating the axis assignment is how the caller selects the projection
/// plane without rewriting the input: the extractor always projects out `z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrder {
    /// Tokens are read as `(x, y, z)`.
    #[default]
    Xyz,
    /// Tokens are read as `(y, z, x)`.
    Yzx,
    /// Tokens are read as `(z, x, y)`.
    Zxy,
}

impl AxisOrder {
    fn place(self, tokens: [i64; 3]) -> [i64; 3] {
        let [a, b, c] = tokens;
        match self {
            AxisOrder::Xyz => [a, b, c],
            AxisOrder::Yzx => [c, a, b],
            AxisOrder::Zxy => [b, c, a],
        }
    }
}

/// Closed lattice loop, stored as the ordered list of visited sites.
///
/// # Invariants
/// - `side` is one more than the largest coordinate seen, so a non-cubic
///   conformation still fits in a `side`-sized box.
/// - Unit adjacency of consecutive points is *not* checked here; it is
///   validated when the per-site path grid is built.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Polymer {
    points: Vec<[i64; 3]>,
    side: usize,
}

impl Polymer {
    /// Build a polymer directly from lattice points.
    ///
    /// # Errors
    /// Returns `Err(NegativeCoordinate)` if any coordinate is negative.
    pub fn from_points(points: Vec<[i64; 3]>) -> Result<Self, KnotError> {
        let mut max = 0i64;
        for (index, p) in points.iter().enumerate() {
            for &c in p {
                if c < 0 {
                    return Err(KnotError::NegativeCoordinate { index });
                }
                max = max.max(c);
            }
        }
        let side = if points.is_empty() { 0 } else { max as usize + 1 };
        Ok(Self { points, side })
    }

    /// Parse whitespace-separated integer triples, one vertex per non-empty line.
    ///
    /// # Errors
    /// Returns `Err(MalformedCoordinateLine)` with the 1-based line number when
    /// a line has fewer than three tokens or a token is not an integer, and
    /// `Err(NegativeCoordinate)` for points outside the lattice box.
    pub fn parse(text: &str, order: AxisOrder) -> Result<Self, KnotError> {
        let mut points = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let mut triple = [0i64; 3];
            for slot in &mut triple {
                *slot = tokens
                    .next()
                    .and_then(|t| t.parse::<i64>().ok())
                    .ok_or(KnotError::MalformedCoordinateLine { line: lineno + 1 })?;
            }
            points.push(order.place(triple));
        }
        Self::from_points(points)
    }

    /// Visited sites in traversal order.
    #[inline]
    pub fn points(&self) -> &[[i64; 3]] {
        &self.points
    }

    /// Number of path vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the loop has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box edge length (largest coordinate + 1).
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cyclic successor index along the loop.
    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        if i + 1 == self.points.len() { 0 } else { i + 1 }
    }

    /// Cyclic predecessor index along the loop.
    #[inline]
    pub fn prev_index(&self, i: usize) -> usize {
        if i == 0 { self.points.len() - 1 } else { i - 1 }
    }
}
