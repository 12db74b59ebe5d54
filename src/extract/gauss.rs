//! Symbolic crossing extraction from a Gauss code.
//!
//! Tokens of the form `<role><sign><label>` (role `a` = over, `b` = under)
//! describe the traversal order of a diagram's crossings directly, so no
//! geometry is involved. The signed label doubles as the matching key: both
//! records of one physical crossing carry the same label, once as `a` and
//! once as `b`.
//!
//! The direction pair on each record is derived from the label sign alone —
//! (Forward, Left) for positive labels, (Left, Forward) for negative ones.
//! This is a deliberate simplification relative to the geometric extractor:
//! it fixes the Alexander crossing type per sign but does not reconstruct
//! true segment directions, so equivalent diagrams entered both ways need
//! not produce identical matrix rows.

use crate::knot_error::KnotError;
use crate::topology::crossing::{Crossing, CrossingKind, CrossingSequence};
use crate::topology::direction::Direction;

use super::CrossingSource;

/// A Gauss code held as text, split on commas and line breaks.
#[derive(Clone, Debug)]
pub struct GaussCode<'a> {
    code: &'a str,
}

impl<'a> GaussCode<'a> {
    /// Wrap a code string; parsing happens during extraction.
    pub fn new(code: &'a str) -> Self {
        Self { code }
    }
}

impl CrossingSource for GaussCode<'_> {
    fn extract(&self) -> Result<CrossingSequence, KnotError> {
        parse_gauss(self.code)
    }
}

/// Parse a Gauss code into a crossing sequence, one record per token.
///
/// # Errors
/// Malformed tokens fail with their 1-based element number: too short,
/// role letter other than `a`/`b`, or an unparsable label.
pub fn parse_gauss(code: &str) -> Result<CrossingSequence, KnotError> {
    let mut seq = CrossingSequence::new();
    let tokens = code
        .split(|c| c == ',' || c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|t| !t.is_empty());
    for (n, token) in tokens.enumerate() {
        let element = n + 1;
        let mut chars = token.chars();
        let role = chars
            .next()
            .ok_or(KnotError::GaussTokenTooShort { element })?;
        let sign = chars
            .next()
            .ok_or(KnotError::GaussTokenTooShort { element })?;
        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(KnotError::GaussTokenTooShort { element });
        }
        let kind = match role {
            'a' => CrossingKind::Over,
            'b' => CrossingKind::Under,
            other => {
                return Err(KnotError::GaussBadRole {
                    element,
                    found: other,
                });
            }
        };
        let mut label: i64 = digits
            .parse()
            .map_err(|_| KnotError::GaussBadLabel { element })?;
        if sign == '-' {
            label = -label;
        }
        let (over_dir, under_dir) = if label > 0 {
            (Direction::Forward, Direction::Left)
        } else {
            (Direction::Left, Direction::Forward)
        };
        // The label is a pure matching key here, not a segment index, and
        // there are no projected coordinates to record.
        seq.push(Crossing::new(
            kind, label, label, None, true, over_dir, under_dir,
        ));
    }
    log::debug!("gauss extraction: {} records", seq.len());
    Ok(seq)
}
