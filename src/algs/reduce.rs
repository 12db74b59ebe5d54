//! Reidemeister reduction of the cyclic crossing sequence.
//!
//! A rewriting system with four rules, run to convergence. Rules only ever
//! delete matched pairs or groups, so the sequence length stays even and
//! strictly decreases on every successful application, which bounds the
//! fixpoint loops. Scanning restarts from the mutation point after each
//! rewrite because deletions can re-expose earlier positions.
//!
//! The macro rule requires matched partners (it deletes the partner of every
//! record it drops), so the sequence must be partner-matched before reduction.

use crate::topology::crossing::CrossingSequence;

/// Apply all four rules until one full pass changes nothing.
pub fn reduce(seq: &mut CrossingSequence) {
    let before = seq.len();
    let mut macro_found = true;
    while macro_found {
        macro_found = false;
        let mut found = true;
        while found {
            found = false;
            pass_type_i(seq);
            found |= pass_type_ii(seq);
            found |= pass_type_iii(seq);
            macro_found |= pass_macro(seq);
            debug_assert!(seq.len() % 2 == 0, "reduction must preserve evenness");
        }
    }
    if seq.len() != before {
        log::debug!("reduced {} -> {} records", before, seq.len());
    }
}

/// Type I: two adjacent records with the same key are a trivial self-loop.
fn pass_type_i(seq: &mut CrossingSequence) -> bool {
    let mut changed = false;
    let mut i = 0;
    while seq.len() > i + 1 {
        if seq.key_at(i) == seq.key_at(i + 1) {
            seq.remove_at(i);
            seq.remove_at(i);
            changed = true;
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    changed
}

/// Type II: an adjacent same-kind pair whose partner images are themselves
/// adjacent (in either order) is a removable poke; all four records go.
fn pass_type_ii(seq: &mut CrossingSequence) -> bool {
    let mut changed = false;
    let mut i = 0;
    while seq.len() > i + 1 {
        if seq.at(i).kind != seq.at(i + 1).kind {
            i += 1;
            continue;
        }
        let (k1, k2) = (seq.key_at(i), seq.key_at(i + 1));
        let mut hit = false;
        let mut j = i + 2;
        while seq.len() > j + 1 {
            let (k3, k4) = (seq.key_at(j), seq.key_at(j + 1));
            if (k1 == k3 && k2 == k4) || (k1 == k4 && k2 == k3) {
                seq.remove_at(j);
                seq.remove_at(j);
                seq.remove_at(i);
                seq.remove_at(i);
                i = i.saturating_sub(1);
                changed = true;
                hit = true;
                break;
            }
            j += 1;
        }
        if !hit {
            i += 1;
        }
    }
    changed
}

/// Type III combined with Type I: `a,b,c,d` where `a` and `d` share a key and
/// `b`,`c` alternate kind relative to `a`. The move deletes `a` and `d` and
/// swaps the adjacent partner images of `b` and `c` elsewhere — a genuine
/// slide, not a deletion of `b`/`c`.
fn pass_type_iii(seq: &mut CrossingSequence) -> bool {
    let mut changed = false;
    let mut i = 0;
    while seq.len() > i + 3 {
        if seq.key_at(i) != seq.key_at(i + 3) {
            i += 1;
            continue;
        }
        let ka = seq.at(i).kind;
        if ka != seq.at(i + 1).kind || ka == seq.at(i + 2).kind {
            i += 1;
            continue;
        }
        let (kb, kc) = (seq.key_at(i + 1), seq.key_at(i + 2));
        let mut hit = false;
        let mut j = 0;
        while seq.len() > j + 1 {
            // Skip windows overlapping the a..d block itself.
            if j + 1 >= i && j <= i + 3 {
                j += 1;
                continue;
            }
            let (kp, kq) = (seq.key_at(j), seq.key_at(j + 1));
            if (kb == kp && kc == kq) || (kb == kq && kc == kp) {
                seq.swap_positions(j, j + 1);
                seq.remove_at(i + 3);
                seq.remove_at(i);
                changed = true;
                hit = true;
                break;
            }
            j += 1;
        }
        if !hit {
            i += 1;
        }
    }
    changed
}

/// Macro cancellation: a maximal same-kind run that returns to its own
/// starting key (a "fish"). Runs of length at least 5 drop every interior
/// record together with its partner wherever that partner sits.
fn pass_macro(seq: &mut CrossingSequence) -> bool {
    let mut changed = false;
    let mut i = 0;
    while seq.len() > i + 5 {
        let start_key = seq.key_at(i);
        let streak_kind = seq.at(i + 1).kind;
        let mut j = i + 2;
        while j < seq.len() {
            if seq.at(j).kind != streak_kind {
                break; // streak broken
            }
            if seq.key_at(j) == start_key {
                break; // back to start, fish completed
            }
            j += 1;
        }
        if j >= seq.len() {
            i += 1;
            continue;
        }
        if j - i < 5 {
            i = j;
        } else if seq.key_at(j) == start_key {
            let mut condemned = Vec::with_capacity(j - i - 1);
            for k in (i + 1..j).rev() {
                let id = seq.id_at(k);
                if let Some(p) = seq.record(id).partner {
                    condemned.push(p);
                }
                seq.remove_at(k);
            }
            for p in condemned {
                // The partner may itself have been interior to the run.
                seq.remove_id(p);
            }
            changed = true;
        } else {
            i += 1;
        }
    }
    changed
}
