//! Resampling a solution path onto one entry per reachable score.

use crate::maze::{Cell, Position};

/// Picks `target_len` cells from `path` by nearest-index sampling so that the
/// first and last entries are always the path's own endpoints.
///
/// Returns an empty vector when `path` has fewer than two cells; callers treat
/// that as "no traversal possible".
pub fn scale_path(path: &[Cell], target_len: usize) -> Vec<Position> {
    if path.len() < 2 || target_len == 0 {
        return Vec::new();
    }
    if target_len == 1 {
        return vec![path[0].position()];
    }
    let span = (path.len() - 1) as f64;
    let steps = (target_len - 1) as f64;
    (0..target_len)
        .map(|i| {
            let idx = (i as f64 / steps * span).round() as usize;
            path[idx.min(path.len() - 1)].position()
        })
        .collect()
}

/// Path positions the player visits going from index `from` to index `to`,
/// both ends included. Walks backwards when `to < from`.
pub fn traversal(path: &[Position], from: usize, to: usize) -> Vec<Position> {
    if path.is_empty() {
        return Vec::new();
    }
    let last = path.len() - 1;
    let (from, to) = (from.min(last), to.min(last));
    if from <= to {
        path[from..=to].to_vec()
    } else {
        path[to..=from].iter().rev().copied().collect()
    }
}
