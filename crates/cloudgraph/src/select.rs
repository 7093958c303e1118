//! Deterministic order statistics along one coordinate axis (median of medians).
//!
//! Contract
//! - `select(points, k, axis)` returns a point `p` with
//!   `#{q : q[axis] < p[axis]} <= k` and `#{q : q[axis] <= p[axis]} > k`,
//!   i.e. the k-th smallest with ties resolved by counting.
//! - Worst-case linear time: pivots are medians of medians of groups of five.
//!
//! Stack use
//! - The pivot search is itself a selection on the group medians. Instead of
//!   calling back into `select`, pending selections live in a `Vec<Frame>`;
//!   the frame stack grows by one per pivot reduction (log₅ n), and narrowing
//!   into `lesser`/`greater` reuses the current frame.

use crate::cfg::GROUP_SIZE;
use crate::cloud::Point;
use crate::error::{GraphError, GraphResult};

/// Select the k-th smallest point along `axis` (0-based, ties counted).
pub fn select(points: &[Point], k: usize, axis: usize) -> GraphResult<&Point> {
    if points.is_empty() {
        return Err(GraphError::invalid("cannot select from an empty point list"));
    }
    if k >= points.len() {
        return Err(GraphError::invalid(format!(
            "rank {k} outside [0, {})",
            points.len()
        )));
    }
    if let Some(p) = points.iter().find(|p| axis >= p.dim()) {
        return Err(GraphError::invalid(format!(
            "axis {axis} out of range for point {:?} of dimension {}",
            p.id(),
            p.dim()
        )));
    }
    let members: Vec<usize> = (0..points.len()).collect();
    let i = select_member(&members, k, |i| points[i].coord(axis));
    Ok(&points[i])
}

/// One pending selection: find rank `k` among `candidates`.
#[derive(Debug)]
struct Frame {
    candidates: Vec<usize>,
    k: usize,
}

/// Index-level selection over `members` by `key`.
///
/// Pre: `members` non-empty, `k < members.len()`, every key finite.
pub(crate) fn select_member<F>(members: &[usize], k: usize, key: F) -> usize
where
    F: Fn(usize) -> f64,
{
    debug_assert!(k < members.len(), "rank {k} out of range");
    let mut stack = vec![Frame {
        candidates: members.to_vec(),
        k,
    }];
    // Result of the frame popped last; the frame now on top waits for it as its pivot.
    let mut resolved: Option<usize> = None;
    while let Some(top) = stack.last_mut() {
        let answer = match resolved.take() {
            Some(pivot) => {
                let pv = key(pivot);
                let mut lesser = Vec::new();
                let mut greater = Vec::new();
                let mut equal = 0usize;
                for &c in &top.candidates {
                    let v = key(c);
                    if v < pv {
                        lesser.push(c);
                    } else if v > pv {
                        greater.push(c);
                    } else {
                        equal += 1;
                    }
                }
                if top.k < lesser.len() {
                    top.candidates = lesser;
                    continue;
                }
                if top.k < lesser.len() + equal {
                    pivot
                } else {
                    top.k -= lesser.len() + equal;
                    top.candidates = greater;
                    continue;
                }
            }
            None if top.candidates.len() <= GROUP_SIZE => {
                sort_members(&mut top.candidates, &key);
                top.candidates[top.k]
            }
            None => {
                let medians = group_medians(&top.candidates, &key);
                let mid = medians.len() / 2;
                stack.push(Frame {
                    candidates: medians,
                    k: mid,
                });
                continue;
            }
        };
        stack.pop();
        resolved = Some(answer);
    }
    // The loop only exits after the root frame resolved.
    resolved.unwrap_or(members[0])
}

fn sort_members<F: Fn(usize) -> f64>(items: &mut [usize], key: &F) {
    items.sort_by(|&a, &b| key(a).total_cmp(&key(b)));
}

/// Median of each consecutive group of five (the last group may be shorter).
fn group_medians<F: Fn(usize) -> f64>(candidates: &[usize], key: &F) -> Vec<usize> {
    candidates
        .chunks(GROUP_SIZE)
        .map(|group| {
            let mut g = group.to_vec();
            sort_members(&mut g, key);
            g[g.len() / 2]
        })
        .collect()
}
