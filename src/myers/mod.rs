// Myers shortest-edit-script search.
//
// The search runs in rounds of increasing edit budget `d`. Round `d` visits
// diagonals `k = -d, -d + 2, ..., d` where `k = b_index - a_index`, and for
// each one records the furthest A-index reachable with `d` edits:
//   - from `k + 1` by consuming one element of A (Deletion)
//   - from `k - 1` by consuming one element of B (Addition)
// followed by the longest run of equivalent pairs along `k` (the snake).
//
// The first diagonal to consume both sequences ends the search. Paths are
// kept as back-pointers in a `Trace` and expanded into a script only once.

mod frontier;
mod trace;

use crate::edit::{EditScript, Op};

use frontier::{Frontier, Reach};
use trace::Trace;

/// Compute a shortest edit script turning `a` into `b`.
///
/// `eq` decides whether an element of `a` and an element of `b` match. It may
/// be called repeatedly with the same pair and must not depend on anything
/// but its arguments. The two element types are independent, so `eq` is free
/// to compare integers against floats or records by a subset of fields.
///
/// The returned script has minimal [`distance`](EditScript::distance), and
/// its Keep count is the length of a longest common subsequence under `eq`.
/// Among several shortest scripts, interior diagonals prefer the Addition
/// move unless the Deletion move reaches strictly further along `a`.
///
/// ```
/// use anydiff::diff;
///
/// let a = [1, 2, 3, 4, 5];
/// let b = [2.0f32, 3.5, 4.0, 6.0];
/// let script = diff(&a, &b, |x, y| *x as f32 == *y);
/// assert_eq!(script.to_string(), "-=-+=-+");
/// assert_eq!(script.distance(), 5);
/// ```
pub fn diff<A, B, F>(a: &[A], b: &[B], eq: F) -> EditScript
where
    F: Fn(&A, &B) -> bool,
{
    let (m, n) = (a.len(), b.len());
    let max_d = m + n;
    let end_k = n as isize - m as isize;

    let mut v = Frontier::new(max_d);
    let mut trace = Trace::with_capacity(max_d.min(1 << 16) + 1);

    for d in 0..=max_d as isize {
        for k in (-d..=d).step_by(2) {
            let (x, node) = if d == 0 {
                let run = snake(a, b, 0, 0, &eq);
                (run, trace.root(run))
            } else {
                let (from, op) = if k == -d || (k != d && v[k - 1].x < v[k + 1].x + 1) {
                    (v[k + 1], Op::Deletion)
                } else {
                    (v[k - 1], Op::Addition)
                };
                let x = if op == Op::Deletion { from.x + 1 } else { from.x };
                // b_index never goes negative: each move preserves or advances it.
                let y = (x as isize + k) as usize;
                let run = snake(a, b, x, y, &eq);
                (x + run, trace.extend(from.node, op, run))
            };

            if k == end_k && x == m {
                let d = d as usize;
                let len = d + (max_d - d) / 2;
                log::debug!(
                    "myers: m={m} n={n} d={d} script_len={len} nodes={}",
                    trace.len()
                );
                return trace.script(node, len);
            }

            v[k] = Reach { x, node };
        }
        log::trace!("myers: round d={d} exhausted, nodes={}", trace.len());
    }

    unreachable!(
        "myers: no diagonal consumed both inputs within m+n={max_d} edits (m={m}, n={n})"
    )
}

/// Length of the run of equivalent pairs starting at `a[x]`, `b[y]`.
#[inline]
fn snake<A, B, F>(a: &[A], b: &[B], x: usize, y: usize, eq: &F) -> usize
where
    F: Fn(&A, &B) -> bool,
{
    match (a.get(x..), b.get(y..)) {
        (Some(a), Some(b)) => a
            .iter()
            .zip(b)
            .take_while(|&(p, q)| eq(p, q))
            .count(),
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
