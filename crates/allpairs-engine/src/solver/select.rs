//! Greedy next-case selection.
//!
//! One sweep assigns every parameter position in order `0..n`, committing
//! each choice before the next position is considered. For a candidate
//! value `x` of position `c`, every other position `v` gets a score:
//!
//! - `v == c`: 0 (placeholder),
//! - `v < c`: the count of the pair formed with the value already chosen
//!   for `v`,
//! - `v > c`: the lowest count of `(x, y)` over all `y` in `v`'s domain,
//!   i.e. the best outcome still reachable once `v` is assigned.
//!
//! The scores are sorted ascending and `x` is appended, giving a composite
//! key. The candidate with the lexicographically smallest key wins, so a
//! full tie goes to the lowest value index.

use tracing::trace;

use super::coverage::PairCoverageMatrix;
use super::{TestCase, SENTINEL_SCORE};

/// Pick the next test case against the current coverage.
pub fn find_next(matrix: &PairCoverageMatrix) -> TestCase {
    let n = matrix.parameters();
    let mut case = TestCase::unassigned(n);

    for c in 0..n {
        let mut best: Option<Vec<u32>> = None;
        for x in 0..matrix.domains()[c] {
            let key = composite_key(matrix, &case.values, c, x);
            if best.as_ref().map_or(true, |b| key < *b) {
                best = Some(key);
            }
        }

        // An empty domain leaves the position unassigned.
        if let Some(key) = best {
            case.values[c] = key.last().map(|&x| x as usize);
            case.needed[c] = key[1] != 0;
            trace!(position = c, key = ?key, "assigned position");
        }
    }

    case
}

/// Sorted score vector of candidate `x` at position `c`, with `x` appended.
pub fn composite_key(
    matrix: &PairCoverageMatrix,
    assigned: &[Option<usize>],
    c: usize,
    x: usize,
) -> Vec<u32> {
    let n = matrix.parameters();
    let mut key: Vec<u32> = (0..n)
        .map(|v| {
            if v == c {
                0
            } else if v < c {
                match assigned[v] {
                    Some(chosen) => matrix.cell_count(v, c, chosen, x),
                    None => SENTINEL_SCORE,
                }
            } else {
                matrix.min_count(c, v, x)
            }
        })
        .collect();
    key.sort_unstable();
    key.push(x as u32);
    key
}
