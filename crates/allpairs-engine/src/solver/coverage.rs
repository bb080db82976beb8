//! Pair coverage bookkeeping.
//!
//! For every pair of parameter positions `c < v` and every value pair
//! `(x, y)` from their domains there is one [`CoverageCell`] recording
//! which committed cases contained that combination. Cells for a `(c, v)`
//! pair live in one contiguous block of a flat vector, row-major by `x`.

use super::{TestCase, SENTINEL_SCORE};

/// Coverage record of one `(c, v, x, y)` combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageCell {
    /// 1-based numbers of the cases that contained this pair, in commit order.
    cases: Vec<usize>,
}

impl CoverageCell {
    /// Times this pair has appeared in committed cases.
    pub fn count(&self) -> u32 {
        self.cases.len() as u32
    }

    pub fn cases(&self) -> &[usize] {
        &self.cases
    }

    pub fn is_covered(&self) -> bool {
        !self.cases.is_empty()
    }
}

/// Address of a coverage cell: positions `c < v`, value indices `x`, `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub c: usize,
    pub v: usize,
    pub x: usize,
    pub y: usize,
}

/// Dense matrix of coverage cells over every parameter pair.
#[derive(Debug, Clone)]
pub struct PairCoverageMatrix {
    domains: Vec<usize>,
    /// Block start in `cells` for pair `(c, v)`, indexed `c * n + v`.
    offsets: Vec<usize>,
    cells: Vec<CoverageCell>,
    /// Cells with a zero count.
    uncovered: usize,
}

impl PairCoverageMatrix {
    /// Allocate a zero cell for every `(c < v, x, y)` combination.
    pub fn new(domains: &[usize]) -> Self {
        let n = domains.len();
        let mut offsets = vec![0; n * n];
        let mut total = 0;
        for c in 0..n {
            for v in (c + 1)..n {
                offsets[c * n + v] = total;
                total += domains[c] * domains[v];
            }
        }

        Self {
            domains: domains.to_vec(),
            offsets,
            cells: vec![CoverageCell::default(); total],
            uncovered: total,
        }
    }

    /// Number of parameter positions.
    pub fn parameters(&self) -> usize {
        self.domains.len()
    }

    /// Domain size per position.
    pub fn domains(&self) -> &[usize] {
        &self.domains
    }

    /// Total number of cells.
    pub fn cell_total(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells never covered.
    pub fn uncovered(&self) -> usize {
        self.uncovered
    }

    /// True iff some cell still has a zero count.
    pub fn has_uncovered(&self) -> bool {
        self.uncovered > 0
    }

    fn index(&self, c: usize, v: usize, x: usize, y: usize) -> usize {
        assert!(c < v, "coverage cells are keyed by c < v (got {c}, {v})");
        assert!(
            x < self.domains[c] && y < self.domains[v],
            "value indices ({x}, {y}) out of range for positions ({c}, {v}) with domains ({}, {})",
            self.domains[c],
            self.domains[v]
        );
        self.offsets[c * self.domains.len() + v] + x * self.domains[v] + y
    }

    /// The cell for `(c, v, x, y)`. Panics if the address is out of range.
    pub fn cell(&self, c: usize, v: usize, x: usize, y: usize) -> &CoverageCell {
        &self.cells[self.index(c, v, x, y)]
    }

    pub fn cell_count(&self, c: usize, v: usize, x: usize, y: usize) -> u32 {
        self.cell(c, v, x, y).count()
    }

    pub fn cell_cases(&self, c: usize, v: usize, x: usize, y: usize) -> &[usize] {
        self.cell(c, v, x, y).cases()
    }

    /// Lowest count among the pairs `(x, y)` for every `y` in `v`'s domain.
    ///
    /// [`SENTINEL_SCORE`] when `v` has no values.
    pub fn min_count(&self, c: usize, v: usize, x: usize) -> u32 {
        let width = self.domains[v];
        if width == 0 {
            return SENTINEL_SCORE;
        }
        let start = self.index(c, v, x, 0);
        self.cells[start..start + width]
            .iter()
            .map(CoverageCell::count)
            .min()
            .unwrap_or(SENTINEL_SCORE)
    }

    /// Number of pairs in `case` that no committed case has covered yet.
    pub fn score(&self, case: &TestCase) -> usize {
        self.case_pairs(case)
            .filter(|&(c, v, x, y)| !self.cell(c, v, x, y).is_covered())
            .count()
    }

    /// Commit `case` as case number `case_number`.
    ///
    /// Returns how many cells this case covered for the first time. Panics if
    /// a value index lies outside its position's domain; nothing is recorded
    /// in that case.
    pub fn record(&mut self, case: &TestCase, case_number: usize) -> usize {
        let indices: Vec<usize> = self
            .case_pairs(case)
            .map(|(c, v, x, y)| self.index(c, v, x, y))
            .collect();
        let mut newly_covered = 0;
        for index in indices {
            let cell = &mut self.cells[index];
            if cell.cases.is_empty() {
                newly_covered += 1;
            }
            cell.cases.push(case_number);
        }
        self.uncovered -= newly_covered;
        newly_covered
    }

    /// Every cell in `(c, v, x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = (PairKey, &CoverageCell)> + '_ {
        let n = self.domains.len();
        (0..n)
            .flat_map(move |c| ((c + 1)..n).map(move |v| (c, v)))
            .flat_map(move |(c, v)| {
                (0..self.domains[c])
                    .flat_map(move |x| (0..self.domains[v]).map(move |y| PairKey { c, v, x, y }))
            })
            .map(move |key| (key, self.cell(key.c, key.v, key.x, key.y)))
    }

    /// The `(c, v, x, y)` pairs contained in a case; unassigned positions
    /// contribute nothing.
    fn case_pairs<'a>(
        &self,
        case: &'a TestCase,
    ) -> impl Iterator<Item = (usize, usize, usize, usize)> + 'a {
        let n = self.domains.len().min(case.values.len());
        (0..n)
            .flat_map(move |c| ((c + 1)..n).map(move |v| (c, v)))
            .filter_map(move |(c, v)| match (case.values[c], case.values[v]) {
                (Some(x), Some(y)) => Some((c, v, x, y)),
                _ => None,
            })
    }
}
