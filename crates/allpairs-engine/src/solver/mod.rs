pub mod coverage;
pub mod rng;
pub mod select;

/// Score meaning "no value assigned" or "no pairing possible".
///
/// Real coverage counts are bounded by the number of committed cases and
/// never come near this value.
pub const SENTINEL_SCORE: u32 = u32::MAX;

/// One test case: a value choice per parameter position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestCase {
    /// Chosen value index per sorted position. `None` only for a
    /// parameter whose domain is empty.
    pub values: Vec<Option<usize>>,
    /// Per position: whether the chosen value still had an under-covered
    /// pairing at selection time.
    pub needed: Vec<bool>,
}

impl TestCase {
    /// A case with every position unassigned.
    pub fn unassigned(parameters: usize) -> Self {
        Self {
            values: vec![None; parameters],
            needed: vec![false; parameters],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
