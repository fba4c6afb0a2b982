//! Provides a way to enumerate all orderings of index sequence.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/permutations_test.rs"]
mod permutations_test;

/// Returns an iterator over all permutations of `[0, size)` sequence. Each of `size!` orderings
/// is produced exactly once, for zero size a single empty permutation is produced.
pub fn get_permutations(size: usize) -> Permutations {
    Permutations { idxs: (0..size).collect(), swaps: vec![0; size], i: 0 }
}

/// An iterator which generates permutations using non-recursive Heap's algorithm. All swap state
/// is owned by iterator instance, so a new call of [`get_permutations`] starts from scratch.
#[derive(Clone, Debug)]
pub struct Permutations {
    idxs: Vec<usize>,
    swaps: Vec<usize>,
    i: usize,
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > 0 {
            loop {
                if self.i >= self.swaps.len() {
                    return None;
                }
                if self.swaps[self.i] < self.i {
                    break;
                }
                self.swaps[self.i] = 0;
                self.i += 1;
            }
            self.idxs.swap(self.i, (self.i & 1) * self.swaps[self.i]);
            self.swaps[self.i] += 1;
        }
        self.i = 1;
        Some(self.idxs.clone())
    }
}
