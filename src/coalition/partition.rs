//! Integer partition generation.
//!
//! Every intermediate coalition substructure of a symmetric game is an
//! integer partition of the number of players already assigned, so the
//! decision rule builder enumerates partitions of every `m < n`.
//!
//! The generator is Kelleher and O'Sullivan's accelerated ascending
//! composition algorithm: a single working array plus two index pointers,
//! amortized O(1) work per partition.
//!
//! # Example
//! ```
//! use symmetric_coalitions::coalition::partition::IntegerPartitions;
//!
//! let parts: Vec<Vec<usize>> = IntegerPartitions::new(3).collect();
//! assert_eq!(parts, vec![vec![1, 1, 1], vec![1, 2], vec![3]]);
//! ```

use crate::coalition::structure::CoalitionStructure;

/// Where the generator resumes on the next call to `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Only used for `n = 0`, which yields the single partition `[0]`.
    Zero,
    /// Backtrack one level and split off the smallest admissible parts.
    Descend,
    /// Emit the two-part tails `x + y` for the current prefix.
    Split,
    /// Exhausted.
    Done,
}

/// Lazy iterator over all partitions of `n`.
///
/// Each item is an ascending `Vec<usize>` summing to `n`. The sequence is
/// finite, free of duplicates and deterministic; it contains exactly `p(n)`
/// items. Cloning the iterator (or calling [`IntegerPartitions::new`]
/// again) restarts the enumeration.
#[derive(Debug, Clone)]
pub struct IntegerPartitions {
    a: Vec<usize>,
    k: usize,
    x: usize,
    y: usize,
    l: usize,
    stage: Stage,
}

impl IntegerPartitions {
    /// Create a generator for the partitions of `n`.
    pub fn new(n: usize) -> Self {
        if n == 0 {
            return Self {
                a: vec![0],
                k: 0,
                x: 0,
                y: 0,
                l: 0,
                stage: Stage::Zero,
            };
        }

        Self {
            a: vec![0; n + 1],
            k: 1,
            x: 0,
            y: n - 1,
            l: 0,
            stage: Stage::Descend,
        }
    }
}

impl Iterator for IntegerPartitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stage {
                Stage::Zero => {
                    self.stage = Stage::Done;
                    return Some(vec![0]);
                }
                Stage::Descend => {
                    if self.k == 0 {
                        self.stage = Stage::Done;
                        return None;
                    }

                    self.x = self.a[self.k - 1] + 1;
                    self.k -= 1;
                    while 2 * self.x <= self.y {
                        self.a[self.k] = self.x;
                        self.y -= self.x;
                        self.k += 1;
                    }
                    self.l = self.k + 1;
                    self.stage = Stage::Split;
                }
                Stage::Split => {
                    if self.x <= self.y {
                        self.a[self.k] = self.x;
                        self.a[self.l] = self.y;
                        let partition = self.a[..self.k + 2].to_vec();
                        self.x += 1;
                        self.y -= 1;
                        return Some(partition);
                    }

                    // x + y >= 1 here, so the new y cannot underflow
                    self.a[self.k] = self.x + self.y;
                    self.y = self.x + self.y - 1;
                    self.stage = Stage::Descend;
                    return Some(self.a[..self.k + 1].to_vec());
                }
                Stage::Done => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for IntegerPartitions {}

/// All partitions of `n`, each sorted descending.
///
/// Follows the generator's convention for `n = 0` and returns `[[0]]`.
pub fn sorted_integer_partitions(n: usize) -> Vec<Vec<usize>> {
    IntegerPartitions::new(n)
        .map(|mut partition| {
            partition.sort_unstable_by(|a, b| b.cmp(a));
            partition
        })
        .collect()
}

/// Canonical substructures whose parts sum to `m`.
///
/// For `m = 0` the only substructure is the empty one (no coalition has
/// formed yet), not the degenerate `[0]` partition.
pub fn substructures(m: usize) -> Vec<CoalitionStructure> {
    if m == 0 {
        return vec![CoalitionStructure::empty()];
    }
    IntegerPartitions::new(m).map(CoalitionStructure::new).collect()
}

/// The partition number `p(n)`, computed by dynamic programming over part sizes.
///
/// `p(0) = 1`. Overflows `u64` past `n = 405`.
pub fn partition_count(n: usize) -> u64 {
    let mut counts = vec![0u64; n + 1];
    counts[0] = 1;
    for part in 1..=n {
        for total in part..=n {
            counts[total] += counts[total - part];
        }
    }
    counts[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_and_one() {
        assert_eq!(IntegerPartitions::new(0).collect::<Vec<_>>(), vec![vec![0]]);
        assert_eq!(IntegerPartitions::new(1).collect::<Vec<_>>(), vec![vec![1]]);
    }

    #[test]
    fn test_three() {
        let mut parts: Vec<Vec<usize>> = IntegerPartitions::new(3).collect();
        parts.sort();
        assert_eq!(parts, vec![vec![1, 1, 1], vec![1, 2], vec![3]]);

        assert_eq!(
            sorted_integer_partitions(3),
            vec![vec![1, 1, 1], vec![2, 1], vec![3]]
        );
    }

    #[test]
    fn test_sorted_zero() {
        assert_eq!(sorted_integer_partitions(0), vec![vec![0]]);
        assert_eq!(sorted_integer_partitions(1), vec![vec![1]]);
    }

    #[test]
    fn test_partitions_are_ascending_and_sum_to_n() {
        for n in 1..=20 {
            for partition in IntegerPartitions::new(n) {
                assert_eq!(partition.iter().sum::<usize>(), n, "partition {:?}", partition);
                assert!(partition.windows(2).all(|w| w[0] <= w[1]));
                assert!(partition.iter().all(|&p| p > 0));
            }
        }
    }

    #[test]
    fn test_count_matches_partition_number() {
        // OEIS A000041
        let expected = [1u64, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77, 101, 135, 176];
        for (n, &p) in expected.iter().enumerate() {
            assert_eq!(partition_count(n), p, "p({})", n);

            let distinct: HashSet<Vec<usize>> = sorted_integer_partitions(n).into_iter().collect();
            assert_eq!(distinct.len() as u64, p, "distinct partitions of {}", n);
            assert_eq!(IntegerPartitions::new(n).count() as u64, p);
        }
        assert_eq!(partition_count(30), 5604);
        assert_eq!(IntegerPartitions::new(30).count(), 5604);
    }

    #[test]
    fn test_restartable() {
        let generator = IntegerPartitions::new(7);
        let first: Vec<_> = generator.clone().collect();
        let second: Vec<_> = generator.collect();
        assert_eq!(first, second);
        assert_eq!(first, IntegerPartitions::new(7).collect::<Vec<_>>());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut generator = IntegerPartitions::new(2);
        assert!(generator.next().is_some());
        assert!(generator.next().is_some());
        assert!(generator.next().is_none());
        assert!(generator.next().is_none());
    }

    #[test]
    fn test_substructures() {
        assert_eq!(substructures(0), vec![CoalitionStructure::empty()]);

        let level: HashSet<CoalitionStructure> = substructures(4).into_iter().collect();
        let expected: HashSet<CoalitionStructure> = [
            vec![4],
            vec![3, 1],
            vec![2, 2],
            vec![2, 1, 1],
            vec![1, 1, 1, 1],
        ]
        .into_iter()
        .map(CoalitionStructure::new)
        .collect();
        assert_eq!(level, expected);
    }
}
