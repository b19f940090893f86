//! Backward-induction construction of the decision rule (Ray 2007, pp. 55-56).
//!
//! The builder visits substructures in decreasing order of the number of
//! players already assigned (`m = n - 1, ..., 0`). For each substructure it
//! tries every admissible size `k` for the next coalition, completes the
//! structure by simulating future play under the rule built so far, and
//! keeps the size with the highest per-capita worth.
//!
//! Completion only ever consults substructures with a strictly larger total
//! than the one being decided, which were all finalized by earlier levels.
//! The table is therefore filled bottom-up without recursion.

use std::cmp::Ordering;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::coalition::config::{GameError, SolveStats};
use crate::coalition::partition::{partition_count, substructures};
use crate::coalition::rule::DecisionRule;
use crate::coalition::structure::CoalitionStructure;
use crate::coalition::worth::WorthTable;

/// A candidate size for the next coalition, with its evaluation.
#[derive(Debug, Clone)]
struct Candidate {
    size: usize,
    average: f64,
}

impl Candidate {
    /// Tie-break policy: higher per-capita worth wins, and among equal
    /// per-capita worths the larger coalition wins.
    ///
    /// Independent of the order in which sizes are enumerated.
    fn beats(&self, incumbent: &Candidate) -> bool {
        match self.average.partial_cmp(&incumbent.average) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.size > incumbent.size,
            _ => false,
        }
    }
}

/// Builds the equilibrium decision rule of a symmetric game.
///
/// # Example
/// ```
/// use symmetric_coalitions::{CoalitionStructure, DecisionRuleBuilder, WorthTable};
///
/// let worths = WorthTable::new();
/// let rule = DecisionRuleBuilder::new(3, &worths, 0.0).build().unwrap();
///
/// // With every worth at the default, ties go to the largest coalition.
/// assert_eq!(rule.next_size(&CoalitionStructure::empty()), Some(3));
/// ```
pub struct DecisionRuleBuilder<'a> {
    num_players: usize,
    worths: &'a WorthTable,
    default_worth: f64,
    rule: DecisionRule,
    /// substructure -> the completed structure it leads to under `rule`
    completions: FxHashMap<CoalitionStructure, CoalitionStructure>,
    stats: SolveStats,
}

impl<'a> DecisionRuleBuilder<'a> {
    /// Create a builder for a game of `num_players`.
    pub fn new(num_players: usize, worths: &'a WorthTable, default_worth: f64) -> Self {
        // One entry per partition of every m < n.
        let capacity = (0..num_players)
            .map(|m| partition_count(m) as usize)
            .sum::<usize>();

        Self {
            num_players,
            worths,
            default_worth,
            rule: DecisionRule::with_capacity(num_players, capacity),
            completions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            stats: SolveStats::new(num_players),
        }
    }

    /// Build the decision rule.
    pub fn build(self) -> Result<DecisionRule, GameError> {
        self.build_with_stats().map(|(rule, _)| rule)
    }

    /// Build the decision rule and report lookup statistics.
    pub fn build_with_stats(mut self) -> Result<(DecisionRule, SolveStats), GameError> {
        let n = self.num_players;
        if n < 1 {
            return Err(GameError::InvalidConfiguration(
                "cannot build a decision rule for zero players".to_string(),
            ));
        }

        // Step 1: with a single player left, the last coalition is a singleton.
        for coalition in substructures(n - 1) {
            self.record(coalition, 1)?;
        }

        // Step 2: sweep the remaining levels backwards.
        for m in (0..n).rev() {
            let level = substructures(m);
            debug!(
                "level m={}: {} substructures, sizes 1..={}",
                m,
                level.len(),
                n - m
            );

            for coalition in level {
                let best = self.best_next_size(&coalition, n - m)?;
                trace!(
                    "{} -> {} (per-capita worth {})",
                    coalition,
                    best.size,
                    best.average
                );
                self.record(coalition, best.size)?;
            }
        }

        self.stats.rule_entries = self.rule.len();
        Ok((self.rule, self.stats))
    }

    /// Step 3: the size of the next coalition maximizing per-capita worth.
    fn best_next_size(
        &mut self,
        coalition: &CoalitionStructure,
        max_size: usize,
    ) -> Result<Candidate, GameError> {
        let mut best = self.evaluate(coalition, 1)?;
        for size in 2..=max_size {
            let candidate = self.evaluate(coalition, size)?;
            if candidate.beats(&best) {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Per-capita worth of forming a coalition of `size` after `coalition`.
    fn evaluate(&mut self, coalition: &CoalitionStructure, size: usize) -> Result<Candidate, GameError> {
        let completed = self.complete(coalition.with(size))?;
        self.stats.candidates_evaluated += 1;

        let worth = match self.worths.get(size, &completed) {
            Some(worth) => {
                self.stats.worth_hits += 1;
                worth
            }
            None => {
                self.stats.worth_misses += 1;
                self.default_worth
            }
        };

        Ok(Candidate {
            size,
            average: worth / size as f64,
        })
    }

    /// Complete a partial structure with the rule built so far.
    ///
    /// Walks the rule one coalition at a time but stops at the first
    /// substructure whose completion is already memoized.
    fn complete(&self, partial: CoalitionStructure) -> Result<CoalitionStructure, GameError> {
        let mut current = partial;
        while current.total() < self.num_players {
            if let Some(done) = self.completions.get(&current) {
                return Ok(done.clone());
            }
            let size = self
                .rule
                .next_size(&current)
                .ok_or_else(|| GameError::MissingRule(current.clone()))?;
            current = current.with(size);
        }
        Ok(current)
    }

    /// Fix the rule for `coalition` and memoize where it leads.
    fn record(&mut self, coalition: CoalitionStructure, size: usize) -> Result<(), GameError> {
        let completed = self.complete(coalition.with(size))?;
        self.rule.insert(coalition.clone(), size);
        self.completions.insert(coalition, completed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coalition::partition::sorted_integer_partitions;

    fn example_5_2() -> WorthTable {
        WorthTable::from_entries([
            (3, vec![3, 1], 22.0),
            (1, vec![3, 1], 0.0),
            (2, vec![2, 1, 1], 16.0),
            (1, vec![2, 1, 1], 1.0),
        ])
        .unwrap()
    }

    fn key(parts: &[usize]) -> CoalitionStructure {
        CoalitionStructure::new(parts.to_vec())
    }

    #[test]
    fn test_tie_break_prefers_larger_size() {
        let small = Candidate { size: 1, average: 2.0 };
        let large = Candidate { size: 3, average: 2.0 };
        assert!(large.beats(&small));
        assert!(!small.beats(&large));

        let better = Candidate { size: 1, average: 2.5 };
        assert!(better.beats(&large));
        assert!(!large.beats(&better));
    }

    #[test]
    fn test_example_5_2_rule() {
        let worths = example_5_2();
        let rule = DecisionRuleBuilder::new(4, &worths, 0.0).build().unwrap();

        assert_eq!(rule.next_size(&key(&[])), Some(2));
        assert_eq!(rule.next_size(&key(&[1])), Some(2));
        assert_eq!(rule.next_size(&key(&[2])), Some(1));
        assert_eq!(rule.next_size(&key(&[1, 1])), Some(2));
        assert_eq!(rule.unroll().unwrap(), key(&[2, 1, 1]));
    }

    #[test]
    fn test_base_case_is_singleton() {
        let worths = WorthTable::new();
        for n in 1..=8 {
            let rule = DecisionRuleBuilder::new(n, &worths, 3.0).build().unwrap();
            for partition in sorted_integer_partitions(n - 1) {
                let substructure = if n == 1 { key(&[]) } else { key(&partition) };
                assert_eq!(rule.next_size(&substructure), Some(1), "n={} key={}", n, substructure);
            }
        }
    }

    #[test]
    fn test_rule_covers_every_substructure() {
        let worths = WorthTable::new();
        for n in 1..=10 {
            let rule = DecisionRuleBuilder::new(n, &worths, 0.0).build().unwrap();
            let expected: u64 = (0..n).map(partition_count).sum();
            assert_eq!(rule.len() as u64, expected, "n={}", n);

            for (substructure, size) in rule.iter() {
                assert!(substructure.total() < n);
                assert!(size >= 1 && size <= n - substructure.total());
            }
        }
    }

    #[test]
    fn test_empty_table_ties_to_remaining_players() {
        let worths = WorthTable::new();
        let rule = DecisionRuleBuilder::new(6, &worths, 0.0).build().unwrap();
        for (substructure, size) in rule.iter() {
            assert_eq!(size, 6 - substructure.total());
        }
    }

    #[test]
    fn test_stats() {
        let worths = example_5_2();
        let (rule, stats) = DecisionRuleBuilder::new(4, &worths, 0.0)
            .build_with_stats()
            .unwrap();
        assert_eq!(stats.num_players, 4);
        assert_eq!(stats.rule_entries, rule.len());
        assert_eq!(rule.len(), 1 + 1 + 2 + 3);
        assert_eq!(
            stats.candidates_evaluated,
            stats.worth_hits + stats.worth_misses
        );
        // m=3: 3 substructures x 1 size, m=2: 2 x 2, m=1: 1 x 3, m=0: 1 x 4
        assert_eq!(stats.candidates_evaluated, 3 + 4 + 3 + 4);
        assert!(stats.worth_hits > 0);
    }

    #[test]
    fn test_default_worth_is_per_capita_scaled() {
        // Every coalition worth defaults to 6: a singleton earns 6 per head,
        // larger coalitions strictly less, so everybody stays alone.
        let worths = WorthTable::new();
        let rule = DecisionRuleBuilder::new(4, &worths, 6.0).build().unwrap();
        assert_eq!(rule.unroll().unwrap(), key(&[1, 1, 1, 1]));
    }

    #[test]
    fn test_zero_players_rejected() {
        let worths = WorthTable::new();
        assert!(matches!(
            DecisionRuleBuilder::new(0, &worths, 0.0).build(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
