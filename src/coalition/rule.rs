//! The decision rule of a symmetric coalition formation game.
//!
//! A decision rule maps every substructure (the coalitions that have already
//! formed, irrevocably) to the size of the next coalition to form. It is
//! built once by [`DecisionRuleBuilder`](crate::coalition::DecisionRuleBuilder)
//! and immutable afterwards.
//!
//! Applying the rule repeatedly completes any partial structure; applied
//! from the empty structure it yields the equilibrium coalition structure.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coalition::config::GameError;
use crate::coalition::structure::CoalitionStructure;

/// One rule entry, in its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Coalitions already formed.
    pub substructure: CoalitionStructure,
    /// Size of the coalition that forms next.
    pub next_size: usize,
}

/// Equilibrium decision rule: substructure -> size of the next coalition.
///
/// Invariants upheld by the builder:
/// - every key sums to strictly less than the player count;
/// - every value lies in `1..=num_players - key.total()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionRule {
    num_players: usize,
    next: FxHashMap<CoalitionStructure, usize>,
}

impl DecisionRule {
    /// Create an empty rule for a game of `num_players`.
    pub(crate) fn with_capacity(num_players: usize, capacity: usize) -> Self {
        Self {
            num_players,
            next: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record the next coalition size for a substructure.
    pub(crate) fn insert(&mut self, substructure: CoalitionStructure, next_size: usize) {
        debug_assert!(substructure.total() < self.num_players);
        debug_assert!(next_size >= 1 && next_size <= self.num_players - substructure.total());
        self.next.insert(substructure, next_size);
    }

    /// Size of the coalition that forms after `substructure`, if the rule covers it.
    pub fn next_size(&self, substructure: &CoalitionStructure) -> Option<usize> {
        self.next.get(substructure).copied()
    }

    /// Total number of players of the game the rule was built for.
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Number of substructures covered.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// True if the rule covers no substructure.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Iterate over `(substructure, next size)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&CoalitionStructure, usize)> {
        self.next.iter().map(|(k, &v)| (k, v))
    }

    /// All entries, ordered by substructure total then lexicographically.
    pub fn entries(&self) -> Vec<RuleEntry> {
        let mut entries: Vec<RuleEntry> = self
            .iter()
            .map(|(substructure, next_size)| RuleEntry {
                substructure: substructure.clone(),
                next_size,
            })
            .collect();
        entries.sort_by(|a, b| {
            a.substructure
                .total()
                .cmp(&b.substructure.total())
                .then_with(|| b.substructure.cmp(&a.substructure))
        });
        entries
    }

    /// Complete a partial structure by following the rule until every player
    /// belongs to a coalition.
    ///
    /// A structure that already covers all players is returned unchanged.
    pub fn complete(&self, partial: CoalitionStructure) -> Result<CoalitionStructure, GameError> {
        let mut current = partial;
        while current.total() < self.num_players {
            let size = self
                .next_size(&current)
                .ok_or_else(|| GameError::MissingRule(current.clone()))?;
            current = current.with(size);
        }
        Ok(current)
    }

    /// Apply the rule from the empty structure: the equilibrium coalition structure.
    pub fn unroll(&self) -> Result<CoalitionStructure, GameError> {
        self.complete(CoalitionStructure::empty())
    }

    /// Coalition sizes in the order they form when the rule is unrolled.
    ///
    /// Sorting the path descending gives [`DecisionRule::unroll`].
    pub fn formation_path(&self) -> Result<Vec<usize>, GameError> {
        let mut path = Vec::new();
        let mut current = CoalitionStructure::empty();
        while current.total() < self.num_players {
            let size = self
                .next_size(&current)
                .ok_or_else(|| GameError::MissingRule(current.clone()))?;
            path.push(size);
            current = current.with(size);
        }
        Ok(path)
    }
}
