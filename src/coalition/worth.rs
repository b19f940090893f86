//! Coalition worth tables.
//!
//! A worth is keyed by a coalition size `s` and the completed structure `T`
//! the game ends in (with `s` one of the parts of `T`). It is the total
//! transferable worth the coalition of size `s` generates when the final
//! structure is `T` (Ray 2007, section 5.1).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coalition::config::GameError;
use crate::coalition::structure::CoalitionStructure;

/// A single worth table entry, in its serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorthEntry {
    /// Coalition size.
    pub size: usize,
    /// Completed coalition structure.
    pub structure: CoalitionStructure,
    /// Total worth of the coalition.
    pub worth: f64,
}

/// Mapping from (coalition size, completed structure) to worth.
///
/// The table is read-only to the solver. Lookups that miss are not errors;
/// the game's default worth applies, so a missing key and a key whose worth
/// equals the default are indistinguishable.
///
/// # Example
/// ```
/// use symmetric_coalitions::{CoalitionStructure, WorthTable};
///
/// let mut worths = WorthTable::new();
/// worths.insert(3, vec![3, 1], 22.0).unwrap();
/// assert_eq!(worths.get(3, &CoalitionStructure::new(vec![1, 3])), Some(22.0));
/// assert_eq!(worths.get(1, &CoalitionStructure::new(vec![3, 1])), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorthTable {
    /// completed structure -> coalition size -> worth
    worths: FxHashMap<CoalitionStructure, FxHashMap<usize, f64>>,
    len: usize,
}

impl WorthTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            worths: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            len: 0,
        }
    }

    /// Build a table from `(size, structure, worth)` triples.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (usize, S, f64)>,
        S: Into<CoalitionStructure>,
    {
        let mut table = Self::new();
        for (size, structure, worth) in entries {
            table.insert(size, structure, worth)?;
        }
        Ok(table)
    }

    /// Insert a worth, returning the previous worth for the key if any.
    ///
    /// The structure is canonicalized, so `[1, 3]` and `[3, 1]` are the same
    /// key. NaN and infinite worths are rejected.
    pub fn insert(
        &mut self,
        size: usize,
        structure: impl Into<CoalitionStructure>,
        worth: f64,
    ) -> Result<Option<f64>, GameError> {
        let structure = structure.into();
        if !worth.is_finite() {
            return Err(GameError::NonFiniteWorth {
                size,
                structure,
                worth,
            });
        }
        let previous = self.worths.entry(structure).or_default().insert(size, worth);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Look up the worth of a coalition of `size` in the completed `structure`.
    pub fn get(&self, size: usize, structure: &CoalitionStructure) -> Option<f64> {
        self.worths.get(structure)?.get(&size).copied()
    }

    /// Look up a worth, falling back to `default` for missing keys.
    pub fn get_or(&self, size: usize, structure: &CoalitionStructure, default: f64) -> f64 {
        self.get(size, structure).unwrap_or(default)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check that every key can actually be looked up in a game of `num_players`.
    pub fn validate_keys(&self, num_players: usize) -> Result<(), GameError> {
        for entry in self.entries() {
            let reason = if entry.size == 0 {
                Some("coalition size must be positive")
            } else if !entry.structure.is_partition_of(num_players) {
                Some("structure is not a partition of the player count")
            } else if !entry.structure.contains(entry.size) {
                Some("size is not a part of the structure")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(GameError::InvalidWorthKey {
                    size: entry.size,
                    structure: entry.structure,
                    reason,
                });
            }
        }
        Ok(())
    }

    /// All entries, sorted by structure then size for stable output.
    pub fn entries(&self) -> Vec<WorthEntry> {
        let mut entries: Vec<WorthEntry> = self
            .worths
            .iter()
            .flat_map(|(structure, by_size)| {
                by_size.iter().map(move |(&size, &worth)| WorthEntry {
                    size,
                    structure: structure.clone(),
                    worth,
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            b.structure
                .cmp(&a.structure)
                .then_with(|| b.size.cmp(&a.size))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_5_2() -> WorthTable {
        WorthTable::from_entries([
            (3, vec![3, 1], 22.0),
            (1, vec![3, 1], 0.0),
            (2, vec![2, 1, 1], 16.0),
            (1, vec![2, 1, 1], 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_is_order_insensitive() {
        let worths = example_5_2();
        assert_eq!(worths.len(), 4);
        assert_eq!(worths.get(2, &CoalitionStructure::new(vec![1, 2, 1])), Some(16.0));
        assert_eq!(worths.get(1, &CoalitionStructure::new(vec![1, 1, 2])), Some(1.0));
    }

    #[test]
    fn test_missing_uses_default() {
        let worths = example_5_2();
        let grand = CoalitionStructure::grand(4);
        assert_eq!(worths.get(4, &grand), None);
        assert_eq!(worths.get_or(4, &grand, 1.5), 1.5);
        assert_eq!(worths.get_or(3, &CoalitionStructure::new(vec![3, 1]), 1.5), 22.0);
    }

    #[test]
    fn test_insert_replaces() {
        let mut worths = WorthTable::new();
        assert_eq!(worths.insert(4, vec![4], 1.0).unwrap(), None);
        assert_eq!(worths.insert(4, vec![4], 2.0).unwrap(), Some(1.0));
        assert_eq!(worths.len(), 1);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut worths = WorthTable::new();
        assert!(matches!(
            worths.insert(1, vec![1], f64::NAN),
            Err(GameError::NonFiniteWorth { size: 1, .. })
        ));
        assert!(worths.insert(1, vec![1], f64::INFINITY).is_err());
        assert!(worths.is_empty());
    }

    #[test]
    fn test_validate_keys() {
        assert!(example_5_2().validate_keys(4).is_ok());

        // (3, 1) is not a partition of 5
        assert!(example_5_2().validate_keys(5).is_err());

        let mut worths = WorthTable::new();
        worths.insert(2, vec![3, 1], 1.0).unwrap();
        match worths.validate_keys(4) {
            Err(GameError::InvalidWorthKey { size, reason, .. }) => {
                assert_eq!(size, 2);
                assert_eq!(reason, "size is not a part of the structure");
            }
            other => panic!("unexpected result {:?}", other),
        }

        let mut worths = WorthTable::new();
        worths.insert(0, vec![4], 1.0).unwrap();
        assert!(worths.validate_keys(4).is_err());
    }

    #[test]
    fn test_entries_sorted() {
        let entries = example_5_2().entries();
        let keys: Vec<(usize, Vec<usize>)> = entries
            .iter()
            .map(|e| (e.size, e.structure.parts().to_vec()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (3, vec![3, 1]),
                (1, vec![3, 1]),
                (2, vec![2, 1, 1]),
                (1, vec![2, 1, 1]),
            ]
        );
    }
}
