//! Canonical coalition structures.
//!
//! In a symmetric game only coalition sizes matter, so a coalition structure
//! is a multiset of positive sizes. [`CoalitionStructure`] stores it sorted
//! in non-increasing order, which makes structures with the same multiset
//! equal and hash identically. Every lookup in the decision rule and the
//! worth table goes through this canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coalition structure in canonical (non-increasing) order.
///
/// # Example
/// ```
/// use symmetric_coalitions::CoalitionStructure;
///
/// let a = CoalitionStructure::new(vec![1, 2, 1]);
/// let b = CoalitionStructure::new(vec![2, 1, 1]);
/// assert_eq!(a, b);
/// assert_eq!(a.parts(), &[2, 1, 1]);
/// assert_eq!(a.to_string(), "(2, 1, 1)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct CoalitionStructure {
    parts: Vec<usize>,
    total: usize,
}

impl CoalitionStructure {
    /// Build a structure from coalition sizes in any order.
    pub fn new(mut parts: Vec<usize>) -> Self {
        canonicalize(&mut parts);
        let total = parts.iter().sum();
        Self { parts, total }
    }

    /// The empty structure: no coalition has formed yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The grand coalition of `num_players`.
    pub fn grand(num_players: usize) -> Self {
        Self::new(vec![num_players])
    }

    /// Coalition sizes, largest first.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Number of players already assigned to coalitions.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of coalitions.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if no coalition has formed.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// True if a coalition of `size` is part of this structure.
    pub fn contains(&self, size: usize) -> bool {
        self.parts.binary_search_by(|p| size.cmp(p)).is_ok()
    }

    /// The structure obtained when a coalition of `size` forms next.
    pub fn with(&self, size: usize) -> Self {
        let at = self.parts.partition_point(|&p| p >= size);
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.extend_from_slice(&self.parts[..at]);
        parts.push(size);
        parts.extend_from_slice(&self.parts[at..]);
        Self {
            parts,
            total: self.total + size,
        }
    }

    /// True if every part is positive and the parts sum to `n`.
    pub fn is_partition_of(&self, n: usize) -> bool {
        self.total == n && self.parts.iter().all(|&p| p > 0)
    }

    /// Iterate over coalition sizes, largest first.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.parts.iter()
    }
}

/// Sort coalition sizes into canonical non-increasing order, in place.
pub fn canonicalize(parts: &mut [usize]) {
    parts.sort_unstable_by(|a, b| b.cmp(a));
}

impl From<Vec<usize>> for CoalitionStructure {
    fn from(parts: Vec<usize>) -> Self {
        Self::new(parts)
    }
}

impl From<CoalitionStructure> for Vec<usize> {
    fn from(structure: CoalitionStructure) -> Self {
        structure.parts
    }
}

impl<'a> IntoIterator for &'a CoalitionStructure {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl fmt::Display for CoalitionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let s = CoalitionStructure::new(vec![1, 3, 2, 1]);
        assert_eq!(s.parts(), &[3, 2, 1, 1]);
        assert_eq!(s.total(), 7);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_same_multiset_same_key() {
        use std::collections::HashSet;

        let mut keys = HashSet::new();
        keys.insert(CoalitionStructure::new(vec![1, 2, 1]));
        keys.insert(CoalitionStructure::new(vec![2, 1, 1]));
        keys.insert(CoalitionStructure::new(vec![1, 1, 2]));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_with_keeps_canonical_order() {
        let s = CoalitionStructure::new(vec![3, 1]);
        assert_eq!(s.with(2), CoalitionStructure::new(vec![3, 2, 1]));
        assert_eq!(s.with(4).parts(), &[4, 3, 1]);
        assert_eq!(s.with(1).parts(), &[3, 1, 1]);
        assert_eq!(s.with(2).total(), 6);
        assert_eq!(CoalitionStructure::empty().with(5).parts(), &[5]);
    }

    #[test]
    fn test_contains() {
        let s = CoalitionStructure::new(vec![2, 1, 1]);
        assert!(s.contains(2));
        assert!(s.contains(1));
        assert!(!s.contains(3));
        assert!(!CoalitionStructure::empty().contains(1));
    }

    #[test]
    fn test_is_partition_of() {
        assert!(CoalitionStructure::new(vec![3, 1]).is_partition_of(4));
        assert!(!CoalitionStructure::new(vec![3, 1]).is_partition_of(5));
        assert!(!CoalitionStructure::new(vec![4, 0]).is_partition_of(4));
        assert!(CoalitionStructure::empty().is_partition_of(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(CoalitionStructure::empty().to_string(), "()");
        assert_eq!(CoalitionStructure::grand(4).to_string(), "(4)");
        assert_eq!(CoalitionStructure::new(vec![1, 2, 1]).to_string(), "(2, 1, 1)");
    }

    #[test]
    fn test_serde_canonicalizes() {
        let s: CoalitionStructure = serde_json::from_str("[1, 3, 1]").unwrap();
        assert_eq!(s.parts(), &[3, 1, 1]);
        assert_eq!(s.total(), 5);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[3,1,1]");
    }
}
