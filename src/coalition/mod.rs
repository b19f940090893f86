//! Symmetric coalition formation solver.
//!
//! This module computes the equilibrium coalition structure of a symmetric
//! farsighted coalition formation game with transferable worths, following
//! the backward-induction algorithm of Ray (2007), chapter 5.
//!
//! # Overview
//!
//! Players are identical, so a coalition structure is just a multiset of
//! coalition sizes. Coalitions form one at a time and are binding. The
//! algorithm:
//!
//! 1. With a single player left, the last coalition is a singleton.
//! 2. For every substructure, from the most complete to the empty one, try
//!    each admissible size for the next coalition, simulate the rest of the
//!    game with the rule already built, and keep the size maximizing the
//!    per-capita worth (largest size on ties).
//! 3. Apply the finished rule from the empty structure.
//!
//! # Usage
//!
//! ```
//! use symmetric_coalitions::coalition::{SymmetricGame, WorthTable};
//!
//! let game = SymmetricGame::new(5, WorthTable::new()).unwrap();
//! let structure = game.solve().unwrap();
//! assert_eq!(structure.parts(), &[5]);
//! ```
//!
//! # References
//!
//! - Ray, D. "A Game-Theoretic Perspective on Coalition Formation",
//!   Oxford University Press (2007), chapter 5.
//! - Kelleher, J., O'Sullivan, B. "Generating All Partitions: A Comparison
//!   of Two Encodings" (2009).

pub mod builder;
pub mod config;
pub mod file;
pub mod partition;
pub mod rule;
pub mod solver;
pub mod structure;
pub mod worth;

// Re-export main types for convenient access
pub use builder::DecisionRuleBuilder;
pub use config::{GameConfig, GameError, SolveStats};
pub use file::GameFile;
pub use partition::{partition_count, sorted_integer_partitions, IntegerPartitions};
pub use rule::{DecisionRule, RuleEntry};
pub use solver::{Solution, SymmetricGame};
pub use structure::CoalitionStructure;
pub use worth::{WorthEntry, WorthTable};
