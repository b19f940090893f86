//! # Symmetric Coalitions
//!
//! Equilibrium coalition structures for symmetric farsighted coalition
//! formation games with transferable worths, computed by the
//! backward-induction algorithm of Ray (2007), chapter 5.
//!
//! ## Features
//!
//! - **Exact solver**: builds the full equilibrium decision rule, then unrolls it
//! - **Partition generation**: amortized O(1) Kelleher–O'Sullivan enumeration
//! - **Memoized completion**: every substructure is completed at most once
//! - **Explicit tie-break**: the largest coalition wins among equal per-capita worths
//! - **JSON game files**: load worth tables and export solutions
//!
//! ## Quick Start
//!
//! ```
//! use symmetric_coalitions::{SymmetricGame, WorthTable};
//!
//! // Ray (2007), Example 5.2
//! let worths = WorthTable::from_entries([
//!     (3, vec![3, 1], 22.0),
//!     (1, vec![3, 1], 0.0),
//!     (2, vec![2, 1, 1], 16.0),
//!     (1, vec![2, 1, 1], 1.0),
//! ])
//! .unwrap();
//!
//! let game = SymmetricGame::new(4, worths).unwrap();
//! assert_eq!(game.solve().unwrap().parts(), &[2, 1, 1]);
//! ```
//!
//! ## Modules
//!
//! - [`coalition`]: Core solver (partitions, worth tables, decision rule)
//! - [`games`]: Reference and random games
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SymmetricGame::solve                         │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//!      ┌─────────────────────┐          ┌───────────────────┐
//!      │ DecisionRuleBuilder │ ───────▶ │   DecisionRule    │
//!      │  (backward sweep)   │  builds  │  complete/unroll  │
//!      └─────────────────────┘          └───────────────────┘
//!           │            │
//!           ▼            ▼
//!   ┌──────────────┐ ┌────────────┐
//!   │  Integer     │ │ WorthTable │
//!   │  Partitions  │ │            │
//!   └──────────────┘ └────────────┘
//! ```

#![warn(missing_docs)]

/// Coalition formation solver module.
///
/// This is the core module containing the backward-induction algorithm.
pub mod coalition;

/// Game catalogue module.
///
/// Contains worked examples and random games for testing and benchmarking.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use coalition::{
    CoalitionStructure, DecisionRule, DecisionRuleBuilder, GameConfig, GameError, GameFile,
    Solution, SolveStats, SymmetricGame, WorthTable,
};
