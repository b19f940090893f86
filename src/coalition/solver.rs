//! Symmetric coalition formation game solver.
//!
//! [`SymmetricGame`] wires the pieces together: it builds the decision rule
//! by backward induction and then unrolls it from the empty structure to
//! obtain the equilibrium coalition structure.

use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::coalition::builder::DecisionRuleBuilder;
use crate::coalition::config::{GameConfig, GameError, SolveStats};
use crate::coalition::rule::{DecisionRule, RuleEntry};
use crate::coalition::structure::CoalitionStructure;
use crate::coalition::worth::WorthTable;

/// A symmetric farsighted coalition formation game (Ray 2007, chapter 5).
///
/// # Example
///
/// Ray's Example 5.2 (p. 62):
/// ```
/// use symmetric_coalitions::{CoalitionStructure, SymmetricGame, WorthTable};
///
/// let worths = WorthTable::from_entries([
///     (3, vec![3, 1], 22.0),
///     (1, vec![3, 1], 0.0),
///     (2, vec![2, 1, 1], 16.0),
///     (1, vec![2, 1, 1], 1.0),
/// ])
/// .unwrap();
///
/// let game = SymmetricGame::new(4, worths).unwrap();
/// assert_eq!(game.solve().unwrap(), CoalitionStructure::new(vec![2, 1, 1]));
/// ```
#[derive(Debug, Clone)]
pub struct SymmetricGame {
    config: GameConfig,
    worths: WorthTable,
}

impl SymmetricGame {
    /// Create a game of `num_players` with a default worth of 0.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] if `num_players` is 0.
    pub fn new(num_players: usize, worths: WorthTable) -> Result<Self, GameError> {
        Self::from_config(GameConfig::new(num_players), worths)
    }

    /// Create a game from a configuration and a worth table.
    pub fn from_config(config: GameConfig, worths: WorthTable) -> Result<Self, GameError> {
        config.validate()?;
        if config.validate_worth_keys {
            worths.validate_keys(config.num_players)?;
        }
        Ok(Self { config, worths })
    }

    /// Return the same game with a different default worth.
    pub fn with_default_worth(self, default_worth: f64) -> Result<Self, GameError> {
        let config = self.config.with_default_worth(default_worth);
        Self::from_config(config, self.worths)
    }

    /// Total number of players.
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    /// Worth used for keys missing from the table.
    pub fn default_worth(&self) -> f64 {
        self.config.default_worth
    }

    /// Game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The worth table.
    pub fn worths(&self) -> &WorthTable {
        &self.worths
    }

    /// Build the equilibrium decision rule.
    pub fn decision_rule(&self) -> Result<DecisionRule, GameError> {
        self.builder().build()
    }

    /// Compute the equilibrium coalition structure.
    ///
    /// Rebuilds the decision rule on every call; repeated calls return the
    /// same structure.
    pub fn solve(&self) -> Result<CoalitionStructure, GameError> {
        self.decision_rule()?.unroll()
    }

    /// Compute the equilibrium together with the rule, formation path and statistics.
    pub fn solve_detailed(&self) -> Result<Solution, GameError> {
        let start_time = Instant::now();
        info!(
            "solving symmetric game: {} players, {} worths, default worth {}",
            self.config.num_players,
            self.worths.len(),
            self.config.default_worth
        );

        let (rule, mut stats) = self.builder().build_with_stats()?;
        let formation_path = rule.formation_path()?;
        let structure = rule.unroll()?;

        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "equilibrium {} ({} rule entries, {} candidates, {:.3}s)",
            structure, stats.rule_entries, stats.candidates_evaluated, stats.elapsed_seconds
        );

        Ok(Solution {
            structure,
            formation_path,
            rule: rule.entries(),
            stats,
        })
    }

    fn builder(&self) -> DecisionRuleBuilder<'_> {
        DecisionRuleBuilder::new(
            self.config.num_players,
            &self.worths,
            self.config.default_worth,
        )
    }
}

/// Everything a solve produces, in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Equilibrium coalition structure.
    pub structure: CoalitionStructure,
    /// Coalition sizes in the order they form.
    pub formation_path: Vec<usize>,
    /// The full decision rule.
    pub rule: Vec<RuleEntry>,
    /// Statistics.
    pub stats: SolveStats,
}

impl Solution {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
