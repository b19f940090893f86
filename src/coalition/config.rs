//! Configuration, errors and statistics for the coalition game solver.

use serde::{Deserialize, Serialize};

use crate::coalition::structure::CoalitionStructure;

/// Configuration of a symmetric coalition formation game.
///
/// The worth table itself is supplied separately; this struct carries the
/// scalar parameters that accompany it.
///
/// # Example
/// ```
/// use symmetric_coalitions::coalition::GameConfig;
///
/// let config = GameConfig::new(4).with_default_worth(0.5);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total number of players. Must be at least 1.
    pub num_players: usize,

    /// Worth used for any (size, structure) pair missing from the table.
    ///
    /// Like a listed worth, it is divided by the coalition size to get the
    /// per-capita value compared during the search.
    #[serde(default)]
    pub default_worth: f64,

    /// Reject worth table keys that can never be looked up.
    ///
    /// A key is rejected when its size is zero, its size is not a part of
    /// its structure, or its structure is not a partition of `num_players`.
    /// Off by default: malformed keys are simply never hit.
    #[serde(default)]
    pub validate_worth_keys: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 1,
            default_worth: 0.0,
            validate_worth_keys: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `num_players` with a default worth of 0.
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            ..Default::default()
        }
    }

    /// Builder method: set the default worth.
    pub fn with_default_worth(mut self, default_worth: f64) -> Self {
        self.default_worth = default_worth;
        self
    }

    /// Builder method: enable or disable worth key validation.
    pub fn with_key_validation(mut self, enable: bool) -> Self {
        self.validate_worth_keys = enable;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_players < 1 {
            return Err(GameError::InvalidConfiguration(format!(
                "number of players must be at least 1, got {}",
                self.num_players
            )));
        }

        if !self.default_worth.is_finite() {
            return Err(GameError::InvalidConfiguration(format!(
                "default worth must be finite, got {}",
                self.default_worth
            )));
        }

        Ok(())
    }
}

/// Errors raised while configuring or solving a game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The game parameters admit no equilibrium (e.g. zero players).
    InvalidConfiguration(String),

    /// A worth table key that can never be looked up.
    InvalidWorthKey {
        /// Coalition size of the key.
        size: usize,
        /// Completed structure of the key.
        structure: CoalitionStructure,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A worth that is NaN or infinite.
    NonFiniteWorth {
        /// Coalition size of the key.
        size: usize,
        /// Completed structure of the key.
        structure: CoalitionStructure,
        /// The offending value.
        worth: f64,
    },

    /// The decision rule has no entry for a reachable substructure.
    ///
    /// Only raised when a rule is completed from a structure it was not
    /// built for, e.g. a structure that does not fit the game's player count.
    MissingRule(CoalitionStructure),

    /// Reading or writing a game file failed.
    Io(String),

    /// A game file could not be parsed.
    Parse(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            GameError::InvalidWorthKey {
                size,
                structure,
                reason,
            } => write!(f, "Invalid worth key ({}, {}): {}", size, structure, reason),
            GameError::NonFiniteWorth {
                size,
                structure,
                worth,
            } => write!(f, "Worth of ({}, {}) is not finite: {}", size, structure, worth),
            GameError::MissingRule(structure) => {
                write!(f, "No decision rule entry for substructure {}", structure)
            }
            GameError::Io(msg) => write!(f, "I/O error: {}", msg),
            GameError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Parse(e.to_string())
    }
}

/// Statistics collected while building a decision rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Total number of players.
    pub num_players: usize,

    /// Number of substructures in the decision rule.
    pub rule_entries: usize,

    /// Number of (substructure, next size) candidates evaluated.
    pub candidates_evaluated: u64,

    /// Worth lookups answered by the table.
    pub worth_hits: u64,

    /// Worth lookups that fell back to the default worth.
    pub worth_misses: u64,

    /// Time spent building the rule and unrolling it (in seconds).
    pub elapsed_seconds: f64,
}

impl SolveStats {
    /// Create new empty stats for a game of `num_players`.
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            ..Default::default()
        }
    }

    /// Fraction of worth lookups answered by the table.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.worth_hits + self.worth_misses;
        if lookups == 0 {
            0.0
        } else {
            self.worth_hits as f64 / lookups as f64
        }
    }
}
