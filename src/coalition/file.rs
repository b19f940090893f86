//! JSON game files.
//!
//! Worth tables are keyed by tuples, which JSON objects cannot express, so a
//! game file lists the worths as entries:
//!
//! ```text
//! {
//!   "num_players": 4,
//!   "default_worth": 0.0,
//!   "worths": [
//!     { "size": 3, "structure": [3, 1], "worth": 22.0 },
//!     { "size": 2, "structure": [2, 1, 1], "worth": 16.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::coalition::config::{GameConfig, GameError};
use crate::coalition::solver::SymmetricGame;
use crate::coalition::worth::{WorthEntry, WorthTable};

/// Serializable description of a whole game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFile {
    /// Total number of players.
    pub num_players: usize,
    /// Worth for keys missing from `worths`.
    #[serde(default)]
    pub default_worth: f64,
    /// Listed worths.
    #[serde(default)]
    pub worths: Vec<WorthEntry>,
}

impl GameFile {
    /// Describe an existing game.
    pub fn from_game(game: &SymmetricGame) -> Self {
        Self {
            num_players: game.num_players(),
            default_worth: game.default_worth(),
            worths: game.worths().entries(),
        }
    }

    /// Parse a game from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a game file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Save to disk as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GameError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// The worth table described by this file.
    pub fn worth_table(&self) -> Result<WorthTable, GameError> {
        WorthTable::from_entries(
            self.worths
                .iter()
                .map(|e| (e.size, e.structure.clone(), e.worth)),
        )
    }

    /// Build the game, optionally validating every worth key.
    pub fn into_game(self, validate_keys: bool) -> Result<SymmetricGame, GameError> {
        let worths = self.worth_table()?;
        let config = GameConfig::new(self.num_players)
            .with_default_worth(self.default_worth)
            .with_key_validation(validate_keys);
        SymmetricGame::from_config(config, worths)
    }
}
