//! Worked examples from Ray (2007), chapter 5.
//!
//! Both tables list only the worths the book gives; every other key falls
//! back to the default worth of 0.

use crate::coalition::worth::WorthTable;
use crate::coalition::GameError;
use crate::coalition::SymmetricGame;

/// Example 5.1 (p. 57), five players.
///
/// Equilibrium: `(4, 1)`.
pub fn example_5_1() -> WorthTable {
    table(&[
        (4, &[4, 1], 6.0),
        (1, &[4, 1], 2.0),
        (3, &[3, 2], 3.0),
        (2, &[3, 2], 8.0),
        (2, &[2, 1, 1, 1], 0.1),
        (1, &[2, 1, 1, 1], 3.0),
        (3, &[3, 1, 1], 10.0),
        (1, &[3, 1, 1], 0.0),
    ])
}

/// Example 5.2 (p. 62), four players.
///
/// Equilibrium: `(2, 1, 1)`. The pair forms first: it earns 8 per head in
/// `(2, 1, 1)`, more than the 22/3 a triple would get in `(3, 1)`.
pub fn example_5_2() -> WorthTable {
    table(&[
        (3, &[3, 1], 22.0),
        (1, &[3, 1], 0.0),
        (2, &[2, 1, 1], 16.0),
        (1, &[2, 1, 1], 1.0),
    ])
}

/// Look up a named example: `"ray-5-1"` or `"ray-5-2"`.
pub fn by_name(name: &str) -> Result<SymmetricGame, GameError> {
    match name {
        "ray-5-1" | "5.1" => SymmetricGame::new(5, example_5_1()),
        "ray-5-2" | "5.2" => SymmetricGame::new(4, example_5_2()),
        other => Err(GameError::InvalidConfiguration(format!(
            "unknown example '{}', expected ray-5-1 or ray-5-2",
            other
        ))),
    }
}

fn table(entries: &[(usize, &[usize], f64)]) -> WorthTable {
    let mut worths = WorthTable::with_capacity(entries.len());
    for &(size, structure, worth) in entries {
        // Literal finite worths: insertion cannot fail.
        let _ = worths.insert(size, structure.to_vec(), worth);
    }
    worths
}
