//! Seeded random worth tables.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coalition::partition::substructures;
use crate::coalition::worth::WorthTable;

/// Upper bound (exclusive) of a random worth.
pub const MAX_WORTH: f64 = 10.0;

/// A worth table covering every key of an `num_players` game.
///
/// For every partition `T` of `num_players` and every distinct part `s` of
/// `T`, the worth of `(s, T)` is drawn uniformly from `[0, MAX_WORTH)`.
/// The same seed always yields the same table.
pub fn random_worth_table(num_players: usize, seed: u64) -> WorthTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut worths = WorthTable::new();

    for structure in substructures(num_players) {
        let mut sizes = structure.parts().to_vec();
        sizes.dedup();
        for size in sizes {
            let worth = rng.gen_range(0.0..MAX_WORTH);
            // Always finite: drawn from a bounded range.
            let _ = worths.insert(size, structure.clone(), worth);
        }
    }

    worths
}
