//! Ray (2007) Example 5.2: four players.

use symmetric_coalitions::games::ray;
use symmetric_coalitions::SymmetricGame;

fn main() {
    let game = SymmetricGame::new(4, ray::example_5_2()).expect("valid game");
    let rule = game.decision_rule().expect("rule builds");

    println!("Decision rule:");
    for entry in rule.entries() {
        println!("  {} -> {}", entry.substructure, entry.next_size);
    }

    let structure = game.solve().expect("game solves");
    println!("\nFinal coalition structure is: {}", structure);

    // Expected: (2, 1, 1)
}
