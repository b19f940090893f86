//! Symmetric coalition game solver binary.
//!
//! Loads a game from a JSON file (or one of the worked examples), solves it
//! and prints the equilibrium coalition structure.
//!
//! ```text
//! solve_game --example ray-5-2
//! solve_game --game game.json --rule
//! solve_game --players 6 --default-worth 1.0 --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use symmetric_coalitions::games::ray;
use symmetric_coalitions::{GameError, GameFile, SymmetricGame, WorthTable};

#[derive(Parser, Debug)]
#[command(name = "solve_game", about = "Equilibrium coalition structure of a symmetric game")]
struct Args {
    /// JSON game file (num_players, default_worth, worths)
    #[arg(long, conflicts_with = "example")]
    game: Option<PathBuf>,

    /// Worked example to solve: ray-5-1 or ray-5-2
    #[arg(long)]
    example: Option<String>,

    /// Number of players (overrides the game file; required without one)
    #[arg(long)]
    players: Option<usize>,

    /// Worth for keys missing from the table (overrides the game file)
    #[arg(long)]
    default_worth: Option<f64>,

    /// Accept worth keys that can never be looked up
    #[arg(long)]
    no_validate: bool,

    /// Print the full decision rule
    #[arg(long)]
    rule: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Write the solution JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GameError> {
    let game = load_game(args)?;
    let solution = game.solve_detailed()?;

    if args.json {
        println!("{}", solution.to_json()?);
    } else {
        println!("=== Symmetric Coalition Game ===");
        println!(
            "Players: {} | Worths: {} | Default worth: {}",
            game.num_players(),
            game.worths().len(),
            game.default_worth()
        );
        println!();

        if args.rule {
            println!("Decision rule:");
            for entry in &solution.rule {
                println!("  {:<24} -> {}", entry.substructure.to_string(), entry.next_size);
            }
            println!();
        }

        println!("Formation order: {:?}", solution.formation_path);
        println!("Final coalition structure is: {}", solution.structure);
        println!(
            "Rule entries: {}, candidates: {}, worth hits: {:.1}%, time: {:.3}s",
            solution.stats.rule_entries,
            solution.stats.candidates_evaluated,
            solution.stats.hit_rate() * 100.0,
            solution.stats.elapsed_seconds
        );
    }

    if let Some(path) = &args.output {
        std::fs::write(path, solution.to_json()?)?;
        println!("Saved solution: {}", path.display());
    }

    Ok(())
}

fn load_game(args: &Args) -> Result<SymmetricGame, GameError> {
    let validate = !args.no_validate;

    let mut file = if let Some(path) = &args.game {
        GameFile::load(path)?
    } else if let Some(name) = &args.example {
        GameFile::from_game(&ray::by_name(name)?)
    } else {
        let num_players = args.players.ok_or_else(|| {
            GameError::InvalidConfiguration(
                "one of --game, --example or --players is required".to_string(),
            )
        })?;
        GameFile::from_game(&SymmetricGame::new(num_players, WorthTable::new())?)
    };

    if let Some(players) = args.players {
        file.num_players = players;
    }
    if let Some(default_worth) = args.default_worth {
        file.default_worth = default_worth;
    }

    file.into_game(validate)
}
