//! Random game sweep.
//!
//! Solves seeded random games for a range of player counts in parallel and
//! reports rule sizes and timings. Each game is solved single-threaded;
//! parallelism is across independent games.

use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use symmetric_coalitions::games::random::random_worth_table;
use symmetric_coalitions::{GameError, SolveStats, SymmetricGame};

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Solve random symmetric games over a range of player counts")]
struct Args {
    /// Smallest player count
    #[arg(long, default_value_t = 1)]
    min_players: usize,

    /// Largest player count
    #[arg(long, default_value_t = 20)]
    max_players: usize,

    /// Random games per player count
    #[arg(long, default_value_t = 4)]
    games: u64,

    /// Base seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct GameResult {
    num_players: usize,
    seed: u64,
    structure: String,
    stats: SolveStats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    println!("=== Random Symmetric Game Sweep ===");
    println!(
        "Players: {}..={} | Games per count: {} | Seed: {}\n",
        args.min_players, args.max_players, args.games, args.seed
    );

    let jobs: Vec<(usize, u64)> = (args.min_players..=args.max_players)
        .flat_map(|n| (0..args.games).map(move |i| (n, args.seed + i)))
        .collect();

    let progress = ProgressBar::new(jobs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} games")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    let results: Vec<Result<GameResult, GameError>> = jobs
        .par_iter()
        .map(|&(num_players, seed)| -> Result<GameResult, GameError> {
            let game = SymmetricGame::new(num_players, random_worth_table(num_players, seed))?;
            let solution = game.solve_detailed()?;
            progress.inc(1);
            Ok(GameResult {
                num_players,
                seed,
                structure: solution.structure.to_string(),
                stats: solution.stats,
            })
        })
        .collect();
    progress.finish_and_clear();

    let mut solved = 0usize;
    for result in &results {
        match result {
            Ok(r) => {
                solved += 1;
                println!(
                    "n={:<3} seed={:<5} rule={:<8} candidates={:<10} {:.3}s  {}",
                    r.num_players,
                    r.seed,
                    r.stats.rule_entries,
                    r.stats.candidates_evaluated,
                    r.stats.elapsed_seconds,
                    r.structure
                );
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    println!("\n=== Summary ===");
    println!("Games solved: {}/{}", solved, results.len());
    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());
}
