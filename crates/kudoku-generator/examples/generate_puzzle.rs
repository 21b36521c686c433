//! Example demonstrating basic puzzle generation.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Control how many cells are emptied (values above ~55 generate slowly):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --empty-target 40
//! ```
//!
//! Reproduce an earlier puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 12648430
//! ```
//!
//! Set `RUST_LOG=debug` to see removal-pass restarts.

use clap::Parser;
use kudoku_generator::PuzzleGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to empty.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_EMPTY_TARGET)]
    empty_target: u8,

    /// Seed for reproducible generation; drawn from entropy when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::with_empty_target(args.empty_target);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues):", puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
