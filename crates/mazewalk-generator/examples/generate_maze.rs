//! Example demonstrating maze generation and solving.
//!
//! This example shows how to:
//! - Create an `RngChooser` from a random, hex or phrase seed
//! - Generate a maze with `mazewalk_generator::generate`
//! - Solve it with `mazewalk_solver::solve` and display the route
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Choose the size and reproduce a maze from a phrase:
//!
//! ```sh
//! cargo run --example generate_maze -- --width 30 --height 12 --phrase "hello"
//! ```
//!
//! Print only the maze without the route:
//!
//! ```sh
//! cargo run --example generate_maze -- --no-solve
//! ```

use std::{num::NonZero, process};

use clap::Parser;
use mazewalk_generator::{MazeSeed, RngChooser};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of maze columns.
    #[arg(long, value_name = "CELLS", default_value = "20")]
    width: NonZero<usize>,

    /// Number of maze rows.
    #[arg(long, value_name = "CELLS", default_value = "10")]
    height: NonZero<usize>,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<MazeSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Do not solve the maze.
    #[arg(long)]
    no_solve: bool,
}

fn main() {
    let args = Args::parse();
    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => MazeSeed::from_phrase(phrase),
        (None, None) => MazeSeed::random(),
    };

    let chooser = RngChooser::with_seed(seed);
    let mut grid = match mazewalk_generator::generate(args.width.get(), args.height.get(), chooser)
    {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    if args.no_solve {
        println!("Maze:");
        println!("{grid}");
        return;
    }

    let path = mazewalk_solver::solve(&mut grid);
    println!("Maze:");
    println!("{grid}");
    println!();
    println!("Path:");
    println!("  length: {}", path.len());
    let cells = path
        .iter()
        .map(|&i| grid.to_position(i).to_string())
        .collect::<Vec<_>>();
    println!("  {}", cells.join(" "));
}
