//! Command-line frontend for the gridnine solver.
//!
//! Reads a comma-separated 9×9 puzzle from a file, runs constraint
//! propagation, and prints the initial and resulting grids.
//!
//! ```sh
//! gridnine --input puzzles/easy.txt
//! ```

use std::{fs::File, io::BufReader, path::PathBuf, process};

use clap::{CommandFactory as _, Parser};
use gridnine_core::Grid;
use gridnine_solver::solve_with_stats;
use log::info;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a properly formatted puzzle file.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let Some(path) = args.input else {
        // No input selected is not an error; just show how to use the tool.
        if let Err(err) = Args::command().print_help() {
            eprintln!("error: {err}");
            process::exit(1);
        }
        return;
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: cannot open {}: {err}", path.display());
            process::exit(1);
        }
    };

    let mut grid = match Grid::from_reader(BufReader::new(file)) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!("Initial puzzle:");
    print!("{grid}");
    println!();

    let (solved, stats) = solve_with_stats(&mut grid);
    info!(
        "{} passes, {} candidates removed, {} cells fixed",
        stats.passes, stats.candidates_removed, stats.cells_fixed
    );

    if solved {
        println!("Solved puzzle:");
    } else {
        println!("The puzzle was not solvable.  Here is the current state:");
    }
    print!("{grid}");
}
