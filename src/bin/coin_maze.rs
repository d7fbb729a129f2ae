//! Command line front end: load a maze file, solve it, print the result.

use clap::Parser;
use coin_maze::Maze;

use std::path::PathBuf;
use std::process::ExitCode;

/// Find a path through a coin-gated maze file.
#[derive(Debug, Parser)]
#[command(name = "coin_maze", version, about)]
struct Args {
    /// The maze description file.
    file: PathBuf,

    /// Print only the resulting path, not the grid.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let maze = match Maze::from_file(&args.file) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        println!("{}", maze);
        println!(
            "{} columns x {} rows, budget {} coins",
            maze.width(),
            maze.length(),
            maze.coins()
        );
    }

    match maze.solve() {
        Ok(Some(path)) => {
            println!("{}", path);
            ExitCode::SUCCESS
        }
        // an unsolvable maze is an answer, not an error
        Ok(None) => {
            println!("no path from entrance to exit within {} coins", maze.coins());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("solve failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
