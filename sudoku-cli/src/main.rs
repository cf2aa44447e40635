use std::io::Read;
use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use solver::generate::{generate_full_grid, generate_puzzle};
use solver::grid::{CELLS, Grid};
use solver::solve::{Step, solve, solve_with};

#[derive(Parser)]
#[command(name = "sudoku", about = "Generate and solve 9x9 Sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from a fresh randomized full grid
    Generate {
        /// Number of clue cells to keep filled
        #[arg(long, default_value_t = 20)]
        clues: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the full solution
        #[arg(long)]
        solution: bool,
    },
    /// Solve a puzzle given as an 81-character string, or on stdin
    Solve {
        grid: Option<String>,
        /// Print the grid after every solver step
        #[arg(long)]
        trace: bool,
        /// Pause between traced steps, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Report row/column/box conflicts in a grid
    Check { grid: Option<String> },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Generate {
            clues,
            seed,
            solution,
        } => generate(clues, seed, solution),
        Command::Solve {
            grid,
            trace,
            delay_ms,
        } => run_solve(grid, trace, delay_ms),
        Command::Check { grid } => check(grid),
    }
}

fn generate(clues: usize, seed: Option<u64>, show_solution: bool) -> anyhow::Result<()> {
    if clues > CELLS {
        bail!("--clues must be at most {CELLS}, got {clues}");
    }
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let full = generate_full_grid(&mut rng);
    let puzzle = generate_puzzle(&full, clues, &mut rng);

    println!("{puzzle}");
    println!("{}", puzzle.to_line());
    if show_solution {
        println!();
        println!("{full}");
        println!("{}", full.to_line());
    }
    Ok(())
}

fn run_solve(grid: Option<String>, trace: bool, delay_ms: u64) -> anyhow::Result<()> {
    let mut grid = read_grid(grid)?;

    let solved = if trace {
        let delay = Duration::from_millis(delay_ms);
        solve_with(&mut grid, &mut |snapshot: &Grid, _: Step| {
            println!("{snapshot}");
            println!();
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        })
    } else {
        solve(&mut grid)
    };

    if !solved {
        bail!("cannot solve puzzle");
    }
    println!("{grid}");
    println!("{}", grid.to_line());
    Ok(())
}

fn check(grid: Option<String>) -> anyhow::Result<()> {
    let grid = read_grid(grid)?;
    if !grid.check() {
        bail!("grid has conflicting digits");
    }
    println!(
        "no conflicts, {} of {CELLS} cells filled",
        grid.filled_count()
    );
    Ok(())
}

fn read_grid(arg: Option<String>) -> anyhow::Result<Grid> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read grid from stdin")?;
            buf
        }
    };
    text.parse().context("failed to parse grid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::parse_from(["sudoku", "generate", "--clues", "30", "--seed", "9"]);
        match cli.command {
            Command::Generate { clues, seed, .. } => {
                assert_eq!(clues, 30);
                assert_eq!(seed, Some(9));
            }
            _ => panic!("expected generate subcommand"),
        }
    }
}
