//! Interactive solve session and benchmark mode.

use std::io::BufRead;
use std::time::Instant;

use crate::cli::{GridInput, SortOrder, format_grid, format_words, read_grid};
use crate::debug_log;
use crate::solver::BoggleSolver;

pub struct SessionOptions {
    pub sort: SortOrder,
    /// 0 shows grid and words, 1 hides the grid, 2 shows only the count.
    pub quiet: u8,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            sort: SortOrder::Alphabetical,
            quiet: 0,
        }
    }
}

/// Prompt/solve/display loop. Reads grid strings until an empty line or
/// EOF; an invalid grid re-prompts without ending the session.
pub fn solve_loop<R: BufRead>(solver: &BoggleSolver, mut reader: R, opts: &SessionOptions) {
    loop {
        let grid = match read_grid(&mut reader, solver.board_size()) {
            GridInput::Exit => break,
            GridInput::Invalid => continue,
            GridInput::Valid(grid) => grid,
        };

        let start = Instant::now();
        let words = match solver.solve(&grid) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("ERROR: {e}");
                continue;
            }
        };
        let elapsed = start.elapsed();

        println!(
            "\nFound {} solutions for {}x{} grid in {:.2} msec:",
            words.len(),
            solver.width(),
            solver.height(),
            elapsed.as_secs_f64() * 1000.0
        );

        if opts.quiet < 1 {
            print!("{}", format_grid(&grid, solver.width(), solver.height()));
        }
        if opts.quiet < 2 {
            print!("{}", format_words(&words, opts.sort));
        }
    }
}

/// Deterministic benchmark board: the alphabet cycled across all cells.
pub fn benchmark_grid(board_size: usize) -> String {
    (0..board_size)
        .map(|i| (b'a' + (i % 26) as u8) as char)
        .collect()
}

/// Solves the cycling benchmark grid `rounds` times, reporting the timing
/// of each run.
pub fn run_benchmark(solver: &BoggleSolver, rounds: usize) {
    let grid = benchmark_grid(solver.board_size());
    debug_log!("benchmark grid: {grid}");

    for round in 1..=rounds {
        let start = Instant::now();
        let words = match solver.solve(&grid) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("ERROR: {e}");
                return;
            }
        };
        let elapsed = start.elapsed();
        println!(
            "Benchmark round {round}: {} solutions for {}x{} grid in {:.2} msec",
            words.len(),
            solver.width(),
            solver.height(),
            elapsed.as_secs_f64() * 1000.0
        );
    }
}
