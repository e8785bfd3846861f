use boggle_solver::cli::parse_cli;
use boggle_solver::session::{SessionOptions, run_benchmark, solve_loop};
use boggle_solver::solver::{BoggleSolver, SolverConfig};
use boggle_solver::wordlist::{EMBEDDED_WORDLIST, load_words_from_str};
use std::io;

const BENCHMARK_ROUNDS: usize = 5;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let config = SolverConfig {
        width: cli.width,
        height: cli.height,
        precompute_adjacency: cli.precompute,
        ..SolverConfig::default()
    };
    let mut solver = match BoggleSolver::new(&config) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Invalid board configuration: {e}");
            std::process::exit(1);
        }
    };

    let count = match &cli.dictionary {
        Some(path) => match solver.load_dictionary(path) {
            Ok(count) => count,
            Err(e) => {
                eprintln!("Failed to load dictionary from '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => {
            let words = load_words_from_str(EMBEDDED_WORDLIST);
            solver.load_words(words.iter().map(String::as_str))
        }
    };
    println!("loaded {count} words from dictionary");

    if cli.benchmark {
        run_benchmark(&solver, BENCHMARK_ROUNDS);
    } else {
        let opts = SessionOptions {
            sort: cli.sort_order(),
            quiet: cli.quiet,
        };
        let stdin = io::stdin();
        solve_loop(&solver, stdin.lock(), &opts);
    }
}
