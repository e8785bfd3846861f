// Library interface for boggle-solver
// This allows integration tests to access internal modules

pub mod adjacency;
pub mod cli;
pub mod logging;
pub mod session;
pub mod solver;
pub mod trie;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use adjacency::Adjacency;
pub use session::{SessionOptions, benchmark_grid, run_benchmark, solve_loop};
pub use solver::{BoggleSolver, SolverConfig, SolverError};
pub use trie::TrieNode;
pub use wordlist::{EMBEDDED_WORDLIST, load_words_from_file, load_words_from_str};
