//! The word-search engine: holds the board geometry, the adjacency
//! relation, and the dictionary trie, and enumerates every dictionary word
//! embeddable as a simple path of adjacent cells.
//!
//! The dictionary is built once (`load_dictionary`/`load_words`) and is
//! read-only afterwards, so a solver can be shared by reference across
//! concurrent `solve` calls.

use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};
use std::path::Path;

use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::adjacency::Adjacency;
use crate::trie::TrieNode;
use crate::wordlist;
use crate::{debug_log, info_log};

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("dictionary not loaded")]
    DictionaryNotLoaded,
    #[error("invalid board: expected {expected} letters, got {actual}")]
    InvalidBoard { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("word source unavailable: {0}")]
    WordSource(#[from] std::io::Error),
}

/// Engine construction options. `max_word_length` defaults to the full
/// board size when unset.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub width: usize,
    pub height: usize,
    pub min_word_length: usize,
    pub max_word_length: Option<usize>,
    pub precompute_adjacency: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: None,
            precompute_adjacency: false,
        }
    }
}

/// One partial candidate word: the last cell reached, the letters spelled
/// so far, the trie node those letters lead to, and the cells already used.
/// These live only for the duration of a single `solve` call.
struct PathState<'t> {
    cell: usize,
    prefix: String,
    node: &'t TrieNode,
    visited: SmallVec<[usize; 16]>,
}

pub struct BoggleSolver {
    width: usize,
    height: usize,
    board_size: usize,
    min_word_length: usize,
    max_word_length: usize,
    adjacency: Adjacency,
    trie: Option<TrieNode>,
}

impl BoggleSolver {
    pub fn new(config: &SolverConfig) -> Result<Self, SolverError> {
        if config.width < 2 {
            return Err(SolverError::InvalidConfig("width must be greater than 1"));
        }
        if config.height < 2 {
            return Err(SolverError::InvalidConfig("height must be greater than 1"));
        }
        let board_size = config.width * config.height;
        let max_word_length = config.max_word_length.unwrap_or(board_size);
        if config.min_word_length < 2 {
            return Err(SolverError::InvalidConfig(
                "min_word_length must be at least 2",
            ));
        }
        if max_word_length > board_size {
            return Err(SolverError::InvalidConfig(
                "max_word_length cannot exceed the board size",
            ));
        }
        if config.min_word_length > max_word_length {
            return Err(SolverError::InvalidConfig(
                "min_word_length cannot exceed max_word_length",
            ));
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            board_size,
            min_word_length: config.min_word_length,
            max_word_length,
            adjacency: Adjacency::new(config.width, config.height, config.precompute_adjacency),
            trie: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn is_ready(&self) -> bool {
        self.trie.is_some()
    }

    /// Loads the dictionary from a word file (plain, `.gz`, or `.bz2`).
    /// Returns the number of words inserted after filtering.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SolverError> {
        let words = wordlist::load_words_from_file(path)?;
        Ok(self.load_words(words.iter().map(String::as_str)))
    }

    /// Builds the trie from a word sequence, applying the dictionary
    /// filter. Entries that fail the filter are skipped; a partially valid
    /// dictionary is still useful. Replaces any previously loaded
    /// dictionary.
    pub fn load_words<'a, I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        info_log!("creating dictionary");
        let mut root = TrieNode::new();
        let mut count = 0usize;
        for word in words {
            match self.filter_word(word) {
                Some(stored) => {
                    root.insert(&stored);
                    count += 1;
                }
                None => debug_log!("skipping dictionary entry: {word:?}"),
            }
        }
        info_log!("finished creating dictionary, {count} words");
        self.trie = Some(root);
        count
    }

    /// Dictionary filter: length bounds (checked on the word as read,
    /// before any q-collapsing), no uppercase-initial words, nothing
    /// outside `a..=z`, and a leading `"qu"` collapsed to a single stored
    /// `'q'` so the tree holds one node for that pseudo-letter. Words
    /// starting with `'q'` not followed by `'u'` are rejected.
    fn filter_word<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        let len = word.len();
        if len < self.min_word_length || len > self.max_word_length {
            return None;
        }
        let bytes = word.as_bytes();
        if bytes[0].is_ascii_uppercase() {
            return None;
        }
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return None;
        }
        if bytes[0] == b'q' {
            if bytes[1] != b'u' {
                return None;
            }
            let mut collapsed = String::with_capacity(len - 1);
            collapsed.push('q');
            collapsed.push_str(&word[2..]);
            return Some(Cow::Owned(collapsed));
        }
        Some(Cow::Borrowed(word))
    }

    /// Finds every distinct dictionary word spelled by a simple path of
    /// adjacent cells in `grid` (row-major, one lowercase letter per cell,
    /// `'q'` standing for "qu").
    pub fn solve(&self, grid: &str) -> Result<HashSet<String>, SolverError> {
        let trie = self.trie.as_ref().ok_or(SolverError::DictionaryNotLoaded)?;
        if grid.len() != self.board_size {
            return Err(SolverError::InvalidBoard {
                expected: self.board_size,
                actual: grid.len(),
            });
        }

        let board = grid.as_bytes();
        let mut words = HashSet::new();
        let mut queue: VecDeque<PathState> = VecDeque::new();

        for start in 0..self.board_size {
            let letter = board[start];
            // No dictionary word starts with this letter: nothing seeded
            // here can ever complete.
            let Some(node) = trie.get_child(letter) else {
                continue;
            };
            queue.push_back(PathState {
                cell: start,
                prefix: (letter as char).to_string(),
                node,
                visited: smallvec![start],
            });

            while let Some(state) = queue.pop_front() {
                for neighbor in self.adjacency.neighbors(state.cell) {
                    if state.visited.contains(&neighbor) {
                        continue;
                    }
                    let letter = board[neighbor];
                    let Some(child) = state.node.get_child(letter) else {
                        continue;
                    };
                    let mut prefix = state.prefix.clone();
                    prefix.push(letter as char);
                    if child.is_terminal() {
                        words.insert(rehydrate(&prefix));
                    }
                    // A childless node cannot extend into a longer word.
                    if child.has_children() {
                        let mut visited = state.visited.clone();
                        visited.push(neighbor);
                        queue.push_back(PathState {
                            cell: neighbor,
                            prefix,
                            node: child,
                            visited,
                        });
                    }
                }
            }
        }

        Ok(words)
    }

    /// Reports every dictionary-recognized substring of `text`, walking the
    /// trie from each starting offset. Words are reported in stored form
    /// (a leading pseudo-letter `'q'` is not rehydrated), which makes this
    /// a direct cross-check of trie membership independent of any board.
    pub fn find_substrings(&self, text: &str) -> Result<HashSet<String>, SolverError> {
        let trie = self.trie.as_ref().ok_or(SolverError::DictionaryNotLoaded)?;
        let bytes = text.as_bytes();
        let mut found = HashSet::new();

        for start in 0..bytes.len() {
            let mut node = trie;
            for (offset, &letter) in bytes[start..].iter().enumerate() {
                let Some(child) = node.get_child(letter) else {
                    break;
                };
                node = child;
                if node.is_terminal() {
                    found.insert(text[start..=start + offset].to_string());
                }
                if !node.has_children() {
                    break;
                }
            }
        }

        Ok(found)
    }
}

/// Respells a found word for output: a path starting on the pseudo-letter
/// `'q'` becomes "qu...".
fn rehydrate(prefix: &str) -> String {
    match prefix.strip_prefix('q') {
        Some(rest) => format!("qu{rest}"),
        None => prefix.to_string(),
    }
}
