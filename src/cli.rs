use clap::Parser;
use std::io::BufRead;

/// Boggle Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Width (X length) of the board
    #[arg(short = 'x', long = "width", default_value_t = 4)]
    pub width: usize,

    /// Height (Y length) of the board
    #[arg(short = 'y', long = "height", default_value_t = 4)]
    pub height: usize,

    /// Sort words longest-first
    #[arg(short = 'l', long = "longest", conflicts_with = "shortest")]
    pub longest: bool,

    /// Sort words shortest-first
    #[arg(short = 's', long = "shortest")]
    pub shortest: bool,

    /// -q hides the grid, -qq hides the grid and the solutions
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Run benchmark test
    #[arg(short = 'b', long = "benchmark")]
    pub benchmark: bool,

    /// Precompute the full neighbor table instead of deriving neighbors
    /// per lookup
    #[arg(short = 'p', long = "precompute")]
    pub precompute: bool,

    /// Path to a newline-delimited dictionary file (plain, .gz, or .bz2);
    /// the embedded dictionary is used when omitted
    pub dictionary: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Alphabetical,
    Longest,
    Shortest,
}

impl Cli {
    pub fn sort_order(&self) -> SortOrder {
        if self.longest {
            SortOrder::Longest
        } else if self.shortest {
            SortOrder::Shortest
        } else {
            SortOrder::Alphabetical
        }
    }
}

// UI input/output helpers

pub enum GridInput {
    Valid(String),
    Invalid,
    Exit,
}

/// Prompts for and reads one grid string. Input is trimmed and lowercased
/// before validation; an empty line or EOF ends the session. Length is not
/// checked here, the engine reports a mismatch itself.
pub fn read_grid<R: BufRead>(reader: &mut R, board_size: usize) -> GridInput {
    println!("\nEnter {board_size} letters from boggle grid:");
    let mut input = String::new();
    if reader.read_line(&mut input).unwrap_or(0) == 0 {
        return GridInput::Exit;
    }
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        GridInput::Exit
    } else if input.bytes().all(|b| b.is_ascii_lowercase()) {
        GridInput::Valid(input)
    } else {
        println!("Invalid grid. Please enter letters only.");
        GridInput::Invalid
    }
}

/// Renders the board as an ASCII-boxed grid, uppercased, with the
/// pseudo-letter 'q' shown as "Qu".
pub fn format_grid(grid: &str, width: usize, height: usize) -> String {
    let cells = grid.as_bytes();
    let border = format!("+{}\n", "---+".repeat(width));
    let mut out = String::new();
    for row in 0..height {
        out.push_str(&border);
        out.push_str("| ");
        for col in 0..width {
            let cell = cells[row * width + col].to_ascii_uppercase() as char;
            if cell == 'Q' {
                out.push_str("Qu| ");
            } else {
                out.push(cell);
                out.push_str(" | ");
            }
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Formats the result set in four 18-character columns, sorted per
/// `order`.
pub fn format_words(words: &std::collections::HashSet<String>, order: SortOrder) -> String {
    let mut words: Vec<&String> = words.iter().collect();
    match order {
        SortOrder::Alphabetical => words.sort(),
        SortOrder::Longest => words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b))),
        SortOrder::Shortest => words.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b))),
    }

    let mut out = String::new();
    for chunk in words.chunks(4) {
        let line: Vec<String> = chunk.iter().map(|w| format!("{w:<18}")).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    fn as_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            width: 4,
            height: 4,
            longest: false,
            shortest: false,
            quiet: 0,
            benchmark: false,
            precompute: false,
            dictionary: None,
        };
        assert_eq!(cli.sort_order(), SortOrder::Alphabetical);
        assert_eq!(cli.dictionary, None);
    }

    #[test]
    fn test_sort_order_flags() {
        let mut cli = Cli {
            width: 4,
            height: 4,
            longest: true,
            shortest: false,
            quiet: 0,
            benchmark: false,
            precompute: false,
            dictionary: None,
        };
        assert_eq!(cli.sort_order(), SortOrder::Longest);

        cli.longest = false;
        cli.shortest = true;
        assert_eq!(cli.sort_order(), SortOrder::Shortest);
    }

    #[test]
    fn test_read_grid_valid() {
        let mut reader = Cursor::new("qadfetriihkriflv\n");
        match read_grid(&mut reader, 16) {
            GridInput::Valid(grid) => assert_eq!(grid, "qadfetriihkriflv"),
            _ => panic!("expected Valid grid"),
        }
    }

    #[test]
    fn test_read_grid_uppercase_normalized() {
        let mut reader = Cursor::new("  TACE  \n");
        match read_grid(&mut reader, 4) {
            GridInput::Valid(grid) => assert_eq!(grid, "tace"),
            _ => panic!("expected Valid grid with lowercase conversion"),
        }
    }

    #[test]
    fn test_read_grid_rejects_non_letters() {
        let mut reader = Cursor::new("qa1f\nexit ok\n");
        assert!(matches!(read_grid(&mut reader, 4), GridInput::Invalid));
        // "exit ok" contains a space.
        assert!(matches!(read_grid(&mut reader, 4), GridInput::Invalid));
    }

    #[test]
    fn test_read_grid_empty_line_exits() {
        let mut reader = Cursor::new("\n");
        assert!(matches!(read_grid(&mut reader, 4), GridInput::Exit));
    }

    #[test]
    fn test_read_grid_eof_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_grid(&mut reader, 4), GridInput::Exit));
    }

    #[test]
    fn test_format_grid_2x2() {
        let rendered = format_grid("tace", 2, 2);
        let expected = "\
+---+---+
| T | A |
+---+---+
| C | E |
+---+---+
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_grid_shows_qu() {
        let rendered = format_grid("qite", 2, 2);
        assert!(rendered.contains("| Qu| I |"));
    }

    #[test]
    fn test_format_words_alphabetical_columns() {
        let words = as_set(&["tea", "ate", "eat", "quad", "rate"]);
        let out = format_words(&words, SortOrder::Alphabetical);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ate"));
        assert!(lines[0].contains("eat"));
        assert!(lines[0].contains("quad"));
        assert!(lines[0].contains("rate"));
        assert_eq!(lines[1], "tea");
    }

    #[test]
    fn test_format_words_length_orders() {
        let words = as_set(&["tea", "earth", "quad"]);

        let longest = format_words(&words, SortOrder::Longest);
        let first = longest.split_whitespace().next().unwrap();
        assert_eq!(first, "earth");

        let shortest = format_words(&words, SortOrder::Shortest);
        let first = shortest.split_whitespace().next().unwrap();
        assert_eq!(first, "tea");
    }

    #[test]
    fn test_format_words_empty() {
        let out = format_words(&HashSet::new(), SortOrder::Alphabetical);
        assert!(out.is_empty());
    }
}
