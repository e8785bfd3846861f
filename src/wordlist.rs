//! Word-source collaborator: reads one word per line from plain, gzip- or
//! bzip2-compressed files, or from an embedded default list. No filtering
//! happens here; the solver applies its dictionary policy at insert time.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;

/// Default dictionary, compiled into the binary so the solver never depends
/// on an ambient file on disk.
pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Reads a newline-delimited word file. Decompression is picked by file
/// extension: `.gz` and `.bz2` are recognized, anything else is read as
/// plain text.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader: Box<dyn Read> = match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Box::new(MultiGzDecoder::new(file)),
        Some("bz2") => Box::new(MultiBzDecoder::new(file)),
        _ => Box::new(file),
    };

    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        let word = line?.trim().to_string();
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}
