use crate::error::PuzzleError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Candidate words grouped into contiguous same-length blocks.
///
/// Words are uppercase ASCII letters; within a block they keep the order of the
/// source list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    blocks: BTreeMap<usize, Vec<String>>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocks: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in words {
            if let Some(word) = normalize(word.as_ref()) {
                blocks.entry(word.len()).or_default().push(word);
            }
        }
        Self { blocks }
    }

    /// The block of words with exactly `length` letters (empty if none).
    #[must_use]
    pub fn block(&self, length: usize) -> &[String] {
        self.blocks
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Word lengths present, shortest first, with the size of each block.
    pub fn lengths(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.blocks.iter().map(|(len, words)| (*len, words.len()))
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

pub fn load_wordbank_from_str(data: &str) -> Dictionary {
    Dictionary::from_words(data.lines())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, PuzzleError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(Dictionary::from_words(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_NUM_WORDS, MAX_WORD_LENGTH, MIN_WORD_LENGTH};

    #[test]
    fn test_groups_by_length_preserving_order() {
        let dict = load_wordbank_from_str("zeta\napple\nbeta\ngrape\nalpha\n");
        assert_eq!(dict.block(4), ["ZETA", "BETA"]);
        assert_eq!(dict.block(5), ["APPLE", "GRAPE", "ALPHA"]);
        assert_eq!(dict.len(), 5);
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let dict = load_wordbank_from_str("  Crane \nsLaTe\n");
        assert_eq!(dict.block(5), ["CRANE", "SLATE"]);
    }

    #[test]
    fn test_skips_blank_and_non_alphabetic_lines() {
        let dict = load_wordbank_from_str("\n\nca-t\nd0gs\nfish\nmy word\n");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.block(4), ["FISH"]);
    }

    #[test]
    fn test_missing_length_is_empty_block() {
        let dict = load_wordbank_from_str("fish\n");
        assert!(dict.block(9).is_empty());
        assert!(!dict.is_empty());
        assert!(Dictionary::default().is_empty());
    }

    #[test]
    fn test_lengths_reports_block_sizes() {
        let dict = load_wordbank_from_str("aaaa\nbbbbb\ncccc\n");
        let lengths: Vec<_> = dict.lengths().collect();
        assert_eq!(lengths, vec![(4, 2), (5, 1)]);
    }

    #[test]
    fn test_embedded_wordbank_supports_default_puzzles() {
        let dict = load_wordbank_from_str(EMBEDDED_WORDBANK);
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            assert!(
                dict.block(length).len() >= DEFAULT_NUM_WORDS,
                "embedded list has only {} words of length {length}",
                dict.block(length).len()
            );
        }
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("termlink_hack_no_such_wordbank.txt");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            load_wordbank_from_file(&path),
            Err(PuzzleError::Io(_))
        ));
    }
}
