//! Loading the word list the trie is built from.
//!
//! A word list is plain text, one lower-case word per line. Lines are
//! trimmed; blank lines are skipped, and lines with anything other than
//! `a-z` are skipped with a warning.

use crate::error::{Error, Result};
use crate::trie::Trie;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_WORDS: &str = include_str!("../dictionary/words.txt");

/// Usable words from a word list, in file order.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let word = line.trim();
            if word.is_empty() {
                return None;
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                warn!(line = number + 1, word, "skipping malformed dictionary entry");
                return None;
            }
            Some(word.to_string())
        })
        .collect()
}

/// Build a trie from word-list text. Fails if no usable word remains.
pub fn trie_from_text(text: &str) -> Result<Trie> {
    let words = parse_word_list(text);
    if words.is_empty() {
        return Err(Error::EmptyDictionary);
    }
    let trie = Trie::from_words(&words)?;
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        "dictionary loaded"
    );
    Ok(trie)
}

/// Read a word list from disk and build its trie.
pub fn load_trie(path: impl AsRef<Path>) -> Result<Trie> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trie_from_text(&text)
}

/// The word list bundled with the crate.
pub fn load_dictionary() -> Vec<String> {
    parse_word_list(DEFAULT_WORDS)
}

/// Trie over the bundled word list.
pub fn default_trie() -> Result<Trie> {
    trie_from_text(DEFAULT_WORDS)
}
