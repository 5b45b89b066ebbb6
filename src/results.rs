//! Collection of words found by one search.
//!
//! Words are de-duplicated by their text. When the same word can be spelled
//! along several paths, the first path the search reaches is kept and later
//! ones are dropped. Iteration follows discovery order.

use crate::path::FoundWord;
use crate::scoring::ScoringPolicy;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    found: Vec<FoundWord>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` unless a word with the same text is already present.
    /// Returns `true` if it was added.
    pub fn insert(&mut self, word: FoundWord) -> bool {
        if self.index.contains_key(word.word()) {
            return false;
        }
        self.index.insert(word.word().to_string(), self.found.len());
        self.found.push(word);
        true
    }

    pub fn get(&self, word: &str) -> Option<&FoundWord> {
        self.index.get(word).map(|&i| &self.found[i])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.found.iter()
    }

    /// The found words, sorted alphabetically.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.found.iter().map(FoundWord::word).collect();
        words.sort_unstable();
        words
    }

    /// Words paired with their points under `policy`, best first. Ties go to
    /// the longer word, then alphabetical order.
    pub fn ranked<P: ScoringPolicy + ?Sized>(&self, policy: &P) -> Vec<(&FoundWord, u32)> {
        let mut ranked: Vec<(&FoundWord, u32)> = self
            .found
            .iter()
            .map(|word| (word, policy.score(word)))
            .collect();
        ranked.sort_by(|(a, a_points), (b, b_points)| {
            b_points
                .cmp(a_points)
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.word().cmp(b.word()))
        });
        ranked
    }

    /// Sum of points for every word in the set.
    pub fn total_points<P: ScoringPolicy + ?Sized>(&self, policy: &P) -> u64 {
        self.found.iter().map(|word| u64::from(policy.score(word))).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FoundWord;
    type IntoIter = std::slice::Iter<'a, FoundWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.iter()
    }
}
