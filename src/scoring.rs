//! Points for found words.
//!
//! The search itself never scores anything; it hands out [`FoundWord`]s and
//! callers pick a [`ScoringPolicy`] to rank them.

use crate::path::FoundWord;

pub trait ScoringPolicy {
    fn score(&self, word: &FoundWord) -> u32;
}

impl<F> ScoringPolicy for F
where
    F: Fn(&FoundWord) -> u32,
{
    fn score(&self, word: &FoundWord) -> u32 {
        self(word)
    }
}

/// Points looked up by word length. Lengths past the end of the table earn
/// the last entry plus `per_extra` for each additional letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    table: Vec<u32>,
    per_extra: u32,
}

impl LengthTable {
    /// `table[n]` is the score for an `n`-letter word.
    pub fn new(table: Vec<u32>, per_extra: u32) -> Self {
        Self { table, per_extra }
    }

    pub fn points_for_length(&self, len: usize) -> u32 {
        match self.table.get(len) {
            Some(&points) => points,
            None => {
                let last = self.table.len().saturating_sub(1);
                let base = self.table.last().copied().unwrap_or(0);
                let extra = (len - last) as u32;
                base.saturating_add(extra.saturating_mul(self.per_extra))
            }
        }
    }
}

impl Default for LengthTable {
    /// Word-hunt scoring: nothing below three letters, then 100, 400, 800 and
    /// 400 more for each letter after five.
    fn default() -> Self {
        Self::new(vec![0, 0, 0, 100, 400, 800], 400)
    }
}

impl ScoringPolicy for LengthTable {
    fn score(&self, word: &FoundWord) -> u32 {
        self.points_for_length(word.len())
    }
}
