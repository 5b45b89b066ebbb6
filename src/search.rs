//! Dictionary-pruned depth-first word search.
//!
//! From every cell the search extends a path one adjacent cell at a time,
//! descending the trie with each letter. A branch ends as soon as the trie
//! has no child for the next letter. While a cell is on the current path it
//! is taken out of the grid and put back when the search backtracks past
//! it, so a path can never reuse a cell and no separate visited set is
//! needed. This requires exclusive access to the grid for the whole search.

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, DIRECTIONS};
use crate::path::PathAccumulator;
use crate::results::ResultSet;
use crate::trie::{Trie, TrieNode};
use tracing::debug;

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest word reported. Must be at least 1.
    pub min_word_length: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(Error::InvalidConfig(
                "minimum word length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_word_length: 1 }
    }
}

/// Finds every dictionary word on a grid. Holds the trie read-only, so one
/// instance can serve many boards, including from several threads at once.
#[derive(Debug, Clone)]
pub struct WordSearch {
    trie: Trie,
    config: SearchConfig,
}

impl WordSearch {
    /// Search with the default configuration. An empty trie is rejected so
    /// an unusable dictionary is never mistaken for a board with no words.
    pub fn new(trie: Trie) -> Result<Self> {
        Self::with_config(trie, SearchConfig::default())
    }

    pub fn with_config(trie: Trie, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        if trie.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        Ok(Self { trie, config })
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every word on `grid`. Cells are removed and restored during the
    /// search; the grid is back to its original content when this returns.
    pub fn find_all_words(&self, grid: &mut Grid) -> ResultSet {
        let mut found = ResultSet::new();
        let mut seeded = 0usize;

        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                let Some(cell) = grid.get(x, y) else {
                    continue;
                };
                let Some(node) = self.trie.root().child(cell.letter) else {
                    continue;
                };
                seeded += 1;
                let mut path = PathAccumulator::starting_at(cell);
                self.explore(grid, cell, &mut path, node, &mut found);
                debug_assert_eq!(path.len(), 1);
            }
        }

        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            seeded,
            words = found.len(),
            "search finished"
        );
        found
    }

    /// Search a private copy of `grid`, leaving the caller's board untouched.
    /// Use this when several searches share one board.
    pub fn find_all_words_in(&self, grid: &Grid) -> ResultSet {
        let mut scratch = grid.clone();
        self.find_all_words(&mut scratch)
    }

    /// `path` ends at `cell`, and `node` is the trie node for `path`.
    fn explore(
        &self,
        grid: &mut Grid,
        cell: Cell,
        path: &mut PathAccumulator,
        node: &TrieNode,
        found: &mut ResultSet,
    ) {
        if node.is_terminal() && path.len() >= self.config.min_word_length {
            found.insert(path.to_found_word());
        }
        if !node.has_children() {
            return;
        }

        let taken = grid.take(cell.coord);
        debug_assert_eq!(taken, Some(cell));

        for direction in DIRECTIONS {
            let Some(next) = grid.offset(cell.coord, direction) else {
                continue;
            };
            let Some(next_cell) = grid.get(next.x, next.y) else {
                continue;
            };
            let Some(child) = node.child(next_cell.letter) else {
                continue;
            };

            path.push(next_cell);
            self.explore(grid, next_cell, path, child, found);
            let popped = path.pop();
            debug_assert_eq!(popped, next_cell);
        }

        grid.set(cell.coord.x, cell.coord.y, taken);
    }
}
