//! # Wordhunt Bot
//!
//! Finds every dictionary word that can be traced through a Boggle-style
//! letter grid, moving between the 8 neighbors of each cell and never using a
//! cell twice in one word.
//!
//! The dictionary is loaded into a trie, and a depth-first search from each
//! cell descends the trie alongside the grid, so paths that cannot lead to a
//! word are abandoned after the first letter that rules them out.

pub mod benchmark;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod path;
pub mod results;
pub mod scoring;
pub mod search;
pub mod trie;

pub use dictionary::{default_trie, load_dictionary, load_trie};
pub use error::{Error, Result};
pub use grid::{Cell, Coord, Grid, Letter};
pub use path::{FoundWord, PathAccumulator};
pub use results::ResultSet;
pub use scoring::{LengthTable, ScoringPolicy};
pub use search::{SearchConfig, WordSearch};
pub use trie::{Trie, TrieNode};
