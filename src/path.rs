//! The word being assembled during the search, and the words it produces.

use crate::grid::{Cell, Coord};
use std::fmt;

/// Ordered cells chosen so far, first cell first. `push` and `pop` are
/// exact inverses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAccumulator {
    cells: Vec<Cell>,
}

impl PathAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path holding only `cell`.
    pub fn starting_at(cell: Cell) -> Self {
        let mut path = Self::with_capacity(16);
        path.push(cell);
        path
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Remove and return the most recently pushed cell.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty; every pop must match an earlier push.
    pub fn pop(&mut self) -> Cell {
        match self.cells.pop() {
            Some(cell) => cell,
            None => panic!("pop called on an empty path"),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The letters of the path concatenated in order.
    pub fn render(&self) -> String {
        self.cells.iter().map(|cell| cell.letter.to_char()).collect()
    }

    pub fn coordinates(&self) -> Vec<Coord> {
        self.cells.iter().map(|cell| cell.coord).collect()
    }

    /// Snapshot the path as a found word.
    pub fn to_found_word(&self) -> FoundWord {
        FoundWord::new(self.render(), self.coordinates())
    }
}

impl fmt::Display for PathAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A dictionary word together with the grid path that spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundWord {
    word: String,
    path: Vec<Coord>,
}

impl FoundWord {
    pub fn new(word: String, path: Vec<Coord>) -> Self {
        debug_assert_eq!(word.len(), path.len());
        Self { word, path }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// True if every step of the path moves to an adjacent cell and no
    /// coordinate repeats.
    pub fn is_connected_walk(&self) -> bool {
        let steps_ok = self.path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]));
        let mut seen = self.path.clone();
        seen.sort_unstable();
        seen.dedup();
        steps_ok && seen.len() == self.path.len()
    }
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word.to_uppercase())?;
        for (i, coord) in self.path.iter().enumerate() {
            write!(f, "{}{}", if i == 0 { " " } else { " -> " }, coord)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Letter;

    fn cell(x: usize, y: usize, c: char) -> Cell {
        Cell::new(Coord::new(x, y), Letter::from_char(c).unwrap())
    }

    #[test]
    fn test_pop_restores_previous_state() {
        let mut path = PathAccumulator::starting_at(cell(0, 0, 'c'));
        let before = path.clone();
        path.push(cell(1, 0, 'a'));
        assert_eq!(path.render(), "ca");
        assert_eq!(path.pop(), cell(1, 0, 'a'));
        assert_eq!(path, before);
    }

    #[test]
    #[should_panic(expected = "empty path")]
    fn test_pop_empty_panics() {
        PathAccumulator::new().pop();
    }

    #[test]
    fn test_walk_rejects_jumps_and_repeats() {
        let walk = |word: &str, steps: &[(usize, usize)]| {
            let path = steps.iter().map(|&(x, y)| Coord::new(x, y)).collect();
            FoundWord::new(word.into(), path)
        };

        assert!(walk("cat", &[(0, 0), (1, 0), (0, 1)]).is_connected_walk());
        assert!(!walk("cat", &[(0, 0), (2, 0), (1, 1)]).is_connected_walk());
        assert!(!walk("aba", &[(0, 0), (1, 0), (0, 0)]).is_connected_walk());
    }
}
