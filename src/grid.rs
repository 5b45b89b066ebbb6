//! The letter grid searched by the engine.
//!
//! A [`Grid`] is a fixed `rows x cols` matrix of optional [`Cell`]s. A cell
//! is either present (it carries a letter) or absent, which is how the search
//! marks a cell as already used by the path it is currently building.
//! Coordinates are `(x, y)` with `x` the column and `y` the row.

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Default board height.
pub const DEFAULT_ROWS: usize = 4;

/// Default board width.
pub const DEFAULT_COLS: usize = 4;

/// Neighbor offsets `(dx, dy)` in the order the search visits them.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Relative frequency of each letter in English text, in tenths of a percent.
/// Used to draw letters for random boards.
const LETTER_WEIGHTS: [u32; ALPHABET_SIZE] = [
    82, 15, 28, 43, 127, 22, 20, 61, 70, 2, 8, 40, 24, 67, 75, 19, 1, 60, 63, 91, 28, 10, 24, 2,
    20, 1,
];

/// A lower-case ASCII letter, stored as its rank in the alphabet (`a` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse from a character; upper-case input is folded to lower case.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Build from a rank in `0..26`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Draw a letter weighted by English letter frequency.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let total: u32 = LETTER_WEIGHTS.iter().sum();
        let mut pick = rng.random_range(0..total);
        for (index, &weight) in LETTER_WEIGHTS.iter().enumerate() {
            if pick < weight {
                return Self(index as u8);
            }
            pick -= weight;
        }
        unreachable!("weighted pick exceeded the weight total")
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True if `other` is one of the 8 cells surrounding this one.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A letter at a position. Two cells with the same letter at different
/// coordinates are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub coord: Coord,
    pub letter: Letter,
}

impl Cell {
    pub fn new(coord: Coord, letter: Letter) -> Self {
        Self { coord, letter }
    }
}

/// A fixed-size board of letter cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    /// Build a grid from rows of letters. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: &[Vec<Letter>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(Error::InvalidGrid("grid must have at least one cell".into()));
        }

        let mut cells = Vec::with_capacity(height * width);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} letters, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for (x, &letter) in row.iter().enumerate() {
                cells.push(Some(Cell::new(Coord::new(x, y), letter)));
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Generate a board whose letters follow English letter frequencies.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Result<Self> {
        let letters: Vec<Vec<Letter>> = (0..rows)
            .map(|_| (0..cols).map(|_| Letter::random(rng)).collect())
            .collect();
        Self::from_rows(&letters)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Step from `coord` by `(dx, dy)`, returning `None` when the result
    /// falls off the board.
    pub fn offset(&self, coord: Coord, (dx, dy): (isize, isize)) -> Option<Coord> {
        let x = coord.x.checked_add_signed(dx)?;
        let y = coord.y.checked_add_signed(dy)?;
        if self.in_bounds(x, y) {
            Some(Coord::new(x, y))
        } else {
            None
        }
    }

    /// The cell at `(x, y)`, or `None` if it is absent or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if self.in_bounds(x, y) {
            self.cells[y * self.cols + x]
        } else {
            None
        }
    }

    /// Replace the content at `(x, y)`, returning what was there.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid, or if `cell` belongs to a
    /// different coordinate.
    pub fn set(&mut self, x: usize, y: usize, cell: Option<Cell>) -> Option<Cell> {
        assert!(
            self.in_bounds(x, y),
            "set({}, {}) outside {}x{} grid",
            x,
            y,
            self.rows,
            self.cols
        );
        if let Some(cell) = cell {
            assert_eq!(
                cell.coord,
                Coord::new(x, y),
                "cell for {} stored at ({}, {})",
                cell.coord,
                x,
                y
            );
        }
        std::mem::replace(&mut self.cells[y * self.cols + x], cell)
    }

    /// Mark the cell at `coord` absent, returning it so it can be restored.
    pub fn take(&mut self, coord: Coord) -> Option<Cell> {
        self.set(coord.x, coord.y, None)
    }

    /// Every present cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Letters present on the board, in row-major order.
    pub fn letters(&self) -> String {
        self.cells().map(|cell| cell.letter.to_char()).collect()
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse rows separated by `/`, `,` or newlines, e.g. `"ca/ts"`.
    /// Whitespace inside a row is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for row in s.split(|c: char| c == '/' || c == ',' || c == '\n') {
            let row = row.trim();
            if row.is_empty() {
                continue;
            }
            let letters = row
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Letter::from_char(c)
                        .ok_or_else(|| Error::InvalidGrid(format!("{:?} is not a letter", c)))
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(letters);
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.get(x, y) {
                    Some(cell) => write!(f, "{}", cell.letter.to_char().to_ascii_uppercase())?,
                    None => write!(f, ".")?,
                }
            }
            if y + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
