use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Straight-line direction a word may be laid out in. Words always read
/// forward along the direction; reversed selection is handled at match time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right.
    Diagonal,
}

impl Direction {
    /// Row and column offset of the `i`-th letter from the starting cell.
    pub fn offset(self, i: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, i),
            Direction::Vertical => (i, 0),
            Direction::Diagonal => (i, i),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "diagonal" => Ok(Direction::Diagonal),
            other => Err(GameError::UnknownDirection(other.to_string())),
        }
    }
}

/// A fully filled square letter grid. Read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from complete rows. Returns `None` unless the rows form
    /// a non-empty square.
    pub fn from_rows(cells: Vec<Vec<char>>) -> Option<Self> {
        let size = cells.len();
        if size == 0 || cells.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self { size, cells })
    }

    /// Build a `size`x`size` grid, asking `letter_at` for every cell in
    /// row-major order.
    pub fn from_fn(size: usize, mut letter_at: impl FnMut(Position) -> char) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| letter_at(Position::new(row, col))).collect())
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn letter(&self, pos: &Position) -> Option<char> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }
}

/// Word -> cells spelling it, in reading order.
pub type Placements = HashMap<String, Vec<Position>>;
