use rand::Rng;

use crate::{
    config::GameConfig,
    models::{Direction, Grid, Placements, Position},
    utils::letters::{normalize_word, Alphabet},
};

/// Grid cells while words are still being laid out; `None` is an empty cell
type Draft = Vec<Vec<Option<char>>>;

/// Output of one grid build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub grid: Grid,
    pub placements: Placements,
    /// Words that could not be placed within the attempt budget, in input order
    pub skipped: Vec<String>,
}

pub struct GridGenerator {
    size: usize,
    max_attempts: u32,
    directions: Vec<Direction>,
    alphabet: Alphabet,
}

impl GridGenerator {
    pub fn new(size: usize, max_attempts: u32, directions: Vec<Direction>, alphabet: Alphabet) -> Self {
        Self {
            size,
            max_attempts,
            directions,
            alphabet,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.grid_size,
            config.max_placement_attempts,
            config.directions.clone(),
            config.alphabet.clone(),
        )
    }

    /// Hide `words` in a fresh `size`x`size` grid and fill the rest with
    /// random letters.
    ///
    /// Each word gets `max_attempts` random (direction, start) picks. Words
    /// may cross where they share a letter. A word that never fits is
    /// skipped and reported; building always terminates.
    pub fn build<S: AsRef<str>>(&self, words: &[S], rng: &mut impl Rng) -> BuildResult {
        let mut draft: Draft = vec![vec![None; self.size]; self.size];
        let mut placements = Placements::new();
        let mut skipped = Vec::new();

        for word in words {
            let word = normalize_word(word.as_ref());
            if word.is_empty() || placements.contains_key(&word) {
                continue;
            }

            let letters: Vec<char> = word.chars().collect();
            match self.place_word(&mut draft, &letters, rng) {
                Some(cells) => {
                    tracing::debug!("Placed '{}' at {:?}", word, cells.first());
                    placements.insert(word, cells);
                }
                None => {
                    tracing::warn!(
                        "Could not place word '{}' after {} attempts",
                        word,
                        self.max_attempts
                    );
                    skipped.push(word);
                }
            }
        }

        let grid = Grid::from_fn(self.size, |pos| {
            draft[pos.row][pos.col].unwrap_or_else(|| self.alphabet.random_letter(&mut *rng))
        });

        BuildResult {
            grid,
            placements,
            skipped,
        }
    }

    fn place_word(&self, draft: &mut Draft, letters: &[char], rng: &mut impl Rng) -> Option<Vec<Position>> {
        if self.size == 0 || self.directions.is_empty() {
            return None;
        }

        for _ in 0..self.max_attempts {
            let direction = self.directions[rng.random_range(0..self.directions.len())];
            let start = Position::new(rng.random_range(0..self.size), rng.random_range(0..self.size));

            if let Some(cells) = Self::fit(draft, letters, start, direction) {
                for (cell, letter) in cells.iter().zip(letters) {
                    draft[cell.row][cell.col] = Some(*letter);
                }
                return Some(cells);
            }
        }

        None
    }

    /// Cells the word would occupy from `start`, if every one is on the grid
    /// and either empty or already holding the same letter
    fn fit(draft: &Draft, letters: &[char], start: Position, direction: Direction) -> Option<Vec<Position>> {
        let size = draft.len();
        let mut cells = Vec::with_capacity(letters.len());

        for (i, letter) in letters.iter().enumerate() {
            let (dr, dc) = direction.offset(i);
            let pos = Position::new(start.row + dr, start.col + dc);
            if pos.row >= size || pos.col >= size {
                return None;
            }
            match draft[pos.row][pos.col] {
                Some(existing) if existing != *letter => return None,
                _ => cells.push(pos),
            }
        }

        Some(cells)
    }
}
