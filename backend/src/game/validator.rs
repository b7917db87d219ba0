use crate::models::{Grid, Placements, Position};
use std::collections::HashSet;

/// Words committed by one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub newly_found: Vec<String>,
    /// True only for the evaluation that found the last remaining word
    pub completed: bool,
}

pub struct MatchEvaluator;

impl MatchEvaluator {
    /// Check a finished selection against the hidden words.
    ///
    /// A word matches when it is not yet found, the selected letters spell it
    /// forward or backward, and the selected cells are exactly the cells it
    /// was placed on. Matches are added to `found`.
    pub fn evaluate(
        grid: &Grid,
        path: &[Position],
        placements: &Placements,
        found: &mut HashSet<String>,
        words: &[String],
    ) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();

        let Some(forward) = Self::extract_word(grid, path) else {
            return outcome;
        };
        let backward: String = forward.chars().rev().collect();

        for word in words {
            if found.contains(word) || (*word != forward && *word != backward) {
                continue;
            }

            let Some(cells) = placements.get(word) else {
                continue;
            };

            if Self::same_cells(path, cells) {
                found.insert(word.clone());
                outcome.newly_found.push(word.clone());
            }
        }

        outcome.completed =
            !outcome.newly_found.is_empty() && words.iter().all(|w| found.contains(w));

        outcome
    }

    /// Extract word from grid positions. `None` if any position is off the grid.
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> Option<String> {
        positions.iter().map(|pos| grid.letter(pos)).collect()
    }

    /// Unordered comparison, so either reading direction is accepted
    fn same_cells(path: &[Position], placement: &[Position]) -> bool {
        if path.len() != placement.len() {
            return false;
        }
        let selected: HashSet<&Position> = path.iter().collect();
        let placed: HashSet<&Position> = placement.iter().collect();
        selected == placed
    }
}
