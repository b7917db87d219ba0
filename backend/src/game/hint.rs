use std::collections::HashSet;

use crate::models::{Placements, Position};

/// First cell of the first word, in list order, that is still hidden.
/// `None` once every word is found.
pub fn hint(words: &[String], found: &HashSet<String>, placements: &Placements) -> Option<Position> {
    words
        .iter()
        .filter(|w| !found.contains(*w))
        .find_map(|w| placements.get(w).and_then(|cells| cells.first()).copied())
}
