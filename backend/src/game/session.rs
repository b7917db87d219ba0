use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::{
    config::GameConfig,
    game::{hint, GridGenerator, MatchEvaluator, SelectionTracker},
    lexicon::WordEntry,
    models::{Grid, Placements, Position},
};

/// Events the core raises for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GridReady {
        game_id: Uuid,
        category: String,
        grid: Grid,
        words: Vec<String>,
    },
    CellSelected {
        position: Position,
    },
    /// A gesture finished; its cells stay highlighted until cleared
    SelectionEnded {
        cells: Vec<Position>,
    },
    /// `cells` is the gesture path as selected, which may run opposite to
    /// the word's reading order
    WordMatched {
        word: String,
        cells: Vec<Position>,
    },
    AllWordsFound {
        elapsed_ms: i64,
    },
    HintCell {
        position: Position,
    },
}

/// State of one game. A new game replaces the whole session.
pub struct GameSession {
    game_id: Uuid,
    category: String,
    /// Placed words in list order; words that did not fit are dropped
    words: Vec<String>,
    grid: Grid,
    placements: Placements,
    found: HashSet<String>,
    selection: SelectionTracker,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn new(entry: &WordEntry, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let result = GridGenerator::from_config(config).build(&entry.words, rng);

        if !result.skipped.is_empty() {
            tracing::warn!(
                "Category '{}': dropped {} unplaceable word(s): {:?}",
                entry.category,
                result.skipped.len(),
                result.skipped
            );
        }

        let mut words: Vec<String> = Vec::with_capacity(result.placements.len());
        for word in &entry.words {
            if result.placements.contains_key(word) && !words.contains(word) {
                words.push(word.clone());
            }
        }

        Self {
            game_id: Uuid::new_v4(),
            category: entry.category.clone(),
            words,
            grid: result.grid,
            placements: result.placements,
            found: HashSet::new(),
            selection: SelectionTracker::new(config.grid_size),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    pub fn found(&self) -> &HashSet<String> {
        &self.found
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn grid_ready(&self) -> GameEvent {
        GameEvent::GridReady {
            game_id: self.game_id,
            category: self.category.clone(),
            grid: self.grid.clone(),
            words: self.words.clone(),
        }
    }

    pub fn gesture_start(&mut self, position: Position) -> Vec<GameEvent> {
        if self.selection.start(position) {
            vec![GameEvent::CellSelected { position }]
        } else {
            Vec::new()
        }
    }

    pub fn gesture_extend(&mut self, position: Position) -> Vec<GameEvent> {
        if self.selection.extend(position) {
            vec![GameEvent::CellSelected { position }]
        } else {
            Vec::new()
        }
    }

    /// Release or abandonment of a gesture. Evaluates the path and returns
    /// the selection to clear followed by any matches.
    pub fn gesture_end(&mut self) -> Vec<GameEvent> {
        let Some(path) = self.selection.end() else {
            return Vec::new();
        };

        let outcome = MatchEvaluator::evaluate(
            &self.grid,
            &path,
            &self.placements,
            &mut self.found,
            &self.words,
        );

        let mut events = Vec::with_capacity(outcome.newly_found.len() + 2);
        events.push(GameEvent::SelectionEnded { cells: path.clone() });

        for word in outcome.newly_found {
            tracing::debug!("Game {}: found '{}'", self.game_id, word);
            events.push(GameEvent::WordMatched {
                word,
                cells: path.clone(),
            });
        }

        if outcome.completed {
            let now = Utc::now();
            self.completed_at = Some(now);
            let elapsed_ms = (now - self.started_at).num_milliseconds();
            tracing::info!("Game {}: all {} words found in {}ms", self.game_id, self.words.len(), elapsed_ms);
            events.push(GameEvent::AllWordsFound { elapsed_ms });
        }

        events
    }

    pub fn request_hint(&self) -> Option<GameEvent> {
        hint(&self.words, &self.found, &self.placements).map(|position| GameEvent::HintCell { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn session(words: &[&str], seed: u64) -> GameSession {
        let entry = WordEntry::new("Djur", words.iter());
        let mut rng = StdRng::seed_from_u64(seed);
        GameSession::new(&entry, &GameConfig::default(), &mut rng)
    }

    fn select(session: &mut GameSession, cells: &[Position]) -> Vec<GameEvent> {
        session.gesture_start(cells[0]);
        for cell in &cells[1..] {
            session.gesture_extend(*cell);
        }
        session.gesture_end()
    }

    #[test]
    fn test_new_session_places_words() {
        let session = session(&["katt", "hund"], 11);
        assert_eq!(session.words(), &["katt".to_string(), "hund".to_string()]);
        assert_eq!(session.grid().size(), 12);
        assert!(session.found().is_empty());
        assert!(!session.selection().is_selecting());
    }

    #[test]
    fn test_unplaceable_words_are_dropped_from_list() {
        let session = session(&["katt", "miljöförstöringen"], 4);
        assert_eq!(session.words(), &["katt".to_string()]);
    }

    #[test]
    fn test_oversize_builtin_words_are_dropped() {
        let lexicon = crate::lexicon::Lexicon::builtin();
        let entry = lexicon.get("Svårare Ord").unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let session = GameSession::new(entry, &GameConfig::default(), &mut rng);

        for word in ["programmering", "miljöförstöring"] {
            assert!(!session.words().contains(&word.to_string()), "{} should be dropped", word);
            assert!(!session.placements().contains_key(word));
        }
        for word in session.words() {
            assert!(entry.words.contains(word));
            assert!(word.chars().count() <= 12);
        }
    }

    #[test]
    fn test_word_matched_cells_follow_gesture_order() {
        let mut session = session(&["katt"], 6);
        let stored = session.placements()["katt"].clone();
        let mut reversed = stored.clone();
        reversed.reverse();

        let events = select(&mut session, &reversed);
        assert!(events.contains(&GameEvent::WordMatched {
            word: "katt".to_string(),
            cells: reversed,
        }));
        assert_eq!(session.placements()["katt"], stored);
    }

    #[test]
    fn test_grid_ready_event() {
        let session = session(&["katt"], 1);
        match session.grid_ready() {
            GameEvent::GridReady { game_id, category, grid, words } => {
                assert_eq!(game_id, session.game_id());
                assert_eq!(category, "Djur");
                assert_eq!(grid.size(), 12);
                assert_eq!(words, vec!["katt".to_string()]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_reverse_gesture_finds_word() {
        let mut session = session(&["katt", "hund"], 5);
        let mut cells = session.placements()["katt"].clone();
        cells.reverse();

        let events = select(&mut session, &cells);
        assert_eq!(events[0], GameEvent::SelectionEnded { cells: cells.clone() });
        assert_eq!(
            events[1],
            GameEvent::WordMatched {
                word: "katt".to_string(),
                cells: cells.clone()
            }
        );
        assert_eq!(events.len(), 2);
        assert!(session.found().contains("katt"));
    }

    #[test]
    fn test_completion_is_reported_once() {
        let mut session = session(&["katt", "hund"], 8);
        let katt = session.placements()["katt"].clone();
        let hund = session.placements()["hund"].clone();

        select(&mut session, &katt);
        let events = select(&mut session, &hund);
        assert!(matches!(events.last(), Some(GameEvent::AllWordsFound { .. })));
        assert!(session.is_completed());

        let again = select(&mut session, &hund);
        assert_eq!(again, vec![GameEvent::SelectionEnded { cells: hund }]);
    }

    #[test]
    fn test_partial_gesture_only_ends_selection() {
        let mut session = session(&["katt"], 2);
        let cells = session.placements()["katt"][..3].to_vec();
        let events = select(&mut session, &cells);
        assert_eq!(events, vec![GameEvent::SelectionEnded { cells }]);
        assert!(session.found().is_empty());
    }

    #[test]
    fn test_gesture_events() {
        let mut session = session(&["katt"], 2);
        assert!(session.gesture_end().is_empty());

        assert_eq!(
            session.gesture_start(Position::new(0, 0)),
            vec![GameEvent::CellSelected { position: Position::new(0, 0) }]
        );
        assert!(session.gesture_extend(Position::new(0, 0)).is_empty());
        assert!(session.gesture_extend(Position::new(40, 0)).is_empty());
        assert_eq!(session.gesture_extend(Position::new(1, 0)).len(), 1);
    }

    #[test]
    fn test_hint_follows_word_list() {
        let mut session = session(&["katt", "hund"], 3);
        let katt_start = session.placements()["katt"][0];
        assert_eq!(session.request_hint(), Some(GameEvent::HintCell { position: katt_start }));

        let katt = session.placements()["katt"].clone();
        select(&mut session, &katt);
        let hund_start = session.placements()["hund"][0];
        assert_eq!(session.request_hint(), Some(GameEvent::HintCell { position: hund_start }));

        let hund = session.placements()["hund"].clone();
        select(&mut session, &hund);
        assert_eq!(session.request_hint(), None);
    }
}
