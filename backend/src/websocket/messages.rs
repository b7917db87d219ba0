use serde::{Deserialize, Serialize};

use crate::{game::GameEvent, models::Position};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Start over, with a named category or a random one
    NewGame {
        #[serde(default)]
        category: Option<String>,
    },
    GestureStart {
        position: Position,
    },
    GestureExtend {
        position: Position,
    },
    GestureEnd,
    /// Pointer left the grid mid-gesture
    GestureCancel,
    RequestHint,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GridReady {
        game_id: String,
        category: String,
        size: usize,
        grid: Vec<Vec<char>>,
        words: Vec<String>,
    },
    CellSelected {
        position: Position,
    },
    /// `cells` in the order the player selected them
    WordMatched {
        word: String,
        cells: Vec<Position>,
    },
    SelectionCleared {
        cells: Vec<Position>,
    },
    AllWordsFound {
        elapsed_ms: i64,
    },
    HintCell {
        position: Position,
    },
    HintCleared {
        position: Position,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    /// Wire form of an event that is delivered immediately. Events whose
    /// delivery is delayed or split (selection end, completion) return `None`.
    pub fn immediate(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::GridReady {
                game_id,
                category,
                grid,
                words,
            } => Some(ServerMessage::GridReady {
                game_id: game_id.to_string(),
                category: category.clone(),
                size: grid.size(),
                grid: grid.rows().to_vec(),
                words: words.clone(),
            }),
            GameEvent::CellSelected { position } => Some(ServerMessage::CellSelected { position: *position }),
            GameEvent::WordMatched { word, cells } => Some(ServerMessage::WordMatched {
                word: word.clone(),
                cells: cells.clone(),
            }),
            GameEvent::HintCell { position } => Some(ServerMessage::HintCell { position: *position }),
            GameEvent::SelectionEnded { .. } | GameEvent::AllWordsFound { .. } => None,
        }
    }
}
