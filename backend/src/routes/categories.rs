use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: String,
    pub word_count: usize,
}

/// Categories a client may ask for in `new_game`
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryInfo>> {
    Json(
        state
            .lexicon
            .entries()
            .iter()
            .map(|e| CategoryInfo {
                name: e.category.clone(),
                word_count: e.words.len(),
            })
            .collect(),
    )
}
