mod builtin;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use tokio::fs;

use crate::{
    error::GameError,
    utils::letters::{normalize_word, Alphabet},
};

use builtin::BUILTIN_SETS;

/// A themed list of words to hide in one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub category: String,
    pub words: Vec<String>,
}

impl WordEntry {
    pub fn new(category: impl Into<String>, words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            category: category.into(),
            words: words
                .into_iter()
                .map(|w| normalize_word(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

pub struct Lexicon {
    entries: Vec<WordEntry>,
}

impl Lexicon {
    /// The built-in Swedish category table
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SETS
                .iter()
                .map(|(category, words)| WordEntry::new(*category, words.iter()))
                .collect(),
        }
    }

    /// Load a lexicon from a file with one `Category: word, word` line per
    /// category
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let lexicon = Self::parse(&content)?;

        tracing::info!("Loaded {} categories into lexicon", lexicon.len());

        Ok(lexicon)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (category, words) = line
                .split_once(':')
                .with_context(|| format!("Line {}: expected `Category: word, word`", idx + 1))?;

            let entry = WordEntry::new(category.trim(), words.split(','));
            if entry.words.is_empty() {
                tracing::warn!("Skipping category '{}' with no words", entry.category);
                continue;
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(GameError::EmptyLexicon.into());
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Look up a category by name, ignoring case
    pub fn get(&self, category: &str) -> Result<&WordEntry, GameError> {
        let wanted = category.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.category.to_lowercase() == wanted)
            .ok_or_else(|| GameError::UnknownCategory(category.to_string()))
    }

    pub fn random_entry(&self, rng: &mut impl Rng) -> Result<&WordEntry, GameError> {
        if self.entries.is_empty() {
            return Err(GameError::EmptyLexicon);
        }
        Ok(&self.entries[rng.random_range(0..self.entries.len())])
    }

    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.category.as_str()).collect()
    }

    /// Letters used by some word that the fill alphabet does not contain.
    /// Filler drawn from such an alphabet would give those letters away.
    pub fn missing_letters(&self, alphabet: &Alphabet) -> BTreeSet<char> {
        self.entries
            .iter()
            .flat_map(|e| e.words.iter())
            .flat_map(|w| w.chars())
            .filter(|ch| !alphabet.contains(*ch))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
