use anyhow::{Context, Result};
use std::{env, time::Duration};

use crate::{
    error::GameError,
    models::Direction,
    utils::letters::{Alphabet, DEFAULT_ALPHABET},
};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Lexicon file; the built-in table is used when unset
    pub lexicon_path: Option<String>,
    pub grid_size: usize,
    pub max_placement_attempts: u32,
    pub directions: Vec<Direction>,
    pub alphabet: Alphabet,
    /// How long a finished selection stays highlighted
    pub selection_clear: Duration,
    /// How long a hinted cell stays highlighted
    pub hint_clear: Duration,
    /// Delay before the all-words-found notice
    pub completion_notice: Duration,
    /// Fixed seed for reproducible grids
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            grid_size: 12,
            max_placement_attempts: 100,
            directions: vec![Direction::Horizontal, Direction::Vertical],
            alphabet: Alphabet::default(),
            selection_clear: Duration::from_millis(500),
            hint_clear: Duration::from_millis(1000),
            completion_notice: Duration::from_millis(300),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    /// for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: lookup("FRONTEND_DIR").unwrap_or_else(|| "../frontend".to_string()),
        };

        let defaults = GameConfig::default();

        let grid_size: usize = match lookup("GRID_SIZE") {
            Some(v) => v.parse().context("GRID_SIZE must be a number")?,
            None => defaults.grid_size,
        };
        if grid_size == 0 {
            return Err(GameError::InvalidGridSize.into());
        }

        let directions = match lookup("DIRECTIONS") {
            Some(v) => parse_directions(&v)?,
            None => defaults.directions,
        };

        let alphabet = Alphabet::parse(
            &lookup("ALPHABET").unwrap_or_else(|| DEFAULT_ALPHABET.to_string()),
        )?;

        let game = GameConfig {
            lexicon_path: lookup("LEXICON_PATH").filter(|p| !p.trim().is_empty()),
            grid_size,
            max_placement_attempts: match lookup("MAX_PLACEMENT_ATTEMPTS") {
                Some(v) => v.parse().context("MAX_PLACEMENT_ATTEMPTS must be a number")?,
                None => defaults.max_placement_attempts,
            },
            directions,
            alphabet,
            selection_clear: millis(&lookup, "SELECTION_CLEAR_MS", defaults.selection_clear)?,
            hint_clear: millis(&lookup, "HINT_CLEAR_MS", defaults.hint_clear)?,
            completion_notice: millis(&lookup, "COMPLETION_NOTICE_MS", defaults.completion_notice)?,
            seed: lookup("WORD_SEARCH_SEED")
                .map(|v| v.parse().context("WORD_SEARCH_SEED must be a number"))
                .transpose()?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Duration) -> Result<Duration> {
    match lookup(key) {
        Some(v) => {
            let ms: u64 = v
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", key))?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(default),
    }
}

/// Parse a comma-separated direction list, e.g. `horizontal,vertical`
pub fn parse_directions(value: &str) -> Result<Vec<Direction>, GameError> {
    let mut directions = Vec::new();
    for part in value.split(',').filter(|p| !p.trim().is_empty()) {
        let direction: Direction = part.parse()?;
        if !directions.contains(&direction) {
            directions.push(direction);
        }
    }

    if directions.is_empty() {
        return Err(GameError::NoDirections);
    }
    Ok(directions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.server.frontend_dir, "../frontend");
        assert_eq!(config.game.grid_size, 12);
        assert_eq!(config.game.max_placement_attempts, 100);
        assert_eq!(config.game.directions, vec![Direction::Horizontal, Direction::Vertical]);
        assert_eq!(config.game.selection_clear, Duration::from_millis(500));
        assert_eq!(config.game.hint_clear, Duration::from_millis(1000));
        assert!(config.game.seed.is_none());
        assert!(config.game.lexicon_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("GRID_SIZE", "15"),
            ("DIRECTIONS", "diagonal, horizontal"),
            ("HINT_CLEAR_MS", "250"),
            ("WORD_SEARCH_SEED", "99"),
            ("ALPHABET", "abc"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.game.grid_size, 15);
        assert_eq!(config.game.directions, vec![Direction::Diagonal, Direction::Horizontal]);
        assert_eq!(config.game.hint_clear, Duration::from_millis(250));
        assert_eq!(config.game.seed, Some(99));
        assert_eq!(config.game.alphabet.letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("GRID_SIZE", "0")]).is_err());
        assert!(config_from(&[("DIRECTIONS", " , ")]).is_err());
        assert!(config_from(&[("DIRECTIONS", "spiral")]).is_err());
        assert!(config_from(&[("SELECTION_CLEAR_MS", "-1")]).is_err());
    }
}
