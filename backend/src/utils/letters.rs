use once_cell::sync::Lazy;
use rand::Rng;

use crate::error::GameError;

/// Fill alphabet covering every letter of the built-in Swedish lexicon
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzåäö";

static DEFAULT_LETTERS: Lazy<Vec<char>> = Lazy::new(|| DEFAULT_ALPHABET.chars().collect());

/// Letters used to fill the grid cells no word occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Parse an alphabet from a string. Letters are lowercased, whitespace is
    /// ignored and repeated letters are kept once so the draw stays uniform.
    pub fn parse(source: &str) -> Result<Self, GameError> {
        let mut letters: Vec<char> = Vec::new();
        for ch in source.chars().filter(|c| !c.is_whitespace()) {
            for lower in ch.to_lowercase() {
                if !letters.contains(&lower) {
                    letters.push(lower);
                }
            }
        }

        if letters.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }

        Ok(Self { letters })
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Draw a letter uniformly at random
    pub fn random_letter(&self, rng: &mut impl Rng) -> char {
        self.letters[rng.random_range(0..self.letters.len())]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_LETTERS.clone(),
        }
    }
}

/// Lowercase and trim a word before it is placed or compared
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_alphabet_has_swedish_letters() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.letters().len(), 29);
        for ch in ['å', 'ä', 'ö'] {
            assert!(alphabet.contains(ch));
        }
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let alphabet = Alphabet::parse("AaB b cÅ").unwrap();
        assert_eq!(alphabet.letters(), &['a', 'b', 'c', 'å']);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Alphabet::parse("  "), Err(GameError::EmptyAlphabet));
    }

    #[test]
    fn test_random_letter_is_from_alphabet() {
        let alphabet = Alphabet::parse("xyz").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(alphabet.contains(alphabet.random_letter(&mut rng)));
        }
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Fågel "), "fågel");
        assert_eq!(normalize_word("ÖREBRO"), "örebro");
    }
}
