//! Secret generation
//!
//! Two ways to produce a target word: uniform random characters over the
//! configured alphabet (the default, so the secret is usually not a real
//! word), or a word sampled from a loaded list. Either way the source hands
//! out one secret per game and can be seeded for reproducible runs.

use crate::core::{GameConfig, GameError};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces one secret per game
#[derive(Debug, Clone)]
pub struct SecretSource {
    rng: StdRng,
    words: Option<Vec<String>>,
}

impl SecretSource {
    /// Random characters drawn uniformly from the configured alphabet
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        Self {
            rng: make_rng(seed),
            words: None,
        }
    }

    /// Sample secrets from a word list
    ///
    /// Entries are normalized per the config's case handling; anything with
    /// the wrong length or characters outside the alphabet is skipped.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidConfiguration`] if no entry fits the
    /// game settings.
    pub fn from_words(
        words: Vec<String>,
        config: &GameConfig,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let suitable: Vec<String> = words
            .into_iter()
            .map(|word| config.normalize(word.trim()))
            .filter(|word| {
                word.chars().count() == config.word_length()
                    && word.chars().all(|ch| config.in_alphabet(ch))
            })
            .collect();

        if suitable.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "word list has no entries matching the game settings".to_string(),
            ));
        }

        Ok(Self {
            rng: make_rng(seed),
            words: Some(suitable),
        })
    }

    /// Whether secrets come from a word list rather than random characters
    #[inline]
    #[must_use]
    pub const fn uses_word_list(&self) -> bool {
        self.words.is_some()
    }

    /// Produce the next secret
    pub fn next_secret(&mut self, config: &GameConfig) -> String {
        if let Some(words) = &self.words {
            // from_words guarantees the list is non-empty
            words.choose(&mut self.rng).cloned().unwrap_or_default()
        } else {
            let alphabet = config.alphabet();
            (0..config.word_length())
                .map(|_| alphabet[self.rng.random_range(0..alphabet.len())])
                .collect()
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_secret_fits_the_config() {
        let config = GameConfig::default();
        let mut source = SecretSource::random(None);

        for _ in 0..20 {
            let secret = source.next_secret(&config);
            assert_eq!(secret.chars().count(), 5);
            assert!(secret.chars().all(|ch| ch.is_ascii_lowercase()));
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let config = GameConfig::default();
        let mut first = SecretSource::random(Some(42));
        let mut second = SecretSource::random(Some(42));

        for _ in 0..5 {
            assert_eq!(first.next_secret(&config), second.next_secret(&config));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let config = GameConfig::default();
        let mut first = SecretSource::random(Some(1));
        let mut second = SecretSource::random(Some(2));

        let a: Vec<String> = (0..5).map(|_| first.next_secret(&config)).collect();
        let b: Vec<String> = (0..5).map(|_| second.next_secret(&config)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn word_list_source_skips_unsuitable_entries() {
        let config = GameConfig::default();
        let words = vec![
            "apple".to_string(),
            "toolong".to_string(),
            "abc".to_string(),
            "  apple  ".to_string(),
            "caf3s".to_string(),
        ];
        let mut source = SecretSource::from_words(words, &config, Some(7)).unwrap();

        for _ in 0..10 {
            assert_eq!(source.next_secret(&config), "apple");
        }
    }

    #[test]
    fn word_list_with_nothing_suitable_is_an_error() {
        let config = GameConfig::default();
        let words = vec!["toolong".to_string(), "nope1".to_string()];
        let result = SecretSource::from_words(words, &config, None);
        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn word_list_entries_are_case_folded_when_insensitive() {
        let config = GameConfig::new(5, 6, ('a'..='z').collect(), false).unwrap();
        let words = vec!["APPLE".to_string()];
        let mut source = SecretSource::from_words(words, &config, None).unwrap();
        assert_eq!(source.next_secret(&config), "apple");
    }

    #[test]
    fn respects_custom_length_and_alphabet() {
        let config = GameConfig::new(3, 6, vec!['0', '1'], true).unwrap();
        let mut source = SecretSource::random(Some(9));

        let secret = source.next_secret(&config);
        assert_eq!(secret.chars().count(), 3);
        assert!(secret.chars().all(|ch| ch == '0' || ch == '1'));
    }
}
