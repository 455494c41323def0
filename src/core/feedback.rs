//! Guess feedback calculation and representation
//!
//! Feedback classifies every position of a guess against the secret:
//! - `Exact` - right character, right position
//! - `Present` - character occurs in the secret, but elsewhere
//! - `Absent` - character does not occur (or all its occurrences are taken)
//!
//! Duplicate letters follow multiset semantics: a secret character can back
//! at most one `Exact` or `Present` mark, with exact matches claiming their
//! character first.

use super::GameError;
use rustc_hash::FxHashMap;

/// Classification of a single guessed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right character in the right position
    Exact,
    /// Character exists in the secret at a different position
    Present,
    /// Character not in the secret, or its occurrences are already claimed
    Absent,
}

impl Mark {
    /// Indicator printed beneath the guess in the classic CLI presentation
    ///
    /// A space means the character above is correct, `*` that it is
    /// misplaced, `^` that it is not in the secret.
    #[inline]
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::Exact => ' ',
            Self::Present => '*',
            Self::Absent => '^',
        }
    }

    /// Emoji square for share-style output
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess
///
/// Index-aligned with the guess: `marks()[i]` describes the character the
/// player put at position `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Pure function. Both strings must have the same nonzero length.
    ///
    /// # Algorithm
    /// 1. Count each secret character into an availability table.
    /// 2. First pass: mark exact position matches and claim their character
    ///    from the table, so it cannot also satisfy a `Present` elsewhere.
    /// 3. Second pass, left to right: remaining positions consume what is
    ///    left of their character's count, or go `Absent` once it runs out.
    ///
    /// The left-to-right order of the second pass is part of the contract:
    /// when the guess repeats a letter more often than the secret holds it,
    /// the leftmost occurrences win the `Present` marks.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLength`] if the lengths differ or are
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::score("abcde", "edcba").unwrap();
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Present, Mark::Exact, Mark::Present, Mark::Present]
    /// );
    /// ```
    pub fn score(secret: &str, guess: &str) -> Result<Self, GameError> {
        let secret: Vec<char> = secret.chars().collect();
        let guess: Vec<char> = guess.chars().collect();

        if secret.is_empty() || secret.len() != guess.len() {
            return Err(GameError::InvalidLength {
                expected: secret.len(),
                found: guess.len(),
            });
        }

        let mut marks = vec![Mark::Absent; guess.len()];

        // Count of each secret character not yet claimed by a match
        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &ch in &secret {
            *available.entry(ch).or_insert(0) += 1;
        }

        // First pass: exact matches claim their character
        for (i, &ch) in guess.iter().enumerate() {
            if ch == secret[i] {
                marks[i] = Mark::Exact;
                if let Some(count) = available.get_mut(&ch) {
                    *count -= 1;
                }
            }
        }

        // Second pass, left to right: misplaced characters draw from the
        // remaining pool; excess repeats go Absent
        for (i, &ch) in guess.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&ch)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self(marks))
    }

    /// Whether every position is `Exact` (a winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Exact)
    }

    /// The classifications, index-aligned with the guess
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions (equals the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(secret: &str, guess: &str) -> Vec<Mark> {
        Feedback::score(secret, guess).unwrap().marks().to_vec()
    }

    #[test]
    fn identical_strings_are_all_exact() {
        let feedback = Feedback::score("apple", "apple").unwrap();
        assert!(feedback.is_win());
        assert_eq!(feedback.marks(), &[Mark::Exact; 5]);
    }

    #[test]
    fn disjoint_strings_are_all_absent() {
        let feedback = Feedback::score("abcde", "fghij").unwrap();
        assert!(!feedback.is_win());
        assert_eq!(feedback.marks(), &[Mark::Absent; 5]);
    }

    #[test]
    fn reversed_word_keeps_only_middle_exact() {
        assert_eq!(
            marks("abcde", "edcba"),
            vec![
                Mark::Present,
                Mark::Present,
                Mark::Exact,
                Mark::Present,
                Mark::Present
            ]
        );
    }

    #[test]
    fn duplicate_letters_exact_match_claims_first() {
        // APPLE vs PLPLA:
        // Pass 1: only index 2 matches ('p' == 'p'), leaving {a:1, p:1, l:1, e:1}.
        // Pass 2: index 0 'p' -> Present (pool empties), index 1 'l' -> Present,
        // index 3 'l' -> Absent (no 'l' left), index 4 'a' -> Present.
        assert_eq!(
            marks("apple", "plpla"),
            vec![
                Mark::Present,
                Mark::Present,
                Mark::Exact,
                Mark::Absent,
                Mark::Present
            ]
        );
    }

    #[test]
    fn duplicate_letters_leftmost_present_wins() {
        // SPEED vs ERASE: both E's in the guess are Present because ERASE
        // holds two E's; S is Present, P and D are Absent.
        assert_eq!(
            marks("erase", "speed"),
            vec![
                Mark::Present,
                Mark::Absent,
                Mark::Present,
                Mark::Present,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: the second O sits on an exact match, so it claims
        // one of FLOOR's O's first; the first O still finds the other one.
        assert_eq!(
            marks("floor", "robot"),
            vec![
                Mark::Present,
                Mark::Present,
                Mark::Absent,
                Mark::Exact,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn excess_repeats_go_absent_on_the_right() {
        // Secret holds one 'a'; the guess offers three. Only the leftmost
        // non-exact one is Present.
        assert_eq!(
            marks("abcde", "aaaxx"),
            vec![
                Mark::Exact,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent
            ]
        );
        assert_eq!(
            marks("xbcda", "aayyy"),
            vec![
                Mark::Present,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn multiset_law_holds() {
        // Exact + Present marks on a character never exceed its count in
        // the secret.
        for (secret, guess) in [
            ("apple", "plpla"),
            ("erase", "speed"),
            ("floor", "robot"),
            ("aabbb", "bbaaa"),
            ("zzzzz", "zazaz"),
        ] {
            let feedback = Feedback::score(secret, guess).unwrap();
            for ch in "abcdefghijklmnopqrstuvwxyz".chars() {
                let claimed = guess
                    .chars()
                    .zip(feedback.marks())
                    .filter(|&(g, &mark)| g == ch && mark != Mark::Absent)
                    .count();
                let in_secret = secret.chars().filter(|&s| s == ch).count();
                assert!(
                    claimed <= in_secret,
                    "{secret}/{guess}: '{ch}' claimed {claimed} of {in_secret}"
                );
            }
        }
    }

    #[test]
    fn score_is_deterministic() {
        let first = Feedback::score("apple", "plpla").unwrap();
        let second = Feedback::score("apple", "plpla").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            Feedback::score("apple", "pear"),
            Err(GameError::InvalidLength {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            Feedback::score("ab", "abcde"),
            Err(GameError::InvalidLength {
                expected: 2,
                found: 5
            })
        );
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert!(Feedback::score("", "").is_err());
    }

    #[test]
    fn scoring_is_case_sensitive() {
        // Case folding is the session's job; the scorer compares characters
        // exactly as given.
        let feedback = Feedback::score("apple", "APPLE").unwrap();
        assert_eq!(feedback.marks(), &[Mark::Absent; 5]);
    }

    #[test]
    fn variable_length_words_are_supported() {
        let feedback = Feedback::score("abc", "cab").unwrap();
        assert_eq!(
            feedback.marks(),
            &[Mark::Present, Mark::Present, Mark::Present]
        );
        assert_eq!(feedback.len(), 3);
    }

    #[test]
    fn mark_indicators_match_classic_presentation() {
        assert_eq!(Mark::Exact.indicator(), ' ');
        assert_eq!(Mark::Present.indicator(), '*');
        assert_eq!(Mark::Absent.indicator(), '^');
    }
}
