//! Round state and submission validation.
//!
//! A submission goes through three checks in a fixed order and stops at the
//! first one that fails:
//! 1. not already used this round
//! 2. spellable from the base word's letters, each letter used at most once
//! 3. confirmed as a real word by the [`SpellChecker`]

use crate::dictionary::{ENGLISH, SpellChecker};
use crate::info_log;
use crate::wordbank::{WordList, pick_random_with};
use rand::Rng;
use thiserror::Error;

/// Why a submission was not accepted. Variants are listed in check order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Word used already: Be more original")]
    AlreadyUsed,
    #[error("Word not possible: You can't spell that word from the letters you were given!")]
    NotPossible,
    #[error("Word not recognized: You can't just make them up, you know!")]
    NotReal,
}

impl Rejection {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original",
            Self::NotPossible => "You can't spell that word from the letters you were given!",
            Self::NotReal => "You can't just make them up, you know!",
        }
    }
}

/// Result of a submission that did not break any rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The normalized word was added to the used list.
    Accepted(String),
    /// Input was blank after trimming; nothing happened.
    Ignored,
}

/// Read-only snapshot of a round for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundView<'a> {
    pub base_word: &'a str,
    /// Accepted words, newest first.
    pub used_words: &'a [String],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    base_word: String,
    used_words: Vec<String>,
}

/// Lowercase and trim a raw submission.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn is_unused(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Multiset containment: every letter of `word` must consume a distinct
/// letter occurrence of `base_word`.
#[must_use]
pub fn is_possible(word: &str, base_word: &str) -> bool {
    let mut available: Vec<char> = base_word.chars().collect();
    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_real<S: SpellChecker + ?Sized>(word: &str, checker: &S) -> bool {
    checker.is_correctly_spelled(word, ENGLISH)
}

impl Round {
    #[must_use]
    pub fn new(base_word: &str) -> Self {
        let mut round = Self::default();
        round.start_round(base_word);
        round
    }

    pub fn start_round(&mut self, base_word: &str) {
        self.base_word = normalize(base_word);
        self.used_words.clear();
        info_log!("Round started with base word '{}'", self.base_word);
    }

    pub fn reset_round(&mut self, list: &WordList) {
        self.reset_round_with(list, &mut rand::rng());
    }

    pub fn reset_round_with<R: Rng + ?Sized>(&mut self, list: &WordList, rng: &mut R) {
        let base_word = pick_random_with(list, rng);
        self.start_round(&base_word);
    }

    /// Validate `raw` and record it when every check passes.
    ///
    /// # Errors
    /// Returns the [`Rejection`] for the first check that fails. The round is
    /// left untouched in that case.
    pub fn submit<S: SpellChecker + ?Sized>(
        &mut self,
        raw: &str,
        checker: &S,
    ) -> Result<Outcome, Rejection> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(Outcome::Ignored);
        }

        if !is_unused(&word, &self.used_words) {
            info_log!("Rejected '{}': already used", word);
            return Err(Rejection::AlreadyUsed);
        }
        if !is_possible(&word, &self.base_word) {
            info_log!("Rejected '{}': not possible from '{}'", word, self.base_word);
            return Err(Rejection::NotPossible);
        }
        if !is_real(&word, checker) {
            info_log!("Rejected '{}': not a real word", word);
            return Err(Rejection::NotReal);
        }

        info_log!("Accepted '{}'", word);
        self.used_words.insert(0, word.clone());
        Ok(Outcome::Accepted(word))
    }

    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            base_word: &self.base_word,
            used_words: &self.used_words,
        }
    }
}
