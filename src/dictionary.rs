//! Dictionary lookups used to decide whether a submission is a real word.
//!
//! The rest of the crate only sees the [`SpellChecker`] trait. The bundled
//! [`WordListSpellChecker`] answers from a newline-delimited word list, either
//! the English list compiled into the binary or a file supplied at startup.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language tag the game checks spelling against.
pub const ENGLISH: &str = "en";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read dictionary '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Oracle that confirms a string is a correctly spelled word in a language.
pub trait SpellChecker {
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Spell checker backed by an in-memory word list for a single language.
#[derive(Debug, Clone)]
pub struct WordListSpellChecker {
    language: String,
    words: HashSet<String>,
}

impl WordListSpellChecker {
    pub fn from_word_list(language: &str, data: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Read a newline-delimited dictionary file, e.g. `/usr/share/dict/words`.
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_word_list(language, &data))
    }

    #[must_use]
    pub fn english() -> Self {
        Self::from_word_list(ENGLISH, EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListSpellChecker {
    fn is_correctly_spelled(&self, word: &str, language: &str) -> bool {
        if !language.eq_ignore_ascii_case(&self.language) {
            log::warn!(
                "Dictionary for '{}' cannot check '{}' words",
                self.language,
                language
            );
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }
}

/// Build the spell checker from `path`, or the bundled English list when none is given.
///
/// # Errors
/// Returns `DictionaryError::Io` if the file cannot be read.
pub fn load(path: Option<&Path>) -> Result<WordListSpellChecker, DictionaryError> {
    let checker = match path {
        Some(path) => WordListSpellChecker::from_file(ENGLISH, path)?,
        None => WordListSpellChecker::english(),
    };
    log::info!(
        "Loaded {} dictionary words for '{}'",
        checker.len(),
        checker.language()
    );
    Ok(checker)
}
