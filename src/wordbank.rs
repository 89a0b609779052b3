use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/start.txt");

/// Base word used when the word bank has nothing to offer.
pub const FALLBACK_WORD: &str = "scramble";

#[derive(Error, Debug)]
pub enum WordBankError {
    #[error("failed to read word bank '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Candidate base words, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}

pub fn load_wordbank_from_str(data: &str) -> WordList {
    data.lines().filter_map(normalize_entry).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordBankError> {
    let path = path.as_ref();
    let io_err = |source: io::Error| WordBankError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_entry(&line.map_err(io_err)?) {
            words.push(word);
        }
    }
    Ok(WordList { words })
}

/// Load the word bank from `path`, or from the bundled list when no path is given.
///
/// # Errors
/// Returns `WordBankError::Io` if the file cannot be opened or read.
pub fn load(path: Option<&Path>) -> Result<WordList, WordBankError> {
    let words = match path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    log::info!("Loaded {} base words", words.len());
    Ok(words)
}

#[must_use]
pub fn pick_random(list: &WordList) -> String {
    pick_random_with(list, &mut rand::rng())
}

/// Uniformly pick a base word using the supplied generator.
///
/// Falls back to [`FALLBACK_WORD`] when the list is empty.
pub fn pick_random_with<R: Rng + ?Sized>(list: &WordList, rng: &mut R) -> String {
    if let Some(word) = list.words.choose(rng) {
        word.clone()
    } else {
        log::warn!("Word bank is empty, using fallback word '{FALLBACK_WORD}'");
        FALLBACK_WORD.to_string()
    }
}
