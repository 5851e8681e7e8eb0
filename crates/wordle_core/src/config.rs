//! Game configuration supplied at startup.
//!
//! # Responsibility
//! - Hold the fixed word length and fallback word list.
//! - Load a replacement word list from a JSON file.
//!
//! # Invariants
//! - Every fallback word is normalized and has exactly `word_length` letters.
//! - The fallback list is never empty.

use crate::game::fallback::FallbackWordList;
use crate::model::daily_answer::{normalize_word, ValidationError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_WORD_LENGTH: usize = 5;

pub const DEFAULT_FALLBACK_WORDS: &[&str] = &[
    "apple", "trace", "sugar", "candy", "story", "light", "crazy", "bring", "flame", "pride",
];

#[derive(Debug)]
pub enum ConfigError {
    /// Word list file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Word list file is not a JSON array of strings.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Word list contains no words.
    EmptyWordList,
    /// A word in the list fails normalization.
    InvalidWord {
        index: usize,
        source: ValidationError,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read word list `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "word list `{}` is not a JSON string array: {source}", path.display())
            }
            Self::EmptyWordList => write!(f, "fallback word list cannot be empty"),
            Self::InvalidWord { index, source } => {
                write!(f, "fallback word #{index} is invalid: {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyWordList => None,
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

/// Word length and fallback list shared by resolver and guess handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    fallback_words: FallbackWordList,
}

const _: () = assert!(!DEFAULT_FALLBACK_WORDS.is_empty());

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            fallback_words: FallbackWordList::from_static(DEFAULT_FALLBACK_WORDS),
        }
    }
}

impl GameConfig {
    /// Builds a config from raw words, normalizing each one.
    pub fn new<I, S>(word_length: usize, words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                normalize_word(word.as_ref(), word_length)
                    .map_err(|source| ConfigError::InvalidWord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let fallback_words = FallbackWordList::new(words).ok_or(ConfigError::EmptyWordList)?;
        Ok(Self {
            word_length,
            fallback_words,
        })
    }

    /// Loads the fallback list from a JSON array file such as
    /// `["apple", "trace"]`, using the default word length.
    pub fn from_word_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words: Vec<String> = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::new(DEFAULT_WORD_LENGTH, words)?;
        info!(
            "event=word_list_load module=config status=ok path={} words={}",
            path.display(),
            config.fallback_words.len()
        );
        Ok(config)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn fallback_words(&self) -> &FallbackWordList {
        &self.fallback_words
    }
}
