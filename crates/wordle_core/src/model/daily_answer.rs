//! Daily answer record and input normalization.
//!
//! # Responsibility
//! - Define the persisted `(date, answer)` shape.
//! - Parse ISO-8601 dates and normalize words before they reach storage
//!   or the evaluator.
//!
//! # Invariants
//! - `DailyAnswer::answer` is non-empty ASCII lowercase letters.
//! - Dates serialize as zero-padded `YYYY-MM-DD`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Input shape errors for dates and words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date text is missing or not a real `YYYY-MM-DD` calendar day.
    InvalidDate(String),
    /// Word is empty after trimming.
    EmptyWord,
    /// Word contains something other than ASCII letters.
    NonAlphabeticWord(String),
    /// Word length differs from the configured word length.
    WrongWordLength { expected: usize, actual: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::EmptyWord => write!(f, "word cannot be empty"),
            Self::NonAlphabeticWord(value) => {
                write!(f, "word `{value}` must contain only letters a-z")
            }
            Self::WrongWordLength { expected, actual } => {
                write!(f, "word must be {expected} letters, got {actual}")
            }
        }
    }
}

impl Error for ValidationError {}

/// The configured secret word for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAnswer {
    pub date: NaiveDate,
    pub answer: String,
}

impl DailyAnswer {
    /// Builds a record from raw word input.
    ///
    /// The word is trimmed and lowercased, then checked against
    /// `word_length`.
    pub fn new(date: NaiveDate, answer: &str, word_length: usize) -> Result<Self, ValidationError> {
        let answer = normalize_word(answer, word_length)?;
        Ok(Self { date, answer })
    }
}

/// Parses a strict zero-padded ISO-8601 calendar date.
pub fn parse_answer_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Trims, lowercases and validates a word against `word_length`.
///
/// Length is counted in characters, not bytes.
pub fn normalize_word(value: &str, word_length: usize) -> Result<String, ValidationError> {
    let word = value.trim().to_lowercase();
    if word.is_empty() {
        return Err(ValidationError::EmptyWord);
    }

    let actual = word.chars().count();
    if actual != word_length {
        return Err(ValidationError::WrongWordLength {
            expected: word_length,
            actual,
        });
    }

    if !word.chars().all(|ch| ch.is_ascii_lowercase()) {
        return Err(ValidationError::NonAlphabeticWord(word));
    }

    Ok(word)
}
