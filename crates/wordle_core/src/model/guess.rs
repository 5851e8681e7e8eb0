//! Guess classification values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-letter classification of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterTag {
    /// Right letter, right position.
    Exact,
    /// Letter occurs in an unconsumed answer position elsewhere.
    Present,
    /// No unconsumed occurrence left in the answer.
    Absent,
}

impl LetterTag {
    /// Tile color name used by game clients.
    pub fn color(self) -> &'static str {
        match self {
            Self::Exact => "green",
            Self::Present => "yellow",
            Self::Absent => "gray",
        }
    }
}

/// Result of submitting one guess for one day.
///
/// `answer` is only populated when `solved` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub date: NaiveDate,
    pub guess: String,
    pub tags: Vec<LetterTag>,
    pub solved: bool,
    pub answer: Option<String>,
}

impl GuessOutcome {
    /// Tag colors in guess order.
    pub fn colors(&self) -> Vec<&'static str> {
        self.tags.iter().map(|tag| tag.color()).collect()
    }
}
