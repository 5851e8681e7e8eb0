//! Duplicate-aware guess evaluation.
//!
//! # Invariants
//! - Output length equals guess length.
//! - A letter is tagged `Exact` or `Present` at most as many times as it
//!   occurs in the answer.

use crate::model::guess::LetterTag;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Evaluator precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// Answer and guess differ in character count.
    LengthMismatch { answer_len: usize, guess_len: usize },
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                answer_len,
                guess_len,
            } => write!(
                f,
                "answer has {answer_len} letters but guess has {guess_len}"
            ),
        }
    }
}

impl Error for EvaluationError {}

/// Classifies each guess letter against `answer`.
///
/// Exact matches are claimed first so they cannot be reused. Remaining
/// guess letters then claim the first unconsumed answer occurrence, left to
/// right; letters with nothing left to claim are `Absent`.
pub fn evaluate(answer: &str, guess: &str) -> Result<Vec<LetterTag>, EvaluationError> {
    let mut answer_letters: Vec<Option<char>> = answer.chars().map(Some).collect();
    let guess_letters: Vec<char> = guess.chars().collect();

    if answer_letters.len() != guess_letters.len() {
        return Err(EvaluationError::LengthMismatch {
            answer_len: answer_letters.len(),
            guess_len: guess_letters.len(),
        });
    }

    let mut tags = vec![LetterTag::Absent; guess_letters.len()];

    for (index, &letter) in guess_letters.iter().enumerate() {
        if answer_letters[index] == Some(letter) {
            tags[index] = LetterTag::Exact;
            answer_letters[index] = None;
        }
    }

    for (index, &letter) in guess_letters.iter().enumerate() {
        if tags[index] == LetterTag::Exact {
            continue;
        }
        if let Some(slot) = answer_letters
            .iter_mut()
            .find(|slot| **slot == Some(letter))
        {
            *slot = None;
            tags[index] = LetterTag::Present;
        }
    }

    Ok(tags)
}

/// True when every tag is `Exact`.
pub fn is_solved(tags: &[LetterTag]) -> bool {
    !tags.is_empty() && tags.iter().all(|tag| *tag == LetterTag::Exact)
}
