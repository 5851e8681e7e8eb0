//! Guess submission use-case.
//!
//! # Invariants
//! - The guess is validated against the configured word length, never
//!   against the stored answer.
//! - The answer is returned only for a winning guess, and is never logged.

use crate::game::evaluate::{evaluate, is_solved};
use crate::model::daily_answer::normalize_word;
use crate::model::guess::GuessOutcome;
use crate::repo::answer_repo::AnswerRepository;
use crate::service::answer_service::{AnswerService, ServiceResult};
use chrono::NaiveDate;
use log::{error, info};

/// Evaluates `raw_guess` against the answer for `date`.
///
/// # Errors
/// - `ServiceError::Validation` for an empty, non-alphabetic or
///   wrong-length guess.
/// - `ServiceError::DataIntegrity` when the resolved answer has a
///   different length than the guess.
/// - `ServiceError::Repo` for storage failures.
pub fn submit_guess<R: AnswerRepository>(
    service: &AnswerService<R>,
    raw_guess: &str,
    date: NaiveDate,
) -> ServiceResult<GuessOutcome> {
    let guess = normalize_word(raw_guess, service.config().word_length())?;
    let answer = service.resolve_answer(date)?;

    let tags = evaluate(&answer, &guess).map_err(|err| {
        error!(
            "event=guess_submit module=service status=error error_code=answer_length_mismatch date={date} error={err}"
        );
        err
    })?;

    let solved = is_solved(&tags);
    info!("event=guess_submit module=service status=ok date={date} solved={solved}");

    Ok(GuessOutcome {
        date,
        guess,
        tags,
        solved,
        answer: solved.then_some(answer),
    })
}
