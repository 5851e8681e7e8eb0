//! Request and response bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wordle_core::GuessOutcome;

use crate::error::{ApiError, ApiErrorData};

/// Body of `POST /api/answer`.
///
/// Fields are optional so a missing field is a 400 with a clear message
/// rather than a JSON decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct SetAnswerRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Body of `POST /api/guess`. `date` defaults to today.
#[derive(Debug, Default, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub guess: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response of `POST /api/guess`.
///
/// `answer` serializes as `null` unless `win` is true.
#[derive(Debug, Serialize)]
pub struct GuessData {
    pub date: NaiveDate,
    pub guess: String,
    pub result: Vec<&'static str>,
    pub win: bool,
    pub answer: Option<String>,
}

impl From<GuessOutcome> for GuessData {
    fn from(outcome: GuessOutcome) -> Self {
        let result = outcome.colors();
        Self {
            date: outcome.date,
            guess: outcome.guess,
            result,
            win: outcome.solved,
            answer: outcome.answer,
        }
    }
}

/// Error response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ApiErrorData,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self { error: err.into() }
    }
}
