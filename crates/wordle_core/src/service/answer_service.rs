//! Daily answer use-cases: resolve, upsert, list, seed.
//!
//! # Invariants
//! - `resolve_answer` never fails for a missing record; it falls back to
//!   the configured word list without persisting the fallback.
//! - `set_answer` validates before touching storage.

use crate::config::GameConfig;
use crate::game::evaluate::EvaluationError;
use crate::model::daily_answer::{DailyAnswer, ValidationError};
use crate::repo::answer_repo::{AnswerRepository, RepoError};
use chrono::{Duration, NaiveDate};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Days before `today` where seeding starts.
const SEED_DAYS_BEFORE_TODAY: i64 = 30;
/// Number of consecutive days written by seeding.
const SEED_DAY_COUNT: i64 = 60;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for answer and guess use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input is malformed. Nothing was written.
    Validation(ValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Stored or configured data violates the evaluator precondition.
    DataIntegrity(EvaluationError),
}

impl ServiceError {
    /// True when the caller is at fault and may retry with other input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::DataIntegrity(err) => write!(f, "answer data is inconsistent: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::DataIntegrity(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<EvaluationError> for ServiceError {
    fn from(value: EvaluationError) -> Self {
        Self::DataIntegrity(value)
    }
}

/// Use-case service over an injected answer store.
pub struct AnswerService<R: AnswerRepository> {
    repo: R,
    config: GameConfig,
}

impl<R: AnswerRepository> AnswerService<R> {
    pub fn new(repo: R, config: GameConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the stored answer for `date`, else the fallback word.
    pub fn resolve_answer(&self, date: NaiveDate) -> ServiceResult<String> {
        if let Some(record) = self.repo.find_answer(date)? {
            debug!("event=answer_resolve module=service status=ok source=stored date={date}");
            return Ok(record.answer);
        }

        debug!("event=answer_resolve module=service status=ok source=fallback date={date}");
        Ok(self.config.fallback_words().pick(date).to_string())
    }

    /// Resolves `date` into a full record, stored or fallback.
    pub fn answer_for_date(&self, date: NaiveDate) -> ServiceResult<DailyAnswer> {
        let answer = self.resolve_answer(date)?;
        Ok(DailyAnswer { date, answer })
    }

    /// Stores `word` as the answer for `date`, replacing any previous one.
    pub fn set_answer(&self, date: NaiveDate, word: &str) -> ServiceResult<DailyAnswer> {
        let record = DailyAnswer::new(date, word, self.config.word_length())?;
        let stored = self.repo.upsert_answer(&record)?;
        info!("event=answer_upsert module=service status=ok date={date}");
        Ok(stored)
    }

    /// All stored answers ordered by date. Fallback words are not listed.
    pub fn list_answers(&self) -> ServiceResult<Vec<DailyAnswer>> {
        Ok(self.repo.list_answers()?)
    }

    /// Populates an empty store with a window of days around `today`.
    ///
    /// Day `i` of the window gets fallback word `i mod len`. Returns the
    /// number of rows written; 0 when the store already had data.
    pub fn seed_if_empty(&self, today: NaiveDate) -> ServiceResult<usize> {
        if self.repo.count_answers()? > 0 {
            debug!("event=answer_seed module=service status=skipped reason=not_empty");
            return Ok(0);
        }

        let words = self.config.fallback_words().words();
        let start = today - Duration::days(SEED_DAYS_BEFORE_TODAY);
        let records = (0..SEED_DAY_COUNT)
            .zip(words.iter().cycle())
            .map(|(offset, word)| DailyAnswer {
                date: start + Duration::days(offset),
                answer: word.clone(),
            })
            .collect::<Vec<_>>();

        let inserted = self.repo.insert_missing(&records)?;
        info!(
            "event=answer_seed module=service status=ok start={start} inserted={inserted}"
        );
        Ok(inserted)
    }
}
