//! Use-case handlers.
//!
//! Each call opens the configured database, so handlers can run on any
//! thread; SQLite serializes writers.

use chrono::NaiveDate;
use log::{error, warn};
use std::path::{Path, PathBuf};
use wordle_core::db::open_db;
use wordle_core::{
    parse_answer_date, submit_guess as submit_guess_inner, AnswerService, DailyAnswer,
    GameConfig, ServiceResult, SqliteAnswerRepository,
};

use crate::error::ApiError;
use crate::types::{GuessData, GuessRequest, SetAnswerRequest};

/// Shared handler configuration.
#[derive(Debug, Clone)]
pub struct ApiContext {
    db_path: PathBuf,
    config: GameConfig,
}

impl ApiContext {
    pub fn new(db_path: impl Into<PathBuf>, config: GameConfig) -> Self {
        Self {
            db_path: db_path.into(),
            config,
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn with_service<T>(
        &self,
        run: impl FnOnce(&AnswerService<SqliteAnswerRepository<'_>>) -> ServiceResult<T>,
    ) -> Result<T, ApiError> {
        let conn = open_db(&self.db_path).map_err(|err| {
            error!("event=api_db_open module=api status=error error={err}");
            ApiError::internal(format!("database unavailable: {err}"))
        })?;
        let repo = SqliteAnswerRepository::try_new(&conn).map_err(|err| {
            error!("event=api_db_open module=api status=error error={err}");
            ApiError::internal(err.to_string())
        })?;
        let service = AnswerService::new(repo, self.config.clone());

        run(&service).map_err(|err| {
            if err.is_client_error() {
                warn!("event=api_request module=api status=rejected error={err}");
            }
            ApiError::from(err)
        })
    }
}

/// Answer for `today`, stored or fallback.
pub fn get_today_answer(ctx: &ApiContext, today: NaiveDate) -> Result<DailyAnswer, ApiError> {
    ctx.with_service(|service| service.answer_for_date(today))
}

/// Answer for an ISO-8601 `date`, stored or fallback.
pub fn get_answer_for_date(ctx: &ApiContext, date: &str) -> Result<DailyAnswer, ApiError> {
    let date = parse_date(date)?;
    ctx.with_service(|service| service.answer_for_date(date))
}

pub fn list_answers(ctx: &ApiContext) -> Result<Vec<DailyAnswer>, ApiError> {
    ctx.with_service(|service| service.list_answers())
}

/// Upserts the answer for the requested date.
pub fn set_answer(ctx: &ApiContext, req: &SetAnswerRequest) -> Result<DailyAnswer, ApiError> {
    let (Some(date), Some(answer)) = (non_blank(&req.date), non_blank(&req.answer)) else {
        return Err(ApiError::bad_request("Missing date or answer"));
    };
    let date = parse_date(date)?;
    ctx.with_service(|service| service.set_answer(date, answer))
}

/// Evaluates a guess for `req.date`, or `today` when absent.
pub fn submit_guess(
    ctx: &ApiContext,
    req: &GuessRequest,
    today: NaiveDate,
) -> Result<GuessData, ApiError> {
    let Some(guess) = non_blank(&req.guess) else {
        return Err(ApiError::bad_request("Missing guess"));
    };
    let date = match non_blank(&req.date) {
        Some(date) => parse_date(date)?,
        None => today,
    };
    let outcome = ctx.with_service(|service| submit_guess_inner(service, guess, date))?;
    Ok(outcome.into())
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    parse_answer_date(value).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{get_answer_for_date, set_answer, submit_guess, ApiContext};
    use crate::error::ErrorCode;
    use crate::types::{GuessRequest, SetAnswerRequest};
    use chrono::NaiveDate;
    use wordle_core::GameConfig;

    fn context(dir: &tempfile::TempDir) -> ApiContext {
        ApiContext::new(dir.path().join("api.sqlite3"), GameConfig::default())
    }

    #[test]
    fn set_answer_requires_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        let req = SetAnswerRequest {
            date: Some("2025-01-01".to_string()),
            answer: Some("  ".to_string()),
        };

        let err = set_answer(&ctx, &req).unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert_eq!(err.message, "Missing date or answer");
    }

    #[test]
    fn malformed_date_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);

        let err = get_answer_for_date(&ctx, "01/02/2025").unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }

    #[test]
    fn guess_defaults_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        set_answer(
            &ctx,
            &SetAnswerRequest {
                date: Some("2025-07-04".to_string()),
                answer: Some("flame".to_string()),
            },
        )
        .unwrap();

        let data = submit_guess(
            &ctx,
            &GuessRequest {
                guess: Some("flame".to_string()),
                date: None,
            },
            today,
        )
        .unwrap();
        assert!(data.win);
        assert_eq!(data.date, today);
        assert_eq!(data.answer.as_deref(), Some("flame"));
    }

    #[test]
    fn missing_guess_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();

        let err = submit_guess(&ctx, &GuessRequest::default(), today).unwrap_err();
        assert_eq!(err.message, "Missing guess");
    }
}
