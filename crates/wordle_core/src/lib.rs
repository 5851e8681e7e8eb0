//! Core domain logic for the daily word game backend.
//! This crate is the single source of truth for game invariants.

pub mod config;
pub mod db;
pub mod game;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, GameConfig, DEFAULT_FALLBACK_WORDS, DEFAULT_WORD_LENGTH};
pub use game::evaluate::{evaluate, is_solved, EvaluationError};
pub use game::fallback::{date_ordinal, FallbackWordList};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::daily_answer::{normalize_word, parse_answer_date, DailyAnswer, ValidationError};
pub use model::guess::{GuessOutcome, LetterTag};
pub use repo::answer_repo::{AnswerRepository, RepoError, RepoResult, SqliteAnswerRepository};
pub use service::answer_service::{AnswerService, ServiceError, ServiceResult};
pub use service::guess_service::submit_guess;

