//! HTTP-facing layer for the daily word game.
//!
//! # Responsibility
//! - Expose use-case handlers that take typed input and return
//!   `Result<T, ApiError>`, independent of any HTTP framework.
//! - Adapt those handlers to `tiny_http` (routing, JSON bodies, CORS).
//!
//! # Invariants
//! - Handlers never panic; every failure maps to an `ApiError`.
//! - A losing guess response never contains the answer.

mod error;
pub mod handlers;
pub mod server;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::ApiContext;
pub use server::{dispatch, serve, HttpReply};
pub use types::{ErrorBody, GuessData, GuessRequest, SetAnswerRequest};
