//! Repository layer for daily answers.
//!
//! # Responsibility
//! - Define the answer store contract the services depend on.
//! - Keep SQL details out of service orchestration.
//!
//! # Invariants
//! - Lookups report absence with `Ok(None)`, never an error.
//! - Reads reject invalid persisted rows instead of masking them.

pub mod answer_repo;
