//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and pure game rules into use-cases.
//! - Keep HTTP/CLI layers decoupled from storage details.

pub mod answer_service;
pub mod guess_service;
