//! Custom error types for Pollbox.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.
//!
//! Note that "poll not found" and "option not found" are deliberately NOT
//! error variants: lookups and votes against a nonexistent poll or option
//! are value-level outcomes (`Option::None`) that callers handle gracefully.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the Pollbox core.
/// All errors are explicit variants - no catch-all or generic handling.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {context} - {source}")]
    Serialize {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Input validation errors.
///
/// Only [`TooFewOptions`](InvalidInputError::TooFewOptions) is enforced by
/// the repository itself; the remaining variants belong to the caller-side
/// validation performed by the View Layer before a create call.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("A poll needs at least 2 options, got {provided}")]
    TooFewOptions { provided: usize },

    #[error("A poll can have at most {max} options, got {provided}")]
    TooManyOptions { provided: usize, max: usize },

    #[error("Poll question cannot be empty")]
    EmptyQuestion,

    #[error("Poll question too long: {len} chars (max {max})")]
    QuestionTooLong { len: usize, max: usize },

    #[error("Option text cannot be empty (option at index {index})")]
    EmptyOptionText { index: usize },

    #[error("Option text too long: {len} chars (max {max}, option at index {index})")]
    OptionTextTooLong {
        index: usize,
        len: usize,
        max: usize,
    },
}

/// Result type alias using PollError.
pub type PollResult<T> = Result<T, PollError>;
