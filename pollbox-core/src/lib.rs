//! Pollbox Core Library
//!
//! Data-access core for anonymous multiple-choice polls: the poll data
//! model, a file-backed storage adapter holding the whole collection as one
//! JSON blob, and the repository exposing create / get / vote to the View
//! Layer. Everything is synchronous and single-writer by design.

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigLoader};
pub use error::{InvalidInputError, PollError, PollResult};
pub use model::{CreatePollRequest, Poll, PollOption};
pub use repository::PollRepository;
pub use store::{PollStore, POLLS_KEY};
pub use types::{OptionId, PollId};
