// SPDX-License-Identifier: Apache-2.0

//! Poll data model.
//!
//! A poll and its options are created atomically as one unit. Options are
//! never added or removed after creation; the only post-creation mutation
//! is incrementing exactly one option's vote counter (and the poll's
//! denormalized total) per vote. Nothing is ever deleted.
//!
//! Serialized field names are camelCase, giving the persisted JSON blob the
//! layout
//! `{ id, question, options: [{ id, text, votes }], createdAt, totalVotes }`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::types::{OptionId, PollId};

/// Maximum question length in characters. Caller-enforced.
pub const QUESTION_MAX_LEN: usize = 200;
/// Maximum option text length in characters. Caller-enforced.
pub const OPTION_TEXT_MAX_LEN: usize = 100;
/// Minimum number of options per poll. Enforced by the repository.
pub const MIN_OPTIONS: usize = 2;
/// Maximum number of options per poll. Caller-enforced.
pub const MAX_OPTIONS: usize = 10;

/// One selectable answer within a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: OptionId,
    pub text: String,
    pub votes: u64,
}

/// A question with its ordered set of options and vote tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
    pub total_votes: u64,
}

impl Poll {
    /// Find an option by id within this poll.
    pub fn option(&self, id: &OptionId) -> Option<&PollOption> {
        self.options.iter().find(|opt| &opt.id == id)
    }

    /// The option currently leading the tally, if any votes were cast.
    /// Ties resolve to the last option holding the top count.
    pub fn leader(&self) -> Option<&PollOption> {
        if self.total_votes == 0 {
            return None;
        }
        self.options
            .iter()
            .reduce(|prev, current| if prev.votes > current.votes { prev } else { current })
    }

    /// Check the denormalized-counter invariant:
    /// `total_votes == sum(option.votes)`.
    pub fn tally_is_consistent(&self) -> bool {
        self.total_votes == self.options.iter().map(|opt| opt.votes).sum::<u64>()
    }

    /// Percentage of the total a vote count represents, rounded to the
    /// nearest integer. Zero when no votes were cast.
    pub fn percentage(&self, votes: u64) -> u64 {
        if self.total_votes == 0 {
            0
        } else {
            (votes * 100 + self.total_votes / 2) / self.total_votes
        }
    }
}

/// Input for a create operation, before ids and timestamps are assigned.
#[derive(Debug, Clone)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

impl CreatePollRequest {
    /// Build a request from raw form input: trim the question, trim every
    /// option, and drop options that are blank.
    pub fn from_raw(question: &str, options: &[String]) -> Self {
        Self {
            question: question.trim().to_string(),
            options: options
                .iter()
                .map(|opt| opt.trim().to_string())
                .filter(|opt| !opt.is_empty())
                .collect(),
        }
    }

    /// Caller-side validation of the length/count bounds.
    ///
    /// The repository does not re-validate these (bounds are a View Layer
    /// concern); it only re-checks the min-2-options floor to protect the
    /// core invariant independent of UI discipline.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.question.is_empty() {
            return Err(InvalidInputError::EmptyQuestion);
        }

        let question_len = self.question.chars().count();
        if question_len > QUESTION_MAX_LEN {
            return Err(InvalidInputError::QuestionTooLong {
                len: question_len,
                max: QUESTION_MAX_LEN,
            });
        }

        if self.options.len() < MIN_OPTIONS {
            return Err(InvalidInputError::TooFewOptions {
                provided: self.options.len(),
            });
        }

        if self.options.len() > MAX_OPTIONS {
            return Err(InvalidInputError::TooManyOptions {
                provided: self.options.len(),
                max: MAX_OPTIONS,
            });
        }

        for (index, text) in self.options.iter().enumerate() {
            if text.is_empty() {
                return Err(InvalidInputError::EmptyOptionText { index });
            }
            let len = text.chars().count();
            if len > OPTION_TEXT_MAX_LEN {
                return Err(InvalidInputError::OptionTextTooLong {
                    index,
                    len,
                    max: OPTION_TEXT_MAX_LEN,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_with_votes(votes: &[u64]) -> Poll {
        let options = votes
            .iter()
            .enumerate()
            .map(|(i, &v)| PollOption {
                id: OptionId::new(format!("opt-{}", i)),
                text: format!("Option {}", i + 1),
                votes: v,
            })
            .collect::<Vec<_>>();
        let total = votes.iter().sum();
        Poll {
            id: PollId::new("poll-1"),
            question: "Test?".to_string(),
            options,
            created_at: Utc::now(),
            total_votes: total,
        }
    }

    #[test]
    fn test_option_lookup() {
        let poll = poll_with_votes(&[0, 0]);
        assert!(poll.option(&OptionId::new("opt-1")).is_some());
        assert!(poll.option(&OptionId::new("missing")).is_none());
    }

    #[test]
    fn test_leader_none_without_votes() {
        let poll = poll_with_votes(&[0, 0, 0]);
        assert!(poll.leader().is_none());
    }

    #[test]
    fn test_leader_picks_highest() {
        let poll = poll_with_votes(&[2, 5, 1]);
        assert_eq!(poll.leader().unwrap().id, OptionId::new("opt-1"));
    }

    #[test]
    fn test_tally_consistency_check() {
        let mut poll = poll_with_votes(&[1, 2]);
        assert!(poll.tally_is_consistent());
        poll.total_votes += 1;
        assert!(!poll.tally_is_consistent());
    }

    #[test]
    fn test_percentage_rounding() {
        let poll = poll_with_votes(&[1, 2]);
        assert_eq!(poll.percentage(1), 33);
        assert_eq!(poll.percentage(2), 67);
        let empty = poll_with_votes(&[0, 0]);
        assert_eq!(empty.percentage(0), 0);
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let poll = poll_with_votes(&[0, 0]);
        let json = serde_json::to_string(&poll).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"totalVotes\""));
        assert!(json.contains("\"votes\""));
    }

    #[test]
    fn test_request_from_raw_trims_and_drops_blanks() {
        let req = CreatePollRequest::from_raw(
            "  Pizza or Tacos?  ",
            &[
                " Pizza ".to_string(),
                "".to_string(),
                "   ".to_string(),
                "Tacos".to_string(),
            ],
        );
        assert_eq!(req.question, "Pizza or Tacos?");
        assert_eq!(req.options, vec!["Pizza", "Tacos"]);
    }

    #[test]
    fn test_request_validation_bounds() {
        let ok = CreatePollRequest::from_raw("Q?", &["A".to_string(), "B".to_string()]);
        assert!(ok.validate().is_ok());

        let empty_question = CreatePollRequest::from_raw("   ", &["A".to_string(), "B".to_string()]);
        assert!(matches!(
            empty_question.validate(),
            Err(InvalidInputError::EmptyQuestion)
        ));

        let one_option = CreatePollRequest::from_raw("Q?", &["A".to_string()]);
        assert!(matches!(
            one_option.validate(),
            Err(InvalidInputError::TooFewOptions { provided: 1 })
        ));

        let too_many: Vec<String> = (0..11).map(|i| format!("opt {}", i)).collect();
        let eleven = CreatePollRequest::from_raw("Q?", &too_many);
        assert!(matches!(
            eleven.validate(),
            Err(InvalidInputError::TooManyOptions { provided: 11, .. })
        ));

        let long_question = CreatePollRequest::from_raw(
            &"q".repeat(QUESTION_MAX_LEN + 1),
            &["A".to_string(), "B".to_string()],
        );
        assert!(matches!(
            long_question.validate(),
            Err(InvalidInputError::QuestionTooLong { .. })
        ));

        let long_option = CreatePollRequest::from_raw(
            "Q?",
            &["A".to_string(), "o".repeat(OPTION_TEXT_MAX_LEN + 1)],
        );
        assert!(matches!(
            long_option.validate(),
            Err(InvalidInputError::OptionTextTooLong { index: 1, .. })
        ));
    }
}
