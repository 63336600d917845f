// SPDX-License-Identifier: Apache-2.0

//! Poll repository: the three business operations the View Layer needs.
//!
//! Every operation is a synchronous whole-collection read-modify-write
//! against the storage adapter. There is no lock, transaction, or
//! compare-and-swap: two processes mutating the same data directory can race
//! and lose an update (last writer wins). That is an accepted limit of the
//! single-writer storage model and is deliberately left as-is.

use chrono::Utc;

use crate::error::{InvalidInputError, PollResult};
use crate::model::{Poll, PollOption, MIN_OPTIONS};
use crate::store::PollStore;
use crate::types::{OptionId, PollId};

/// Enforces the poll/option invariants over a [`PollStore`].
#[derive(Debug, Clone)]
pub struct PollRepository {
    store: PollStore,
}

impl PollRepository {
    pub fn new(store: PollStore) -> Self {
        Self { store }
    }

    /// The underlying storage adapter. The View Layer uses this for the
    /// voted-marker convention, which sits outside the repository's trust
    /// boundary.
    pub fn store(&self) -> &PollStore {
        &self.store
    }

    /// Create a poll with fresh ids, zero counts, and the current time,
    /// append it to the collection, and persist.
    ///
    /// Length/count bounds are a caller concern and are not re-validated
    /// here, except the min-options floor which protects the core invariant
    /// independent of UI discipline. The returned poll's id is immediately
    /// usable in a [`get_poll`](Self::get_poll) call.
    pub fn create_poll(&self, question: &str, options: &[String]) -> PollResult<Poll> {
        if options.len() < MIN_OPTIONS {
            return Err(InvalidInputError::TooFewOptions {
                provided: options.len(),
            }
            .into());
        }

        let poll = Poll {
            id: PollId::generate(),
            question: question.to_string(),
            options: options
                .iter()
                .map(|text| PollOption {
                    id: OptionId::generate(),
                    text: text.clone(),
                    votes: 0,
                })
                .collect(),
            created_at: Utc::now(),
            total_votes: 0,
        };

        let mut polls = self.store.load()?;
        polls.push(poll.clone());
        self.store.save(&polls)?;

        tracing::info!(
            poll_id = %poll.id,
            options = poll.options.len(),
            "Created poll"
        );

        Ok(poll)
    }

    /// Fetch a poll by id. `None` when absent; no side effects.
    pub fn get_poll(&self, id: &PollId) -> PollResult<Option<Poll>> {
        let polls = self.store.load()?;
        Ok(polls.into_iter().find(|poll| &poll.id == id))
    }

    /// All polls in insertion order.
    pub fn list_polls(&self) -> PollResult<Vec<Poll>> {
        self.store.load()
    }

    /// Cast one vote for `option_id` within `poll_id`.
    ///
    /// `None` when the poll or the option is absent; in either case nothing
    /// is persisted. On success exactly one option's count and the poll's
    /// total each rise by exactly one - the two increments are never applied
    /// independently.
    pub fn vote_poll(&self, poll_id: &PollId, option_id: &OptionId) -> PollResult<Option<Poll>> {
        let mut polls = self.store.load()?;

        let Some(poll) = polls.iter_mut().find(|poll| &poll.id == poll_id) else {
            tracing::debug!(poll_id = %poll_id, "Vote against unknown poll");
            return Ok(None);
        };

        let Some(option) = poll.options.iter_mut().find(|opt| &opt.id == option_id) else {
            tracing::debug!(
                poll_id = %poll_id,
                option_id = %option_id,
                "Vote against unknown option"
            );
            return Ok(None);
        };

        option.votes += 1;
        poll.total_votes += 1;

        let updated = poll.clone();
        self.store.save(&polls)?;

        tracing::info!(
            poll_id = %updated.id,
            option_id = %option_id,
            total_votes = updated.total_votes,
            "Vote recorded"
        );

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use tempfile::TempDir;

    fn repo(dir: &TempDir) -> PollRepository {
        PollRepository::new(PollStore::open(dir.path()).unwrap())
    }

    fn two_options() -> Vec<String> {
        vec!["Pizza".to_string(), "Tacos".to_string()]
    }

    #[test]
    fn test_create_returns_zeroed_poll() {
        let dir = TempDir::new().unwrap();
        let poll = repo(&dir)
            .create_poll("Pizza or Tacos?", &two_options())
            .unwrap();

        assert_eq!(poll.question, "Pizza or Tacos?");
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.total_votes, 0);
        assert!(poll.options.iter().all(|opt| opt.votes == 0));
        assert!(poll.tally_is_consistent());
    }

    #[test]
    fn test_create_rejects_too_few_options() {
        let dir = TempDir::new().unwrap();
        let result = repo(&dir).create_poll("Q?", &["Only".to_string()]);
        assert!(matches!(
            result,
            Err(PollError::InvalidInput(
                InvalidInputError::TooFewOptions { provided: 1 }
            ))
        ));
        // Nothing persisted.
        assert!(repo(&dir).list_polls().unwrap().is_empty());
    }

    #[test]
    fn test_read_your_write() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let created = repo.create_poll("Q?", &two_options()).unwrap();
        let fetched = repo.get_poll(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(repo(&dir)
            .get_poll(&PollId::new("never-created"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_vote_increments_option_and_total() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let poll = repo.create_poll("Pizza or Tacos?", &two_options()).unwrap();
        let pizza = poll.options[0].id.clone();
        let tacos = poll.options[1].id.clone();

        let after_pizza = repo.vote_poll(&poll.id, &pizza).unwrap().unwrap();
        assert_eq!(after_pizza.total_votes, 1);
        assert_eq!(after_pizza.options[0].votes, 1);
        assert_eq!(after_pizza.options[1].votes, 0);

        let after_tacos = repo.vote_poll(&poll.id, &tacos).unwrap().unwrap();
        assert_eq!(after_tacos.total_votes, 2);
        assert_eq!(after_tacos.options[0].votes, 1);
        assert_eq!(after_tacos.options[1].votes, 1);
        assert!(after_tacos.tally_is_consistent());
    }

    #[test]
    fn test_n_votes_move_tally_by_n() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let poll = repo.create_poll("Q?", &two_options()).unwrap();
        let target = poll.options[1].id.clone();

        let n = 7;
        for _ in 0..n {
            repo.vote_poll(&poll.id, &target).unwrap().unwrap();
        }

        let stored = repo.get_poll(&poll.id).unwrap().unwrap();
        assert_eq!(stored.total_votes, n);
        assert_eq!(stored.option(&target).unwrap().votes, n);
        assert!(stored.tally_is_consistent());
    }

    #[test]
    fn test_vote_unknown_poll_leaves_data_unchanged() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let poll = repo.create_poll("Q?", &two_options()).unwrap();

        let result = repo
            .vote_poll(&PollId::new("missing"), &poll.options[0].id)
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.get_poll(&poll.id).unwrap().unwrap(), poll);
    }

    #[test]
    fn test_vote_unknown_option_leaves_poll_unchanged() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let poll = repo.create_poll("Q?", &two_options()).unwrap();

        let result = repo
            .vote_poll(&poll.id, &OptionId::new("not-an-option"))
            .unwrap();
        assert!(result.is_none());
        // No partial increment persisted.
        assert_eq!(repo.get_poll(&poll.id).unwrap().unwrap(), poll);
    }

    #[test]
    fn test_polls_keep_insertion_order() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let first = repo.create_poll("First?", &two_options()).unwrap();
        let second = repo.create_poll("Second?", &two_options()).unwrap();

        let polls = repo.list_polls().unwrap();
        assert_eq!(polls.len(), 2);
        assert_eq!(polls[0].id, first.id);
        assert_eq!(polls[1].id, second.id);
    }

    #[test]
    fn test_tally_invariant_after_mixed_sequence() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let a = repo.create_poll("A?", &two_options()).unwrap();
        let b = repo
            .create_poll("B?", &["x".to_string(), "y".to_string(), "z".to_string()])
            .unwrap();

        repo.vote_poll(&a.id, &a.options[0].id).unwrap();
        repo.vote_poll(&b.id, &b.options[2].id).unwrap();
        repo.vote_poll(&b.id, &b.options[2].id).unwrap();
        repo.vote_poll(&a.id, &a.options[1].id).unwrap();
        repo.vote_poll(&b.id, &b.options[0].id).unwrap();

        for poll in repo.list_polls().unwrap() {
            assert!(poll.tally_is_consistent());
        }
    }
}
