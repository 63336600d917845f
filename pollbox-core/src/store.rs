// SPDX-License-Identifier: Apache-2.0

//! Durable key-value storage for the poll collection.
//!
//! Mirrors an origin-scoped localStorage: a data directory where each key is
//! one file holding a string value. The whole poll collection lives as a
//! single JSON array under one fixed key; per-poll voted markers live under
//! keys derived from the poll id. Writes overwrite the stored blob
//! unconditionally and are assumed atomic at the storage layer; there is no
//! partial-write recovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PollError, PollResult};
use crate::model::Poll;
use crate::types::PollId;

/// Fixed storage key for the serialized poll collection.
pub const POLLS_KEY: &str = "anonymous-polls";

/// Marker value stored under a `voted_<pollId>` key. Presence, not content,
/// is the signal.
const VOTED_MARKER: &str = "true";

/// File-backed storage adapter scoped to one data directory.
#[derive(Debug, Clone)]
pub struct PollStore {
    root: PathBuf,
}

impl PollStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> PollResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| PollError::Io {
            context: "creating data directory",
            source: e,
        })?;
        Ok(Self { root })
    }

    /// The data directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize the entire collection and overwrite the stored blob.
    pub fn save(&self, polls: &[Poll]) -> PollResult<()> {
        let blob = serde_json::to_string(polls).map_err(|e| PollError::Serialize {
            context: "serializing poll collection",
            source: e,
        })?;
        fs::write(self.key_path(POLLS_KEY), blob).map_err(|e| PollError::Io {
            context: "writing poll collection",
            source: e,
        })
    }

    /// Read and deserialize the full collection.
    ///
    /// A missing blob is an empty collection. A corrupt blob fails soft:
    /// it is logged and treated as empty, silently discarding unreadable
    /// prior data. Timestamps come back as proper instants, not strings.
    pub fn load(&self) -> PollResult<Vec<Poll>> {
        let path = self.key_path(POLLS_KEY);
        let blob = match fs::read_to_string(&path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PollError::Io {
                    context: "reading poll collection",
                    source: e,
                })
            }
        };

        match serde_json::from_str(&blob) {
            Ok(polls) => Ok(polls),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Poll collection blob is unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Record that this client has voted on the given poll.
    /// A weak, locally-scoped convention for the View Layer, not a
    /// repository-level guarantee.
    pub fn mark_voted(&self, poll_id: &PollId) -> PollResult<()> {
        fs::write(self.key_path(&voted_key(poll_id)), VOTED_MARKER).map_err(|e| PollError::Io {
            context: "writing voted marker",
            source: e,
        })
    }

    /// Whether a voted marker exists for the given poll.
    pub fn has_voted(&self, poll_id: &PollId) -> bool {
        self.key_path(&voted_key(poll_id)).exists()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

fn voted_key(poll_id: &PollId) -> String {
    format!("voted_{}", poll_id)
}
