// SPDX-License-Identifier: Apache-2.0

//! `pollbox vote` command - Cast one vote.
//!
//! The already-voted check lives here, backed by a locally stored marker.
//! It is a client-side convention only, never enforced by the repository.

use pollbox_core::{OptionId, PollId, PollRepository};

use super::results::print_results;

pub fn execute(
    repository: &PollRepository,
    poll_id: &str,
    option_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_id = PollId::new(poll_id);
    let option_id = OptionId::new(option_id);

    if repository.store().has_voted(&poll_id) {
        println!("You already voted on this poll.");
        if let Some(poll) = repository.get_poll(&poll_id)? {
            println!();
            print_results(&poll);
        }
        return Ok(());
    }

    let Some(poll) = repository.vote_poll(&poll_id, &option_id)? else {
        println!("Poll or option not found: {} / {}", poll_id, option_id);
        std::process::exit(1);
    };

    // Marker only after a successful vote.
    repository.store().mark_voted(&poll_id)?;

    println!("✓ Thanks for voting!");
    println!();
    print_results(&poll);

    Ok(())
}
