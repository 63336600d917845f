// SPDX-License-Identifier: Apache-2.0

//! `pollbox show` command - Show a poll's ballot.
//!
//! Once the local voted marker exists this shows results instead of the
//! ballot, so a voter is not offered a second vote.

use pollbox_core::{PollId, PollRepository};

use super::results::print_results;

pub fn execute(
    repository: &PollRepository,
    poll_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_id = PollId::new(poll_id);

    let Some(poll) = repository.get_poll(&poll_id)? else {
        println!("Poll not found: {}", poll_id);
        std::process::exit(1);
    };

    if repository.store().has_voted(&poll_id) {
        println!("✓ You already voted on this poll.");
        println!();
        print_results(&poll);
        return Ok(());
    }

    println!("{}", poll.question);
    println!(
        "  {} votes • created {}",
        poll.total_votes,
        poll.created_at.format("%Y-%m-%d")
    );
    println!();
    println!("Choose your answer:");
    for option in &poll.options {
        println!("  • {}  [{}]", option.text, option.id);
    }
    println!();
    println!("  pollbox vote {} <option-id>", poll.id);
    println!();

    Ok(())
}
