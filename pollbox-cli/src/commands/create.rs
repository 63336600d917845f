// SPDX-License-Identifier: Apache-2.0

//! `pollbox create` command - Create a new poll.
//!
//! Trims and validates the form input here, the way the create screen does;
//! the repository only re-checks the min-options floor.

use pollbox_core::{CreatePollRequest, PollRepository};

pub fn execute(
    repository: &PollRepository,
    question: &str,
    options: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let request = CreatePollRequest::from_raw(question, options);
    request.validate()?;

    let poll = repository.create_poll(&request.question, &request.options)?;

    println!("✓ Poll created");
    println!();
    println!("  {}", poll.question);
    for option in &poll.options {
        println!("    • {}  [{}]", option.text, option.id);
    }
    println!();
    println!("Share the poll id with voters: {}", poll.id);
    println!();
    println!("  pollbox show {}", poll.id);
    println!("  pollbox results {} --watch", poll.id);
    println!();

    Ok(())
}
