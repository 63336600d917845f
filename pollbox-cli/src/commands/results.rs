// SPDX-License-Identifier: Apache-2.0

//! `pollbox results` command - One-shot or live results view.
//!
//! The live view re-fetches the poll on the configured fixed interval; it
//! only ever serves point-in-time reads, so the worst it can show is a
//! count that is stale until the next refresh.

use pollbox_core::{Config, Poll, PollId, PollRepository};

use crate::tui;

const BAR_WIDTH: usize = 30;

pub fn execute(
    repository: &PollRepository,
    config: &Config,
    poll_id: &str,
    watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_id = PollId::new(poll_id);

    if watch {
        return tui::run_live(repository, &poll_id, config.refresh_interval_ms);
    }

    let Some(poll) = repository.get_poll(&poll_id)? else {
        println!("Poll not found: {}", poll_id);
        std::process::exit(1);
    };

    print_results(&poll);
    Ok(())
}

/// Render a results view to stdout. Shared with `show` and `vote`.
pub fn print_results(poll: &Poll) {
    println!("{}", poll.question);
    println!(
        "  {} votes • {} options • created {}",
        poll.total_votes,
        poll.options.len(),
        poll.created_at.format("%Y-%m-%d")
    );
    println!();

    if poll.total_votes == 0 {
        println!("No votes yet. Be the first:");
        println!();
        println!("  pollbox show {}", poll.id);
        println!();
        return;
    }

    let leader_id = poll.leader().map(|opt| opt.id.clone());

    let mut ranked: Vec<_> = poll.options.iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));

    for (rank, option) in ranked.iter().enumerate() {
        let percentage = poll.percentage(option.votes);
        let filled = (percentage as usize * BAR_WIDTH) / 100;
        let crown = if Some(&option.id) == leader_id.as_ref() {
            " 🏆"
        } else {
            ""
        };

        println!("  #{} {}{}", rank + 1, option.text, crown);
        println!(
            "     [{}{}] {}% ({} votes)",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            percentage,
            option.votes
        );
    }
    println!();
}
