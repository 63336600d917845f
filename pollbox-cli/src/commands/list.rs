// SPDX-License-Identifier: Apache-2.0

//! `pollbox list` command - List all polls in the data directory.

use pollbox_core::PollRepository;

pub fn execute(repository: &PollRepository) -> Result<(), Box<dyn std::error::Error>> {
    let polls = repository.list_polls()?;

    if polls.is_empty() {
        println!("No polls yet. Create one:");
        println!();
        println!("  pollbox create --question \"Pizza or Tacos?\" -o Pizza -o Tacos");
        return Ok(());
    }

    println!("╔══════════════════════════════════════╦══════════════════════════════╦═════════╦════════════╗");
    println!("║ ID                                   ║ Question                     ║ Votes   ║ Created    ║");
    println!("╠══════════════════════════════════════╬══════════════════════════════╬═════════╬════════════╣");

    for poll in &polls {
        println!(
            "║ {:<36} ║ {:<28} ║ {:<7} ║ {:<10} ║",
            poll.id.as_str(),
            truncate(&poll.question, 28),
            poll.total_votes,
            poll.created_at.format("%Y-%m-%d")
        );
    }

    println!("╚══════════════════════════════════════╩══════════════════════════════╩═════════╩════════════╝");
    println!();
    println!("Total: {} poll(s)", polls.len());

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
