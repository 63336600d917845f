// SPDX-License-Identifier: Apache-2.0

//! Pollbox CLI
//!
//! Command-line view layer over the poll repository: create a poll, show
//! its ballot, cast a vote, and watch live results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pollbox_core::{ConfigLoader, PollRepository, PollStore};

mod commands;
mod tui;

/// Pollbox - anonymous multiple-choice polls over a local blob store
#[derive(Parser)]
#[command(name = "pollbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "pollbox.yaml")]
    pub config: String,

    /// Override the data directory from the configuration
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new poll
    Create {
        /// The poll question
        #[arg(short, long)]
        question: String,

        /// An option voters can pick; repeat for each option (2-10)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Show a poll's ballot (or its results, once you have voted)
    Show {
        /// Poll id
        poll_id: String,
    },

    /// Cast a vote for one option of a poll
    Vote {
        /// Poll id
        poll_id: String,

        /// Option id to vote for
        option_id: String,
    },

    /// Show a poll's results
    Results {
        /// Poll id
        poll_id: String,

        /// Live view that refreshes on a fixed interval
        #[arg(short, long)]
        watch: bool,
    },

    /// List all polls in the data directory
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    tracing::debug!(data_dir = %config.data_dir.display(), "Opening poll store");
    let repository = PollRepository::new(PollStore::open(&config.data_dir)?);

    // Dispatch to command handlers
    match cli.command {
        Commands::Create { question, options } => {
            commands::create::execute(&repository, &question, &options)
        }
        Commands::Show { poll_id } => commands::show::execute(&repository, &poll_id),
        Commands::Vote { poll_id, option_id } => {
            commands::vote::execute(&repository, &poll_id, &option_id)
        }
        Commands::Results { poll_id, watch } => {
            commands::results::execute(&repository, &config, &poll_id, watch)
        }
        Commands::List => commands::list::execute(&repository),
    }
}
