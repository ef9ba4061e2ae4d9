//! CodeRaw CLI - Whitelist management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a player to a raw's whitelist for 30 days
//! coderaw whitelist add -OcfVWoCNOj7-B-kxUO8 --player 123456 --days 30
//!
//! # Remove a player
//! coderaw whitelist remove -OcfVWoCNOj7-B-kxUO8 --player 123456
//!
//! # List the whitelist
//! coderaw whitelist list -OcfVWoCNOj7-B-kxUO8
//!
//! # Show a raw's info and code
//! coderaw whitelist view -OcfVWoCNOj7-B-kxUO8
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_BASE_URL` - Base URL of the raw document store
//! - `WHITELIST_ROLE_LABEL` - Role label written into entries (optional)
//! - `WHITELIST_DEFAULT_DAYS` - Default expiry window (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "coderaw")]
#[command(author, version, about = "CodeRaw whitelist tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage raw whitelists
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },
}

#[derive(Subcommand)]
enum WhitelistAction {
    /// Add a player to a raw's whitelist
    Add {
        /// Raw document id
        raw_id: String,

        /// Player id to whitelist
        #[arg(short, long)]
        player: String,

        /// Expiry window in days (defaults to WHITELIST_DEFAULT_DAYS)
        #[arg(short, long)]
        days: Option<i64>,
    },
    /// Remove a player from a raw's whitelist
    Remove {
        /// Raw document id
        raw_id: String,

        /// Player id to remove
        #[arg(short, long)]
        player: String,
    },
    /// List the players whitelisted in a raw
    List {
        /// Raw document id
        raw_id: String,
    },
    /// Show a raw's info and code
    View {
        /// Raw document id
        raw_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Whitelist { action } => match action {
            WhitelistAction::Add {
                raw_id,
                player,
                days,
            } => commands::whitelist::add(&raw_id, &player, days).await?,
            WhitelistAction::Remove { raw_id, player } => {
                commands::whitelist::remove(&raw_id, &player).await?;
            }
            WhitelistAction::List { raw_id } => commands::whitelist::list(&raw_id).await?,
            WhitelistAction::View { raw_id } => commands::whitelist::view(&raw_id).await?,
        },
    }

    Ok(())
}
