use clap::{Parser, Subcommand};

use crate::domain::Year;

#[derive(Parser, Debug)]
#[command(author, version, about = "golf cup ranking backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Pull the shared document from the remote store (or push with --push)
    Sync {
        /// Upload the local document instead of downloading
        #[arg(long)]
        push: bool,
    },
    /// Print a season's leaderboards to the terminal
    Standings {
        /// Season year (defaults to the current year)
        #[arg(short, long)]
        year: Option<Year>,
        /// Show raw scores without handicap adjustment
        #[arg(long)]
        raw: bool,
    },
}
