use anyhow::Result;

use golf_cup_ranking::cli::Command;
use golf_cup_ranking::{handle_serve, handle_standings, handle_sync, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Sync { push } => handle_sync(*push),
        Command::Standings { year, raw } => handle_standings(*year, *raw),
    }
}
