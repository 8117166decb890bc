pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod ranking;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::Year;
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;
use crate::services::sync::SyncService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_sync(push: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = SyncService::new(config);
        service.run(push).await
    })
}

pub fn handle_standings(year: Option<Year>, raw: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = StandingsService::new(config);
    service.run(year, raw)
}
