//! rStopwatch library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop { .. } => cli::commands::stop::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config once
    let mut cfg = Config::load()?;

    // 3) apply DB override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4) hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
