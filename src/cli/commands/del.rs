use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::log::swlog;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt (the record is only soft-deleted, but it
        // disappears from every listing)
        //
        if !*yes
            && !ask_confirmation(&format!(
                "Delete stopwatch {}? It will no longer appear in listings.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let pool = DbPool::new(&cfg.database)?;
        {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).delete(*id)?;
        }

        swlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Soft-deleted stopwatch {}", id),
        )?;

        success(format!("Stopwatch {} has been deleted.", id));
    }
    Ok(())
}
