use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::stopwatch::StopwatchView;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::table::Table;
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let views = {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).list()?
        };

        if *json {
            let out = serde_json::to_string_pretty(&views)
                .map_err(|e| AppError::Other(format!("JSON rendering failed: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if views.is_empty() {
            println!("No stopwatches yet. Create one with `rstopwatch add <NAME>`.");
            return Ok(());
        }

        print_table(&views, cfg);
    }
    Ok(())
}

fn print_table(views: &[StopwatchView], cfg: &Config) {
    let mut table = Table::new(&["ID", "NAME", "STATUS", "ELAPSED"]);

    for v in views {
        let status = if v.is_running { "running" } else { "stopped" };
        let elapsed = if cfg.elapsed_format == "seconds" {
            v.elapsed.to_string()
        } else {
            format_seconds(v.elapsed)
        };

        table.add_row(vec![
            v.id.to_string(),
            v.name.clone(),
            format!("{}{}{}", color_for_status(v.is_running), status, RESET),
            elapsed,
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));
}
