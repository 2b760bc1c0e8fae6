use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::log::swlog;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::stopwatch::StopwatchPatch;
use crate::ui::messages::success;

/// Partially update a stopwatch: rename and/or override banked elapsed time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, name, elapsed } = cmd {
        //
        // 1. Boundary validation
        //
        if name.is_none() && elapsed.is_none() {
            return Err(AppError::Other(
                "Nothing to do: specify at least --name or --elapsed.".into(),
            ));
        }
        if let Some(n) = name
            && n.trim().is_empty()
        {
            return Err(AppError::InvalidName("name must not be empty".into()));
        }
        if let Some(e) = elapsed
            && *e < 0
        {
            return Err(AppError::InvalidElapsed(format!("{e} (must be >= 0)")));
        }

        let patch = StopwatchPatch {
            name: name.clone(),
            elapsed: *elapsed,
        };

        //
        // 2. Execute
        //
        let pool = DbPool::new(&cfg.database)?;
        let view = {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).update(*id, &patch)?
        };

        swlog(
            &pool.conn,
            "edit",
            &view.id.to_string(),
            &format!("Updated stopwatch '{}'", view.name),
        )?;

        success(format!("✏️ Updated '{}' (id {}).", view.name, view.id));
    }
    Ok(())
}
