use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::log::swlog;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Create a new stopwatch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        //
        // 1. Boundary validation: reject empty labels before touching the DB
        //
        if name.trim().is_empty() {
            return Err(AppError::InvalidName("name must not be empty".into()));
        }

        //
        // 2. Open DB and run the engine
        //
        let pool = DbPool::new(&cfg.database)?;
        let view = {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).create(name)?
        };

        swlog(
            &pool.conn,
            "add",
            &view.id.to_string(),
            &format!("Created stopwatch '{}'", view.name),
        )?;

        success(format!("Created stopwatch '{}' (id {}).", view.name, view.id));
    }

    Ok(())
}
