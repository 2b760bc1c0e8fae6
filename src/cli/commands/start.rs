use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::log::swlog;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let view = {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).start(*id)?
        };

        swlog(
            &pool.conn,
            "start",
            &view.id.to_string(),
            &format!("Started stopwatch '{}'", view.name),
        )?;

        success(format!("▶ Started '{}' (id {}).", view.name, view.id));
    }
    Ok(())
}
