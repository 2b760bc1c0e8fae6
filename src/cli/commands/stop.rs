use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::Engine;
use crate::db::log::swlog;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let view = {
            let mut store = SqliteStore::new(&pool.conn);
            let clock = SystemClock;
            Engine::new(&mut store, &clock).stop(*id)?
        };

        swlog(
            &pool.conn,
            "stop",
            &view.id.to_string(),
            &format!(
                "Stopped stopwatch '{}' at {} elapsed",
                view.name, view.elapsed
            ),
        )?;

        success(format!(
            "⏹ Stopped '{}' (id {}) at {}.",
            view.name,
            view.id,
            format_seconds(view.elapsed)
        ));
    }
    Ok(())
}
