use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1) Prepare configuration
    //
    // init_all resolves the database path (a relative --db name lands under
    // the config directory); the same path is recorded in the config file
    // and used for the migrations below.
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rStopwatch…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2) Open DB
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3) Initialize DB (tables + migrations)
    //
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4) Internal log (non-blocking)
    //
    if let Err(e) = log::swlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rStopwatch initialization completed!");
    Ok(())
}
