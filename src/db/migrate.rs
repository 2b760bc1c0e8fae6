use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `stopwatches` table exists.
fn stopwatches_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='stopwatches'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `stopwatches` table has a `version` column.
fn stopwatches_has_version_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('stopwatches')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "version" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `stopwatches` table with the modern schema.
///
/// The CHECK constraint mirrors the core invariant: a stopwatch is running
/// exactly when it has a start_time.
fn create_stopwatches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stopwatches (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL CHECK(length(trim(name)) > 0),
            is_running INTEGER NOT NULL DEFAULT 0 CHECK(is_running IN (0,1)),
            elapsed    INTEGER NOT NULL DEFAULT 0 CHECK(elapsed >= 0),
            start_time TEXT,
            version    INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            deleted_at TEXT,
            CHECK ((is_running = 0 AND start_time IS NULL)
                OR (is_running = 1 AND start_time IS NOT NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_stopwatches_deleted_at ON stopwatches(deleted_at);
        "#,
    )?;
    Ok(())
}

/// Add the optimistic-concurrency `version` column to a pre-0.3 table.
fn migrate_add_version_column(conn: &Connection) -> Result<()> {
    let version = "20260115_0001_add_version_column";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply (guarded again by the column check for DBs predating the log)
    if !stopwatches_has_version_column(conn)? {
        conn.execute(
            "ALTER TABLE stopwatches ADD COLUMN version INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
    }

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added version token to stopwatches')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'version' to stopwatches table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create stopwatches table if missing
    if !stopwatches_table_exists(conn)? {
        create_stopwatches_table(conn)?;
        success("Created stopwatches table (modern schema).");
        return Ok(());
    }

    // 3) Existing table: keep index and columns up to date
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_stopwatches_deleted_at ON stopwatches(deleted_at);",
    )?;
    migrate_add_version_column(conn)?;

    Ok(())
}
