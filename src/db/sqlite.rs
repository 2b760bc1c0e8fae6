//! SQLite-backed implementation of the stopwatch store.

use crate::db::store::StopwatchStore;
use crate::errors::{AppError, AppResult};
use crate::models::stopwatch::Stopwatch;
use chrono::{DateTime, Local};
use rusqlite::{Connection, Row, params};

pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<Stopwatch> {
    let start_raw: Option<String> = row.get("start_time")?;
    let start_time = match start_raw {
        Some(s) => {
            let parsed = DateTime::parse_from_rfc3339(&s).map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTimestamp(s.clone())),
                )
            })?;
            Some(parsed.with_timezone(&Local))
        }
        None => None,
    };

    Ok(Stopwatch {
        id: row.get("id")?,
        name: row.get("name")?,
        is_running: row.get::<_, i64>("is_running")? == 1,
        elapsed: row.get("elapsed")?,
        start_time,
        version: row.get("version")?,
        created_at: row.get("created_at")?,
        deleted_at: row.get("deleted_at")?,
    })
}

impl StopwatchStore for SqliteStore<'_> {
    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Stopwatch>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM stopwatches
             WHERE id = ?1 AND deleted_at IS NULL",
        )?;

        let mut rows = stmt.query_map([id], map_row)?;
        match rows.next() {
            Some(r) => Ok(Some(r?)),
            None => Ok(None),
        }
    }

    fn find_all_ordered(&mut self) -> AppResult<Vec<Stopwatch>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM stopwatches
             WHERE deleted_at IS NULL
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save(&mut self, record: &mut Stopwatch) -> AppResult<()> {
        let start_str = record.start_time.map(|t| t.to_rfc3339());

        if record.id == 0 {
            self.conn.execute(
                "INSERT INTO stopwatches (name, is_running, elapsed, start_time, version, created_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5)",
                params![
                    record.name,
                    if record.is_running { 1 } else { 0 },
                    record.elapsed,
                    start_str,
                    record.created_at,
                ],
            )?;
            record.id = self.conn.last_insert_rowid();
            record.version = 0;
            return Ok(());
        }

        // Optimistic write: only lands when nobody else saved since our read.
        let changed = self.conn.execute(
            "UPDATE stopwatches
             SET name = ?1, is_running = ?2, elapsed = ?3, start_time = ?4,
                 version = version + 1
             WHERE id = ?5 AND version = ?6 AND deleted_at IS NULL",
            params![
                record.name,
                if record.is_running { 1 } else { 0 },
                record.elapsed,
                start_str,
                record.id,
                record.version,
            ],
        )?;

        if changed == 0 {
            return Err(AppError::Conflict(record.id));
        }
        record.version += 1;
        Ok(())
    }

    fn soft_delete(&mut self, id: i64, version: i64, now: DateTime<Local>) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE stopwatches
             SET deleted_at = ?1, version = version + 1
             WHERE id = ?2 AND version = ?3 AND deleted_at IS NULL",
            params![now.to_rfc3339(), id, version],
        )?;

        if changed == 0 {
            // Distinguish a stale token from a record that is already gone.
            let mut stmt = self.conn.prepare_cached(
                "SELECT 1 FROM stopwatches WHERE id = ?1 AND deleted_at IS NULL",
            )?;
            if stmt.exists([id])? {
                return Err(AppError::Conflict(id));
            }
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}
