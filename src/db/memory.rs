//! In-memory store used by the engine tests.
//! Mirrors the SQLite store's semantics, including the version token and the
//! soft-delete visibility rules, without touching a database file.

use crate::db::store::StopwatchStore;
use crate::errors::{AppError, AppResult};
use crate::models::stopwatch::Stopwatch;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

pub struct MemoryStore {
    rows: BTreeMap<i64, Stopwatch>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Raw row access (deleted rows included), for assertions in tests.
    pub fn raw(&self, id: i64) -> Option<&Stopwatch> {
        self.rows.get(&id)
    }
}

impl StopwatchStore for MemoryStore {
    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Stopwatch>> {
        Ok(self
            .rows
            .get(&id)
            .filter(|r| r.deleted_at.is_none())
            .cloned())
    }

    fn find_all_ordered(&mut self) -> AppResult<Vec<Stopwatch>> {
        // BTreeMap iteration is already ascending by id
        Ok(self
            .rows
            .values()
            .filter(|r| r.deleted_at.is_none())
            .cloned()
            .collect())
    }

    fn save(&mut self, record: &mut Stopwatch) -> AppResult<()> {
        if record.id == 0 {
            record.id = self.next_id;
            self.next_id += 1;
            record.version = 0;
            self.rows.insert(record.id, record.clone());
            return Ok(());
        }

        match self.rows.get(&record.id) {
            Some(cur) if cur.deleted_at.is_none() && cur.version == record.version => {
                record.version += 1;
                self.rows.insert(record.id, record.clone());
                Ok(())
            }
            _ => Err(AppError::Conflict(record.id)),
        }
    }

    fn soft_delete(&mut self, id: i64, version: i64, now: DateTime<Local>) -> AppResult<()> {
        match self.rows.get_mut(&id) {
            Some(r) if r.deleted_at.is_none() && r.version == version => {
                r.deleted_at = Some(now.to_rfc3339());
                r.version += 1;
                Ok(())
            }
            Some(r) if r.deleted_at.is_none() => Err(AppError::Conflict(id)),
            _ => Err(AppError::NotFound(id)),
        }
    }
}
