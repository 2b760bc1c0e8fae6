//! Record-store capability set the engine depends on.
//! Any conforming implementation (SQLite-backed or in-memory) satisfies the
//! engine; tests run against the in-memory one without a real database.

use crate::errors::AppResult;
use crate::models::stopwatch::Stopwatch;
use chrono::{DateTime, Local};

pub trait StopwatchStore {
    /// Live (non-deleted) record with `id`, if any.
    fn find_by_id(&mut self, id: i64) -> AppResult<Option<Stopwatch>>;

    /// All live records, ascending by id.
    fn find_all_ordered(&mut self) -> AppResult<Vec<Stopwatch>>;

    /// Insert (`record.id == 0`, assigns the id) or update.
    /// An update only succeeds when `record.version` matches the stored
    /// token; on success the token is bumped on both sides. A stale token
    /// fails with `AppError::Conflict` so the caller can refetch and retry.
    fn save(&mut self, record: &mut Stopwatch) -> AppResult<()>;

    /// Marks the record deleted; subsequent reads exclude it. Guarded by the
    /// same version token as `save` so a delete cannot race a concurrent
    /// state transition on the same record.
    fn soft_delete(&mut self, id: i64, version: i64, now: DateTime<Local>) -> AppResult<()>;
}
