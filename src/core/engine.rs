//! The stopwatch state engine.
//!
//! Owns the running/stopped state machine and the elapsed-time arithmetic on
//! top of an abstract record store. The engine itself is stateless between
//! calls; every mutation is a read-modify-write guarded by the store's
//! optimistic version token and retried on conflict.

use crate::core::clock::Clock;
use crate::db::store::StopwatchStore;
use crate::errors::{AppError, AppResult};
use crate::models::stopwatch::{Stopwatch, StopwatchPatch, StopwatchView};
use chrono::{DateTime, Local};

/// Conflict retries before giving up and surfacing the error.
const SAVE_RETRIES: usize = 3;

pub struct Engine<'a, S: StopwatchStore> {
    store: &'a mut S,
    clock: &'a dyn Clock,
}

impl<'a, S: StopwatchStore> Engine<'a, S> {
    pub fn new(store: &'a mut S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// All live stopwatches ascending by id, elapsed computed live.
    pub fn list(&mut self) -> AppResult<Vec<StopwatchView>> {
        let now = self.clock.now();
        let rows = self.store.find_all_ordered()?;
        Ok(rows.iter().map(|sw| sw.view(now)).collect())
    }

    /// Creates a stopped stopwatch with zero elapsed time.
    pub fn create(&mut self, name: &str) -> AppResult<StopwatchView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("name must not be empty".into()));
        }

        let now = self.clock.now();
        let mut sw = Stopwatch::new(name, now);
        self.store.save(&mut sw)?;
        Ok(sw.view(now))
    }

    /// stopped → running. A double start is rejected, not a no-op.
    pub fn start(&mut self, id: i64) -> AppResult<StopwatchView> {
        self.mutate(id, |sw, now| {
            if sw.is_running {
                return Err(AppError::InvalidState(format!(
                    "stopwatch {id} is already running"
                )));
            }
            sw.is_running = true;
            sw.start_time = Some(now);
            Ok(())
        })
    }

    /// running → stopped. The only place wall-clock time is banked into
    /// `elapsed`.
    pub fn stop(&mut self, id: i64) -> AppResult<StopwatchView> {
        self.mutate(id, |sw, now| {
            if !sw.is_running {
                return Err(AppError::InvalidState(format!(
                    "stopwatch {id} is not running"
                )));
            }
            sw.elapsed = sw.effective_elapsed(now);
            sw.is_running = false;
            sw.start_time = None;
            Ok(())
        })
    }

    /// Merges the provided fields into the record; absent fields are left
    /// untouched. Overriding `elapsed` while time is accruing is illegal.
    pub fn update(&mut self, id: i64, patch: &StopwatchPatch) -> AppResult<StopwatchView> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(AppError::InvalidName("name must not be empty".into()));
        }
        if let Some(elapsed) = patch.elapsed
            && elapsed < 0
        {
            return Err(AppError::InvalidElapsed(format!(
                "{elapsed} (must be >= 0)"
            )));
        }

        self.mutate(id, |sw, _now| {
            if patch.elapsed.is_some() && sw.is_running {
                return Err(AppError::InvalidState(format!(
                    "cannot override elapsed while stopwatch {id} is running"
                )));
            }
            if let Some(name) = &patch.name {
                sw.name = name.trim().to_string();
            }
            if let Some(elapsed) = patch.elapsed {
                sw.elapsed = elapsed;
            }
            Ok(())
        })
    }

    /// Soft-deletes a stopped stopwatch. Deleting a running one would
    /// discard the unaccounted run, so it must be stopped first.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        let mut attempt = 0;
        loop {
            let now = self.clock.now();
            let sw = self.store.find_by_id(id)?.ok_or(AppError::NotFound(id))?;
            if sw.is_running {
                return Err(AppError::InvalidState(format!(
                    "stopwatch {id} is running; stop it before deleting"
                )));
            }
            match self.store.soft_delete(id, sw.version, now) {
                Ok(()) => return Ok(()),
                Err(AppError::Conflict(_)) if attempt < SAVE_RETRIES => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }

    /// Shared read-modify-write cycle: fetch, validate, write, and on a
    /// version conflict refetch and revalidate against the fresh state.
    /// One `now` is captured per attempt and reused for both the precondition
    /// check and the persisted write.
    fn mutate<F>(&mut self, id: i64, apply: F) -> AppResult<StopwatchView>
    where
        F: Fn(&mut Stopwatch, DateTime<Local>) -> AppResult<()>,
    {
        let mut attempt = 0;
        loop {
            let now = self.clock.now();
            let mut sw = self.store.find_by_id(id)?.ok_or(AppError::NotFound(id))?;
            apply(&mut sw, now)?;
            match self.store.save(&mut sw) {
                Ok(()) => return Ok(sw.view(now)),
                Err(AppError::Conflict(_)) if attempt < SAVE_RETRIES => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }
}
