use chrono::{DateTime, Local};
use serde::Serialize;

/// The stopwatch entity as persisted by the store.
///
/// `elapsed` holds the seconds accumulated across *finished* runs. While the
/// stopwatch is running, the current run lives only in `start_time`; the
/// value exposed to callers is computed by [`Stopwatch::effective_elapsed`]
/// and is persisted back into `elapsed` only on stop.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    pub id: i64,   // ⇔ stopwatches.id (store-assigned, 0 until inserted)
    pub name: String,
    pub is_running: bool,
    pub elapsed: i64, // ⇔ stopwatches.elapsed (whole seconds, >= 0)
    pub start_time: Option<DateTime<Local>>, // set iff is_running
    pub version: i64, // optimistic-concurrency token, bumped on every save
    pub created_at: String, // ISO 8601
    pub deleted_at: Option<String>, // soft-delete marker, NULL while live
}

impl Stopwatch {
    /// Fresh stopwatch as produced by `create`: stopped, zero elapsed.
    pub fn new(name: &str, now: DateTime<Local>) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            is_running: false,
            elapsed: 0,
            start_time: None,
            version: 0,
            created_at: now.to_rfc3339(),
            deleted_at: None,
        }
    }

    /// Elapsed seconds as seen by callers: the stored value plus the current
    /// run, floored to whole seconds. A negative run delta (clock skew,
    /// future start_time) is clamped to zero instead of shrinking the total.
    pub fn effective_elapsed(&self, now: DateTime<Local>) -> i64 {
        match self.start_time {
            Some(started) if self.is_running => {
                self.elapsed + (now - started).num_seconds().max(0)
            }
            _ => self.elapsed,
        }
    }

    /// Read view returned by every engine operation.
    pub fn view(&self, now: DateTime<Local>) -> StopwatchView {
        StopwatchView {
            id: self.id,
            name: self.name.clone(),
            is_running: self.is_running,
            elapsed: self.effective_elapsed(now),
        }
    }
}

/// Response shape: `{id, name, is_running, elapsed}` with elapsed live.
#[derive(Debug, Clone, Serialize)]
pub struct StopwatchView {
    pub id: i64,
    pub name: String,
    pub is_running: bool,
    pub elapsed: i64,
}

/// Partial update carried by `edit`; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StopwatchPatch {
    pub name: Option<String>,
    pub elapsed: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Local> {
        DateTime::parse_from_rfc3339("2026-03-01T10:00:00+00:00")
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn effective_elapsed_is_stored_value_while_stopped() {
        let mut sw = Stopwatch::new("demo", t0());
        sw.elapsed = 42;
        assert_eq!(sw.effective_elapsed(t0() + Duration::seconds(999)), 42);
    }

    #[test]
    fn effective_elapsed_adds_current_run_while_running() {
        let mut sw = Stopwatch::new("demo", t0());
        sw.elapsed = 10;
        sw.is_running = true;
        sw.start_time = Some(t0());
        assert_eq!(sw.effective_elapsed(t0() + Duration::seconds(5)), 15);
    }

    #[test]
    fn effective_elapsed_floors_subsecond_remainder() {
        let mut sw = Stopwatch::new("demo", t0());
        sw.is_running = true;
        sw.start_time = Some(t0());
        let now = t0() + Duration::milliseconds(4900);
        assert_eq!(sw.effective_elapsed(now), 4);
    }

    #[test]
    fn effective_elapsed_clamps_negative_delta_to_zero() {
        let mut sw = Stopwatch::new("demo", t0());
        sw.elapsed = 7;
        sw.is_running = true;
        // start_time in the future relative to `now`
        sw.start_time = Some(t0() + Duration::seconds(60));
        assert_eq!(sw.effective_elapsed(t0()), 7);
    }
}
