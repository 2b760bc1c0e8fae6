//! SQLite store tests: schema, version token, soft-delete visibility.
//! These run against a real temp-file database through the same migration
//! path the CLI uses.

use chrono::{DateTime, Local};
use rstopwatch::core::clock::ManualClock;
use rstopwatch::core::engine::Engine;
use rstopwatch::db::initialize::init_db;
use rstopwatch::db::sqlite::SqliteStore;
use rstopwatch::db::store::StopwatchStore;
use rstopwatch::errors::AppError;
use rstopwatch::models::stopwatch::Stopwatch;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

fn open_test_db(name: &str) -> Connection {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstopwatch_store.sqlite", name));
    fs::remove_file(&path).ok();
    let conn = Connection::open(&path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

fn now() -> DateTime<Local> {
    DateTime::parse_from_rfc3339("2026-03-02T12:00:00+01:00")
        .unwrap()
        .with_timezone(&Local)
}

#[test]
fn insert_assigns_id_and_roundtrips() {
    let conn = open_test_db("roundtrip");
    let mut store = SqliteStore::new(&conn);

    let mut sw = Stopwatch::new("focus", now());
    sw.is_running = true;
    sw.start_time = Some(now());
    store.save(&mut sw).unwrap();
    assert!(sw.id > 0);

    let loaded = store.find_by_id(sw.id).unwrap().expect("row exists");
    assert_eq!(loaded.name, "focus");
    assert!(loaded.is_running);
    assert_eq!(loaded.start_time.unwrap(), now());
    assert_eq!(loaded.elapsed, 0);
    assert_eq!(loaded.version, 0);
}

#[test]
fn stale_version_token_is_a_conflict() {
    let conn = open_test_db("conflict");
    let mut store = SqliteStore::new(&conn);

    let mut sw = Stopwatch::new("contended", now());
    store.save(&mut sw).unwrap();

    // two readers fetch the same version
    let mut first = store.find_by_id(sw.id).unwrap().unwrap();
    let mut second = store.find_by_id(sw.id).unwrap().unwrap();

    first.elapsed = 10;
    store.save(&mut first).unwrap();
    assert_eq!(first.version, 1);

    second.elapsed = 20;
    let err = store.save(&mut second).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // the first write won
    let current = store.find_by_id(sw.id).unwrap().unwrap();
    assert_eq!(current.elapsed, 10);
}

#[test]
fn soft_deleted_rows_disappear_from_reads() {
    let conn = open_test_db("soft_delete");
    let mut store = SqliteStore::new(&conn);

    let mut a = Stopwatch::new("a", now());
    let mut b = Stopwatch::new("b", now());
    store.save(&mut a).unwrap();
    store.save(&mut b).unwrap();

    store.soft_delete(a.id, a.version, now()).unwrap();

    assert!(store.find_by_id(a.id).unwrap().is_none());
    let all = store.find_all_ordered().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, b.id);

    // the row itself is retained for audit/recovery
    let raw: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM stopwatches WHERE deleted_at IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw, 1);

    // deleting again reports NotFound
    let err = store.soft_delete(a.id, a.version, now()).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn soft_delete_with_stale_token_is_a_conflict() {
    let conn = open_test_db("soft_delete_stale");
    let mut store = SqliteStore::new(&conn);

    let mut sw = Stopwatch::new("racy", now());
    store.save(&mut sw).unwrap();
    let stale = sw.version;

    // someone else saves in between
    store.save(&mut sw).unwrap();

    let err = store.soft_delete(sw.id, stale, now()).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[test]
fn engine_runs_unchanged_over_the_sqlite_store() {
    let conn = open_test_db("engine_sqlite");
    let mut store = SqliteStore::new(&conn);
    let clock = ManualClock::new(now());
    let mut engine = Engine::new(&mut store, &clock);

    let id = engine.create("timer").unwrap().id;
    engine.start(id).unwrap();
    clock.advance_secs(7);
    let stopped = engine.stop(id).unwrap();
    assert_eq!(stopped.elapsed, 7);

    engine.delete(id).unwrap();
    assert!(engine.list().unwrap().is_empty());
}

#[test]
fn migrations_are_idempotent() {
    let conn = open_test_db("idempotent");
    // running the full migration pass again must be a no-op
    init_db(&conn).expect("second init");
    init_db(&conn).expect("third init");
}
