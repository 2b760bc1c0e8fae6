use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rsw, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rsw()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("deep work"))
        .stdout(contains("reading"))
        .stdout(contains("stopped"))
        .stdout(contains("00:00:00"));
}

#[test]
fn test_add_rejects_blank_name() {
    let db_path = setup_test_db("blank_name");

    rsw()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsw()
        .args(["--db", &db_path, "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Invalid stopwatch name"));
}

#[test]
fn test_start_stop_cycle() {
    let db_path = setup_test_db("start_stop");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .success()
        .stdout(contains("Started"));

    rsw()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("running"));

    rsw()
        .args(["--db", &db_path, "stop", "1"])
        .assert()
        .success()
        .stdout(contains("Stopped"));
}

#[test]
fn test_double_start_is_rejected() {
    let db_path = setup_test_db("double_start");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .success();

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .failure()
        .stderr(contains("already running"));
}

#[test]
fn test_stop_without_start_is_rejected() {
    let db_path = setup_test_db("stop_stopped");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "stop", "1"])
        .assert()
        .failure()
        .stderr(contains("not running"));
}

#[test]
fn test_unknown_id_reports_not_found() {
    let db_path = setup_test_db("not_found");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "99"])
        .assert()
        .failure()
        .stderr(contains("No stopwatch found with id 99"));
}

#[test]
fn test_edit_name_and_elapsed() {
    let db_path = setup_test_db("edit");
    init_db_with_data(&db_path);

    rsw()
        .args([
            "--db", &db_path, "edit", "1", "--name", "renamed", "--elapsed", "100",
        ])
        .assert()
        .success()
        .stdout(contains("Updated"));

    rsw()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("renamed"))
        .stdout(contains("00:01:40"));
}

#[test]
fn test_edit_elapsed_while_running_is_rejected() {
    let db_path = setup_test_db("edit_running");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .success();

    rsw()
        .args(["--db", &db_path, "edit", "1", "--elapsed", "5"])
        .assert()
        .failure()
        .stderr(contains("running"));

    // renaming stays legal while running
    rsw()
        .args(["--db", &db_path, "edit", "1", "--name", "still legal"])
        .assert()
        .success();
}

#[test]
fn test_edit_without_fields_is_rejected() {
    let db_path = setup_test_db("edit_noop");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "edit", "1"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));
}

#[test]
fn test_del_running_is_rejected() {
    let db_path = setup_test_db("del_running");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .success();

    rsw()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("stop it before deleting"));
}

#[test]
fn test_del_removes_from_list() {
    let db_path = setup_test_db("del_ok");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rsw()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("deep work").not())
        .stdout(contains("reading"));
}

#[test]
fn test_list_json_output() {
    let db_path = setup_test_db("list_json");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"deep work\""))
        .stdout(contains("\"is_running\": false"))
        .stdout(contains("\"elapsed\": 0"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "start", "1"])
        .assert()
        .success();

    rsw()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Created stopwatch 'deep work'"))
        .stdout(contains("Started stopwatch"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("maintenance");
    init_db_with_data(&db_path);

    rsw()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rsw()
        .args(["--db", &db_path, "db", "--migrate", "--vacuum", "--info"])
        .assert()
        .success()
        .stdout(contains("Migration completed"))
        .stdout(contains("Vacuum completed"))
        .stdout(contains("Stopwatches"));
}

#[test]
fn test_backup_refuses_overwrite_without_force() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let mut dest = std::env::temp_dir();
    dest.push("backup_rstopwatch_copy.sqlite");
    let dest = dest.to_string_lossy().to_string();
    std::fs::remove_file(&dest).ok();

    rsw()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    rsw()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsw()
        .args(["--db", &db_path, "backup", "--file", &dest, "--force"])
        .assert()
        .success();
}

/// A relative --db name is anchored under the config directory; the config
/// file and the migrated database must end up pointing at the same file.
#[test]
fn test_init_with_relative_db_keeps_config_consistent() {
    let home = std::env::temp_dir().join("rstopwatch_relative_home");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&home).unwrap();

    rsw()
        .env("HOME", &home)
        .args(["--db", "rel.sqlite", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conf = std::fs::read_to_string(home.join(".rstopwatch/rstopwatch.conf")).unwrap();
    assert!(conf.contains("rel.sqlite"));
    assert!(home.join(".rstopwatch/rel.sqlite").exists());

    // Commands that read the database path from the config file must find
    // the migrated database, not an empty placeholder.
    rsw()
        .env("HOME", &home)
        .args(["add", "focus"])
        .assert()
        .success();

    rsw()
        .env("HOME", &home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("focus"));
}

#[test]
fn test_unreadable_config_is_reported_not_panicked() {
    let home = std::env::temp_dir().join("rstopwatch_bad_conf_home");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(home.join(".rstopwatch")).unwrap();
    // missing the mandatory `database` key
    std::fs::write(home.join(".rstopwatch/rstopwatch.conf"), "elapsed_format: hms\n").unwrap();

    rsw()
        .env("HOME", &home)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_init_on_non_database_file_reports_migration_error() {
    let db_path = setup_test_db("not_a_db");
    std::fs::write(&db_path, "definitely not an sqlite file").unwrap();

    rsw()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .failure()
        .stderr(contains("Database migration error"));
}
