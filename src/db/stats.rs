use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_seconds;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS (live / running / deleted)
    //
    let live: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM stopwatches WHERE deleted_at IS NULL",
        [],
        |row| row.get(0),
    )?;
    let running: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM stopwatches WHERE deleted_at IS NULL AND is_running = 1",
        [],
        |row| row.get(0),
    )?;
    let deleted: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM stopwatches WHERE deleted_at IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Stopwatches:{} {}{}{}", CYAN, RESET, GREEN, live, RESET);
    println!("{}• Running:{} {}", CYAN, RESET, running);
    println!("{}• Soft-deleted:{} {}{}{}", CYAN, RESET, GREY, deleted, RESET);

    //
    // 3) TOTAL BANKED TIME
    //
    // Stored elapsed only; in-progress runs are not included here.
    let banked: Option<i64> = pool
        .conn
        .query_row(
            "SELECT SUM(elapsed) FROM stopwatches WHERE deleted_at IS NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    println!(
        "{}• Total banked time:{} {}",
        CYAN,
        RESET,
        format_seconds(banked.unwrap_or(0))
    );

    println!();
    Ok(())
}
