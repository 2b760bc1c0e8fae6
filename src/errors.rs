//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("No stopwatch found with id {0}")]
    NotFound(i64),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Concurrent update on stopwatch {0}, please retry")]
    Conflict(i64),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid stopwatch name: {0}")]
    InvalidName(String),

    #[error("Invalid elapsed value: {0}")]
    InvalidElapsed(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
