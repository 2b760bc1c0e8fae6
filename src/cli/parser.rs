use clap::{Parser, Subcommand};

/// Command-line interface definition for rStopwatch
/// CLI application to manage named stopwatches with SQLite
#[derive(Parser)]
#[command(
    name = "rstopwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple stopwatch CLI: create, start, stop and track named stopwatches using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Create a new stopwatch (stopped, zero elapsed time)
    Add {
        /// Label for the new stopwatch
        name: String,
    },

    /// List stopwatches with live elapsed time
    List {
        #[arg(long, help = "Print the list as JSON instead of a table")]
        json: bool,
    },

    /// Start a stopwatch
    Start {
        /// Stopwatch id
        id: i64,
    },

    /// Stop a running stopwatch and bank its elapsed time
    Stop {
        /// Stopwatch id
        id: i64,
    },

    /// Edit a stopwatch (rename and/or override banked elapsed seconds)
    Edit {
        /// Stopwatch id
        id: i64,

        #[arg(long, help = "New label")]
        name: Option<String>,

        #[arg(
            long,
            help = "Override banked elapsed seconds (rejected while running)"
        )]
        elapsed: Option<i64>,
    },

    /// Delete a stopped stopwatch (soft delete, recoverable in the DB)
    Del {
        /// Stopwatch id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination if it exists")]
        force: bool,
    },
}
