pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod sqlite;
pub mod stats;
pub mod store;
