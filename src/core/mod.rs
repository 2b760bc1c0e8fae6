pub mod backup;
pub mod clock;
pub mod engine;
pub mod log;
