pub mod add;
pub mod backup;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod start;
pub mod stop;
