pub mod backup;
pub mod config;
pub mod export;
pub mod fields;
pub mod init;
pub mod log;
pub mod save;
pub mod show;
pub mod status;
pub mod today;
pub mod week;
