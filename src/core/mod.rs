pub mod backup;
pub mod config;
pub mod entry;
pub mod log;
pub mod validator;
pub mod week;
