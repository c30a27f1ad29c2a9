pub mod bank_file;
pub mod config_file;
pub mod snapshot;
