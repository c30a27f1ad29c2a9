pub mod config;
pub mod error;
pub mod flags;
pub mod guid;
pub mod modes;
pub mod parameter;
pub mod result;
pub mod settings;
pub mod snapshot;
pub mod spatial;
