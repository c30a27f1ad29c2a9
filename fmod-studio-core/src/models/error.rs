use std::path::PathBuf;

use thiserror::Error;

use super::result::FmodResult;

/// Errors returned by the studio bindings.
///
/// Native failures are carried verbatim in `Native`; every other variant is a
/// condition detected on the Rust side before or after the native call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error("{call} failed: {code}")]
    Native {
        call: &'static str,
        code: FmodResult,
    },

    #[error("string argument cannot cross the native boundary: {0}")]
    InvalidString(String),

    #[error("native side returned unknown {kind} value {value}")]
    UnexpectedValue { kind: &'static str, value: i32 },

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("configuration failed: {0}")]
    Configuration(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("checksum mismatch for {}: expected {expected}, found {actual}", path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

impl StudioError {
    /// The native status code, if this error came from the native side.
    pub fn code(&self) -> Option<FmodResult> {
        match self {
            Self::Native { code, .. } => Some(*code),
            _ => None,
        }
    }
}
