use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::flags::{CoreInitFlags, InitFlags, LoadBankFlags};
use super::settings::AdvancedSettings;

/// Header version passed to `FMOD_Studio_System_Create`.
///
/// Must match the version of the library being linked; the native side
/// returns `HeaderMismatch` otherwise.
pub const DEFAULT_HEADER_VERSION: u32 = 0x0001_0400;

/// A bank to load when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSource {
    /// Bank file on disk.
    pub path: PathBuf,

    /// Expected lowercase hex SHA-256 of the file. When set, the file is read
    /// and verified on the Rust side, then loaded from memory.
    #[serde(default)]
    pub sha256: Option<String>,

    /// Load all sample data right after the bank loads.
    #[serde(default)]
    pub load_sample_data: bool,
}

impl BankSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sha256: None,
            load_sample_data: false,
        }
    }
}

/// Configuration for a studio session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfiguration {
    /// Header version handed to system creation (default: 0x00010400).
    pub header_version: u32,

    /// Maximum number of low level channels (default: 512).
    pub max_channels: i32,

    /// Studio initialization flags (default: NORMAL).
    pub studio_flags: InitFlags,

    /// Low level initialization flags (default: NORMAL).
    pub core_flags: CoreInitFlags,

    /// Studio async command queue size in bytes, 0 for the native default.
    pub command_queue_size: i32,

    /// Initial handle table size, 0 for the native default.
    pub handle_initial_size: i32,

    /// Flags used for every configured bank.
    pub load_bank_flags: LoadBankFlags,

    /// Banks loaded at startup, in order.
    pub banks: Vec<BankSource>,
}

impl StudioConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_channels <= 0 {
            return Err(format!("max channels must be positive: {}", self.max_channels));
        }
        if self.command_queue_size < 0 {
            return Err(format!(
                "command queue size cannot be negative: {}",
                self.command_queue_size
            ));
        }
        if self.handle_initial_size < 0 {
            return Err(format!(
                "handle initial size cannot be negative: {}",
                self.handle_initial_size
            ));
        }
        for bank in &self.banks {
            if bank.path.as_os_str().is_empty() {
                return Err("bank path cannot be empty".into());
            }
            if let Some(digest) = &bank.sha256 {
                if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(format!(
                        "sha256 for {} is not a 64 digit hex string",
                        bank.path.display()
                    ));
                }
            }
        }
        Ok(())
    }

    /// Advanced settings to apply before initialization, if any were configured.
    pub fn advanced_settings(&self) -> Option<AdvancedSettings> {
        if self.command_queue_size == 0 && self.handle_initial_size == 0 {
            return None;
        }
        Some(AdvancedSettings::new(
            self.command_queue_size,
            self.handle_initial_size,
        ))
    }
}

impl Default for StudioConfiguration {
    fn default() -> Self {
        Self {
            header_version: DEFAULT_HEADER_VERSION,
            max_channels: 512,
            studio_flags: InitFlags::NORMAL,
            core_flags: CoreInitFlags::NORMAL,
            command_queue_size: 0,
            handle_initial_size: 0,
            load_bank_flags: LoadBankFlags::NORMAL,
            banks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = StudioConfiguration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.header_version, DEFAULT_HEADER_VERSION);
        assert!(config.advanced_settings().is_none());
    }

    #[test]
    fn rejects_non_positive_channels() {
        let config = StudioConfiguration {
            max_channels: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("max channels"));
    }

    #[test]
    fn rejects_negative_sizes() {
        let config = StudioConfiguration {
            command_queue_size: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_digest() {
        let mut bank = BankSource::new("Master.bank");
        bank.sha256 = Some("abc".into());
        let config = StudioConfiguration {
            banks: vec![bank],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("sha256"));
    }

    #[test]
    fn advanced_settings_only_when_sized() {
        let config = StudioConfiguration {
            command_queue_size: 16384,
            ..Default::default()
        };
        let settings = config.advanced_settings().unwrap();
        assert_eq!(settings.command_queue_size, 16384);
        assert_eq!(settings.handle_initial_size, 0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: StudioConfiguration = serde_json::from_str(
            r#"{ "max_channels": 64, "studio_flags": 1, "banks": [{ "path": "Master.bank" }] }"#,
        )
        .unwrap();
        assert_eq!(config.max_channels, 64);
        assert_eq!(config.studio_flags, InitFlags::LIVEUPDATE);
        assert_eq!(config.header_version, DEFAULT_HEADER_VERSION);
        assert_eq!(config.banks, vec![BankSource::new("Master.bank")]);
    }
}
