use std::fs;
use std::path::Path;

use crate::models::config::StudioConfiguration;
use crate::models::error::StudioError;

/// Write a studio configuration as pretty-printed JSON.
pub fn write_configuration(config: &StudioConfiguration, path: &Path) -> Result<(), StudioError> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| StudioError::Storage(format!("failed to serialize configuration: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| StudioError::Storage(format!("failed to write configuration: {}", e)))?;
    Ok(())
}

/// Read a studio configuration and validate it.
///
/// Relative bank paths are resolved against the directory holding the
/// configuration file.
pub fn read_configuration(path: &Path) -> Result<StudioConfiguration, StudioError> {
    let json = fs::read_to_string(path)
        .map_err(|e| StudioError::Storage(format!("failed to read configuration: {}", e)))?;
    let mut config: StudioConfiguration = serde_json::from_str(&json)
        .map_err(|e| StudioError::Storage(format!("failed to parse configuration: {}", e)))?;
    config.validate().map_err(StudioError::Configuration)?;

    if let Some(base) = path.parent() {
        for bank in &mut config.banks {
            if bank.path.is_relative() {
                bank.path = base.join(&bank.path);
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::BankSource;
    use crate::models::flags::InitFlags;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.json");
        let mut config = StudioConfiguration {
            max_channels: 128,
            studio_flags: InitFlags::LIVEUPDATE | InitFlags::SYNCHRONOUS_UPDATE,
            ..Default::default()
        };
        config.banks.push(BankSource::new(dir.path().join("Master.bank")));

        write_configuration(&config, &path).unwrap();
        let read = read_configuration(&path).unwrap();
        assert_eq!(read, config);
    }

    #[test]
    fn relative_bank_paths_follow_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.json");
        fs::write(&path, r#"{ "banks": [ { "path": "banks/Master.bank" } ] }"#).unwrap();

        let config = read_configuration(&path).unwrap();
        assert_eq!(config.max_channels, 512);
        assert_eq!(config.banks[0].path, dir.path().join("banks/Master.bank"));
        assert!(!config.banks[0].load_sample_data);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.json");
        fs::write(&path, r#"{ "max_channels": 0 }"#).unwrap();
        assert!(matches!(
            read_configuration(&path),
            Err(StudioError::Configuration(_))
        ));
    }

    #[test]
    fn unreadable_files_are_storage_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(read_configuration(&missing), Err(StudioError::Storage(_))));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json").unwrap();
        assert!(matches!(read_configuration(&garbage), Err(StudioError::Storage(_))));
    }
}
