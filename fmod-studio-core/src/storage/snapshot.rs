use std::fs;
use std::path::Path;

use crate::models::error::StudioError;
use crate::models::snapshot::SystemSnapshot;

/// Write a system snapshot as pretty-printed JSON.
pub fn write_snapshot(snapshot: &SystemSnapshot, path: &Path) -> Result<(), StudioError> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| StudioError::Storage(format!("failed to serialize snapshot: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| StudioError::Storage(format!("failed to write snapshot: {}", e)))?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<SystemSnapshot, StudioError> {
    let json = fs::read_to_string(path)
        .map_err(|e| StudioError::Storage(format!("failed to read snapshot: {}", e)))?;
    let snapshot: SystemSnapshot = serde_json::from_str(&json)
        .map_err(|e| StudioError::Storage(format!("failed to parse snapshot: {}", e)))?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::modes::LoadingState;
    use crate::models::settings::CpuUsage;
    use crate::models::snapshot::{BankSummary, MixerStripSummary};
    use crate::simulated::simulated_id;

    #[test]
    fn snapshot_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        let mut snapshot = SystemSnapshot::new(CpuUsage::default());
        snapshot.banks.push(BankSummary {
            id: simulated_id("bank:/Master"),
            path: "bank:/Master".into(),
            loading_state: LoadingState::Loaded,
            sample_loading_state: LoadingState::Unloaded,
            events: Vec::new(),
            mixer_strips: vec![MixerStripSummary {
                id: simulated_id("bus:/SFX"),
                path: "bus:/SFX".into(),
                fader_level: 0.5,
                paused: false,
            }],
        });

        write_snapshot(&snapshot, &path).unwrap();
        assert_eq!(read_snapshot(&path).unwrap(), snapshot);

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"bank:/Master\""));
    }

    #[test]
    fn missing_snapshot_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_snapshot(&dir.path().join("none.json")),
            Err(StudioError::Storage(_))
        ));
    }
}
