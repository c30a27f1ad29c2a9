use serde::{Deserialize, Serialize};

use super::guid::Guid;
use super::modes::LoadingState;
use super::parameter::ParameterDescription;
use super::settings::CpuUsage;

/// Point-in-time inventory of what a studio system has loaded.
///
/// Serializable for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub captured_at: String,
    pub cpu_usage: CpuUsage,
    pub banks: Vec<BankSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: Guid,
    pub path: String,
    pub loading_state: LoadingState,
    pub sample_loading_state: LoadingState,
    pub events: Vec<EventSummary>,
    pub mixer_strips: Vec<MixerStripSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: Guid,
    pub path: String,
    pub length_ms: i32,
    pub is_oneshot: bool,
    pub is_stream: bool,
    pub is_3d: bool,
    pub instance_count: i32,
    pub parameters: Vec<ParameterDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixerStripSummary {
    pub id: Guid,
    pub path: String,
    pub fader_level: f32,
    pub paused: bool,
}

impl SystemSnapshot {
    /// Creates an empty snapshot stamped with the current UTC time.
    pub fn new(cpu_usage: CpuUsage) -> Self {
        Self {
            captured_at: chrono::Utc::now().to_rfc3339(),
            cpu_usage,
            banks: Vec::new(),
        }
    }

    pub fn event_count(&self) -> usize {
        self.banks.iter().map(|b| b.events.len()).sum()
    }

    /// Finds an event by its full path (`event:/...`).
    pub fn find_event(&self, path: &str) -> Option<&EventSummary> {
        self.banks
            .iter()
            .flat_map(|b| b.events.iter())
            .find(|e| e.path == path)
    }
}
