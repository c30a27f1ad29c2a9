use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::guid::Guid;
use crate::models::modes::ParameterType;
use crate::models::parameter::ParameterDescription;

/// Id the simulated backend assigns to the object at `path`.
///
/// Derived from a SHA-256 of the path, so the same path always maps to the
/// same id and tests can compute ids without a lookup.
pub fn simulated_id(path: &str) -> Guid {
    let digest = Sha256::digest(path.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Guid::from(Uuid::from_bytes(bytes))
}

/// Contents of a bank the simulated backend can load.
#[derive(Debug, Clone, PartialEq)]
pub struct BankSpec {
    pub path: String,
    pub events: Vec<EventSpec>,
    pub mixer_strips: Vec<String>,
}

impl BankSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            events: Vec::new(),
            mixer_strips: Vec::new(),
        }
    }

    pub fn event(mut self, event: EventSpec) -> Self {
        self.events.push(event);
        self
    }

    pub fn mixer_strip(mut self, path: impl Into<String>) -> Self {
        self.mixer_strips.push(path.into());
        self
    }
}

/// Static description of a simulated event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSpec {
    pub path: String,
    pub length_ms: i32,
    pub oneshot: bool,
    pub stream: bool,
    pub is_3d: bool,
    pub minimum_distance: f32,
    pub maximum_distance: f32,
    pub user_property_count: i32,
    pub parameters: Vec<ParameterDescription>,
    pub cues: Vec<String>,
    /// Names of nested events, reachable as `<path>/<name>`.
    pub sub_events: Vec<String>,
}

impl EventSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            length_ms: 0,
            oneshot: false,
            stream: false,
            is_3d: false,
            minimum_distance: 0.0,
            maximum_distance: 0.0,
            user_property_count: 0,
            parameters: Vec::new(),
            cues: Vec::new(),
            sub_events: Vec::new(),
        }
    }

    pub fn length(mut self, length_ms: i32) -> Self {
        self.length_ms = length_ms;
        self
    }

    pub fn oneshot(mut self, oneshot: bool) -> Self {
        self.oneshot = oneshot;
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Make the event 3D with the given attenuation range.
    pub fn spatial(mut self, minimum_distance: f32, maximum_distance: f32) -> Self {
        self.is_3d = true;
        self.minimum_distance = minimum_distance;
        self.maximum_distance = maximum_distance;
        self
    }

    pub fn user_properties(mut self, count: i32) -> Self {
        self.user_property_count = count;
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, minimum: f32, maximum: f32, kind: ParameterType) -> Self {
        self.parameters.push(ParameterDescription {
            name: name.into(),
            minimum,
            maximum,
            kind,
        });
        self
    }

    pub fn cue(mut self, name: impl Into<String>) -> Self {
        self.cues.push(name.into());
        self
    }

    pub fn sub_event(mut self, name: impl Into<String>) -> Self {
        self.sub_events.push(name.into());
        self
    }

    pub(crate) fn sub_event_spec(&self, name: &str) -> EventSpec {
        EventSpec {
            path: format!("{}/{}", self.path, name),
            is_3d: self.is_3d,
            minimum_distance: self.minimum_distance,
            maximum_distance: self.maximum_distance,
            ..EventSpec::new("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_per_path() {
        assert_eq!(simulated_id("event:/UI/Click"), simulated_id("event:/UI/Click"));
        assert_ne!(simulated_id("event:/UI/Click"), simulated_id("event:/UI/Back"));
        assert!(!simulated_id("bus:/").is_nil());
    }

    #[test]
    fn sub_event_inherits_spatial_settings() {
        let parent = EventSpec::new("event:/Ambience/Forest").spatial(2.0, 30.0).sub_event("Birds");
        let child = parent.sub_event_spec("Birds");
        assert_eq!(child.path, "event:/Ambience/Forest/Birds");
        assert!(child.is_3d);
        assert!(child.sub_events.is_empty());
    }
}
