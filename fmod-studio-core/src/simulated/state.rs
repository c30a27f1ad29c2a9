use std::collections::HashMap;
use std::ffi::CString;

use crate::handles::raw::RawHandle;
use crate::models::guid::Guid;
use crate::models::modes::{EventCallbackType, LoadingState, PlaybackState};
use crate::models::result::FmodResult;
use crate::models::settings::{AdvancedSettings, CpuUsage};
use crate::models::spatial::{Attributes3d, Vector};
use crate::traits::studio_api::EventCallback;

use super::fixtures::{simulated_id, BankSpec, EventSpec};

pub(super) type SimResult<T> = Result<T, FmodResult>;

const FIRST_ADDRESS: usize = 0x1000;
const ADDRESS_STRIDE: usize = 0x10;

pub(super) struct SystemState {
    pub initialized: bool,
    pub advanced: AdvancedSettings,
    pub listener: Attributes3d,
    pub core: usize,
    pub banks: Vec<usize>,
    pub recording: Option<String>,
}

pub(super) struct BankState {
    pub system: usize,
    pub id: Guid,
    pub path: String,
    pub loading: LoadingState,
    pub sample_loading: LoadingState,
    pub events: Vec<usize>,
    /// Descriptions of sub events, not part of the public event list.
    pub hidden_events: Vec<usize>,
    pub strips: Vec<usize>,
}

pub(super) struct DescriptionState {
    pub id: Guid,
    pub spec: EventSpec,
    /// Parameter names kept alive for `RawParameterDescription::name`.
    pub parameter_names: Vec<CString>,
    pub sub_events: Vec<(String, usize)>,
    pub instances: Vec<usize>,
    pub callback: Option<EventCallback>,
}

pub(super) struct InstanceState {
    pub description: usize,
    pub volume: f32,
    pub pitch: f32,
    pub attributes: Attributes3d,
    pub paused: bool,
    pub playback: PlaybackState,
    pub timeline_position: i32,
    pub parameters: Vec<usize>,
    pub cues: Vec<usize>,
    pub channel_group: Option<usize>,
    pub callback: Option<EventCallback>,
    pub is_virtual: bool,
}

pub(super) struct ParameterState {
    pub description: usize,
    pub index: usize,
    pub value: f32,
}

pub(super) struct CueState {
    pub name: String,
    pub triggered: usize,
}

pub(super) struct StripState {
    pub bank: usize,
    pub id: Guid,
    pub path: String,
    pub fader_level: f32,
    pub paused: bool,
}

/// Everything the simulated backend knows, guarded by one lock.
pub(super) struct State {
    next_address: usize,
    pub systems: HashMap<usize, SystemState>,
    pub banks: HashMap<usize, BankState>,
    pub descriptions: HashMap<usize, DescriptionState>,
    pub instances: HashMap<usize, InstanceState>,
    pub parameters: HashMap<usize, ParameterState>,
    pub cues: HashMap<usize, CueState>,
    pub strips: HashMap<usize, StripState>,
    pub bank_files: HashMap<String, BankSpec>,
    pub bank_images: Vec<(Vec<u8>, BankSpec)>,
    pub calls: Vec<&'static str>,
    pub failures: HashMap<&'static str, FmodResult>,
    pub list_over_report: i32,
    pub cpu_usage: CpuUsage,
    pub pending_callbacks: Vec<(EventCallback, EventCallbackType)>,
}

impl State {
    pub fn new() -> Self {
        Self {
            next_address: FIRST_ADDRESS,
            systems: HashMap::new(),
            banks: HashMap::new(),
            descriptions: HashMap::new(),
            instances: HashMap::new(),
            parameters: HashMap::new(),
            cues: HashMap::new(),
            strips: HashMap::new(),
            bank_files: HashMap::new(),
            bank_images: Vec::new(),
            calls: Vec::new(),
            failures: HashMap::new(),
            list_over_report: 0,
            cpu_usage: CpuUsage {
                dsp_usage: 1.5,
                stream_usage: 0.25,
                geometry_usage: 0.0,
                update_usage: 0.5,
                studio_usage: 0.75,
            },
            pending_callbacks: Vec::new(),
        }
    }

    /// Record the call and consume an injected failure for it, if any.
    pub fn enter(&mut self, call: &'static str) -> SimResult<()> {
        self.calls.push(call);
        match self.failures.remove(call) {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    fn allocate(&mut self) -> usize {
        let address = self.next_address;
        self.next_address += ADDRESS_STRIDE;
        address
    }

    pub fn system(&self, handle: RawHandle) -> SimResult<&SystemState> {
        self.systems.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn system_mut(&mut self, handle: RawHandle) -> SimResult<&mut SystemState> {
        self.systems.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn initialized_system(&self, handle: RawHandle) -> SimResult<&SystemState> {
        let system = self.system(handle)?;
        if !system.initialized {
            return Err(FmodResult::StudioUninitialized);
        }
        Ok(system)
    }

    pub fn bank(&self, handle: RawHandle) -> SimResult<&BankState> {
        self.banks.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn bank_mut(&mut self, handle: RawHandle) -> SimResult<&mut BankState> {
        self.banks.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn description(&self, handle: RawHandle) -> SimResult<&DescriptionState> {
        self.descriptions.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn description_mut(&mut self, handle: RawHandle) -> SimResult<&mut DescriptionState> {
        self.descriptions
            .get_mut(&handle.addr())
            .ok_or(FmodResult::InvalidHandle)
    }

    pub fn instance(&self, handle: RawHandle) -> SimResult<&InstanceState> {
        self.instances.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn instance_mut(&mut self, handle: RawHandle) -> SimResult<&mut InstanceState> {
        self.instances.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn parameter(&self, handle: RawHandle) -> SimResult<&ParameterState> {
        self.parameters.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn parameter_mut(&mut self, handle: RawHandle) -> SimResult<&mut ParameterState> {
        self.parameters.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn cue_mut(&mut self, handle: RawHandle) -> SimResult<&mut CueState> {
        self.cues.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn strip(&self, handle: RawHandle) -> SimResult<&StripState> {
        self.strips.get(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn strip_mut(&mut self, handle: RawHandle) -> SimResult<&mut StripState> {
        self.strips.get_mut(&handle.addr()).ok_or(FmodResult::InvalidHandle)
    }

    pub fn create_system(&mut self) -> usize {
        let core = self.allocate();
        let address = self.allocate();
        self.systems.insert(
            address,
            SystemState {
                initialized: false,
                advanced: AdvancedSettings::new(0, 0),
                listener: Attributes3d::default(),
                core,
                banks: Vec::new(),
                recording: None,
            },
        );
        address
    }

    pub fn release_system(&mut self, system: usize) {
        self.unload_all(system);
        self.systems.remove(&system);
    }

    /// Banks of `system`, in load order.
    pub fn system_banks(&self, system: usize) -> impl Iterator<Item = (usize, &BankState)> {
        self.systems
            .get(&system)
            .into_iter()
            .flat_map(|s| s.banks.iter())
            .filter_map(move |address| self.banks.get(address).map(|bank| (*address, bank)))
    }

    pub fn find_description(&self, system: usize, id: &Guid) -> Option<usize> {
        self.system_banks(system)
            .flat_map(|(_, bank)| bank.events.iter().chain(bank.hidden_events.iter()))
            .copied()
            .find(|address| self.descriptions.get(address).is_some_and(|d| d.id == *id))
    }

    pub fn find_strip(&self, system: usize, id: &Guid) -> Option<usize> {
        self.system_banks(system)
            .flat_map(|(_, bank)| bank.strips.iter())
            .copied()
            .find(|address| self.strips.get(address).is_some_and(|s| s.id == *id))
    }

    pub fn find_bank(&self, system: usize, id: &Guid) -> Option<usize> {
        self.system_banks(system)
            .find(|(_, bank)| bank.id == *id)
            .map(|(address, _)| address)
    }

    /// Path of any loaded bank, event or strip with `id`.
    pub fn path_of(&self, system: usize, id: &Guid) -> Option<String> {
        if let Some(bank) = self.find_bank(system, id) {
            return self.banks.get(&bank).map(|b| b.path.clone());
        }
        if let Some(description) = self.find_description(system, id) {
            return self.descriptions.get(&description).map(|d| d.spec.path.clone());
        }
        self.find_strip(system, id)
            .and_then(|strip| self.strips.get(&strip))
            .map(|s| s.path.clone())
    }

    pub fn id_of(&self, system: usize, path: &str) -> Option<Guid> {
        let id = simulated_id(path);
        self.path_of(system, &id).map(|_| id)
    }

    pub fn load_bank(&mut self, system: usize, spec: &BankSpec, nonblocking: bool) -> SimResult<usize> {
        let already_loaded = self
            .system_banks(system)
            .any(|(_, bank)| bank.path == spec.path);
        if already_loaded {
            return Err(FmodResult::EventAlreadyLoaded);
        }

        let address = self.allocate();
        let mut events = Vec::with_capacity(spec.events.len());
        let mut hidden_events = Vec::new();
        for event in &spec.events {
            let (description, subs) = self.add_description(event)?;
            events.push(description);
            hidden_events.extend(subs);
        }
        let strips = spec
            .mixer_strips
            .iter()
            .map(|path| {
                let strip = self.allocate();
                self.strips.insert(
                    strip,
                    StripState {
                        bank: address,
                        id: simulated_id(path),
                        path: path.clone(),
                        fader_level: 1.0,
                        paused: false,
                    },
                );
                strip
            })
            .collect();

        self.banks.insert(
            address,
            BankState {
                system,
                id: simulated_id(&spec.path),
                path: spec.path.clone(),
                loading: if nonblocking {
                    LoadingState::Loading
                } else {
                    LoadingState::Loaded
                },
                sample_loading: LoadingState::Unloaded,
                events,
                hidden_events,
                strips,
            },
        );
        if let Some(owner) = self.systems.get_mut(&system) {
            owner.banks.push(address);
        }
        Ok(address)
    }

    /// Register a description and its sub events; returns the description
    /// address and the addresses of the sub event descriptions.
    fn add_description(&mut self, spec: &EventSpec) -> SimResult<(usize, Vec<usize>)> {
        let mut sub_events = Vec::with_capacity(spec.sub_events.len());
        let mut hidden = Vec::new();
        for name in &spec.sub_events {
            let (sub, nested) = self.add_description(&spec.sub_event_spec(name))?;
            sub_events.push((name.clone(), sub));
            hidden.push(sub);
            hidden.extend(nested);
        }

        let parameter_names = spec
            .parameters
            .iter()
            .map(|p| CString::new(p.name.as_str()).map_err(|_| FmodResult::InvalidString))
            .collect::<SimResult<Vec<_>>>()?;

        let address = self.allocate();
        self.descriptions.insert(
            address,
            DescriptionState {
                id: simulated_id(&spec.path),
                spec: spec.clone(),
                parameter_names,
                sub_events,
                instances: Vec::new(),
                callback: None,
            },
        );
        Ok((address, hidden))
    }

    pub fn unload_bank(&mut self, bank: usize) {
        let Some(state) = self.banks.remove(&bank) else {
            return;
        };
        for description in state.events.iter().chain(state.hidden_events.iter()) {
            self.release_all_instances(*description);
            self.descriptions.remove(description);
        }
        for strip in &state.strips {
            self.strips.remove(strip);
        }
        if let Some(system) = self.systems.get_mut(&state.system) {
            system.banks.retain(|b| *b != bank);
        }
    }

    pub fn unload_all(&mut self, system: usize) {
        let banks = self
            .systems
            .get(&system)
            .map(|s| s.banks.clone())
            .unwrap_or_default();
        for bank in banks {
            self.unload_bank(bank);
        }
    }

    pub fn create_instance(&mut self, description: usize) -> SimResult<usize> {
        let parameter_count = self
            .descriptions
            .get(&description)
            .ok_or(FmodResult::InvalidHandle)?
            .spec
            .parameters
            .len();
        let cue_names = self
            .descriptions
            .get(&description)
            .map(|d| d.spec.cues.clone())
            .unwrap_or_default();
        let minimums: Vec<f32> = self
            .descriptions
            .get(&description)
            .map(|d| d.spec.parameters.iter().map(|p| p.minimum).collect())
            .unwrap_or_default();

        let parameters = (0..parameter_count)
            .map(|index| {
                let address = self.allocate();
                self.parameters.insert(
                    address,
                    ParameterState {
                        description,
                        index,
                        value: minimums[index],
                    },
                );
                address
            })
            .collect();
        let cues = cue_names
            .into_iter()
            .map(|name| {
                let address = self.allocate();
                self.cues.insert(address, CueState { name, triggered: 0 });
                address
            })
            .collect();

        let address = self.allocate();
        self.instances.insert(
            address,
            InstanceState {
                description,
                volume: 1.0,
                pitch: 1.0,
                attributes: Attributes3d::default(),
                paused: false,
                playback: PlaybackState::Stopped,
                timeline_position: 0,
                parameters,
                cues,
                channel_group: None,
                callback: None,
                is_virtual: false,
            },
        );
        if let Some(owner) = self.descriptions.get_mut(&description) {
            owner.instances.push(address);
        }
        Ok(address)
    }

    pub fn release_instance(&mut self, instance: usize) {
        let Some(state) = self.instances.remove(&instance) else {
            return;
        };
        for parameter in &state.parameters {
            self.parameters.remove(parameter);
        }
        for cue in &state.cues {
            self.cues.remove(cue);
        }
        if let Some(owner) = self.descriptions.get_mut(&state.description) {
            owner.instances.retain(|i| *i != instance);
        }
    }

    pub fn release_all_instances(&mut self, description: usize) {
        let instances = self
            .descriptions
            .get(&description)
            .map(|d| d.instances.clone())
            .unwrap_or_default();
        for instance in instances {
            self.release_instance(instance);
        }
    }

    pub fn channel_group(&mut self, instance: usize) -> SimResult<usize> {
        if let Some(group) = self.instances.get(&instance).and_then(|i| i.channel_group) {
            return Ok(group);
        }
        let group = self.allocate();
        let state = self.instances.get_mut(&instance).ok_or(FmodResult::InvalidHandle)?;
        state.channel_group = Some(group);
        Ok(group)
    }

    /// Change playback state and queue the matching callback.
    pub fn transition(&mut self, instance: usize, playback: PlaybackState, kind: EventCallbackType) -> SimResult<()> {
        let state = self.instances.get_mut(&instance).ok_or(FmodResult::InvalidHandle)?;
        state.playback = playback;
        let own = state.callback;
        let description = state.description;
        let callback = own.or_else(|| {
            self.descriptions
                .get(&description)
                .and_then(|d| d.callback)
        });
        if let Some(callback) = callback {
            self.pending_callbacks.push((callback, kind));
        }
        Ok(())
    }

    /// Instances of every event in `bank`.
    pub fn bank_instances(&self, bank: usize) -> Vec<usize> {
        self.banks
            .get(&bank)
            .into_iter()
            .flat_map(|b| b.events.iter().chain(b.hidden_events.iter()))
            .filter_map(|d| self.descriptions.get(d))
            .flat_map(|d| d.instances.iter().copied())
            .collect()
    }

    pub fn finish_loading(&mut self, system: usize) {
        let banks = self
            .systems
            .get(&system)
            .map(|s| s.banks.clone())
            .unwrap_or_default();
        for bank in banks {
            if let Some(state) = self.banks.get_mut(&bank) {
                if state.loading == LoadingState::Loading {
                    state.loading = LoadingState::Loaded;
                }
            }
        }
    }

    /// Write `items` into `array` the way native list calls do, adding the
    /// configured over-report to the count.
    pub fn write_list(&self, items: &[usize], array: &mut [RawHandle], count: &mut i32) {
        let written = items.len().min(array.len());
        for (slot, address) in array.iter_mut().zip(items) {
            *slot = RawHandle::from_addr(*address);
        }
        *count = i32::try_from(written).unwrap_or(i32::MAX) + self.list_over_report;
    }
}

/// Copy `text` with a terminator into `buffer`, reporting the full size in
/// `retrieved`. Truncates and fails with `Truncated` when it does not fit.
pub(super) fn write_string(text: &str, buffer: &mut [u8], retrieved: &mut i32) -> SimResult<()> {
    let bytes = text.as_bytes();
    *retrieved = i32::try_from(bytes.len() + 1).map_err(|_| FmodResult::InvalidParam)?;
    let Some(room) = buffer.len().checked_sub(1) else {
        return Err(FmodResult::Truncated);
    };
    let written = bytes.len().min(room);
    buffer[..written].copy_from_slice(&bytes[..written]);
    buffer[written] = 0;
    if written < bytes.len() {
        return Err(FmodResult::Truncated);
    }
    Ok(())
}

pub(super) fn count_of(items: &[usize]) -> i32 {
    i32::try_from(items.len()).unwrap_or(i32::MAX)
}

pub(super) fn index_into<T: Copy>(items: &[T], index: i32) -> SimResult<T> {
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i).copied())
        .ok_or(FmodResult::InvalidParam)
}

/// Orientation vectors must be unit length and perpendicular.
pub(super) fn check_orientation(attributes: &Attributes3d) -> SimResult<()> {
    const TOLERANCE: f32 = 1e-3;
    let dot = |a: &Vector, b: &Vector| a.x * b.x + a.y * b.y + a.z * b.z;
    let unit = |v: &Vector| (dot(v, v) - 1.0).abs() < TOLERANCE;
    if unit(&attributes.forward)
        && unit(&attributes.up)
        && dot(&attributes.forward, &attributes.up).abs() < TOLERANCE
    {
        Ok(())
    } else {
        Err(FmodResult::InvalidVector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_string_fits() {
        let mut buffer = [0xffu8; 8];
        let mut retrieved = 0;
        write_string("bus:/", &mut buffer, &mut retrieved).unwrap();
        assert_eq!(retrieved, 6);
        assert_eq!(&buffer[..6], b"bus:/\0");
    }

    #[test]
    fn write_string_truncates_like_native() {
        let mut buffer = [0xffu8; 4];
        let mut retrieved = 0;
        assert_eq!(
            write_string("event:/UI", &mut buffer, &mut retrieved),
            Err(FmodResult::Truncated)
        );
        assert_eq!(retrieved, 10);
        assert_eq!(&buffer, b"eve\0");
    }

    #[test]
    fn addresses_are_distinct() {
        let mut state = State::new();
        let a = state.create_system();
        let b = state.create_system();
        assert_ne!(a, b);
        assert!(a >= FIRST_ADDRESS);
    }

    #[test]
    fn orientation_is_validated() {
        assert!(check_orientation(&Attributes3d::default()).is_ok());
        let mut skewed = Attributes3d::default();
        skewed.up = skewed.forward;
        assert_eq!(check_orientation(&skewed), Err(FmodResult::InvalidVector));
    }

    #[test]
    fn index_bounds() {
        assert_eq!(index_into(&[7usize, 8], 1), Ok(8));
        assert_eq!(index_into(&[7usize], -1), Err(FmodResult::InvalidParam));
        assert_eq!(index_into(&[7usize], 1), Err(FmodResult::InvalidParam));
    }
}
