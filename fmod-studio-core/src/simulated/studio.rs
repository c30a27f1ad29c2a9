use std::ffi::{c_void, CStr};
use std::ptr;
use std::str::FromStr;

use parking_lot::Mutex;

use crate::handles::raw::RawHandle;
use crate::models::flags::{CoreInitFlags, InitFlags, LoadBankFlags, RecordCommandsFlags};
use crate::models::guid::Guid;
use crate::models::modes::{EventCallbackType, LoadMemoryMode, LoadingMode, LoadingState, PlaybackState, StopMode};
use crate::models::parameter::RawParameterDescription;
use crate::models::result::FmodResult;
use crate::models::settings::{AdvancedSettings, CpuUsage};
use crate::models::spatial::Attributes3d;
use crate::traits::entry_points as ep;
use crate::traits::studio_api::{EventCallback, StudioApi};

use super::fixtures::BankSpec;
use super::state::{check_orientation, count_of, index_into, write_string, SimResult, State};

/// In-memory stand-in for the native studio library.
///
/// Models systems, banks, event descriptions and instances, parameters, cues
/// and mixer strips closely enough to exercise the bindings without linking
/// libfmodstudio:
/// - bank contents are registered up front with [`SimulatedStudio::add_bank_file`]
///   or [`SimulatedStudio::add_bank_memory`]
/// - string outputs truncate and report `Truncated` exactly like the native side
/// - every entry point is recorded, see [`SimulatedStudio::calls`]
/// - [`SimulatedStudio::fail_next`] makes the next call to an entry point fail
/// - [`SimulatedStudio::over_report_lists`] makes list calls report more
///   entries than fit
/// - event callbacks are queued and run from `system_update`, outside the lock
///
/// Released or unloaded objects answer `InvalidHandle`.
pub struct SimulatedStudio {
    state: Mutex<State>,
}

impl Default for SimulatedStudio {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedStudio {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::new()),
        }
    }

    /// Make `filename` loadable with `FMOD_Studio_System_LoadBankFile`.
    pub fn add_bank_file(&self, filename: impl Into<String>, bank: BankSpec) {
        self.state.lock().bank_files.insert(filename.into(), bank);
    }

    /// Make a buffer with exactly these bytes loadable from memory.
    pub fn add_bank_memory(&self, bytes: Vec<u8>, bank: BankSpec) {
        self.state.lock().bank_images.push((bytes, bank));
    }

    /// Entry points called so far, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Fail the next call to `call` with `code`, without side effects.
    pub fn fail_next(&self, call: &'static str, code: FmodResult) {
        self.state.lock().failures.insert(call, code);
    }

    /// Add `extra` to the count every list entry point reports.
    pub fn over_report_lists(&self, extra: i32) {
        self.state.lock().list_over_report = extra;
    }

    pub fn set_cpu_usage(&self, usage: CpuUsage) {
        self.state.lock().cpu_usage = usage;
    }

    /// Mark an event instance as virtualized by the voice limiter.
    pub fn set_virtual(&self, instance: RawHandle, is_virtual: bool) {
        if let Some(state) = self.state.lock().instances.get_mut(&instance.addr()) {
            state.is_virtual = is_virtual;
        }
    }

    /// How often the cue behind `cue` was triggered; 0 for unknown handles.
    pub fn cue_trigger_count(&self, cue: RawHandle) -> usize {
        self.state
            .lock()
            .cues
            .get(&cue.addr())
            .map_or(0, |c| c.triggered)
    }

    /// Run `op` against the state as entry point `call`.
    fn with<F>(&self, call: &'static str, op: F) -> FmodResult
    where
        F: FnOnce(&mut State) -> SimResult<()>,
    {
        let mut state = self.state.lock();
        match state.enter(call).and_then(|()| op(&mut *state)) {
            Ok(()) => FmodResult::Ok,
            Err(code) => code,
        }
    }

    fn load_bank(&self, call: &'static str, system: RawHandle, spec: Option<BankSpec>, missing: FmodResult, flags: LoadBankFlags, bank: &mut RawHandle) -> FmodResult {
        self.with(call, |s| {
            s.initialized_system(system)?;
            let spec = spec.ok_or(missing)?;
            let address = s.load_bank(system.addr(), &spec, flags.contains(LoadBankFlags::NONBLOCKING))?;
            *bank = RawHandle::from_addr(address);
            Ok(())
        })
    }

    fn parameter_description(state: &State, description: usize, index: usize, out: &mut RawParameterDescription) -> SimResult<()> {
        let owner = state.descriptions.get(&description).ok_or(FmodResult::InvalidHandle)?;
        let spec = owner.spec.parameters.get(index).ok_or(FmodResult::InvalidParam)?;
        let name = owner.parameter_names.get(index).ok_or(FmodResult::Internal)?;
        *out = RawParameterDescription {
            name: name.as_ptr(),
            minimum: spec.minimum,
            maximum: spec.maximum,
            kind: spec.kind.raw(),
        };
        Ok(())
    }
}

fn lookup_name(names: &[String], name: &CStr) -> SimResult<usize> {
    let name = name.to_str().map_err(|_| FmodResult::InvalidString)?;
    names
        .iter()
        .position(|n| n == name)
        .ok_or(FmodResult::EventNotFound)
}

/// Address of the parameter called `name` on `instance`.
fn instance_parameter(state: &State, instance: RawHandle, name: &CStr) -> SimResult<usize> {
    let owner = state.instance(instance)?;
    let names: Vec<String> = state
        .description(RawHandle::from_addr(owner.description))?
        .spec
        .parameters
        .iter()
        .map(|p| p.name.clone())
        .collect();
    let index = lookup_name(&names, name)?;
    owner.parameters.get(index).copied().ok_or(FmodResult::Internal)
}

fn loading_mode(mode: i32) -> SimResult<LoadingMode> {
    LoadingMode::try_from(mode).map_err(|_| FmodResult::InvalidParam)
}

impl StudioApi for SimulatedStudio {
    fn system_create(&self, system: &mut RawHandle, header_version: u32) -> FmodResult {
        self.with(ep::SYSTEM_CREATE, |s| {
            if header_version != crate::models::config::DEFAULT_HEADER_VERSION {
                return Err(FmodResult::HeaderMismatch);
            }
            *system = RawHandle::from_addr(s.create_system());
            Ok(())
        })
    }

    fn parse_id(&self, id_string: &CStr, id: &mut Guid) -> FmodResult {
        self.with(ep::PARSE_ID, |_| {
            let text = id_string.to_str().map_err(|_| FmodResult::InvalidParam)?;
            *id = Guid::from_str(text).map_err(|_| FmodResult::InvalidParam)?;
            Ok(())
        })
    }

    fn system_set_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult {
        self.with(ep::SYSTEM_SET_ADVANCED_SETTINGS, |s| {
            let state = s.system_mut(system)?;
            if state.initialized {
                return Err(FmodResult::Initialized);
            }
            if settings.cb_size != AdvancedSettings::SIZE
                || settings.command_queue_size < 0
                || settings.handle_initial_size < 0
            {
                return Err(FmodResult::InvalidParam);
            }
            state.advanced = *settings;
            Ok(())
        })
    }

    fn system_get_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult {
        self.with(ep::SYSTEM_GET_ADVANCED_SETTINGS, |s| {
            if settings.cb_size != AdvancedSettings::SIZE {
                return Err(FmodResult::InvalidParam);
            }
            *settings = s.system(system)?.advanced;
            Ok(())
        })
    }

    fn system_initialize(
        &self,
        system: RawHandle,
        max_channels: i32,
        _studio_flags: InitFlags,
        _flags: CoreInitFlags,
        _extra_driver_data: *mut c_void,
    ) -> FmodResult {
        self.with(ep::SYSTEM_INITIALIZE, |s| {
            let state = s.system_mut(system)?;
            if state.initialized {
                return Err(FmodResult::Initialized);
            }
            if max_channels <= 0 {
                return Err(FmodResult::InvalidParam);
            }
            state.initialized = true;
            Ok(())
        })
    }

    fn system_release(&self, system: RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_RELEASE, |s| {
            s.system(system)?;
            s.release_system(system.addr());
            Ok(())
        })
    }

    fn system_update(&self, system: RawHandle) -> FmodResult {
        let pending = {
            let mut state = self.state.lock();
            let status = state.enter(ep::SYSTEM_UPDATE).and_then(|()| {
                state.initialized_system(system)?;
                state.finish_loading(system.addr());
                Ok(())
            });
            if let Err(code) = status {
                return code;
            }
            std::mem::take(&mut state.pending_callbacks)
        };

        for (callback, kind) in pending {
            // SAFETY: the callback was installed through set_callback, whose
            // caller vouched for it; start/stop/idle carry no parameters.
            let status = unsafe { callback(kind.raw(), ptr::null_mut()) };
            if !FmodResult::from_raw(status).is_ok() {
                log::debug!("event callback for {:?} returned {}", kind, FmodResult::from_raw(status));
            }
        }
        FmodResult::Ok
    }

    fn system_get_low_level_system(&self, system: RawHandle, low_level: &mut RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_GET_LOW_LEVEL_SYSTEM, |s| {
            *low_level = RawHandle::from_addr(s.system(system)?.core);
            Ok(())
        })
    }

    fn system_get_event(&self, system: RawHandle, id: &Guid, mode: i32, description: &mut RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_GET_EVENT, |s| {
            loading_mode(mode)?;
            s.initialized_system(system)?;
            let address = s.find_description(system.addr(), id).ok_or(FmodResult::EventNotFound)?;
            *description = RawHandle::from_addr(address);
            Ok(())
        })
    }

    fn system_get_mixer_strip(&self, system: RawHandle, id: &Guid, mode: i32, strip: &mut RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_GET_MIXER_STRIP, |s| {
            loading_mode(mode)?;
            s.initialized_system(system)?;
            let address = s.find_strip(system.addr(), id).ok_or(FmodResult::EventNotFound)?;
            *strip = RawHandle::from_addr(address);
            Ok(())
        })
    }

    fn system_get_bank(&self, system: RawHandle, id: &Guid, bank: &mut RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_GET_BANK, |s| {
            s.initialized_system(system)?;
            let address = s.find_bank(system.addr(), id).ok_or(FmodResult::EventNotFound)?;
            *bank = RawHandle::from_addr(address);
            Ok(())
        })
    }

    fn system_lookup_id(&self, system: RawHandle, path: &CStr, id: &mut Guid) -> FmodResult {
        self.with(ep::SYSTEM_LOOKUP_ID, |s| {
            s.initialized_system(system)?;
            let path = path.to_str().map_err(|_| FmodResult::InvalidString)?;
            *id = s.id_of(system.addr(), path).ok_or(FmodResult::EventNotFound)?;
            Ok(())
        })
    }

    fn system_lookup_path(&self, system: RawHandle, id: &Guid, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        self.with(ep::SYSTEM_LOOKUP_PATH, |s| {
            s.initialized_system(system)?;
            let text = s.path_of(system.addr(), id).ok_or(FmodResult::EventNotFound)?;
            write_string(&text, path, retrieved)
        })
    }

    fn system_get_listener_attributes(&self, system: RawHandle, attributes: &mut Attributes3d) -> FmodResult {
        self.with(ep::SYSTEM_GET_LISTENER_ATTRIBUTES, |s| {
            *attributes = s.system(system)?.listener;
            Ok(())
        })
    }

    fn system_set_listener_attributes(&self, system: RawHandle, attributes: &Attributes3d) -> FmodResult {
        self.with(ep::SYSTEM_SET_LISTENER_ATTRIBUTES, |s| {
            check_orientation(attributes)?;
            s.system_mut(system)?.listener = *attributes;
            Ok(())
        })
    }

    fn system_load_bank_file(&self, system: RawHandle, filename: &CStr, flags: LoadBankFlags, bank: &mut RawHandle) -> FmodResult {
        let spec = filename
            .to_str()
            .ok()
            .and_then(|name| self.state.lock().bank_files.get(name).cloned());
        self.load_bank(ep::SYSTEM_LOAD_BANK_FILE, system, spec, FmodResult::FileNotFound, flags, bank)
    }

    fn system_load_bank_memory(
        &self,
        system: RawHandle,
        buffer: &[u8],
        mode: i32,
        flags: LoadBankFlags,
        bank: &mut RawHandle,
    ) -> FmodResult {
        if LoadMemoryMode::try_from(mode).is_err() {
            return self.with(ep::SYSTEM_LOAD_BANK_MEMORY, |_| Err(FmodResult::InvalidParam));
        }
        let spec = self
            .state
            .lock()
            .bank_images
            .iter()
            .find(|(bytes, _)| bytes.as_slice() == buffer)
            .map(|(_, spec)| spec.clone());
        self.load_bank(ep::SYSTEM_LOAD_BANK_MEMORY, system, spec, FmodResult::FileBad, flags, bank)
    }

    fn system_unload_all(&self, system: RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_UNLOAD_ALL, |s| {
            s.system(system)?;
            s.unload_all(system.addr());
            Ok(())
        })
    }

    fn system_flush_commands(&self, system: RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_FLUSH_COMMANDS, |s| {
            s.initialized_system(system)?;
            Ok(())
        })
    }

    fn system_start_record_commands(&self, system: RawHandle, path: &CStr, _flags: RecordCommandsFlags) -> FmodResult {
        self.with(ep::SYSTEM_START_RECORD_COMMANDS, |s| {
            s.initialized_system(system)?;
            let path = path.to_str().map_err(|_| FmodResult::InvalidString)?;
            let state = s.system_mut(system)?;
            if state.recording.is_some() {
                return Err(FmodResult::NotReady);
            }
            state.recording = Some(path.to_owned());
            Ok(())
        })
    }

    fn system_stop_record_commands(&self, system: RawHandle) -> FmodResult {
        self.with(ep::SYSTEM_STOP_RECORD_COMMANDS, |s| {
            s.initialized_system(system)?;
            match s.system_mut(system)?.recording.take() {
                Some(_) => Ok(()),
                None => Err(FmodResult::NotReady),
            }
        })
    }

    fn system_playback_commands(&self, system: RawHandle, path: &CStr) -> FmodResult {
        self.with(ep::SYSTEM_PLAYBACK_COMMANDS, |s| {
            s.initialized_system(system)?;
            if path.to_bytes().is_empty() {
                return Err(FmodResult::FileNotFound);
            }
            Ok(())
        })
    }

    fn system_get_bank_count(&self, system: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::SYSTEM_GET_BANK_COUNT, |s| {
            *count = count_of(&s.system(system)?.banks);
            Ok(())
        })
    }

    fn system_get_bank_list(&self, system: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        self.with(ep::SYSTEM_GET_BANK_LIST, |s| {
            let banks = s.system(system)?.banks.clone();
            s.write_list(&banks, array, count);
            Ok(())
        })
    }

    fn system_get_cpu_usage(&self, system: RawHandle, usage: &mut CpuUsage) -> FmodResult {
        self.with(ep::SYSTEM_GET_CPU_USAGE, |s| {
            s.initialized_system(system)?;
            *usage = s.cpu_usage;
            Ok(())
        })
    }

    fn event_description_get_id(&self, description: RawHandle, id: &mut Guid) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_ID, |s| {
            *id = s.description(description)?.id;
            Ok(())
        })
    }

    fn event_description_get_path(&self, description: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_PATH, |s| {
            write_string(&s.description(description)?.spec.path, path, retrieved)
        })
    }

    fn event_description_get_parameter_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_PARAMETER_COUNT, |s| {
            let parameters = s.description(description)?.spec.parameters.len();
            *count = i32::try_from(parameters).unwrap_or(i32::MAX);
            Ok(())
        })
    }

    fn event_description_get_parameter_by_index(
        &self,
        description: RawHandle,
        index: i32,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_PARAMETER_BY_INDEX, |s| {
            s.description(description)?;
            let index = usize::try_from(index).map_err(|_| FmodResult::InvalidParam)?;
            Self::parameter_description(s, description.addr(), index, parameter)
        })
    }

    fn event_description_get_parameter(
        &self,
        description: RawHandle,
        name: &CStr,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_PARAMETER, |s| {
            let names: Vec<String> = s
                .description(description)?
                .spec
                .parameters
                .iter()
                .map(|p| p.name.clone())
                .collect();
            let index = lookup_name(&names, name)?;
            Self::parameter_description(s, description.addr(), index, parameter)
        })
    }

    fn event_description_get_user_property_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_USER_PROPERTY_COUNT, |s| {
            *count = s.description(description)?.spec.user_property_count;
            Ok(())
        })
    }

    fn event_description_get_length(&self, description: RawHandle, length: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_LENGTH, |s| {
            *length = s.description(description)?.spec.length_ms;
            Ok(())
        })
    }

    fn event_description_get_minimum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_MINIMUM_DISTANCE, |s| {
            *distance = s.description(description)?.spec.minimum_distance;
            Ok(())
        })
    }

    fn event_description_get_maximum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_MAXIMUM_DISTANCE, |s| {
            *distance = s.description(description)?.spec.maximum_distance;
            Ok(())
        })
    }

    fn event_description_is_oneshot(&self, description: RawHandle, oneshot: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_IS_ONESHOT, |s| {
            *oneshot = i32::from(s.description(description)?.spec.oneshot);
            Ok(())
        })
    }

    fn event_description_is_stream(&self, description: RawHandle, is_stream: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_IS_STREAM, |s| {
            *is_stream = i32::from(s.description(description)?.spec.stream);
            Ok(())
        })
    }

    fn event_description_is_3d(&self, description: RawHandle, is_3d: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_IS_3D, |s| {
            *is_3d = i32::from(s.description(description)?.spec.is_3d);
            Ok(())
        })
    }

    fn event_description_create_instance(&self, description: RawHandle, instance: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_CREATE_INSTANCE, |s| {
            s.description(description)?;
            *instance = RawHandle::from_addr(s.create_instance(description.addr())?);
            Ok(())
        })
    }

    fn event_description_get_instance_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_INSTANCE_COUNT, |s| {
            *count = count_of(&s.description(description)?.instances);
            Ok(())
        })
    }

    fn event_description_get_instance_list(&self, description: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_GET_INSTANCE_LIST, |s| {
            let instances = s.description(description)?.instances.clone();
            s.write_list(&instances, array, count);
            Ok(())
        })
    }

    fn event_description_release_all_instances(&self, description: RawHandle) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_RELEASE_ALL_INSTANCES, |s| {
            s.description(description)?;
            s.release_all_instances(description.addr());
            Ok(())
        })
    }

    fn event_description_set_callback(&self, description: RawHandle, callback: Option<EventCallback>) -> FmodResult {
        self.with(ep::EVENT_DESCRIPTION_SET_CALLBACK, |s| {
            s.description_mut(description)?.callback = callback;
            Ok(())
        })
    }

    fn event_instance_get_description(&self, instance: RawHandle, description: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_DESCRIPTION, |s| {
            *description = RawHandle::from_addr(s.instance(instance)?.description);
            Ok(())
        })
    }

    fn event_instance_get_volume(&self, instance: RawHandle, volume: &mut f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_VOLUME, |s| {
            *volume = s.instance(instance)?.volume;
            Ok(())
        })
    }

    fn event_instance_set_volume(&self, instance: RawHandle, volume: f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_VOLUME, |s| {
            s.instance_mut(instance)?.volume = volume;
            Ok(())
        })
    }

    fn event_instance_get_pitch(&self, instance: RawHandle, pitch: &mut f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PITCH, |s| {
            *pitch = s.instance(instance)?.pitch;
            Ok(())
        })
    }

    fn event_instance_set_pitch(&self, instance: RawHandle, pitch: f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_PITCH, |s| {
            s.instance_mut(instance)?.pitch = pitch;
            Ok(())
        })
    }

    fn event_instance_get_3d_attributes(&self, instance: RawHandle, attributes: &mut Attributes3d) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_3D_ATTRIBUTES, |s| {
            *attributes = s.instance(instance)?.attributes;
            Ok(())
        })
    }

    fn event_instance_set_3d_attributes(&self, instance: RawHandle, attributes: &Attributes3d) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_3D_ATTRIBUTES, |s| {
            check_orientation(attributes)?;
            s.instance_mut(instance)?.attributes = *attributes;
            Ok(())
        })
    }

    fn event_instance_get_paused(&self, instance: RawHandle, paused: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PAUSED, |s| {
            *paused = i32::from(s.instance(instance)?.paused);
            Ok(())
        })
    }

    fn event_instance_set_paused(&self, instance: RawHandle, paused: i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_PAUSED, |s| {
            s.instance_mut(instance)?.paused = paused != 0;
            Ok(())
        })
    }

    fn event_instance_start(&self, instance: RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_START, |s| {
            s.transition(instance.addr(), PlaybackState::Playing, EventCallbackType::Started)
        })
    }

    fn event_instance_stop(&self, instance: RawHandle, mode: i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_STOP, |s| {
            StopMode::try_from(mode).map_err(|_| FmodResult::InvalidParam)?;
            s.transition(instance.addr(), PlaybackState::Stopped, EventCallbackType::Stopped)
        })
    }

    fn event_instance_get_timeline_position(&self, instance: RawHandle, position: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_TIMELINE_POSITION, |s| {
            *position = s.instance(instance)?.timeline_position;
            Ok(())
        })
    }

    fn event_instance_set_timeline_position(&self, instance: RawHandle, position: i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_TIMELINE_POSITION, |s| {
            s.instance_mut(instance)?.timeline_position = position;
            Ok(())
        })
    }

    fn event_instance_get_playback_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PLAYBACK_STATE, |s| {
            *state = s.instance(instance)?.playback.raw();
            Ok(())
        })
    }

    fn event_instance_get_channel_group(&self, instance: RawHandle, group: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_CHANNEL_GROUP, |s| {
            *group = RawHandle::from_addr(s.channel_group(instance.addr())?);
            Ok(())
        })
    }

    fn event_instance_release(&self, instance: RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_RELEASE, |s| {
            s.instance(instance)?;
            s.release_instance(instance.addr());
            Ok(())
        })
    }

    fn event_instance_is_virtual(&self, instance: RawHandle, virtual_state: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_IS_VIRTUAL, |s| {
            *virtual_state = i32::from(s.instance(instance)?.is_virtual);
            Ok(())
        })
    }

    fn event_instance_get_parameter(&self, instance: RawHandle, name: &CStr, parameter: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PARAMETER, |s| {
            *parameter = RawHandle::from_addr(instance_parameter(s, instance, name)?);
            Ok(())
        })
    }

    fn event_instance_get_parameter_by_index(&self, instance: RawHandle, index: i32, parameter: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PARAMETER_BY_INDEX, |s| {
            *parameter = RawHandle::from_addr(index_into(&s.instance(instance)?.parameters, index)?);
            Ok(())
        })
    }

    fn event_instance_get_parameter_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_PARAMETER_COUNT, |s| {
            *count = count_of(&s.instance(instance)?.parameters);
            Ok(())
        })
    }

    fn event_instance_set_parameter_value(&self, instance: RawHandle, name: &CStr, value: f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_PARAMETER_VALUE, |s| {
            let parameter = instance_parameter(s, instance, name)?;
            s.parameter_mut(RawHandle::from_addr(parameter))?.value = value;
            Ok(())
        })
    }

    fn event_instance_set_parameter_value_by_index(&self, instance: RawHandle, index: i32, value: f32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_PARAMETER_VALUE_BY_INDEX, |s| {
            let parameter = index_into(&s.instance(instance)?.parameters, index)?;
            s.parameter_mut(RawHandle::from_addr(parameter))?.value = value;
            Ok(())
        })
    }

    fn event_instance_get_cue(&self, instance: RawHandle, name: &CStr, cue: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_CUE, |s| {
            let cues = &s.instance(instance)?.cues;
            let names: Vec<String> = cues
                .iter()
                .filter_map(|c| s.cues.get(c).map(|c| c.name.clone()))
                .collect();
            let index = lookup_name(&names, name)?;
            *cue = RawHandle::from_addr(cues[index]);
            Ok(())
        })
    }

    fn event_instance_get_cue_by_index(&self, instance: RawHandle, index: i32, cue: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_CUE_BY_INDEX, |s| {
            *cue = RawHandle::from_addr(index_into(&s.instance(instance)?.cues, index)?);
            Ok(())
        })
    }

    fn event_instance_get_cue_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_CUE_COUNT, |s| {
            *count = count_of(&s.instance(instance)?.cues);
            Ok(())
        })
    }

    fn event_instance_create_sub_event(&self, instance: RawHandle, name: &CStr, sub_instance: &mut RawHandle) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_CREATE_SUB_EVENT, |s| {
            let description = s.instance(instance)?.description;
            let subs = &s.description(RawHandle::from_addr(description))?.sub_events;
            let names: Vec<String> = subs.iter().map(|(n, _)| n.clone()).collect();
            let sub = subs[lookup_name(&names, name)?].1;
            *sub_instance = RawHandle::from_addr(s.create_instance(sub)?);
            Ok(())
        })
    }

    fn event_instance_get_loading_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_GET_LOADING_STATE, |s| {
            s.instance(instance)?;
            *state = LoadingState::Loaded.raw();
            Ok(())
        })
    }

    fn event_instance_set_callback(&self, instance: RawHandle, callback: Option<EventCallback>) -> FmodResult {
        self.with(ep::EVENT_INSTANCE_SET_CALLBACK, |s| {
            s.instance_mut(instance)?.callback = callback;
            Ok(())
        })
    }

    fn cue_instance_trigger(&self, cue: RawHandle) -> FmodResult {
        self.with(ep::CUE_INSTANCE_TRIGGER, |s| {
            s.cue_mut(cue)?.triggered += 1;
            Ok(())
        })
    }

    fn parameter_instance_get_description(&self, parameter: RawHandle, description: &mut RawParameterDescription) -> FmodResult {
        self.with(ep::PARAMETER_INSTANCE_GET_DESCRIPTION, |s| {
            let state = s.parameter(parameter)?;
            Self::parameter_description(s, state.description, state.index, description)
        })
    }

    fn parameter_instance_get_value(&self, parameter: RawHandle, value: &mut f32) -> FmodResult {
        self.with(ep::PARAMETER_INSTANCE_GET_VALUE, |s| {
            *value = s.parameter(parameter)?.value;
            Ok(())
        })
    }

    fn parameter_instance_set_value(&self, parameter: RawHandle, value: f32) -> FmodResult {
        self.with(ep::PARAMETER_INSTANCE_SET_VALUE, |s| {
            s.parameter_mut(parameter)?.value = value;
            Ok(())
        })
    }

    fn mixer_strip_get_id(&self, strip: RawHandle, id: &mut Guid) -> FmodResult {
        self.with(ep::MIXER_STRIP_GET_ID, |s| {
            *id = s.strip(strip)?.id;
            Ok(())
        })
    }

    fn mixer_strip_get_path(&self, strip: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        self.with(ep::MIXER_STRIP_GET_PATH, |s| {
            write_string(&s.strip(strip)?.path, path, retrieved)
        })
    }

    fn mixer_strip_get_fader_level(&self, strip: RawHandle, level: &mut f32) -> FmodResult {
        self.with(ep::MIXER_STRIP_GET_FADER_LEVEL, |s| {
            *level = s.strip(strip)?.fader_level;
            Ok(())
        })
    }

    fn mixer_strip_set_fader_level(&self, strip: RawHandle, level: f32) -> FmodResult {
        self.with(ep::MIXER_STRIP_SET_FADER_LEVEL, |s| {
            s.strip_mut(strip)?.fader_level = level;
            Ok(())
        })
    }

    fn mixer_strip_get_paused(&self, strip: RawHandle, paused: &mut i32) -> FmodResult {
        self.with(ep::MIXER_STRIP_GET_PAUSED, |s| {
            *paused = i32::from(s.strip(strip)?.paused);
            Ok(())
        })
    }

    fn mixer_strip_set_paused(&self, strip: RawHandle, paused: i32) -> FmodResult {
        self.with(ep::MIXER_STRIP_SET_PAUSED, |s| {
            s.strip_mut(strip)?.paused = paused != 0;
            Ok(())
        })
    }

    fn mixer_strip_stop_all_events(&self, strip: RawHandle, mode: i32) -> FmodResult {
        self.with(ep::MIXER_STRIP_STOP_ALL_EVENTS, |s| {
            StopMode::try_from(mode).map_err(|_| FmodResult::InvalidParam)?;
            let bank = s.strip(strip)?.bank;
            for instance in s.bank_instances(bank) {
                s.transition(instance, PlaybackState::Stopped, EventCallbackType::Stopped)?;
            }
            Ok(())
        })
    }

    fn mixer_strip_get_loading_state(&self, strip: RawHandle, state: &mut i32) -> FmodResult {
        self.with(ep::MIXER_STRIP_GET_LOADING_STATE, |s| {
            s.strip(strip)?;
            *state = LoadingState::Loaded.raw();
            Ok(())
        })
    }

    fn mixer_strip_release(&self, strip: RawHandle) -> FmodResult {
        self.with(ep::MIXER_STRIP_RELEASE, |s| {
            let bank = s.strip(strip)?.bank;
            s.strips.remove(&strip.addr());
            if let Some(owner) = s.banks.get_mut(&bank) {
                owner.strips.retain(|address| *address != strip.addr());
            }
            Ok(())
        })
    }

    fn bank_get_id(&self, bank: RawHandle, id: &mut Guid) -> FmodResult {
        self.with(ep::BANK_GET_ID, |s| {
            *id = s.bank(bank)?.id;
            Ok(())
        })
    }

    fn bank_get_path(&self, bank: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_PATH, |s| write_string(&s.bank(bank)?.path, path, retrieved))
    }

    fn bank_unload(&self, bank: RawHandle) -> FmodResult {
        self.with(ep::BANK_UNLOAD, |s| {
            s.bank(bank)?;
            s.unload_bank(bank.addr());
            Ok(())
        })
    }

    fn bank_load_sample_data(&self, bank: RawHandle) -> FmodResult {
        self.with(ep::BANK_LOAD_SAMPLE_DATA, |s| {
            s.bank_mut(bank)?.sample_loading = LoadingState::Loaded;
            Ok(())
        })
    }

    fn bank_unload_sample_data(&self, bank: RawHandle) -> FmodResult {
        self.with(ep::BANK_UNLOAD_SAMPLE_DATA, |s| {
            s.bank_mut(bank)?.sample_loading = LoadingState::Unloaded;
            Ok(())
        })
    }

    fn bank_get_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_LOADING_STATE, |s| {
            *state = s.bank(bank)?.loading.raw();
            Ok(())
        })
    }

    fn bank_get_sample_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_SAMPLE_LOADING_STATE, |s| {
            *state = s.bank(bank)?.sample_loading.raw();
            Ok(())
        })
    }

    fn bank_get_event_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_EVENT_COUNT, |s| {
            *count = count_of(&s.bank(bank)?.events);
            Ok(())
        })
    }

    fn bank_get_event_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_EVENT_LIST, |s| {
            let events = s.bank(bank)?.events.clone();
            s.write_list(&events, array, count);
            Ok(())
        })
    }

    fn bank_get_mixer_strip_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_MIXER_STRIP_COUNT, |s| {
            *count = count_of(&s.bank(bank)?.strips);
            Ok(())
        })
    }

    fn bank_get_mixer_strip_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        self.with(ep::BANK_GET_MIXER_STRIP_LIST, |s| {
            let strips = s.bank(bank)?.strips.clone();
            s.write_list(&strips, array, count);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;
    use crate::simulated::{simulated_id, EventSpec};

    fn initialized(studio: &SimulatedStudio) -> RawHandle {
        let mut system = RawHandle::null();
        assert!(studio
            .system_create(&mut system, crate::models::config::DEFAULT_HEADER_VERSION)
            .is_ok());
        assert!(studio
            .system_initialize(system, 32, InitFlags::NORMAL, CoreInitFlags::NORMAL, ptr::null_mut())
            .is_ok());
        system
    }

    #[test]
    fn injected_failure_fires_once() {
        let studio = SimulatedStudio::new();
        let system = initialized(&studio);
        studio.fail_next(ep::SYSTEM_UPDATE, FmodResult::Internal);
        assert_eq!(studio.system_update(system), FmodResult::Internal);
        assert_eq!(studio.system_update(system), FmodResult::Ok);
    }

    #[test]
    fn path_truncation_reports_required_size() {
        let studio = SimulatedStudio::new();
        let system = initialized(&studio);
        studio.add_bank_file("a.bank", BankSpec::new("bank:/A").event(EventSpec::new("event:/Long/Name")));
        let mut bank = RawHandle::null();
        let name = CString::new("a.bank").unwrap();
        assert!(studio
            .system_load_bank_file(system, &name, LoadBankFlags::NORMAL, &mut bank)
            .is_ok());

        let mut buffer = [0u8; 8];
        let mut retrieved = 0;
        let status = studio.system_lookup_path(system, &simulated_id("event:/Long/Name"), &mut buffer, &mut retrieved);
        assert_eq!(status, FmodResult::Truncated);
        // Sixteen characters plus the terminator.
        assert_eq!(retrieved, 17);
        assert_eq!(&buffer, b"event:/\0");
    }

    #[test]
    fn unknown_memory_image_is_rejected() {
        let studio = SimulatedStudio::new();
        let system = initialized(&studio);
        let mut bank = RawHandle::null();
        let status = studio.system_load_bank_memory(
            system,
            b"garbage",
            LoadMemoryMode::LoadMemory.raw(),
            LoadBankFlags::NORMAL,
            &mut bank,
        );
        assert_eq!(status, FmodResult::FileBad);
        assert!(bank.is_null());

        let status = studio.system_load_bank_memory(system, b"garbage", 7, LoadBankFlags::NORMAL, &mut bank);
        assert_eq!(status, FmodResult::InvalidParam);
    }

    #[test]
    fn loading_requires_initialized_system() {
        let studio = SimulatedStudio::new();
        studio.add_bank_file("a.bank", BankSpec::new("bank:/A"));
        let mut system = RawHandle::null();
        studio.system_create(&mut system, crate::models::config::DEFAULT_HEADER_VERSION);
        let mut bank = RawHandle::null();
        let name = CString::new("a.bank").unwrap();
        assert_eq!(
            studio.system_load_bank_file(system, &name, LoadBankFlags::NORMAL, &mut bank),
            FmodResult::StudioUninitialized
        );
    }

    #[test]
    fn handles_of_other_kinds_are_rejected() {
        let studio = SimulatedStudio::new();
        let system = initialized(&studio);
        let mut volume = 0.0;
        assert_eq!(
            studio.event_instance_get_volume(system, &mut volume),
            FmodResult::InvalidHandle
        );
    }

    #[test]
    fn set_parameter_value_records_one_call() {
        let studio = SimulatedStudio::new();
        let system = initialized(&studio);
        studio.add_bank_file(
            "a.bank",
            BankSpec::new("bank:/A").event(EventSpec::new("event:/E").parameter(
                "P",
                0.0,
                1.0,
                crate::models::modes::ParameterType::GameControlled,
            )),
        );
        let mut bank = RawHandle::null();
        let name = CString::new("a.bank").unwrap();
        studio.system_load_bank_file(system, &name, LoadBankFlags::NORMAL, &mut bank);
        let mut description = RawHandle::null();
        studio.system_get_event(system, &simulated_id("event:/E"), LoadingMode::BeginNow.raw(), &mut description);
        let mut instance = RawHandle::null();
        studio.event_description_create_instance(description, &mut instance);

        studio.clear_calls();
        let parameter = CString::new("P").unwrap();
        assert!(studio
            .event_instance_set_parameter_value(instance, &parameter, 0.5)
            .is_ok());
        assert_eq!(studio.calls(), vec![ep::EVENT_INSTANCE_SET_PARAMETER_VALUE]);
    }
}
