//! `StudioApi` over the linked libfmodstudio.

use std::ffi::{c_char, c_int, c_void, CStr};

use fmod_studio_core::models::flags::{CoreInitFlags, InitFlags, LoadBankFlags, RecordCommandsFlags};
use fmod_studio_core::models::guid::Guid;
use fmod_studio_core::models::parameter::RawParameterDescription;
use fmod_studio_core::models::result::FmodResult;
use fmod_studio_core::models::settings::{AdvancedSettings, CpuUsage};
use fmod_studio_core::models::spatial::Attributes3d;
use fmod_studio_core::{EventCallback, RawHandle, StudioApi};

use crate::ffi::{self, Handle};

/// The real studio library.
///
/// Stateless: every method forwards to the matching `FMOD_Studio_*` entry
/// point and returns its status untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeStudio;

impl NativeStudio {
    pub fn new() -> Self {
        Self
    }
}

fn status(code: c_int) -> FmodResult {
    FmodResult::from_raw(code)
}

fn out(handle: &mut RawHandle) -> *mut Handle {
    (handle as *mut RawHandle).cast()
}

fn list(array: &mut [RawHandle]) -> (*mut Handle, c_int) {
    (array.as_mut_ptr().cast(), capacity(array.len()))
}

fn text(buffer: &mut [u8]) -> (*mut c_char, c_int) {
    (buffer.as_mut_ptr().cast(), capacity(buffer.len()))
}

fn capacity(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

// SAFETY (all blocks below): handles were produced by the native side, every
// out-pointer comes from a live `&mut`, and buffer lengths passed alongside a
// pointer are the lengths of the slices it points into.
impl StudioApi for NativeStudio {
    fn system_create(&self, system: &mut RawHandle, header_version: u32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_Create(out(system), header_version) })
    }

    fn parse_id(&self, id_string: &CStr, id: &mut Guid) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_ParseID(id_string.as_ptr(), id) })
    }

    fn system_set_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_SetAdvancedSettings(system.as_ptr(), settings) })
    }

    fn system_get_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetAdvancedSettings(system.as_ptr(), settings) })
    }

    fn system_initialize(
        &self,
        system: RawHandle,
        max_channels: i32,
        studio_flags: InitFlags,
        flags: CoreInitFlags,
        extra_driver_data: *mut c_void,
    ) -> FmodResult {
        status(unsafe {
            ffi::FMOD_Studio_System_Initialize(
                system.as_ptr(),
                max_channels,
                studio_flags.bits(),
                flags.bits(),
                extra_driver_data,
            )
        })
    }

    fn system_release(&self, system: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_Release(system.as_ptr()) })
    }

    fn system_update(&self, system: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_Update(system.as_ptr()) })
    }

    fn system_get_low_level_system(&self, system: RawHandle, low_level: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetLowLevelSystem(system.as_ptr(), out(low_level)) })
    }

    fn system_get_event(&self, system: RawHandle, id: &Guid, mode: i32, description: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetEvent(system.as_ptr(), id, mode, out(description)) })
    }

    fn system_get_mixer_strip(&self, system: RawHandle, id: &Guid, mode: i32, strip: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetMixerStrip(system.as_ptr(), id, mode, out(strip)) })
    }

    fn system_get_bank(&self, system: RawHandle, id: &Guid, bank: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetBank(system.as_ptr(), id, out(bank)) })
    }

    fn system_lookup_id(&self, system: RawHandle, path: &CStr, id: &mut Guid) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_LookupID(system.as_ptr(), path.as_ptr(), id) })
    }

    fn system_lookup_path(&self, system: RawHandle, id: &Guid, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        let (buffer, size) = text(path);
        status(unsafe { ffi::FMOD_Studio_System_LookupPath(system.as_ptr(), id, buffer, size, retrieved) })
    }

    fn system_get_listener_attributes(&self, system: RawHandle, attributes: &mut Attributes3d) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetListenerAttributes(system.as_ptr(), attributes) })
    }

    fn system_set_listener_attributes(&self, system: RawHandle, attributes: &Attributes3d) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_SetListenerAttributes(system.as_ptr(), attributes) })
    }

    fn system_load_bank_file(&self, system: RawHandle, filename: &CStr, flags: LoadBankFlags, bank: &mut RawHandle) -> FmodResult {
        status(unsafe {
            ffi::FMOD_Studio_System_LoadBankFile(system.as_ptr(), filename.as_ptr(), flags.bits(), out(bank))
        })
    }

    fn system_load_bank_memory(
        &self,
        system: RawHandle,
        buffer: &[u8],
        mode: i32,
        flags: LoadBankFlags,
        bank: &mut RawHandle,
    ) -> FmodResult {
        // Lengths past i32::MAX cannot be expressed natively.
        let Ok(length) = c_int::try_from(buffer.len()) else {
            return FmodResult::InvalidParam;
        };
        status(unsafe {
            ffi::FMOD_Studio_System_LoadBankMemory(
                system.as_ptr(),
                buffer.as_ptr().cast(),
                length,
                mode,
                flags.bits(),
                out(bank),
            )
        })
    }

    fn system_unload_all(&self, system: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_UnloadAll(system.as_ptr()) })
    }

    fn system_flush_commands(&self, system: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_FlushCommands(system.as_ptr()) })
    }

    fn system_start_record_commands(&self, system: RawHandle, path: &CStr, flags: RecordCommandsFlags) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_StartRecordCommands(system.as_ptr(), path.as_ptr(), flags.bits()) })
    }

    fn system_stop_record_commands(&self, system: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_StopRecordCommands(system.as_ptr()) })
    }

    fn system_playback_commands(&self, system: RawHandle, path: &CStr) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_PlaybackCommands(system.as_ptr(), path.as_ptr()) })
    }

    fn system_get_bank_count(&self, system: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetBankCount(system.as_ptr(), count) })
    }

    fn system_get_bank_list(&self, system: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        let (array, capacity) = list(array);
        status(unsafe { ffi::FMOD_Studio_System_GetBankList(system.as_ptr(), array, capacity, count) })
    }

    fn system_get_cpu_usage(&self, system: RawHandle, usage: &mut CpuUsage) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_System_GetCPUUsage(system.as_ptr(), usage) })
    }

    fn event_description_get_id(&self, description: RawHandle, id: &mut Guid) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetID(description.as_ptr(), id) })
    }

    fn event_description_get_path(&self, description: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        let (buffer, size) = text(path);
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetPath(description.as_ptr(), buffer, size, retrieved) })
    }

    fn event_description_get_parameter_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetParameterCount(description.as_ptr(), count) })
    }

    fn event_description_get_parameter_by_index(
        &self,
        description: RawHandle,
        index: i32,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetParameterByIndex(description.as_ptr(), index, parameter) })
    }

    fn event_description_get_parameter(
        &self,
        description: RawHandle,
        name: &CStr,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetParameter(description.as_ptr(), name.as_ptr(), parameter) })
    }

    fn event_description_get_user_property_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetUserPropertyCount(description.as_ptr(), count) })
    }

    fn event_description_get_length(&self, description: RawHandle, length: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetLength(description.as_ptr(), length) })
    }

    fn event_description_get_minimum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetMinimumDistance(description.as_ptr(), distance) })
    }

    fn event_description_get_maximum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetMaximumDistance(description.as_ptr(), distance) })
    }

    fn event_description_is_oneshot(&self, description: RawHandle, oneshot: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_IsOneshot(description.as_ptr(), oneshot) })
    }

    fn event_description_is_stream(&self, description: RawHandle, is_stream: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_IsStream(description.as_ptr(), is_stream) })
    }

    fn event_description_is_3d(&self, description: RawHandle, is_3d: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_Is3D(description.as_ptr(), is_3d) })
    }

    fn event_description_create_instance(&self, description: RawHandle, instance: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_CreateInstance(description.as_ptr(), out(instance)) })
    }

    fn event_description_get_instance_count(&self, description: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetInstanceCount(description.as_ptr(), count) })
    }

    fn event_description_get_instance_list(&self, description: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        let (array, capacity) = list(array);
        status(unsafe { ffi::FMOD_Studio_EventDescription_GetInstanceList(description.as_ptr(), array, capacity, count) })
    }

    fn event_description_release_all_instances(&self, description: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_ReleaseAllInstances(description.as_ptr()) })
    }

    fn event_description_set_callback(&self, description: RawHandle, callback: Option<EventCallback>) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventDescription_SetCallback(description.as_ptr(), callback) })
    }

    fn event_instance_get_description(&self, instance: RawHandle, description: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetDescription(instance.as_ptr(), out(description)) })
    }

    fn event_instance_get_volume(&self, instance: RawHandle, volume: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetVolume(instance.as_ptr(), volume) })
    }

    fn event_instance_set_volume(&self, instance: RawHandle, volume: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetVolume(instance.as_ptr(), volume) })
    }

    fn event_instance_get_pitch(&self, instance: RawHandle, pitch: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetPitch(instance.as_ptr(), pitch) })
    }

    fn event_instance_set_pitch(&self, instance: RawHandle, pitch: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetPitch(instance.as_ptr(), pitch) })
    }

    fn event_instance_get_3d_attributes(&self, instance: RawHandle, attributes: &mut Attributes3d) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_Get3DAttributes(instance.as_ptr(), attributes) })
    }

    fn event_instance_set_3d_attributes(&self, instance: RawHandle, attributes: &Attributes3d) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_Set3DAttributes(instance.as_ptr(), attributes) })
    }

    fn event_instance_get_paused(&self, instance: RawHandle, paused: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetPaused(instance.as_ptr(), paused) })
    }

    fn event_instance_set_paused(&self, instance: RawHandle, paused: i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetPaused(instance.as_ptr(), paused) })
    }

    fn event_instance_start(&self, instance: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_Start(instance.as_ptr()) })
    }

    fn event_instance_stop(&self, instance: RawHandle, mode: i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_Stop(instance.as_ptr(), mode) })
    }

    fn event_instance_get_timeline_position(&self, instance: RawHandle, position: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetTimelinePosition(instance.as_ptr(), position) })
    }

    fn event_instance_set_timeline_position(&self, instance: RawHandle, position: i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetTimelinePosition(instance.as_ptr(), position) })
    }

    fn event_instance_get_playback_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetPlaybackState(instance.as_ptr(), state) })
    }

    fn event_instance_get_channel_group(&self, instance: RawHandle, group: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetChannelGroup(instance.as_ptr(), out(group)) })
    }

    fn event_instance_release(&self, instance: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_Release(instance.as_ptr()) })
    }

    fn event_instance_is_virtual(&self, instance: RawHandle, virtual_state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_IsVirtual(instance.as_ptr(), virtual_state) })
    }

    fn event_instance_get_parameter(&self, instance: RawHandle, name: &CStr, parameter: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetParameter(instance.as_ptr(), name.as_ptr(), out(parameter)) })
    }

    fn event_instance_get_parameter_by_index(&self, instance: RawHandle, index: i32, parameter: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetParameterByIndex(instance.as_ptr(), index, out(parameter)) })
    }

    fn event_instance_get_parameter_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetParameterCount(instance.as_ptr(), count) })
    }

    fn event_instance_set_parameter_value(&self, instance: RawHandle, name: &CStr, value: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetParameterValue(instance.as_ptr(), name.as_ptr(), value) })
    }

    fn event_instance_set_parameter_value_by_index(&self, instance: RawHandle, index: i32, value: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetParameterValueByIndex(instance.as_ptr(), index, value) })
    }

    fn event_instance_get_cue(&self, instance: RawHandle, name: &CStr, cue: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetCue(instance.as_ptr(), name.as_ptr(), out(cue)) })
    }

    fn event_instance_get_cue_by_index(&self, instance: RawHandle, index: i32, cue: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetCueByIndex(instance.as_ptr(), index, out(cue)) })
    }

    fn event_instance_get_cue_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetCueCount(instance.as_ptr(), count) })
    }

    fn event_instance_create_sub_event(&self, instance: RawHandle, name: &CStr, sub_instance: &mut RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_CreateSubEvent(instance.as_ptr(), name.as_ptr(), out(sub_instance)) })
    }

    fn event_instance_get_loading_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_GetLoadingState(instance.as_ptr(), state) })
    }

    fn event_instance_set_callback(&self, instance: RawHandle, callback: Option<EventCallback>) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_EventInstance_SetCallback(instance.as_ptr(), callback) })
    }

    fn cue_instance_trigger(&self, cue: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_CueInstance_Trigger(cue.as_ptr()) })
    }

    fn parameter_instance_get_description(&self, parameter: RawHandle, description: &mut RawParameterDescription) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_ParameterInstance_GetDescription(parameter.as_ptr(), description) })
    }

    fn parameter_instance_get_value(&self, parameter: RawHandle, value: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_ParameterInstance_GetValue(parameter.as_ptr(), value) })
    }

    fn parameter_instance_set_value(&self, parameter: RawHandle, value: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_ParameterInstance_SetValue(parameter.as_ptr(), value) })
    }

    fn mixer_strip_get_id(&self, strip: RawHandle, id: &mut Guid) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_GetID(strip.as_ptr(), id) })
    }

    fn mixer_strip_get_path(&self, strip: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        let (buffer, size) = text(path);
        status(unsafe { ffi::FMOD_Studio_MixerStrip_GetPath(strip.as_ptr(), buffer, size, retrieved) })
    }

    fn mixer_strip_get_fader_level(&self, strip: RawHandle, level: &mut f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_GetFaderLevel(strip.as_ptr(), level) })
    }

    fn mixer_strip_set_fader_level(&self, strip: RawHandle, level: f32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_SetFaderLevel(strip.as_ptr(), level) })
    }

    fn mixer_strip_get_paused(&self, strip: RawHandle, paused: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_GetPaused(strip.as_ptr(), paused) })
    }

    fn mixer_strip_set_paused(&self, strip: RawHandle, paused: i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_SetPaused(strip.as_ptr(), paused) })
    }

    fn mixer_strip_stop_all_events(&self, strip: RawHandle, mode: i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_StopAllEvents(strip.as_ptr(), mode) })
    }

    fn mixer_strip_get_loading_state(&self, strip: RawHandle, state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_GetLoadingState(strip.as_ptr(), state) })
    }

    fn mixer_strip_release(&self, strip: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_MixerStrip_Release(strip.as_ptr()) })
    }

    fn bank_get_id(&self, bank: RawHandle, id: &mut Guid) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_GetID(bank.as_ptr(), id) })
    }

    fn bank_get_path(&self, bank: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult {
        let (buffer, size) = text(path);
        status(unsafe { ffi::FMOD_Studio_Bank_GetPath(bank.as_ptr(), buffer, size, retrieved) })
    }

    fn bank_unload(&self, bank: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_Unload(bank.as_ptr()) })
    }

    fn bank_load_sample_data(&self, bank: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_LoadSampleData(bank.as_ptr()) })
    }

    fn bank_unload_sample_data(&self, bank: RawHandle) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_UnloadSampleData(bank.as_ptr()) })
    }

    fn bank_get_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_GetLoadingState(bank.as_ptr(), state) })
    }

    fn bank_get_sample_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_GetSampleLoadingState(bank.as_ptr(), state) })
    }

    fn bank_get_event_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_GetEventCount(bank.as_ptr(), count) })
    }

    fn bank_get_event_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        let (array, capacity) = list(array);
        status(unsafe { ffi::FMOD_Studio_Bank_GetEventList(bank.as_ptr(), array, capacity, count) })
    }

    fn bank_get_mixer_strip_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult {
        status(unsafe { ffi::FMOD_Studio_Bank_GetMixerStripCount(bank.as_ptr(), count) })
    }

    fn bank_get_mixer_strip_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult {
        let (array, capacity) = list(array);
        status(unsafe { ffi::FMOD_Studio_Bank_GetMixerStripList(bank.as_ptr(), array, capacity, count) })
    }
}
