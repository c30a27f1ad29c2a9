use std::ffi::{c_void, CStr};

use crate::handles::raw::RawHandle;
use crate::models::flags::{CoreInitFlags, InitFlags, LoadBankFlags, RecordCommandsFlags};
use crate::models::guid::Guid;
use crate::models::parameter::RawParameterDescription;
use crate::models::result::FmodResult;
use crate::models::settings::{AdvancedSettings, CpuUsage};
use crate::models::spatial::Attributes3d;

/// Native event callback (`FMOD_STUDIO_EVENT_CALLBACK`).
///
/// Receives the raw `EventCallbackType` value and a pointer whose meaning
/// depends on it; returns a raw `FmodResult`.
pub type EventCallback = unsafe extern "system" fn(kind: i32, parameters: *mut c_void) -> i32;

/// The studio C ABI as a Rust seam: one method per native entry point.
///
/// Implemented by:
/// - `NativeStudio` (fmod-studio-native), which calls libfmodstudio
/// - `SimulatedStudio`, an in-memory stand-in for tests and tooling
///
/// Methods mirror the native signatures: raw handles in, status out, results
/// through `&mut` out-parameters. Booleans and enumerations the native side
/// writes are plain `i32`. Implementations do not interpret statuses; the
/// handle wrappers do.
pub trait StudioApi: Send + Sync {
    // Factory / util
    fn system_create(&self, system: &mut RawHandle, header_version: u32) -> FmodResult;
    fn parse_id(&self, id_string: &CStr, id: &mut Guid) -> FmodResult;

    // System
    fn system_set_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult;
    fn system_get_advanced_settings(&self, system: RawHandle, settings: &mut AdvancedSettings) -> FmodResult;
    fn system_initialize(
        &self,
        system: RawHandle,
        max_channels: i32,
        studio_flags: InitFlags,
        flags: CoreInitFlags,
        extra_driver_data: *mut c_void,
    ) -> FmodResult;
    fn system_release(&self, system: RawHandle) -> FmodResult;
    fn system_update(&self, system: RawHandle) -> FmodResult;
    fn system_get_low_level_system(&self, system: RawHandle, low_level: &mut RawHandle) -> FmodResult;
    fn system_get_event(&self, system: RawHandle, id: &Guid, mode: i32, description: &mut RawHandle) -> FmodResult;
    fn system_get_mixer_strip(&self, system: RawHandle, id: &Guid, mode: i32, strip: &mut RawHandle) -> FmodResult;
    fn system_get_bank(&self, system: RawHandle, id: &Guid, bank: &mut RawHandle) -> FmodResult;
    fn system_lookup_id(&self, system: RawHandle, path: &CStr, id: &mut Guid) -> FmodResult;
    fn system_lookup_path(&self, system: RawHandle, id: &Guid, path: &mut [u8], retrieved: &mut i32) -> FmodResult;
    fn system_get_listener_attributes(&self, system: RawHandle, attributes: &mut Attributes3d) -> FmodResult;
    fn system_set_listener_attributes(&self, system: RawHandle, attributes: &Attributes3d) -> FmodResult;
    fn system_load_bank_file(&self, system: RawHandle, filename: &CStr, flags: LoadBankFlags, bank: &mut RawHandle) -> FmodResult;
    fn system_load_bank_memory(
        &self,
        system: RawHandle,
        buffer: &[u8],
        mode: i32,
        flags: LoadBankFlags,
        bank: &mut RawHandle,
    ) -> FmodResult;
    fn system_unload_all(&self, system: RawHandle) -> FmodResult;
    fn system_flush_commands(&self, system: RawHandle) -> FmodResult;
    fn system_start_record_commands(&self, system: RawHandle, path: &CStr, flags: RecordCommandsFlags) -> FmodResult;
    fn system_stop_record_commands(&self, system: RawHandle) -> FmodResult;
    fn system_playback_commands(&self, system: RawHandle, path: &CStr) -> FmodResult;
    fn system_get_bank_count(&self, system: RawHandle, count: &mut i32) -> FmodResult;
    /// Capacity is `array.len()`.
    fn system_get_bank_list(&self, system: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult;
    fn system_get_cpu_usage(&self, system: RawHandle, usage: &mut CpuUsage) -> FmodResult;

    // EventDescription
    fn event_description_get_id(&self, description: RawHandle, id: &mut Guid) -> FmodResult;
    fn event_description_get_path(&self, description: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult;
    fn event_description_get_parameter_count(&self, description: RawHandle, count: &mut i32) -> FmodResult;
    fn event_description_get_parameter_by_index(
        &self,
        description: RawHandle,
        index: i32,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult;
    fn event_description_get_parameter(
        &self,
        description: RawHandle,
        name: &CStr,
        parameter: &mut RawParameterDescription,
    ) -> FmodResult;
    fn event_description_get_user_property_count(&self, description: RawHandle, count: &mut i32) -> FmodResult;
    fn event_description_get_length(&self, description: RawHandle, length: &mut i32) -> FmodResult;
    fn event_description_get_minimum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult;
    fn event_description_get_maximum_distance(&self, description: RawHandle, distance: &mut f32) -> FmodResult;
    fn event_description_is_oneshot(&self, description: RawHandle, oneshot: &mut i32) -> FmodResult;
    fn event_description_is_stream(&self, description: RawHandle, is_stream: &mut i32) -> FmodResult;
    fn event_description_is_3d(&self, description: RawHandle, is_3d: &mut i32) -> FmodResult;
    fn event_description_create_instance(&self, description: RawHandle, instance: &mut RawHandle) -> FmodResult;
    fn event_description_get_instance_count(&self, description: RawHandle, count: &mut i32) -> FmodResult;
    fn event_description_get_instance_list(&self, description: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult;
    fn event_description_release_all_instances(&self, description: RawHandle) -> FmodResult;
    fn event_description_set_callback(&self, description: RawHandle, callback: Option<EventCallback>) -> FmodResult;

    // EventInstance
    fn event_instance_get_description(&self, instance: RawHandle, description: &mut RawHandle) -> FmodResult;
    fn event_instance_get_volume(&self, instance: RawHandle, volume: &mut f32) -> FmodResult;
    fn event_instance_set_volume(&self, instance: RawHandle, volume: f32) -> FmodResult;
    fn event_instance_get_pitch(&self, instance: RawHandle, pitch: &mut f32) -> FmodResult;
    fn event_instance_set_pitch(&self, instance: RawHandle, pitch: f32) -> FmodResult;
    fn event_instance_get_3d_attributes(&self, instance: RawHandle, attributes: &mut Attributes3d) -> FmodResult;
    fn event_instance_set_3d_attributes(&self, instance: RawHandle, attributes: &Attributes3d) -> FmodResult;
    fn event_instance_get_paused(&self, instance: RawHandle, paused: &mut i32) -> FmodResult;
    fn event_instance_set_paused(&self, instance: RawHandle, paused: i32) -> FmodResult;
    fn event_instance_start(&self, instance: RawHandle) -> FmodResult;
    fn event_instance_stop(&self, instance: RawHandle, mode: i32) -> FmodResult;
    fn event_instance_get_timeline_position(&self, instance: RawHandle, position: &mut i32) -> FmodResult;
    fn event_instance_set_timeline_position(&self, instance: RawHandle, position: i32) -> FmodResult;
    fn event_instance_get_playback_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult;
    fn event_instance_get_channel_group(&self, instance: RawHandle, group: &mut RawHandle) -> FmodResult;
    fn event_instance_release(&self, instance: RawHandle) -> FmodResult;
    fn event_instance_is_virtual(&self, instance: RawHandle, virtual_state: &mut i32) -> FmodResult;
    fn event_instance_get_parameter(&self, instance: RawHandle, name: &CStr, parameter: &mut RawHandle) -> FmodResult;
    fn event_instance_get_parameter_by_index(&self, instance: RawHandle, index: i32, parameter: &mut RawHandle) -> FmodResult;
    fn event_instance_get_parameter_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult;
    fn event_instance_set_parameter_value(&self, instance: RawHandle, name: &CStr, value: f32) -> FmodResult;
    fn event_instance_set_parameter_value_by_index(&self, instance: RawHandle, index: i32, value: f32) -> FmodResult;
    fn event_instance_get_cue(&self, instance: RawHandle, name: &CStr, cue: &mut RawHandle) -> FmodResult;
    fn event_instance_get_cue_by_index(&self, instance: RawHandle, index: i32, cue: &mut RawHandle) -> FmodResult;
    fn event_instance_get_cue_count(&self, instance: RawHandle, count: &mut i32) -> FmodResult;
    fn event_instance_create_sub_event(&self, instance: RawHandle, name: &CStr, sub_instance: &mut RawHandle) -> FmodResult;
    fn event_instance_get_loading_state(&self, instance: RawHandle, state: &mut i32) -> FmodResult;
    fn event_instance_set_callback(&self, instance: RawHandle, callback: Option<EventCallback>) -> FmodResult;

    // CueInstance
    fn cue_instance_trigger(&self, cue: RawHandle) -> FmodResult;

    // ParameterInstance
    fn parameter_instance_get_description(&self, parameter: RawHandle, description: &mut RawParameterDescription) -> FmodResult;
    fn parameter_instance_get_value(&self, parameter: RawHandle, value: &mut f32) -> FmodResult;
    fn parameter_instance_set_value(&self, parameter: RawHandle, value: f32) -> FmodResult;

    // MixerStrip
    fn mixer_strip_get_id(&self, strip: RawHandle, id: &mut Guid) -> FmodResult;
    fn mixer_strip_get_path(&self, strip: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult;
    fn mixer_strip_get_fader_level(&self, strip: RawHandle, level: &mut f32) -> FmodResult;
    fn mixer_strip_set_fader_level(&self, strip: RawHandle, level: f32) -> FmodResult;
    fn mixer_strip_get_paused(&self, strip: RawHandle, paused: &mut i32) -> FmodResult;
    fn mixer_strip_set_paused(&self, strip: RawHandle, paused: i32) -> FmodResult;
    fn mixer_strip_stop_all_events(&self, strip: RawHandle, mode: i32) -> FmodResult;
    fn mixer_strip_get_loading_state(&self, strip: RawHandle, state: &mut i32) -> FmodResult;
    fn mixer_strip_release(&self, strip: RawHandle) -> FmodResult;

    // Bank
    fn bank_get_id(&self, bank: RawHandle, id: &mut Guid) -> FmodResult;
    fn bank_get_path(&self, bank: RawHandle, path: &mut [u8], retrieved: &mut i32) -> FmodResult;
    fn bank_unload(&self, bank: RawHandle) -> FmodResult;
    fn bank_load_sample_data(&self, bank: RawHandle) -> FmodResult;
    fn bank_unload_sample_data(&self, bank: RawHandle) -> FmodResult;
    fn bank_get_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult;
    fn bank_get_sample_loading_state(&self, bank: RawHandle, state: &mut i32) -> FmodResult;
    fn bank_get_event_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult;
    fn bank_get_event_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult;
    fn bank_get_mixer_strip_count(&self, bank: RawHandle, count: &mut i32) -> FmodResult;
    fn bank_get_mixer_strip_list(&self, bank: RawHandle, array: &mut [RawHandle], count: &mut i32) -> FmodResult;
}
