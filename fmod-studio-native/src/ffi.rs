//! Raw `FMOD_Studio_*` declarations.
//!
//! Handles are `*mut c_void`; `FMOD_BOOL` and every native enumeration are
//! `c_int`; flag masks are `c_uint`. Structs come from the core crate, which
//! mirrors their native layout.

use std::ffi::{c_char, c_int, c_uint, c_void};

use fmod_studio_core::models::guid::Guid;
use fmod_studio_core::models::parameter::RawParameterDescription;
use fmod_studio_core::models::settings::{AdvancedSettings, CpuUsage};
use fmod_studio_core::models::spatial::Attributes3d;
use fmod_studio_core::EventCallback;

pub type Handle = *mut c_void;

#[link(name = "fmodstudio")]
extern "system" {
    pub fn FMOD_Studio_System_Create(system: *mut Handle, header_version: c_uint) -> c_int;
    pub fn FMOD_Studio_ParseID(id_string: *const c_char, id: *mut Guid) -> c_int;

    pub fn FMOD_Studio_System_SetAdvancedSettings(system: Handle, settings: *mut AdvancedSettings) -> c_int;
    pub fn FMOD_Studio_System_GetAdvancedSettings(system: Handle, settings: *mut AdvancedSettings) -> c_int;
    pub fn FMOD_Studio_System_Initialize(
        system: Handle,
        max_channels: c_int,
        studio_flags: c_uint,
        flags: c_uint,
        extra_driver_data: *mut c_void,
    ) -> c_int;
    pub fn FMOD_Studio_System_Release(system: Handle) -> c_int;
    pub fn FMOD_Studio_System_Update(system: Handle) -> c_int;
    pub fn FMOD_Studio_System_GetLowLevelSystem(system: Handle, low_level: *mut Handle) -> c_int;
    pub fn FMOD_Studio_System_GetEvent(system: Handle, id: *const Guid, mode: c_int, description: *mut Handle) -> c_int;
    pub fn FMOD_Studio_System_GetMixerStrip(system: Handle, id: *const Guid, mode: c_int, strip: *mut Handle) -> c_int;
    pub fn FMOD_Studio_System_GetBank(system: Handle, id: *const Guid, bank: *mut Handle) -> c_int;
    pub fn FMOD_Studio_System_LookupID(system: Handle, path: *const c_char, id: *mut Guid) -> c_int;
    pub fn FMOD_Studio_System_LookupPath(
        system: Handle,
        id: *const Guid,
        path: *mut c_char,
        size: c_int,
        retrieved: *mut c_int,
    ) -> c_int;
    pub fn FMOD_Studio_System_GetListenerAttributes(system: Handle, attributes: *mut Attributes3d) -> c_int;
    pub fn FMOD_Studio_System_SetListenerAttributes(system: Handle, attributes: *const Attributes3d) -> c_int;
    pub fn FMOD_Studio_System_LoadBankFile(
        system: Handle,
        filename: *const c_char,
        flags: c_uint,
        bank: *mut Handle,
    ) -> c_int;
    pub fn FMOD_Studio_System_LoadBankMemory(
        system: Handle,
        buffer: *const c_char,
        length: c_int,
        mode: c_int,
        flags: c_uint,
        bank: *mut Handle,
    ) -> c_int;
    pub fn FMOD_Studio_System_UnloadAll(system: Handle) -> c_int;
    pub fn FMOD_Studio_System_FlushCommands(system: Handle) -> c_int;
    pub fn FMOD_Studio_System_StartRecordCommands(system: Handle, path: *const c_char, flags: c_uint) -> c_int;
    pub fn FMOD_Studio_System_StopRecordCommands(system: Handle) -> c_int;
    pub fn FMOD_Studio_System_PlaybackCommands(system: Handle, path: *const c_char) -> c_int;
    pub fn FMOD_Studio_System_GetBankCount(system: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_System_GetBankList(system: Handle, array: *mut Handle, capacity: c_int, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_System_GetCPUUsage(system: Handle, usage: *mut CpuUsage) -> c_int;

    pub fn FMOD_Studio_EventDescription_GetID(description: Handle, id: *mut Guid) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetPath(
        description: Handle,
        path: *mut c_char,
        size: c_int,
        retrieved: *mut c_int,
    ) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetParameterCount(description: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetParameterByIndex(
        description: Handle,
        index: c_int,
        parameter: *mut RawParameterDescription,
    ) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetParameter(
        description: Handle,
        name: *const c_char,
        parameter: *mut RawParameterDescription,
    ) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetUserPropertyCount(description: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetLength(description: Handle, length: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetMinimumDistance(description: Handle, distance: *mut f32) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetMaximumDistance(description: Handle, distance: *mut f32) -> c_int;
    pub fn FMOD_Studio_EventDescription_IsOneshot(description: Handle, oneshot: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_IsStream(description: Handle, is_stream: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_Is3D(description: Handle, is_3d: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_CreateInstance(description: Handle, instance: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetInstanceCount(description: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventDescription_GetInstanceList(
        description: Handle,
        array: *mut Handle,
        capacity: c_int,
        count: *mut c_int,
    ) -> c_int;
    pub fn FMOD_Studio_EventDescription_ReleaseAllInstances(description: Handle) -> c_int;
    pub fn FMOD_Studio_EventDescription_SetCallback(description: Handle, callback: Option<EventCallback>) -> c_int;

    pub fn FMOD_Studio_EventInstance_GetDescription(instance: Handle, description: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetVolume(instance: Handle, volume: *mut f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetVolume(instance: Handle, volume: f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetPitch(instance: Handle, pitch: *mut f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetPitch(instance: Handle, pitch: f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_Get3DAttributes(instance: Handle, attributes: *mut Attributes3d) -> c_int;
    pub fn FMOD_Studio_EventInstance_Set3DAttributes(instance: Handle, attributes: *const Attributes3d) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetPaused(instance: Handle, paused: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetPaused(instance: Handle, paused: c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_Start(instance: Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_Stop(instance: Handle, mode: c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetTimelinePosition(instance: Handle, position: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetTimelinePosition(instance: Handle, position: c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetPlaybackState(instance: Handle, state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetChannelGroup(instance: Handle, group: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_Release(instance: Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_IsVirtual(instance: Handle, virtual_state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetParameter(instance: Handle, name: *const c_char, parameter: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetParameterByIndex(instance: Handle, index: c_int, parameter: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetParameterCount(instance: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetParameterValue(instance: Handle, name: *const c_char, value: f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetParameterValueByIndex(instance: Handle, index: c_int, value: f32) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetCue(instance: Handle, name: *const c_char, cue: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetCueByIndex(instance: Handle, index: c_int, cue: *mut Handle) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetCueCount(instance: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_CreateSubEvent(
        instance: Handle,
        name: *const c_char,
        sub_instance: *mut Handle,
    ) -> c_int;
    pub fn FMOD_Studio_EventInstance_GetLoadingState(instance: Handle, state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_EventInstance_SetCallback(instance: Handle, callback: Option<EventCallback>) -> c_int;

    pub fn FMOD_Studio_CueInstance_Trigger(cue: Handle) -> c_int;

    pub fn FMOD_Studio_ParameterInstance_GetDescription(
        parameter: Handle,
        description: *mut RawParameterDescription,
    ) -> c_int;
    pub fn FMOD_Studio_ParameterInstance_GetValue(parameter: Handle, value: *mut f32) -> c_int;
    pub fn FMOD_Studio_ParameterInstance_SetValue(parameter: Handle, value: f32) -> c_int;

    pub fn FMOD_Studio_MixerStrip_GetID(strip: Handle, id: *mut Guid) -> c_int;
    pub fn FMOD_Studio_MixerStrip_GetPath(strip: Handle, path: *mut c_char, size: c_int, retrieved: *mut c_int) -> c_int;
    pub fn FMOD_Studio_MixerStrip_GetFaderLevel(strip: Handle, level: *mut f32) -> c_int;
    pub fn FMOD_Studio_MixerStrip_SetFaderLevel(strip: Handle, level: f32) -> c_int;
    pub fn FMOD_Studio_MixerStrip_GetPaused(strip: Handle, paused: *mut c_int) -> c_int;
    pub fn FMOD_Studio_MixerStrip_SetPaused(strip: Handle, paused: c_int) -> c_int;
    pub fn FMOD_Studio_MixerStrip_StopAllEvents(strip: Handle, mode: c_int) -> c_int;
    pub fn FMOD_Studio_MixerStrip_GetLoadingState(strip: Handle, state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_MixerStrip_Release(strip: Handle) -> c_int;

    pub fn FMOD_Studio_Bank_GetID(bank: Handle, id: *mut Guid) -> c_int;
    pub fn FMOD_Studio_Bank_GetPath(bank: Handle, path: *mut c_char, size: c_int, retrieved: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_Unload(bank: Handle) -> c_int;
    pub fn FMOD_Studio_Bank_LoadSampleData(bank: Handle) -> c_int;
    pub fn FMOD_Studio_Bank_UnloadSampleData(bank: Handle) -> c_int;
    pub fn FMOD_Studio_Bank_GetLoadingState(bank: Handle, state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_GetSampleLoadingState(bank: Handle, state: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_GetEventCount(bank: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_GetEventList(bank: Handle, array: *mut Handle, capacity: c_int, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_GetMixerStripCount(bank: Handle, count: *mut c_int) -> c_int;
    pub fn FMOD_Studio_Bank_GetMixerStripList(
        bank: Handle,
        array: *mut Handle,
        capacity: c_int,
        count: *mut c_int,
    ) -> c_int;
}
