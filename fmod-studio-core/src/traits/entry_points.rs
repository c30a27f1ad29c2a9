//! Names of the native entry points, used in errors, logs and call records.

pub const SYSTEM_CREATE: &str = "FMOD_Studio_System_Create";
pub const PARSE_ID: &str = "FMOD_Studio_ParseID";

pub const SYSTEM_SET_ADVANCED_SETTINGS: &str = "FMOD_Studio_System_SetAdvancedSettings";
pub const SYSTEM_GET_ADVANCED_SETTINGS: &str = "FMOD_Studio_System_GetAdvancedSettings";
pub const SYSTEM_INITIALIZE: &str = "FMOD_Studio_System_Initialize";
pub const SYSTEM_RELEASE: &str = "FMOD_Studio_System_Release";
pub const SYSTEM_UPDATE: &str = "FMOD_Studio_System_Update";
pub const SYSTEM_GET_LOW_LEVEL_SYSTEM: &str = "FMOD_Studio_System_GetLowLevelSystem";
pub const SYSTEM_GET_EVENT: &str = "FMOD_Studio_System_GetEvent";
pub const SYSTEM_GET_MIXER_STRIP: &str = "FMOD_Studio_System_GetMixerStrip";
pub const SYSTEM_GET_BANK: &str = "FMOD_Studio_System_GetBank";
pub const SYSTEM_LOOKUP_ID: &str = "FMOD_Studio_System_LookupID";
pub const SYSTEM_LOOKUP_PATH: &str = "FMOD_Studio_System_LookupPath";
pub const SYSTEM_GET_LISTENER_ATTRIBUTES: &str = "FMOD_Studio_System_GetListenerAttributes";
pub const SYSTEM_SET_LISTENER_ATTRIBUTES: &str = "FMOD_Studio_System_SetListenerAttributes";
pub const SYSTEM_LOAD_BANK_FILE: &str = "FMOD_Studio_System_LoadBankFile";
pub const SYSTEM_LOAD_BANK_MEMORY: &str = "FMOD_Studio_System_LoadBankMemory";
pub const SYSTEM_UNLOAD_ALL: &str = "FMOD_Studio_System_UnloadAll";
pub const SYSTEM_FLUSH_COMMANDS: &str = "FMOD_Studio_System_FlushCommands";
pub const SYSTEM_START_RECORD_COMMANDS: &str = "FMOD_Studio_System_StartRecordCommands";
pub const SYSTEM_STOP_RECORD_COMMANDS: &str = "FMOD_Studio_System_StopRecordCommands";
pub const SYSTEM_PLAYBACK_COMMANDS: &str = "FMOD_Studio_System_PlaybackCommands";
pub const SYSTEM_GET_BANK_COUNT: &str = "FMOD_Studio_System_GetBankCount";
pub const SYSTEM_GET_BANK_LIST: &str = "FMOD_Studio_System_GetBankList";
pub const SYSTEM_GET_CPU_USAGE: &str = "FMOD_Studio_System_GetCPUUsage";

pub const EVENT_DESCRIPTION_GET_ID: &str = "FMOD_Studio_EventDescription_GetID";
pub const EVENT_DESCRIPTION_GET_PATH: &str = "FMOD_Studio_EventDescription_GetPath";
pub const EVENT_DESCRIPTION_GET_PARAMETER_COUNT: &str = "FMOD_Studio_EventDescription_GetParameterCount";
pub const EVENT_DESCRIPTION_GET_PARAMETER_BY_INDEX: &str = "FMOD_Studio_EventDescription_GetParameterByIndex";
pub const EVENT_DESCRIPTION_GET_PARAMETER: &str = "FMOD_Studio_EventDescription_GetParameter";
pub const EVENT_DESCRIPTION_GET_USER_PROPERTY_COUNT: &str = "FMOD_Studio_EventDescription_GetUserPropertyCount";
pub const EVENT_DESCRIPTION_GET_LENGTH: &str = "FMOD_Studio_EventDescription_GetLength";
pub const EVENT_DESCRIPTION_GET_MINIMUM_DISTANCE: &str = "FMOD_Studio_EventDescription_GetMinimumDistance";
pub const EVENT_DESCRIPTION_GET_MAXIMUM_DISTANCE: &str = "FMOD_Studio_EventDescription_GetMaximumDistance";
pub const EVENT_DESCRIPTION_IS_ONESHOT: &str = "FMOD_Studio_EventDescription_IsOneshot";
pub const EVENT_DESCRIPTION_IS_STREAM: &str = "FMOD_Studio_EventDescription_IsStream";
pub const EVENT_DESCRIPTION_IS_3D: &str = "FMOD_Studio_EventDescription_Is3D";
pub const EVENT_DESCRIPTION_CREATE_INSTANCE: &str = "FMOD_Studio_EventDescription_CreateInstance";
pub const EVENT_DESCRIPTION_GET_INSTANCE_COUNT: &str = "FMOD_Studio_EventDescription_GetInstanceCount";
pub const EVENT_DESCRIPTION_GET_INSTANCE_LIST: &str = "FMOD_Studio_EventDescription_GetInstanceList";
pub const EVENT_DESCRIPTION_RELEASE_ALL_INSTANCES: &str = "FMOD_Studio_EventDescription_ReleaseAllInstances";
pub const EVENT_DESCRIPTION_SET_CALLBACK: &str = "FMOD_Studio_EventDescription_SetCallback";

pub const EVENT_INSTANCE_GET_DESCRIPTION: &str = "FMOD_Studio_EventInstance_GetDescription";
pub const EVENT_INSTANCE_GET_VOLUME: &str = "FMOD_Studio_EventInstance_GetVolume";
pub const EVENT_INSTANCE_SET_VOLUME: &str = "FMOD_Studio_EventInstance_SetVolume";
pub const EVENT_INSTANCE_GET_PITCH: &str = "FMOD_Studio_EventInstance_GetPitch";
pub const EVENT_INSTANCE_SET_PITCH: &str = "FMOD_Studio_EventInstance_SetPitch";
pub const EVENT_INSTANCE_GET_3D_ATTRIBUTES: &str = "FMOD_Studio_EventInstance_Get3DAttributes";
pub const EVENT_INSTANCE_SET_3D_ATTRIBUTES: &str = "FMOD_Studio_EventInstance_Set3DAttributes";
pub const EVENT_INSTANCE_GET_PAUSED: &str = "FMOD_Studio_EventInstance_GetPaused";
pub const EVENT_INSTANCE_SET_PAUSED: &str = "FMOD_Studio_EventInstance_SetPaused";
pub const EVENT_INSTANCE_START: &str = "FMOD_Studio_EventInstance_Start";
pub const EVENT_INSTANCE_STOP: &str = "FMOD_Studio_EventInstance_Stop";
pub const EVENT_INSTANCE_GET_TIMELINE_POSITION: &str = "FMOD_Studio_EventInstance_GetTimelinePosition";
pub const EVENT_INSTANCE_SET_TIMELINE_POSITION: &str = "FMOD_Studio_EventInstance_SetTimelinePosition";
pub const EVENT_INSTANCE_GET_PLAYBACK_STATE: &str = "FMOD_Studio_EventInstance_GetPlaybackState";
pub const EVENT_INSTANCE_GET_CHANNEL_GROUP: &str = "FMOD_Studio_EventInstance_GetChannelGroup";
pub const EVENT_INSTANCE_RELEASE: &str = "FMOD_Studio_EventInstance_Release";
pub const EVENT_INSTANCE_IS_VIRTUAL: &str = "FMOD_Studio_EventInstance_IsVirtual";
pub const EVENT_INSTANCE_GET_PARAMETER: &str = "FMOD_Studio_EventInstance_GetParameter";
pub const EVENT_INSTANCE_GET_PARAMETER_BY_INDEX: &str = "FMOD_Studio_EventInstance_GetParameterByIndex";
pub const EVENT_INSTANCE_GET_PARAMETER_COUNT: &str = "FMOD_Studio_EventInstance_GetParameterCount";
pub const EVENT_INSTANCE_SET_PARAMETER_VALUE: &str = "FMOD_Studio_EventInstance_SetParameterValue";
pub const EVENT_INSTANCE_SET_PARAMETER_VALUE_BY_INDEX: &str = "FMOD_Studio_EventInstance_SetParameterValueByIndex";
pub const EVENT_INSTANCE_GET_CUE: &str = "FMOD_Studio_EventInstance_GetCue";
pub const EVENT_INSTANCE_GET_CUE_BY_INDEX: &str = "FMOD_Studio_EventInstance_GetCueByIndex";
pub const EVENT_INSTANCE_GET_CUE_COUNT: &str = "FMOD_Studio_EventInstance_GetCueCount";
pub const EVENT_INSTANCE_CREATE_SUB_EVENT: &str = "FMOD_Studio_EventInstance_CreateSubEvent";
pub const EVENT_INSTANCE_GET_LOADING_STATE: &str = "FMOD_Studio_EventInstance_GetLoadingState";
pub const EVENT_INSTANCE_SET_CALLBACK: &str = "FMOD_Studio_EventInstance_SetCallback";

pub const CUE_INSTANCE_TRIGGER: &str = "FMOD_Studio_CueInstance_Trigger";

pub const PARAMETER_INSTANCE_GET_DESCRIPTION: &str = "FMOD_Studio_ParameterInstance_GetDescription";
pub const PARAMETER_INSTANCE_GET_VALUE: &str = "FMOD_Studio_ParameterInstance_GetValue";
pub const PARAMETER_INSTANCE_SET_VALUE: &str = "FMOD_Studio_ParameterInstance_SetValue";

pub const MIXER_STRIP_GET_ID: &str = "FMOD_Studio_MixerStrip_GetID";
pub const MIXER_STRIP_GET_PATH: &str = "FMOD_Studio_MixerStrip_GetPath";
pub const MIXER_STRIP_GET_FADER_LEVEL: &str = "FMOD_Studio_MixerStrip_GetFaderLevel";
pub const MIXER_STRIP_SET_FADER_LEVEL: &str = "FMOD_Studio_MixerStrip_SetFaderLevel";
pub const MIXER_STRIP_GET_PAUSED: &str = "FMOD_Studio_MixerStrip_GetPaused";
pub const MIXER_STRIP_SET_PAUSED: &str = "FMOD_Studio_MixerStrip_SetPaused";
pub const MIXER_STRIP_STOP_ALL_EVENTS: &str = "FMOD_Studio_MixerStrip_StopAllEvents";
pub const MIXER_STRIP_GET_LOADING_STATE: &str = "FMOD_Studio_MixerStrip_GetLoadingState";
pub const MIXER_STRIP_RELEASE: &str = "FMOD_Studio_MixerStrip_Release";

pub const BANK_GET_ID: &str = "FMOD_Studio_Bank_GetID";
pub const BANK_GET_PATH: &str = "FMOD_Studio_Bank_GetPath";
pub const BANK_UNLOAD: &str = "FMOD_Studio_Bank_Unload";
pub const BANK_LOAD_SAMPLE_DATA: &str = "FMOD_Studio_Bank_LoadSampleData";
pub const BANK_UNLOAD_SAMPLE_DATA: &str = "FMOD_Studio_Bank_UnloadSampleData";
pub const BANK_GET_LOADING_STATE: &str = "FMOD_Studio_Bank_GetLoadingState";
pub const BANK_GET_SAMPLE_LOADING_STATE: &str = "FMOD_Studio_Bank_GetSampleLoadingState";
pub const BANK_GET_EVENT_COUNT: &str = "FMOD_Studio_Bank_GetEventCount";
pub const BANK_GET_EVENT_LIST: &str = "FMOD_Studio_Bank_GetEventList";
pub const BANK_GET_MIXER_STRIP_COUNT: &str = "FMOD_Studio_Bank_GetMixerStripCount";
pub const BANK_GET_MIXER_STRIP_LIST: &str = "FMOD_Studio_Bank_GetMixerStripList";
