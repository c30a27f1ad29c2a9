use crate::handles::base::{studio_handle, ChannelGroup};
use crate::handles::cue_instance::CueInstance;
use crate::handles::event_description::EventDescription;
use crate::handles::marshal::{check, from_native_bool, to_cstring, to_native_bool};
use crate::handles::parameter_instance::ParameterInstance;
use crate::handles::raw::RawHandle;
use crate::models::error::StudioError;
use crate::models::modes::{LoadingState, PlaybackState, StopMode};
use crate::models::spatial::Attributes3d;
use crate::traits::entry_points as ep;
use crate::traits::studio_api::EventCallback;

studio_handle! {
    /// A live occurrence of an event (`FMOD_STUDIO_EVENTINSTANCE`).
    EventInstance
}

impl EventInstance {
    pub fn description(&self) -> Result<EventDescription, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_DESCRIPTION,
            self.base
                .api()
                .event_instance_get_description(self.base.raw(), &mut raw),
        )?;
        Ok(EventDescription::from_base(self.base.sibling(raw)))
    }

    pub fn volume(&self) -> Result<f32, StudioError> {
        let mut volume = 0.0;
        check(
            ep::EVENT_INSTANCE_GET_VOLUME,
            self.base.api().event_instance_get_volume(self.base.raw(), &mut volume),
        )?;
        Ok(volume)
    }

    pub fn set_volume(&self, volume: f32) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_VOLUME,
            self.base.api().event_instance_set_volume(self.base.raw(), volume),
        )
    }

    pub fn pitch(&self) -> Result<f32, StudioError> {
        let mut pitch = 0.0;
        check(
            ep::EVENT_INSTANCE_GET_PITCH,
            self.base.api().event_instance_get_pitch(self.base.raw(), &mut pitch),
        )?;
        Ok(pitch)
    }

    pub fn set_pitch(&self, pitch: f32) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_PITCH,
            self.base.api().event_instance_set_pitch(self.base.raw(), pitch),
        )
    }

    pub fn attributes_3d(&self) -> Result<Attributes3d, StudioError> {
        let mut attributes = Attributes3d::default();
        check(
            ep::EVENT_INSTANCE_GET_3D_ATTRIBUTES,
            self.base
                .api()
                .event_instance_get_3d_attributes(self.base.raw(), &mut attributes),
        )?;
        Ok(attributes)
    }

    pub fn set_attributes_3d(&self, attributes: &Attributes3d) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_3D_ATTRIBUTES,
            self.base
                .api()
                .event_instance_set_3d_attributes(self.base.raw(), attributes),
        )
    }

    pub fn paused(&self) -> Result<bool, StudioError> {
        let mut paused = 0;
        check(
            ep::EVENT_INSTANCE_GET_PAUSED,
            self.base.api().event_instance_get_paused(self.base.raw(), &mut paused),
        )?;
        Ok(from_native_bool(paused))
    }

    pub fn set_paused(&self, paused: bool) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_PAUSED,
            self.base
                .api()
                .event_instance_set_paused(self.base.raw(), to_native_bool(paused)),
        )
    }

    pub fn start(&self) -> Result<(), StudioError> {
        check(ep::EVENT_INSTANCE_START, self.base.api().event_instance_start(self.base.raw()))
    }

    pub fn stop(&self, mode: StopMode) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_STOP,
            self.base.api().event_instance_stop(self.base.raw(), mode.raw()),
        )
    }

    /// Timeline position in milliseconds.
    pub fn timeline_position(&self) -> Result<i32, StudioError> {
        let mut position = 0;
        check(
            ep::EVENT_INSTANCE_GET_TIMELINE_POSITION,
            self.base
                .api()
                .event_instance_get_timeline_position(self.base.raw(), &mut position),
        )?;
        Ok(position)
    }

    pub fn set_timeline_position(&self, position: i32) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_TIMELINE_POSITION,
            self.base
                .api()
                .event_instance_set_timeline_position(self.base.raw(), position),
        )
    }

    pub fn playback_state(&self) -> Result<PlaybackState, StudioError> {
        let mut state = 0;
        check(
            ep::EVENT_INSTANCE_GET_PLAYBACK_STATE,
            self.base
                .api()
                .event_instance_get_playback_state(self.base.raw(), &mut state),
        )?;
        PlaybackState::try_from(state)
    }

    pub fn channel_group(&self) -> Result<ChannelGroup, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_CHANNEL_GROUP,
            self.base
                .api()
                .event_instance_get_channel_group(self.base.raw(), &mut raw),
        )?;
        Ok(ChannelGroup::from_raw(raw))
    }

    /// Mark the instance for destruction. The native side frees it once it
    /// has stopped; the wrapper keeps its reference either way.
    pub fn release(&self) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_RELEASE,
            self.base.api().event_instance_release(self.base.raw()),
        )
    }

    /// True when the instance was virtualized by the voice limiter.
    pub fn is_virtual(&self) -> Result<bool, StudioError> {
        let mut virtual_state = 0;
        check(
            ep::EVENT_INSTANCE_IS_VIRTUAL,
            self.base
                .api()
                .event_instance_is_virtual(self.base.raw(), &mut virtual_state),
        )?;
        Ok(from_native_bool(virtual_state))
    }

    pub fn parameter(&self, name: &str) -> Result<ParameterInstance, StudioError> {
        let name = to_cstring(name)?;
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_PARAMETER,
            self.base
                .api()
                .event_instance_get_parameter(self.base.raw(), &name, &mut raw),
        )?;
        Ok(ParameterInstance::from_base(self.base.sibling(raw)))
    }

    pub fn parameter_by_index(&self, index: i32) -> Result<ParameterInstance, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_PARAMETER_BY_INDEX,
            self.base
                .api()
                .event_instance_get_parameter_by_index(self.base.raw(), index, &mut raw),
        )?;
        Ok(ParameterInstance::from_base(self.base.sibling(raw)))
    }

    pub fn parameter_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::EVENT_INSTANCE_GET_PARAMETER_COUNT,
            self.base
                .api()
                .event_instance_get_parameter_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn set_parameter_value(&self, name: &str, value: f32) -> Result<(), StudioError> {
        let name = to_cstring(name)?;
        check(
            ep::EVENT_INSTANCE_SET_PARAMETER_VALUE,
            self.base
                .api()
                .event_instance_set_parameter_value(self.base.raw(), &name, value),
        )
    }

    pub fn set_parameter_value_by_index(&self, index: i32, value: f32) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_PARAMETER_VALUE_BY_INDEX,
            self.base
                .api()
                .event_instance_set_parameter_value_by_index(self.base.raw(), index, value),
        )
    }

    pub fn cue(&self, name: &str) -> Result<CueInstance, StudioError> {
        let name = to_cstring(name)?;
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_CUE,
            self.base
                .api()
                .event_instance_get_cue(self.base.raw(), &name, &mut raw),
        )?;
        Ok(CueInstance::from_base(self.base.sibling(raw)))
    }

    pub fn cue_by_index(&self, index: i32) -> Result<CueInstance, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_GET_CUE_BY_INDEX,
            self.base
                .api()
                .event_instance_get_cue_by_index(self.base.raw(), index, &mut raw),
        )?;
        Ok(CueInstance::from_base(self.base.sibling(raw)))
    }

    pub fn cue_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::EVENT_INSTANCE_GET_CUE_COUNT,
            self.base
                .api()
                .event_instance_get_cue_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn create_sub_event(&self, name: &str) -> Result<EventInstance, StudioError> {
        let name = to_cstring(name)?;
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_INSTANCE_CREATE_SUB_EVENT,
            self.base
                .api()
                .event_instance_create_sub_event(self.base.raw(), &name, &mut raw),
        )?;
        Ok(Self::from_base(self.base.sibling(raw)))
    }

    pub fn loading_state(&self) -> Result<LoadingState, StudioError> {
        let mut state = 0;
        check(
            ep::EVENT_INSTANCE_GET_LOADING_STATE,
            self.base
                .api()
                .event_instance_get_loading_state(self.base.raw(), &mut state),
        )?;
        LoadingState::try_from(state)
    }

    pub fn set_callback(&self, callback: Option<EventCallback>) -> Result<(), StudioError> {
        check(
            ep::EVENT_INSTANCE_SET_CALLBACK,
            self.base
                .api()
                .event_instance_set_callback(self.base.raw(), callback),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use approx::assert_relative_eq;

    use super::*;
    use crate::handles::base::StudioHandle;
    use crate::handles::testing::{forest_instance, loaded_master_bank};
    use crate::models::result::FmodResult;
    use crate::models::spatial::Vector;

    #[test]
    fn defaults_after_create() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        assert_relative_eq!(instance.volume().unwrap(), 1.0);
        assert_relative_eq!(instance.pitch().unwrap(), 1.0);
        assert!(!instance.paused().unwrap());
        assert!(!instance.is_virtual().unwrap());
        assert_eq!(instance.playback_state().unwrap(), PlaybackState::Stopped);
        assert_eq!(instance.loading_state().unwrap(), LoadingState::Loaded);
        assert_eq!(instance.timeline_position().unwrap(), 0);
    }

    #[test]
    fn scalar_properties_round_trip() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);

        instance.set_volume(0.35).unwrap();
        instance.set_pitch(1.5).unwrap();
        instance.set_paused(true).unwrap();
        instance.set_timeline_position(1200).unwrap();

        assert_relative_eq!(instance.volume().unwrap(), 0.35);
        assert_relative_eq!(instance.pitch().unwrap(), 1.5);
        assert!(instance.paused().unwrap());
        assert_eq!(instance.timeline_position().unwrap(), 1200);

        instance.set_paused(false).unwrap();
        assert!(!instance.paused().unwrap());
    }

    #[test]
    fn attributes_round_trip() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        let mut attributes = Attributes3d::at(Vector::new(4.0, 0.0, 9.5));
        attributes.velocity = Vector::new(1.0, 0.0, 0.0);
        instance.set_attributes_3d(&attributes).unwrap();
        assert_eq!(instance.attributes_3d().unwrap(), attributes);
    }

    #[test]
    fn start_and_stop() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        instance.start().unwrap();
        assert_eq!(instance.playback_state().unwrap(), PlaybackState::Playing);
        instance.stop(StopMode::AllowFadeout).unwrap();
        assert_eq!(instance.playback_state().unwrap(), PlaybackState::Stopped);
    }

    #[test]
    fn failed_setter_keeps_previous_value() {
        let (studio, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        instance.set_volume(0.5).unwrap();
        studio.fail_next(ep::EVENT_INSTANCE_SET_VOLUME, FmodResult::InvalidFloat);
        assert_eq!(
            instance.set_volume(f32::NAN).unwrap_err().code(),
            Some(FmodResult::InvalidFloat)
        );
        assert_relative_eq!(instance.volume().unwrap(), 0.5);
    }

    #[test]
    fn parameters_by_name_and_index() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        assert_eq!(instance.parameter_count().unwrap(), 2);

        instance.set_parameter_value("Wind", 0.75).unwrap();
        assert_relative_eq!(instance.parameter("Wind").unwrap().value().unwrap(), 0.75);

        instance.set_parameter_value_by_index(1, 12.0).unwrap();
        let distance = instance.parameter_by_index(1).unwrap();
        assert_eq!(distance.description().unwrap().name, "Distance");
        assert_relative_eq!(distance.value().unwrap(), 12.0);

        assert_eq!(instance.parameter("Wind").unwrap(), instance.parameter_by_index(0).unwrap());
    }

    #[test]
    fn unknown_parameter_and_cue() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        assert_eq!(
            instance.set_parameter_value("Rain", 1.0).unwrap_err().code(),
            Some(FmodResult::EventNotFound)
        );
        assert_eq!(
            instance.set_parameter_value_by_index(5, 1.0).unwrap_err().code(),
            Some(FmodResult::InvalidParam)
        );
        assert_eq!(instance.cue("Missing").unwrap_err().code(), Some(FmodResult::EventNotFound));
        assert!(matches!(instance.cue("Key\0Off"), Err(StudioError::InvalidString(_))));
    }

    #[test]
    fn cues() {
        let (studio, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        assert_eq!(instance.cue_count().unwrap(), 1);
        let cue = instance.cue("KeyOff").unwrap();
        assert_eq!(cue, instance.cue_by_index(0).unwrap());
        cue.trigger().unwrap();
        assert_eq!(studio.cue_trigger_count(cue.raw()), 1);
    }

    #[test]
    fn sub_events() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        let birds = instance.create_sub_event("Birds").unwrap();
        assert_ne!(birds, instance);
        assert_eq!(
            birds.description().unwrap().path().unwrap(),
            "event:/Ambience/Forest/Birds"
        );
        assert_eq!(
            instance.create_sub_event("Owls").unwrap_err().code(),
            Some(FmodResult::EventNotFound)
        );
    }

    #[test]
    fn channel_group_is_opaque() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        let group = instance.channel_group().unwrap();
        assert!(group.is_valid());
        assert_eq!(group, instance.channel_group().unwrap());
    }

    #[test]
    fn release_invalidates_native_object() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        instance.release().unwrap();
        assert!(instance.is_valid());
        assert_eq!(instance.start().unwrap_err().code(), Some(FmodResult::InvalidHandle));
    }

    static STOPS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "system" fn count_stops(kind: i32, _parameters: *mut c_void) -> i32 {
        if kind == crate::models::modes::EventCallbackType::Stopped.raw() {
            STOPS.fetch_add(1, Ordering::SeqCst);
        }
        FmodResult::Ok.raw()
    }

    #[test]
    fn instance_callback_fires_on_update() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        instance.set_callback(Some(count_stops)).unwrap();
        instance.start().unwrap();
        instance.stop(StopMode::Immediate).unwrap();

        let before = STOPS.load(Ordering::SeqCst);
        system.update().unwrap();
        assert_eq!(STOPS.load(Ordering::SeqCst), before + 1);

        system.update().unwrap();
        assert_eq!(STOPS.load(Ordering::SeqCst), before + 1);
    }
}
