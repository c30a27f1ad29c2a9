use crate::handles::base::studio_handle;
use crate::handles::marshal::{check, fetch_string, from_native_bool, to_native_bool};
use crate::models::error::StudioError;
use crate::models::guid::Guid;
use crate::models::modes::{LoadingState, StopMode};
use crate::traits::entry_points as ep;

studio_handle! {
    /// A bus or VCA in the mixing graph (`FMOD_STUDIO_MIXERSTRIP`).
    MixerStrip
}

impl MixerStrip {
    pub fn id(&self) -> Result<Guid, StudioError> {
        let mut id = Guid::default();
        check(ep::MIXER_STRIP_GET_ID, self.base.api().mixer_strip_get_id(self.base.raw(), &mut id))?;
        Ok(id)
    }

    pub fn path(&self) -> Result<String, StudioError> {
        fetch_string(ep::MIXER_STRIP_GET_PATH, |buffer, retrieved| {
            self.base
                .api()
                .mixer_strip_get_path(self.base.raw(), buffer, retrieved)
        })
    }

    pub fn fader_level(&self) -> Result<f32, StudioError> {
        let mut level = 0.0;
        check(
            ep::MIXER_STRIP_GET_FADER_LEVEL,
            self.base
                .api()
                .mixer_strip_get_fader_level(self.base.raw(), &mut level),
        )?;
        Ok(level)
    }

    pub fn set_fader_level(&self, level: f32) -> Result<(), StudioError> {
        check(
            ep::MIXER_STRIP_SET_FADER_LEVEL,
            self.base.api().mixer_strip_set_fader_level(self.base.raw(), level),
        )
    }

    pub fn paused(&self) -> Result<bool, StudioError> {
        let mut paused = 0;
        check(
            ep::MIXER_STRIP_GET_PAUSED,
            self.base.api().mixer_strip_get_paused(self.base.raw(), &mut paused),
        )?;
        Ok(from_native_bool(paused))
    }

    pub fn set_paused(&self, paused: bool) -> Result<(), StudioError> {
        check(
            ep::MIXER_STRIP_SET_PAUSED,
            self.base
                .api()
                .mixer_strip_set_paused(self.base.raw(), to_native_bool(paused)),
        )
    }

    /// Stop every event instance routed through this strip.
    pub fn stop_all_events(&self, mode: StopMode) -> Result<(), StudioError> {
        check(
            ep::MIXER_STRIP_STOP_ALL_EVENTS,
            self.base
                .api()
                .mixer_strip_stop_all_events(self.base.raw(), mode.raw()),
        )
    }

    pub fn loading_state(&self) -> Result<LoadingState, StudioError> {
        let mut state = 0;
        check(
            ep::MIXER_STRIP_GET_LOADING_STATE,
            self.base
                .api()
                .mixer_strip_get_loading_state(self.base.raw(), &mut state),
        )?;
        LoadingState::try_from(state)
    }

    pub fn release(&self) -> Result<(), StudioError> {
        check(ep::MIXER_STRIP_RELEASE, self.base.api().mixer_strip_release(self.base.raw()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::handles::testing::{forest_instance, loaded_master_bank};
    use crate::models::modes::{LoadingMode, PlaybackState};
    use crate::models::result::FmodResult;
    use crate::simulated::simulated_id;

    fn sfx_bus(system: &crate::handles::system::System) -> MixerStrip {
        system
            .mixer_strip(&simulated_id("bus:/SFX"), LoadingMode::BeginNow)
            .unwrap()
    }

    #[test]
    fn identity() {
        let (_, system, _) = loaded_master_bank();
        let bus = sfx_bus(&system);
        assert_eq!(bus.id().unwrap(), simulated_id("bus:/SFX"));
        assert_eq!(bus.path().unwrap(), "bus:/SFX");
        assert_eq!(bus.loading_state().unwrap(), LoadingState::Loaded);
    }

    #[test]
    fn fader_and_pause_round_trip() {
        let (_, system, _) = loaded_master_bank();
        let bus = sfx_bus(&system);
        assert_relative_eq!(bus.fader_level().unwrap(), 1.0);

        bus.set_fader_level(0.25).unwrap();
        bus.set_paused(true).unwrap();
        assert_relative_eq!(bus.fader_level().unwrap(), 0.25);
        assert!(bus.paused().unwrap());
    }

    #[test]
    fn stop_all_events_stops_bank_instances() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        instance.start().unwrap();

        sfx_bus(&system).stop_all_events(StopMode::Immediate).unwrap();
        assert_eq!(instance.playback_state().unwrap(), PlaybackState::Stopped);
    }

    #[test]
    fn release_invalidates_native_object() {
        let (_, system, bank) = loaded_master_bank();
        let bus = sfx_bus(&system);
        bus.release().unwrap();
        assert_eq!(bus.fader_level().unwrap_err().code(), Some(FmodResult::InvalidHandle));
        assert_eq!(bank.mixer_strip_count().unwrap(), 1);
    }
}
