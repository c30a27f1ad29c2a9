use crate::handles::base::studio_handle;
use crate::handles::event_description::EventDescription;
use crate::handles::marshal::{check, fetch_list, fetch_string};
use crate::handles::mixer_strip::MixerStrip;
use crate::models::error::StudioError;
use crate::models::guid::Guid;
use crate::models::modes::LoadingState;
use crate::traits::entry_points as ep;

studio_handle! {
    /// A loaded bank (`FMOD_STUDIO_BANK`).
    ///
    /// After a successful [`Bank::unload`] the wrapper holds a null
    /// reference and every further call fails on the native side.
    Bank
}

impl Bank {
    pub fn id(&self) -> Result<Guid, StudioError> {
        let mut id = Guid::default();
        check(ep::BANK_GET_ID, self.base.api().bank_get_id(self.base.raw(), &mut id))?;
        Ok(id)
    }

    pub fn path(&self) -> Result<String, StudioError> {
        fetch_string(ep::BANK_GET_PATH, |buffer, retrieved| {
            self.base.api().bank_get_path(self.base.raw(), buffer, retrieved)
        })
    }

    /// Unload the bank. The local reference is cleared only when the native
    /// side reports success.
    pub fn unload(&mut self) -> Result<(), StudioError> {
        check(ep::BANK_UNLOAD, self.base.api().bank_unload(self.base.raw()))?;
        self.base.invalidate();
        Ok(())
    }

    pub fn load_sample_data(&self) -> Result<(), StudioError> {
        check(
            ep::BANK_LOAD_SAMPLE_DATA,
            self.base.api().bank_load_sample_data(self.base.raw()),
        )
    }

    pub fn unload_sample_data(&self) -> Result<(), StudioError> {
        check(
            ep::BANK_UNLOAD_SAMPLE_DATA,
            self.base.api().bank_unload_sample_data(self.base.raw()),
        )
    }

    pub fn loading_state(&self) -> Result<LoadingState, StudioError> {
        let mut state = 0;
        check(
            ep::BANK_GET_LOADING_STATE,
            self.base.api().bank_get_loading_state(self.base.raw(), &mut state),
        )?;
        LoadingState::try_from(state)
    }

    pub fn sample_loading_state(&self) -> Result<LoadingState, StudioError> {
        let mut state = 0;
        check(
            ep::BANK_GET_SAMPLE_LOADING_STATE,
            self.base
                .api()
                .bank_get_sample_loading_state(self.base.raw(), &mut state),
        )?;
        LoadingState::try_from(state)
    }

    pub fn event_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::BANK_GET_EVENT_COUNT,
            self.base.api().bank_get_event_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn event_list(&self) -> Result<Vec<EventDescription>, StudioError> {
        let api = self.base.api();
        let raw = self.base.raw();
        fetch_list(
            ep::BANK_GET_EVENT_COUNT,
            ep::BANK_GET_EVENT_LIST,
            |count| api.bank_get_event_count(raw, count),
            |array, count| api.bank_get_event_list(raw, array, count),
            |event| EventDescription::from_base(self.base.sibling(event)),
        )
    }

    pub fn mixer_strip_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::BANK_GET_MIXER_STRIP_COUNT,
            self.base
                .api()
                .bank_get_mixer_strip_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn mixer_strip_list(&self) -> Result<Vec<MixerStrip>, StudioError> {
        let api = self.base.api();
        let raw = self.base.raw();
        fetch_list(
            ep::BANK_GET_MIXER_STRIP_COUNT,
            ep::BANK_GET_MIXER_STRIP_LIST,
            |count| api.bank_get_mixer_strip_count(raw, count),
            |array, count| api.bank_get_mixer_strip_list(raw, array, count),
            |strip| MixerStrip::from_base(self.base.sibling(strip)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::base::StudioHandle;
    use crate::handles::testing::{loaded_master_bank, MASTER_BANK_FILE};
    use crate::models::flags::LoadBankFlags;
    use crate::models::result::FmodResult;
    use crate::simulated::simulated_id;

    #[test]
    fn id_and_path() {
        let (_, _, bank) = loaded_master_bank();
        assert_eq!(bank.id().unwrap(), simulated_id("bank:/Master"));
        assert_eq!(bank.path().unwrap(), "bank:/Master");
        assert_eq!(bank.loading_state().unwrap(), LoadingState::Loaded);
    }

    #[test]
    fn unload_invalidates_only_on_success() {
        let (studio, system, mut bank) = loaded_master_bank();
        let raw = bank.raw();

        studio.fail_next(ep::BANK_UNLOAD, FmodResult::EventLiveUpdateBusy);
        let err = bank.unload().unwrap_err();
        assert_eq!(err.code(), Some(FmodResult::EventLiveUpdateBusy));
        assert!(bank.is_valid());
        assert_eq!(bank.raw(), raw);

        bank.unload().unwrap();
        assert!(!bank.is_valid());
        assert_eq!(system.bank_count().unwrap(), 0);
        assert_eq!(bank.id().unwrap_err().code(), Some(FmodResult::InvalidHandle));
    }

    #[test]
    fn sample_data_lifecycle() {
        let (_, _, bank) = loaded_master_bank();
        assert_eq!(bank.sample_loading_state().unwrap(), LoadingState::Unloaded);
        bank.load_sample_data().unwrap();
        assert_eq!(bank.sample_loading_state().unwrap(), LoadingState::Loaded);
        bank.unload_sample_data().unwrap();
        assert_eq!(bank.sample_loading_state().unwrap(), LoadingState::Unloaded);
    }

    #[test]
    fn nonblocking_load_finishes_on_update() {
        let (_, system, mut bank) = loaded_master_bank();
        bank.unload().unwrap();

        let bank = system
            .load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NONBLOCKING)
            .unwrap();
        assert_eq!(bank.loading_state().unwrap(), LoadingState::Loading);
        system.update().unwrap();
        assert_eq!(bank.loading_state().unwrap(), LoadingState::Loaded);
    }

    #[test]
    fn events_are_listed() {
        let (_, _, bank) = loaded_master_bank();
        assert_eq!(bank.event_count().unwrap(), 2);

        let paths: Vec<String> = bank
            .event_list()
            .unwrap()
            .iter()
            .map(|event| event.path().unwrap())
            .collect();
        assert_eq!(paths, vec!["event:/UI/Click", "event:/Ambience/Forest"]);
    }

    #[test]
    fn mixer_strips_are_listed() {
        let (_, _, bank) = loaded_master_bank();
        assert_eq!(bank.mixer_strip_count().unwrap(), 2);
        let strips = bank.mixer_strip_list().unwrap();
        assert_eq!(strips[0].path().unwrap(), "bus:/SFX");
        assert_eq!(strips[1].path().unwrap(), "vca:/Master");
    }

    #[test]
    fn list_never_exceeds_count() {
        let (studio, _, bank) = loaded_master_bank();
        studio.over_report_lists(4);
        assert_eq!(bank.event_list().unwrap().len(), 2);
        assert_eq!(bank.mixer_strip_list().unwrap().len(), 2);
    }

    #[test]
    fn list_failure_yields_no_handles() {
        let (studio, _, bank) = loaded_master_bank();
        studio.fail_next(ep::BANK_GET_EVENT_LIST, FmodResult::Internal);
        let err = bank.event_list().unwrap_err();
        assert_eq!(
            err,
            StudioError::Native {
                call: ep::BANK_GET_EVENT_LIST,
                code: FmodResult::Internal
            }
        );
    }
}
