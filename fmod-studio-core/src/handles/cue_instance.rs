use crate::handles::base::studio_handle;
use crate::handles::marshal::check;
use crate::models::error::StudioError;
use crate::traits::entry_points as ep;

studio_handle! {
    /// A sustain-point cue on an event instance (`FMOD_STUDIO_CUEINSTANCE`).
    CueInstance
}

impl CueInstance {
    pub fn trigger(&self) -> Result<(), StudioError> {
        check(ep::CUE_INSTANCE_TRIGGER, self.base.api().cue_instance_trigger(self.base.raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::base::StudioHandle;
    use crate::handles::testing::{forest_instance, loaded_master_bank};
    use crate::models::result::FmodResult;

    #[test]
    fn trigger_forwards_once() {
        let (studio, system, _) = loaded_master_bank();
        let cue = forest_instance(&system).cue("KeyOff").unwrap();
        studio.clear_calls();

        cue.trigger().unwrap();
        cue.trigger().unwrap();
        assert_eq!(studio.calls(), vec![ep::CUE_INSTANCE_TRIGGER, ep::CUE_INSTANCE_TRIGGER]);
        assert_eq!(studio.cue_trigger_count(cue.raw()), 2);
    }

    #[test]
    fn trigger_failure_is_reported() {
        let (studio, system, _) = loaded_master_bank();
        let cue = forest_instance(&system).cue_by_index(0).unwrap();
        studio.fail_next(ep::CUE_INSTANCE_TRIGGER, FmodResult::NotReady);
        assert_eq!(
            cue.trigger().unwrap_err(),
            StudioError::Native {
                call: ep::CUE_INSTANCE_TRIGGER,
                code: FmodResult::NotReady
            }
        );
        assert_eq!(studio.cue_trigger_count(cue.raw()), 0);
    }
}
