use crate::handles::base::studio_handle;
use crate::handles::event_instance::EventInstance;
use crate::handles::marshal::{check, fetch_list, fetch_string, from_native_bool, to_cstring};
use crate::handles::raw::RawHandle;
use crate::models::error::StudioError;
use crate::models::guid::Guid;
use crate::models::parameter::{ParameterDescription, RawParameterDescription};
use crate::traits::entry_points as ep;
use crate::traits::studio_api::EventCallback;

studio_handle! {
    /// The template of a sound event (`FMOD_STUDIO_EVENTDESCRIPTION`).
    ///
    /// Holds the static metadata of an event and creates its instances.
    EventDescription
}

impl EventDescription {
    pub fn id(&self) -> Result<Guid, StudioError> {
        let mut id = Guid::default();
        check(
            ep::EVENT_DESCRIPTION_GET_ID,
            self.base.api().event_description_get_id(self.base.raw(), &mut id),
        )?;
        Ok(id)
    }

    pub fn path(&self) -> Result<String, StudioError> {
        fetch_string(ep::EVENT_DESCRIPTION_GET_PATH, |buffer, retrieved| {
            self.base
                .api()
                .event_description_get_path(self.base.raw(), buffer, retrieved)
        })
    }

    pub fn parameter_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::EVENT_DESCRIPTION_GET_PARAMETER_COUNT,
            self.base
                .api()
                .event_description_get_parameter_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn parameter_by_index(&self, index: i32) -> Result<ParameterDescription, StudioError> {
        let mut raw = RawParameterDescription::default();
        check(
            ep::EVENT_DESCRIPTION_GET_PARAMETER_BY_INDEX,
            self.base
                .api()
                .event_description_get_parameter_by_index(self.base.raw(), index, &mut raw),
        )?;
        ParameterDescription::try_from(&raw)
    }

    pub fn parameter(&self, name: &str) -> Result<ParameterDescription, StudioError> {
        let name = to_cstring(name)?;
        let mut raw = RawParameterDescription::default();
        check(
            ep::EVENT_DESCRIPTION_GET_PARAMETER,
            self.base
                .api()
                .event_description_get_parameter(self.base.raw(), &name, &mut raw),
        )?;
        ParameterDescription::try_from(&raw)
    }

    /// All parameters, in index order.
    pub fn parameters(&self) -> Result<Vec<ParameterDescription>, StudioError> {
        (0..self.parameter_count()?)
            .map(|index| self.parameter_by_index(index))
            .collect()
    }

    pub fn user_property_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::EVENT_DESCRIPTION_GET_USER_PROPERTY_COUNT,
            self.base
                .api()
                .event_description_get_user_property_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    /// Length of the timeline in milliseconds; 0 for events without one.
    pub fn length(&self) -> Result<i32, StudioError> {
        let mut length = 0;
        check(
            ep::EVENT_DESCRIPTION_GET_LENGTH,
            self.base
                .api()
                .event_description_get_length(self.base.raw(), &mut length),
        )?;
        Ok(length)
    }

    pub fn minimum_distance(&self) -> Result<f32, StudioError> {
        let mut distance = 0.0;
        check(
            ep::EVENT_DESCRIPTION_GET_MINIMUM_DISTANCE,
            self.base
                .api()
                .event_description_get_minimum_distance(self.base.raw(), &mut distance),
        )?;
        Ok(distance)
    }

    pub fn maximum_distance(&self) -> Result<f32, StudioError> {
        let mut distance = 0.0;
        check(
            ep::EVENT_DESCRIPTION_GET_MAXIMUM_DISTANCE,
            self.base
                .api()
                .event_description_get_maximum_distance(self.base.raw(), &mut distance),
        )?;
        Ok(distance)
    }

    pub fn is_oneshot(&self) -> Result<bool, StudioError> {
        let mut oneshot = 0;
        check(
            ep::EVENT_DESCRIPTION_IS_ONESHOT,
            self.base
                .api()
                .event_description_is_oneshot(self.base.raw(), &mut oneshot),
        )?;
        Ok(from_native_bool(oneshot))
    }

    pub fn is_stream(&self) -> Result<bool, StudioError> {
        let mut is_stream = 0;
        check(
            ep::EVENT_DESCRIPTION_IS_STREAM,
            self.base
                .api()
                .event_description_is_stream(self.base.raw(), &mut is_stream),
        )?;
        Ok(from_native_bool(is_stream))
    }

    pub fn is_3d(&self) -> Result<bool, StudioError> {
        let mut is_3d = 0;
        check(
            ep::EVENT_DESCRIPTION_IS_3D,
            self.base.api().event_description_is_3d(self.base.raw(), &mut is_3d),
        )?;
        Ok(from_native_bool(is_3d))
    }

    pub fn create_instance(&self) -> Result<EventInstance, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::EVENT_DESCRIPTION_CREATE_INSTANCE,
            self.base
                .api()
                .event_description_create_instance(self.base.raw(), &mut raw),
        )?;
        Ok(EventInstance::from_base(self.base.sibling(raw)))
    }

    pub fn instance_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::EVENT_DESCRIPTION_GET_INSTANCE_COUNT,
            self.base
                .api()
                .event_description_get_instance_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn instance_list(&self) -> Result<Vec<EventInstance>, StudioError> {
        let api = self.base.api();
        let raw = self.base.raw();
        fetch_list(
            ep::EVENT_DESCRIPTION_GET_INSTANCE_COUNT,
            ep::EVENT_DESCRIPTION_GET_INSTANCE_LIST,
            |count| api.event_description_get_instance_count(raw, count),
            |array, count| api.event_description_get_instance_list(raw, array, count),
            |instance| EventInstance::from_base(self.base.sibling(instance)),
        )
    }

    pub fn release_all_instances(&self) -> Result<(), StudioError> {
        check(
            ep::EVENT_DESCRIPTION_RELEASE_ALL_INSTANCES,
            self.base
                .api()
                .event_description_release_all_instances(self.base.raw()),
        )
    }

    /// Install (or with `None`, clear) the callback every instance of this
    /// event reports to unless it has its own.
    pub fn set_callback(&self, callback: Option<EventCallback>) -> Result<(), StudioError> {
        check(
            ep::EVENT_DESCRIPTION_SET_CALLBACK,
            self.base
                .api()
                .event_description_set_callback(self.base.raw(), callback),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;
    use std::sync::atomic::{AtomicI32, Ordering};

    use approx::assert_relative_eq;

    use super::*;
    use crate::handles::testing::{forest_event, loaded_master_bank};
    use crate::models::modes::{EventCallbackType, ParameterType};
    use crate::models::result::FmodResult;
    use crate::simulated::simulated_id;

    #[test]
    fn static_metadata() {
        let (_, system, _) = loaded_master_bank();
        let click = system
            .event(&simulated_id("event:/UI/Click"), crate::models::modes::LoadingMode::BeginNow)
            .unwrap();
        assert_eq!(click.id().unwrap(), simulated_id("event:/UI/Click"));
        assert_eq!(click.length().unwrap(), 350);
        assert!(click.is_oneshot().unwrap());
        assert!(!click.is_stream().unwrap());
        assert!(!click.is_3d().unwrap());
        assert_eq!(click.parameter_count().unwrap(), 0);
        assert_eq!(click.user_property_count().unwrap(), 0);
    }

    #[test]
    fn spatial_metadata() {
        let (_, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        assert!(forest.is_3d().unwrap());
        assert!(forest.is_stream().unwrap());
        assert_relative_eq!(forest.minimum_distance().unwrap(), 1.0);
        assert_relative_eq!(forest.maximum_distance().unwrap(), 40.0);
        assert_eq!(forest.user_property_count().unwrap(), 2);
    }

    #[test]
    fn parameter_descriptions() {
        let (_, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        assert_eq!(forest.parameter_count().unwrap(), 2);

        let wind = forest.parameter_by_index(0).unwrap();
        assert_eq!(wind.name, "Wind");
        assert_eq!(wind.kind, ParameterType::GameControlled);
        assert_relative_eq!(wind.maximum, 1.0);

        let distance = forest.parameter("Distance").unwrap();
        assert_eq!(distance.kind, ParameterType::AutomaticDistance);
        assert_relative_eq!(distance.maximum, 40.0);

        assert_eq!(forest.parameters().unwrap(), vec![wind, distance]);
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let (_, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        assert_eq!(
            forest.parameter("Rain").unwrap_err().code(),
            Some(FmodResult::EventNotFound)
        );
        assert_eq!(
            forest.parameter_by_index(9).unwrap_err().code(),
            Some(FmodResult::InvalidParam)
        );
    }

    #[test]
    fn instances_are_tracked() {
        let (studio, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        assert!(forest.instance_list().unwrap().is_empty());

        let first = forest.create_instance().unwrap();
        let second = forest.create_instance().unwrap();
        assert_ne!(first, second);
        assert_eq!(forest.instance_count().unwrap(), 2);
        assert_eq!(forest.instance_list().unwrap(), vec![first.clone(), second]);
        assert_eq!(first.description().unwrap(), forest);

        studio.over_report_lists(1);
        assert_eq!(forest.instance_list().unwrap().len(), 2);

        forest.release_all_instances().unwrap();
        assert_eq!(forest.instance_count().unwrap(), 0);
        assert_eq!(first.volume().unwrap_err().code(), Some(FmodResult::InvalidHandle));
    }

    #[test]
    fn failed_create_yields_no_instance() {
        let (studio, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        studio.fail_next(ep::EVENT_DESCRIPTION_CREATE_INSTANCE, FmodResult::Memory);
        assert_eq!(
            forest.create_instance().unwrap_err().code(),
            Some(FmodResult::Memory)
        );
        assert_eq!(forest.instance_count().unwrap(), 0);
    }

    static LAST_KIND: AtomicI32 = AtomicI32::new(-1);

    unsafe extern "system" fn record_kind(kind: i32, _parameters: *mut c_void) -> i32 {
        LAST_KIND.store(kind, Ordering::SeqCst);
        FmodResult::Ok.raw()
    }

    #[test]
    fn description_callback_reaches_instances() {
        let (_, system, _) = loaded_master_bank();
        let forest = forest_event(&system);
        forest.set_callback(Some(record_kind)).unwrap();

        let instance = forest.create_instance().unwrap();
        instance.start().unwrap();
        system.update().unwrap();
        assert_eq!(
            EventCallbackType::try_from(LAST_KIND.load(Ordering::SeqCst)).unwrap(),
            EventCallbackType::Started
        );

        forest.set_callback(None).unwrap();
    }
}
