use crate::handles::base::studio_handle;
use crate::handles::marshal::check;
use crate::models::error::StudioError;
use crate::models::parameter::{ParameterDescription, RawParameterDescription};
use crate::traits::entry_points as ep;

studio_handle! {
    /// A parameter of one event instance (`FMOD_STUDIO_PARAMETERINSTANCE`).
    ParameterInstance
}

impl ParameterInstance {
    pub fn description(&self) -> Result<ParameterDescription, StudioError> {
        let mut raw = RawParameterDescription::default();
        check(
            ep::PARAMETER_INSTANCE_GET_DESCRIPTION,
            self.base
                .api()
                .parameter_instance_get_description(self.base.raw(), &mut raw),
        )?;
        ParameterDescription::try_from(&raw)
    }

    pub fn value(&self) -> Result<f32, StudioError> {
        let mut value = 0.0;
        check(
            ep::PARAMETER_INSTANCE_GET_VALUE,
            self.base
                .api()
                .parameter_instance_get_value(self.base.raw(), &mut value),
        )?;
        Ok(value)
    }

    /// Values outside the parameter range are passed through; the native
    /// side decides how to treat them.
    pub fn set_value(&self, value: f32) -> Result<(), StudioError> {
        check(
            ep::PARAMETER_INSTANCE_SET_VALUE,
            self.base.api().parameter_instance_set_value(self.base.raw(), value),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::handles::testing::{forest_instance, loaded_master_bank};
    use crate::models::modes::ParameterType;

    #[test]
    fn starts_at_minimum() {
        let (_, system, _) = loaded_master_bank();
        let wind = forest_instance(&system).parameter("Wind").unwrap();
        assert_relative_eq!(wind.value().unwrap(), 0.0);

        let description = wind.description().unwrap();
        assert_eq!(description.name, "Wind");
        assert_eq!(description.kind, ParameterType::GameControlled);
    }

    #[test]
    fn value_round_trip() {
        let (_, system, _) = loaded_master_bank();
        let instance = forest_instance(&system);
        let wind = instance.parameter("Wind").unwrap();
        wind.set_value(0.4).unwrap();
        assert_relative_eq!(wind.value().unwrap(), 0.4);

        instance.set_parameter_value("Wind", 0.9).unwrap();
        assert_relative_eq!(wind.value().unwrap(), 0.9);
    }

    #[test]
    fn out_of_range_is_not_clamped_locally() {
        let (_, system, _) = loaded_master_bank();
        let wind = forest_instance(&system).parameter("Wind").unwrap();
        wind.set_value(3.0).unwrap();
        assert_relative_eq!(wind.value().unwrap(), 3.0);
    }
}
