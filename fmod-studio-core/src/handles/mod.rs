pub mod bank;
pub mod base;
pub mod cue_instance;
pub mod event_description;
pub mod event_instance;
pub(crate) mod marshal;
pub mod mixer_strip;
pub mod parameter_instance;
pub mod raw;
pub mod system;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::bank::Bank;
    use super::event_description::EventDescription;
    use super::event_instance::EventInstance;
    use super::system::System;
    use crate::models::flags::{CoreInitFlags, InitFlags, LoadBankFlags};
    use crate::models::modes::{LoadingMode, ParameterType};
    use crate::simulated::{simulated_id, BankSpec, EventSpec, SimulatedStudio};

    pub const MASTER_BANK_FILE: &str = "banks/Master.bank";

    /// Master bank with a one-shot UI event, a looping 3D ambience with
    /// parameters, a cue and a sub event, and two mixer strips.
    pub fn master_bank() -> BankSpec {
        BankSpec::new("bank:/Master")
            .event(EventSpec::new("event:/UI/Click").length(350).oneshot(true))
            .event(
                EventSpec::new("event:/Ambience/Forest")
                    .stream(true)
                    .spatial(1.0, 40.0)
                    .user_properties(2)
                    .parameter("Wind", 0.0, 1.0, ParameterType::GameControlled)
                    .parameter("Distance", 0.0, 40.0, ParameterType::AutomaticDistance)
                    .cue("KeyOff")
                    .sub_event("Birds"),
            )
            .mixer_strip("bus:/SFX")
            .mixer_strip("vca:/Master")
    }

    pub fn initialized_system() -> (Arc<SimulatedStudio>, System) {
        let studio = Arc::new(SimulatedStudio::new());
        studio.add_bank_file(MASTER_BANK_FILE, master_bank());
        let system = System::create(studio.clone()).unwrap();
        system
            .initialize(64, InitFlags::NORMAL, CoreInitFlags::NORMAL)
            .unwrap();
        (studio, system)
    }

    pub fn loaded_master_bank() -> (Arc<SimulatedStudio>, System, Bank) {
        let (studio, system) = initialized_system();
        let bank = system
            .load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL)
            .unwrap();
        (studio, system, bank)
    }

    pub fn forest_event(system: &System) -> EventDescription {
        system
            .event(&simulated_id("event:/Ambience/Forest"), LoadingMode::BeginNow)
            .unwrap()
    }

    pub fn forest_instance(system: &System) -> EventInstance {
        forest_event(system).create_instance().unwrap()
    }
}
