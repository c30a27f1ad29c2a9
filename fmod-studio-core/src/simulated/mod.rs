//! A `StudioApi` backend that runs entirely in memory.

mod fixtures;
mod state;
mod studio;

pub use fixtures::{simulated_id, BankSpec, EventSpec};
pub use studio::SimulatedStudio;
