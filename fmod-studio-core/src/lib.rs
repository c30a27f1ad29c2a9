//! # fmod-studio-core
//!
//! Safe Rust wrappers over the FMOD Studio C ABI.
//!
//! Every native entry point is reached through the `StudioApi` trait, so the
//! handle wrappers work unchanged against the real library (see the
//! `fmod-studio-native` crate) or the in-memory `SimulatedStudio` used in tests.
//!
//! ## Architecture
//!
//! ```text
//! fmod-studio-core (this crate)
//! ├── traits/       ← StudioApi (one method per FMOD_Studio_* entry point), entry point names
//! ├── models/       ← FmodResult, StudioError, Guid, ABI structs, flags, modes, configuration
//! ├── handles/      ← System, Bank, EventDescription, EventInstance, MixerStrip, CueInstance,
//! │                   ParameterInstance, plus the probe-then-fetch / count-then-list marshalling
//! ├── simulated/    ← SimulatedStudio (in-memory StudioApi)
//! ├── session/      ← StudioSession (configuration-driven bring up, snapshots, shutdown)
//! └── storage/      ← configuration, verified bank and snapshot files
//! ```

pub mod handles;
pub mod models;
pub mod session;
pub mod simulated;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use handles::bank::Bank;
pub use handles::base::{ChannelGroup, CoreSystem, StudioHandle};
pub use handles::cue_instance::CueInstance;
pub use handles::event_description::EventDescription;
pub use handles::event_instance::EventInstance;
pub use handles::mixer_strip::MixerStrip;
pub use handles::parameter_instance::ParameterInstance;
pub use handles::raw::RawHandle;
pub use handles::system::{parse_id, System};
pub use models::config::{BankSource, StudioConfiguration};
pub use models::error::StudioError;
pub use models::flags::{CoreInitFlags, InitFlags, LoadBankFlags, RecordCommandsFlags};
pub use models::guid::Guid;
pub use models::modes::{
    EventCallbackType, LoadMemoryMode, LoadingMode, LoadingState, ParameterType, PlaybackState, StopMode,
};
pub use models::parameter::ParameterDescription;
pub use models::result::FmodResult;
pub use models::settings::{AdvancedSettings, CpuUsage};
pub use models::snapshot::SystemSnapshot;
pub use models::spatial::{Attributes3d, Vector};
pub use session::studio_session::StudioSession;
pub use simulated::SimulatedStudio;
pub use traits::studio_api::{EventCallback, StudioApi};
