use std::ffi::c_void;
use std::ptr;
use std::sync::Arc;

use crate::handles::bank::Bank;
use crate::handles::base::{studio_handle, CoreSystem};
use crate::handles::event_description::EventDescription;
use crate::handles::marshal::{check, fetch_list, fetch_string, to_cstring};
use crate::handles::mixer_strip::MixerStrip;
use crate::handles::raw::RawHandle;
use crate::models::config::DEFAULT_HEADER_VERSION;
use crate::models::error::StudioError;
use crate::models::flags::{CoreInitFlags, InitFlags, LoadBankFlags, RecordCommandsFlags};
use crate::models::guid::Guid;
use crate::models::modes::{LoadMemoryMode, LoadingMode};
use crate::models::settings::{AdvancedSettings, CpuUsage};
use crate::models::spatial::Attributes3d;
use crate::traits::entry_points as ep;
use crate::traits::studio_api::StudioApi;

studio_handle! {
    /// A studio system instance (`FMOD_STUDIO_SYSTEM`).
    ///
    /// Created with [`System::create`], configured with
    /// [`System::set_advanced_settings`], brought up with
    /// [`System::initialize`] and torn down with [`System::release`].
    /// Dropping the wrapper does not release the native system.
    System
}

/// Parse GUID text on the native side (`FMOD_Studio_ParseID`).
///
/// [`Guid`]'s `FromStr` does the same without a native call.
pub fn parse_id(api: &dyn StudioApi, id: &str) -> Result<Guid, StudioError> {
    let text = to_cstring(id)?;
    let mut guid = Guid::default();
    check(ep::PARSE_ID, api.parse_id(&text, &mut guid))?;
    Ok(guid)
}

impl System {
    /// Create a system against the header version these bindings target.
    pub fn create(api: Arc<dyn StudioApi>) -> Result<Self, StudioError> {
        Self::create_with_version(api, DEFAULT_HEADER_VERSION)
    }

    pub fn create_with_version(api: Arc<dyn StudioApi>, header_version: u32) -> Result<Self, StudioError> {
        let mut raw = RawHandle::null();
        check(ep::SYSTEM_CREATE, api.system_create(&mut raw, header_version))?;
        Ok(Self::from_raw(api, raw))
    }

    pub fn set_advanced_settings(&self, settings: AdvancedSettings) -> Result<(), StudioError> {
        let mut settings = settings;
        settings.cb_size = AdvancedSettings::SIZE;
        check(
            ep::SYSTEM_SET_ADVANCED_SETTINGS,
            self.base.api().system_set_advanced_settings(self.base.raw(), &mut settings),
        )
    }

    pub fn advanced_settings(&self) -> Result<AdvancedSettings, StudioError> {
        let mut settings = AdvancedSettings::new(0, 0);
        check(
            ep::SYSTEM_GET_ADVANCED_SETTINGS,
            self.base.api().system_get_advanced_settings(self.base.raw(), &mut settings),
        )?;
        Ok(settings)
    }

    pub fn initialize(
        &self,
        max_channels: i32,
        studio_flags: InitFlags,
        core_flags: CoreInitFlags,
    ) -> Result<(), StudioError> {
        // SAFETY: null driver data is always accepted.
        unsafe { self.initialize_with_driver_data(max_channels, studio_flags, core_flags, ptr::null_mut()) }
    }

    /// # Safety
    /// `extra_driver_data` must be null or whatever the selected output
    /// plugin expects; it is handed to the native side unchecked.
    pub unsafe fn initialize_with_driver_data(
        &self,
        max_channels: i32,
        studio_flags: InitFlags,
        core_flags: CoreInitFlags,
        extra_driver_data: *mut c_void,
    ) -> Result<(), StudioError> {
        check(
            ep::SYSTEM_INITIALIZE,
            self.base.api().system_initialize(
                self.base.raw(),
                max_channels,
                studio_flags,
                core_flags,
                extra_driver_data,
            ),
        )
    }

    pub fn release(&self) -> Result<(), StudioError> {
        check(ep::SYSTEM_RELEASE, self.base.api().system_release(self.base.raw()))
    }

    pub fn update(&self) -> Result<(), StudioError> {
        check(ep::SYSTEM_UPDATE, self.base.api().system_update(self.base.raw()))
    }

    pub fn low_level_system(&self) -> Result<CoreSystem, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::SYSTEM_GET_LOW_LEVEL_SYSTEM,
            self.base.api().system_get_low_level_system(self.base.raw(), &mut raw),
        )?;
        Ok(CoreSystem::from_raw(raw))
    }

    pub fn event(&self, id: &Guid, mode: LoadingMode) -> Result<EventDescription, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::SYSTEM_GET_EVENT,
            self.base.api().system_get_event(self.base.raw(), id, mode.raw(), &mut raw),
        )?;
        Ok(EventDescription::from_base(self.base.sibling(raw)))
    }

    pub fn mixer_strip(&self, id: &Guid, mode: LoadingMode) -> Result<MixerStrip, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::SYSTEM_GET_MIXER_STRIP,
            self.base.api().system_get_mixer_strip(self.base.raw(), id, mode.raw(), &mut raw),
        )?;
        Ok(MixerStrip::from_base(self.base.sibling(raw)))
    }

    pub fn bank(&self, id: &Guid) -> Result<Bank, StudioError> {
        let mut raw = RawHandle::null();
        check(ep::SYSTEM_GET_BANK, self.base.api().system_get_bank(self.base.raw(), id, &mut raw))?;
        Ok(Bank::from_base(self.base.sibling(raw)))
    }

    /// Resolve an `event:/`, `bus:/`, `vca:/` or `bank:/` path to its id.
    pub fn lookup_id(&self, path: &str) -> Result<Guid, StudioError> {
        let path = to_cstring(path)?;
        let mut id = Guid::default();
        check(
            ep::SYSTEM_LOOKUP_ID,
            self.base.api().system_lookup_id(self.base.raw(), &path, &mut id),
        )?;
        Ok(id)
    }

    pub fn lookup_path(&self, id: &Guid) -> Result<String, StudioError> {
        fetch_string(ep::SYSTEM_LOOKUP_PATH, |buffer, retrieved| {
            self.base
                .api()
                .system_lookup_path(self.base.raw(), id, buffer, retrieved)
        })
    }

    pub fn listener_attributes(&self) -> Result<Attributes3d, StudioError> {
        let mut attributes = Attributes3d::default();
        check(
            ep::SYSTEM_GET_LISTENER_ATTRIBUTES,
            self.base
                .api()
                .system_get_listener_attributes(self.base.raw(), &mut attributes),
        )?;
        Ok(attributes)
    }

    pub fn set_listener_attributes(&self, attributes: &Attributes3d) -> Result<(), StudioError> {
        check(
            ep::SYSTEM_SET_LISTENER_ATTRIBUTES,
            self.base
                .api()
                .system_set_listener_attributes(self.base.raw(), attributes),
        )
    }

    pub fn load_bank_file(&self, filename: &str, flags: LoadBankFlags) -> Result<Bank, StudioError> {
        let filename = to_cstring(filename)?;
        let mut raw = RawHandle::null();
        check(
            ep::SYSTEM_LOAD_BANK_FILE,
            self.base
                .api()
                .system_load_bank_file(self.base.raw(), &filename, flags, &mut raw),
        )?;
        Ok(Bank::from_base(self.base.sibling(raw)))
    }

    /// Load a bank from bytes already in memory. The native side copies the
    /// buffer, so it may be dropped as soon as this returns.
    pub fn load_bank_memory(&self, buffer: &[u8], flags: LoadBankFlags) -> Result<Bank, StudioError> {
        let mut raw = RawHandle::null();
        check(
            ep::SYSTEM_LOAD_BANK_MEMORY,
            self.base.api().system_load_bank_memory(
                self.base.raw(),
                buffer,
                LoadMemoryMode::LoadMemory.raw(),
                flags,
                &mut raw,
            ),
        )?;
        Ok(Bank::from_base(self.base.sibling(raw)))
    }

    pub fn unload_all(&self) -> Result<(), StudioError> {
        check(ep::SYSTEM_UNLOAD_ALL, self.base.api().system_unload_all(self.base.raw()))
    }

    pub fn flush_commands(&self) -> Result<(), StudioError> {
        check(
            ep::SYSTEM_FLUSH_COMMANDS,
            self.base.api().system_flush_commands(self.base.raw()),
        )
    }

    pub fn start_record_commands(&self, path: &str, flags: RecordCommandsFlags) -> Result<(), StudioError> {
        let path = to_cstring(path)?;
        check(
            ep::SYSTEM_START_RECORD_COMMANDS,
            self.base
                .api()
                .system_start_record_commands(self.base.raw(), &path, flags),
        )
    }

    pub fn stop_record_commands(&self) -> Result<(), StudioError> {
        check(
            ep::SYSTEM_STOP_RECORD_COMMANDS,
            self.base.api().system_stop_record_commands(self.base.raw()),
        )
    }

    pub fn playback_commands(&self, path: &str) -> Result<(), StudioError> {
        let path = to_cstring(path)?;
        check(
            ep::SYSTEM_PLAYBACK_COMMANDS,
            self.base.api().system_playback_commands(self.base.raw(), &path),
        )
    }

    pub fn bank_count(&self) -> Result<i32, StudioError> {
        let mut count = 0;
        check(
            ep::SYSTEM_GET_BANK_COUNT,
            self.base.api().system_get_bank_count(self.base.raw(), &mut count),
        )?;
        Ok(count)
    }

    pub fn bank_list(&self) -> Result<Vec<Bank>, StudioError> {
        let api = self.base.api();
        let raw = self.base.raw();
        fetch_list(
            ep::SYSTEM_GET_BANK_COUNT,
            ep::SYSTEM_GET_BANK_LIST,
            |count| api.system_get_bank_count(raw, count),
            |array, count| api.system_get_bank_list(raw, array, count),
            |bank| Bank::from_base(self.base.sibling(bank)),
        )
    }

    pub fn cpu_usage(&self) -> Result<CpuUsage, StudioError> {
        let mut usage = CpuUsage::default();
        check(
            ep::SYSTEM_GET_CPU_USAGE,
            self.base.api().system_get_cpu_usage(self.base.raw(), &mut usage),
        )?;
        Ok(usage)
    }

    /// The backend this system talks to, for wrapping raw references
    /// obtained elsewhere.
    pub fn api(&self) -> Arc<dyn StudioApi> {
        Arc::clone(self.base.shared_api())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::handles::base::StudioHandle;
    use crate::handles::testing::{initialized_system, MASTER_BANK_FILE};
    use crate::models::result::FmodResult;
    use crate::models::spatial::Vector;
    use crate::simulated::{simulated_id, SimulatedStudio};

    #[test]
    fn create_fails_without_handle() {
        let studio = Arc::new(SimulatedStudio::new());
        studio.fail_next(ep::SYSTEM_CREATE, FmodResult::Memory);
        let err = System::create(studio.clone()).unwrap_err();
        assert_eq!(
            err,
            StudioError::Native {
                call: ep::SYSTEM_CREATE,
                code: FmodResult::Memory
            }
        );
        assert_eq!(studio.calls(), vec![ep::SYSTEM_CREATE]);
    }

    #[test]
    fn create_rejects_other_header_version() {
        let studio = Arc::new(SimulatedStudio::new());
        let err = System::create_with_version(studio, 0x0001_0300).unwrap_err();
        assert_eq!(err.code(), Some(FmodResult::HeaderMismatch));
    }

    #[test]
    fn parse_id_goes_native() {
        let studio = SimulatedStudio::new();
        let id = parse_id(&studio, "{0f8b4f5c-2e65-4d3a-9b6e-8c2d1a0b7f31}").unwrap();
        assert_eq!(id.data1, 0x0f8b_4f5c);
        assert_eq!(studio.calls(), vec![ep::PARSE_ID]);

        let err = parse_id(&studio, "not-a-guid").unwrap_err();
        assert_eq!(err.code(), Some(FmodResult::InvalidParam));
    }

    #[test]
    fn parse_id_rejects_nul_before_calling() {
        let studio = SimulatedStudio::new();
        assert!(matches!(parse_id(&studio, "{0f8b\0}"), Err(StudioError::InvalidString(_))));
        assert!(studio.calls().is_empty());
    }

    #[test]
    fn advanced_settings_round_trip() {
        let studio = Arc::new(SimulatedStudio::new());
        let system = System::create(studio).unwrap();
        let mut settings = AdvancedSettings::new(65536, 512);
        settings.cb_size = 0;
        system.set_advanced_settings(settings).unwrap();

        let read = system.advanced_settings().unwrap();
        assert_eq!(read.cb_size, AdvancedSettings::SIZE);
        assert_eq!(read.command_queue_size, 65536);
        assert_eq!(read.handle_initial_size, 512);
    }

    #[test]
    fn advanced_settings_after_initialize_fail() {
        let (_, system) = initialized_system();
        let err = system.set_advanced_settings(AdvancedSettings::new(1024, 0)).unwrap_err();
        assert_eq!(err.code(), Some(FmodResult::Initialized));
    }

    #[test]
    fn listener_attributes_round_trip() {
        let (_, system) = initialized_system();
        let mut attributes = Attributes3d::at(Vector::new(1.0, 2.0, -3.5));
        attributes.velocity = Vector::new(0.0, 0.0, 1.25);
        system.set_listener_attributes(&attributes).unwrap();

        let read = system.listener_attributes().unwrap();
        assert_eq!(read, attributes);
        assert_relative_eq!(read.position.z, -3.5);
    }

    #[test]
    fn load_and_find_bank() {
        let (_, system) = initialized_system();
        let bank = system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();
        assert!(bank.is_valid());

        assert_eq!(system.bank_count().unwrap(), 1);
        assert_eq!(system.bank_list().unwrap(), vec![bank.clone()]);

        let id = system.lookup_id("bank:/Master").unwrap();
        assert_eq!(id, simulated_id("bank:/Master"));
        assert_eq!(system.bank(&id).unwrap(), bank);
        assert_eq!(system.lookup_path(&id).unwrap(), "bank:/Master");
    }

    #[test]
    fn load_missing_bank_reports_not_found() {
        let (_, system) = initialized_system();
        let err = system.load_bank_file("missing.bank", LoadBankFlags::NORMAL).unwrap_err();
        assert_eq!(
            err,
            StudioError::Native {
                call: ep::SYSTEM_LOAD_BANK_FILE,
                code: FmodResult::FileNotFound
            }
        );
    }

    #[test]
    fn load_twice_reports_already_loaded() {
        let (_, system) = initialized_system();
        system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();
        let err = system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap_err();
        assert_eq!(err.code(), Some(FmodResult::EventAlreadyLoaded));
        assert_eq!(system.bank_count().unwrap(), 1);
    }

    #[test]
    fn load_bank_memory_copies_buffer() {
        let (studio, system) = initialized_system();
        let bytes = b"RIFF-sim-bank-memory".to_vec();
        studio.add_bank_memory(bytes.clone(), crate::simulated::BankSpec::new("bank:/Dialogue"));

        let bank = system.load_bank_memory(&bytes, LoadBankFlags::NORMAL).unwrap();
        drop(bytes);
        assert_eq!(bank.path().unwrap(), "bank:/Dialogue");
    }

    #[test]
    fn event_lookup_by_id() {
        let (_, system) = initialized_system();
        system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();

        let id = system.lookup_id("event:/UI/Click").unwrap();
        let description = system.event(&id, LoadingMode::BeginNow).unwrap();
        assert_eq!(description.path().unwrap(), "event:/UI/Click");

        let missing = system.event(&simulated_id("event:/Nope"), LoadingMode::Prohibited);
        assert_eq!(missing.unwrap_err().code(), Some(FmodResult::EventNotFound));
    }

    #[test]
    fn mixer_strip_lookup_by_id() {
        let (_, system) = initialized_system();
        system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();
        let strip = system
            .mixer_strip(&simulated_id("bus:/SFX"), LoadingMode::BeginNow)
            .unwrap();
        assert_eq!(strip.path().unwrap(), "bus:/SFX");
    }

    #[test]
    fn lookup_path_of_long_path_retries_once() {
        let (studio, system) = initialized_system();
        let long_event = format!("event:/{}", "Deep/".repeat(80));
        studio.add_bank_file(
            "long.bank",
            crate::simulated::BankSpec::new("bank:/Long").event(crate::simulated::EventSpec::new(&long_event)),
        );
        system.load_bank_file("long.bank", LoadBankFlags::NORMAL).unwrap();
        studio.clear_calls();

        let path = system.lookup_path(&simulated_id(&long_event)).unwrap();
        assert_eq!(path, long_event);
        assert_eq!(studio.calls(), vec![ep::SYSTEM_LOOKUP_PATH, ep::SYSTEM_LOOKUP_PATH]);
    }

    #[test]
    fn unload_all_drops_banks() {
        let (_, system) = initialized_system();
        let bank = system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();
        system.unload_all().unwrap();
        assert_eq!(system.bank_count().unwrap(), 0);
        assert!(system.bank_list().unwrap().is_empty());
        assert_eq!(bank.path().unwrap_err().code(), Some(FmodResult::InvalidHandle));
    }

    #[test]
    fn bank_list_is_clamped_to_count() {
        let (studio, system) = initialized_system();
        system.load_bank_file(MASTER_BANK_FILE, LoadBankFlags::NORMAL).unwrap();
        studio.over_report_lists(3);
        let banks = system.bank_list().unwrap();
        assert_eq!(banks.len(), 1);
    }

    #[test]
    fn record_and_playback_commands() {
        let (studio, system) = initialized_system();
        system
            .start_record_commands("capture.cmd", RecordCommandsFlags::FILEFLUSH)
            .unwrap();
        system.flush_commands().unwrap();
        system.stop_record_commands().unwrap();
        assert_eq!(
            system.stop_record_commands().unwrap_err().code(),
            Some(FmodResult::NotReady)
        );
        system.playback_commands("capture.cmd").unwrap();
        assert!(studio.calls().contains(&ep::SYSTEM_PLAYBACK_COMMANDS));
    }

    #[test]
    fn low_level_system_and_cpu_usage() {
        let (_, system) = initialized_system();
        assert!(system.low_level_system().unwrap().is_valid());
        let usage = system.cpu_usage().unwrap();
        assert!(usage.studio_usage >= 0.0);
    }

    #[test]
    fn released_system_rejects_calls() {
        let (_, system) = initialized_system();
        system.release().unwrap();
        assert_eq!(system.update().unwrap_err().code(), Some(FmodResult::InvalidHandle));
    }

    #[test]
    fn update_before_initialize_fails() {
        let system = System::create(Arc::new(SimulatedStudio::new())).unwrap();
        assert_eq!(
            system.update().unwrap_err().code(),
            Some(FmodResult::StudioUninitialized)
        );
    }
}
