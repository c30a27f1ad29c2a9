use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::handles::bank::Bank;
use crate::handles::event_description::EventDescription;
use crate::handles::mixer_strip::MixerStrip;
use crate::handles::system::System;
use crate::models::config::{BankSource, StudioConfiguration};
use crate::models::error::StudioError;
use crate::models::snapshot::{BankSummary, EventSummary, MixerStripSummary, SystemSnapshot};
use crate::storage::bank_file::read_verified_bank;
use crate::traits::studio_api::StudioApi;

/// A studio system brought up from a `StudioConfiguration`.
///
/// Owns the system and the banks it loaded at startup. Call `update` once per
/// frame and `shutdown` when done; dropping the session without shutting down
/// leaves the native system alive.
pub struct StudioSession {
    system: System,
    banks: Vec<Bank>,
    config: StudioConfiguration,
}

impl StudioSession {
    /// Validate the configuration, create and initialize the system, and
    /// load every configured bank in order.
    ///
    /// If a bank fails to load, the system is released before returning.
    pub fn start(api: Arc<dyn StudioApi>, config: StudioConfiguration) -> Result<Self, StudioError> {
        config.validate().map_err(StudioError::Configuration)?;

        let system = System::create_with_version(api, config.header_version)?;
        match Self::bring_up(&system, &config) {
            Ok(banks) => {
                info!("studio session started with {} bank(s)", banks.len());
                Ok(Self {
                    system,
                    banks,
                    config,
                })
            }
            Err(e) => {
                if let Err(release) = system.release() {
                    warn!("release after failed start also failed: {}", release);
                }
                Err(e)
            }
        }
    }

    fn bring_up(system: &System, config: &StudioConfiguration) -> Result<Vec<Bank>, StudioError> {
        if let Some(settings) = config.advanced_settings() {
            system.set_advanced_settings(settings)?;
        }
        system.initialize(config.max_channels, config.studio_flags, config.core_flags)?;

        let mut banks = Vec::with_capacity(config.banks.len());
        for source in &config.banks {
            banks.push(Self::load_bank(system, source, config)?);
        }
        Ok(banks)
    }

    fn load_bank(system: &System, source: &BankSource, config: &StudioConfiguration) -> Result<Bank, StudioError> {
        let bank = match &source.sha256 {
            Some(digest) => {
                let data = read_verified_bank(&source.path, digest)?;
                info!("loading bank {} from memory ({} bytes)", source.path.display(), data.len());
                system.load_bank_memory(&data, config.load_bank_flags)?
            }
            None => {
                info!("loading bank {}", source.path.display());
                system.load_bank_file(path_text(&source.path)?, config.load_bank_flags)?
            }
        };
        if source.load_sample_data {
            bank.load_sample_data()?;
        }
        Ok(bank)
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Banks loaded at startup, in configuration order.
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    pub fn configuration(&self) -> &StudioConfiguration {
        &self.config
    }

    pub fn update(&self) -> Result<(), StudioError> {
        self.system.update()
    }

    /// Capture the current inventory of loaded banks, their events and
    /// mixer strips, together with CPU usage.
    pub fn snapshot(&self) -> Result<SystemSnapshot, StudioError> {
        let mut snapshot = SystemSnapshot::new(self.system.cpu_usage()?);
        for bank in self.system.bank_list()? {
            snapshot.banks.push(summarize_bank(&bank)?);
        }
        Ok(snapshot)
    }

    /// Unload every bank and release the system.
    ///
    /// Release is attempted even when unloading fails; the first error wins.
    pub fn shutdown(self) -> Result<(), StudioError> {
        let unloaded = self.system.unload_all();
        if let Err(e) = &unloaded {
            warn!("unload before release failed: {}", e);
        }
        let released = self.system.release();
        unloaded.and(released)?;
        info!("studio session shut down");
        Ok(())
    }

    /// Shut down after work done against the session, whatever its outcome.
    ///
    /// Returns the work's error if it failed, otherwise the shutdown result.
    pub fn shutdown_after<T>(self, outcome: Result<T, StudioError>) -> Result<T, StudioError> {
        let shutdown = self.shutdown();
        match outcome {
            Ok(value) => shutdown.map(|()| value),
            Err(e) => {
                if let Err(shutdown) = shutdown {
                    warn!("shutdown after failure also failed: {}", shutdown);
                }
                Err(e)
            }
        }
    }
}

fn path_text(path: &Path) -> Result<&str, StudioError> {
    path.to_str()
        .ok_or_else(|| StudioError::InvalidString(path.display().to_string()))
}

fn summarize_bank(bank: &Bank) -> Result<BankSummary, StudioError> {
    let events = bank
        .event_list()?
        .iter()
        .map(summarize_event)
        .collect::<Result<Vec<_>, _>>()?;
    let mixer_strips = bank
        .mixer_strip_list()?
        .iter()
        .map(summarize_strip)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BankSummary {
        id: bank.id()?,
        path: bank.path()?,
        loading_state: bank.loading_state()?,
        sample_loading_state: bank.sample_loading_state()?,
        events,
        mixer_strips,
    })
}

fn summarize_event(event: &EventDescription) -> Result<EventSummary, StudioError> {
    Ok(EventSummary {
        id: event.id()?,
        path: event.path()?,
        length_ms: event.length()?,
        is_oneshot: event.is_oneshot()?,
        is_stream: event.is_stream()?,
        is_3d: event.is_3d()?,
        instance_count: event.instance_count()?,
        parameters: event.parameters()?,
    })
}

fn summarize_strip(strip: &MixerStrip) -> Result<MixerStripSummary, StudioError> {
    Ok(MixerStripSummary {
        id: strip.id()?,
        path: strip.path()?,
        fader_level: strip.fader_level()?,
        paused: strip.paused()?,
    })
}
