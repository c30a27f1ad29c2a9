use std::mem::size_of;

use serde::{Deserialize, Serialize};

/// Studio system advanced settings (`FMOD_STUDIO_ADVANCEDSETTINGS`).
///
/// `cb_size` is overwritten by `System` before every call, so callers can
/// leave it at zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvancedSettings {
    pub cb_size: i32,
    /// Command queue size for studio async processing, 0 for the native default (4kb).
    pub command_queue_size: i32,
    /// Initial size to allocate for handles, 0 for the native default.
    pub handle_initial_size: i32,
}

impl AdvancedSettings {
    pub const SIZE: i32 = size_of::<AdvancedSettings>() as i32;

    pub fn new(command_queue_size: i32, handle_initial_size: i32) -> Self {
        Self {
            cb_size: Self::SIZE,
            command_queue_size,
            handle_initial_size,
        }
    }
}

/// CPU time percentages reported by the studio system (`FMOD_STUDIO_CPU_USAGE`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    /// DSP processing on the low level mixer thread.
    pub dsp_usage: f32,
    /// Stream processing on the low level stream thread.
    pub stream_usage: f32,
    /// Geometry processing on the low level geometry thread.
    pub geometry_usage: f32,
    /// Low level update, called as part of the studio update.
    pub update_usage: f32,
    /// Studio update on the studio thread, excluding low level update time.
    pub studio_usage: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_native() {
        assert_eq!(size_of::<AdvancedSettings>(), 12);
        assert_eq!(AdvancedSettings::SIZE, 12);
        assert_eq!(size_of::<CpuUsage>(), 20);
    }

    #[test]
    fn new_primes_size() {
        let settings = AdvancedSettings::new(8192, 64);
        assert_eq!(settings.cb_size, 12);
        assert_eq!(settings.command_queue_size, 8192);
        assert_eq!(settings.handle_initial_size, 64);
    }
}
