use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Declares a `u32` bit mask newtype passed by value across the boundary.
macro_rules! native_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$cmeta:meta])* const $flag:ident = $value:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            $($(#[$cmeta])* pub const $flag: $name = $name($value);)+

            pub const fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

native_flags! {
    /// Studio system initialization flags (`FMOD_STUDIO_INITFLAGS`).
    InitFlags {
        const NORMAL = 0x0000_0000;
        /// Enable live update.
        const LIVEUPDATE = 0x0000_0001;
        /// Load banks even if they reference plugins that have not been loaded.
        const ALLOW_MISSING_PLUGINS = 0x0000_0002;
        /// Perform all processing on the calling thread instead of asynchronously.
        const SYNCHRONOUS_UPDATE = 0x0000_0004;
    }
}

native_flags! {
    /// Low level system initialization flags (`FMOD_INITFLAGS`).
    CoreInitFlags {
        const NORMAL = 0x0000_0000;
        const STREAM_FROM_UPDATE = 0x0000_0001;
        const RIGHTHANDED_3D = 0x0000_0004;
        const CHANNEL_LOWPASS = 0x0000_0100;
        const CHANNEL_DISTANCEFILTER = 0x0000_0200;
        const PROFILE_ENABLE = 0x0001_0000;
        const VOL0_BECOMES_VIRTUAL = 0x0002_0000;
        const GEOMETRY_USECLOSEST = 0x0004_0000;
        const PREFER_DOLBY_DOWNMIX = 0x0008_0000;
        const THREAD_UNSAFE = 0x0010_0000;
        const PROFILE_METER_ALL = 0x0020_0000;
    }
}

native_flags! {
    /// Bank loading flags (`FMOD_STUDIO_LOAD_BANK_FLAGS`).
    LoadBankFlags {
        const NORMAL = 0x0000_0000;
        /// Load asynchronously rather than blocking the caller.
        const NONBLOCKING = 0x0000_0001;
    }
}

native_flags! {
    /// Command capture flags (`FMOD_STUDIO_RECORD_COMMANDS_FLAGS`).
    RecordCommandsFlags {
        const NORMAL = 0x0000_0000;
        /// Flush the capture file after every command.
        const FILEFLUSH = 0x0000_0001;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_and_contains() {
        let flags = InitFlags::LIVEUPDATE | InitFlags::SYNCHRONOUS_UPDATE;
        assert_eq!(flags.bits(), 0x5);
        assert!(flags.contains(InitFlags::LIVEUPDATE));
        assert!(!flags.contains(InitFlags::ALLOW_MISSING_PLUGINS));
        assert!(flags.contains(InitFlags::NORMAL));
    }

    #[test]
    fn bitor_assign_accumulates() {
        let mut flags = CoreInitFlags::NORMAL;
        flags |= CoreInitFlags::PROFILE_ENABLE;
        flags |= CoreInitFlags::RIGHTHANDED_3D;
        assert_eq!(flags, CoreInitFlags::from_bits(0x0001_0004));
    }

    #[test]
    fn serializes_as_plain_bits() {
        let json = serde_json::to_string(&LoadBankFlags::NONBLOCKING).unwrap();
        assert_eq!(json, "1");
        let back: RecordCommandsFlags = serde_json::from_str("1").unwrap();
        assert_eq!(back, RecordCommandsFlags::FILEFLUSH);
    }
}
