use serde::{Deserialize, Serialize};

use super::error::StudioError;

/// Declares a C enumeration whose native value is the declaration index.
///
/// Values flow to the native side through `raw()`. Values written back by the
/// native side arrive as `i32` and go through `TryFrom`, which rejects
/// anything out of range instead of transmuting it.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub fn raw(self) -> i32 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = StudioError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(StudioError::UnexpectedValue { kind: $kind, value }),
                }
            }
        }
    };
}

native_enum! {
    /// Whether a lookup may trigger loading of the resource (`FMOD_STUDIO_LOADING_MODE`).
    LoadingMode: "loading mode" {
        BeginNow = 0,
        Prohibited = 1,
    }
}

native_enum! {
    /// How an event instance or mixer strip stops (`FMOD_STUDIO_STOP_MODE`).
    StopMode: "stop mode" {
        AllowFadeout = 0,
        Immediate = 1,
    }
}

native_enum! {
    /// Loading state of a bank, sample data, event instance or mixer strip.
    LoadingState: "loading state" {
        Unloading = 0,
        Unloaded = 1,
        Loading = 2,
        Loaded = 3,
    }
}

native_enum! {
    /// Playback state of an event instance (`FMOD_STUDIO_PLAYBACK_STATE`).
    PlaybackState: "playback state" {
        Playing = 0,
        Idle = 1,
        Sustaining = 2,
        Stopped = 3,
    }
}

native_enum! {
    /// What drives a parameter's value (`FMOD_STUDIO_PARAMETER_TYPE`).
    ParameterType: "parameter type" {
        /// Controlled via `ParameterInstance::set_value`.
        GameControlled = 0,
        /// Distance between the event and the listener.
        AutomaticDistance = 1,
        /// Angle between the event's forward vector and the direction to the listener (0 to 180 degrees).
        AutomaticEventConeAngle = 2,
        /// Horizontal angle between the event's forward vector and the listener's forward vector (-180 to 180 degrees).
        AutomaticEventOrientation = 3,
        /// Horizontal angle between the listener's forward vector and the direction to the event (-180 to 180 degrees).
        AutomaticDirection = 4,
        /// Angle between the listener's XZ plane and the direction to the event (-90 to 90 degrees).
        AutomaticElevation = 5,
        /// Horizontal angle between the listener's forward vector and the global positive Z axis (-180 to 180 degrees).
        AutomaticListenerOrientation = 6,
    }
}

native_enum! {
    /// Reason an event callback fired (`FMOD_STUDIO_EVENT_CALLBACK_TYPE`).
    EventCallbackType: "event callback type" {
        /// Parameters point at the event instance.
        Started = 0,
        /// Parameters point at the event instance.
        Stopped = 1,
        /// Parameters point at the event instance.
        Idle = 2,
        /// Parameters point at a `ProgrammerSoundProperties`.
        CreateProgrammerSound = 3,
        /// Parameters point at a `ProgrammerSoundProperties`.
        DestroyProgrammerSound = 4,
    }
}

native_enum! {
    /// How `load_bank_memory` treats the caller's buffer.
    ///
    /// Only `LoadMemory` is used: a Rust slice cannot be pinned for the
    /// lifetime of the bank, so the native side must copy it.
    LoadMemoryMode: "load memory mode" {
        LoadMemory = 0,
        LoadMemoryPoint = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_declaration_order() {
        assert_eq!(LoadingMode::Prohibited.raw(), 1);
        assert_eq!(StopMode::Immediate.raw(), 1);
        assert_eq!(LoadingState::Loaded.raw(), 3);
        assert_eq!(PlaybackState::Stopped.raw(), 3);
        assert_eq!(ParameterType::AutomaticListenerOrientation.raw(), 6);
        assert_eq!(EventCallbackType::DestroyProgrammerSound.raw(), 4);
    }

    #[test]
    fn try_from_round_trips() {
        for raw in 0..4 {
            assert_eq!(PlaybackState::try_from(raw).unwrap().raw(), raw);
            assert_eq!(LoadingState::try_from(raw).unwrap().raw(), raw);
        }
    }

    #[test]
    fn out_of_range_value_is_an_error() {
        let err = PlaybackState::try_from(9).unwrap_err();
        assert_eq!(
            err,
            StudioError::UnexpectedValue {
                kind: "playback state",
                value: 9
            }
        );
        assert!(LoadingState::try_from(-1).is_err());
    }
}
