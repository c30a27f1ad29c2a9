use std::ffi::{c_char, c_void, CStr};
use std::ptr;

use serde::{Deserialize, Serialize};

use super::error::StudioError;
use super::modes::ParameterType;
use crate::handles::raw::RawHandle;

/// Parameter metadata as the native side writes it
/// (`FMOD_STUDIO_PARAMETER_DESCRIPTION`).
///
/// `name` points into memory owned by the native library and is only valid
/// until the owning event description is unloaded; convert with
/// [`ParameterDescription::try_from`] straight away.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawParameterDescription {
    pub name: *const c_char,
    pub minimum: f32,
    pub maximum: f32,
    pub kind: i32,
}

impl Default for RawParameterDescription {
    fn default() -> Self {
        Self {
            name: ptr::null(),
            minimum: 0.0,
            maximum: 0.0,
            kind: ParameterType::GameControlled.raw(),
        }
    }
}

/// Owned parameter metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescription {
    pub name: String,
    pub minimum: f32,
    pub maximum: f32,
    pub kind: ParameterType,
}

impl TryFrom<&RawParameterDescription> for ParameterDescription {
    type Error = StudioError;

    fn try_from(raw: &RawParameterDescription) -> Result<Self, Self::Error> {
        Ok(Self {
            // SAFETY: the native side hands back a NUL-terminated UTF-8 string
            // that stays alive while the description is loaded.
            name: unsafe { string_from_native(raw.name) },
            minimum: raw.minimum,
            maximum: raw.maximum,
            kind: ParameterType::try_from(raw.kind)?,
        })
    }
}

/// Parameter block handed to programmer-sound callbacks
/// (`FMOD_STUDIO_PROGRAMMER_SOUND_PROPERTIES`).
#[repr(C)]
#[derive(Debug)]
pub struct ProgrammerSoundProperties {
    pub name: *const c_char,
    pub event_instance: RawHandle,
    /// Low level `FMOD_SOUND*` the callback creates or destroys.
    pub sound: *mut c_void,
}

impl ProgrammerSoundProperties {
    /// Name of the programmer instrument.
    ///
    /// # Safety
    /// Only valid inside the callback invocation that received this block.
    pub unsafe fn name(&self) -> String {
        string_from_native(self.name)
    }
}

/// Copy a NUL-terminated UTF-8 string out of native memory. Null becomes "".
///
/// # Safety
/// `ptr` must be null or point at a NUL-terminated buffer.
pub(crate) unsafe fn string_from_native(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::mem::size_of;

    #[test]
    fn layout_matches_native() {
        let expected = if size_of::<usize>() == 8 { 24 } else { 16 };
        assert_eq!(size_of::<RawParameterDescription>(), expected);
    }

    #[test]
    fn converts_raw_description() {
        let name = CString::new("RPM").unwrap();
        let raw = RawParameterDescription {
            name: name.as_ptr(),
            minimum: 0.0,
            maximum: 8000.0,
            kind: ParameterType::GameControlled.raw(),
        };

        let description = ParameterDescription::try_from(&raw).unwrap();
        assert_eq!(description.name, "RPM");
        assert_eq!(description.maximum, 8000.0);
        assert_eq!(description.kind, ParameterType::GameControlled);
    }

    #[test]
    fn null_name_becomes_empty() {
        let raw = RawParameterDescription {
            kind: ParameterType::AutomaticDistance.raw(),
            ..RawParameterDescription::default()
        };
        let description = ParameterDescription::try_from(&raw).unwrap();
        assert!(description.name.is_empty());
        assert_eq!(description.kind, ParameterType::AutomaticDistance);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let raw = RawParameterDescription {
            kind: 42,
            ..RawParameterDescription::default()
        };
        assert!(ParameterDescription::try_from(&raw).is_err());
    }
}
