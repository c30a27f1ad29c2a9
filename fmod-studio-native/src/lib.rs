//! # fmod-studio-native
//!
//! libfmodstudio backend for fmod-studio-core.
//!
//! Provides:
//! - `NativeStudio`: the `StudioApi` implementation that calls the linked library
//! - `ffi`: raw `FMOD_Studio_*` declarations
//!
//! ## Linking
//! Everything here is behind the `link` feature. Set `FMOD_STUDIO_LIB_DIR` to
//! the directory holding `fmodstudio` (`libfmodstudio.so`, `fmodstudio.lib`,
//! ...) when it is not on the default linker path.
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use fmod_studio_core::{StudioConfiguration, StudioSession};
//! use fmod_studio_native::NativeStudio;
//!
//! let session = StudioSession::start(Arc::new(NativeStudio::new()), StudioConfiguration::default())?;
//! session.update()?;
//! session.shutdown()?;
//! ```

#[cfg(feature = "link")]
pub mod ffi;
#[cfg(feature = "link")]
pub mod native_studio;

#[cfg(feature = "link")]
pub use native_studio::NativeStudio;
