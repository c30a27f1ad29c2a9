use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::handles::raw::RawHandle;
use crate::traits::studio_api::StudioApi;

/// Common behaviour of every typed wrapper around a native object.
pub trait StudioHandle {
    fn raw(&self) -> RawHandle;

    /// True while the wrapped reference is non-null. Says nothing about
    /// whether the native object is still alive.
    fn is_valid(&self) -> bool {
        !self.raw().is_null()
    }
}

/// The reference a wrapper holds plus the backend it forwards to.
///
/// Equality and hashing look at the raw reference only.
#[derive(Clone)]
pub(crate) struct HandleBase {
    raw: RawHandle,
    api: Arc<dyn StudioApi>,
}

impl HandleBase {
    pub(crate) fn new(api: Arc<dyn StudioApi>, raw: RawHandle) -> Self {
        Self { raw, api }
    }

    pub(crate) fn raw(&self) -> RawHandle {
        self.raw
    }

    pub(crate) fn api(&self) -> &dyn StudioApi {
        self.api.as_ref()
    }

    pub(crate) fn shared_api(&self) -> &Arc<dyn StudioApi> {
        &self.api
    }

    /// Wrap another reference handed out by the same backend.
    pub(crate) fn sibling(&self, raw: RawHandle) -> Self {
        Self::new(Arc::clone(&self.api), raw)
    }

    pub(crate) fn invalidate(&mut self) {
        self.raw = RawHandle::null();
    }
}

impl PartialEq for HandleBase {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for HandleBase {}

impl Hash for HandleBase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Debug for HandleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

/// Declares a wrapper struct holding a `HandleBase`, with `from_raw` and
/// `StudioHandle`.
macro_rules! studio_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            base: $crate::handles::base::HandleBase,
        }

        impl $name {
            /// Wrap a reference obtained from `api` outside these bindings.
            pub fn from_raw(
                api: ::std::sync::Arc<dyn $crate::traits::studio_api::StudioApi>,
                raw: $crate::handles::raw::RawHandle,
            ) -> Self {
                Self {
                    base: $crate::handles::base::HandleBase::new(api, raw),
                }
            }

            #[allow(dead_code)]
            pub(crate) fn from_base(base: $crate::handles::base::HandleBase) -> Self {
                Self { base }
            }
        }

        impl $crate::handles::base::StudioHandle for $name {
            fn raw(&self) -> $crate::handles::raw::RawHandle {
                self.base.raw()
            }
        }
    };
}

pub(crate) use studio_handle;

/// Opaque low level handles. The low level API is not bound here, so these
/// only carry the reference.
macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(RawHandle);

        impl $name {
            pub fn from_raw(raw: RawHandle) -> Self {
                Self(raw)
            }
        }

        impl StudioHandle for $name {
            fn raw(&self) -> RawHandle {
                self.0
            }
        }
    };
}

opaque_handle! {
    /// Low level `FMOD_SYSTEM` behind a studio system.
    CoreSystem
}

opaque_handle! {
    /// Low level `FMOD_CHANNELGROUP` an event instance plays through.
    ChannelGroup
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::simulated::SimulatedStudio;

    fn api() -> Arc<dyn StudioApi> {
        Arc::new(SimulatedStudio::new())
    }

    #[test]
    fn equality_follows_raw_reference() {
        let a = HandleBase::new(api(), RawHandle::from_addr(0x2000));
        let b = HandleBase::new(api(), RawHandle::from_addr(0x2000));
        let c = a.sibling(RawHandle::from_addr(0x2010));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<HandleBase> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn invalidate_nulls_reference() {
        let mut base = HandleBase::new(api(), RawHandle::from_addr(0x2000));
        base.invalidate();
        assert!(base.raw().is_null());
    }

    #[test]
    fn opaque_handles_report_validity() {
        assert!(CoreSystem::from_raw(RawHandle::from_addr(0x40)).is_valid());
        assert!(!ChannelGroup::from_raw(RawHandle::null()).is_valid());
    }
}
