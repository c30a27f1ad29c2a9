use std::ffi::c_void;
use std::fmt;
use std::ptr;

/// Opaque reference to a native-side object.
///
/// Layout is a single pointer so slices of `RawHandle` can be handed to the
/// native list entry points directly.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(*mut c_void);

// SAFETY: a RawHandle is an address the native studio API hands out. It is
// never dereferenced on the Rust side, and the studio API synchronises access
// to the objects behind it internally.
unsafe impl Send for RawHandle {}
unsafe impl Sync for RawHandle {}

impl RawHandle {
    pub const fn null() -> Self {
        Self(ptr::null_mut())
    }

    pub const fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// Builds a handle from a plain address, for backends that hand out
    /// synthetic handles instead of pointers.
    pub fn from_addr(addr: usize) -> Self {
        Self(ptr::without_provenance_mut(addr))
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn addr(self) -> usize {
        self.0.addr()
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for RawHandle {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawHandle({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle() {
        assert!(RawHandle::null().is_null());
        assert!(RawHandle::default().is_null());
        assert_eq!(RawHandle::null().addr(), 0);
    }

    #[test]
    fn addr_round_trip() {
        let handle = RawHandle::from_addr(0x1040);
        assert!(!handle.is_null());
        assert_eq!(handle.addr(), 0x1040);
        assert_eq!(handle, RawHandle::from_addr(0x1040));
        assert_ne!(handle, RawHandle::from_addr(0x1050));
    }

    #[test]
    fn pointer_sized() {
        assert_eq!(std::mem::size_of::<RawHandle>(), std::mem::size_of::<*mut c_void>());
    }
}
