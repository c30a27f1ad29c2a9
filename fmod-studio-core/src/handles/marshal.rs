//! Argument and result conversion shared by all handle wrappers.

use std::ffi::CString;

use crate::handles::raw::RawHandle;
use crate::models::error::StudioError;
use crate::models::result::FmodResult;

/// Size of the first buffer offered to a probe-then-fetch string query.
pub const PATH_BUFFER_SIZE: usize = 256;

/// Turn a native status into a `Result`, logging failures.
pub(crate) fn check(call: &'static str, code: FmodResult) -> Result<(), StudioError> {
    if code.is_ok() {
        return Ok(());
    }
    log::debug!("{} failed: {}", call, code);
    Err(StudioError::Native { call, code })
}

/// UTF-8 encode `value` with a trailing NUL.
pub(crate) fn to_cstring(value: &str) -> Result<CString, StudioError> {
    CString::new(value).map_err(|e| {
        StudioError::InvalidString(format!(
            "{:?} contains a NUL byte at offset {}",
            value,
            e.nul_position()
        ))
    })
}

pub(crate) fn to_native_bool(value: bool) -> i32 {
    i32::from(value)
}

pub(crate) fn from_native_bool(value: i32) -> bool {
    value != 0
}

/// Fetch a variable-length string from the native side.
///
/// Offers a `PATH_BUFFER_SIZE` buffer first. On `Truncated` the call is
/// reissued exactly once with a buffer of the reported size; any failure on
/// the second call, including another truncation, is returned as is.
pub(crate) fn fetch_string<F>(call: &'static str, mut query: F) -> Result<String, StudioError>
where
    F: FnMut(&mut [u8], &mut i32) -> FmodResult,
{
    let mut buffer = vec![0u8; PATH_BUFFER_SIZE];
    let mut retrieved = 0;
    let mut code = query(&mut buffer, &mut retrieved);

    if code == FmodResult::Truncated {
        let required = usize::try_from(retrieved).unwrap_or(0).max(1);
        log::trace!("{} truncated at {} bytes, retrying with {}", call, buffer.len(), required);
        buffer = vec![0u8; required];
        retrieved = 0;
        code = query(&mut buffer, &mut retrieved);
    }

    check(call, code)?;
    Ok(decode_terminated(&buffer, retrieved))
}

/// Decode the first `retrieved - 1` bytes; `retrieved` counts the terminator.
fn decode_terminated(buffer: &[u8], retrieved: i32) -> String {
    let len = usize::try_from(retrieved)
        .unwrap_or(0)
        .saturating_sub(1)
        .min(buffer.len());
    String::from_utf8_lossy(&buffer[..len]).into_owned()
}

/// Fetch a handle list sized by its paired count query.
///
/// An empty count short-circuits without calling `list`. The count reported
/// by `list` is clamped to the capacity offered, so the result never holds
/// more entries than the count seen at the time of the call.
pub(crate) fn fetch_list<T, C, L, W>(
    count_call: &'static str,
    list_call: &'static str,
    count: C,
    mut list: L,
    wrap: W,
) -> Result<Vec<T>, StudioError>
where
    C: FnOnce(&mut i32) -> FmodResult,
    L: FnMut(&mut [RawHandle], &mut i32) -> FmodResult,
    W: Fn(RawHandle) -> T,
{
    let mut capacity = 0;
    check(count_call, count(&mut capacity))?;
    let capacity = usize::try_from(capacity).unwrap_or(0);
    if capacity == 0 {
        return Ok(Vec::new());
    }

    let mut raw = vec![RawHandle::null(); capacity];
    let mut actual = 0;
    check(list_call, list(&mut raw, &mut actual))?;

    let actual = usize::try_from(actual).unwrap_or(0);
    if actual > capacity {
        log::warn!(
            "{} reported {} entries for a capacity of {}; more were added since the count",
            list_call,
            actual,
            capacity
        );
    }
    raw.truncate(actual.min(capacity));
    Ok(raw.into_iter().map(wrap).collect())
}
