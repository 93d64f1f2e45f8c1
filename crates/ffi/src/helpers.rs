use crate::error::{with_last_error_mut, FirLinesError, FirLinesErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `FirLinesError` trait.
pub(crate) fn set_last_error(error: &impl FirLinesError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FirLinesError) -> FirLinesErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = FirLinesErrorCode::Ok;
    });
}

/// Write `value` through `out`, clear the last error and report success.
///
/// # Safety
/// `out` must be a valid, non-null, aligned pointer.
#[inline]
pub(crate) unsafe fn write_success<T>(out: *mut T, value: T) -> FirLinesErrorCode {
    out.write(value);
    clear_last_error();
    FirLinesErrorCode::Ok
}
