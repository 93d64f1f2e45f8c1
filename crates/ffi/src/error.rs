use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use fir_lines_core::ModelError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FirLinesError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> FirLinesErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FirLinesError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFirLinesError {
    code: FirLinesErrorCode,
    msg: String,
}

impl DefaultFirLinesError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"physics"`, `"out_value"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: FirLinesErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a callback table with a missing entry.
    ///
    /// # Arguments
    /// * `callback_name` - The name of the missing callback (e.g., `"ionized_column_density"`)
    pub fn missing_callback(callback_name: &str) -> Self {
        Self {
            code: FirLinesErrorCode::MissingCallback,
            msg: format!("Callback '{callback_name}' is not set"),
        }
    }
}

impl From<ModelError> for DefaultFirLinesError {
    fn from(error: ModelError) -> Self {
        Self {
            code: FirLinesErrorCode::DomainError,
            msg: error.to_string(),
        }
    }
}

impl FirLinesError for DefaultFirLinesError {
    fn code(&self) -> FirLinesErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the line model functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirLinesErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A required callback in a callback table is null.
    MissingCallback = 2,

    /// Logarithm of a non-positive surface brightness.
    DomainError = 3,
}

impl From<DefaultFirLinesError> for FirLinesErrorCode {
    fn from(error: DefaultFirLinesError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, FirLinesErrorCode)> = const { RefCell::new((None, FirLinesErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, FirLinesErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, FirLinesErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred or the error message cannot be converted to C string.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that sets or
/// clears the error.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double delta = 0.0;
/// FirLinesErrorCode err = fir_lines_delta_de_looze(&physics, 2.0, 1.0, 1.0, 1.0, &delta);
/// if (err != Ok) {
///     const char* error = fir_lines_get_last_error();
///     if (error) {
///         printf("Comparison failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn fir_lines_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `FirLinesErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn fir_lines_get_last_error_code() -> FirLinesErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
