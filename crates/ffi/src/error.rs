use graphics_math_core::MathError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait GraphicsMathError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> GmErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `GraphicsMathError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultGraphicsMathError {
    code: GmErrorCode,
    msg: String,
}

impl DefaultGraphicsMathError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"a"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: GmErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for two in-place arguments pointing at the same vector.
    pub fn aliased_arguments(first: &str, second: &str) -> Self {
        Self::invalid_parameter(format!(
            "Parameters '{first}' and '{second}' must not point to the same vector"
        ))
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: GmErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<MathError> for DefaultGraphicsMathError {
    fn from(error: MathError) -> Self {
        let code = match error {
            MathError::DegenerateInput { .. } => GmErrorCode::DegenerateInput,
            MathError::DivisionByZero => GmErrorCode::DivisionByZero,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl GraphicsMathError for DefaultGraphicsMathError {
    fn code(&self) -> GmErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the fallible graphics math functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GmErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A vector was too close to zero length for the operation (zero
    /// normalization, projection onto zero, linearly dependent basis).
    DegenerateInput = 2,

    /// Scalar division by zero.
    DivisionByZero = 3,

    /// Invalid parameter passed to function.
    InvalidParameter = 4,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, GmErrorCode)> = const { RefCell::new((None, GmErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, GmErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, GmErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last fallible call succeeded or no call has failed yet.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own
/// independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// GmVector3 n;
/// if (gm_try_normalize(v, &n) != Ok) {
///     const char* error = gm_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn gm_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `GmErrorCode::Ok` (0) if the last fallible call succeeded.
#[no_mangle]
pub extern "C" fn gm_get_last_error_code() -> GmErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
