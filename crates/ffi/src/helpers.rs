use crate::error::{
    with_last_error_mut, DefaultGraphicsMathError, GmErrorCode, GraphicsMathError,
};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `GraphicsMathError` trait.
pub(crate) fn set_last_error(error: &impl GraphicsMathError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl GraphicsMathError) -> GmErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = GmErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording its outcome in the thread-local error
/// state and returning the matching code.
pub(crate) fn handle_ffi_result<F>(body: F) -> GmErrorCode
where
    F: FnOnce() -> Result<(), DefaultGraphicsMathError>,
{
    match body() {
        Ok(()) => {
            clear_last_error();
            GmErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a caller-provided pointer mutably, or fail with `NullPointer`.
///
/// # Safety
/// `ptr` must be null or valid for reads and writes of `T` for the returned
/// lifetime, with no other live reference to it.
pub(crate) unsafe fn mut_from_ptr<'a, T>(
    ptr: *mut T,
    param_name: &str,
) -> Result<&'a mut T, DefaultGraphicsMathError> {
    ptr.as_mut()
        .ok_or_else(|| DefaultGraphicsMathError::null_pointer(param_name))
}
