//! C ABI for `graphics-math-core`.
//!
//! The generated header (`GraphicsMathFFI.h`) exposes `GmVector3`, the
//! geometry functions as `gm_*` symbols, and the thread-local last-error
//! accessors.
//!
//! # Error reporting
//! Fallible functions return a `GmErrorCode` (`Ok == 0`). On failure the
//! message can be read with `gm_get_last_error()` from the same thread. A
//! successful fallible call clears the stored error.

mod error;
mod helpers;
mod vector;

pub use error::{gm_get_last_error, gm_get_last_error_code, GmErrorCode};
pub use vector::{
    gm_area_of_triangle, gm_checked_div, gm_cross_product, gm_dot_product, gm_length,
    gm_normalize, gm_orthogonalize, gm_orthonormalize, gm_perpendicular, gm_projection,
    gm_try_normalize, GmVector3,
};
