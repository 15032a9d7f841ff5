//! C ABI for the vector type and the geometry library.
//!
//! Infallible operations take and return `GmVector3` by value. Fallible
//! operations write through out-pointers and return a `GmErrorCode`; on
//! failure the out-pointers are left untouched and the message is available
//! from `gm_get_last_error()`.

use graphics_math_core::{library, MathError, Vector3};

use crate::error::{DefaultGraphicsMathError, GmErrorCode};
use crate::helpers::{handle_ffi_result, mut_from_ptr};

/// FFI-friendly 3D vector. Layout matches `struct { float x, y, z; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GmVector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3> for GmVector3 {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<GmVector3> for Vector3 {
    fn from(v: GmVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Euclidean length of `p`.
#[no_mangle]
pub extern "C" fn gm_length(p: GmVector3) -> f32 {
    library::length(p.into())
}

#[no_mangle]
pub extern "C" fn gm_dot_product(p: GmVector3, q: GmVector3) -> f32 {
    library::dot_product(p.into(), q.into())
}

/// Right-handed cross product `p × q`.
#[no_mangle]
pub extern "C" fn gm_cross_product(p: GmVector3, q: GmVector3) -> GmVector3 {
    library::cross_product(p.into(), q.into()).into()
}

/// Component of `v` orthogonal to `onto`. Unchecked: a zero `onto` yields NaN.
#[no_mangle]
pub extern "C" fn gm_perpendicular(v: GmVector3, onto: GmVector3) -> GmVector3 {
    library::perpendicular(v.into(), onto.into()).into()
}

/// Unit vector along `v`; the zero vector maps to the zero vector.
#[no_mangle]
pub extern "C" fn gm_normalize(v: GmVector3) -> GmVector3 {
    library::normalize(v.into()).into()
}

#[no_mangle]
pub extern "C" fn gm_area_of_triangle(p1: GmVector3, p2: GmVector3, p3: GmVector3) -> f32 {
    library::area_of_triangle(p1.into(), p2.into(), p3.into())
}

/// Projection of `v` onto `onto`, written to `out`.
///
/// Returns `DegenerateInput` when `onto` is (nearly) zero.
///
/// # Safety
/// `out` must be null or point to a writable `GmVector3`.
#[no_mangle]
pub unsafe extern "C" fn gm_projection(
    v: GmVector3,
    onto: GmVector3,
    out: *mut GmVector3,
) -> GmErrorCode {
    handle_ffi_result(|| {
        let out = mut_from_ptr(out, "out")?;
        *out = library::try_projection(v.into(), onto.into())?.into();
        Ok(())
    })
}

/// Unit vector along `v`, written to `out`.
///
/// Returns `DegenerateInput` when `v` is (nearly) zero.
///
/// # Safety
/// `out` must be null or point to a writable `GmVector3`.
#[no_mangle]
pub unsafe extern "C" fn gm_try_normalize(v: GmVector3, out: *mut GmVector3) -> GmErrorCode {
    handle_ffi_result(|| {
        let out = mut_from_ptr(out, "out")?;
        *out = library::try_normalize(v.into())?.into();
        Ok(())
    })
}

/// `v / divisor`, written to `out`.
///
/// Returns `DivisionByZero` when `divisor` is zero.
///
/// # Safety
/// `out` must be null or point to a writable `GmVector3`.
#[no_mangle]
pub unsafe extern "C" fn gm_checked_div(
    v: GmVector3,
    divisor: f32,
    out: *mut GmVector3,
) -> GmErrorCode {
    handle_ffi_result(|| {
        let out = mut_from_ptr(out, "out")?;
        *out = Vector3::from(v).checked_div(divisor)?.into();
        Ok(())
    })
}

/// Shared body of the in-place Gram-Schmidt entry points.
unsafe fn gram_schmidt_in_place<F>(
    a: *mut GmVector3,
    b: *mut GmVector3,
    c: *mut GmVector3,
    process: F,
) -> GmErrorCode
where
    F: FnOnce(&mut Vector3, &mut Vector3, &mut Vector3) -> Result<(), MathError>,
{
    handle_ffi_result(|| {
        for (ptr, name) in [(a, "a"), (b, "b"), (c, "c")] {
            if ptr.is_null() {
                return Err(DefaultGraphicsMathError::null_pointer(name));
            }
        }
        // Pointers must be distinct before any of them is borrowed mutably.
        if a == b {
            return Err(DefaultGraphicsMathError::aliased_arguments("a", "b"));
        }
        if a == c {
            return Err(DefaultGraphicsMathError::aliased_arguments("a", "c"));
        }
        if b == c {
            return Err(DefaultGraphicsMathError::aliased_arguments("b", "c"));
        }
        let a = mut_from_ptr(a, "a")?;
        let b = mut_from_ptr(b, "b")?;
        let c = mut_from_ptr(c, "c")?;

        let (mut va, mut vb, mut vc) = (Vector3::from(*a), Vector3::from(*b), Vector3::from(*c));
        process(&mut va, &mut vb, &mut vc)?;

        *a = va.into();
        *b = vb.into();
        *c = vc.into();
        Ok(())
    })
}

/// Gram-Schmidt orthogonalization of `a`, `b`, `c` in place.
///
/// `a` is kept; `b` and `c` lose their components along the earlier vectors.
/// Returns `DegenerateInput` (vectors untouched) for linearly dependent input,
/// `InvalidParameter` when two pointers alias.
///
/// # Safety
/// Each pointer must be null or point to a readable and writable `GmVector3`.
#[no_mangle]
pub unsafe extern "C" fn gm_orthogonalize(
    a: *mut GmVector3,
    b: *mut GmVector3,
    c: *mut GmVector3,
) -> GmErrorCode {
    gram_schmidt_in_place(a, b, c, library::try_orthogonalize)
}

/// Gram-Schmidt orthonormalization of `a`, `b`, `c` in place.
///
/// Same error conditions as `gm_orthogonalize`.
///
/// # Safety
/// Each pointer must be null or point to a readable and writable `GmVector3`.
#[no_mangle]
pub unsafe extern "C" fn gm_orthonormalize(
    a: *mut GmVector3,
    b: *mut GmVector3,
    c: *mut GmVector3,
) -> GmErrorCode {
    gram_schmidt_in_place(a, b, c, library::try_orthonormalize)
}
