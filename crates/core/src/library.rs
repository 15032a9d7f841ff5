//! Stateless geometric functions on [`Vector3`].
//!
//! Every function here is pure except the Gram-Schmidt pair, which rewrite
//! their three arguments in place.
//!
//! # Zero handling
//! - [`normalize`] is guarded and maps the zero vector to the zero vector.
//! - [`projection`], [`perpendicular`], [`orthogonalize`] and
//!   [`orthonormalize`] do no checking. Projecting onto the zero vector, or
//!   orthogonalizing linearly dependent vectors, yields NaN or zero vectors.
//! - The `try_*` variants check magnitudes against [`Tolerance::default`] and
//!   return [`MathError::DegenerateInput`] instead.

use crate::core_types::{Tolerance, Vector3};
use crate::error::MathError;

/// Euclidean norm of `p`, accumulated in `f64`.
#[inline]
#[expect(clippy::cast_possible_truncation)]
pub fn length(p: Vector3) -> f32 {
    let x_squared = f64::from(p.x) * f64::from(p.x);
    let y_squared = f64::from(p.y) * f64::from(p.y);
    let z_squared = f64::from(p.z) * f64::from(p.z);

    (x_squared + y_squared + z_squared).sqrt() as f32
}

#[inline]
pub fn dot_product(p: Vector3, q: Vector3) -> f32 {
    p.x * q.x + p.y * q.y + p.z * q.z
}

/// Right-handed cross product, expanded against the standard basis.
///
/// ```
/// use graphics_math_core::{library::cross_product, Vector3};
///
/// let r = cross_product(Vector3::new(2.0, 2.0, 1.0), Vector3::new(1.0, -2.0, 0.0));
/// assert_eq!(r, Vector3::new(2.0, 1.0, -6.0));
/// ```
pub fn cross_product(p: Vector3, q: Vector3) -> Vector3 {
    let i = Vector3::UNIT_X;
    let j = Vector3::UNIT_Y;
    let k = Vector3::UNIT_Z;

    i * (p.y * q.z - p.z * q.y) - j * (p.x * q.z - p.z * q.x) + k * (p.x * q.y - p.y * q.x)
}

/// Orthogonal projection of `v` onto `onto`.
///
/// Uses `dot(onto, onto)` for `‖onto‖²`. A zero `onto` divides by zero and
/// yields NaN components; see [`try_projection`].
pub fn projection(v: Vector3, onto: Vector3) -> Vector3 {
    (dot_product(v, onto) / dot_product(onto, onto)) * onto
}

/// Vector rejection: the part of `v` orthogonal to `onto`.
pub fn perpendicular(v: Vector3, onto: Vector3) -> Vector3 {
    v - projection(v, onto)
}

/// Gram-Schmidt orthogonalization.
///
/// `a` is kept as the basis direction; `b` loses its component along `a`, and
/// `c` loses its components along `a` and along the new `b`. The results are
/// mutually orthogonal but not unit length. Linearly dependent input is not
/// detected.
pub fn orthogonalize(a: &mut Vector3, b: &mut Vector3, c: &mut Vector3) {
    *b = perpendicular(*b, *a);
    *c = perpendicular(*c, *a);
    *c = perpendicular(*c, *b);
}

/// Unit vector along `v`, or the zero vector when `v` has zero length.
pub fn normalize(v: Vector3) -> Vector3 {
    let length = length(v);
    if length == 0.0 {
        return Vector3::ZERO;
    }
    Vector3::new(v.x / length, v.y / length, v.z / length)
}

/// Gram-Schmidt orthonormalization: an orthonormal basis from three linearly
/// independent vectors.
pub fn orthonormalize(a: &mut Vector3, b: &mut Vector3, c: &mut Vector3) {
    *a = normalize(*a);

    *b = perpendicular(*b, *a);
    *b = normalize(*b);

    *c = perpendicular(*c, *a);
    *c = perpendicular(*c, *b);
    *c = normalize(*c);
}

/// Area of the triangle `p1 p2 p3`: half the parallelogram spanned by its
/// edges from `p1`. Collinear points give 0.
pub fn area_of_triangle(p1: Vector3, p2: Vector3, p3: Vector3) -> f32 {
    let p1p2 = p2 - p1;
    let p1p3 = p3 - p1;

    length(cross_product(p1p2, p1p3)) / 2.0
}

/// Checked [`normalize`].
///
/// # Errors
/// [`MathError::DegenerateInput`] when `v` is (nearly) zero.
pub fn try_normalize(v: Vector3) -> Result<Vector3, MathError> {
    Tolerance::default().normalize(v)
}

/// Checked [`projection`].
///
/// # Errors
/// [`MathError::DegenerateInput`] when `onto` is (nearly) zero.
pub fn try_projection(v: Vector3, onto: Vector3) -> Result<Vector3, MathError> {
    Tolerance::default().projection(v, onto)
}

/// Checked [`orthogonalize`]; the inputs are untouched on failure.
///
/// # Errors
/// [`MathError::DegenerateInput`] when the inputs are (nearly) linearly
/// dependent or `a` is (nearly) zero.
pub fn try_orthogonalize(
    a: &mut Vector3,
    b: &mut Vector3,
    c: &mut Vector3,
) -> Result<(), MathError> {
    Tolerance::default().orthogonalize(a, b, c)
}

/// Checked [`orthonormalize`]; the inputs are untouched on failure.
///
/// # Errors
/// Same conditions as [`try_orthogonalize`].
pub fn try_orthonormalize(
    a: &mut Vector3,
    b: &mut Vector3,
    c: &mut Vector3,
) -> Result<(), MathError> {
    Tolerance::default().orthonormalize(a, b, c)
}

/// Namespace type so call sites can read `MathFunctionLibrary::dot_product(p, q)`.
///
/// Every associated function forwards to the free function of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathFunctionLibrary;

impl MathFunctionLibrary {
    #[inline]
    pub fn length(p: Vector3) -> f32 {
        length(p)
    }

    #[inline]
    pub fn dot_product(p: Vector3, q: Vector3) -> f32 {
        dot_product(p, q)
    }

    #[inline]
    pub fn cross_product(p: Vector3, q: Vector3) -> Vector3 {
        cross_product(p, q)
    }

    #[inline]
    pub fn projection(v: Vector3, onto: Vector3) -> Vector3 {
        projection(v, onto)
    }

    #[inline]
    pub fn perpendicular(v: Vector3, onto: Vector3) -> Vector3 {
        perpendicular(v, onto)
    }

    #[inline]
    pub fn orthogonalize(a: &mut Vector3, b: &mut Vector3, c: &mut Vector3) {
        orthogonalize(a, b, c);
    }

    #[inline]
    pub fn normalize(v: Vector3) -> Vector3 {
        normalize(v)
    }

    #[inline]
    pub fn orthonormalize(a: &mut Vector3, b: &mut Vector3, c: &mut Vector3) {
        orthonormalize(a, b, c);
    }

    #[inline]
    pub fn area_of_triangle(p1: Vector3, p2: Vector3, p3: Vector3) -> f32 {
        area_of_triangle(p1, p2, p3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Vector3 = Vector3::new(2.0, 2.0, 1.0);
    const Q: Vector3 = Vector3::new(1.0, -2.0, 0.0);

    #[test]
    fn test_dot_product_reference_value() {
        assert_eq!(dot_product(P, Q), -2.0);
    }

    #[test]
    fn test_cross_product_reference_value() {
        assert_eq!(cross_product(P, Q), Vector3::new(2.0, 1.0, -6.0));
        assert_eq!(cross_product(P, Q), P.cross(Q));
    }

    #[test]
    fn test_projection_of_q_onto_p() {
        // dot(Q, P) = -2, |P|^2 = 9
        let expected = P * (-2.0 / 9.0);
        let actual = projection(Q, P);
        assert!((actual - expected).magnitude() < 1e-6);
    }

    #[test]
    fn test_projection_onto_zero_is_nan() {
        let v = projection(P, Vector3::ZERO);
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_perpendicular_is_orthogonal_to_onto() {
        let r = perpendicular(Q, P);
        assert!(dot_product(r, P).abs() < 1e-5);
        assert!(((r + projection(Q, P)) - Q).magnitude() < 1e-6);
    }

    #[test]
    fn test_orthogonalize_keeps_basis_vector() {
        let mut a = Vector3::new(1.0, 1.0, 0.0);
        let mut b = Vector3::new(1.0, -2.0, 0.0);
        let mut c = Vector3::new(0.0, -2.0, -2.0);
        orthogonalize(&mut a, &mut b, &mut c);
        assert_eq!(a, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_library_normalize_guards_zero() {
        assert_eq!(normalize(Vector3::ZERO), Vector3::ZERO);
        assert_eq!(normalize(Vector3::new(0.0, 0.0, 5.0)), Vector3::UNIT_Z);
    }

    #[test]
    fn test_length_of_tiny_and_huge_vectors() {
        let tiny = Vector3::new(1e-30, 0.0, 0.0);
        assert!(length(tiny) > 0.0);
        assert_eq!(length(tiny), 1e-30);
        assert_eq!(normalize(tiny), Vector3::UNIT_X);

        let huge = Vector3::new(1e20, 0.0, 0.0);
        assert_eq!(length(huge), 1e20);
        assert_eq!(normalize(huge), Vector3::UNIT_X);
        assert_eq!(try_normalize(huge), Ok(Vector3::UNIT_X));
    }

    #[test]
    fn test_area_of_triangle_reference_value() {
        let area = area_of_triangle(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-2.0, 2.0, 4.0),
            Vector3::new(7.0, -8.0, 6.0),
        );
        // cross((-3, 0, 1), (6, -10, 3)) = (10, 15, 30), length 35
        assert!((area - 17.5).abs() < 1e-4);
    }

    #[test]
    fn test_try_variants_reject_zero() {
        assert!(try_normalize(Vector3::ZERO).is_err());
        assert!(try_projection(P, Vector3::ZERO).is_err());
        assert_eq!(try_normalize(Vector3::new(0.0, 3.0, 0.0)), Ok(Vector3::UNIT_Y));
    }

    #[test]
    fn test_namespace_forwards() {
        assert_eq!(MathFunctionLibrary::dot_product(P, Q), dot_product(P, Q));
        assert_eq!(MathFunctionLibrary::length(P), 3.0);
        assert_eq!(
            MathFunctionLibrary::area_of_triangle(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y),
            0.5
        );
    }
}
