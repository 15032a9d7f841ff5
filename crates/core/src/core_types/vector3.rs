//! Three-component `f32` vector value type.
//!
//! `Vector3` is a plain `Copy` value with operator overloads for the usual
//! component-wise arithmetic. The `*` operator between two vectors is the
//! Hadamard (component-wise) product; use [`Vector3::dot`] or
//! [`Vector3::cross`] for the geometric products.
//!
//! # Usage
//! ```
//! use graphics_math_core::Vector3;
//!
//! let p = Vector3::new(2.0, 2.0, 1.0);
//! let q = Vector3::new(1.0, -2.0, 0.0);
//!
//! assert_eq!(p + q, Vector3::new(3.0, 0.0, 1.0));
//! assert_eq!(2.0 * q, Vector3::new(2.0, -4.0, 0.0));
//! assert_eq!(p.magnitude(), 3.0);
//! assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;

/// A vector in 3D space with single-precision components.
///
/// No invariant is enforced on the components; NaN and infinities pass
/// through arithmetic unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Standard basis vector `i`.
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Standard basis vector `j`.
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Standard basis vector `k`.
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Vector with all three components set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Vector3::new(value, value, value)
    }

    /// Flip the sign of every component in place.
    ///
    /// Returns `&mut Self` so calls can be chained.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Component-wise product.
    #[inline]
    #[must_use]
    pub fn hadamard(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Uniform scale by `s`.
    #[inline]
    #[must_use]
    pub fn scale(self, s: f32) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared norm in `f32`; may underflow or overflow where
    /// [`Vector3::magnitude`] does not.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm, `sqrt(x² + y² + z²)`.
    ///
    /// The squares are summed in `f64`, so tiny components do not underflow
    /// to a zero norm and large ones do not overflow before the square root.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn magnitude(self) -> f32 {
        let (x, y, z) = (f64::from(self.x), f64::from(self.y), f64::from(self.z));
        (x * x + y * y + z * z).sqrt() as f32
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero-length vector normalizes to [`Vector3::ZERO`] instead of NaN.
    /// This matches [`crate::library::normalize`].
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Vector3 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector3::ZERO;
        }
        self / magnitude
    }

    /// Divide by `divisor`, failing instead of producing infinities.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(self, divisor: f32) -> Result<Vector3, MathError> {
        if divisor == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self / divisor)
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True when every component is exactly zero (either sign).
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

// ============================================================================
// IN-PLACE OPERATORS
// ============================================================================

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Component-wise (Hadamard) multiply.
impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector3) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// Multiplies by the reciprocal of `rhs`. A zero divisor yields infinities.
impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        let inv = 1.0 / rhs;
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
    }
}

// ============================================================================
// PURE OPERATORS
// ============================================================================

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.hadamard(rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

/// A zero divisor yields infinities (or NaN for zero components).
impl Div<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

/// Diagnostic rendering, `{ x, y, z }`. Not meant to be parsed.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {}, {} }}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_chains_in_place() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        v.negate().negate().negate();
        assert_eq!(v, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= Vector3::new(2.0, 0.0, 1.0);
        assert_eq!(v, Vector3::new(0.0, 3.0, 3.0));
        v *= Vector3::new(5.0, 2.0, -1.0);
        assert_eq!(v, Vector3::new(0.0, 6.0, -3.0));
        v *= 2.0;
        assert_eq!(v, Vector3::new(0.0, 12.0, -6.0));
        v /= 4.0;
        assert_eq!(v, Vector3::new(0.0, 3.0, -1.5));
    }

    #[test]
    fn test_pure_operators_do_not_mutate() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_division_by_zero_propagates_infinity() {
        let v = Vector3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_checked_div_rejects_zero() {
        let v = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(v.checked_div(2.0), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.checked_div(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector3::new(3.0, 4.0, 12.0).magnitude(), 13.0);
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_extreme_components() {
        let tiny = Vector3::new(1e-30, 0.0, 0.0);
        assert!(!tiny.is_zero());
        assert_eq!(tiny.magnitude(), 1e-30);
        assert_eq!(Vector3::new(0.0, -1e20, 0.0).magnitude(), 1e20);
        // The squared components overflow f32 but the norm itself does not.
        let scale = 2f32.powi(70);
        assert_eq!(Vector3::new(3.0 * scale, 4.0 * scale, 0.0).magnitude(), 5.0 * scale);
    }

    #[test]
    fn test_normalize_extreme_components() {
        assert_eq!(Vector3::new(1e-30, 0.0, 0.0).normalize(), Vector3::UNIT_X);
        assert_eq!(Vector3::new(0.0, 0.0, 1e20).normalize(), Vector3::UNIT_Z);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = Vector3::ZERO.normalize();
        assert_eq!(n, Vector3::ZERO);
        assert!(n.is_finite());
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(Vector3::UNIT_Z.cross(Vector3::UNIT_X), Vector3::UNIT_Y);
    }

    #[test]
    fn test_index_access() {
        let mut v = Vector3::new(7.0, 8.0, 9.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[2], 9.0);
        v[1] = -1.0;
        assert_eq!(v.y, -1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vector3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Vector3::new(2.0, -1.5, 0.0).to_string(), "{ 2, -1.5, 0 }");
    }

    #[test]
    fn test_nalgebra_roundtrip() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let n: nalgebra::Vector3<f32> = v.into();
        assert_eq!(n.dot(&n), v.dot(v));
        assert_eq!(Vector3::from(n), v);
    }
}
