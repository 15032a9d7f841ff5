//! Tolerance configuration for the checked geometry operations.
//!
//! A [`Tolerance`] decides when a magnitude is "zero enough" that dividing by
//! it would be meaningless. The checked `try_*` functions in
//! [`crate::library`] use [`Tolerance::default`]; construct one explicitly to
//! pick a different epsilon.
//!
//! ```
//! use graphics_math_core::{Tolerance, Vector3};
//!
//! let loose = Tolerance::new(1e-2).unwrap();
//! assert!(loose.normalize(Vector3::new(1e-3, 0.0, 0.0)).is_err());
//! assert!(Tolerance::default().normalize(Vector3::new(1e-3, 0.0, 0.0)).is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::vector3::Vector3;
use crate::error::MathError;
use crate::library::{normalize, perpendicular, projection};

/// Magnitude threshold for degenerate-input detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    epsilon: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

impl Tolerance {
    /// Default magnitude threshold.
    pub const DEFAULT_EPSILON: f32 = 1e-6;

    /// Create a tolerance with the given epsilon.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateInput`] if `epsilon` is negative or not
    /// finite.
    pub fn new(epsilon: f32) -> Result<Self, MathError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(MathError::degenerate("tolerance", epsilon));
        }
        Ok(Tolerance { epsilon })
    }

    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Reject magnitudes at or below epsilon, and non-finite ones.
    // Deserialized values bypass `new`; a negative or NaN epsilon acts as 0.
    fn check(&self, operation: &'static str, magnitude: f32) -> Result<f32, MathError> {
        if magnitude.is_finite() && magnitude > self.epsilon.max(0.0) {
            Ok(magnitude)
        } else {
            Err(MathError::degenerate(operation, magnitude))
        }
    }

    /// Reject `magnitude` when it is not finite, zero, or at most epsilon
    /// times `reference`, the length it was derived from.
    fn check_relative(
        &self,
        operation: &'static str,
        magnitude: f32,
        reference: f32,
    ) -> Result<f32, MathError> {
        let threshold = self.epsilon.max(0.0) * reference;
        if magnitude.is_finite() && magnitude > 0.0 && magnitude > threshold {
            Ok(magnitude)
        } else {
            Err(MathError::degenerate(operation, magnitude))
        }
    }

    /// Checked normalization.
    ///
    /// # Errors
    /// [`MathError::DegenerateInput`] when the length of `v` is within epsilon
    /// of zero.
    pub fn normalize(&self, v: Vector3) -> Result<Vector3, MathError> {
        let length = self.check("normalize", v.magnitude())?;
        Ok(v / length)
    }

    /// Checked projection of `v` onto `onto`.
    ///
    /// # Errors
    /// [`MathError::DegenerateInput`] when `onto` is within epsilon of zero.
    pub fn projection(&self, v: Vector3, onto: Vector3) -> Result<Vector3, MathError> {
        self.check("projection", onto.magnitude())?;
        Ok(projection(v, onto))
    }

    /// Checked Gram-Schmidt orthogonalization.
    ///
    /// The inputs are only written once every intermediate vector has passed
    /// the magnitude check.
    ///
    /// The checks are relative, so the outcome does not depend on the overall
    /// scale of the input: `a` must exceed epsilon times the longest input,
    /// and the rejected `b` and `c` must each keep more than epsilon times
    /// their own original length.
    ///
    /// # Errors
    /// [`MathError::DegenerateInput`] when `a` is zero or when `b` or `c`
    /// collapses after removing the earlier directions (the inputs are
    /// linearly dependent).
    pub fn orthogonalize(
        &self,
        a: &mut Vector3,
        b: &mut Vector3,
        c: &mut Vector3,
    ) -> Result<(), MathError> {
        let (len_a, len_b, len_c) = (a.magnitude(), b.magnitude(), c.magnitude());
        self.check_relative("orthogonalize", len_a, len_a.max(len_b).max(len_c))?;
        let second = perpendicular(*b, *a);
        self.check_relative("orthogonalize", second.magnitude(), len_b)?;
        let third = perpendicular(perpendicular(*c, *a), second);
        self.check_relative("orthogonalize", third.magnitude(), len_c)?;

        *b = second;
        *c = third;
        Ok(())
    }

    /// Checked Gram-Schmidt orthonormalization.
    ///
    /// # Errors
    /// Same conditions as [`Tolerance::orthogonalize`]. The inputs are left
    /// untouched on failure.
    pub fn orthonormalize(
        &self,
        a: &mut Vector3,
        b: &mut Vector3,
        c: &mut Vector3,
    ) -> Result<(), MathError> {
        let (mut first, mut second, mut third) = (*a, *b, *c);
        self.orthogonalize(&mut first, &mut second, &mut third)?;

        *a = normalize(first);
        *b = normalize(second);
        *c = normalize(third);
        Ok(())
    }
}
