//! Errors reported by the checked geometry operations.

/// Errors that can occur in checked vector operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A magnitude fell at or below the tolerance (or was not finite), so the
    /// operation would divide by (nearly) zero.
    DegenerateInput {
        /// Name of the operation that rejected its input
        operation: &'static str,
        /// The offending magnitude
        magnitude: f32,
    },
    /// Scalar division by exactly zero
    DivisionByZero,
}

impl MathError {
    pub(crate) fn degenerate(operation: &'static str, magnitude: f32) -> Self {
        tracing::debug!(operation, magnitude, "degenerate geometric input");
        MathError::DegenerateInput {
            operation,
            magnitude,
        }
    }
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::DegenerateInput {
                operation,
                magnitude,
            } => write!(
                f,
                "Degenerate input to {operation}: magnitude {magnitude} is within tolerance of zero"
            ),
            MathError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for MathError {}
