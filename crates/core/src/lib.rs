//! Graphics Math Core Library
//!
//! Vector math fundamentals for 3D graphics: a `Vector3` value type with the
//! usual arithmetic operators, column-major `Matrix3`/`Matrix4` storage, and a
//! stateless library of geometric functions built on top of them.
//!
//! ## Geometry library
//!
//! - Length, dot product and right-handed cross product
//! - Projection and rejection (perpendicular component)
//! - Gram-Schmidt orthogonalization and orthonormalization
//! - Triangle area
//!
//! Unchecked functions follow IEEE-754 semantics on degenerate input (with the
//! exception of `normalize`, which maps zero to zero). The `try_*` family
//! reports degenerate input as [`MathError::DegenerateInput`].
//!
//! ```
//! use graphics_math_core::{library, Vector3};
//!
//! let mut a = Vector3::new(1.0, 1.0, 0.0);
//! let mut b = Vector3::new(1.0, -2.0, 0.0);
//! let mut c = Vector3::new(0.0, -2.0, -2.0);
//! library::orthonormalize(&mut a, &mut b, &mut c);
//!
//! assert!(library::dot_product(a, b).abs() < 1e-5);
//! assert!((library::length(c) - 1.0).abs() < 1e-5);
//! ```

// Core types and configuration
pub mod core_types;
pub mod error;

// Stateless geometric functions
pub mod library;

// Re-export core types
pub use core_types::{Matrix3, Matrix4, Tolerance, Vector3};
pub use error::MathError;
pub use library::MathFunctionLibrary;
