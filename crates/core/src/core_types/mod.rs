//! Core value types

pub mod matrix;
pub mod tolerance;
pub mod vector3;

pub use matrix::{Matrix3, Matrix4};
pub use tolerance::Tolerance;
pub use vector3::Vector3;
