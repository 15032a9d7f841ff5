//! Fixed-size matrix storage.
//!
//! Both matrices are column-major: entry `(i, j)` is row `i`, column `j`, and
//! the columns are stored contiguously. Only storage and indexing are provided;
//! there is no matrix arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::vector3::Vector3;

/// 3×3 matrix stored as three [`Vector3`] columns.
///
/// ```
/// use graphics_math_core::{Matrix3, Vector3};
///
/// let m = Matrix3::new(
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
/// );
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m[1], Vector3::new(2.0, 5.0, 8.0));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Matrix3 {
    columns: [Vector3; 3],
}

impl Matrix3 {
    pub const ZERO: Matrix3 = Matrix3::from_columns(Vector3::ZERO, Vector3::ZERO, Vector3::ZERO);

    pub const IDENTITY: Matrix3 =
        Matrix3::from_columns(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z);

    /// Build from nine entries given in row-major reading order, so `nij`
    /// ends up at row `i`, column `j` and `m[(i, j)] == nij`.
    ///
    /// Storage is column-major, so the arguments are transposed on the way
    /// in: `n01` is stored in column 1, not in the first slot of column 0.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(
        n00: f32, n01: f32, n02: f32,
        n10: f32, n11: f32, n12: f32,
        n20: f32, n21: f32, n22: f32,
    ) -> Self {
        Matrix3::from_columns(
            Vector3::new(n00, n10, n20),
            Vector3::new(n01, n11, n21),
            Vector3::new(n02, n12, n22),
        )
    }

    /// `a`, `b` and `c` become columns 0, 1 and 2.
    #[must_use]
    pub const fn from_columns(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Matrix3 { columns: [a, b, c] }
    }

    #[must_use]
    pub fn columns(&self) -> &[Vector3; 3] {
        &self.columns
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.columns[col][row]
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.columns[col][row]
    }
}

/// Column access.
impl Index<usize> for Matrix3 {
    type Output = Vector3;
    fn index(&self, col: usize) -> &Vector3 {
        &self.columns[col]
    }
}

impl IndexMut<usize> for Matrix3 {
    fn index_mut(&mut self, col: usize) -> &mut Vector3 {
        &mut self.columns[col]
    }
}

/// Homogeneous 4×4 matrix.
///
/// Direction columns carry `w = 0`; the position column carries `w = 1`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Matrix4 {
    columns: [[f32; 4]; 4],
}

impl Matrix4 {
    pub const ZERO: Matrix4 = Matrix4::from_columns([[0.0; 4]; 4]);

    pub const IDENTITY: Matrix4 = Matrix4::from_columns([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[must_use]
    pub const fn from_columns(columns: [[f32; 4]; 4]) -> Self {
        Matrix4 { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[[f32; 4]; 4] {
        &self.columns
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.columns[col][row]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.columns[col][row]
    }
}
