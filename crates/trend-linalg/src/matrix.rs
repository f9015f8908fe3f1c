//! Dense row-major matrices over `f64`.
//!
//! Every reachable [`Matrix`] is valid: constructors reject zero dimensions,
//! so operations never observe an empty shape. Matrices are transient values
//! owned by the computation that builds them; dropping one releases its
//! storage on success and failure paths alike.

use std::ops::{Index, IndexMut};

use crate::LinalgError;

/// A dense `rows x cols` matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// An all-zeros matrix. Fails when either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, LinalgError> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::InvalidDimensions { rows, cols });
        }

        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Matrix, LinalgError> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }

        Ok(m)
    }

    /// Wraps row-major storage as a matrix, checking that the length matches
    /// the shape.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix, LinalgError> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::InvalidDimensions { rows, cols });
        }

        if data.len() != rows * cols {
            return Err(LinalgError::StorageMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Consumes a single-column matrix into its column of values.
    ///
    /// For wider matrices this returns the row-major storage; column vectors
    /// are the only intended use.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// The transpose: `r[i, j] = m[j, i]`.
    pub fn transpose(&self) -> Matrix {
        let mut r = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };

        for i in 0..r.rows {
            for j in 0..r.cols {
                r[(i, j)] = self[(j, i)];
            }
        }

        r
    }

    /// Naive triple-loop matrix product. Fails when the inner dimensions
    /// disagree.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols != rhs.rows {
            return Err(LinalgError::ShapeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }

        let mut product = Matrix::zeros(self.rows, rhs.cols)?;
        for i in 0..product.rows {
            for j in 0..product.cols {
                let mut element = 0.0;
                for k in 0..self.cols {
                    element += self[(i, k)] * rhs[(k, j)];
                }
                product[(i, j)] = element;
            }
        }

        Ok(product)
    }

    /// The inverse of a square matrix.
    ///
    /// Sizes 1 and 2 use the closed forms; larger sizes run Gauss-Jordan
    /// elimination with partial (row) pivoting on the pair `[m | I]`. The
    /// singularity test is an exact zero pivot: pivot selection already
    /// maximizes the magnitude in the remaining column.
    pub fn inverse(&self) -> Result<Matrix, LinalgError> {
        if self.rows != self.cols {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;

        if n == 1 {
            if self[(0, 0)] == 0.0 {
                return Err(LinalgError::Singular);
            }

            return Matrix::from_vec(1, 1, vec![1.0 / self[(0, 0)]]);
        }

        if n == 2 {
            let det = self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)];
            if det == 0.0 {
                return Err(LinalgError::Singular);
            }

            return Matrix::from_vec(
                2,
                2,
                vec![
                    self[(1, 1)] / det,
                    -self[(0, 1)] / det,
                    -self[(1, 0)] / det,
                    self[(0, 0)] / det,
                ],
            );
        }

        let mut l = self.clone();
        let mut r = Matrix::identity(n)?;

        for i in 0..n {
            let mut k = i;
            let mut pivot = l[(i, i)];

            for j in i..n {
                if libm::fabs(l[(j, i)]) > libm::fabs(pivot) {
                    k = j;
                    pivot = l[(j, i)];
                }
            }

            if pivot == 0.0 {
                return Err(LinalgError::Singular);
            }

            if k != i {
                l.swap_rows(i, k);
                r.swap_rows(i, k);
            }

            for j in i + 1..n {
                let factor = -l[(j, i)] / l[(i, i)];
                if factor != 0.0 {
                    l.add_scaled_row(j, i, factor);
                    r.add_scaled_row(j, i, factor);
                }
            }
        }

        for i in (1..n).rev() {
            for j in 0..i {
                let factor = -l[(j, i)] / l[(i, i)];
                if factor != 0.0 {
                    l.add_scaled_row(j, i, factor);
                    r.add_scaled_row(j, i, factor);
                }
            }
        }

        for i in 0..n {
            r.divide_row(i, l[(i, i)]);
        }

        Ok(r)
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        for i in 0..self.cols {
            self.data.swap(r1 * self.cols + i, r2 * self.cols + i);
        }
    }

    fn divide_row(&mut self, row: usize, denominator: f64) {
        for i in 0..self.cols {
            self[(row, i)] /= denominator;
        }
    }

    /// `row(dest) += row(src) * factor`.
    fn add_scaled_row(&mut self, dest: usize, src: usize, factor: f64) {
        for i in 0..self.cols {
            let addend = self[(src, i)] * factor;
            self[(dest, i)] += addend;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_close(actual: &Matrix, expected: &Matrix, tolerance: f64) {
        assert_eq!(actual.rows(), expected.rows());
        assert_eq!(actual.cols(), expected.cols());
        for i in 0..actual.rows() {
            for j in 0..actual.cols() {
                assert!(
                    (actual[(i, j)] - expected[(i, j)]).abs() < tolerance,
                    "element ({i}, {j}): expected {}, got {}",
                    expected[(i, j)],
                    actual[(i, j)]
                );
            }
        }
    }

    #[test]
    fn zeros_rejects_empty_dimensions() {
        assert_eq!(
            Matrix::zeros(0, 3),
            Err(LinalgError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Matrix::zeros(3, 0),
            Err(LinalgError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn from_vec_checks_storage_length() {
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(LinalgError::StorageMismatch {
                rows: 2,
                cols: 2,
                len: 3
            })
        );
    }

    #[test]
    fn clone_round_trips_elementwise() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.clone(), m);
    }

    #[test]
    fn transpose_is_an_involution() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t[(2, 1)], 6.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn mul_rejects_incompatible_shapes() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            a.mul(&b),
            Err(LinalgError::ShapeMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 3
            })
        );
    }

    #[test]
    fn mul_matches_hand_computation() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let p = a.mul(&b).unwrap();
        let expected = Matrix::from_vec(2, 2, vec![58.0, 64.0, 139.0, 154.0]).unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn identity_is_a_multiplicative_unit() {
        let m = Matrix::from_vec(2, 2, vec![3.0, -1.0, 2.0, 5.0]).unwrap();
        let id = Matrix::identity(2).unwrap();
        assert_eq!(m.mul(&id).unwrap(), m);
        assert_eq!(id.mul(&m).unwrap(), m);
    }

    #[test]
    fn inverse_rejects_non_square() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            m.inverse(),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn inverse_1x1() {
        let m = Matrix::from_vec(1, 1, vec![4.0]).unwrap();
        assert_eq!(m.inverse().unwrap()[(0, 0)], 0.25);
        let zero = Matrix::from_vec(1, 1, vec![0.0]).unwrap();
        assert_eq!(zero.inverse(), Err(LinalgError::Singular));
    }

    #[test]
    fn inverse_2x2_uses_adjugate() {
        let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let inv = m.inverse().unwrap();
        let expected = Matrix::from_vec(2, 2, vec![0.6, -0.7, -0.2, 0.4]).unwrap();
        assert_matrix_close(&inv, &expected, 1e-12);
    }

    #[test]
    fn inverse_3x3_reproduces_identity() {
        let m = Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]).unwrap();
        let inv = m.inverse().unwrap();
        let id = Matrix::identity(3).unwrap();
        assert_matrix_close(&m.mul(&inv).unwrap(), &id, 1e-12);
        assert_matrix_close(&inv.mul(&m).unwrap(), &id, 1e-12);
    }

    #[test]
    fn inverse_pivots_past_a_zero_diagonal() {
        // The (0, 0) entry is zero, so elimination must swap rows first.
        let m = Matrix::from_vec(3, 3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]).unwrap();
        let inv = m.inverse().unwrap();
        let id = Matrix::identity(3).unwrap();
        assert_matrix_close(&m.mul(&inv).unwrap(), &id, 1e-12);
    }

    #[test]
    fn inverse_detects_singular_matrices() {
        let m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(m.inverse(), Err(LinalgError::Singular));

        let det_zero = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(det_zero.inverse(), Err(LinalgError::Singular));
    }
}
