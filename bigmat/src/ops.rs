//! Elementwise algebra, products, transpose, concatenation and comparison

use bigmat_core::{Number, MatrixError};
use crate::types::Matrix;

impl Matrix {
    /// Elementwise combination of two same-shape matrices
    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(&Number, &Number) -> Number,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(op, self.shape(), other.shape()));
        }

        let data = self.data.iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| f(x, y)).collect())
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// A + B
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", Number::add)
    }

    /// A - B
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "sub", Number::sub)
    }

    /// Matrix product A × B
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::dimension_mismatch("mul", self.shape(), other.shape()));
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..other.cols {
                // Number is immutable, so each term yields a fresh value
                let mut acc = Number::zero();
                for j in 0..self.cols {
                    acc = acc.add(&self.data[i][j].mul(&other.data[j][k]));
                }
                result.data[i][k] = acc;
            }
        }
        Ok(result)
    }

    /// Multiply every entry by `k`
    pub fn scale(&self, k: &Number) -> Matrix {
        let data = self.data.iter()
            .map(|row| row.iter().map(|x| x.mul(k)).collect())
            .collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> Result<Number, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square("trace", self.rows, self.cols));
        }
        Ok((0..self.rows).fold(Number::zero(), |acc, i| acc.add(&self.data[i][i])))
    }

    /// C × R matrix with (j, i) = self(i, j)
    pub fn transpose(&self) -> Matrix {
        let data = (0..self.cols)
            .map(|j| (0..self.rows).map(|i| self.data[i][j].clone()).collect())
            .collect();
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    /// Horizontal concatenation [self | other]
    pub fn hstack(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows {
            return Err(MatrixError::dimension_mismatch("hstack", self.shape(), other.shape()));
        }

        let data = self.data.iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().chain(b).cloned().collect())
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols + other.cols, data })
    }

    /// Same shape and every pair of entries within `eps`.
    ///
    /// Relative error `|a - b| / |mean(a, b)|` is used when both entries are
    /// non-zero; absolute error `|a - b|` when either is zero or the mean
    /// vanishes.
    pub fn approx_eq(&self, other: &Matrix, eps: &Number) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        let two = Number::from_i64(2);
        self.iter_rows().flatten().zip(other.iter_rows().flatten()).all(|(a, b)| {
            let diff = a.sub(b).abs();
            let err = if a.is_zero() || b.is_zero() {
                diff
            } else {
                a.add(b)
                    .checked_div(&two)
                    .and_then(|mean| diff.checked_div(&mean.abs()))
                    .unwrap_or(diff)
            };
            err <= *eps
        })
    }
}

/// Exact equality: same shape and every entry compares equal
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl Eq for Matrix {}
