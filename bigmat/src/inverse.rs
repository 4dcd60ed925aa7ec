//! Matrix inversion by Gauss-Jordan elimination on [A | I]

use bigmat_core::{Number, MatrixError};
use tracing::debug;
use crate::tolerance::Tolerance;
use crate::types::Matrix;

impl Matrix {
    /// Inverse with exact zero tests
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.inverse_with(&Tolerance::exact())
    }

    /// Inverse of a square matrix.
    ///
    /// Rejects matrices whose determinant (as reported by [`Matrix::det_with`])
    /// is zero, then reduces [A | I] to reduced row echelon form and reads the
    /// inverse off the right block. When LU without row exchanges hits a zero
    /// pivot the determinant is taken from [`Matrix::lup_with`] instead.
    pub fn inverse_with(&self, tol: &Tolerance) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square("inverse", self.rows, self.cols));
        }
        let n = self.rows;

        let det = match self.det_with(tol) {
            Ok(det) => det,
            Err(MatrixError::Decomposition { pivot }) => {
                debug!(pivot, "inverse: determinant from pivoted LU");
                self.lup_with(tol)?.det()
            }
            Err(e) => return Err(e),
        };
        if tol.is_zero(&det) {
            debug!("inverse: zero determinant");
            return Err(MatrixError::Singular);
        }

        let reduced = self
            .hstack(&Matrix::identity(n))?
            .reduced_row_echelon_with(tol);

        // Left block must have reduced to the identity
        for i in 0..n {
            for j in 0..n {
                let x = &reduced.data[i][j];
                let ok = if i == j { *x == Number::one() } else { tol.is_zero(x) };
                if !ok {
                    debug!(row = i, col = j, "inverse: left block is not the identity");
                    return Err(MatrixError::Singular);
                }
            }
        }

        let data = reduced.data
            .into_iter()
            .map(|row| row.into_iter().skip(n).collect())
            .collect();
        Ok(Matrix { rows: n, cols: n, data })
    }
}
