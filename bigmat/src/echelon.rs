//! Gaussian elimination with partial pivoting: row echelon, reduced row
//! echelon and rank

use bigmat_core::Number;
use tracing::{debug, trace};
use crate::arena::RowArena;
use crate::tolerance::Tolerance;
use crate::types::Matrix;

/// `num / den` where `den` is a pivot already known to be non-zero
pub(crate) fn ratio(num: &Number, den: &Number) -> Number {
    debug_assert!(!den.is_zero(), "elimination divided by a zero pivot");
    match num.checked_div(den) {
        Ok(q) => q,
        // unreachable: pivots pass a non-zero test before use
        Err(_) => Number::zero(),
    }
}

impl Matrix {
    /// Row echelon form with exact zero tests
    pub fn row_echelon(&self) -> Matrix {
        self.row_echelon_with(&Tolerance::exact())
    }

    /// Row echelon form.
    ///
    /// Walks pivot columns left to right. In each column the remaining row
    /// with the largest |entry| becomes the pivot; a column that is zero in
    /// all remaining rows is skipped without advancing the row. Entries below
    /// each pivot are set to exact zero. Pivots are not normalized.
    pub fn row_echelon_with(&self, tol: &Tolerance) -> Matrix {
        let mut arena = RowArena::new(self);
        let (rows, cols) = (arena.len(), arena.cols());
        debug!(rows, cols, "row echelon");

        let (mut i, mut j) = (0, 0);
        while i < rows && j < cols {
            let pivot_row = arena.max_abs_row(i, j);
            if tol.is_zero(arena.entry(pivot_row, j)) {
                j += 1;
                continue;
            }

            if pivot_row != i {
                trace!(from = pivot_row, to = i, column = j, "row swap");
                arena.swap(i, pivot_row);
            }

            for h in i + 1..rows {
                let (pivot, target) = arena.pivot_and_target(i, h);
                if target[j].is_zero() {
                    continue;
                }
                let factor = ratio(&target[j], &pivot[j]);
                target[j] = Number::zero();
                for k in j + 1..cols {
                    target[k] = target[k].sub(&factor.mul(&pivot[k]));
                }
            }

            i += 1;
            j += 1;
        }

        arena.into_matrix()
    }

    /// Reduced row echelon form with exact zero tests
    pub fn reduced_row_echelon(&self) -> Matrix {
        self.reduced_row_echelon_with(&Tolerance::exact())
    }

    /// Reduced row echelon form: every pivot is 1 and the only non-zero
    /// entry in its column.
    pub fn reduced_row_echelon_with(&self, tol: &Tolerance) -> Matrix {
        let mut b = self.row_echelon_with(tol);
        let (rows, cols) = b.shape();

        let (mut i, mut j) = (0, 0);
        while i < rows && j < cols {
            if tol.is_zero(&b.data[i][j]) {
                j += 1;
                continue;
            }

            let pivot = b.data[i][j].clone();
            for k in j + 1..cols {
                b.data[i][k] = ratio(&b.data[i][k], &pivot);
            }
            b.data[i][j] = Number::one();

            for h in 0..i {
                let factor = b.data[h][j].clone();
                if factor.is_zero() {
                    continue;
                }
                for k in j + 1..cols {
                    b.data[h][k] = b.data[h][k].sub(&factor.mul(&b.data[i][k]));
                }
                b.data[h][j] = Number::zero();
            }

            i += 1;
            j += 1;
        }

        b
    }

    /// Rank with exact zero tests
    pub fn rank(&self) -> usize {
        self.rank_with(&Tolerance::exact())
    }

    /// Number of rows of the reduced row echelon form with a non-zero entry
    pub fn rank_with(&self, tol: &Tolerance) -> usize {
        let rank = self.reduced_row_echelon_with(tol)
            .iter_rows()
            .filter(|row| row.iter().any(|x| !tol.is_zero(x)))
            .count();
        debug!(rank, "rank");
        rank
    }
}
