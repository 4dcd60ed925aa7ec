//! LU factorization (Doolittle, with and without row pivoting) and
//! determinant

use bigmat_core::{Number, MatrixError};
use tracing::{debug, trace, warn};
use crate::arena::RowArena;
use crate::echelon::ratio;
use crate::tolerance::Tolerance;
use crate::types::Matrix;

/// A = L·U with L unit lower triangular and U upper triangular
#[derive(Debug, Clone, PartialEq)]
pub struct Lu {
    pub l: Matrix,
    pub u: Matrix,
}

impl Lu {
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.l, self.u)
    }

    /// Product of U's diagonal
    pub fn det(&self) -> Number {
        diagonal_product(&self.u)
    }
}

/// P·A = L·U, where row i of P·A is row `perm[i]` of A
#[derive(Debug, Clone, PartialEq)]
pub struct Lup {
    pub l: Matrix,
    pub u: Matrix,
    pub perm: Vec<usize>,
    /// Number of row swaps performed
    pub swaps: usize,
}

impl Lup {
    /// +1 for an even number of swaps, -1 for odd
    pub fn sign(&self) -> i64 {
        if self.swaps % 2 == 0 { 1 } else { -1 }
    }

    /// det(A) = sign(P) · Π U(i, i)
    pub fn det(&self) -> Number {
        let det = diagonal_product(&self.u);
        if self.sign() < 0 { det.neg() } else { det }
    }

    /// The permutation as a matrix: P(i, perm[i]) = 1
    pub fn permutation_matrix(&self) -> Matrix {
        let n = self.perm.len();
        let mut p = Matrix::zeros(n, n);
        for (i, &j) in self.perm.iter().enumerate() {
            p.data[i][j] = Number::one();
        }
        p
    }
}

fn diagonal_product(u: &Matrix) -> Number {
    (0..u.rows()).fold(Number::one(), |acc, i| acc.mul(&u.data[i][i]))
}

impl Matrix {
    fn require_square(&self, op: &'static str) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square(op, self.rows, self.cols));
        }
        Ok(self.rows)
    }

    /// Doolittle LU with exact zero tests
    pub fn lu(&self) -> Result<Lu, MatrixError> {
        self.lu_with(&Tolerance::exact())
    }

    /// Doolittle LU decomposition without pivoting.
    ///
    /// U(i, j) = A(i, j) - Σ_{k<i} L(i, k)·U(k, j) for j ≥ i, and
    /// L(j, i) = (A(j, i) - Σ_{k<i} L(j, k)·U(k, i)) / U(i, i) for j > i.
    ///
    /// Fails with [`MatrixError::Decomposition`] when a U(i, i) that is
    /// needed as a divisor is zero. Some non-singular matrices (e.g. with a
    /// zero in the top-left corner) fail here; use [`Matrix::lup`] for those.
    pub fn lu_with(&self, tol: &Tolerance) -> Result<Lu, MatrixError> {
        let n = self.require_square("lu")?;
        debug!(n, "lu");

        let mut l = Matrix::identity(n);
        let mut u = Matrix::zeros(n, n);

        for i in 0..n {
            for j in i..n {
                let mut acc = self.data[i][j].clone();
                for k in 0..i {
                    acc = acc.sub(&l.data[i][k].mul(&u.data[k][j]));
                }
                u.data[i][j] = acc;
            }

            // The last pivot is never a divisor
            if i + 1 < n && tol.is_zero(&u.data[i][i]) {
                warn!(pivot = i, "zero pivot in LU without row exchanges");
                return Err(MatrixError::Decomposition { pivot: i });
            }

            for j in i + 1..n {
                let mut acc = self.data[j][i].clone();
                for k in 0..i {
                    acc = acc.sub(&l.data[j][k].mul(&u.data[k][i]));
                }
                l.data[j][i] = acc.checked_div(&u.data[i][i])?;
            }
        }

        Ok(Lu { l, u })
    }

    /// LU with partial pivoting and exact zero tests
    pub fn lup(&self) -> Result<Lup, MatrixError> {
        self.lup_with(&Tolerance::exact())
    }

    /// LU decomposition with partial pivoting.
    ///
    /// Succeeds for every square matrix. A column that is zero on and below
    /// the diagonal leaves a zero pivot in U, so det() comes out zero.
    pub fn lup_with(&self, tol: &Tolerance) -> Result<Lup, MatrixError> {
        let n = self.require_square("lup")?;
        debug!(n, "lup");

        // Multipliers are stored below the diagonal and travel with row swaps
        let mut arena = RowArena::new(self);
        let mut swaps = 0;

        for k in 0..n {
            let p = arena.max_abs_row(k, k);
            if tol.is_zero(arena.entry(p, k)) {
                trace!(column = k, "zero column below diagonal");
                for h in k + 1..n {
                    let (_, target) = arena.pivot_and_target(k, h);
                    target[k] = Number::zero();
                }
                continue;
            }

            if p != k {
                trace!(from = p, to = k, "row swap");
                arena.swap(k, p);
                swaps += 1;
            }

            for h in k + 1..n {
                let (pivot, target) = arena.pivot_and_target(k, h);
                let factor = ratio(&target[k], &pivot[k]);
                for c in k + 1..n {
                    target[c] = target[c].sub(&factor.mul(&pivot[c]));
                }
                target[k] = factor;
            }
        }

        let perm = arena.order().to_vec();
        let packed = arena.into_matrix();

        let mut l = Matrix::identity(n);
        let mut u = Matrix::zeros(n, n);
        for (i, row) in packed.data.into_iter().enumerate() {
            for (j, x) in row.into_iter().enumerate() {
                if j < i {
                    l.data[i][j] = x;
                } else {
                    u.data[i][j] = x;
                }
            }
        }

        Ok(Lup { l, u, perm, swaps })
    }

    /// Determinant with exact zero tests
    pub fn det(&self) -> Result<Number, MatrixError> {
        self.det_with(&Tolerance::exact())
    }

    /// Determinant as the product of U's diagonal from [`Matrix::lu_with`].
    ///
    /// No row exchanges are made, so LU failures propagate unchanged.
    pub fn det_with(&self, tol: &Tolerance) -> Result<Number, MatrixError> {
        self.require_square("det")?;
        let det = self.lu_with(tol)?.det();
        debug!(%det, "det");
        Ok(det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> Matrix {
        Matrix::from_i64_rows(rows).unwrap()
    }

    fn eps() -> Number {
        Number::from_str("1e-40").unwrap()
    }

    fn is_unit_lower(l: &Matrix) -> bool {
        (0..l.rows()).all(|i| {
            (0..l.cols()).all(|j| match j.cmp(&i) {
                std::cmp::Ordering::Equal => l[(i, j)] == Number::one(),
                std::cmp::Ordering::Greater => l[(i, j)].is_zero(),
                std::cmp::Ordering::Less => true,
            })
        })
    }

    fn is_upper(u: &Matrix) -> bool {
        (0..u.rows()).all(|i| (0..i).all(|j| u[(i, j)].is_zero()))
    }

    #[test]
    fn test_lu_exact_product() {
        let a: Matrix = "1, 5, 8; 9, 55, 24; 4, 2, 0".parse().unwrap();
        let (l, u) = a.lu().unwrap().into_parts();
        assert!(is_unit_lower(&l));
        assert!(is_upper(&u));
        assert_eq!(l.mul(&u).unwrap(), a);
        assert_eq!(u[(2, 2)], Number::from_str("-118.4").unwrap());
    }

    #[test]
    fn test_lu_inexact_product() {
        let a = m(&[&[1, 6, 8], &[1, 3, 5], &[8, 5, 4]]);
        let lu = a.lu().unwrap();
        assert!(is_unit_lower(&lu.l));
        assert!(is_upper(&lu.u));
        assert!(lu.l.mul(&lu.u).unwrap().approx_eq(&a, &eps()));
    }

    #[test]
    fn test_lu_not_square() {
        let err = m(&[&[1, 2, 3]]).lu().unwrap_err();
        assert_eq!(err, MatrixError::not_square("lu", 1, 3));
    }

    #[test]
    fn test_lu_zero_pivot() {
        let a = m(&[&[0, 1], &[1, 0]]);
        assert_eq!(a.lu().unwrap_err(), MatrixError::Decomposition { pivot: 0 });

        let b = m(&[&[1, 2, 3], &[2, 4, 5], &[1, 1, 1]]);
        assert_eq!(b.lu().unwrap_err(), MatrixError::Decomposition { pivot: 1 });
    }

    #[test]
    fn test_lu_singular_last_pivot() {
        let a = m(&[&[1, 2], &[2, 4]]);
        let lu = a.lu().unwrap();
        assert!(lu.u[(1, 1)].is_zero());
        assert_eq!(lu.l.mul(&lu.u).unwrap(), a);
    }

    #[test]
    fn test_lu_empty() {
        let lu = Matrix::zeros(0, 0).lu().unwrap();
        assert_eq!(lu.l.shape(), (0, 0));
        assert_eq!(lu.u.shape(), (0, 0));
    }

    #[test]
    fn test_det() {
        assert_eq!(m(&[&[1, 2], &[3, 4]]).det().unwrap(), Number::from_i64(-2));
        let a: Matrix = "1, 5, 8; 9, 55, 24; 4, 2, 0".parse().unwrap();
        assert_eq!(a.det().unwrap(), Number::from_i64(-1184));
        let b = m(&[&[1, 6, 8], &[1, 3, 5], &[8, 5, 4]]);
        assert!(b.det().unwrap().sub(&Number::from_i64(51)).abs() < eps());
    }

    #[test]
    fn test_det_singular_exact_without_pivoting() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let lu = a.lu().unwrap();
        assert_eq!(lu.l[(2, 1)], Number::from_i64(2));
        assert!(lu.u[(2, 2)].is_zero());
        assert!(a.det().unwrap().is_zero());
        // pivoted elimination divides by 7 and only gets close to zero
        assert!(a.lup().unwrap().det().abs() < eps());
    }

    #[test]
    fn test_det_identity() {
        for n in 0..6 {
            assert_eq!(Matrix::identity(n).det().unwrap(), Number::one());
        }
    }

    #[test]
    fn test_det_errors() {
        assert!(matches!(m(&[&[1, 2]]).det(), Err(MatrixError::NotSquare { op: "det", .. })));
        assert!(matches!(m(&[&[0, 1], &[1, 0]]).det(), Err(MatrixError::Decomposition { .. })));
    }

    #[test]
    fn test_lup_handles_zero_corner() {
        let a = m(&[&[0, 1], &[1, 0]]);
        let lup = a.lup().unwrap();
        assert_eq!(lup.perm, vec![1, 0]);
        assert_eq!(lup.swaps, 1);
        assert_eq!(lup.det(), Number::from_i64(-1));
        let pa = lup.permutation_matrix().mul(&a).unwrap();
        assert_eq!(lup.l.mul(&lup.u).unwrap(), pa);
    }

    #[test]
    fn test_lup_product() {
        let a = m(&[&[2, 1, 1, 0], &[4, 3, 3, 1], &[8, 7, 9, 5], &[6, 7, 9, 8]]);
        let lup = a.lup().unwrap();
        assert!(is_unit_lower(&lup.l));
        assert!(is_upper(&lup.u));
        let pa = lup.permutation_matrix().mul(&a).unwrap();
        assert!(lup.l.mul(&lup.u).unwrap().approx_eq(&pa, &eps()));
        assert!(lup.det().sub(&Number::from_i64(8)).abs() < eps());
    }

    #[test]
    fn test_lup_agrees_with_lu_det() {
        let a: Matrix = "1, 5, 8; 9, 55, 24; 4, 2, 0".parse().unwrap();
        let via_lup = a.lup().unwrap().det();
        assert!(via_lup.sub(&a.det().unwrap()).abs() < eps());
    }

    #[test]
    fn test_lup_singular() {
        let a = m(&[&[0, 0, 1], &[0, 0, 2], &[0, 0, 3]]);
        let lup = a.lup().unwrap();
        assert!(lup.det().is_zero());
        let pa = lup.permutation_matrix().mul(&a).unwrap();
        assert!(lup.l.mul(&lup.u).unwrap().approx_eq(&pa, &eps()));
    }
}
