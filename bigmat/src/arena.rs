//! Working copy of a matrix's rows for in-place elimination

use bigmat_core::Number;
use crate::types::Matrix;

/// Owned rows addressed through an order vector.
///
/// Swapping two logical rows only swaps two indices. The source matrix is
/// never touched; [`RowArena::into_matrix`] materializes the logical order.
pub(crate) struct RowArena {
    rows: Vec<Vec<Number>>,
    order: Vec<usize>,
    cols: usize,
}

impl RowArena {
    pub fn new(m: &Matrix) -> Self {
        Self {
            rows: m.to_nested_list(),
            order: (0..m.rows()).collect(),
            cols: m.cols(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn entry(&self, row: usize, col: usize) -> &Number {
        &self.rows[self.order[row]][col]
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Row in `from..` with the largest |entry| in `col`; first one wins ties
    pub fn max_abs_row(&self, from: usize, col: usize) -> usize {
        let mut best = from;
        let mut best_abs = self.entry(from, col).abs();
        for h in from + 1..self.len() {
            let candidate = self.entry(h, col).abs();
            if candidate > best_abs {
                best = h;
                best_abs = candidate;
            }
        }
        best
    }

    /// Shared pivot row and mutable target row. `pivot != target`.
    pub fn pivot_and_target(&mut self, pivot: usize, target: usize) -> (&[Number], &mut [Number]) {
        let (p, t) = (self.order[pivot], self.order[target]);
        debug_assert_ne!(p, t);
        if p < t {
            let (lo, hi) = self.rows.split_at_mut(t);
            (&lo[p], &mut hi[0])
        } else {
            let (lo, hi) = self.rows.split_at_mut(p);
            (&hi[0], &mut lo[t])
        }
    }

    /// Physical row index of each logical row
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_matrix(mut self) -> Matrix {
        let rows = self.order.len();
        let data = self.order
            .iter()
            .map(|&i| std::mem::take(&mut self.rows[i]))
            .collect();
        Matrix { rows, cols: self.cols, data }
    }
}
