//! Core matrix type

use std::ops::Index;
use bigmat_core::{Number, MatrixError};
use serde::{Serialize, Deserialize};

/// Dense matrix of arbitrary precision numbers.
///
/// Rows are stored as independently owned vectors. The shape is fixed at
/// construction; operations that change the shape return a new matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<Vec<Number>>,
}

/// Unchecked wire form, validated on the way in
#[derive(Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Vec<Number>>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        let m = Matrix::from_rows(repr.data)?;
        // from_rows cannot see the column count of an empty grid
        if m.rows != repr.rows || (m.rows > 0 && m.cols != repr.cols) {
            return Err(MatrixError::parse(format!(
                "declared shape {}×{} does not match data {}×{}",
                repr.rows, repr.cols, m.rows, m.cols
            )));
        }
        Ok(Matrix { cols: repr.cols, ..m })
    }
}

impl Matrix {
    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<&Number> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite the element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: Number) -> Result<(), MatrixError> {
        let (rows, cols) = self.shape();
        let slot = self.data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrixError::OutOfBounds { row, col, rows, cols })?;
        *slot = value;
        Ok(())
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> Option<&[Number]> {
        self.data.get(row).map(|r| r.as_slice())
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Number]> {
        self.data.iter().map(|r| r.as_slice())
    }

    /// Convert to nested list of Numbers
    pub fn to_nested_list(&self) -> Vec<Vec<Number>> {
        self.data.clone()
    }

    /// Re-round every entry to `digits` significant digits
    pub fn with_precision(&self, digits: usize) -> Matrix {
        let data = self.data.iter()
            .map(|row| row.iter().map(|x| x.with_precision(digits)).collect())
            .collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Number;

    /// Panics when out of bounds, like slice indexing. Use [`Matrix::get`]
    /// for a checked lookup.
    fn index(&self, (row, col): (usize, usize)) -> &Number {
        &self.data[row][col]
    }
}
