//! Matrix construction: zeros, identity, nested rows and string literals
//!
//! Literal format: rows separated by `;`, entries by `,`, whitespace around
//! entries ignored, e.g. `"1, 2; 3, 4"`.

use std::str::FromStr;
use bigmat_core::{Number, MatrixError};
use crate::types::Matrix;

/// Separator between rows in a matrix literal
pub const ROW_SEPARATOR: char = ';';
/// Separator between entries within a row
pub const COL_SEPARATOR: char = ',';

impl Matrix {
    /// rows × cols matrix of exact zeros. Zero dimensions give an empty matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let data = (0..rows)
            .map(|_| (0..cols).map(|_| Number::zero()).collect())
            .collect();
        Matrix { rows, cols, data }
    }

    /// n × n identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i][i] = Number::one();
        }
        m
    }

    /// Create from nested rows, validating that all rows have the same length
    pub fn from_rows(data: Vec<Vec<Number>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |r| r.len());

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::parse(format!(
                    "row {} has {} columns, expected {}",
                    i, row.len(), cols
                )));
            }
        }

        Ok(Matrix { rows, cols, data })
    }

    /// Convenience constructor from integer rows
    pub fn from_i64_rows(rows: &[&[i64]]) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&x| Number::from_i64(x)).collect())
                .collect(),
        )
    }

    /// Parse a literal, returning `None` on any malformed input
    pub fn from_literal(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(MatrixError::parse("empty matrix literal"));
        }

        let mut data = Vec::new();
        for (i, row) in s.split(ROW_SEPARATOR).enumerate() {
            let parsed = row
                .split(COL_SEPARATOR)
                .enumerate()
                .map(|(j, entry)| parse_entry(entry.trim(), i, j))
                .collect::<Result<Vec<_>, _>>()?;
            data.push(parsed);
        }

        Matrix::from_rows(data)
    }
}

/// Accepts `[+-]digits[.digits]` or `[+-].digits`
fn parse_entry(entry: &str, row: usize, col: usize) -> Result<Number, MatrixError> {
    let unsigned = entry.strip_prefix(['+', '-']).unwrap_or(entry);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(MatrixError::parse(format!(
            "entry ({}, {}) is not a decimal number: '{}'",
            row, col, entry
        )));
    }

    // Canonical form so "3." and ".25" reach the decimal parser as "3" and "0.25"
    let sign = if entry.starts_with('-') { "-" } else { "" };
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };

    Ok(Number::from_str(&canonical)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(x: i64) -> Number {
        Number::from_i64(x)
    }

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.iter_rows().flatten().all(|x| x.is_zero()));
    }

    #[test]
    fn test_zeros_empty() {
        let m = Matrix::zeros(0, 0);
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m.iter_rows().count(), 0);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { n(1) } else { n(0) };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![n(1), n(2)], vec![n(3)]]).unwrap_err();
        assert!(matches!(err, MatrixError::Parse(_)));
    }

    #[test]
    fn test_parse_literal() {
        let m: Matrix = "1, 2; 3, 4".parse().unwrap();
        assert_eq!(m.shape(), (2, 2));
        let flat: Vec<Number> = m.iter_rows().flatten().cloned().collect();
        assert_eq!(flat, vec![n(1), n(2), n(3), n(4)]);
    }

    #[test]
    fn test_parse_signed_and_fractional() {
        let m = Matrix::from_literal(" -1.5 , +2 ; .25, 3. ").unwrap();
        assert_eq!(m[(0, 0)], Number::from_str("-1.5").unwrap());
        assert_eq!(m[(0, 1)], n(2));
        assert_eq!(m[(1, 0)], Number::from_str("0.25").unwrap());
        assert_eq!(m[(1, 1)], n(3));
    }

    #[test]
    fn test_parse_ragged_is_absent() {
        assert!(Matrix::from_literal("1,2;3").is_none());
    }

    #[test]
    fn test_parse_failures() {
        assert!(Matrix::from_literal("").is_none());
        assert!(Matrix::from_literal("   ").is_none());
        assert!(Matrix::from_literal("1, x; 3, 4").is_none());
        assert!(Matrix::from_literal("1,,2").is_none());
        assert!(Matrix::from_literal("1,2;").is_none());
        assert!(Matrix::from_literal("1e3").is_none());
        assert!(Matrix::from_literal("1/2").is_none());
        assert!(Matrix::from_literal("-").is_none());
        assert!(Matrix::from_literal(".").is_none());

        let err = "1, 2; 3".parse::<Matrix>().unwrap_err();
        assert!(matches!(err, MatrixError::Parse(_)));
    }

    #[test]
    fn test_parse_single_entry() {
        let m = Matrix::from_literal("7").unwrap();
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m[(0, 0)], n(7));
    }
}
