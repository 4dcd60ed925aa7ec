//! Structured errors for matrix operations
//!
//! Every fallible operation reports one of these synchronously. Nothing is
//! retried internally and no caller-visible state is modified on failure.

use crate::NumberError;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const DECOMPOSITION: &str = "DECOMPOSITION";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const OUT_OF_BOUNDS: &str = "OUT_OF_BOUNDS";
    pub const NUMBER: &str = "NUMBER";
}

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for `op`
    #[error("{}: incompatible dimensions {}×{} and {}×{}", .op, .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{op}: requires square matrix, got {rows}×{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("matrix is singular")]
    Singular,

    /// LU reached a zero pivot; no pivoting is attempted
    #[error("decomposition failed: zero pivot at U({pivot}, {pivot})")]
    Decomposition { pivot: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("index ({row}, {col}) out of bounds for {rows}×{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Number(#[from] NumberError),
}

impl MatrixError {
    pub fn dimension_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, left, right }
    }

    pub fn not_square(op: &'static str, rows: usize, cols: usize) -> Self {
        Self::NotSquare { op, rows, cols }
    }

    pub fn parse(details: impl Into<String>) -> Self {
        Self::Parse(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            Self::NotSquare { .. } => codes::NOT_SQUARE,
            Self::Singular => codes::SINGULAR,
            Self::Decomposition { .. } => codes::DECOMPOSITION,
            Self::Parse(_) => codes::PARSE_ERROR,
            Self::OutOfBounds { .. } => codes::OUT_OF_BOUNDS,
            Self::Number(NumberError::ParseError(_)) => codes::PARSE_ERROR,
            Self::Number(_) => codes::NUMBER,
        }
    }
}
