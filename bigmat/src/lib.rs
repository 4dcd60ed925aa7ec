//! bigmat - dense matrices over arbitrary precision decimals
//!
//! Provides:
//! - Construction (zeros, identity, nested rows, `"1, 2; 3, 4"` literals)
//! - Elementwise algebra and products (add, sub, mul, scale, transpose, hstack)
//! - Exact and tolerance-based equality
//! - Gaussian elimination with partial pivoting (row echelon, reduced row
//!   echelon, rank)
//! - Doolittle LU, pivoted LU, determinant and inverse
//!
//! Every operation returns a freshly allocated matrix; inputs are never
//! modified. Zero tests are exact unless a [`Tolerance`] is supplied to the
//! `*_with` variants.

mod types;
mod arena;
mod construct;
mod ops;
mod tolerance;
mod echelon;
mod decompose;
mod inverse;
mod render;

pub use types::Matrix;
pub use construct::{ROW_SEPARATOR, COL_SEPARATOR};
pub use tolerance::Tolerance;
pub use decompose::{Lu, Lup};
pub use render::DISPLAY_PLACES;

pub use bigmat_core::{Number, NumberError, MatrixError};
