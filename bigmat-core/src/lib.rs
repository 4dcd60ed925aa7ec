//! bigmat core - fundamental types
//!
//! This crate provides the core types used throughout bigmat:
//! - `Number`: Arbitrary precision decimal numbers
//! - `MatrixError`: Structured errors for matrix operations

mod number;
mod error;

pub use number::{Number, NumberError, DEFAULT_PRECISION};
pub use error::{MatrixError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError, MatrixError};
    pub use crate::error::codes;
}
