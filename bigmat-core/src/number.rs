//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for arbitrary precision decimal arithmetic.
//! Entries are carried at a fixed working precision so that chained
//! elimination steps do not compound the rounding error of f64.

use dashu_float::DBig;
use dashu_float::ops::Abs;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Non-finite value: {0}")]
    NonFinite(String),
}

/// Default precision for calculations (decimal digits)
pub const DEFAULT_PRECISION: usize = 50;

/// Arbitrary precision decimal number
///
/// Built on dashu-float's DBig. Every constructor yields a value carrying
/// at least [`DEFAULT_PRECISION`] significant digits.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        if val.precision() >= DEFAULT_PRECISION {
            val
        } else {
            val.with_precision(DEFAULT_PRECISION).value()
        }
    }

    /// Exact zero
    pub fn zero() -> Self {
        Self { inner: Self::with_work_precision(DBig::ZERO) }
    }

    /// Exact one
    pub fn one() -> Self {
        Self { inner: Self::with_work_precision(DBig::ONE) }
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "-42", "+7", "1/3", "1.5e10"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }
        let unsigned = s.strip_prefix('+').unwrap_or(s);

        // Handle rational format "a/b"
        if unsigned.contains('/') {
            let (num_str, den_str) = unsigned
                .split_once('/')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;

            let num = Self::from_str(num_str)?;
            let den = Self::from_str(den_str)?;
            return num.checked_div(&den);
        }

        // Scientific notation with integer mantissa: "602214076e15"
        if (unsigned.contains('e') || unsigned.contains('E')) && !unsigned.contains('.') {
            let lower = unsigned.to_lowercase();
            let (mantissa, exp) = lower
                .split_once('e')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let mantissa: IBig = mantissa.parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let exp: isize = exp.parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            // significand * 10^exponent, exact
            let result = DBig::from_parts(mantissa, exp);
            return Ok(Self { inner: Self::with_work_precision(result) });
        }

        let inner: DBig = unsigned.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from f64, rejecting NaN and infinities
    pub fn from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::NonFinite(f.to_string()));
        }
        // Display gives the shortest round-trip decimal, so 0.1 stays 0.1
        Self::from_str(&f.to_string())
    }

    // ========== Predicates ==========

    /// Exact comparison against zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    /// True unless the value is one of the infinities
    pub fn is_finite(&self) -> bool {
        !self.inner.repr().is_infinite()
    }

    /// Number of significant decimal digits carried
    pub fn precision(&self) -> usize {
        self.inner.precision()
    }

    /// Re-round to the given number of significant digits
    pub fn with_precision(&self, digits: usize) -> Self {
        Self { inner: self.inner.clone().with_precision(digits).value() }
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self { inner: -&self.inner }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self { inner: Abs::abs(self.inner.clone()) }
    }

    // ========== Conversion ==========

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        if !self.is_finite() {
            return None;
        }
        // The decimal string is exact, let the std parser do the rounding
        let result: f64 = self.inner.to_string().parse().ok()?;
        if result.is_finite() {
            Some(result)
        } else {
            None
        }
    }

    /// Render as decimal string with specified decimal places
    pub fn as_decimal(&self, places: u32) -> String {
        match self.to_f64() {
            Some(f) => format!("{:.prec$}", f, prec = places as usize),
            None => format!("{}", self.inner),
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str(s)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::from_i64(n)
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // DBig implements PartialOrd, treat None as Equal
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
