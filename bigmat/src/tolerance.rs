//! Zero test used by elimination and factorization

use bigmat_core::Number;
use serde::{Serialize, Deserialize};

/// Decides when a computed entry counts as zero.
///
/// The default is exact comparison. Inputs that carry rounding noise can
/// use [`Tolerance::epsilon`] so that pivots and rank ignore residues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolerance {
    epsilon: Option<Number>,
}

impl Tolerance {
    /// Exact comparison against zero
    pub fn exact() -> Self {
        Self { epsilon: None }
    }

    /// Treat `|x| <= eps` as zero. The sign of `eps` is ignored.
    pub fn epsilon(eps: Number) -> Self {
        Self { epsilon: Some(eps.abs()) }
    }

    /// The configured epsilon, if any
    pub fn threshold(&self) -> Option<&Number> {
        self.epsilon.as_ref()
    }

    pub fn is_zero(&self, x: &Number) -> bool {
        match &self.epsilon {
            None => x.is_zero(),
            Some(eps) => x.abs() <= *eps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let tol = Tolerance::exact();
        assert!(tol.is_zero(&Number::zero()));
        assert!(!tol.is_zero(&Number::from_str("1e-60").unwrap()));
        assert_eq!(tol, Tolerance::default());
    }

    #[test]
    fn test_epsilon() {
        let tol = Tolerance::epsilon(Number::from_str("-1e-10").unwrap());
        assert_eq!(tol.threshold(), Some(&Number::from_str("1e-10").unwrap()));
        assert!(tol.is_zero(&Number::from_str("-1e-12").unwrap()));
        assert!(tol.is_zero(&Number::from_str("1e-10").unwrap()));
        assert!(!tol.is_zero(&Number::from_str("1e-9").unwrap()));
    }
}
