//! Runtime configuration from the environment

use std::env;
use bigmat::Tolerance;
use bigmat_core::{Number, NumberError};
use thiserror::Error;

pub const PRECISION_VAR: &str = "BIGMAT_PRECISION";
pub const EPSILON_VAR: &str = "BIGMAT_EPSILON";
pub const OUTPUT_VAR: &str = "BIGMAT_OUTPUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIGMAT_PRECISION: expected a positive digit count, got '{0}'")]
    Precision(String),

    #[error("BIGMAT_EPSILON: {0}")]
    Epsilon(#[from] NumberError),

    #[error("BIGMAT_OUTPUT: expected 'text' or 'json', got '{0}'")]
    Output(String),
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Significant digits to round parsed input to; None keeps the default
    pub precision: Option<usize>,
    pub tolerance: Tolerance,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            let digits: usize = raw.trim().parse()
                .map_err(|_| ConfigError::Precision(raw.clone()))?;
            if digits == 0 {
                return Err(ConfigError::Precision(raw));
            }
            config.precision = Some(digits);
        }

        if let Some(raw) = lookup(EPSILON_VAR) {
            config.tolerance = Tolerance::epsilon(Number::from_str(&raw)?);
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = OutputFormat::from_str(&raw)
                .ok_or(ConfigError::Output(raw))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.precision, None);
        assert_eq!(config.tolerance, Tolerance::exact());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_all_set() {
        let config = Config::from_lookup(lookup(&[
            (PRECISION_VAR, "80"),
            (EPSILON_VAR, "1e-30"),
            (OUTPUT_VAR, "JSON"),
        ])).unwrap();
        assert_eq!(config.precision, Some(80));
        assert_eq!(config.tolerance, Tolerance::epsilon(Number::from_str("1e-30").unwrap()));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(PRECISION_VAR, "0")])),
            Err(ConfigError::Precision(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(PRECISION_VAR, "many")])),
            Err(ConfigError::Precision(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(EPSILON_VAR, "tiny")])),
            Err(ConfigError::Epsilon(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(OUTPUT_VAR, "xml")])),
            Err(ConfigError::Output(_))
        ));
    }
}
