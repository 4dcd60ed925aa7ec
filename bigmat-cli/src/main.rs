//! bigmat command line
//!
//! Usage: `bigmat [LITERAL]`
//!
//! Parses a matrix literal such as `"1, 2; 3, 4"` (or uses a built-in
//! sample), then prints its transpose, echelon forms, rank, LU factors,
//! determinant and inverse.
//!
//! Environment:
//! - `RUST_LOG`: log filter, default `info`
//! - `BIGMAT_PRECISION`: significant digits for parsed entries
//! - `BIGMAT_EPSILON`: zero tolerance for elimination, default exact
//! - `BIGMAT_OUTPUT`: `text` (default) or `json`

mod config;
mod report;

use std::env;
use std::process::ExitCode;
use bigmat::Matrix;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use config::{Config, OutputFormat};
use report::Report;

const SAMPLE: &str = "1, 6, 8; 1, 3, 5; 8, 5, 4";

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;

    let literal = env::args().nth(1).unwrap_or_else(|| SAMPLE.to_string());
    let mut matrix: Matrix = literal.parse()
        .map_err(|e| format!("cannot parse '{}': {}", literal, e))?;
    if let Some(digits) = config.precision {
        matrix = matrix.with_precision(digits);
    }
    info!(rows = matrix.rows(), cols = matrix.cols(), "matrix loaded");

    let report = Report::build(matrix, &config.tolerance);
    match config.output {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("cannot serialize report: {}", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}
