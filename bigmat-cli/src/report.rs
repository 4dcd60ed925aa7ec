//! Runs the engine over one matrix and collects every result

use bigmat::{Matrix, MatrixError, Number, Tolerance};
use serde::Serialize;

/// Outcome of a fallible step, kept as data so one failure does not hide
/// the others
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T> {
    Ok(T),
    Error { code: &'static str, message: String },
}

impl<T> From<Result<T, MatrixError>> for Outcome<T> {
    fn from(result: Result<T, MatrixError>) -> Self {
        match result {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Error { code: e.code(), message: e.to_string() },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Factors {
    pub l: Matrix,
    pub u: Matrix,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub matrix: Matrix,
    pub transpose: Matrix,
    pub row_echelon: Matrix,
    pub reduced_row_echelon: Matrix,
    pub rank: usize,
    pub lu: Outcome<Factors>,
    pub det: Outcome<Number>,
    pub inverse: Outcome<Matrix>,
}

impl Report {
    pub fn build(matrix: Matrix, tol: &Tolerance) -> Self {
        let lu = matrix.lu_with(tol);
        let det = lu.as_ref().map(|lu| lu.det()).map_err(Clone::clone);
        let lu = lu.map(|lu| Factors { l: lu.l, u: lu.u });
        Report {
            transpose: matrix.transpose(),
            row_echelon: matrix.row_echelon_with(tol),
            reduced_row_echelon: matrix.reduced_row_echelon_with(tol),
            rank: matrix.rank_with(tol),
            lu: lu.into(),
            det: det.into(),
            inverse: matrix.inverse_with(tol).into(),
            matrix,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        out.push(format!("A =\n{}", self.matrix));
        out.push(format!("transpose(A) =\n{}", self.transpose));
        out.push(format!("ref(A) =\n{}", self.row_echelon));
        out.push(format!("rref(A) =\n{}", self.reduced_row_echelon));
        out.push(format!("rank(A) = {}", self.rank));
        out.push(match &self.lu {
            Outcome::Ok(f) => format!("L =\n{}\nU =\n{}", f.l, f.u),
            Outcome::Error { message, .. } => format!("lu(A): {}", message),
        });
        out.push(match &self.det {
            Outcome::Ok(d) => format!("det(A) = {}", d),
            Outcome::Error { message, .. } => format!("det(A): {}", message),
        });
        out.push(match &self.inverse {
            Outcome::Ok(inv) => format!("inverse(A) =\n{}", inv),
            Outcome::Error { message, .. } => format!("inverse(A): {}", message),
        });
        out.join("\n\n")
    }
}
