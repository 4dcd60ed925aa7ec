//! Text rendering

use std::fmt;
use crate::construct::{COL_SEPARATOR, ROW_SEPARATOR};
use crate::types::Matrix;

/// Decimal places used by `Display`
pub const DISPLAY_PLACES: u32 = 3;

const DISPLAY_WIDTH: usize = 7;

impl Matrix {
    /// Render as a literal accepted by `str::parse::<Matrix>()`, with each
    /// entry rounded to `places` decimal places.
    pub fn to_literal(&self, places: u32) -> String {
        let col_sep = format!("{} ", COL_SEPARATOR);
        let row_sep = format!("{} ", ROW_SEPARATOR);
        self.iter_rows()
            .map(|row| {
                row.iter()
                    .map(|x| x.as_decimal(places))
                    .collect::<Vec<_>>()
                    .join(col_sep.as_str())
            })
            .collect::<Vec<_>>()
            .join(row_sep.as_str())
    }
}

/// One line per row, entries right-aligned in fixed-width columns
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", x.as_decimal(DISPLAY_PLACES), width = DISPLAY_WIDTH)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigmat_core::Number;

    #[test]
    fn test_display() {
        let m = Matrix::from_literal("1, -2.5; 10, 0").unwrap();
        assert_eq!(format!("{}", m), "  1.000  -2.500\n 10.000   0.000");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(format!("{}", Matrix::zeros(0, 0)), "");
    }

    #[test]
    fn test_literal_round_trip() {
        let m = Matrix::from_literal("1.25, -2; 0.5, 3").unwrap();
        let lit = m.to_literal(2);
        assert_eq!(lit, "1.25, -2.00; 0.50, 3.00");
        assert_eq!(Matrix::from_literal(&lit).unwrap(), m);
    }

    #[test]
    fn test_literal_rounds_to_displayed_precision() {
        let third = Number::one().checked_div(&Number::from_i64(3)).unwrap();
        let m = Matrix::from_rows(vec![vec![third]]).unwrap();
        let back = Matrix::from_literal(&m.to_literal(4)).unwrap();
        assert_eq!(back, Matrix::from_literal("0.3333").unwrap());
    }
}
