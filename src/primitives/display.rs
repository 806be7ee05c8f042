//! Human-readable rendering of matrices.
//!
//! Output is one bracketed row per line, e.g.
//!
//! ```text
//! [ 1 2.5 ]
//! [ -0.33333 4 ]
//! ```
//!
//! This is a debugging aid, not a re-parseable format. Use
//! [`Matrix::save`](crate::Matrix::save) for exact persistence.

use super::Matrix;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Smallest magnitude (2^24) from which every `f32` is an integer.
const INTEGRAL_FROM: f32 = 16_777_216.0;

/// Formatting options for [`Matrix::print_with`].
///
/// # Examples
///
/// ```
/// use nnmatrix::PrintFormat;
///
/// let format = PrintFormat::default();
/// assert_eq!(format.format_value(1.0 / 3.0), "0.33333");
/// assert_eq!(format.format_value(2.50), "2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintFormat {
    /// Maximum number of fraction digits; trailing zeros are trimmed.
    pub max_decimals: usize,
}

impl Default for PrintFormat {
    fn default() -> Self {
        Self { max_decimals: 5 }
    }
}

impl PrintFormat {
    /// Creates a format with the given maximum number of fraction digits.
    #[must_use]
    pub fn with_max_decimals(max_decimals: usize) -> Self {
        Self { max_decimals }
    }

    /// Formats a single value.
    ///
    /// Rounds half-to-even at `max_decimals` fraction digits and strips
    /// trailing zeros and a dangling decimal point. Negative zero, and
    /// negatives that round to zero, keep their sign (`-0`). Magnitudes of
    /// 2^24 and above are always integral and print from the shortest
    /// round-trip digits of the widened `f64`, zero-padded.
    #[must_use]
    pub fn format_value(&self, value: f32) -> String {
        if value.is_finite() && value.abs() >= INTEGRAL_FROM {
            return f64::from(value).to_string();
        }
        let mut s = format!("{:.*}", self.max_decimals, value);
        if value.is_finite() && s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        s
    }
}

struct Rendered<'a> {
    matrix: &'a Matrix,
    format: PrintFormat,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.matrix.n_rows() {
            f.write_str("[ ")?;
            for &value in self.matrix.row(i) {
                f.write_str(&self.format.format_value(value))?;
                f.write_str(" ")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Prints the matrix with the default [`PrintFormat`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if writing fails.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.print_with(out, PrintFormat::default())
    }

    /// Prints the matrix, one `[ v1 v2 .. ]` line per row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Io`](crate::MatrixError::Io) if writing fails.
    pub fn print_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        format: PrintFormat,
    ) -> Result<()> {
        write!(
            out,
            "{}",
            Rendered {
                matrix: self,
                format,
            }
        )?;
        Ok(())
    }
}

/// Renders like [`Matrix::print`]; `{:.N}` overrides the decimal limit.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = f
            .precision()
            .map_or_else(PrintFormat::default, PrintFormat::with_max_decimals);
        fmt::Display::fmt(
            &Rendered {
                matrix: self,
                format,
            },
            f,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        let format = PrintFormat::default();
        assert_eq!(format.format_value(1.0), "1");
        assert_eq!(format.format_value(0.5), "0.5");
        assert_eq!(format.format_value(-2.25), "-2.25");
        assert_eq!(format.format_value(100.0), "100");
    }

    #[test]
    fn test_format_value_rounds_to_five_decimals() {
        let format = PrintFormat::default();
        assert_eq!(format.format_value(1.0 / 3.0), "0.33333");
        assert_eq!(format.format_value(2.0 / 3.0), "0.66667");
        assert_eq!(format.format_value(0.000_001), "0");
    }

    #[test]
    fn test_format_value_negative_zero() {
        let format = PrintFormat::default();
        assert_eq!(format.format_value(-0.0), "-0");
        assert_eq!(format.format_value(-0.000_001), "-0");
        assert_eq!(format.format_value(0.0), "0");
        assert_eq!(PrintFormat::with_max_decimals(0).format_value(-0.4), "-0");
    }

    #[test]
    fn test_print_negative_zero_keeps_sign() {
        let m = Matrix::from([[-0.0, -0.000_001]]);
        assert_eq!(m.to_string(), "[ -0 -0 ]\n");
    }

    #[test]
    fn test_format_value_large_magnitudes_use_shortest_digits() {
        let format = PrintFormat::default();
        assert_eq!(format.format_value(1.0e20), "100000002004087730000");
        assert_eq!(format.format_value(-1.0e20), "-100000002004087730000");
        assert_eq!(format.format_value(16_777_216.0), "16777216");
        assert_eq!(format.format_value(16_777_215.0), "16777215");
    }

    #[test]
    fn test_format_value_non_finite() {
        let format = PrintFormat::default();
        assert_eq!(format.format_value(f32::NAN), "NaN");
        assert_eq!(format.format_value(f32::INFINITY), "inf");
        assert_eq!(format.format_value(f32::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_value_custom_decimals() {
        assert_eq!(PrintFormat::with_max_decimals(2).format_value(1.23456), "1.23");
        assert_eq!(PrintFormat::with_max_decimals(0).format_value(2.4), "2");
    }

    #[test]
    fn test_print_rows() {
        let m = Matrix::from([[1.0, 2.5], [-0.125, 4.0]]);
        let mut out = Vec::new();
        m.print(&mut out).expect("writing to a Vec cannot fail");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[ 1 2.5 ]\n[ -0.125 4 ]\n"
        );
    }

    #[test]
    fn test_print_empty_row() {
        let m = Matrix::new(2, 0);
        let mut out = Vec::new();
        m.print(&mut out).expect("writing to a Vec cannot fail");
        assert_eq!(String::from_utf8(out).expect("utf8"), "[ ]\n[ ]\n");
    }

    #[test]
    fn test_display_matches_print() {
        let m = Matrix::from([[1.0 / 3.0, 0.0]]);
        let mut out = Vec::new();
        m.print(&mut out).expect("writing to a Vec cannot fail");
        assert_eq!(m.to_string(), String::from_utf8(out).expect("utf8"));
    }

    #[test]
    fn test_display_precision_override() {
        let m = Matrix::from([[1.0 / 3.0, 2.0]]);
        assert_eq!(format!("{m:.2}"), "[ 0.33 2 ]\n");
    }

    #[test]
    fn test_print_format_deserialize_defaults() {
        let format: PrintFormat = serde_json::from_str("{}").expect("valid json");
        assert_eq!(format, PrintFormat::default());

        let format: PrintFormat =
            serde_json::from_str(r#"{"max_decimals": 3}"#).expect("valid json");
        assert_eq!(format.max_decimals, 3);
    }
}
