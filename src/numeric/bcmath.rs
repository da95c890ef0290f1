// ============================================================================
// String Decimal Primitives
// Decimal-string in, decimal-string out
// ============================================================================

//! Arithmetic over decimal strings.
//!
//! Each function parses its operands into [`ExactDecimal`], performs the
//! operation and renders the result with exactly the requested number of
//! fractional digits, so `divide("20", "1", 2)` is `"20.00"`.

use super::{ExactDecimal, NumericResult};

#[inline]
fn parse(value: &str) -> NumericResult<ExactDecimal> {
    value.parse()
}

/// Exact sum. The result keeps the larger of the two input scales.
pub fn add(a: &str, b: &str) -> NumericResult<String> {
    Ok(parse(a)?.checked_add(parse(b)?)?.to_string())
}

/// Product truncated to `precision` fractional digits.
pub fn multiply(a: &str, b: &str, precision: u32) -> NumericResult<String> {
    Ok(parse(a)?.mul_trunc(parse(b)?, precision)?.to_string())
}

/// Quotient truncated to `precision` fractional digits.
pub fn divide(a: &str, b: &str, precision: u32) -> NumericResult<String> {
    Ok(parse(a)?.div_trunc(parse(b)?, precision)?.to_string())
}

/// True iff the string carries a leading minus sign.
pub fn is_negative(a: &str) -> bool {
    a.starts_with('-')
}

pub fn floor(a: &str) -> NumericResult<String> {
    Ok(parse(a)?.floor()?.to_string())
}

pub fn ceiling(a: &str) -> NumericResult<String> {
    Ok(parse(a)?.ceiling()?.to_string())
}

/// Round half away from zero to `precision` fractional digits.
pub fn round(a: &str, precision: u32) -> NumericResult<String> {
    Ok(parse(a)?.round_half_away(precision)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_add() {
        assert_eq!(add("1.5", "2.25").unwrap(), "3.75");
        assert_eq!(add("-1", "0.5").unwrap(), "-0.5");
    }

    #[test]
    fn test_multiply_truncates() {
        assert_eq!(multiply("5.000", "1.2", 3).unwrap(), "6.000");
        assert_eq!(multiply("0.999", "0.999", 2).unwrap(), "0.99");
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide("20", "1", 2).unwrap(), "20.00");
        assert_eq!(divide("15", "3", 2).unwrap(), "5.00");
        assert_eq!(divide("200", "6", 2).unwrap(), "33.33");
        assert_eq!(divide("1", "0", 2), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_is_negative() {
        assert!(is_negative("-0.1"));
        assert!(!is_negative("0.1"));
        assert!(!is_negative("0"));
    }

    #[test]
    fn test_floor_ceiling() {
        assert_eq!(floor("3.99").unwrap(), "3");
        assert_eq!(ceiling("3.01").unwrap(), "4");
        assert_eq!(ceiling("3.00").unwrap(), "3");
        assert_eq!(floor("-3.01").unwrap(), "-4");
        assert_eq!(ceiling("-3.99").unwrap(), "-3");
    }

    #[test]
    fn test_round() {
        assert_eq!(round("0.125", 2).unwrap(), "0.13");
        assert_eq!(round("-0.125", 2).unwrap(), "-0.13");
        assert_eq!(round("0.3336", 3).unwrap(), "0.334");
        assert_eq!(round("0.163", 2).unwrap(), "0.16");
        assert_eq!(round("1", 2).unwrap(), "1.00");
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(round("abc", 2), Err(NumericError::InvalidInput));
        assert_eq!(add("1", ""), Err(NumericError::InvalidInput));
    }
}
