// ============================================================================
// Exact Decimal
// Arbitrary-scale decimal with explicit truncation at every lossy step
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::MAX_SCALE;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

/// Exact base-10 number with a runtime scale.
///
/// Internally stores `mantissa × 10^-scale`. Unlike a binary float, every
/// value produced by parsing is represented exactly, and the only operations
/// that drop digits (`mul_trunc`, `div_trunc`, `rescale`) take the number of
/// fractional digits to keep as an argument and truncate toward zero.
///
/// The scale is part of the value's rendering: `"20.00"` and `"20"` compare
/// equal but print differently, which is what the dose pipeline relies on
/// when it compares formatted results.
///
/// # Example
/// ```
/// use dose_calculator::numeric::ExactDecimal;
///
/// let dose: ExactDecimal = "20".parse().unwrap();
/// let weight: ExactDecimal = "0.834".parse().unwrap();
/// let mg = dose.mul_trunc(weight, 3).unwrap();
/// assert_eq!(mg.to_string(), "16.680");
/// ```
#[derive(Clone, Copy)]
pub struct ExactDecimal {
    mantissa: i128,
    scale: u32,
}

/// Compute 10^n, failing instead of wrapping.
#[inline]
fn pow10(n: u32) -> NumericResult<i128> {
    10i128.checked_pow(n).ok_or(NumericError::Overflow)
}

#[inline]
fn check_scale(scale: u32) -> NumericResult<()> {
    if scale > MAX_SCALE {
        Err(NumericError::ScaleOutOfRange)
    } else {
        Ok(())
    }
}

impl ExactDecimal {
    /// Zero (scale 0)
    pub const ZERO: Self = Self {
        mantissa: 0,
        scale: 0,
    };

    /// One (scale 0)
    pub const ONE: Self = Self {
        mantissa: 1,
        scale: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw mantissa and scale (`mantissa × 10^-scale`).
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `scale > MAX_SCALE`.
    pub fn from_raw(mantissa: i128, scale: u32) -> NumericResult<Self> {
        check_scale(scale)?;
        Ok(Self { mantissa, scale })
    }

    /// Create from an integer value (scale 0).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            mantissa: value as i128,
            scale: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn mantissa(self) -> i128 {
        self.mantissa
    }

    /// Number of fractional digits carried (and printed).
    #[inline]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.mantissa == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.mantissa < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.mantissa > 0
    }

    /// Absolute value of the integer part and the fractional digits.
    fn magnitude_parts(self) -> (u128, u128) {
        let abs = self.mantissa.unsigned_abs();
        let divisor = 10u128.pow(self.scale);
        (abs / divisor, abs % divisor)
    }

    /// Whether any non-zero digit follows the decimal point.
    #[inline]
    pub fn has_fraction(self) -> bool {
        self.magnitude_parts().1 != 0
    }

    /// Get absolute value.
    pub fn abs(self) -> NumericResult<Self> {
        self.mantissa
            .checked_abs()
            .map(|mantissa| Self {
                mantissa,
                scale: self.scale,
            })
            .ok_or(NumericError::Overflow)
    }

    fn checked_neg(self) -> NumericResult<Self> {
        self.mantissa
            .checked_neg()
            .map(|mantissa| Self {
                mantissa,
                scale: self.scale,
            })
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// Change the number of fractional digits.
    ///
    /// Growing the scale pads with zeros; shrinking it truncates toward zero.
    ///
    /// # Errors
    /// `ScaleOutOfRange` if `precision > MAX_SCALE`, `Overflow` if padding
    /// does not fit.
    pub fn rescale(self, precision: u32) -> NumericResult<Self> {
        check_scale(precision)?;
        self.rescale_unchecked(precision)
    }

    fn rescale_unchecked(self, precision: u32) -> NumericResult<Self> {
        let mantissa = match precision.cmp(&self.scale) {
            Ordering::Equal => self.mantissa,
            Ordering::Greater => self
                .mantissa
                .checked_mul(pow10(precision - self.scale)?)
                .ok_or(NumericError::Overflow)?,
            // i128 division truncates toward zero
            Ordering::Less => self.mantissa / pow10(self.scale - precision)?,
        };
        Ok(Self {
            mantissa,
            scale: precision,
        })
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition. The result carries the larger of the two scales.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let scale = self.scale.max(rhs.scale);
        let lhs = self.rescale_unchecked(scale)?;
        let rhs = rhs.rescale_unchecked(scale)?;
        lhs.mantissa
            .checked_add(rhs.mantissa)
            .map(|mantissa| Self { mantissa, scale })
            .ok_or(NumericError::Overflow)
    }

    /// Multiply and truncate the exact product to `precision` fractional digits.
    pub fn mul_trunc(self, rhs: Self, precision: u32) -> NumericResult<Self> {
        check_scale(precision)?;
        let product = self
            .mantissa
            .checked_mul(rhs.mantissa)
            .ok_or(NumericError::Overflow)?;
        Self {
            mantissa: product,
            scale: self.scale + rhs.scale,
        }
        .rescale_unchecked(precision)
    }

    /// Divide and truncate the quotient to `precision` fractional digits.
    ///
    /// `(ma / 10^sa) / (mb / 10^sb) × 10^p = ma × 10^(sb + p - sa) / mb`, so
    /// the quotient is a single integer division and never rounds.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn div_trunc(self, rhs: Self, precision: u32) -> NumericResult<Self> {
        check_scale(precision)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let shift = i64::from(rhs.scale) + i64::from(precision) - i64::from(self.scale);
        let (numerator, denominator) = if shift >= 0 {
            let factor = pow10(shift as u32)?;
            (
                self.mantissa
                    .checked_mul(factor)
                    .ok_or(NumericError::Overflow)?,
                rhs.mantissa,
            )
        } else {
            let factor = pow10(shift.unsigned_abs() as u32)?;
            (
                self.mantissa,
                rhs.mantissa
                    .checked_mul(factor)
                    .ok_or(NumericError::Overflow)?,
            )
        };

        let mantissa = numerator
            .checked_div(denominator)
            .ok_or(NumericError::Overflow)?;
        Ok(Self {
            mantissa,
            scale: precision,
        })
    }

    /// Largest integer not greater than `self`.
    ///
    /// Negative values are computed as `-ceiling(|self|)`.
    pub fn floor(self) -> NumericResult<Self> {
        if self.is_negative() {
            return self.abs()?.ceiling()?.checked_neg();
        }
        self.rescale_unchecked(0)
    }

    /// Smallest integer not less than `self`.
    ///
    /// Negative values are computed as `-floor(|self|)`.
    pub fn ceiling(self) -> NumericResult<Self> {
        if self.is_negative() {
            return self.abs()?.floor()?.checked_neg();
        }
        let integer = self.rescale_unchecked(0)?;
        if self.has_fraction() {
            integer.checked_add(Self::ONE)
        } else {
            Ok(integer)
        }
    }

    /// Round half away from zero to `precision` fractional digits.
    ///
    /// Works entirely in truncating integer steps: scale by `10^(p+1)`, drop
    /// the remaining fraction, add `±5` at the guard digit, then truncate back
    /// down to `p` digits.
    pub fn round_half_away(self, precision: u32) -> NumericResult<Self> {
        check_scale(precision)?;
        let factor = Self {
            mantissa: pow10(precision + 1)?,
            scale: 0,
        };
        let guard = if self.is_negative() {
            Self::from_integer(-5)
        } else {
            Self::from_integer(5)
        };

        self.mul_trunc(factor, 0)?
            .checked_add(guard)?
            .div_trunc(factor, precision)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison, independent of scale.
    fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs_sign = self.mantissa.signum();
        let rhs_sign = other.mantissa.signum();
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }

        let magnitude = self.cmp_magnitude(other);
        if lhs_sign < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        let (lhs_int, lhs_frac) = self.magnitude_parts();
        let (rhs_int, rhs_frac) = other.magnitude_parts();
        let lhs_frac = lhs_frac * 10u128.pow(scale - self.scale);
        let rhs_frac = rhs_frac * 10u128.pow(scale - other.scale);
        (lhs_int, lhs_frac).cmp(&(rhs_int, rhs_frac))
    }

    /// Drop trailing fractional zeros.
    pub fn normalize(self) -> Self {
        let mut value = self;
        while value.scale > 0 && value.mantissa % 10 == 0 {
            value.mantissa /= 10;
            value.scale -= 1;
        }
        value
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for ExactDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for ExactDecimal {}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for ExactDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.mantissa.hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
            scale: self.scale,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExactDecimal({}, mantissa={}, scale={})",
            self, self.mantissa, self.scale
        )
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.magnitude_parts();
        let sign = if self.is_negative() { "-" } else { "" };

        if self.scale == 0 {
            write!(f, "{}{}", sign, int_part)
        } else {
            write!(
                f,
                "{}{}.{:0>width$}",
                sign,
                int_part,
                frac_part,
                width = self.scale as usize
            )
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl ExactDecimal {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// The scale of the `Decimal` is kept, so `Decimal::new(8340, 4)` becomes
    /// `0.8340`. Trailing zeros are dropped only when needed to fit
    /// `MAX_SCALE`.
    ///
    /// # Errors
    /// `ScaleOutOfRange` if significant digits lie beyond `MAX_SCALE`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let d = if d.scale() > MAX_SCALE { d.normalize() } else { d };
        Self::from_raw(d.mantissa(), d.scale())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `Overflow` if the mantissa exceeds the 96-bit `Decimal` range.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<rust_decimal::Decimal> for ExactDecimal {
    type Error = NumericError;

    fn try_from(d: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(d)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse from a decimal string, keeping its scale.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "123.450" -> 123.450
    /// - "-0.001" -> -0.001
    /// - ".5" -> 0.5
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() > MAX_SCALE as usize {
            return Err(NumericError::ScaleOutOfRange);
        }

        let mut mantissa: i128 = 0;
        for c in int_str.chars().chain(frac_str.chars()) {
            let digit = c.to_digit(10).ok_or(NumericError::InvalidInput)?;
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit)))
                .ok_or(NumericError::Overflow)?;
        }

        Ok(Self {
            mantissa: if is_negative { -mantissa } else { mantissa },
            scale: frac_str.len() as u32,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
