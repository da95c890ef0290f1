// ============================================================================
// Fraction Parser
// Parses "<number><unit>/<number><unit>" strings such as "15mg/3kg"
// ============================================================================

use super::errors::{CalcResult, DoseError};
use crate::numeric::{ExactDecimal, NumericError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `mg/kg` dosing-rate grammar
    pub(crate) static ref MG_PER_KG: FractionParser =
        FractionParser::new("mg", "kg").expect("static mg/kg pattern");

    /// `mg/mL` concentration grammar
    pub(crate) static ref MG_PER_ML: FractionParser =
        FractionParser::new("mg", "mL").expect("static mg/mL pattern");
}

/// Numerator and denominator captured from a fraction string.
///
/// The denominator has already been defaulted (omitted => 1) and guarded
/// (zero => 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFraction {
    pub numerator: ExactDecimal,
    pub denominator: ExactDecimal,
}

impl ParsedFraction {
    /// `numerator / denominator`, truncated to `precision` digits.
    pub fn quotient(&self, precision: u32) -> CalcResult<ExactDecimal> {
        Ok(self.numerator.div_trunc(self.denominator, precision)?)
    }
}

/// Parser for one pair of unit tokens.
///
/// Whitespace anywhere in the input is ignored. The numerator is required and
/// must be immediately followed by the numerator unit; the denominator number
/// is optional and defaults to 1.
///
/// ```
/// use dose_calculator::engine::FractionParser;
///
/// let parser = FractionParser::new("mg", "mL").unwrap();
/// let per_ml = parser.parse(Some("100 mg / 5 mL"), 2).unwrap().unwrap();
/// assert_eq!(per_ml.to_string(), "20.00");
/// ```
#[derive(Debug, Clone)]
pub struct FractionParser {
    numerator_unit: String,
    denominator_unit: String,
    pattern: Regex,
}

impl FractionParser {
    /// Compile the grammar for `<n><numerator_unit>/<n><denominator_unit>`.
    pub fn new(numerator_unit: &str, denominator_unit: &str) -> CalcResult<Self> {
        let pattern = Regex::new(&format!(
            r"^([0-9.]+){}/([0-9.]*){}$",
            regex::escape(numerator_unit),
            regex::escape(denominator_unit)
        ))?;

        Ok(Self {
            numerator_unit: numerator_unit.to_string(),
            denominator_unit: denominator_unit.to_string(),
            pattern,
        })
    }

    pub fn numerator_unit(&self) -> &str {
        &self.numerator_unit
    }

    pub fn denominator_unit(&self) -> &str {
        &self.denominator_unit
    }

    fn format_error(&self) -> DoseError {
        DoseError::format(&self.numerator_unit, &self.denominator_unit)
    }

    fn parse_number(&self, digits: &str) -> CalcResult<ExactDecimal> {
        digits.parse().map_err(|err| match err {
            NumericError::InvalidInput => self.format_error(),
            other => DoseError::Numeric(other),
        })
    }

    /// Split a present fraction string into numerator and denominator.
    ///
    /// # Errors
    /// `DoseError::Format` if the text does not match the grammar exactly.
    pub fn parse_parts(&self, text: &str) -> CalcResult<ParsedFraction> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        let captures = self
            .pattern
            .captures(&compact)
            .ok_or_else(|| self.format_error())?;

        let numerator = self.parse_number(&captures[1])?;
        let mut denominator = match &captures[2] {
            "" => ExactDecimal::ONE,
            digits => self.parse_number(digits)?,
        };

        if denominator.is_zero() {
            tracing::warn!(
                input = text,
                "zero {} in fraction, using 1 instead",
                self.denominator_unit
            );
            denominator = ExactDecimal::ONE;
        }

        tracing::trace!(
            input = text,
            %numerator,
            %denominator,
            "parsed {}/{} fraction",
            self.numerator_unit,
            self.denominator_unit
        );

        Ok(ParsedFraction {
            numerator,
            denominator,
        })
    }

    /// Parse and divide, truncating to `precision` digits.
    ///
    /// Returns `Ok(None)` when `text` is `None`: an unset field is not an error.
    pub fn parse(&self, text: Option<&str>, precision: u32) -> CalcResult<Option<ExactDecimal>> {
        match text {
            None => Ok(None),
            Some(text) => self.parse_parts(text)?.quotient(precision).map(Some),
        }
    }
}

/// One-shot form of [`FractionParser::parse`] for ad hoc unit pairs.
pub fn parse_fraction(
    text: Option<&str>,
    numerator_unit: &str,
    denominator_unit: &str,
    precision: u32,
) -> CalcResult<Option<ExactDecimal>> {
    FractionParser::new(numerator_unit, denominator_unit)?.parse(text, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mg_per_kg(text: &str) -> String {
        MG_PER_KG.parse(Some(text), 2).unwrap().unwrap().to_string()
    }

    #[test]
    fn test_plain_rate() {
        assert_eq!(mg_per_kg("20mg/kg"), "20.00");
        assert_eq!(mg_per_kg("0.5mg/kg"), "0.50");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(mg_per_kg("20 mg / kg"), "20.00");
        assert_eq!(mg_per_kg(" 30 mg / kg "), "30.00");
        assert_eq!(mg_per_kg("4 5\tm g/\n4 kg"), "11.25");
    }

    #[test]
    fn test_explicit_denominator() {
        assert_eq!(mg_per_kg("15mg / 1kg"), "15.00");
        assert_eq!(mg_per_kg("15mg / 3kg"), "5.00");
        assert_eq!(mg_per_kg("45mg / 4kg"), "11.25");
    }

    #[test]
    fn test_zero_denominator_is_one() {
        assert_eq!(mg_per_kg("15mg / 0kg"), "15.00");
        assert_eq!(mg_per_kg("15mg / 0.00kg"), "15.00");
    }

    #[test]
    fn test_fractional_denominator_divides() {
        assert_eq!(mg_per_kg("15mg/0.5kg"), "30.00");
    }

    #[test]
    fn test_none_propagates() {
        assert_eq!(MG_PER_KG.parse(None, 2), Ok(None));
    }

    #[test]
    fn test_invalid_format() {
        for input in ["3mg", "mg/kg", "20mg/mL", "20/kg", "x20mg/kg", "20mg/kgx", "-20mg/kg"] {
            let err = MG_PER_KG.parse(Some(input), 2).unwrap_err();
            assert_eq!(err.to_string(), "Value must be in mg/kg", "input {:?}", input);
        }
    }

    #[test]
    fn test_malformed_number_is_format_error() {
        let err = MG_PER_KG.parse(Some("1.2.3mg/kg"), 2).unwrap_err();
        assert_eq!(err, DoseError::format("mg", "kg"));
    }

    #[test]
    fn test_concentration_grammar() {
        let parse = |text: &str| MG_PER_ML.parse(Some(text), 2).unwrap().unwrap().to_string();
        assert_eq!(parse("200mg/mL"), "200.00");
        assert_eq!(parse(" 100 mg / mL "), "100.00");
        assert_eq!(parse("200mg / 6mL"), "33.33");
        assert_eq!(parse("100mg / 0mL"), "100.00");

        let err = MG_PER_ML.parse(Some("3mg"), 2).unwrap_err();
        assert_eq!(err.to_string(), "Value must be in mg/mL");
    }

    #[test]
    fn test_units_are_case_sensitive() {
        assert!(MG_PER_ML.parse(Some("200mg/ml"), 2).is_err());
    }

    #[test]
    fn test_parse_parts() {
        let parts = MG_PER_ML.parse_parts("100mg/5mL").unwrap();
        assert_eq!(parts.numerator.to_string(), "100");
        assert_eq!(parts.denominator.to_string(), "5");
        assert_eq!(parts.quotient(3).unwrap().to_string(), "20.000");

        let implicit = MG_PER_ML.parse_parts("100mg/mL").unwrap();
        assert_eq!(implicit.denominator, ExactDecimal::ONE);
    }

    #[test]
    fn test_custom_units_are_escaped() {
        let parser = FractionParser::new("mcg", "kg.h").unwrap();
        assert_eq!(
            parser.parse(Some("5mcg/kg.h"), 1).unwrap().unwrap().to_string(),
            "5.0"
        );
        assert!(parser.parse(Some("5mcg/kgxh"), 1).is_err());
    }

    #[test]
    fn test_parse_fraction_free_function() {
        let value = parse_fraction(Some("15mg/3kg"), "mg", "kg", 3).unwrap();
        assert_eq!(value.unwrap().to_string(), "5.000");
        assert_eq!(parse_fraction(None, "mg", "kg", 3), Ok(None));
    }
}
