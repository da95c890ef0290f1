// ============================================================================
// Dose Calculation Errors
// ============================================================================

use crate::numeric::NumericError;

/// Result type alias for dose calculation operations
pub type CalcResult<T> = Result<T, DoseError>;

/// Errors raised by the fraction parser and the dose calculator.
///
/// All variants describe deterministic input problems; retrying a failed
/// calculation with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoseError {
    /// A fraction string is present but does not match `<n><unit>/<n><unit>`
    #[error("Value must be in {numerator_unit}/{denominator_unit}")]
    Format {
        numerator_unit: String,
        denominator_unit: String,
    },

    #[error("Unable to calculate dose - missing concentration")]
    MissingConcentration,

    /// Neither a minimum nor a fallback maximum dose is set
    #[error("Unable to calculate dose - missing dosing information")]
    MissingDosing,

    #[error("No weights logged")]
    NoWeightLogged,

    #[error("Precision {requested} exceeds the configured maximum of {max}")]
    PrecisionOutOfRange { requested: u32, max: u32 },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Unit tokens produced a pattern the regex engine rejected
    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Arithmetic error: {0}")]
    Numeric(#[from] NumericError),
}

impl From<regex::Error> for DoseError {
    fn from(err: regex::Error) -> Self {
        DoseError::Pattern(err.to_string())
    }
}

impl DoseError {
    pub(crate) fn format(numerator_unit: &str, denominator_unit: &str) -> Self {
        DoseError::Format {
            numerator_unit: numerator_unit.to_string(),
            denominator_unit: denominator_unit.to_string(),
        }
    }
}
