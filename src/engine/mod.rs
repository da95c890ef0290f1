// ============================================================================
// Engine Module
// Fraction parsing and the dose calculation pipeline
// ============================================================================

mod dose_calculator;
mod errors;
pub mod fraction;

pub use dose_calculator::DoseCalculator;
pub use errors::{CalcResult, DoseError};
pub use fraction::{parse_fraction, FractionParser, ParsedFraction};
