// ============================================================================
// Dose Calculator Library
// Exact-decimal medication dose volumes from textual dosing strings
// ============================================================================

//! # Dose Calculator
//!
//! Computes the liquid volume of a medication dose from a dosing rate
//! (`"20mg/kg"`), a concentration (`"100mg/5mL"`) and a body weight.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: no binary floating point anywhere in the
//!   pipeline; every lossy step truncates at an explicit precision
//! - **Half-away-from-zero rounding** of the final volume only
//! - **Whitespace-insensitive fraction grammar** with optional denominator
//! - **Single dose or range** from minimum and maximum dosing rates
//! - **Capability traits** for the medicine record and the weight log, so
//!   the core has no persistence dependency
//!
//! ## Example
//!
//! ```rust
//! use dose_calculator::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let azithromycin = Medicine::new("Azithromycin")
//!     .with_min_dose("5mg/kg")
//!     .with_concentration("100 mg/ 5mL");
//!
//! let calc = DoseCalculator::new(&azithromycin);
//!
//! let dose = calc.calculate(Decimal::new(12, 1), false, 2).unwrap();
//! assert_eq!(dose.to_string(), "0.30 mL");
//!
//! let mut log = WeightLog::new();
//! log.record(WeightEntry::new(Decimal::new(12, 1)));
//! assert_eq!(calc.calculate_for(&log, 1).unwrap().min(), "0.3");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, DoseResult, Medicine, WeightEntry, WeightLog, DEFAULT_DOSE_UNIT,
    };
    pub use crate::engine::{
        parse_fraction, CalcResult, DoseCalculator, DoseError, FractionParser, ParsedFraction,
    };
    pub use crate::interfaces::{DosingSpecification, Weighable};
    pub use crate::numeric::{ExactDecimal, NumericError, NumericResult, MAX_SCALE};
}
