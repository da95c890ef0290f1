// ============================================================================
// Domain Models Module
// Contains the dose calculator's value objects and reference collaborators
// ============================================================================

pub mod config;
pub mod dose_result;
pub mod medicine;
pub mod weight;

pub use config::CalculatorConfig;
pub use dose_result::{DoseResult, DEFAULT_DOSE_UNIT};
pub use medicine::Medicine;
pub use weight::{WeightEntry, WeightLog};
