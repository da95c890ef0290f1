// ============================================================================
// Calculator Configuration
// Unit tokens and precision bounds for the dose calculator
// ============================================================================

use crate::domain::dose_result::DEFAULT_DOSE_UNIT;
use crate::numeric::MAX_SCALE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`DoseCalculator`](crate::engine::DoseCalculator).
///
/// The defaults match the `mg/kg` and `mg/mL` grammars and a two-digit
/// output precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Precision used by the `*_default` convenience methods
    pub default_precision: u32,

    /// Largest accepted `final_precision`. Intermediates run one digit finer.
    pub max_precision: u32,

    /// Drug mass unit, numerator of both grammars (e.g., "mg")
    pub mass_unit: String,

    /// Body weight unit, denominator of the dosing-rate grammar (e.g., "kg")
    pub weight_unit: String,

    /// Liquid volume unit, denominator of the concentration grammar and the
    /// label of every result (e.g., "mL")
    pub volume_unit: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_precision: 2,
            max_precision: 15,
            mass_unit: "mg".to_string(),
            weight_unit: "kg".to_string(),
            volume_unit: DEFAULT_DOSE_UNIT.to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set default output precision
    pub fn with_default_precision(mut self, precision: u32) -> Self {
        self.default_precision = precision;
        self
    }

    /// Builder method: Set maximum output precision
    pub fn with_max_precision(mut self, precision: u32) -> Self {
        self.max_precision = precision;
        self
    }

    /// Builder method: Set mass, weight and volume unit tokens
    pub fn with_units(
        mut self,
        mass_unit: impl Into<String>,
        weight_unit: impl Into<String>,
        volume_unit: impl Into<String>,
    ) -> Self {
        self.mass_unit = mass_unit.into();
        self.weight_unit = weight_unit.into();
        self.volume_unit = volume_unit.into();
        self
    }

    /// Whether the unit tokens are the built-in `mg`/`kg`/`mL`.
    pub(crate) fn uses_default_units(&self) -> bool {
        let defaults = Self::default();
        self.mass_unit == defaults.mass_unit
            && self.weight_unit == defaults.weight_unit
            && self.volume_unit == defaults.volume_unit
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // Output precision plus the guard digit must stay within MAX_SCALE
        if self.max_precision >= MAX_SCALE {
            return Err(format!(
                "Maximum precision must be below {}, got {}",
                MAX_SCALE, self.max_precision
            ));
        }

        if self.default_precision > self.max_precision {
            return Err(format!(
                "Default precision {} exceeds maximum precision {}",
                self.default_precision, self.max_precision
            ));
        }

        for (name, unit) in [
            ("Mass", &self.mass_unit),
            ("Weight", &self.weight_unit),
            ("Volume", &self.volume_unit),
        ] {
            if unit.is_empty() {
                return Err(format!("{} unit cannot be empty", name));
            }
            // Whitespace is stripped from inputs before matching, and '/' is
            // the fraction separator
            if unit.chars().any(|c| c.is_whitespace() || c == '/') {
                return Err(format!("{} unit cannot contain whitespace or '/'", name));
            }
            if unit.chars().any(|c| c.is_ascii_digit() || c == '.') {
                return Err(format!("{} unit cannot contain digits or '.'", name));
            }
        }

        Ok(())
    }
}
