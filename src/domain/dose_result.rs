// ============================================================================
// Dose Result Value Object
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default unit label for computed doses.
pub const DEFAULT_DOSE_UNIT: &str = "mL";

/// A computed dose volume: a single value or a `min - max` range.
///
/// Immutable once built. A maximum equal to the minimum is stored as absent,
/// so `DoseResult::new("0.12", Some("0.12"), ..)` is a single value, not a
/// degenerate range. Equality compares the stored strings exactly: `"0.30"`
/// and `"0.3"` are different results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoseResult {
    min: String,
    max: Option<String>,
    unit: Option<String>,
}

impl DoseResult {
    pub fn new(
        min: impl Into<String>,
        max: Option<impl Into<String>>,
        unit: Option<impl Into<String>>,
    ) -> Self {
        let min = min.into();
        let max: Option<String> = max.map(Into::into).filter(|max: &String| *max != min);
        Self {
            min,
            max,
            unit: unit.map(Into::into),
        }
    }

    /// Single value in the default unit (mL).
    pub fn single(min: impl Into<String>) -> Self {
        Self::new(min, None::<String>, Some(DEFAULT_DOSE_UNIT))
    }

    /// Range in the default unit (mL). Collapses when `min == max`.
    pub fn range(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self::new(min, Some(max), Some(DEFAULT_DOSE_UNIT))
    }

    pub fn min(&self) -> &str {
        &self.min
    }

    /// Upper bound, absent for single-value doses.
    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn is_range(&self) -> bool {
        self.max.is_some()
    }

    /// Structural equality on `(min, max, unit)`.
    pub fn equals(&self, other: &DoseResult) -> bool {
        self == other
    }
}

impl fmt::Display for DoseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.as_deref().unwrap_or("");
        let text = match &self.max {
            Some(max) if *max != self.min => format!("{} - {} {}", self.min, max, unit),
            _ => format!("{} {}", self.min, unit),
        };
        f.write_str(text.trim())
    }
}
