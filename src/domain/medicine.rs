// ============================================================================
// Medicine Domain Model
// ============================================================================

use crate::interfaces::DosingSpecification;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named medicine with textual dosing information.
///
/// The simplest [`DosingSpecification`]; applications backed by a database
/// implement the trait on their own records instead.
///
/// ```
/// use dose_calculator::domain::Medicine;
///
/// let amoxicillin = Medicine::new("Amoxicillin")
///     .with_min_dose("20mg/kg")
///     .with_max_dose("40mg/kg")
///     .with_concentration("50mg/mL");
/// assert_eq!(amoxicillin.name, "Amoxicillin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Medicine {
    pub name: String,

    /// Lower dosing rate, e.g. "20mg/kg"
    pub min_dose: Option<String>,

    /// Upper dosing rate; falls back to `min_dose` when unset
    pub max_dose: Option<String>,

    /// e.g. "100mg/5mL"
    pub concentration: Option<String>,
}

impl Medicine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_min_dose(mut self, dose: impl Into<String>) -> Self {
        self.min_dose = Some(dose.into());
        self
    }

    pub fn with_max_dose(mut self, dose: impl Into<String>) -> Self {
        self.max_dose = Some(dose.into());
        self
    }

    pub fn with_concentration(mut self, concentration: impl Into<String>) -> Self {
        self.concentration = Some(concentration.into());
        self
    }
}

impl DosingSpecification for Medicine {
    fn min_dose(&self) -> Option<&str> {
        self.min_dose.as_deref()
    }

    fn max_dose(&self) -> Option<&str> {
        self.max_dose.as_deref()
    }

    fn concentration(&self) -> Option<&str> {
        self.concentration.as_deref()
    }
}
