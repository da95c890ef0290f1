// ============================================================================
// Dosing Specification Interface
// Read-only view of a medicine's textual dosing information
// ============================================================================

/// Source of the three fraction strings a dose calculation needs.
///
/// Sample formats (all whitespace is ignored):
/// - doses: `"20mg/kg"`, `"15mg/3kg"`
/// - concentration: `"200mg/mL"`, `"100mg/5mL"`
///
/// Every accessor may return `None`. Unset values propagate as `None` from
/// the per-field calculator methods and only become errors when a volume is
/// requested.
pub trait DosingSpecification {
    /// Lower dosing rate
    fn min_dose(&self) -> Option<&str>;

    /// Upper dosing rate. When unset the calculator uses `min_dose`.
    fn max_dose(&self) -> Option<&str>;

    fn concentration(&self) -> Option<&str>;
}

impl<T: DosingSpecification + ?Sized> DosingSpecification for &T {
    fn min_dose(&self) -> Option<&str> {
        (**self).min_dose()
    }

    fn max_dose(&self) -> Option<&str> {
        (**self).max_dose()
    }

    fn concentration(&self) -> Option<&str> {
        (**self).concentration()
    }
}

impl<T: DosingSpecification + ?Sized> DosingSpecification for Box<T> {
    fn min_dose(&self) -> Option<&str> {
        (**self).min_dose()
    }

    fn max_dose(&self) -> Option<&str> {
        (**self).max_dose()
    }

    fn concentration(&self) -> Option<&str> {
        (**self).concentration()
    }
}
