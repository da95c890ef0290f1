// ============================================================================
// Weighable Interface
// Anything with a logged body-weight history
// ============================================================================

use crate::domain::WeightEntry;

/// A subject (patient, animal) whose body weight is logged over time.
pub trait Weighable {
    /// All logged weights, in any order.
    fn weights(&self) -> Vec<WeightEntry>;

    /// The most recently created weight, or `None` if nothing was logged.
    ///
    /// Ordered by `created_at` descending; among entries with the same
    /// timestamp the first one returned by [`weights`](Self::weights) wins.
    /// Implementations backed by a query should override this with an
    /// ordered, limited lookup.
    fn latest_weight(&self) -> Option<WeightEntry> {
        self.weights()
            .into_iter()
            .fold(None, |latest: Option<WeightEntry>, entry| match latest {
                Some(current) if current.created_at >= entry.created_at => Some(current),
                _ => Some(entry),
            })
    }
}

impl<T: Weighable + ?Sized> Weighable for &T {
    fn weights(&self) -> Vec<WeightEntry> {
        (**self).weights()
    }

    fn latest_weight(&self) -> Option<WeightEntry> {
        (**self).latest_weight()
    }
}

impl<T: Weighable + ?Sized> Weighable for Box<T> {
    fn weights(&self) -> Vec<WeightEntry> {
        (**self).weights()
    }

    fn latest_weight(&self) -> Option<WeightEntry> {
        (**self).latest_weight()
    }
}
