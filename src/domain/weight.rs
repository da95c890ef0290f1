// ============================================================================
// Weight Log Domain Model
// ============================================================================

use crate::interfaces::Weighable;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One logged body weight.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightEntry {
    /// Unique entry identifier
    pub id: Uuid,

    /// Body weight in kilograms
    pub weight_kg: Decimal,

    /// When the weight was logged
    pub created_at: DateTime<Utc>,
}

impl WeightEntry {
    /// Log a weight now.
    pub fn new(weight_kg: Decimal) -> Self {
        Self::at(weight_kg, Utc::now())
    }

    /// Log a weight with an explicit timestamp (imports, backfills).
    pub fn at(weight_kg: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight_kg,
            created_at,
        }
    }
}

/// In-memory weight history for a single subject.
///
/// Entries are kept in insertion order; [`Weighable::latest_weight`] picks
/// the most recently created one.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightLog {
    entries: Vec<WeightEntry>,
}

impl WeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return it.
    pub fn record(&mut self, entry: WeightEntry) -> &WeightEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WeightEntry> for WeightLog {
    fn from_iter<I: IntoIterator<Item = WeightEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Weighable for WeightLog {
    fn weights(&self) -> Vec<WeightEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(kg: Decimal, secs: i64) -> WeightEntry {
        WeightEntry::at(kg, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_entry_creation() {
        let entry = WeightEntry::new(Decimal::new(834, 3));
        assert_eq!(entry.weight_kg, Decimal::new(834, 3));
        assert_ne!(entry.id, WeightEntry::new(Decimal::ONE).id);
    }

    #[test]
    fn test_empty_log() {
        let log = WeightLog::new();
        assert!(log.is_empty());
        assert_eq!(log.latest_weight(), None);
    }

    #[test]
    fn test_latest_weight_by_creation_time() {
        let mut log = WeightLog::new();
        log.record(at(Decimal::new(12, 1), 2_000));
        log.record(at(Decimal::new(10, 1), 1_000));
        log.record(at(Decimal::new(11, 1), 1_500));

        assert_eq!(log.len(), 3);
        assert_eq!(log.latest_weight().unwrap().weight_kg, Decimal::new(12, 1));
    }

    #[test]
    fn test_latest_weight_ties_keep_first_logged() {
        let log: WeightLog = vec![at(Decimal::new(5, 0), 100), at(Decimal::new(6, 0), 100)]
            .into_iter()
            .collect();

        assert_eq!(log.latest_weight().unwrap().weight_kg, Decimal::new(5, 0));
    }
}
