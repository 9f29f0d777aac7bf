//! Grouped counts over one field
//!
//! An [`Aggregate`] counts records by the value of a chosen field. Buckets
//! keep first-seen order, which drives badge and chart segment order.

use std::collections::HashMap;

use serde::Serialize;

use crate::app::models::{Field, Record};
use crate::constants::schema::UNKNOWN_BUCKET;

/// One bucket of an aggregate, as exported to JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateEntry {
    pub value: String,
    pub count: usize,
    pub percent: f64,
}

/// Counts of records grouped by one field's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    field: Field,
    buckets: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl Aggregate {
    /// Group `records` by `field`; empty values count as "Unknown"
    pub fn from_records(records: &[Record], field: Field) -> Self {
        let mut aggregate = Self {
            field,
            buckets: Vec::new(),
            index: HashMap::new(),
            total: 0,
        };

        for record in records {
            let value = record.get(field);
            let key = if value.is_empty() { UNKNOWN_BUCKET } else { value };
            aggregate.increment(key);
        }

        aggregate
    }

    fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.buckets[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push((key.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Field the records were grouped by
    pub fn field(&self) -> Field {
        self.field
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Count for a value, if it was seen
    pub fn get(&self, value: &str) -> Option<usize> {
        self.index.get(value).map(|&slot| self.buckets[slot].1)
    }

    /// Sum of all counts; equals the number of records grouped
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Share of the total represented by `count`, as a percentage
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Buckets with their percentages, in first-seen order
    pub fn entries(&self) -> Vec<AggregateEntry> {
        self.iter()
            .map(|(value, count)| AggregateEntry {
                value: value.to_string(),
                count,
                percent: self.percent(count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(values: &[&str]) -> Vec<Record> {
        values
            .iter()
            .map(|value| Record::default().with(Field::State, *value))
            .collect()
    }

    #[test]
    fn test_unknown_bucket_and_order() {
        let records = states(&["NV", "NV", "", "UT"]);
        let aggregate = Aggregate::from_records(&records, Field::State);

        let buckets: Vec<(&str, usize)> = aggregate.iter().collect();
        assert_eq!(buckets, vec![("NV", 2), ("Unknown", 1), ("UT", 1)]);
        assert_eq!(aggregate.total(), 4);
        assert_eq!(aggregate.get("Unknown"), Some(1));
        assert_eq!(aggregate.get("CA"), None);
    }

    #[test]
    fn test_counts_sum_to_record_count() {
        let records = states(&["CA", "NY", "CA", "", "", "TX", "NY", "CA"]);
        for field in Field::ALL {
            let aggregate = Aggregate::from_records(&records, field);
            let sum: usize = aggregate.iter().map(|(_, count)| count).sum();
            assert_eq!(sum, records.len());
            assert_eq!(aggregate.total(), records.len());
        }
    }

    #[test]
    fn test_empty_record_set() {
        let aggregate = Aggregate::from_records(&[], Field::City);
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.total(), 0);
        assert_eq!(aggregate.percent(0), 0.0);
    }

    #[test]
    fn test_entries_percentages() {
        let records = states(&["NV", "NV", "NV", "UT"]);
        let entries = Aggregate::from_records(&records, Field::State).entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "NV");
        assert!((entries[0].percent - 75.0).abs() < f64::EPSILON);
        assert!((entries[1].percent - 25.0).abs() < f64::EPSILON);
    }
}
