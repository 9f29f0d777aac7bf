//! Data models for Contact Viewer
//!
//! This module defines the contact record, the twelve attributes it carries,
//! and the ordered record set produced by the parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::schema::{CANONICAL_HEADER, FIELD_COUNT, SENTINEL_VALUE};

/// One of the twelve contact attributes, in canonical column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    CompanyName,
    Address,
    City,
    County,
    State,
    Zip,
    Phone1,
    Phone2,
    Email,
    Web,
}

impl Field {
    /// All fields in canonical column order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::FirstName,
        Field::LastName,
        Field::CompanyName,
        Field::Address,
        Field::City,
        Field::County,
        Field::State,
        Field::Zip,
        Field::Phone1,
        Field::Phone2,
        Field::Email,
        Field::Web,
    ];

    /// Column position of this field
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical snake_case name (e.g., "company_name")
    pub fn as_str(self) -> &'static str {
        CANONICAL_HEADER[self.index()]
    }

    /// Human-readable label (e.g., "company name")
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Whether a single match on this field selects the person card
    ///
    /// Only a first-name search does; a single last-name match stays a table.
    pub fn is_name_like(self) -> bool {
        matches!(self, Field::FirstName)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts canonical names case-insensitively, with spaces or hyphens
    /// standing in for underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown field '{}'. Expected one of: {}",
                    s,
                    CANONICAL_HEADER.join(", ")
                )
            })
    }
}

/// A single contact entry
///
/// Values are stored positionally and are read-only once built. Absent values
/// are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    values: [String; FIELD_COUNT],
}

impl Record {
    /// Build a record from values in canonical column order
    pub fn from_values(values: [String; FIELD_COUNT]) -> Self {
        Self { values }
    }

    /// The placeholder record substituted when loading fails
    pub fn sentinel() -> Self {
        Self {
            values: std::array::from_fn(|_| SENTINEL_VALUE.to_string()),
        }
    }

    /// Return a copy of this record with one attribute replaced
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field.index()] = value.into();
        self
    }

    /// Value of the given attribute
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// All values in canonical column order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// "First Last", skipping empty parts
    pub fn full_name(&self) -> String {
        [self.get(Field::FirstName), self.get(Field::LastName)]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First non-empty phone number, if any
    pub fn phone(&self) -> Option<&str> {
        [Field::Phone1, Field::Phone2]
            .into_iter()
            .map(|field| self.get(field))
            .find(|value| !value.is_empty())
    }

    /// "address, city, state zip"
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.get(Field::Address),
            self.get(Field::City),
            self.get(Field::State),
            self.get(Field::Zip)
        )
    }
}

impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for field in Field::ALL {
            map.serialize_entry(field.as_str(), self.get(field))?;
        }
        map.end()
    }
}

/// Ordered collection of records plus the column labels they were read with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set with explicit column labels
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Create a record set labelled with the canonical column names
    pub fn with_canonical_columns(records: Vec<Record>) -> Self {
        Self::new(canonical_columns(), records)
    }

    /// An empty record set with canonical column labels
    pub fn empty() -> Self {
        Self::with_canonical_columns(Vec::new())
    }

    /// The single-record placeholder dataset
    pub fn sentinel() -> Self {
        Self::with_canonical_columns(vec![Record::sentinel()])
    }

    /// Column labels in canonical order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Canonical column labels as owned strings
pub fn canonical_columns() -> Vec<String> {
    CANONICAL_HEADER.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("state".parse::<Field>().unwrap(), Field::State);
        assert_eq!("Company Name".parse::<Field>().unwrap(), Field::CompanyName);
        assert_eq!("first-name".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!(" PHONE2 ".parse::<Field>().unwrap(), Field::Phone2);
        assert!("region".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_order_matches_header() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(field.as_str(), CANONICAL_HEADER[i]);
        }
        assert_eq!(Field::CompanyName.label(), "company name");
    }

    #[test]
    fn test_sentinel_record() {
        let record = Record::sentinel();
        assert!(Field::ALL.iter().all(|f| record.get(*f) == "-"));
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::default()
            .with(Field::FirstName, "James")
            .with(Field::LastName, "Butt")
            .with(Field::Phone2, "504-845-1427")
            .with(Field::Address, "6649 N Blue Gum St")
            .with(Field::City, "New Orleans")
            .with(Field::State, "LA")
            .with(Field::Zip, "70116");

        assert_eq!(record.full_name(), "James Butt");
        assert_eq!(record.phone(), Some("504-845-1427"));
        assert_eq!(
            record.address_line(),
            "6649 N Blue Gum St, New Orleans, LA 70116"
        );
        assert_eq!(Record::default().phone(), None);
    }

    #[test]
    fn test_record_serializes_with_canonical_keys() {
        let record = Record::default().with(Field::Email, "a@b.c");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["first_name"], "");
        assert_eq!(json.as_object().unwrap().len(), FIELD_COUNT);
    }
}
