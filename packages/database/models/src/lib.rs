#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Row and value types produced by the road crash queries.
//!
//! These types represent the shapes of data as read out of the SQLite
//! image. They are distinct from the API response types in
//! `crash_map_server_models`.

use crash_map_crash_models::CounterField;
use serde::{Deserialize, Serialize};

/// One row of the `ACCIDENT`/`NODE` join used for the map.
///
/// Produced fresh per query and discarded after rendering. Coordinates
/// are optional because `NODE` rows may lack them; such records are
/// skipped by the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrashRecord {
    /// Latitude (WGS84), if the crash node has one.
    pub latitude: Option<f64>,
    /// Longitude (WGS84), if the crash node has one.
    pub longitude: Option<f64>,
    /// Accident date, verbatim from the dataset.
    pub accident_date: String,
    /// Accident time, verbatim from the dataset.
    pub accident_time: String,
    /// Accident type description.
    pub accident_type: String,
}

/// A `GROUP BY` key value. The type varies with the selected field:
/// descriptions are text, codes like `SEVERITY` are integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer-coded value.
    Integer(i64),
    /// Textual value.
    Text(String),
    /// The column was NULL for this group.
    Null,
}

impl FieldValue {
    /// Renders the value as a chart category label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Null => "Unknown".to_string(),
        }
    }
}

/// A (field-value, count) pair from the aggregate-by-field query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCount {
    /// The distinct field value.
    pub value: FieldValue,
    /// Number of matching crashes with that value.
    pub count: u64,
}

/// The five person counters of one matching `ACCIDENT` row.
///
/// Each counter is optional because the source columns are NULL-able;
/// the aggregator treats an absent counter as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterRow {
    /// `NO_PERSONS`
    pub persons: Option<i64>,
    /// `NO_PERSONS_INJ_2`
    pub serious_injuries: Option<i64>,
    /// `NO_PERSONS_INJ_3`
    pub other_injuries: Option<i64>,
    /// `NO_PERSONS_KILLED`
    pub killed: Option<i64>,
    /// `NO_PERSONS_NOT_INJ`
    pub not_injured: Option<i64>,
}

impl CounterRow {
    /// Returns the value of one counter, if present on this row.
    #[must_use]
    pub const fn get(self, field: CounterField) -> Option<i64> {
        match field {
            CounterField::Persons => self.persons,
            CounterField::SeriousInjuries => self.serious_injuries,
            CounterField::OtherInjuries => self.other_injuries,
            CounterField::Killed => self.killed,
            CounterField::NotInjured => self.not_injured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_labels() {
        assert_eq!(FieldValue::Integer(60).label(), "60");
        assert_eq!(
            FieldValue::Text("Collision with vehicle".to_string()).label(),
            "Collision with vehicle"
        );
        assert_eq!(FieldValue::Null.label(), "Unknown");
    }

    #[test]
    fn counter_row_get_covers_all_fields() {
        let row = CounterRow {
            persons: Some(3),
            serious_injuries: Some(1),
            other_injuries: None,
            killed: Some(0),
            not_injured: Some(2),
        };
        assert_eq!(row.get(CounterField::Persons), Some(3));
        assert_eq!(row.get(CounterField::SeriousInjuries), Some(1));
        assert_eq!(row.get(CounterField::OtherInjuries), None);
        assert_eq!(row.get(CounterField::Killed), Some(0));
        assert_eq!(row.get(CounterField::NotInjured), Some(2));
    }
}
