#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Client-side aggregation over crash query results.
//!
//! The sum-of-counters query returns raw per-crash rows; this crate
//! folds them into per-counter totals for the summary chart. The fold
//! is plain addition, so the result is independent of row order.

use crash_map_crash_models::CounterField;
use crash_map_database_models::CounterRow;
use serde::{Deserialize, Serialize};

/// Per-counter totals across all crashes matching a year filter.
///
/// Exactly the five recognized counters are present whenever any row
/// matched; "no rows matched" is represented by [`sum_counters`]
/// returning `None`, never by a zero-filled total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummedTotals {
    /// Sum of `NO_PERSONS`.
    pub persons: i64,
    /// Sum of `NO_PERSONS_INJ_2`.
    pub serious_injuries: i64,
    /// Sum of `NO_PERSONS_INJ_3`.
    pub other_injuries: i64,
    /// Sum of `NO_PERSONS_KILLED`.
    pub killed: i64,
    /// Sum of `NO_PERSONS_NOT_INJ`.
    pub not_injured: i64,
}

impl SummedTotals {
    /// Returns the total for one counter.
    #[must_use]
    pub const fn get(self, field: CounterField) -> i64 {
        match field {
            CounterField::Persons => self.persons,
            CounterField::SeriousInjuries => self.serious_injuries,
            CounterField::OtherInjuries => self.other_injuries,
            CounterField::Killed => self.killed,
            CounterField::NotInjured => self.not_injured,
        }
    }

    /// Returns `(counter, total)` pairs in taxonomy order.
    #[must_use]
    pub fn entries(self) -> Vec<(CounterField, i64)> {
        CounterField::all()
            .iter()
            .map(|&field| (field, self.get(field)))
            .collect()
    }
}

/// Folds counter rows into per-counter totals.
///
/// A NULL counter contributes zero. Returns `None` for an empty input
/// sequence so the caller can distinguish "no matching crashes" from a
/// year in which every counter summed to zero.
#[must_use]
pub fn sum_counters(rows: &[CounterRow]) -> Option<SummedTotals> {
    if rows.is_empty() {
        return None;
    }

    let mut totals = SummedTotals::default();
    for row in rows {
        totals.persons += row.persons.unwrap_or(0);
        totals.serious_injuries += row.serious_injuries.unwrap_or(0);
        totals.other_injuries += row.other_injuries.unwrap_or(0);
        totals.killed += row.killed.unwrap_or(0);
        totals.not_injured += row.not_injured.unwrap_or(0);
    }

    Some(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(persons: i64) -> CounterRow {
        CounterRow {
            persons: Some(persons),
            serious_injuries: Some(0),
            other_injuries: Some(0),
            killed: Some(0),
            not_injured: Some(0),
        }
    }

    #[test]
    fn empty_input_is_none_not_zero() {
        assert_eq!(sum_counters(&[]), None);
        assert_ne!(sum_counters(&[row(0)]), None);
    }

    #[test]
    fn sums_each_counter_independently() {
        let rows = [row(1), row(2), row(3)];
        let totals = sum_counters(&rows).unwrap();

        assert_eq!(totals.persons, 6);
        assert_eq!(totals.serious_injuries, 0);
        assert_eq!(totals.other_injuries, 0);
        assert_eq!(totals.killed, 0);
        assert_eq!(totals.not_injured, 0);
    }

    #[test]
    fn result_is_order_independent() {
        let rows = [
            CounterRow {
                persons: Some(4),
                serious_injuries: Some(1),
                other_injuries: None,
                killed: Some(1),
                not_injured: Some(2),
            },
            row(7),
            CounterRow::default(),
        ];
        let mut reversed = rows;
        reversed.reverse();

        assert_eq!(sum_counters(&rows), sum_counters(&reversed));
    }

    #[test]
    fn null_counters_contribute_zero() {
        let rows = [
            CounterRow {
                persons: None,
                serious_injuries: Some(2),
                other_injuries: None,
                killed: None,
                not_injured: Some(1),
            },
            CounterRow {
                persons: Some(5),
                serious_injuries: None,
                other_injuries: Some(3),
                killed: None,
                not_injured: None,
            },
        ];
        let totals = sum_counters(&rows).unwrap();

        assert_eq!(totals.persons, 5);
        assert_eq!(totals.serious_injuries, 2);
        assert_eq!(totals.other_injuries, 3);
        assert_eq!(totals.killed, 0);
        assert_eq!(totals.not_injured, 1);
    }

    #[test]
    fn entries_follow_taxonomy_order() {
        let totals = sum_counters(&[row(9)]).unwrap();
        let entries = totals.entries();

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], (CounterField::Persons, 9));
        assert_eq!(entries[3], (CounterField::Killed, 0));
    }
}
