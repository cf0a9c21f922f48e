#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Bar and pie chart configuration builder.
//!
//! Produces the trace/layout JSON the frontend charting library
//! consumes — never pixels. [`render`] is lenient about the chart-type
//! flag: an unknown kind string yields `None` (no chart, no error),
//! which is a documented caller contract violation rather than a
//! failure.

use crash_map_analytics::SummedTotals;
use crash_map_database_models::FieldCount;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Supported chart types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bar chart with per-bar value labels.
    Bar,
    /// Pie chart with label+percent slices.
    Pie,
}

/// Parallel category/value pairs — the renderer's only input shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Category labels, one per value.
    pub categories: Vec<String>,
    /// Counts or sums, one per category.
    pub values: Vec<i64>,
}

impl Series {
    /// Builds a series from aggregate-by-field counts. Raw field values
    /// become the category labels.
    #[must_use]
    pub fn from_counts(counts: &[FieldCount]) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let values = counts.iter().map(|c| c.count as i64).collect();
        Self {
            categories: counts.iter().map(|c| c.value.label()).collect(),
            values,
        }
    }

    /// Builds a series from summed counter totals. Human-readable
    /// counter labels are substituted for the raw column identifiers.
    #[must_use]
    pub fn from_totals(totals: &SummedTotals) -> Self {
        let entries = totals.entries();
        Self {
            categories: entries
                .iter()
                .map(|(field, _)| field.label().to_string())
                .collect(),
            values: entries.iter().map(|&(_, total)| total).collect(),
        }
    }

    /// Whether the series has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A single chart trace in the frontend library's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Bar trace: value labels rendered on each bar.
    Bar {
        /// Category labels along the x axis.
        x: Vec<String>,
        /// Bar heights.
        y: Vec<i64>,
        /// Per-bar text labels (the values themselves).
        text: Vec<i64>,
        /// Text placement mode.
        textposition: &'static str,
    },
    /// Pie trace: slices show label + percentage, hover shows label +
    /// raw value.
    Pie {
        /// Slice labels.
        labels: Vec<String>,
        /// Slice values.
        values: Vec<i64>,
        /// What the slice text displays.
        textinfo: &'static str,
        /// What the hover tooltip displays.
        hoverinfo: &'static str,
    },
}

/// Chart layout options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Chart title.
    pub title: String,
}

/// A complete chart: traces plus layout, serialized for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Chart traces (always exactly one).
    pub data: Vec<Trace>,
    /// Layout options.
    pub layout: Layout,
}

/// Builds the chart configuration for a series.
///
/// `kind` is the raw chart-type flag from the caller. An unrecognized
/// value produces `None`: no chart is drawn and no error is raised.
#[must_use]
pub fn render(series: &Series, kind: &str, title: &str) -> Option<ChartConfig> {
    let trace = match kind.parse::<ChartKind>().ok()? {
        ChartKind::Bar => Trace::Bar {
            x: series.categories.clone(),
            y: series.values.clone(),
            text: series.values.clone(),
            textposition: "auto",
        },
        ChartKind::Pie => Trace::Pie {
            labels: series.categories.clone(),
            values: series.values.clone(),
            textinfo: "label+percent",
            hoverinfo: "label+value",
        },
    };

    Some(ChartConfig {
        data: vec![trace],
        layout: Layout {
            title: title.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crash_map_database_models::FieldValue;

    fn series() -> Series {
        Series {
            categories: vec!["A".to_string(), "B".to_string()],
            values: vec![4, 6],
        }
    }

    #[test]
    fn pie_keeps_values_and_labels() {
        let config = render(&series(), "pie", "Crash Data Summary").unwrap();

        let Trace::Pie {
            labels,
            values,
            textinfo,
            hoverinfo,
        } = &config.data[0]
        else {
            panic!("expected a pie trace");
        };
        assert_eq!(labels, &["A", "B"]);
        assert_eq!(values, &[4, 6]);
        assert_eq!(*textinfo, "label+percent");
        assert_eq!(*hoverinfo, "label+value");
    }

    #[test]
    fn bar_labels_every_bar_with_its_value() {
        let config = render(&series(), "bar", "Crash Data by Speed Zone").unwrap();

        let Trace::Bar {
            x,
            y,
            text,
            textposition,
        } = &config.data[0]
        else {
            panic!("expected a bar trace");
        };
        assert_eq!(x, &["A", "B"]);
        assert_eq!(y, &[4, 6]);
        assert_eq!(text, y);
        assert_eq!(*textposition, "auto");
    }

    #[test]
    fn unknown_kind_draws_nothing() {
        assert_eq!(render(&series(), "donut", "t"), None);
        assert_eq!(render(&series(), "", "t"), None);
        assert_eq!(render(&series(), "BAR", "t"), None);
    }

    #[test]
    fn from_counts_uses_raw_field_values_as_labels() {
        let counts = [
            FieldCount {
                value: FieldValue::Text("Friday".to_string()),
                count: 12,
            },
            FieldCount {
                value: FieldValue::Integer(60),
                count: 7,
            },
            FieldCount {
                value: FieldValue::Null,
                count: 1,
            },
        ];
        let series = Series::from_counts(&counts);

        assert_eq!(series.categories, ["Friday", "60", "Unknown"]);
        assert_eq!(series.values, [12, 7, 1]);
    }

    #[test]
    fn from_totals_substitutes_human_readable_labels() {
        let totals = SummedTotals {
            persons: 6,
            serious_injuries: 1,
            other_injuries: 2,
            killed: 0,
            not_injured: 3,
        };
        let series = Series::from_totals(&totals);

        assert_eq!(
            series.categories,
            [
                "Total Persons",
                "Injuries Level 2",
                "Injuries Level 3",
                "Persons Killed",
                "Persons Not Injured",
            ]
        );
        assert_eq!(series.values, [6, 1, 2, 0, 3]);
    }

    #[test]
    fn serializes_to_the_frontend_wire_shape() {
        let config = render(&series(), "bar", "Title").unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["y"][1], 6);
        assert_eq!(json["layout"]["title"], "Title");
    }
}
