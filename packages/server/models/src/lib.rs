#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the crash map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the row types in `crash_map_database_models` so the
//! API contract can evolve independently.

use crash_map_chart::ChartConfig;
use crash_map_crash_models::{CounterField, GroupField};
use crash_map_map::MapView;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Which selector a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// One of the five person counters (summary mode).
    Counter,
    /// A categorical `GROUP BY` column.
    Category,
}

/// One entry of the selectable-field list for the UI dropdowns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFieldInfo {
    /// Physical column name (what the chart endpoint accepts).
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Selector kind.
    pub kind: FieldKind,
}

impl ApiFieldInfo {
    /// The full selectable-field list in taxonomy order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let counters = CounterField::all().iter().map(|field| Self {
            name: field.column().to_string(),
            label: field.label().to_string(),
            kind: FieldKind::Counter,
        });
        let groups = GroupField::all().iter().map(|field| Self {
            name: field.column().to_string(),
            label: field.label().to_string(),
            kind: FieldKind::Category,
        });
        counters.chain(groups).collect()
    }
}

/// Query parameters for the chart endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQueryParams {
    /// Year filter, matched exactly against the accident date.
    pub year: String,
    /// Selected column name (checked against the allow-list).
    pub field: String,
    /// Chart-type flag (`bar` or `pie`).
    #[serde(default = "default_chart_kind")]
    pub kind: String,
}

fn default_chart_kind() -> String {
    "bar".to_string()
}

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Year filter, matched exactly against the accident date.
    pub year: String,
}

/// Response from the chart endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChartResponse {
    /// The chart configuration, absent when nothing should be drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartConfig>,
    /// User-visible message when no chart is returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from the map endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapResponse {
    /// The map view with its marker layer, absent when no data matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapView>,
    /// User-visible message when no map is returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_list_covers_counters_and_categories() {
        let fields = ApiFieldInfo::all();

        assert_eq!(fields.len(), 11);
        assert_eq!(
            fields.iter().filter(|f| f.kind == FieldKind::Counter).count(),
            5
        );
        assert!(fields.iter().any(|f| f.name == "NO_PERSONS_KILLED"));
        assert!(fields.iter().any(|f| f.label == "Speed Zone"));
    }

    #[test]
    fn chart_params_default_to_bar() {
        let params: ChartQueryParams =
            serde_json::from_str(r#"{"year":"2020","field":"NO_PERSONS"}"#).unwrap();
        assert_eq!(params.kind, "bar");
    }

    #[test]
    fn empty_responses_serialize_without_null_fields() {
        let response = ApiChartResponse {
            chart: None,
            message: None,
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }
}
