//! HTTP handler functions for the crash map API.
//!
//! Both the chart and map chains follow one error contract: a failed
//! query logs the error and returns a 500 JSON body; a query matching
//! zero rows returns a 200 body carrying the "no data" message the
//! frontend displays in place of the chart or map.

use std::path::Path;

use actix_web::{HttpResponse, web};
use crash_map_analytics::sum_counters;
use crash_map_chart::Series;
use crash_map_crash_models::SelectableField;
use crash_map_database::{DbError, loader, queries};
use crash_map_database_models::CrashRecord;
use crash_map_map::MapView;
use crash_map_server_models::{
    ApiChartResponse, ApiFieldInfo, ApiHealth, ApiMapResponse, ChartQueryParams, MapQueryParams,
};

use crate::AppState;

/// Message shown when a query matches zero rows.
const NO_DATA_MESSAGE: &str = "No data available for the selected criteria.";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/fields`
///
/// Returns the selectable-field allow-list for the UI dropdowns.
pub async fn fields() -> HttpResponse {
    HttpResponse::Ok().json(ApiFieldInfo::all())
}

/// `GET /api/chart?year=YYYY&field=COL&kind=bar|pie`
///
/// Counter fields run the sum-of-counters pipeline; group fields run
/// aggregate-by-field. An unknown field is rejected before any SQL is
/// built; an unknown chart kind yields an empty response body (no
/// chart, no error) per the renderer contract.
pub async fn chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    let Ok(field) = params.field.parse::<SelectableField>() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Unknown field: {}", params.field)
        }));
    };

    let db_path = state.db_path.clone();
    let year = params.year.clone();
    let result = web::block(move || chart_series(&db_path, field, &year)).await;

    match result {
        Ok(Ok(Some(series))) => {
            let chart = crash_map_chart::render(&series, &params.kind, &chart_title(field));
            HttpResponse::Ok().json(ApiChartResponse {
                chart,
                message: None,
            })
        }
        Ok(Ok(None)) => {
            log::warn!(
                "No chart data for year {} field {}",
                params.year,
                params.field
            );
            HttpResponse::Ok().json(ApiChartResponse {
                chart: None,
                message: Some(NO_DATA_MESSAGE.to_string()),
            })
        }
        Ok(Err(e)) => {
            log::error!("Failed to build chart data: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build chart data"
            }))
        }
        Err(e) => {
            log::error!("Chart task failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build chart data"
            }))
        }
    }
}

/// `GET /api/map?year=YYYY`
///
/// Runs the geo query and refreshes the shared map view. The view is
/// created on the first request and only its marker layer changes
/// afterwards; a zero-row year leaves it untouched.
pub async fn map(state: web::Data<AppState>, params: web::Query<MapQueryParams>) -> HttpResponse {
    let db_path = state.db_path.clone();
    let year = params.year.clone();
    let result = web::block(move || -> Result<Vec<CrashRecord>, DbError> {
        let db = loader::open_image(&db_path)?;
        queries::crash_locations(&db, &year)
    })
    .await;

    match result {
        Ok(Ok(records)) => {
            if records.is_empty() {
                log::warn!("No map data for year {}", params.year);
                return HttpResponse::Ok().json(ApiMapResponse {
                    map: None,
                    message: Some(NO_DATA_MESSAGE.to_string()),
                });
            }

            let mut guard = state.map.lock().expect("map view mutex poisoned");
            let view = guard.get_or_insert_with(MapView::new);
            let placed = view.populate(&records);
            log::info!(
                "Placed {placed} of {} crash markers for year {}",
                records.len(),
                params.year
            );
            HttpResponse::Ok().json(ApiMapResponse {
                map: Some(view.clone()),
                message: None,
            })
        }
        Ok(Err(e)) => {
            log::error!("Failed to load map data: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load map data"
            }))
        }
        Err(e) => {
            log::error!("Map task failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load map data"
            }))
        }
    }
}

/// Opens the dataset and produces the chart series for one request.
///
/// Returns `Ok(None)` when the year matched no rows. The in-memory
/// database handle is dropped on every path out of this function.
fn chart_series(
    path: &Path,
    field: SelectableField,
    year: &str,
) -> Result<Option<Series>, DbError> {
    let db = loader::open_image(path)?;

    match field {
        SelectableField::Counter(_) => {
            let rows = queries::counter_rows(&db, year)?;
            Ok(sum_counters(&rows).map(|totals| Series::from_totals(&totals)))
        }
        SelectableField::Group(group) => {
            let counts = queries::count_by_field(&db, group, year)?;
            if counts.is_empty() {
                Ok(None)
            } else {
                Ok(Some(Series::from_counts(&counts)))
            }
        }
    }
}

fn chart_title(field: SelectableField) -> String {
    match field {
        SelectableField::Counter(_) => "Crash Data Summary".to_string(),
        SelectableField::Group(group) => format!("Crash Data by {}", group.label()),
    }
}
