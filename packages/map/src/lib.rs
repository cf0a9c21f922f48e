#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map view and clustered marker layer for the crash dashboard.
//!
//! A [`MapView`] is constructed once, owned by the server, and reused
//! for every map request: [`MapView::populate`] resets the marker
//! layer and re-adds one marker per fully-coordinated record. The view
//! itself (center, zoom, tile layer) is never torn down. Serializes to
//! the input shape the frontend map library consumes.

use crash_map_database_models::CrashRecord;
use serde::Serialize;

/// Default map center: Melbourne.
pub const DEFAULT_CENTER: [f64; 2] = [-37.8136, 144.9631];

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 10;

/// Base tile layer URL template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the public tile server.
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// A single crash marker with its popup HTML.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Marker latitude.
    pub latitude: f64,
    /// Marker longitude.
    pub longitude: f64,
    /// Popup HTML rendering date, time, and crash type.
    pub popup: String,
}

/// The clustered marker overlay. Cleared and refilled on every map
/// request; never recreated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayer {
    /// Whether the frontend should cluster nearby markers.
    clustered: bool,
    /// Current markers.
    markers: Vec<Marker>,
}

impl MarkerLayer {
    const fn new() -> Self {
        Self {
            clustered: true,
            markers: Vec::new(),
        }
    }

    /// Removes all markers. Idempotent.
    pub fn reset(&mut self) {
        self.markers.clear();
    }

    /// Adds one marker to the layer.
    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Number of markers currently in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the layer holds no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Current markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// The dashboard map: a fixed view over one mutable marker layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Map center as `[latitude, longitude]`.
    center: [f64; 2],
    /// Initial zoom level.
    zoom: u8,
    /// Tile layer URL template.
    tile_url: &'static str,
    /// Tile layer attribution.
    attribution: &'static str,
    /// The clustered marker overlay.
    markers: MarkerLayer,
}

impl MapView {
    /// Creates the map view centered on the default coordinate with an
    /// empty marker layer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            markers: MarkerLayer::new(),
        }
    }

    /// Replaces the marker layer's contents with one marker per record
    /// that has both coordinates.
    ///
    /// Records missing either coordinate are skipped; the skip is never
    /// surfaced to the user. Returns the number of markers placed.
    pub fn populate(&mut self, records: &[CrashRecord]) -> usize {
        self.markers.reset();

        let mut skipped = 0usize;
        for record in records {
            let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) else {
                skipped += 1;
                continue;
            };
            self.markers.add(Marker {
                latitude,
                longitude,
                popup: popup_html(record),
            });
        }

        if skipped > 0 {
            log::debug!("Skipped {skipped} crash records without coordinates");
        }

        self.markers.len()
    }

    /// The marker layer in its current state.
    #[must_use]
    pub const fn marker_layer(&self) -> &MarkerLayer {
        &self.markers
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

fn popup_html(record: &CrashRecord) -> String {
    format!(
        "<b>Date:</b> {}<br><b>Time:</b> {}<br><b>Type:</b> {}",
        record.accident_date, record.accident_time, record.accident_type
    )
}
