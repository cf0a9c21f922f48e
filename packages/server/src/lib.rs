#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crash map dashboard.
//!
//! Serves the chart and map endpoints over the static SQLite crash
//! dataset, plus the frontend's static files. Each request opens its
//! own in-memory copy of the dataset on the blocking pool and drops it
//! when the chain completes; the only shared mutable state is the map
//! view, constructed once and refreshed in place on every map request.

mod handlers;

use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use crash_map_map::MapView;

/// Shared application state.
pub struct AppState {
    /// Path to the SQLite crash dataset image.
    pub db_path: PathBuf,
    /// The dashboard map, created on the first map request and reused
    /// (marker layer reset and refilled) for every one after. A second
    /// in-flight request simply overwrites the markers; last writer
    /// wins.
    pub map: Mutex<Option<MapView>>,
}

impl AppState {
    /// Creates the state for a dataset at `db_path`.
    #[must_use]
    pub const fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            map: Mutex::new(None),
        }
    }
}

/// Starts the crash map API server.
///
/// This is a regular async function — the caller is responsible for
/// providing the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an error if the server fails to bind or run.
pub async fn run(
    state: web::Data<AppState>,
    bind_addr: String,
    port: u16,
) -> std::io::Result<()> {
    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/fields", web::get().to(handlers::fields))
                    .route("/chart", web::get().to(handlers::chart))
                    .route("/map", web::get().to(handlers::map)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
