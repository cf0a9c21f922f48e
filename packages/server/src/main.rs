#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crash map server binary.

use std::path::PathBuf;

use actix_web::web;
use crash_map_server::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let db_path = PathBuf::from(
        std::env::var("CRASH_DB_PATH").unwrap_or_else(|_| "data/RoadCrashesVic.sqlite".to_string()),
    );
    if !db_path.exists() {
        log::warn!(
            "Crash dataset not found at {}; requests will fail until it is in place",
            db_path.display()
        );
    }

    let state = web::Data::new(AppState::new(db_path));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    crash_map_server::run(state, bind_addr, port).await
}
