#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! SQLite image loader and query executor for the crash map.
//!
//! The dataset ships as a static SQLite file. [`loader`] copies it into
//! an in-memory `rusqlite` connection; [`queries`] runs the three fixed
//! query shapes against that handle. The handle is an owned
//! [`rusqlite::Connection`], so it is released on every exit path,
//! including errors.

pub mod loader;
pub mod queries;

/// Errors that can occur while loading or querying the crash dataset.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Reading the database image from disk failed.
    #[error("Failed to read database image: {0}")]
    Io(#[from] std::io::Error),

    /// The file's bytes are not a SQLite database image.
    #[error("Not a SQLite database image: {path}")]
    NotADatabase {
        /// Path of the rejected file.
        path: String,
    },

    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
