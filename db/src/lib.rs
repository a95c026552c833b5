pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the configured database.
///
/// `DATABASE_PATH` may be a full DSN or a plain SQLite file path; for a file
/// path the parent directory is created first.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path());
    tracing::info!(%url, "connecting to database");
    Database::connect(&url).await
}

fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_owned();
    }

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            tracing::warn!(error = %err, dir = %parent.display(), "could not create database dir");
        }
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
