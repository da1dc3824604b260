//! Error types for geokml operations.

use thiserror::Error;

/// Errors that can occur while converting GeoJSON to KML.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("Invalid opacity value {0}, outside of 0-1 range")]
    InvalidOpacity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
