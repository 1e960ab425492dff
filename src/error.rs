//! Error types for the MLB roster service

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MlbError>;

#[derive(Error, Debug)]
pub enum MlbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Server error: {0}")]
    Server(#[from] warp::Error),

    #[error("Failed to parse team ID: {0}")]
    InvalidTeamId(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Stats API returned no data")]
    NoData,
}
