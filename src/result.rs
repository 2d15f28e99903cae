use thiserror::Error;

/// Main error type for the cinequery library
#[derive(Error, Debug)]
pub enum CineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[cfg(feature = "postgresql")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("query failed: {0}")]
    Query(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("parameter not provided: {0}")]
    ParameterNotProvided(String),
    #[error("parameter type mismatch: expected {expected}, got {got}")]
    ParameterTypeMismatch { expected: String, got: String },
}

/// Type alias for Results using CineError
pub type Result<T> = std::result::Result<T, CineError>;
