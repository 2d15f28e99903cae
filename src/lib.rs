pub mod config;
#[cfg(feature = "sqlite")]
pub mod connection;
pub mod parameters;
pub mod query;
pub mod result;
pub mod row;
pub mod runner;
#[cfg(feature = "postgresql")]
pub mod runner_postgresql;
#[cfg(feature = "sqlite")]
pub mod runner_sqlite;
pub mod str_utils;

// Re-export types for convenience
pub use config::{Backend, ConnectionConfig, RunConfig};
#[cfg(feature = "sqlite")]
pub use connection::DatabaseConnection;
pub use parameters::{Parameter, ParameterType, ParameterValue};
pub use query::{DEFAULT_MIN_YEAR, MOVIES_AFTER_SQL, QueryDef, movies_after_query};
pub use result::{CineError, Result};
pub use row::{MovieRow, write_rows};
pub use runner::QueryRunner;
#[cfg(feature = "sqlite")]
pub use runner_sqlite::{connect_sqlite, query_run_sqlite};

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
pub use serde_json::Value as JsonValue;

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
#[cfg(feature = "sqlite")]
pub use rusqlite::Connection as SqliteConnection;
