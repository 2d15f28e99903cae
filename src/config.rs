use crate::result::{CineError, Result};
use serde::Deserialize;
use std::fs;
use std::str::FromStr;

fn default_host() -> String {
    "localhost".to_string()
}

fn default_min_year() -> i64 {
    crate::query::DEFAULT_MIN_YEAR
}

/// Database connection parameters, injected rather than source-embedded.
///
/// For PostgreSQL all four fields feed the driver config. For SQLite only
/// `database` is used, as the database file path (`:memory:` is accepted).
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
}

#[cfg(feature = "postgresql")]
impl ConnectionConfig {
    /// Assemble the driver-level config for the PostgreSQL backend
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.database);
        config
    }
}

/// Which database backend a run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Postgresql,
}

impl FromStr for Backend {
    type Err = CineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "postgresql" | "postgres" => Ok(Backend::Postgresql),
            _ => Err(CineError::Config(format!(
                "unknown backend '{s}', expected sqlite or postgresql"
            ))),
        }
    }
}

/// Everything one run needs: the backend, the connection parameters, and the
/// threshold year bound into the query
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub backend: Backend,
    #[serde(flatten)]
    pub connection: ConnectionConfig,
    #[serde(default = "default_min_year")]
    pub min_year: i64,
}

impl RunConfig {
    /// Load run configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_json(json)
    }

    /// Load run configuration from a serde_json::Value object
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        serde_json::from_value(json).map_err(CineError::Json)
    }

    /// Load run configuration from CINEQUERY_* environment variables.
    /// CINEQUERY_DATABASE is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("CINEQUERY_BACKEND") {
            Ok(value) => Backend::from_str(&value)?,
            Err(_) => Backend::Sqlite,
        };
        let database = std::env::var("CINEQUERY_DATABASE")
            .map_err(|_| CineError::Config("CINEQUERY_DATABASE not set".to_string()))?;
        let min_year = match std::env::var("CINEQUERY_MIN_YEAR") {
            Ok(value) => value.parse::<i64>().map_err(|_| {
                CineError::Config(format!("CINEQUERY_MIN_YEAR is not an integer: '{value}'"))
            })?,
            Err(_) => crate::query::DEFAULT_MIN_YEAR,
        };

        Ok(RunConfig {
            backend,
            connection: ConnectionConfig {
                host: std::env::var("CINEQUERY_HOST").unwrap_or_else(|_| default_host()),
                user: std::env::var("CINEQUERY_USER").unwrap_or_default(),
                password: std::env::var("CINEQUERY_PASSWORD").unwrap_or_default(),
                database,
            },
            min_year,
        })
    }
}
