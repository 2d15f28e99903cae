use crate::{
    parameters::{self, ParameterValue},
    query::{self, QueryDef},
    result::{CineError, Result},
    row::MovieRow,
};
use rusqlite::Connection;

// Implement trait for converting generic ParameterValue to SQLite-specific ToSql
impl From<ParameterValue> for Box<dyn rusqlite::ToSql> {
    fn from(param_value: ParameterValue) -> Self {
        match param_value {
            ParameterValue::Integer(i) => Box::new(i),
            ParameterValue::String(s) => Box::new(s),
        }
    }
}

/// Open the database named by the configuration; `:memory:` opens an
/// in-memory database. The connection is released on drop, on every exit path.
pub fn connect_sqlite(database: &str) -> Result<Connection> {
    let result = if database == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(database)
    };
    result.map_err(|e| CineError::Connection(e.to_string()))
}

/// Execute the query with bound parameters and fetch all matching rows
pub fn query_run_sqlite(
    conn: &mut Connection,
    query: &QueryDef,
    request_params: &serde_json::Value,
) -> Result<Vec<MovieRow>> {
    let values = parameters::bind_values(&query.parameters, request_params)?;
    let params: Vec<Box<dyn rusqlite::ToSql>> = values.into_iter().map(Into::into).collect();

    let mut stmt = conn.prepare(&query.sqlite_prepared)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(&params), |row| {
        Ok(MovieRow {
            title: row.get(0)?,
            release_year: row.get(1)?,
        })
    })?;
    let result = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(result)
}

/// Fetch all movies released strictly after `min_year`
pub fn movies_after(conn: &mut Connection, min_year: i64) -> Result<Vec<MovieRow>> {
    let query = query::movies_after_query()?;
    query_run_sqlite(conn, &query, &serde_json::json!({ "min_year": min_year }))
}
