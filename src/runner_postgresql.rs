use crate::{
    config::ConnectionConfig,
    parameters::{self, ParameterValue},
    query::{self, QueryDef},
    result::{CineError, Result},
    row::MovieRow,
};
use tokio_postgres::{Client, NoTls};

/// Convert a generic ParameterValue directly to PostgreSQL ToSql trait object
fn parameter_value_to_postgresql_tosql(
    param_value: ParameterValue,
) -> Box<dyn tokio_postgres::types::ToSql + Sync> {
    match param_value {
        // PostgreSQL infers int4 for the release_year comparison
        ParameterValue::Integer(i) => Box::new(i as i32),
        ParameterValue::String(s) => Box::new(s),
    }
}

/// Connect using the injected configuration and spawn the connection driver
/// task. The session is released when the returned client drops, regardless
/// of which exit path a run takes.
pub async fn connect_postgres(config: &ConnectionConfig) -> Result<Client> {
    let (client, connection) = config
        .pg_config()
        .connect(NoTls)
        .await
        .map_err(|e| CineError::Connection(e.to_string()))?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {e}");
        }
    });

    Ok(client)
}

/// Execute the query with bound positional parameters and fetch all matching rows
pub async fn query_run_postgres(
    client: &Client,
    query: &QueryDef,
    request_params: &serde_json::Value,
) -> Result<Vec<MovieRow>> {
    let values = parameters::bind_values(&query.parameters, request_params)?;
    let boxed: Vec<Box<dyn tokio_postgres::types::ToSql + Sync>> = values
        .into_iter()
        .map(parameter_value_to_postgresql_tosql)
        .collect();
    let params: Vec<&(dyn tokio_postgres::types::ToSql + Sync)> =
        boxed.iter().map(|p| p.as_ref()).collect();

    let rows = client
        .query(query.postgres_prepared.as_str(), &params)
        .await?;
    rows.iter().map(row_to_movie).collect()
}

fn row_to_movie(row: &tokio_postgres::Row) -> Result<MovieRow> {
    let title: String = row.try_get(0)?;
    let release_year: i32 = row.try_get(1)?;
    Ok(MovieRow {
        title,
        release_year: i64::from(release_year),
    })
}

/// Fetch all movies released strictly after `min_year`
pub async fn movies_after(client: &Client, min_year: i64) -> Result<Vec<MovieRow>> {
    let query = query::movies_after_query()?;
    query_run_postgres(client, &query, &serde_json::json!({ "min_year": min_year })).await
}
