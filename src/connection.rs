use crate::{
    query::QueryDef,
    result::Result,
    row::MovieRow,
    runner::QueryRunner,
    runner_sqlite::query_run_sqlite,
};
use rusqlite::Connection;

/// Database connection enum that holds different database backends
pub enum DatabaseConnection {
    /// SQLite connection
    Sqlite(Connection),
}

impl QueryRunner for DatabaseConnection {
    fn run_query(
        &mut self,
        query: &QueryDef,
        params: &serde_json::Value,
    ) -> Result<Vec<MovieRow>> {
        match self {
            DatabaseConnection::Sqlite(conn) => query_run_sqlite(conn, query, params),
        }
    }
}
