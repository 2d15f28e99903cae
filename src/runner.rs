use crate::{query::QueryDef, result::Result, row::MovieRow};

/// Trait for executing the parameterized catalog query against different database backends
pub trait QueryRunner {
    fn run_query(&mut self, query: &QueryDef, params: &serde_json::Value)
    -> Result<Vec<MovieRow>>;
}
