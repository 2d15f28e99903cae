use crate::{
    parameters::{self, Parameter, ParameterType},
    result::{CineError, Result},
};

/// The one statement this tool runs: movies released strictly after a threshold year.
pub const MOVIES_AFTER_SQL: &str =
    "SELECT title, release_year FROM Movies WHERE release_year > @min_year";

/// Threshold applied when the configuration does not override it
pub const DEFAULT_MIN_YEAR: i64 = 2010;

/// Represents a parsed SQL query with parameters and prepared versions
#[derive(Debug)]
pub struct QueryDef {
    pub sql: String,
    pub parameters: Vec<Parameter>,
    pub sqlite_prepared: String,
    pub postgres_prepared: String,
}

impl QueryDef {
    /// Create a new QueryDef from SQL and the declared parameter types,
    /// extracting `@name` parameters and preparing for execution.
    ///
    /// Every parameter found in the SQL must have a declared type; the query
    /// text is rejected otherwise rather than guessed at.
    pub fn from_sql(sql: &str, declared: &[(&str, ParameterType)]) -> Result<Self> {
        let names = parameters::extract_parameters(sql);

        let mut params = Vec::with_capacity(names.len());
        for name in names {
            let param_type = declared
                .iter()
                .find(|(declared_name, _)| *declared_name == name)
                .map(|(_, param_type)| param_type.clone())
                .ok_or_else(|| CineError::ParameterTypeMismatch {
                    expected: "declared parameter type".to_string(),
                    got: format!("parameter '{name}' without declaration"),
                })?;
            params.push(Parameter { name, param_type });
        }

        // Create prepared versions with backend-specific positional placeholders
        let sqlite_prepared = replace_placeholders(sql, &params, |idx| format!("?{idx}"));
        let postgres_prepared = replace_placeholders(sql, &params, |idx| format!("${idx}"));

        Ok(QueryDef {
            sql: sql.to_string(),
            parameters: params,
            sqlite_prepared,
            postgres_prepared,
        })
    }
}

/// Replace `@name` parameters with positional placeholders in declaration order
fn replace_placeholders(
    sql: &str,
    parameters: &[Parameter],
    placeholder_gen: impl Fn(usize) -> String,
) -> String {
    let mut prepared = sql.to_string();
    for (idx, param) in parameters.iter().enumerate() {
        prepared = prepared.replace(&format!("@{}", param.name), &placeholder_gen(idx + 1));
    }
    prepared
}

/// The fixed catalog query with its one integer parameter
pub fn movies_after_query() -> Result<QueryDef> {
    QueryDef::from_sql(MOVIES_AFTER_SQL, &[("min_year", ParameterType::Integer)])
}
