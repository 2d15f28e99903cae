use crate::{
    result::{CineError, Result},
    str_utils::is_in_quotes,
};
use regex::Regex;

// Regex compiled once as a lazy static for performance
pub static PARAMETER_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"@(\w+)").unwrap());

/// Parameter type enums for database operations
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterType {
    Integer,
    String,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParameterType::Integer => "integer",
            ParameterType::String => "string",
        };
        write!(f, "{s}")
    }
}

/// Parameter definition for the catalog query
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: ParameterType,
}

/// Backend-agnostic bound value; each runner converts this to its driver's ToSql
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Integer(i64),
    String(String),
}

/// Extract unique parameter names (`@name`) from SQL, respecting quote boundaries.
/// Returns names in order of first appearance.
pub fn extract_parameters(sql: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for cap in PARAMETER_REGEX.captures_iter(sql) {
        if let Some(named_match) = cap.get(0) {
            if !is_in_quotes(sql, named_match.start()) {
                let name = cap.get(1).unwrap().as_str().to_string();
                if seen.insert(name.clone()) {
                    params.push(name);
                }
            }
        }
    }

    params
}

fn type_mismatch_error(param_type: &ParameterType, value: &serde_json::Value) -> CineError {
    CineError::ParameterTypeMismatch {
        expected: param_type.to_string(),
        got: value.to_string(),
    }
}

/// Validate request values against the declared parameter types and collect them
/// in the SAME order as they appear in the query definition, so positions match
/// the prepared statement's placeholders. Values are never interpolated into SQL.
pub fn bind_values(
    parameters: &[Parameter],
    request_params: &serde_json::Value,
) -> Result<Vec<ParameterValue>> {
    let request_params_obj =
        request_params
            .as_object()
            .ok_or_else(|| CineError::ParameterTypeMismatch {
                expected: "object".to_string(),
                got: request_params.to_string(),
            })?;

    let mut values = Vec::with_capacity(parameters.len());
    for param_def in parameters {
        let value = request_params_obj
            .get(&param_def.name)
            .ok_or_else(|| CineError::ParameterNotProvided(param_def.name.clone()))?;

        match param_def.param_type {
            ParameterType::Integer => {
                let int_val = value
                    .as_i64()
                    .ok_or_else(|| type_mismatch_error(&param_def.param_type, value))?;
                values.push(ParameterValue::Integer(int_val));
            }
            ParameterType::String => {
                let str_val = value
                    .as_str()
                    .ok_or_else(|| type_mismatch_error(&param_def.param_type, value))?;
                values.push(ParameterValue::String(str_val.to_string()));
            }
        }
    }

    Ok(values)
}
