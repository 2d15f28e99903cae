use cinequery::{
    CineError, MOVIES_AFTER_SQL, ParameterType, QueryDef, movies_after_query,
    parameters::extract_parameters,
};

#[test]
fn test_movies_after_query_prepared_forms() {
    let query = movies_after_query().unwrap();

    assert_eq!(query.sql, MOVIES_AFTER_SQL);
    assert_eq!(
        query.sqlite_prepared,
        "SELECT title, release_year FROM Movies WHERE release_year > ?1"
    );
    assert_eq!(
        query.postgres_prepared,
        "SELECT title, release_year FROM Movies WHERE release_year > $1"
    );
}

#[test]
fn test_movies_after_query_declares_one_integer_parameter() {
    let query = movies_after_query().unwrap();
    assert_eq!(query.parameters.len(), 1);
    assert_eq!(query.parameters[0].name, "min_year");
    assert_eq!(query.parameters[0].param_type, ParameterType::Integer);
}

#[test]
fn test_extract_parameters_respects_quotes() {
    let sql = "SELECT title FROM Movies WHERE title = '@not_a_param' AND release_year > @min_year";
    assert_eq!(extract_parameters(sql), vec!["min_year".to_string()]);
}

#[test]
fn test_extract_parameters_unique_in_order() {
    let sql = "SELECT * FROM t WHERE a > @low AND a < @high AND b > @low";
    assert_eq!(
        extract_parameters(sql),
        vec!["low".to_string(), "high".to_string()]
    );
}

#[test]
fn test_undeclared_parameter_is_rejected() {
    let err = QueryDef::from_sql(
        "SELECT title FROM Movies WHERE release_year > @min_year",
        &[],
    )
    .unwrap_err();
    match err {
        CineError::ParameterTypeMismatch { expected, got } => {
            assert_eq!(expected, "declared parameter type");
            assert!(got.contains("min_year"));
        }
        other => panic!("expected ParameterTypeMismatch, got: {other:?}"),
    }
}

#[test]
fn test_query_without_parameters() {
    let query = QueryDef::from_sql("SELECT title, release_year FROM Movies", &[]).unwrap();
    assert!(query.parameters.is_empty());
    assert_eq!(query.sqlite_prepared, query.sql);
    assert_eq!(query.postgres_prepared, query.sql);
}
