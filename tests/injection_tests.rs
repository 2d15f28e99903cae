#![cfg(feature = "sqlite")]

use cinequery::runner_sqlite::{movies_after, query_run_sqlite};
use cinequery::{CineError, movies_after_query};
use rusqlite::Connection;

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE Movies (title TEXT NOT NULL, release_year INTEGER NOT NULL)",
        [],
    )
    .unwrap();
    conn
}

#[test]
fn test_string_threshold_is_rejected_not_interpolated() {
    let mut conn = setup_db();
    conn.execute("INSERT INTO Movies VALUES ('Dune', 2021)", [])
        .unwrap();

    let query = movies_after_query().unwrap();

    // Classic injection payloads must fail type validation before any SQL runs
    let injection_attempts = ["2010 OR 1=1", "2010; DROP TABLE Movies; --"];
    for attempt in injection_attempts {
        let params = serde_json::json!({ "min_year": attempt });
        let err = query_run_sqlite(&mut conn, &query, &params).unwrap_err();
        match err {
            CineError::ParameterTypeMismatch { expected, got } => {
                assert_eq!(expected, "integer");
                assert!(got.contains(attempt));
            }
            other => panic!("expected ParameterTypeMismatch, got: {other:?}"),
        }
    }

    // Table is intact and still queryable
    let rows = movies_after(&mut conn, 2010).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_quote_in_stored_title_does_not_alter_query() {
    let mut conn = setup_db();
    conn.execute(
        "INSERT INTO Movies VALUES ('Ocean''s Eleven; DROP TABLE Movies; --', 2011)",
        [],
    )
    .unwrap();

    let rows = movies_after(&mut conn, 2010).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Ocean's Eleven; DROP TABLE Movies; --");

    // A second query proves the table survived the hostile title
    let rows = movies_after(&mut conn, 2012).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_missing_parameter_is_reported() {
    let mut conn = setup_db();
    let query = movies_after_query().unwrap();

    let err = query_run_sqlite(&mut conn, &query, &serde_json::json!({})).unwrap_err();
    match err {
        CineError::ParameterNotProvided(name) => assert_eq!(name, "min_year"),
        other => panic!("expected ParameterNotProvided, got: {other:?}"),
    }
}

#[test]
fn test_non_object_params_are_rejected() {
    let mut conn = setup_db();
    let query = movies_after_query().unwrap();

    let err = query_run_sqlite(&mut conn, &query, &serde_json::json!([2010])).unwrap_err();
    assert!(matches!(err, CineError::ParameterTypeMismatch { .. }));
}
