use cinequery::{MovieRow, write_rows};

fn rows() -> Vec<MovieRow> {
    vec![
        MovieRow {
            title: "Interstellar".to_string(),
            release_year: 2014,
        },
        MovieRow {
            title: "Dune".to_string(),
            release_year: 2021,
        },
    ]
}

#[test]
fn test_row_display_format() {
    let row = MovieRow {
        title: "Interstellar".to_string(),
        release_year: 2014,
    };
    assert_eq!(row.to_string(), "Title: Interstellar, Year: 2014");
}

#[test]
fn test_write_rows_one_line_per_row() {
    let mut out = Vec::new();
    write_rows(&mut out, &rows()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Title: Interstellar, Year: 2014\nTitle: Dune, Year: 2021\n"
    );
}

#[test]
fn test_write_rows_empty_input_writes_nothing() {
    let mut out = Vec::new();
    write_rows(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_write_rows_preserves_quote_characters() {
    let mut out = Vec::new();
    let rows = vec![MovieRow {
        title: "Ocean's Eleven".to_string(),
        release_year: 2011,
    }];
    write_rows(&mut out, &rows).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Title: Ocean's Eleven, Year: 2011\n"
    );
}
