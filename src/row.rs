use std::fmt;
use std::io::{self, Write};

/// One result tuple from the movie catalog.
/// Values are reproduced verbatim from storage; nothing is transformed,
/// deduplicated, or sorted on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    pub title: String,
    pub release_year: i64,
}

impl fmt::Display for MovieRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Year: {}", self.title, self.release_year)
    }
}

/// Emit one line per row in the order given; an empty slice writes nothing
pub fn write_rows<W: Write>(mut out: W, rows: &[MovieRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}
