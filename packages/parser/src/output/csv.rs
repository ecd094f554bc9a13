//! CSV rendering of records.

use std::io::{self, Write};

use crate::record::Record;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
///
/// Fields containing the separator, quotes or line breaks are quoted, with
/// embedded quotes doubled.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render records as CSV with a header row.
///
/// The header is taken from the first record; all records of one batch
/// share the same keys. An empty batch renders as an empty string.
pub fn to_csv_string(records: &[Record], sep: char) -> io::Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let mut out = Vec::new();
    let header: Vec<String> = first.keys().map(String::from).collect();
    write_row(&mut out, &header, sep)?;

    for record in records {
        let row: Vec<String> = record.values().map(|v| v.to_cell()).collect();
        write_row(&mut out, &row, sep)?;
    }

    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
