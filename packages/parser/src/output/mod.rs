//! Output sinks for flat records.

mod csv;
mod writer;

pub use self::csv::{to_csv_string, write_row};
pub use writer::{render, save_records, OutputFormat};
