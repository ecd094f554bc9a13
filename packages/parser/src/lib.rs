//! Bundestag parser - Normalize Bundestag XML documents into flat records.
//!
//! This crate turns two kinds of documents published by the German
//! Bundestag into uniform, schema-stable records:
//!
//! - plenary protocols: one record per speech, with speaker, party, role,
//!   remark text and optionally the session metadata;
//! - member master data: one record per member, optionally restricted to a
//!   legislative period and enriched with period-specific data and
//!   institution membership flags.
//!
//! # Example
//!
//! ```
//! use bundestag_parser::{collect_members, parse_document, MemberQuery, OccupationFormat};
//!
//! let xml = r#"<DOCUMENT><MDB><ID>1</ID>
//!   <WAHLPERIODEN><WAHLPERIODE><WP>19</WP><WKR_NAME>Bonn</WKR_NAME></WAHLPERIODE></WAHLPERIODEN>
//! </MDB></DOCUMENT>"#;
//! let doc = parse_document(xml).unwrap();
//!
//! let batch = collect_members(&doc, &MemberQuery::new().with_period(19)).unwrap();
//! let records = batch.to_records(OccupationFormat::Joined);
//! assert_eq!(records.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Tag vocabulary, constants and validation
//! - [`types`]: Record types (Speech, Member, MemberPeriod, etc.)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation helpers
//! - [`fields`]: Declarative field descriptors
//! - [`record`]: Flat key-value records
//! - [`protocol`]: Metadata and speech extraction
//! - [`members`]: Member extraction and period resolution
//! - [`loader`]: Reading and parsing input files
//! - [`output`]: CSV, JSON and YAML rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod loader;
pub mod members;
pub mod output;
pub mod protocol;
pub mod record;
pub mod types;
pub mod xml;

// Re-export main functions
pub use loader::parse_document;
pub use members::{collect_members, resolve_period};
pub use protocol::{collect_speeches, parse_metadata, parse_speech};

// Re-export commonly used items
pub use error::{ParserError, Result};
pub use record::{FieldValue, Record};
pub use types::{
    Member, MemberBatch, MemberPeriod, MemberQuery, OccupationFormat, Period, ProtocolMetadata,
    Speaker, Speech,
};
