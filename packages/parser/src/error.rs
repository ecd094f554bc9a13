//! Error types for the parser.
//!
//! Field-level absence is never an error: it is represented as `None` on
//! the record types. `ParserError` only covers record-level resolution
//! failures, caller contract violations and environmental failures.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// A member has no period block for the requested legislative period.
    #[error("Member {} is not active in legislative period {period}", .member_id.as_deref().unwrap_or("<unknown>"))]
    NotActiveInPeriod {
        member_id: Option<String>,
        period: String,
    },

    /// No member with the given identifier exists in the document.
    #[error("No member with ID '{0}' found")]
    MemberNotFound(String),

    /// Institution flags were requested without a target period.
    #[error("Institution membership can only be checked together with a legislative period")]
    InstitutionsWithoutPeriod,

    /// Invalid legislative period format.
    #[error("Invalid legislative period: '{0}'. Expected a number (e.g., 19)")]
    InvalidPeriod(String),

    /// Output file extension does not map to a known output format.
    #[error("Unsupported output format: '{0}'. Output must end in .csv, .json, .yaml or .yml")]
    UnsupportedOutput(String),

    /// CSV separator is not a single character.
    #[error("Invalid separator: '{0}'. Expected a single character")]
    InvalidSeparator(String),

    /// Input is neither an XML file nor a directory.
    #[error("Input is neither an XML file nor a directory: {}", .0.display())]
    InvalidInput(PathBuf),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
