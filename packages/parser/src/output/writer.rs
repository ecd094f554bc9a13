//! Rendering records into the supported output formats and writing them.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::csv::to_csv_string;
use crate::error::{ParserError, Result};
use crate::record::Record;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Determine the output format from a file extension.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use bundestag_parser::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path(Path::new("speeches.csv")).unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path(Path::new("speeches.xlsx")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match ext.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ParserError::UnsupportedOutput(path.display().to_string())),
        }
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Render records in the given format.
///
/// `separator` is only used for CSV. JSON is indented by one space per
/// level and keeps non-ASCII characters unescaped.
pub fn render(records: &[Record], format: OutputFormat, separator: char) -> Result<String> {
    match format {
        OutputFormat::Csv => Ok(to_csv_string(records, separator)?),
        OutputFormat::Json => to_json_string(records),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(records)?),
    }
}

fn to_json_string(records: &[Record]) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
    records.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|e| {
        ParserError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Render records and write them to `path`.
///
/// The format is derived from the file extension.
pub fn save_records(path: &Path, records: &[Record], separator: char) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let content = render(records, format, separator)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        format = format.extension(),
        "Wrote records"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        let mut r = Record::new();
        r.insert("Speaker", "Wolfgang Schäuble".to_string());
        r.insert("Party", FieldValue::Null);
        vec![r]
    }

    #[test]
    fn test_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.json")).unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("a.YML")).unwrap(), OutputFormat::Yaml);
        assert!(matches!(
            OutputFormat::from_path(Path::new("output")),
            Err(ParserError::UnsupportedOutput(_))
        ));
    }

    #[test]
    fn test_render_json_keeps_umlauts() {
        let json = render(&sample(), OutputFormat::Json, ',').unwrap();
        assert_eq!(
            json,
            "[\n {\n  \"Speaker\": \"Wolfgang Schäuble\",\n  \"Party\": null\n }\n]"
        );
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&sample(), OutputFormat::Yaml, ',').unwrap();
        let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed[0]["Speaker"].as_str(), Some("Wolfgang Schäuble"));
        assert!(parsed[0]["Party"].is_null());
        assert!(yaml.find("Speaker") < yaml.find("Party"));
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&sample(), OutputFormat::Csv, '\t').unwrap();
        assert_eq!(csv, "Speaker\tParty\nWolfgang Schäuble\t\n");
    }

    #[test]
    fn test_save_records_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("speeches.json");

        save_records(&path, &sample(), ',').unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["Speaker"], "Wolfgang Schäuble");
        assert!(written[0]["Party"].is_null());
    }

    #[test]
    fn test_save_records_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("speeches.xlsx");

        assert!(save_records(&path, &sample(), ',').is_err());
        assert!(!path.exists());
    }
}
