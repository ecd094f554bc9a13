//! Loading XML documents from disk.
//!
//! A loaded document is owned by the caller: the text is read into a
//! `String` and the parsed tree borrows from it for as long as the caller
//! keeps both alive. Nothing is cached across documents.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, ParsingOptions};

use crate::error::{ParserError, Result};

/// Read a document as UTF-8 text.
pub fn load_document_text(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "Loading document");
    Ok(fs::read_to_string(path)?)
}

/// Parse document text into a tree.
///
/// Bundestag files declare a `DOCTYPE`, so DTDs are accepted. External
/// DTDs are not fetched or validated against.
///
/// # Examples
/// ```
/// use bundestag_parser::loader::parse_document;
///
/// let xml = r#"<?xml version="1.0"?>
/// <!DOCTYPE DOCUMENT SYSTEM "MDB_STAMMDATEN.DTD">
/// <DOCUMENT><MDB/></DOCUMENT>"#;
/// assert!(parse_document(xml).is_ok());
/// ```
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(text, options)?)
}

/// List the XML files to process for an input path.
///
/// A directory yields all `.xml` files directly inside it, sorted by path.
/// A file yields itself if it has an `.xml` extension.
///
/// # Errors
/// Returns [`ParserError::InvalidInput`] for anything else, and
/// [`ParserError::Io`] if the directory or one of its entries cannot be read.
pub fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let entries = fs::read_dir(input)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<PathBuf>>>()?;
        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| path.is_file() && has_xml_extension(path))
            .collect();
        files.sort();
        tracing::debug!(count = files.len(), dir = %input.display(), "Discovered input files");
        Ok(files)
    } else if input.is_file() && has_xml_extension(input) {
        Ok(vec![input.to_path_buf()])
    } else {
        Err(ParserError::InvalidInput(input.to_path_buf()))
    }
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
