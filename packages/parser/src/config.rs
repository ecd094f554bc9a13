//! Configuration constants and validation functions for the parser.
//!
//! The tag vocabulary follows the Bundestag open data formats: plenary
//! protocols (`dbtplenarprotokoll`, 19th legislative period onwards) and
//! the member master data file (`MDB_STAMMDATEN.XML`).

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ParserError, Result};

/// Speech element within a protocol.
pub const SPEECH_TAG: &str = "rede";

/// Speaker element within a speech.
pub const SPEAKER_TAG: &str = "redner";

/// Paragraph element within a speech.
pub const PARAGRAPH_TAG: &str = "p";

/// Attribute classifying a paragraph.
pub const PARAGRAPH_CLASS_ATTRIBUTE: &str = "klasse";

/// Paragraph classes carrying actual remarks.
///
/// `J` is an ordinary paragraph, `J_1` the first paragraph of a speech and
/// `O` any other remark. Chair instructions, interjections and stage
/// directions use other classes and are excluded.
pub const SPEECH_PARAGRAPH_CLASSES: [&str; 3] = ["J", "J_1", "O"];

/// Member element within the master data file.
pub const MEMBER_TAG: &str = "mdb";

/// Legislative period block nested under a member.
pub const PERIOD_BLOCK_TAG: &str = "wahlperiode";

/// Legislative period identifier inside a period block.
pub const PERIOD_ID_TAG: &str = "wp";

/// Institution name inside a period block.
pub const INSTITUTION_TAG: &str = "ins_lang";

/// Separator between occupations in the source text.
pub const OCCUPATION_SEPARATOR: &str = ", ";

/// Delimiter used when a list is flattened into a single cell.
pub const LIST_DELIMITER: &str = ";";

/// Key prefix for institution membership flags.
pub const MEMBERSHIP_KEY_PREFIX: &str = "member_";

/// Default CSV separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Legislative period pattern: one or more digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERIOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Parse a legislative period given on the command line.
///
/// Leading zeros are dropped, so `"019"` and `"19"` name the same period.
///
/// # Examples
/// ```
/// use bundestag_parser::config::parse_period;
///
/// assert_eq!(parse_period("019").unwrap(), 19);
/// assert!(parse_period("XIX").is_err());
/// ```
pub fn parse_period(period: &str) -> Result<u32> {
    if !PERIOD_PATTERN.is_match(period) {
        return Err(ParserError::InvalidPeriod(period.to_string()));
    }
    period
        .parse()
        .map_err(|_| ParserError::InvalidPeriod(period.to_string()))
}

/// Parse a CSV separator, which must be exactly one character.
///
/// # Examples
/// ```
/// use bundestag_parser::config::parse_separator;
///
/// assert_eq!(parse_separator(";").unwrap(), ';');
/// assert!(parse_separator(";;").is_err());
/// ```
pub fn parse_separator(separator: &str) -> Result<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParserError::InvalidSeparator(separator.to_string())),
    }
}
