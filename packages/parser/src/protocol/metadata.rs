//! Document-level metadata of a plenary protocol.

use roxmltree::Document;

use crate::fields::{extract_field, FieldSpec};
use crate::record::Record;
use crate::types::ProtocolMetadata;

pub const LOCATION: FieldSpec = FieldSpec::text("location", "ort");
pub const DATE: FieldSpec = FieldSpec::attribute("date", "datum", "date");
pub const PERIOD: FieldSpec = FieldSpec::text("period", "wahlperiode");
pub const SESSION: FieldSpec = FieldSpec::text("session", "sitzungsnr");

/// Extract location, date, period and session from a protocol.
///
/// Missing elements or attributes yield `None`; this never fails.
pub fn parse_metadata(doc: &Document<'_>) -> ProtocolMetadata {
    let root = doc.root();

    ProtocolMetadata {
        location: extract_field(root, &LOCATION),
        date: extract_field(root, &DATE),
        period: extract_field(root, &PERIOD),
        session: extract_field(root, &SESSION),
    }
}

impl ProtocolMetadata {
    /// Append the metadata fields to a record.
    pub fn extend_record(&self, record: &mut Record) {
        record.insert(LOCATION.name, self.location.clone());
        record.insert(DATE.name, self.date.clone());
        record.insert(PERIOD.name, self.period.clone());
        record.insert(SESSION.name, self.session.clone());
    }
}
