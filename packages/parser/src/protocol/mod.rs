//! Plenary protocol parsing.
//!
//! A protocol yields one [`Speech`] per `<rede>` element, optionally
//! carrying the document-level [`ProtocolMetadata`](crate::types::ProtocolMetadata).

mod metadata;
mod speech;

use roxmltree::Document;

use crate::config::SPEECH_TAG;
use crate::record::Record;
use crate::types::Speech;
use crate::xml::find_descendants;

pub use metadata::parse_metadata;
pub use speech::parse_speech;

/// Collect all speeches of a protocol in document order.
///
/// With `include_metadata`, the protocol metadata is extracted once and
/// attached to every speech.
pub fn collect_speeches(doc: &Document<'_>, include_metadata: bool) -> Vec<Speech> {
    let metadata = include_metadata.then(|| parse_metadata(doc));

    let speeches: Vec<Speech> = find_descendants(doc.root(), SPEECH_TAG)
        .map(|node| Speech {
            metadata: metadata.clone(),
            ..parse_speech(node)
        })
        .collect();

    tracing::debug!(speeches = speeches.len(), "Collected speeches");
    speeches
}

/// Convert speeches to flat records.
pub fn speeches_to_records(speeches: &[Speech]) -> Vec<Record> {
    speeches.iter().map(Speech::to_record).collect()
}
