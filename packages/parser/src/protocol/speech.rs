//! Speech extraction: speaker identity and remark text of a `<rede>`.

use roxmltree::Node;

use crate::config::{
    PARAGRAPH_CLASS_ATTRIBUTE, PARAGRAPH_TAG, SPEAKER_TAG, SPEECH_PARAGRAPH_CLASSES,
};
use crate::fields::{extract_field, FieldSpec};
use crate::record::{FieldValue, Record};
use crate::types::{Speaker, Speech};
use crate::xml::{find_descendant, find_descendants, get_attribute, text_content};

const FIRST_NAME: FieldSpec = FieldSpec::text("firstname", "vorname");
const LAST_NAME: FieldSpec = FieldSpec::text("lastname", "nachname");
const FACTION: FieldSpec = FieldSpec::text("Party", "fraktion");
const ROLE: FieldSpec = FieldSpec::text("Role", "rolle");

/// Output key of the speaker display name.
pub const SPEAKER_KEY: &str = "Speaker";

/// Output key of the speech text.
pub const TEXT_KEY: &str = "Text";

/// Parse a single `<rede>` node into a speech.
///
/// Metadata is not attached here; see [`super::collect_speeches`].
pub fn parse_speech(speech: Node<'_, '_>) -> Speech {
    Speech {
        speaker: parse_speaker(speech),
        text: parse_text(speech),
        metadata: None,
    }
}

/// Resolve the speaker of a speech.
///
/// Returns `None` if the speech has no `<redner>` node. Otherwise missing
/// name components default to an empty string while party and role stay
/// optional.
fn parse_speaker(speech: Node<'_, '_>) -> Option<Speaker> {
    let redner = find_descendant(speech, SPEAKER_TAG)?;

    Some(Speaker {
        first_name: extract_field(redner, &FIRST_NAME).unwrap_or_default(),
        last_name: extract_field(redner, &LAST_NAME).unwrap_or_default(),
        party: extract_field(redner, &FACTION),
        role: extract_field(redner, &ROLE),
    })
}

/// Join the text of all remark paragraphs with newlines.
///
/// Returns `None` when no paragraph carries one of the remark classes, so
/// that "no speech text" stays distinguishable from an empty speech.
fn parse_text(speech: Node<'_, '_>) -> Option<String> {
    let paragraphs: Vec<String> = find_descendants(speech, PARAGRAPH_TAG)
        .filter(|p| is_remark(*p))
        .map(text_content)
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n"))
    }
}

/// Check if a paragraph holds remarks of the speaker.
fn is_remark(paragraph: Node<'_, '_>) -> bool {
    get_attribute(paragraph, PARAGRAPH_CLASS_ATTRIBUTE)
        .is_some_and(|class| SPEECH_PARAGRAPH_CLASSES.contains(&class))
}

impl Speech {
    /// Convert to a flat record.
    ///
    /// Keys are `Speaker`, `Party`, `Role`, `Text`, followed by the
    /// metadata keys when metadata is attached.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        let speaker = self.speaker.as_ref();

        record.insert(SPEAKER_KEY, speaker.map(Speaker::display_name));
        record.insert(FACTION.name, speaker.and_then(|s| s.party.clone()));
        record.insert(ROLE.name, speaker.and_then(|s| s.role.clone()));
        record.insert(TEXT_KEY, FieldValue::from(self.text.clone()));

        if let Some(metadata) = &self.metadata {
            metadata.extend_record(&mut record);
        }

        record
    }
}
