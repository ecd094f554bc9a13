//! Personal master data of a single member.

use roxmltree::Node;

use crate::config::{LIST_DELIMITER, OCCUPATION_SEPARATOR, PERIOD_ID_TAG};
use crate::fields::{extract_field, FieldSpec};
use crate::record::{FieldValue, Record};
use crate::types::{Member, OccupationFormat};
use crate::xml::{find_descendants, text_content};

pub const ID: FieldSpec = FieldSpec::text("ID", "id");
pub const FIRST_NAME: FieldSpec = FieldSpec::text("FirstName", "vorname");
pub const LAST_NAME: FieldSpec = FieldSpec::text("LastName", "nachname");
pub const ACADEMIC_TITLE: FieldSpec = FieldSpec::text("AcademicTitle", "akad_titel").empty_as_null();
pub const BIRTH_YEAR: FieldSpec = FieldSpec::text("BirthYear", "geburtsdatum");
pub const BIRTH_PLACE: FieldSpec = FieldSpec::text("BirthPlace", "geburtsort");
pub const DEATH_YEAR: FieldSpec = FieldSpec::text("DeathYear", "sterbedatum").empty_as_null();
pub const GENDER: FieldSpec = FieldSpec::text("Gender", "geschlecht");
pub const PARTY: FieldSpec = FieldSpec::text("Party", "partei_kurz");
pub const OCCUPATION: FieldSpec = FieldSpec::text("Occupation", "beruf").empty_as_null();
pub const VITA: FieldSpec = FieldSpec::text("Vita", "vita_kurz");

/// Output key of the display name.
pub const NAME_KEY: &str = "Name";

/// Output key of all served periods, joined by `;`.
pub const PERIODS_KEY: &str = "Periods";

/// Parse the personal data of one `<mdb>` node.
pub fn parse_personal(mdb: Node<'_, '_>) -> Member {
    Member {
        id: extract_field(mdb, &ID),
        first_name: extract_field(mdb, &FIRST_NAME),
        last_name: extract_field(mdb, &LAST_NAME),
        academic_title: extract_field(mdb, &ACADEMIC_TITLE),
        birth_year: extract_field(mdb, &BIRTH_YEAR),
        birth_place: extract_field(mdb, &BIRTH_PLACE),
        death_year: extract_field(mdb, &DEATH_YEAR),
        gender: extract_field(mdb, &GENDER),
        party: extract_field(mdb, &PARTY),
        occupation: extract_field(mdb, &OCCUPATION).map(|text| split_occupation(&text)),
        periods: served_periods(mdb),
        vita: extract_field(mdb, &VITA),
    }
}

/// Split occupation text on `", "`, keeping the source order.
///
/// # Examples
/// ```
/// use bundestag_parser::members::split_occupation;
///
/// assert_eq!(split_occupation("Lehrer, Politiker"), vec!["Lehrer", "Politiker"]);
/// ```
pub fn split_occupation(text: &str) -> Vec<String> {
    text.split(OCCUPATION_SEPARATOR).map(String::from).collect()
}

/// All `<wp>` values of a member, in source order.
pub(crate) fn served_periods(mdb: Node<'_, '_>) -> Vec<String> {
    find_descendants(mdb, PERIOD_ID_TAG).map(text_content).collect()
}

impl Member {
    /// Convert to a flat record.
    #[must_use]
    pub fn to_record(&self, occupation: OccupationFormat) -> Record {
        let mut record = Record::new();

        record.insert(ID.name, self.id.clone());
        record.insert(FIRST_NAME.name, self.first_name.clone());
        record.insert(LAST_NAME.name, self.last_name.clone());
        record.insert(NAME_KEY, self.display_name());
        record.insert(ACADEMIC_TITLE.name, self.academic_title.clone());
        record.insert(BIRTH_YEAR.name, self.birth_year.clone());
        record.insert(BIRTH_PLACE.name, self.birth_place.clone());
        record.insert(DEATH_YEAR.name, self.death_year.clone());
        record.insert(GENDER.name, self.gender.clone());
        record.insert(PARTY.name, self.party.clone());
        record.insert(OCCUPATION.name, render_occupation(self.occupation.as_deref(), occupation));
        record.insert(PERIODS_KEY, self.periods.join(LIST_DELIMITER));
        record.insert(VITA.name, self.vita.clone());

        record
    }
}

fn render_occupation(occupation: Option<&[String]>, format: OccupationFormat) -> FieldValue {
    match (occupation, format) {
        (None, _) => FieldValue::Null,
        (Some(items), OccupationFormat::List) => FieldValue::List(items.to_vec()),
        (Some(items), OccupationFormat::Joined) => FieldValue::Text(items.join(LIST_DELIMITER)),
    }
}
