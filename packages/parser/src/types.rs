//! Core data types for the parser.
//!
//! Each record type carries the exact field set of its entity. Fields that
//! may be missing in the source are `Option`s, so the set of output keys
//! never depends on which elements were present.

use std::fmt;

/// Canonical string form of a legislative period identifier.
///
/// Period matching is a literal string comparison against the `<wp>` text
/// of the source, so integers are converted to their decimal form.
///
/// # Examples
/// ```
/// use bundestag_parser::types::Period;
///
/// assert_eq!(Period::from(19), Period::from("19"));
/// assert_eq!(Period::from(19).as_str(), "19");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period(String);

impl Period {
    /// Get the period identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Period {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Period {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Period {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Document-level metadata of a plenary protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolMetadata {
    /// Location of the session (`<ort>`).
    pub location: Option<String>,

    /// Session date (`date` attribute of `<datum>`).
    pub date: Option<String>,

    /// Legislative period (`<wahlperiode>`).
    pub period: Option<String>,

    /// Session number (`<sitzungsnr>`).
    pub session: Option<String>,
}

/// Speaker of a speech.
///
/// Name components default to an empty string when the speaker node exists
/// but lacks them, so the display name is always computable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub first_name: String,
    pub last_name: String,
    pub party: Option<String>,
    pub role: Option<String>,
}

impl Speaker {
    /// First and last name joined by a single space.
    ///
    /// # Examples
    /// ```
    /// use bundestag_parser::types::Speaker;
    ///
    /// let speaker = Speaker { first_name: "Anna".into(), ..Default::default() };
    /// assert_eq!(speaker.display_name(), "Anna ");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single speech of a plenary protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    /// Speaker, or `None` if the speech has no speaker node.
    pub speaker: Option<Speaker>,

    /// Remarks joined by newlines, or `None` if no qualifying paragraph exists.
    pub text: Option<String>,

    /// Metadata of the enclosing protocol, when requested.
    pub metadata: Option<ProtocolMetadata>,
}

/// How occupations are rendered in output records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OccupationFormat {
    /// Occupations joined with `;` into a single string.
    #[default]
    Joined,

    /// Occupations as an ordered list.
    List,
}

/// Personal master data of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub academic_title: Option<String>,
    pub birth_year: Option<String>,
    pub birth_place: Option<String>,
    pub death_year: Option<String>,
    pub gender: Option<String>,
    pub party: Option<String>,

    /// Occupations in source order.
    pub occupation: Option<Vec<String>>,

    /// Every legislative period the member served, in source order.
    pub periods: Vec<String>,

    /// Short biography.
    pub vita: Option<String>,
}

impl Member {
    /// First and last name joined by a single space.
    ///
    /// Missing components count as empty strings, so the name is always
    /// present even for incomplete records.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

/// Membership flag for one requested institution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    /// Institution name as requested by the caller.
    pub institution: String,

    /// Whether the name is declared verbatim in the period block.
    pub is_member: bool,
}

/// Period-specific data of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPeriod {
    /// The resolved legislative period.
    pub period: Period,

    /// Electoral district name.
    pub district: Option<String>,

    /// Mandate type (e.g., "Direktwahl", "Landesliste").
    pub mandate: Option<String>,

    /// Electoral list.
    pub list: Option<String>,

    /// Raw institution names declared in the period block, in source order.
    pub institutions: Vec<String>,

    /// Flags for the requested institutions, in request order.
    pub memberships: Option<Vec<Membership>>,
}

/// A member together with the data of the requested period, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub member: Member,
    pub period: Option<MemberPeriod>,
}

/// Selection applied when collecting members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    /// Restrict to members active in this period and attach period data.
    pub period: Option<Period>,

    /// Institutions to emit membership flags for. Requires `period`.
    pub institutions: Option<Vec<String>>,
}

impl MemberQuery {
    /// Query for all members without period data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a legislative period.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<Period>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Request institution membership flags.
    #[must_use]
    pub fn with_institutions(
        mut self,
        institutions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.institutions = Some(institutions.into_iter().map(Into::into).collect());
        self
    }
}

/// Result of collecting members from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberBatch {
    /// Members in document order.
    pub rows: Vec<MemberRow>,

    /// Members that passed the period filter but had no matching period block.
    pub skipped: usize,
}
