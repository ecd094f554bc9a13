//! Period-specific data of a member.
//!
//! A member node nests one `<wahlperiode>` block per legislative period
//! served. Resolution picks the block whose `<wp>` text equals the target
//! period literally.

use roxmltree::Node;

use crate::config::{INSTITUTION_TAG, MEMBERSHIP_KEY_PREFIX, PERIOD_BLOCK_TAG, PERIOD_ID_TAG};
use crate::error::{ParserError, Result};
use crate::fields::{extract_field, FieldSpec};
use crate::record::Record;
use crate::types::{MemberPeriod, Membership, Period};
use crate::xml::{find_descendant, find_descendants, text_content};

use super::personal::ID;

pub const DISTRICT: FieldSpec = FieldSpec::text("District", "wkr_name").empty_as_null();
pub const MANDATE: FieldSpec = FieldSpec::text("Mandate", "mandatsart");
pub const LIST: FieldSpec = FieldSpec::text("List", "liste");

/// Output key of the resolved period.
pub const PERIOD_KEY: &str = "Period";

/// Resolve the data of a member for one legislative period.
///
/// With `institutions`, a membership flag is produced for every requested
/// name. Matching is literal: case- and whitespace-sensitive, with no
/// canonicalization. Names that never occur simply yield `false`.
///
/// # Errors
/// Returns [`ParserError::NotActiveInPeriod`] if the member has no period
/// block for `period`.
pub fn resolve_period(
    mdb: Node<'_, '_>,
    period: &Period,
    institutions: Option<&[String]>,
) -> Result<MemberPeriod> {
    let block = find_period_block(mdb, period).ok_or_else(|| ParserError::NotActiveInPeriod {
        member_id: extract_field(mdb, &ID),
        period: period.to_string(),
    })?;

    let declared: Vec<String> = find_descendants(block, INSTITUTION_TAG)
        .map(text_content)
        .collect();

    let memberships = institutions.map(|requested| {
        requested
            .iter()
            .map(|institution| Membership {
                institution: institution.clone(),
                is_member: declared.contains(institution),
            })
            .collect()
    });

    Ok(MemberPeriod {
        period: period.clone(),
        district: extract_field(block, &DISTRICT),
        mandate: extract_field(block, &MANDATE),
        list: extract_field(block, &LIST),
        institutions: declared,
        memberships,
    })
}

/// Find the period block of a member matching `period`.
fn find_period_block<'a, 'input>(
    mdb: Node<'a, 'input>,
    period: &Period,
) -> Option<Node<'a, 'input>> {
    find_descendants(mdb, PERIOD_BLOCK_TAG).find(|block| {
        find_descendant(*block, PERIOD_ID_TAG).is_some_and(|wp| text_content(wp) == period.as_str())
    })
}

impl MemberPeriod {
    /// Convert to a flat record.
    ///
    /// Membership flags are keyed `member_<institution>`.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();

        record.insert(PERIOD_KEY, self.period.to_string());
        record.insert(DISTRICT.name, self.district.clone());
        record.insert(MANDATE.name, self.mandate.clone());
        record.insert(LIST.name, self.list.clone());

        for membership in self.memberships.iter().flatten() {
            record.insert(
                format!("{MEMBERSHIP_KEY_PREFIX}{}", membership.institution),
                membership.is_member,
            );
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const SAMPLE_MDB: &str = r#"<MDB>
  <ID>11000001</ID>
  <WAHLPERIODEN>
    <WAHLPERIODE>
      <WP>18</WP>
      <WKR_NAME>Bonn</WKR_NAME><LISTE/><MANDATSART>Direktwahl</MANDATSART>
      <INSTITUTIONEN>
        <INSTITUTION><INSART_LANG>Fraktion/Gruppe</INSART_LANG><INS_LANG>Fraktion der SPD</INS_LANG></INSTITUTION>
      </INSTITUTIONEN>
    </WAHLPERIODE>
    <WAHLPERIODE>
      <WP>19</WP>
      <WKR_NAME></WKR_NAME><LISTE>NRW</LISTE><MANDATSART>Landesliste</MANDATSART>
      <INSTITUTIONEN>
        <INSTITUTION><INS_LANG>Fraktion der SPD</INS_LANG></INSTITUTION>
        <INSTITUTION><INS_LANG>Ausschuss A</INS_LANG></INSTITUTION>
      </INSTITUTIONEN>
    </WAHLPERIODE>
  </WAHLPERIODEN>
</MDB>"#;

    fn with_mdb<T>(f: impl FnOnce(Node<'_, '_>) -> T) -> T {
        let doc = Document::parse(SAMPLE_MDB).unwrap();
        f(doc.root_element())
    }

    #[test]
    fn test_resolve_period_fields() {
        let period = with_mdb(|mdb| resolve_period(mdb, &Period::from(18), None)).unwrap();

        assert_eq!(period.period, Period::from("18"));
        assert_eq!(period.district, Some("Bonn".to_string()));
        assert_eq!(period.mandate, Some("Direktwahl".to_string()));
        assert_eq!(period.list, Some(String::new()));
        assert_eq!(period.institutions, vec!["Fraktion der SPD"]);
        assert_eq!(period.memberships, None);
    }

    #[test]
    fn test_resolve_period_empty_district_is_null() {
        let period = with_mdb(|mdb| resolve_period(mdb, &Period::from(19), None)).unwrap();
        assert_eq!(period.district, None);
        assert_eq!(period.list, Some("NRW".to_string()));
    }

    #[test]
    fn test_resolve_period_not_active() {
        let err = with_mdb(|mdb| resolve_period(mdb, &Period::from(17), None)).unwrap_err();
        match err {
            ParserError::NotActiveInPeriod { member_id, period } => {
                assert_eq!(member_id, Some("11000001".to_string()));
                assert_eq!(period, "17");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_period_is_literal_match() {
        let result = with_mdb(|mdb| resolve_period(mdb, &Period::from("019"), None));
        assert!(matches!(result, Err(ParserError::NotActiveInPeriod { .. })));
    }

    #[test]
    fn test_institution_flags() {
        let requested = vec!["Ausschuss A".to_string(), "Ausschuss B".to_string()];
        let period =
            with_mdb(|mdb| resolve_period(mdb, &Period::from(19), Some(requested.as_slice()))).unwrap();

        let record = period.to_record();
        assert_eq!(
            record.get("member_Ausschuss A"),
            Some(&FieldValue::Flag(true))
        );
        assert_eq!(
            record.get("member_Ausschuss B"),
            Some(&FieldValue::Flag(false))
        );
    }

    #[test]
    fn test_institution_flags_are_case_and_whitespace_sensitive() {
        let requested = vec!["ausschuss a".to_string(), "Ausschuss A ".to_string()];
        let period =
            with_mdb(|mdb| resolve_period(mdb, &Period::from(19), Some(requested.as_slice()))).unwrap();

        let flags: Vec<bool> = period
            .memberships
            .unwrap()
            .iter()
            .map(|m| m.is_member)
            .collect();
        assert_eq!(flags, vec![false, false]);
    }

    #[test]
    fn test_institutions_are_scoped_to_period() {
        let requested = vec!["Ausschuss A".to_string()];
        let period =
            with_mdb(|mdb| resolve_period(mdb, &Period::from(18), Some(requested.as_slice()))).unwrap();
        assert_eq!(
            period.to_record().get("member_Ausschuss A"),
            Some(&FieldValue::Flag(false))
        );
    }

    #[test]
    fn test_record_keys() {
        let requested = vec!["Ausschuss A".to_string()];
        let period =
            with_mdb(|mdb| resolve_period(mdb, &Period::from(19), Some(requested.as_slice()))).unwrap();
        assert_eq!(
            period.to_record().keys().collect::<Vec<_>>(),
            vec!["Period", "District", "Mandate", "List", "member_Ausschuss A"]
        );
    }
}
