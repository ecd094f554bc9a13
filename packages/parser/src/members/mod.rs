//! Member master data parsing.
//!
//! The master data file holds one `<mdb>` element per member. Personal
//! fields are extracted by [`parse_personal`]; period-specific fields by
//! [`resolve_period`]. [`collect_members`] ties both together for a whole
//! document.

mod period;
mod personal;

use roxmltree::{Document, Node};

use crate::config::MEMBER_TAG;
use crate::error::{ParserError, Result};
use crate::fields::extract_field;
use crate::record::Record;
use crate::types::{
    MemberBatch, MemberPeriod, MemberQuery, MemberRow, OccupationFormat, Period,
};
use crate::xml::find_descendants;

pub use period::resolve_period;
pub use personal::{parse_personal, split_occupation};

/// All `<mdb>` nodes of a master data document, in document order.
pub fn find_members<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    find_descendants(doc.root(), MEMBER_TAG).collect()
}

/// Keep only members that list `period` among their served periods.
///
/// This is a presence check over all `<wp>` values of a member. It is
/// deliberately independent of [`resolve_period`], which looks for the
/// matching period block.
pub fn reduce_to_period<'a, 'input>(
    members: &[Node<'a, 'input>],
    period: &Period,
) -> Vec<Node<'a, 'input>> {
    members
        .iter()
        .copied()
        .filter(|mdb| {
            personal::served_periods(*mdb)
                .iter()
                .any(|wp| wp == period.as_str())
        })
        .collect()
}

/// Resolve period data for the member with the given identifier.
///
/// # Errors
/// Returns [`ParserError::MemberNotFound`] if no member has `id`, or
/// [`ParserError::NotActiveInPeriod`] if the member has no block for `period`.
pub fn resolve_period_by_id(
    members: &[Node<'_, '_>],
    id: &str,
    period: &Period,
    institutions: Option<&[String]>,
) -> Result<MemberPeriod> {
    let mdb = members
        .iter()
        .find(|mdb| extract_field(**mdb, &personal::ID).as_deref() == Some(id))
        .ok_or_else(|| ParserError::MemberNotFound(id.to_string()))?;

    resolve_period(*mdb, period, institutions)
}

/// Collect all members of a master data document.
///
/// Without a period, only personal data is produced. With a period, the
/// members are first reduced to those serving in it, then each member's
/// period block is resolved. A member whose block cannot be resolved is
/// dropped from the result and counted in [`MemberBatch::skipped`]; this is
/// not reported as an error.
///
/// # Errors
/// Returns [`ParserError::InstitutionsWithoutPeriod`] if institutions are
/// requested without a period. The check runs before any extraction.
pub fn collect_members(doc: &Document<'_>, query: &MemberQuery) -> Result<MemberBatch> {
    let Some(period) = &query.period else {
        if query.institutions.is_some() {
            return Err(ParserError::InstitutionsWithoutPeriod);
        }

        let rows: Vec<MemberRow> = find_members(doc)
            .into_iter()
            .map(|mdb| MemberRow {
                member: parse_personal(mdb),
                period: None,
            })
            .collect();

        tracing::debug!(members = rows.len(), "Collected members");
        return Ok(MemberBatch { rows, skipped: 0 });
    };

    let members = reduce_to_period(&find_members(doc), period);
    let institutions = query.institutions.as_deref();

    let mut batch = MemberBatch::default();
    for mdb in members {
        match resolve_period(mdb, period, institutions) {
            Ok(member_period) => batch.rows.push(MemberRow {
                member: parse_personal(mdb),
                period: Some(member_period),
            }),
            Err(err @ ParserError::NotActiveInPeriod { .. }) => {
                tracing::debug!(error = %err, "Skipping member");
                batch.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        members = batch.rows.len(),
        skipped = batch.skipped,
        period = %period,
        "Collected members"
    );
    Ok(batch)
}

impl MemberRow {
    /// Convert to a flat record.
    ///
    /// The period fields are appended to the personal fields. `Periods`
    /// keeps every served period while `Period` names the resolved one.
    #[must_use]
    pub fn to_record(&self, occupation: OccupationFormat) -> Record {
        let mut record = self.member.to_record(occupation);
        if let Some(period) = &self.period {
            record.merge(period.to_record());
        }
        record
    }
}

impl MemberBatch {
    /// Convert all rows to flat records.
    #[must_use]
    pub fn to_records(&self, occupation: OccupationFormat) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| row.to_record(occupation))
            .collect()
    }
}
