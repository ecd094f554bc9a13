//! Declarative field descriptors.
//!
//! Every optional field of every record type is described by a
//! [`FieldSpec`]: the output key, where to find the value in the tree and
//! whether an empty value counts as absent. A single routine,
//! [`extract_field`], resolves any descriptor against a node.

use roxmltree::Node;

use crate::xml::{find_descendant, get_attribute, text_content};

/// Where a field value lives relative to the node being extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Text content of the first descendant element with this tag.
    Text(&'static str),

    /// Attribute of the first descendant element with this tag.
    Attribute {
        tag: &'static str,
        attribute: &'static str,
    },
}

/// Declarative description of one extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key under which the value appears in output records.
    pub name: &'static str,

    /// Location of the value in the tree.
    pub lookup: Lookup,

    /// Treat an empty extracted string as absent.
    ///
    /// The member master data sometimes encodes "no value" as an empty
    /// element rather than omitting it.
    pub empty_as_null: bool,
}

impl FieldSpec {
    /// Field read from the text of a descendant element.
    #[must_use]
    pub const fn text(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            lookup: Lookup::Text(tag),
            empty_as_null: false,
        }
    }

    /// Field read from an attribute of a descendant element.
    #[must_use]
    pub const fn attribute(name: &'static str, tag: &'static str, attribute: &'static str) -> Self {
        Self {
            name,
            lookup: Lookup::Attribute { tag, attribute },
            empty_as_null: false,
        }
    }

    /// Collapse an empty extraction to `None`.
    #[must_use]
    pub const fn empty_as_null(mut self) -> Self {
        self.empty_as_null = true;
        self
    }
}

/// Resolve a field descriptor against a node.
///
/// Returns `None` when the element or attribute is missing, or when the
/// value is empty and the descriptor treats empty as absent. Never fails.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::fields::{extract_field, FieldSpec};
///
/// const TITLE: FieldSpec = FieldSpec::text("AcademicTitle", "akad_titel").empty_as_null();
///
/// let doc = Document::parse("<mdb><akad_titel></akad_titel></mdb>").unwrap();
/// assert_eq!(extract_field(doc.root_element(), &TITLE), None);
/// ```
pub fn extract_field(node: Node<'_, '_>, spec: &FieldSpec) -> Option<String> {
    let value = match spec.lookup {
        Lookup::Text(tag) => find_descendant(node, tag).map(text_content),
        Lookup::Attribute { tag, attribute } => {
            find_descendant(node, tag).and_then(|n| get_attribute(n, attribute).map(String::from))
        }
    }?;

    if spec.empty_as_null && value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const DISTRICT: FieldSpec = FieldSpec::text("District", "wkr_name").empty_as_null();
    const MANDATE: FieldSpec = FieldSpec::text("Mandate", "mandatsart");
    const DATE: FieldSpec = FieldSpec::attribute("date", "datum", "date");

    #[test]
    fn test_text_field_present() {
        let doc = Document::parse("<wp><mandatsart>Direktwahl</mandatsart></wp>").unwrap();
        assert_eq!(
            extract_field(doc.root_element(), &MANDATE),
            Some("Direktwahl".to_string())
        );
    }

    #[test]
    fn test_text_field_missing() {
        let doc = Document::parse("<wp/>").unwrap();
        assert_eq!(extract_field(doc.root_element(), &MANDATE), None);
    }

    #[test]
    fn test_empty_text_kept_without_flag() {
        let doc = Document::parse("<wp><mandatsart/></wp>").unwrap();
        assert_eq!(
            extract_field(doc.root_element(), &MANDATE),
            Some(String::new())
        );
    }

    #[test]
    fn test_empty_text_collapsed_with_flag() {
        let doc = Document::parse("<wp><wkr_name></wkr_name></wp>").unwrap();
        assert_eq!(extract_field(doc.root_element(), &DISTRICT), None);
    }

    #[test]
    fn test_attribute_field() {
        let doc = Document::parse(r#"<k><datum date="24.10.2017">Dienstag</datum></k>"#).unwrap();
        assert_eq!(
            extract_field(doc.root_element(), &DATE),
            Some("24.10.2017".to_string())
        );
    }

    #[test]
    fn test_attribute_field_missing_attribute() {
        let doc = Document::parse("<k><datum>Dienstag</datum></k>").unwrap();
        assert_eq!(extract_field(doc.root_element(), &DATE), None);
    }
}
