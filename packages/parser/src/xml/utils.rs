//! XML utility functions for navigating and extracting data from DOM trees.
//!
//! Tag and attribute names are compared ASCII case-insensitively: the member
//! master data uses upper-case tags (`<MDB>`, `<WP>`) while protocols use
//! lower-case ones, and both are queried with the same vocabulary.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Tag name as written in the source, without namespace
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::xml::get_tag_name;
///
/// let xml = r#"<root><rede>text</rede></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let rede = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(rede), "rede");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
///
/// # Arguments
/// * `node` - Node to check
/// * `tag` - Expected tag name, compared ignoring ASCII case
///
/// # Returns
/// `true` if the node is an element with that tag name
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::xml::has_tag;
///
/// let doc = Document::parse("<MDB/>").unwrap();
/// assert!(has_tag(doc.root_element(), "mdb"));
/// ```
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node).eq_ignore_ascii_case(tag)
}

/// Find the first descendant element with the given tag name.
///
/// The search runs in document order and does not consider `node` itself.
///
/// # Arguments
/// * `node` - Node to search below
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching descendant element, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::xml::find_descendant;
///
/// let xml = r#"<rede><p><redner><name>A</name></redner></p></rede>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_descendant(doc.root_element(), "redner").is_some());
/// assert!(find_descendant(doc.root_element(), "rede").is_none());
/// ```
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| has_tag(*n, tag))
}

/// Find all descendant elements with the given tag name, in document order.
///
/// # Arguments
/// * `node` - Node to search below
/// * `tag` - Tag name to search for
///
/// # Returns
/// Iterator over matching descendant elements, excluding `node` itself
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::xml::find_descendants;
///
/// let xml = r#"<mdb><wp>18</wp><wahlperiode><wp>19</wp></wahlperiode></mdb>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let periods: Vec<_> = find_descendants(doc.root_element(), "wp").collect();
/// assert_eq!(periods.len(), 2);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| has_tag(*n, tag))
}

/// Get the full text content of a node.
///
/// Concatenates every descendant text node in document order. The result
/// is returned verbatim, without trimming.
///
/// # Arguments
/// * `node` - Node to get text from
///
/// # Returns
/// Concatenated text, or an empty string if the node has no text
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bundestag_parser::xml::text_content;
///
/// let doc = Document::parse("<p>Sehr <b>geehrte</b> Damen</p>").unwrap();
/// assert_eq!(text_content(doc.root_element()), "Sehr geehrte Damen");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Get an attribute value from a node, matching the name case-insensitively.
///
/// # Arguments
/// * `node` - Node to get attribute from
/// * `name` - Attribute name
///
/// # Returns
/// Attribute value, or `None` if not found
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name().eq_ignore_ascii_case(name))
        .map(|attr| attr.value())
}
