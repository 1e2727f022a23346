//! Namespace-resolved XML element tree.
//!
//! [`read_xml`] turns a document into an [`XmlNode`] tree. Element and
//! attribute prefixes are resolved against an explicit scope stack, and
//! `xsi:type` values are resolved to qualified names so that later stages
//! never see prefixes.

use crate::error::ParseError;
use crate::namespace::{QualifiedName, XML_NS, XSI_NS, split_qname};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

/// A namespace-resolved attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Attribute name; unprefixed attributes have no namespace.
    pub name: QualifiedName,
    /// Unescaped value.
    pub value: String,
}

/// A namespace-resolved element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    /// Element name.
    pub name: QualifiedName,
    /// Resolved `xsi:type`, if present.
    pub xsi_type: Option<QualifiedName>,
    /// Attributes other than namespace declarations and `xsi:type`.
    pub attributes: Vec<XmlAttribute>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Concatenated character content as read. Whitespace-only text is
    /// dropped from elements that have children.
    pub text: String,
}

impl XmlNode {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            xsi_type: None,
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Sets the `xsi:type`.
    #[must_use]
    pub fn with_xsi_type(mut self, type_name: QualifiedName) -> Self {
        self.xsi_type = Some(type_name);
        self
    }

    /// Sets the character content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child element in place.
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Returns the element namespace.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.name.namespace.as_deref()
    }

    /// Returns the local name of the `xsi:type`, if present.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.xsi_type.as_ref().map(|t| t.local.as_str())
    }

    /// Returns the first child with the given local name.
    #[must_use]
    pub fn child(&self, local: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name.local == local)
    }

    /// Returns all children with the given local name.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name.local == local)
    }

    /// Returns an unqualified attribute value.
    #[must_use]
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local == local)
            .map(|a| a.value.as_str())
    }

    /// Returns the character content without surrounding whitespace.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Returns the character content exactly as read.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    /// Returns true if the element has neither children nor text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_empty()
    }
}

/// Prefix bindings, one frame per open element.
#[derive(Debug, Default)]
struct NamespaceScope {
    frames: Vec<Vec<(Option<String>, Option<String>)>>,
}

impl NamespaceScope {
    fn push(&mut self, frame: Vec<(Option<String>, Option<String>)>) {
        self.frames.push(frame);
    }

    fn pop(&mut self) {
        self.frames.pop();
    }

    fn resolve(&self, prefix: Option<&str>) -> Result<Option<String>, ParseError> {
        if prefix == Some("xml") {
            return Ok(Some(XML_NS.to_string()));
        }
        let bound = self
            .frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(p, _)| p.as_deref() == prefix);
        match (bound, prefix) {
            (Some((_, uri)), _) => Ok(uri.clone()),
            (None, None) => Ok(None),
            (None, Some(p)) => Err(ParseError::UnknownPrefix {
                prefix: p.to_string(),
            }),
        }
    }
}

/// Reads a document into its root element.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, uses an undeclared prefix,
/// or does not have exactly one root element.
pub fn read_xml(xml: &str) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut scope = NamespaceScope::default();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let node = open_element(e, &mut scope)?;
                stack.push(node);
            }
            Event::Empty(ref e) => {
                let node = open_element(e, &mut scope)?;
                scope.pop();
                close_element(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                scope.pop();
                let node = stack
                    .pop()
                    .ok_or_else(|| ParseError::structure("unbalanced end tag"))?;
                close_element(node, &mut stack, &mut root)?;
            }
            Event::Text(ref t) => {
                let raw = std::str::from_utf8(t.as_ref())?;
                append_text(&mut stack, &unescape(raw)?)?;
            }
            Event::CData(ref c) => {
                append_text(&mut stack, std::str::from_utf8(c.as_ref())?)?;
            }
            Event::GeneralRef(ref r) => {
                let entity = resolve_entity(std::str::from_utf8(r.as_ref())?)?;
                append_text(&mut stack, entity.encode_utf8(&mut [0; 4]))?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::structure(format!(
            "element '{}' is not closed",
            open.name.local
        )));
    }
    root.ok_or_else(|| ParseError::structure("no root element found"))
}

fn open_element(e: &BytesStart<'_>, scope: &mut NamespaceScope) -> Result<XmlNode, ParseError> {
    let raw_name = std::str::from_utf8(e.name().as_ref())?.to_string();

    let mut frame = Vec::new();
    let mut raw_attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = unescape(std::str::from_utf8(&attr.value)?)?.into_owned();
        if key == "xmlns" {
            frame.push((None, (!value.is_empty()).then_some(value)));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            frame.push((Some(prefix.to_string()), Some(value)));
        } else {
            raw_attributes.push((key.to_string(), value));
        }
    }
    scope.push(frame);

    let (prefix, local) = split_qname(&raw_name);
    let mut node = XmlNode::new(QualifiedName {
        namespace: scope.resolve(prefix)?,
        local: local.to_string(),
    });

    for (key, value) in raw_attributes {
        let (prefix, local) = split_qname(&key);
        let namespace = match prefix {
            Some(p) => scope.resolve(Some(p))?,
            None => None,
        };
        if namespace.as_deref() == Some(XSI_NS) && local == "type" {
            let (type_prefix, type_local) = split_qname(value.trim());
            node.xsi_type = Some(QualifiedName {
                namespace: scope.resolve(type_prefix)?,
                local: type_local.to_string(),
            });
        } else {
            node.attributes.push(XmlAttribute {
                name: QualifiedName {
                    namespace,
                    local: local.to_string(),
                },
                value,
            });
        }
    }

    Ok(node)
}

fn close_element(
    mut node: XmlNode,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
) -> Result<(), ParseError> {
    if !node.children.is_empty() && node.text.trim().is_empty() {
        node.text.clear();
    }
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(ParseError::structure("multiple root elements"));
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn append_text(stack: &mut [XmlNode], text: &str) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(node) => node.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(ParseError::structure("text outside the root element")),
    }
    Ok(())
}

fn resolve_entity(name: &str) -> Result<char, ParseError> {
    let resolved = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => name.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse::<u32>().ok(),
            };
            value.and_then(char::from_u32)
        }),
    };
    resolved.ok_or_else(|| {
        ParseError::invalid_value(
            format!("&{name};"),
            name,
            "a predefined entity or character reference",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{COMMON_NS, RESQML_NS};

    #[test]
    fn test_prefixed_elements_resolve() {
        let xml = r#"<resqml2:Points xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2"
                 xmlns:eml="http://www.energistics.org/energyml/data/commonv2">
                <resqml2:Count>3</resqml2:Count>
                <eml:Title>grid</eml:Title>
            </resqml2:Points>"#;
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(root.namespace(), Some(RESQML_NS));
        assert_eq!(root.local_name(), "Points");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.child("Count").map(XmlNode::text), Some("3"));
        assert_eq!(
            root.child("Title").and_then(XmlNode::namespace),
            Some(COMMON_NS)
        );
    }

    #[test]
    fn test_default_namespace_inherited_and_undeclared() {
        let xml = r#"<a xmlns="urn:one"><b/><c xmlns=""><d/></c></a>"#;
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(root.namespace(), Some("urn:one"));
        assert_eq!(root.children[0].namespace(), Some("urn:one"));
        assert_eq!(root.children[1].namespace(), None);
        assert_eq!(root.children[1].children[0].namespace(), None);
    }

    #[test]
    fn test_prefix_rebinding_is_scoped() {
        let xml = r#"<p:a xmlns:p="urn:outer"><p:b xmlns:p="urn:inner"/><p:c/></p:a>"#;
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(root.children[0].namespace(), Some("urn:inner"));
        assert_eq!(root.children[1].namespace(), Some("urn:outer"));
    }

    #[test]
    fn test_xsi_type_resolved() {
        let xml = r#"<r:Values xmlns:r="http://www.energistics.org/energyml/data/resqmlv2"
                 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                 xsi:type="r:IntegerConstantArray" units="m"/>"#;
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(
            root.xsi_type,
            Some(QualifiedName::resqml("IntegerConstantArray"))
        );
        assert_eq!(root.type_name(), Some("IntegerConstantArray"));
        assert_eq!(root.attributes.len(), 1);
        assert_eq!(root.attribute("units"), Some("m"));
    }

    #[test]
    fn test_entities_and_cdata() {
        let xml = "<a>x &amp; y&#33; <![CDATA[<raw>]]></a>";
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(root.text(), "x & y! <raw>");
    }

    #[test]
    fn test_leaf_text_kept_untrimmed() {
        let xml = "<a>\n  <b>  two  words </b>\n  <c>\t</c>\n</a>";
        let root = read_xml(xml).expect("well-formed");
        assert_eq!(root.raw_text(), "");
        assert_eq!(root.children[0].raw_text(), "  two  words ");
        assert_eq!(root.children[0].text(), "two  words");
        assert_eq!(root.children[1].raw_text(), "\t");
        assert_eq!(root.children[1].text(), "");
        assert!(!root.children[1].is_empty());
    }

    #[test]
    fn test_undeclared_prefix_rejected() {
        let err = read_xml("<q:a/>").expect_err("undeclared prefix");
        assert!(matches!(err, ParseError::UnknownPrefix { ref prefix } if prefix == "q"));
    }

    #[test]
    fn test_no_root_rejected() {
        let err = read_xml("<?xml version=\"1.0\"?>\n").expect_err("no root");
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_multiple_roots_rejected() {
        let err = read_xml("<a/><b/>").expect_err("two roots");
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("lt").expect("predefined"), '<');
        assert_eq!(resolve_entity("#x41").expect("hex"), 'A');
        assert_eq!(resolve_entity("#65").expect("decimal"), 'A');
        assert!(resolve_entity("nbsp").is_err());
    }
}
