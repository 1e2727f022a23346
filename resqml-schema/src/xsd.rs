//! Enumeration extraction from XSD documents.
//!
//! Only named top-level `xs:simpleType` definitions whose `xs:restriction`
//! lists `xs:enumeration` facets are collected. Unions and pattern
//! restrictions are skipped.

use crate::error::{ParseError, SchemaError};
use crate::namespace::XSD_NS;
use crate::node::{XmlNode, read_xml};
use resqml_core::WireEnum;

/// One enumeration facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationValue {
    /// Verbatim token.
    pub value: String,
    /// Documentation attached to the facet.
    pub documentation: Option<String>,
}

/// An enumeration `xs:simpleType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationDef {
    /// Type name.
    pub name: String,
    /// Restriction base as written, e.g. `xs:string`.
    pub base: Option<String>,
    /// Documentation attached to the type.
    pub documentation: Option<String>,
    /// Facets in schema order.
    pub values: Vec<EnumerationValue>,
}

impl EnumerationDef {
    /// Iterates over the tokens in schema order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.value.as_str())
    }
}

fn is_xsd(node: &XmlNode, local: &str) -> bool {
    node.local_name() == local && node.namespace() == Some(XSD_NS)
}

fn xsd_children<'a>(node: &'a XmlNode, local: &'a str) -> impl Iterator<Item = &'a XmlNode> {
    node.children.iter().filter(move |c| is_xsd(c, local))
}

/// Joins every `xs:annotation/xs:documentation` text under `node`.
fn documentation(node: &XmlNode) -> Option<String> {
    let parts: Vec<&str> = xsd_children(node, "annotation")
        .flat_map(|a| xsd_children(a, "documentation"))
        .map(XmlNode::text)
        .filter(|t| !t.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join("\n"))
}

/// Reads every enumeration `xs:simpleType` from an XSD document.
///
/// # Errors
/// Returns `ParseError` if the document is not well formed, the root is not
/// `xs:schema`, or a facet lacks its `value` attribute.
pub fn parse_xsd_enumerations(xsd: &str) -> Result<Vec<EnumerationDef>, ParseError> {
    let root = read_xml(xsd)?;
    if !is_xsd(&root, "schema") {
        return Err(ParseError::structure(format!(
            "expected xs:schema root, found '{}'",
            root.name
        )));
    }

    let mut defs = Vec::new();
    for simple_type in xsd_children(&root, "simpleType") {
        let Some(name) = simple_type.attribute("name") else {
            continue;
        };
        let Some(restriction) = xsd_children(simple_type, "restriction").next() else {
            tracing::trace!(simple_type = name, "skipping non-restriction simple type");
            continue;
        };
        let values = xsd_children(restriction, "enumeration")
            .map(|facet| {
                let value = facet
                    .attribute("value")
                    .ok_or_else(|| ParseError::missing_attr("xs:enumeration", "value"))?;
                Ok(EnumerationValue {
                    value: value.to_string(),
                    documentation: documentation(facet),
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        if values.is_empty() {
            continue;
        }
        defs.push(EnumerationDef {
            name: name.to_string(),
            base: restriction.attribute("base").map(str::to_string),
            documentation: documentation(simple_type),
            values,
        });
    }

    tracing::debug!(count = defs.len(), "extracted XSD enumerations");
    Ok(defs)
}

/// Checks that an enumeration table carries exactly the tokens of `def`.
///
/// # Errors
/// Returns [`SchemaError::EnumerationDrift`] listing the tokens on either side
/// that the other lacks.
pub fn check_enumeration<E: WireEnum>(def: &EnumerationDef) -> Result<(), SchemaError> {
    let table: Vec<&str> = E::wire_values().collect();
    let missing: Vec<String> = def
        .tokens()
        .filter(|t| !table.contains(t))
        .map(str::to_string)
        .collect();
    let extra: Vec<String> = table
        .iter()
        .filter(|t| !def.tokens().any(|d| d == **t))
        .map(|t| (*t).to_string())
        .collect();

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::EnumerationDrift {
            type_name: def.name.clone(),
            missing,
            extra,
        })
    }
}
