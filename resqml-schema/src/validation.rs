//! Descriptor-driven document validation.
//!
//! This module checks an [`XmlNode`] tree against the descriptor table before
//! it is mapped onto typed arrays: element names, occurrence bounds, lexical
//! forms, facets, namespaces and `xsi:type` substitution.

use crate::config::ParserConfig;
use crate::descriptor::{FieldDescriptor, Placement, SchemaRegistry, TypeDescriptor, ValueKind};
use crate::error::ParseError;
use crate::lexical::{parse_boolean, parse_double, parse_long};
use crate::node::XmlNode;

/// Validates `node` as an instance of the declared type.
///
/// # Arguments
/// * `registry` - Descriptor table
/// * `node` - Element to validate
/// * `declared` - Type the element is declared with
/// * `config` - Parser configuration
///
/// # Errors
/// Returns `ParseError` describing the first violation found.
pub fn validate_node(
    registry: &SchemaRegistry,
    node: &XmlNode,
    declared: &str,
    config: &ParserConfig,
) -> Result<(), ParseError> {
    let descriptor = effective_type(registry, node, declared, config.is_strict_namespaces())?;
    let fields = registry
        .fields_of(descriptor.name)
        .map_err(|_| ParseError::UnknownType {
            type_name: descriptor.name.to_string(),
            element: node.local_name().to_string(),
        })?;

    for field in fields.iter().filter(|f| f.placement == Placement::Attribute) {
        match node.attribute(field.wire_name) {
            Some(value) => check_value(registry, field, value, config)?,
            None if field.is_required() => {
                return Err(ParseError::missing_attr(node.local_name(), field.wire_name));
            }
            None => {}
        }
    }

    for child in &node.children {
        let field = fields
            .iter()
            .find(|f| f.placement == Placement::Element && f.wire_name == child.local_name());
        match field {
            Some(field) => {
                if config.is_strict_namespaces() && child.namespace() != Some(field.namespace) {
                    return Err(ParseError::NamespaceMismatch {
                        element: child.local_name().to_string(),
                        expected: field.namespace.to_string(),
                        actual: child.namespace().unwrap_or_default().to_string(),
                    });
                }
            }
            None if config.allows_unknown_elements() => {
                tracing::warn!(
                    element = child.local_name(),
                    parent = descriptor.name,
                    "ignoring unknown element"
                );
            }
            None => {
                return Err(ParseError::unknown_element(
                    child.local_name(),
                    descriptor.name,
                ));
            }
        }
    }

    for field in fields.iter().filter(|f| f.placement == Placement::Element) {
        let occurrences: Vec<&XmlNode> = node.children_named(field.wire_name).collect();
        if occurrences.len() < field.min_occurs as usize || !field.max_occurs.allows(occurrences.len())
        {
            return Err(ParseError::Occurs {
                element: field.wire_name.to_string(),
                parent: descriptor.name.to_string(),
                min: field.min_occurs,
                max: field.max_occurs,
                actual: occurrences.len(),
            });
        }
        for child in occurrences {
            match field.kind {
                ValueKind::Complex(type_name) => validate_node(registry, child, type_name, config)?,
                _ => {
                    if let Some(nested) = child.children.first() {
                        return Err(ParseError::unknown_element(
                            nested.local_name(),
                            field.wire_name,
                        ));
                    }
                    let text = match field.kind {
                        ValueKind::String => child.raw_text(),
                        _ => child.text(),
                    };
                    check_value(registry, field, text, config)?;
                }
            }
        }
    }

    Ok(())
}

/// Resolves the concrete type of `node`, honouring `xsi:type`.
///
/// # Errors
/// Returns `ParseError` if the type is unknown, cannot substitute for the
/// declared type, or is abstract.
pub fn effective_type(
    registry: &SchemaRegistry,
    node: &XmlNode,
    declared: &str,
    strict_namespaces: bool,
) -> Result<&'static TypeDescriptor, ParseError> {
    let unknown = |type_name: &str| ParseError::UnknownType {
        type_name: type_name.to_string(),
        element: node.local_name().to_string(),
    };

    let descriptor = match &node.xsi_type {
        Some(xsi_type) => {
            let descriptor = registry
                .get(&xsi_type.local)
                .ok_or_else(|| unknown(&xsi_type.local))?;
            if strict_namespaces && xsi_type.namespace.as_deref() != Some(descriptor.namespace) {
                return Err(ParseError::NamespaceMismatch {
                    element: xsi_type.local.clone(),
                    expected: descriptor.namespace.to_string(),
                    actual: xsi_type.namespace.clone().unwrap_or_default(),
                });
            }
            if !registry.is_substitutable(descriptor.name, declared) {
                return Err(ParseError::InvalidSubstitution {
                    type_name: descriptor.name.to_string(),
                    expected: declared.to_string(),
                    element: node.local_name().to_string(),
                });
            }
            descriptor
        }
        None => registry.get(declared).ok_or_else(|| unknown(declared))?,
    };

    if descriptor.is_abstract {
        return Err(ParseError::AbstractType {
            type_name: descriptor.name.to_string(),
            element: node.local_name().to_string(),
        });
    }
    Ok(descriptor)
}

fn check_value(
    registry: &SchemaRegistry,
    field: &FieldDescriptor,
    text: &str,
    config: &ParserConfig,
) -> Result<(), ParseError> {
    let invalid = |value: &str| ParseError::invalid_value(field.wire_name, value, field.kind.describe());

    match field.kind {
        ValueKind::Integer => {
            let value = parse_long(text).ok_or_else(|| invalid(text))?;
            check_min(field, text, value as f64)?;
        }
        ValueKind::Double => {
            let value = parse_double(text).ok_or_else(|| invalid(text))?;
            check_min(field, text, value)?;
        }
        ValueKind::Boolean => {
            parse_boolean(text).ok_or_else(|| invalid(text))?;
        }
        ValueKind::Uuid => {
            uuid::Uuid::parse_str(text).map_err(|_| invalid(text))?;
        }
        ValueKind::String => {
            if let Some(max) = field.max_length
                && text.chars().count() > max
            {
                return Err(ParseError::Constraint {
                    element: field.wire_name.to_string(),
                    value: text.to_string(),
                    constraint: format!("maxLength {max}"),
                });
            }
        }
        ValueKind::IntegerList | ValueKind::DoubleList | ValueKind::BooleanList => {
            let count = text.split_whitespace().count();
            if count > config.inline_limit() {
                return Err(ParseError::LimitExceeded {
                    element: field.wire_name.to_string(),
                    limit: config.inline_limit(),
                    actual: count,
                });
            }
            for token in text.split_whitespace() {
                let valid = match field.kind {
                    ValueKind::IntegerList => parse_long(token).is_some(),
                    ValueKind::DoubleList => parse_double(token).is_some(),
                    _ => parse_boolean(token).is_some(),
                };
                if !valid {
                    return Err(invalid(token));
                }
            }
        }
        ValueKind::Complex(_) => {}
    }

    if let Some(pattern) = field.pattern
        && registry.pattern(pattern).is_some_and(|regex| !regex.is_match(text))
    {
        return Err(ParseError::Constraint {
            element: field.wire_name.to_string(),
            value: text.to_string(),
            constraint: format!("pattern {pattern}"),
        });
    }
    Ok(())
}

fn check_min(field: &FieldDescriptor, text: &str, value: f64) -> Result<(), ParseError> {
    match field.min_inclusive {
        Some(min) if value < min as f64 => Err(ParseError::Constraint {
            element: field.wire_name.to_string(),
            value: text.to_string(),
            constraint: format!("minInclusive {min}"),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resqml_v2;
    use crate::node::read_xml;

    const HEADER: &str = r#"xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2" xmlns:eml="http://www.energistics.org/energyml/data/commonv2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;

    fn validate(body: &str, declared: &str, config: &ParserConfig) -> Result<(), ParseError> {
        let xml = body.replacen("HEADER", HEADER, 1);
        let node = read_xml(&xml).expect("well-formed");
        validate_node(resqml_v2(), &node, declared, config)
    }

    #[test]
    fn test_valid_lattice() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerLatticeArray">
            <resqml2:StartValue>10</resqml2:StartValue>
            <resqml2:Offset><resqml2:Value>2</resqml2:Value><resqml2:Count>4</resqml2:Count></resqml2:Offset>
        </resqml2:Values>"#;
        validate(body, "AbstractIntegerArray", &ParserConfig::default()).expect("valid");
    }

    #[test]
    fn test_missing_offset_is_occurs_violation() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerLatticeArray">
            <resqml2:StartValue>10</resqml2:StartValue>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractIntegerArray", &ParserConfig::default())
            .expect_err("offset required");
        assert!(matches!(err, ParseError::Occurs { actual: 0, min: 1, .. }));
    }

    #[test]
    fn test_count_min_inclusive() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerConstantArray">
            <resqml2:Value>1</resqml2:Value><resqml2:Count>0</resqml2:Count>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractIntegerArray", &ParserConfig::default())
            .expect_err("count must be positive");
        assert!(matches!(err, ParseError::Constraint { ref constraint, .. } if constraint == "minInclusive 1"));
    }

    #[test]
    fn test_lexical_form_checked() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:DoubleXmlArray">
            <resqml2:Values>1.5 abc</resqml2:Values>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractDoubleArray", &ParserConfig::default())
            .expect_err("abc is not a double");
        assert!(matches!(err, ParseError::InvalidValue { ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_abstract_type_without_xsi_type() {
        let body = r#"<resqml2:Values HEADER/>"#;
        let err = validate(body, "AbstractDoubleArray", &ParserConfig::default())
            .expect_err("abstract");
        assert!(matches!(err, ParseError::AbstractType { .. }));
    }

    #[test]
    fn test_wrong_family_rejected() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:DoubleXmlArray">
            <resqml2:Values>1</resqml2:Values>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractIntegerArray", &ParserConfig::default())
            .expect_err("double is not an integer array");
        assert!(matches!(err, ParseError::InvalidSubstitution { .. }));
    }

    #[test]
    fn test_unknown_element_strict_and_lenient() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:BooleanConstantArray">
            <resqml2:Value>true</resqml2:Value><resqml2:Count>2</resqml2:Count>
            <resqml2:Extra>x</resqml2:Extra>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractBooleanArray", &ParserConfig::default())
            .expect_err("strict");
        assert!(matches!(err, ParseError::UnknownElement { ref element, .. } if element == "Extra"));

        let lenient = ParserConfig::new().allow_unknown_elements(true);
        validate(body, "AbstractBooleanArray", &lenient).expect("lenient");
    }

    #[test]
    fn test_namespace_checked_in_strict_mode() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:BooleanConstantArray">
            <eml:Value>true</eml:Value><resqml2:Count>2</resqml2:Count>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractBooleanArray", &ParserConfig::default())
            .expect_err("wrong namespace");
        assert!(matches!(err, ParseError::NamespaceMismatch { .. }));

        let relaxed = ParserConfig::new().strict_namespaces(false);
        validate(body, "AbstractBooleanArray", &relaxed).expect("relaxed");
    }

    #[test]
    fn test_uuid_checked() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:DoubleHdf5Array">
            <resqml2:Values>
                <eml:PathInHdfFile>/RESQML/data</eml:PathInHdfFile>
                <eml:HdfProxy>
                    <eml:ContentType>application/x-eml+xml;version=2.0;type=obj_EpcExternalPartReference</eml:ContentType>
                    <eml:UUID>not-a-uuid</eml:UUID>
                </eml:HdfProxy>
            </resqml2:Values>
        </resqml2:Values>"#;
        let err = validate(body, "AbstractDoubleArray", &ParserConfig::default())
            .expect_err("bad uuid");
        assert!(matches!(err, ParseError::InvalidValue { ref element, .. } if element == "UUID"));
    }

    #[test]
    fn test_inline_limit() {
        let body = r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerXmlArray">
            <resqml2:Values>1 2 3 4</resqml2:Values>
        </resqml2:Values>"#;
        let config = ParserConfig::new().max_inline_values(3);
        let err = validate(body, "AbstractIntegerArray", &config).expect_err("too many");
        assert!(matches!(err, ParseError::LimitExceeded { limit: 3, actual: 4, .. }));
    }
}
