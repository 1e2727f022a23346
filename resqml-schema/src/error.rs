//! Error types for schema parsing, validation and writing.

use crate::descriptor::MaxOccurs;
use thiserror::Error;

/// Error type for document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed character or entity escape.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// A namespace prefix was used without being declared.
    #[error("undeclared namespace prefix '{prefix}'")]
    UnknownPrefix {
        /// The undeclared prefix.
        prefix: String,
    },

    /// Missing required child element.
    #[error("missing required element '{element}' in '{parent}'")]
    MissingElement {
        /// Element name.
        element: String,
        /// Parent element name.
        parent: String,
    },

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Value does not have the expected lexical form.
    #[error("invalid value '{value}' for '{element}': expected {expected}")]
    InvalidValue {
        /// Element or attribute name.
        element: String,
        /// Invalid value.
        value: String,
        /// Description of the expected form.
        expected: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Unknown type named by `xsi:type`.
    #[error("unknown type '{type_name}' on element '{element}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Element carrying the type.
        element: String,
    },

    /// `xsi:type` names a type that cannot stand in for the declared type.
    #[error("type '{type_name}' cannot substitute for '{expected}' on element '{element}'")]
    InvalidSubstitution {
        /// Type found.
        type_name: String,
        /// Declared type.
        expected: String,
        /// Element carrying the type.
        element: String,
    },

    /// An abstract type was used without a concrete `xsi:type`.
    #[error("element '{element}' declares abstract type '{type_name}' without xsi:type")]
    AbstractType {
        /// Abstract type name.
        type_name: String,
        /// Element name.
        element: String,
    },

    /// Occurrence count outside the declared bounds.
    #[error("element '{element}' in '{parent}' occurs {actual} times, allowed {min}..{max}")]
    Occurs {
        /// Element name.
        element: String,
        /// Parent element name.
        parent: String,
        /// Minimum occurrences.
        min: u32,
        /// Maximum occurrences.
        max: MaxOccurs,
        /// Actual occurrences.
        actual: usize,
    },

    /// Value violates a facet such as `minInclusive` or `pattern`.
    #[error("value '{value}' of '{element}' violates {constraint}")]
    Constraint {
        /// Element or attribute name.
        element: String,
        /// Offending value.
        value: String,
        /// Description of the violated constraint.
        constraint: String,
    },

    /// Element is in a different namespace than the schema declares.
    #[error("element '{element}' is in namespace '{actual}', expected '{expected}'")]
    NamespaceMismatch {
        /// Element name.
        element: String,
        /// Declared namespace.
        expected: String,
        /// Namespace found.
        actual: String,
    },

    /// Inline array longer than the configured limit.
    #[error("element '{element}' holds {actual} inline values, limit is {limit}")]
    LimitExceeded {
        /// Element name.
        element: String,
        /// Configured limit.
        limit: usize,
        /// Actual count.
        actual: usize,
    },

    /// Array codec error.
    #[error("codec error: {0}")]
    Codec(#[from] resqml_core::Error),
}

impl ParseError {
    /// Creates a missing element error.
    pub fn missing_element(element: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            parent: parent.into(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Error type for descriptor tables and enumeration checks.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Type not found.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Duplicate type definition.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },

    /// A type extends a base that is not registered.
    #[error("type '{type_name}' extends unknown base '{base}'")]
    UnknownBase {
        /// Derived type.
        type_name: String,
        /// Missing base.
        base: String,
    },

    /// A field pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}' on field '{field}': {source}")]
    InvalidPattern {
        /// Field wire name.
        field: String,
        /// Pattern text.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// An enumeration table disagrees with its XSD definition.
    #[error("enumeration '{type_name}' differs from schema: missing {missing:?}, extra {extra:?}")]
    EnumerationDrift {
        /// Enumeration type name.
        type_name: String,
        /// Tokens in the XSD but not in the table.
        missing: Vec<String>,
        /// Tokens in the table but not in the XSD.
        extra: Vec<String>,
    },
}

/// Error type for document writing operations.
#[derive(Debug, Error)]
pub enum WriteError {
    /// XML writer error.
    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The value has no wire representation.
    #[error("cannot write {type_name}: {reason}")]
    Unrepresentable {
        /// Wire type being written.
        type_name: String,
        /// Why it cannot be written.
        reason: String,
    },
}

impl WriteError {
    /// Creates an unrepresentable value error.
    pub fn unrepresentable(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unrepresentable {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::missing_element("StartValue", "IntegerLatticeArray");
        assert_eq!(
            err.to_string(),
            "missing required element 'StartValue' in 'IntegerLatticeArray'"
        );
    }

    #[test]
    fn test_occurs_display() {
        let err = ParseError::Occurs {
            element: "Offset".to_string(),
            parent: "IntegerLatticeArray".to_string(),
            min: 1,
            max: MaxOccurs::Unbounded,
            actual: 0,
        };
        assert!(err.to_string().contains("allowed 1..unbounded"));
    }

    #[test]
    fn test_codec_error_conversion() {
        let err: ParseError = resqml_core::Error::DimensionMismatch {
            expected: 2,
            actual: 1,
        }
        .into();
        assert!(matches!(err, ParseError::Codec(_)));
    }

    #[test]
    fn test_reader_failures_map_to_xml_variants() {
        let err = crate::node::read_xml("<a><b></a>").expect_err("mismatched end tag");
        assert!(matches!(err, ParseError::Xml(_)), "{err:?}");
        let err = crate::node::read_xml("<a>&bogus;</a>").expect_err("unknown entity");
        assert!(
            matches!(err, ParseError::InvalidValue { .. } | ParseError::Escape(_)),
            "{err:?}"
        );
    }
}
