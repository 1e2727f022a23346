//! Schema descriptors for RESQML complex types.
//!
//! A [`TypeDescriptor`] lists the wire fields of one XML complex type together
//! with their cardinality and facets. The [`SchemaRegistry`] indexes
//! descriptors by type name and answers substitution queries along the
//! `xsi:type` extension chain.

use crate::error::SchemaError;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Where a field appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Child element.
    Element,
    /// Attribute of the owning element.
    Attribute,
}

/// Upper occurrence bound of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    /// At most this many occurrences.
    Bounded(u32),
    /// Any number of occurrences.
    Unbounded,
}

impl MaxOccurs {
    /// Returns true if `count` does not exceed the bound.
    #[must_use]
    pub const fn allows(self, count: usize) -> bool {
        match self {
            Self::Bounded(max) => count <= max as usize,
            Self::Unbounded => true,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Lexical kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `xs:long` and its restrictions.
    Integer,
    /// `xs:double`.
    Double,
    /// `xs:boolean`.
    Boolean,
    /// `xs:string` and its restrictions.
    String,
    /// `eml:UuidString`.
    Uuid,
    /// Whitespace-separated list of `xs:long`.
    IntegerList,
    /// Whitespace-separated list of `xs:double`.
    DoubleList,
    /// Whitespace-separated list of `xs:boolean`.
    BooleanList,
    /// Complex content of the named type.
    Complex(&'static str),
}

impl ValueKind {
    /// Returns true for list kinds.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::IntegerList | Self::DoubleList | Self::BooleanList)
    }

    /// Returns the schema name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Integer => "an integer",
            Self::Double => "a double",
            Self::Boolean => "a boolean",
            Self::String => "a string",
            Self::Uuid => "a UUID",
            Self::IntegerList => "a list of integers",
            Self::DoubleList => "a list of doubles",
            Self::BooleanList => "a list of booleans",
            Self::Complex(name) => name,
        }
    }
}

/// Descriptor of one wire field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Field name in the object model.
    pub name: &'static str,
    /// Local name on the wire.
    pub wire_name: &'static str,
    /// Element or attribute.
    pub placement: Placement,
    /// Namespace of the element (ignored for attributes).
    pub namespace: &'static str,
    /// Value kind.
    pub kind: ValueKind,
    /// Minimum occurrences.
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: MaxOccurs,
    /// `minInclusive` facet for numeric kinds.
    pub min_inclusive: Option<i64>,
    /// `pattern` facet, anchored at both ends.
    pub pattern: Option<&'static str>,
    /// `maxLength` facet for strings.
    pub max_length: Option<usize>,
}

impl FieldDescriptor {
    /// Creates a required, single-occurrence element field.
    #[must_use]
    pub const fn element(
        name: &'static str,
        wire_name: &'static str,
        namespace: &'static str,
        kind: ValueKind,
    ) -> Self {
        Self {
            name,
            wire_name,
            placement: Placement::Element,
            namespace,
            kind,
            min_occurs: 1,
            max_occurs: MaxOccurs::Bounded(1),
            min_inclusive: None,
            pattern: None,
            max_length: None,
        }
    }

    /// Creates a required attribute field.
    #[must_use]
    pub const fn attribute(name: &'static str, wire_name: &'static str, kind: ValueKind) -> Self {
        Self {
            placement: Placement::Attribute,
            namespace: "",
            ..Self::element(name, wire_name, "", kind)
        }
    }

    /// Makes the field optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self {
            min_occurs: 0,
            ..self
        }
    }

    /// Allows any number of occurrences.
    #[must_use]
    pub const fn unbounded(self) -> Self {
        Self {
            max_occurs: MaxOccurs::Unbounded,
            ..self
        }
    }

    /// Sets the `minInclusive` facet.
    #[must_use]
    pub const fn min_inclusive(self, min: i64) -> Self {
        Self {
            min_inclusive: Some(min),
            ..self
        }
    }

    /// Sets the `pattern` facet.
    #[must_use]
    pub const fn pattern(self, pattern: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    /// Sets the `maxLength` facet.
    #[must_use]
    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Returns true if the field is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.min_occurs > 0
    }
}

/// Descriptor of one complex type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: &'static str,
    /// Namespace the type is defined in.
    pub namespace: &'static str,
    /// Base type, for `xs:extension`.
    pub base: Option<&'static str>,
    /// Abstract types need a concrete `xsi:type` on the wire.
    pub is_abstract: bool,
    /// Fields declared by this type, excluding inherited ones.
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    /// Finds a field declared directly on this type by wire name.
    #[must_use]
    pub fn field(&self, wire_name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// Registry of type descriptors.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    types: Vec<&'static TypeDescriptor>,
    type_map: HashMap<&'static str, usize>,
    patterns: HashMap<&'static str, Regex>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a descriptor table.
    ///
    /// # Errors
    /// Returns an error on duplicate names, unknown bases or bad patterns.
    pub fn from_table(table: &'static [TypeDescriptor]) -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for descriptor in table {
            registry.add_type(descriptor)?;
        }
        registry.check_bases()?;
        Ok(registry)
    }

    /// Adds a type descriptor.
    ///
    /// # Errors
    /// Returns an error if the name is taken or a field pattern does not compile.
    pub fn add_type(&mut self, descriptor: &'static TypeDescriptor) -> Result<(), SchemaError> {
        if self.type_map.contains_key(descriptor.name) {
            return Err(SchemaError::DuplicateType {
                name: descriptor.name.to_string(),
            });
        }
        for field in descriptor.fields {
            if let Some(pattern) = field.pattern
                && !self.patterns.contains_key(pattern)
            {
                let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                    SchemaError::InvalidPattern {
                        field: field.wire_name.to_string(),
                        pattern: pattern.to_string(),
                        source,
                    }
                })?;
                self.patterns.insert(pattern, regex);
            }
        }
        self.type_map.insert(descriptor.name, self.types.len());
        self.types.push(descriptor);
        Ok(())
    }

    fn check_bases(&self) -> Result<(), SchemaError> {
        for descriptor in &self.types {
            if let Some(base) = descriptor.base
                && !self.has_type(base)
            {
                return Err(SchemaError::UnknownBase {
                    type_name: descriptor.name.to_string(),
                    base: base.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Gets a type descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.type_map.get(name).map(|&idx| self.types[idx])
    }

    /// Checks if a type exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &'static TypeDescriptor> + '_ {
        self.types.iter().copied()
    }

    /// Returns true if `derived` is `base` or extends it, directly or not.
    #[must_use]
    pub fn is_substitutable(&self, derived: &str, base: &str) -> bool {
        let mut current = self.get(derived);
        // Bounded by the registry size so a cyclic table cannot loop forever.
        for _ in 0..=self.types.len() {
            match current {
                Some(descriptor) if descriptor.name == base => return true,
                Some(descriptor) => current = descriptor.base.and_then(|b| self.get(b)),
                None => return false,
            }
        }
        false
    }

    /// Returns all concrete types that may appear where `base` is declared.
    #[must_use]
    pub fn concrete_types_of(&self, base: &str) -> Vec<&'static TypeDescriptor> {
        self.types
            .iter()
            .copied()
            .filter(|t| !t.is_abstract && self.is_substitutable(t.name, base))
            .collect()
    }

    /// Returns the fields of `name`, inherited ones first.
    ///
    /// # Errors
    /// Returns an error if the type or one of its bases is not registered.
    pub fn fields_of(&self, name: &str) -> Result<Vec<&'static FieldDescriptor>, SchemaError> {
        let mut chain = Vec::new();
        let mut current = Some(name);
        while let Some(type_name) = current {
            let descriptor = self.get(type_name).ok_or_else(|| SchemaError::TypeNotFound {
                name: type_name.to_string(),
            })?;
            if chain.len() > self.types.len() {
                break;
            }
            chain.push(descriptor);
            current = descriptor.base;
        }
        Ok(chain
            .iter()
            .rev()
            .flat_map(|descriptor| descriptor.fields.iter())
            .collect())
    }

    /// Returns the compiled regex for a registered pattern.
    #[must_use]
    pub fn pattern(&self, pattern: &str) -> Option<&Regex> {
        self.patterns.get(pattern)
    }
}
