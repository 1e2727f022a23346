//! EnergyML namespace constants and qualified names.
//!
//! The constants are process-wide, read-only configuration.

use std::fmt;

/// RESQML 2.0 namespace.
pub const RESQML_NS: &str = "http://www.energistics.org/energyml/data/resqmlv2";

/// EnergyML common 2.0 namespace (`DataObjectReference`, `Hdf5Dataset`, ...).
pub const COMMON_NS: &str = "http://www.energistics.org/energyml/data/commonv2";

/// XML Schema instance namespace (`xsi:type`).
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Namespace bound to the reserved `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A namespace-resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI, `None` for unqualified names.
    pub namespace: Option<String>,
    /// Local part.
    pub local: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local: local.into(),
        }
    }

    /// Creates a name in the RESQML namespace.
    #[must_use]
    pub fn resqml(local: impl Into<String>) -> Self {
        Self::new(Some(RESQML_NS), local)
    }

    /// Returns true if the name is in `namespace`.
    #[must_use]
    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Splits `prefix:local` into its parts.
#[must_use]
pub fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qname() {
        assert_eq!(
            split_qname("resqml2:IntegerLatticeArray"),
            (Some("resqml2"), "IntegerLatticeArray")
        );
        assert_eq!(split_qname("Count"), (None, "Count"));
    }

    #[test]
    fn test_qualified_name_display() {
        let name = QualifiedName::resqml("Point3d");
        assert!(name.is_in(RESQML_NS));
        assert_eq!(
            name.to_string(),
            "{http://www.energistics.org/energyml/data/resqmlv2}Point3d"
        );
        assert_eq!(QualifiedName::new(None, "x").to_string(), "x");
    }
}
