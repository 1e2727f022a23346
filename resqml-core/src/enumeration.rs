//! Closed enumeration tables.
//!
//! Every schema enumeration is a closed set of string tokens. The tokens are
//! kept verbatim, including embedded spaces (`"unconformable below and above"`).
//! Implementations are normally derived with `#[derive(WireEnum)]` from the
//! `resqml-derive` crate.

use thiserror::Error;

/// A schema enumeration with verbatim wire strings.
pub trait WireEnum: Sized + Copy + 'static {
    /// Schema name of the enumeration type.
    const TYPE_NAME: &'static str;

    /// Every enumerant, in schema order.
    const VARIANTS: &'static [Self];

    /// Returns the wire token for this enumerant.
    fn as_wire_str(&self) -> &'static str;

    /// Parses a wire token; matching is exact and case-sensitive.
    fn from_wire_str(value: &str) -> Option<Self>;

    /// Parses a wire token, reporting the enumeration on failure.
    ///
    /// # Errors
    /// Returns [`UnknownEnumerant`] if the token is not part of the enumeration.
    fn parse_wire(value: &str) -> Result<Self, UnknownEnumerant> {
        Self::from_wire_str(value).ok_or_else(|| UnknownEnumerant::new(Self::TYPE_NAME, value))
    }

    /// Iterates over all wire tokens in schema order.
    fn wire_values() -> impl Iterator<Item = &'static str> {
        Self::VARIANTS.iter().map(Self::as_wire_str)
    }
}

/// A token that is not part of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {type_name} value")]
pub struct UnknownEnumerant {
    /// Enumeration type name.
    pub type_name: &'static str,
    /// Offending token.
    pub value: String,
}

impl UnknownEnumerant {
    /// Creates an unknown-enumerant error.
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Domain {
        Depth,
        Time,
    }

    impl WireEnum for Domain {
        const TYPE_NAME: &'static str = "Domain";
        const VARIANTS: &'static [Self] = &[Self::Depth, Self::Time];

        fn as_wire_str(&self) -> &'static str {
            match self {
                Self::Depth => "depth",
                Self::Time => "time",
            }
        }

        fn from_wire_str(value: &str) -> Option<Self> {
            Self::VARIANTS
                .iter()
                .copied()
                .find(|v| v.as_wire_str() == value)
        }
    }

    #[test]
    fn test_parse_wire() {
        assert_eq!(Domain::parse_wire("time"), Ok(Domain::Time));
        let err = Domain::parse_wire("Time").unwrap_err();
        assert_eq!(err.to_string(), "'Time' is not a valid Domain value");
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(Domain::wire_values().collect::<Vec<_>>(), vec!["depth", "time"]);
    }
}
