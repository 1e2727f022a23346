//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// XSD parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] resqml_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// A wire token yields no usable Rust identifier.
    #[error("value '{value}' of '{type_name}' has no Rust identifier")]
    InvalidIdentifier {
        /// Enumeration type name.
        type_name: String,
        /// Offending wire token.
        value: String,
    },

    /// Two wire tokens map to the same Rust identifier.
    #[error("values of '{type_name}' collide on variant '{variant}'")]
    DuplicateVariant {
        /// Enumeration type name.
        type_name: String,
        /// Colliding identifier.
        variant: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodegenError::generation("no enumerations");
        assert_eq!(err.to_string(), "generation error: no enumerations");

        let err = CodegenError::DuplicateVariant {
            type_name: "Phase".to_string(),
            variant: "GasCap".to_string(),
        };
        assert!(err.to_string().contains("GasCap"));
    }

    #[test]
    fn test_from_parse_error() {
        let err: CodegenError = resqml_schema::ParseError::structure("bad").into();
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}
