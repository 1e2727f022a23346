//! Parser and writer configuration.

/// Configuration for [`ArrayParser`](crate::parser::ArrayParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    strict_namespaces: bool,
    allow_unknown_elements: bool,
    validate: bool,
    max_inline_values: usize,
}

impl ParserConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict_namespaces: true,
            allow_unknown_elements: false,
            validate: true,
            max_inline_values: 16 * 1024 * 1024,
        }
    }

    /// Sets whether element namespaces must match the schema exactly.
    #[must_use]
    pub fn strict_namespaces(mut self, strict: bool) -> Self {
        self.strict_namespaces = strict;
        self
    }

    /// Sets whether unknown child elements are skipped instead of rejected.
    #[must_use]
    pub fn allow_unknown_elements(mut self, allow: bool) -> Self {
        self.allow_unknown_elements = allow;
        self
    }

    /// Sets whether documents are validated against the descriptor table.
    #[must_use]
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Sets the maximum number of values accepted in one inline array.
    #[must_use]
    pub fn max_inline_values(mut self, max: usize) -> Self {
        self.max_inline_values = max;
        self
    }

    /// Returns true if namespaces are checked.
    #[must_use]
    pub fn is_strict_namespaces(&self) -> bool {
        self.strict_namespaces
    }

    /// Returns true if unknown elements are tolerated.
    #[must_use]
    pub fn allows_unknown_elements(&self) -> bool {
        self.allow_unknown_elements
    }

    /// Returns true if validation runs before mapping.
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.validate
    }

    /// Returns the inline array limit.
    #[must_use]
    pub fn inline_limit(&self) -> usize {
        self.max_inline_values
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`XmlWriter`](crate::writer::XmlWriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    resqml_prefix: String,
    common_prefix: String,
    indent: Option<usize>,
    declaration: bool,
}

impl WriterConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resqml_prefix: "resqml2".to_string(),
            common_prefix: "eml".to_string(),
            indent: None,
            declaration: false,
        }
    }

    /// Sets the prefix bound to the RESQML namespace.
    #[must_use]
    pub fn resqml_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resqml_prefix = prefix.into();
        self
    }

    /// Sets the prefix bound to the common namespace.
    #[must_use]
    pub fn common_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.common_prefix = prefix.into();
        self
    }

    /// Enables pretty printing with the given indent width.
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    /// Sets whether an XML declaration is emitted.
    #[must_use]
    pub fn declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Returns the RESQML prefix.
    #[must_use]
    pub fn resqml_prefix_str(&self) -> &str {
        &self.resqml_prefix
    }

    /// Returns the common prefix.
    #[must_use]
    pub fn common_prefix_str(&self) -> &str {
        &self.common_prefix
    }

    /// Returns the indent width, if pretty printing.
    #[must_use]
    pub fn indent_width(&self) -> Option<usize> {
        self.indent
    }

    /// Returns true if an XML declaration is emitted.
    #[must_use]
    pub fn has_declaration(&self) -> bool {
        self.declaration
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}
