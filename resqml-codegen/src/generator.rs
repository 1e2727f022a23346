//! Top-level source file generation.

use crate::error::CodegenError;
use crate::rust::EnumGenerator;
use resqml_schema::EnumerationDef;

/// Generates a complete Rust module from XSD enumerations.
pub struct Generator<'a> {
    defs: &'a [EnumerationDef],
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(defs: &'a [EnumerationDef]) -> Self {
        Self { defs }
    }

    /// Generates the module source.
    ///
    /// # Errors
    /// Returns `CodegenError` if an enumeration cannot be expressed in Rust.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        output.push_str("// Generated by resqml-codegen. Do not edit.\n\n");
        output.push_str("use resqml_derive::WireEnum;\n\n");
        output.push_str(&EnumGenerator::new(self.defs).generate()?);

        tracing::debug!(enums = self.defs.len(), "generated enumeration source");
        Ok(output)
    }
}
