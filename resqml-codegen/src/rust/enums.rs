//! Enumeration code generation.

use crate::error::CodegenError;
use resqml_schema::EnumerationDef;
use std::collections::HashSet;

/// Prefix for identifiers that would otherwise start with a digit.
const NUMERIC_PREFIX: &str = "Value";

/// Converts a wire token such as `"unconformable below and above"` or
/// `"strike-slip"` to a Pascal-case identifier.
///
/// Every run of non-alphanumeric characters separates words. The result is
/// empty when the token has no ASCII alphanumeric characters.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert_str(0, NUMERIC_PREFIX);
    }
    if result == "Self" {
        result.push('_');
    }
    result
}

/// Generator for `#[derive(WireEnum)]` enumerations.
pub struct EnumGenerator<'a> {
    defs: &'a [EnumerationDef],
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(defs: &'a [EnumerationDef]) -> Self {
        Self { defs }
    }

    /// Generates all enum definitions.
    ///
    /// # Errors
    /// Returns `CodegenError` if a type or value has no identifier, or two
    /// values of one type map to the same identifier.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        for def in self.defs {
            output.push_str(&self.generate_enum(def)?);
        }
        Ok(output)
    }

    /// Generates one enum definition.
    fn generate_enum(&self, def: &EnumerationDef) -> Result<String, CodegenError> {
        let rust_name = to_pascal_case(&def.name);
        if rust_name.is_empty() {
            return Err(CodegenError::InvalidIdentifier {
                type_name: def.name.clone(),
                value: def.name.clone(),
            });
        }

        let mut output = String::new();
        match &def.documentation {
            Some(doc) => push_doc(&mut output, "", doc),
            None => output.push_str(&format!("/// {} enumeration.\n", rust_name)),
        }
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]\n");
        output.push_str(&format!("#[wire(type_name = {:?})]\n", def.name));
        output.push_str(&format!("pub enum {} {{\n", rust_name));

        let mut seen = HashSet::new();
        for value in &def.values {
            let variant = to_pascal_case(&value.value);
            if variant.is_empty() {
                return Err(CodegenError::InvalidIdentifier {
                    type_name: def.name.clone(),
                    value: value.value.clone(),
                });
            }
            if !seen.insert(variant.clone()) {
                return Err(CodegenError::DuplicateVariant {
                    type_name: def.name.clone(),
                    variant,
                });
            }
            if let Some(doc) = &value.documentation {
                push_doc(&mut output, "    ", doc);
            }
            output.push_str(&format!("    #[wire(rename = {:?})]\n", value.value));
            output.push_str(&format!("    {},\n", variant));
        }

        output.push_str("}\n\n");
        Ok(output)
    }
}

fn push_doc(output: &mut String, indent: &str, doc: &str) {
    for line in doc.lines().map(str::trim) {
        if line.is_empty() {
            output.push_str(&format!("{indent}///\n"));
        } else {
            output.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}
