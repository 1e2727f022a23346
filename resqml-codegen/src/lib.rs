//! # RESQML Codegen
//!
//! Code generation from RESQML XSD schemas.
//!
//! This crate provides:
//! - Rust enumeration generation from `xs:simpleType` restrictions
//! - Verbatim wire tokens through `#[wire(rename = ...)]`
//! - File-based generation through [`generate_from_file`]

pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::Generator;

/// Generates Rust enumerations from an XSD document string.
///
/// # Arguments
/// * `xsd` - XSD schema content
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xsd(xsd: &str) -> Result<String, CodegenError> {
    let defs = resqml_schema::parse_xsd_enumerations(xsd)?;
    Generator::new(&defs).generate()
}

/// Generates Rust enumerations from an XSD file.
///
/// # Arguments
/// * `path` - Path to the XSD file
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xsd = std::fs::read_to_string(path)?;
    generate_from_xsd(&xsd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const XSD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:simpleType name="ThrowKind">
    <xs:restriction base="xs:string">
      <xs:enumeration value="reverse"/>
      <xs:enumeration value="normal"/>
      <xs:enumeration value="strike-slip"/>
    </xs:restriction>
  </xs:simpleType>
  <xs:simpleType name="SurfaceRole">
    <xs:restriction base="xs:string">
      <xs:enumeration value="map"/>
      <xs:enumeration value="pick"/>
    </xs:restriction>
  </xs:simpleType>
</xs:schema>"#;

    #[test]
    fn test_generate_from_xsd() {
        let code = generate_from_xsd(XSD).expect("generates");
        assert!(code.starts_with("// Generated by resqml-codegen"));
        assert!(code.contains("use resqml_derive::WireEnum;"));
        assert!(code.contains("pub enum ThrowKind {"));
        assert!(code.contains("    StrikeSlip,"));
        assert!(code.contains("pub enum SurfaceRole {"));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(XSD.as_bytes()).expect("write xsd");
        let code = generate_from_file(file.path()).expect("generates");
        assert_eq!(code, generate_from_xsd(XSD).expect("generates"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = generate_from_file(&dir.path().join("missing.xsd")).expect_err("no file");
        assert!(matches!(err, CodegenError::Io(_)));
    }

    #[test]
    fn test_malformed_xsd() {
        let err = generate_from_xsd("<xs:schema").expect_err("malformed");
        assert!(matches!(err, CodegenError::Parse(_)));
    }
}
