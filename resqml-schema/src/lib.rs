//! # RESQML Schema
//!
//! RESQML XML schema descriptors, enumeration tables and array parser/writer.
//!
//! This crate provides:
//! - Namespace constants for the EnergyML RESQML and common schemas
//! - A descriptor table (wire names, cardinality, constraints) for the array family
//! - Enumeration tables with verbatim wire tokens
//! - A namespace-resolving XML node reader built on `quick-xml`
//! - Descriptor-driven validation and typed parsing of array elements
//! - An XML writer producing the same wire forms
//! - Extraction of enumerations from XSD documents

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod enums;
pub mod error;
mod lexical;
pub mod namespace;
pub mod node;
pub mod parser;
pub mod validation;
pub mod writer;
pub mod xsd;

pub use catalog::resqml_v2;
pub use config::{ParserConfig, WriterConfig};
pub use descriptor::{
    FieldDescriptor, MaxOccurs, Placement, SchemaRegistry, TypeDescriptor, ValueKind,
};
pub use enums::{
    BoundaryRelation, CellShape, ContactMode, ContactSide, ContactVerb, Domain,
    GeologicBoundaryKind, IndexableElements, KDirection, LineRole, OrderingCriteria, Phase,
    PillarShape, ResqmlPropertyKind, SurfaceRole, ThrowKind,
};
pub use error::{ParseError, SchemaError, WriteError};
pub use namespace::{COMMON_NS, QualifiedName, RESQML_NS, XSD_NS, XSI_NS};
pub use node::{XmlAttribute, XmlNode, read_xml};
pub use parser::{
    ArrayParser, parse_boolean_array, parse_double_array, parse_external_dataset,
    parse_integer_array, parse_jagged_array, parse_point3d_array, parse_reference,
    parse_string_array, parse_value_array,
};
pub use validation::validate_node;
pub use writer::XmlWriter;
pub use xsd::{EnumerationDef, EnumerationValue, check_enumeration, parse_xsd_enumerations};
