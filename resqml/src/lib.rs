//! # RESQML
//!
//! Array codecs, object references, enumeration tables and XML schema
//! handling for the RESQML reservoir data model.
//!
//! ## Features
//!
//! - **Jagged arrays** - Offsets plus flat values for variable-length lists
//! - **Lattice arrays** - Implicit regular and irregular N-dimensional arrays
//! - **Wire forms** - Parse and write the RESQML 2 array elements with `xsi:type` dispatch
//! - **Schema descriptors** - Cardinality, lexical and namespace validation
//! - **Enumerations** - Closed tables with verbatim wire tokens
//! - **Code generation** - Enumeration source from XSD documents
//!
//! ## Quick Start
//!
//! ```
//! use resqml::prelude::*;
//!
//! let xml = r#"<resqml2:Values
//!     xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2"
//!     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
//!     xsi:type="resqml2:IntegerLatticeArray">
//!   <resqml2:StartValue>10</resqml2:StartValue>
//!   <resqml2:Offset><resqml2:Value>2</resqml2:Value><resqml2:Count>3</resqml2:Count></resqml2:Offset>
//! </resqml2:Values>"#;
//!
//! let array = parse_integer_array(xml)?;
//! let values = array.materialize(&MemoryDatasets::new())?;
//! assert_eq!(values, [10, 12, 14, 16]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Jagged and lattice codecs, array variants, references, datasets
//! - [`schema`] - Descriptors, enumerations, XML parsing, validation and writing
//! - [`codegen`] - Rust enumeration generation from XSD schemas

pub mod prelude;

/// Array codecs, references and external datasets.
pub mod core {
    pub use resqml_core::*;
}

/// Schema descriptors, enumerations and the XML parser/writer.
pub mod schema {
    pub use resqml_schema::*;
}

/// Code generation from XSD schemas.
pub mod codegen {
    pub use resqml_codegen::*;
}

// Re-export commonly used items at the crate root
pub use resqml_core::{
    DataObjectReference, ExternalDataset, IntegerArray, JaggedArray, LatticeArray, Point3d,
    ResqmlJaggedArray, ValueArray, WireEnum,
};
pub use resqml_schema::{ArrayParser, ParserConfig, WriterConfig, XmlWriter};
