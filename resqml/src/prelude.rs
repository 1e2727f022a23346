//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use resqml::prelude::*;
//! ```

// Core codecs
pub use resqml_core::error::{Error as CoreError, Result as CoreResult};
pub use resqml_core::{
    DoubleLatticeArray, IntegerLatticeArray, JaggedArray, LatticeArray, LatticeAxis, Point3d,
    PointLattice, Spacing,
};

// Array variants
pub use resqml_core::{
    BooleanArray, ConstantArray, DoubleArray, IntegerArray, IntegerExternalArray,
    IntegerRangeArray, Point3dArray, Point3dLatticeArray, Point3dOffset, ResqmlJaggedArray,
    StringArray, ValueArray, ZValueArray,
};

// References and datasets
pub use resqml_core::{
    ContentType, DataObjectReference, DatasetSource, ExternalDataset, MemoryDatasets, ObjectKey,
    ObjectRegistry, ReferenceNotFound, ReferenceResolver,
};

// Enumerations
pub use resqml_core::{UnknownEnumerant, WireEnum};
pub use resqml_schema::enums::*;

// Schema handling
pub use resqml_schema::{
    ArrayParser, ParseError, ParserConfig, SchemaError, SchemaRegistry, WriteError, WriterConfig,
    XmlWriter, parse_boolean_array, parse_double_array, parse_integer_array, parse_jagged_array,
    parse_point3d_array, parse_reference, parse_string_array, parse_value_array, resqml_v2,
};

// Code generation
pub use resqml_codegen::{CodegenError, generate_from_file, generate_from_xsd};
