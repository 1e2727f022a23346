//! # RESQML Core
//!
//! Core array codecs and reference types for the RESQML data model.
//!
//! This crate provides:
//! - Jagged arrays (offsets + flat values) for variable-length per-element lists
//! - Lattice arrays for implicit, regularly or irregularly spaced values
//! - Constant, range and inline array variants mirroring the schema's abstract arrays
//! - External dataset handles and the [`DatasetSource`] capability
//! - Data object references and the [`ReferenceResolver`] capability
//! - The [`WireEnum`] trait shared by every enumeration table

pub mod arrays;
pub mod enumeration;
pub mod error;
pub mod external;
pub mod jagged;
pub mod lattice;
pub mod point;
pub mod reference;

pub use arrays::{
    BooleanArray, ConstantArray, DoubleArray, IntegerArray, IntegerExternalArray,
    IntegerRangeArray, Point3dArray, Point3dLatticeArray, Point3dOffset, ResqmlJaggedArray,
    StringArray, ValueArray, ZValueArray,
};
pub use enumeration::{UnknownEnumerant, WireEnum};
pub use error::{Error, JaggedDefect, Result};
pub use external::{DatasetSource, ExternalDataset, MemoryDatasets};
pub use jagged::JaggedArray;
pub use lattice::{
    DoubleLatticeArray, IntegerLatticeArray, LatticeArray, LatticeAxis, LatticeScalar,
    PointLattice, Spacing,
};
pub use point::Point3d;
pub use reference::{
    ContentType, DataObjectReference, NotFoundReason, ObjectKey, ObjectRegistry,
    ReferenceNotFound, ReferenceResolver,
};
