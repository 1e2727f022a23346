//! External dataset handles.
//!
//! Bulk numeric payloads live outside the XML document (in RESQML 2.0, an HDF5
//! file named by an `obj_EpcExternalPartReference` proxy). The in-memory model
//! carries only the handle; reading the payload is the job of a
//! [`DatasetSource`] supplied by the caller.

use crate::error::{Error, Result};
use crate::point::Point3d;
use crate::reference::{DataObjectReference, ObjectKey};
use std::collections::HashMap;

/// Pointer to a dataset stored outside the structural document.
///
/// Wire type `Hdf5Dataset`: `PathInHdfFile` plus `HdfProxy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalDataset {
    /// Dataset path inside the external file.
    pub path_in_file: String,
    /// Reference to the proxy object describing the external file.
    pub proxy: DataObjectReference,
}

impl ExternalDataset {
    /// Creates a dataset handle.
    #[must_use]
    pub fn new(path_in_file: impl Into<String>, proxy: DataObjectReference) -> Self {
        Self {
            path_in_file: path_in_file.into(),
            proxy,
        }
    }

    /// Builds the error reported when this dataset cannot be read.
    #[must_use]
    pub fn not_found(&self) -> Error {
        Error::DatasetNotFound {
            path: self.path_in_file.clone(),
            proxy: self.proxy.key.to_string(),
        }
    }
}

/// Capability to read external payloads, supplied by the consuming application.
pub trait DatasetSource {
    /// Reads an integer dataset.
    ///
    /// # Errors
    /// Returns [`Error::DatasetNotFound`] or a kind mismatch.
    fn read_integers(&self, dataset: &ExternalDataset) -> Result<Vec<i64>>;

    /// Reads a floating-point dataset.
    ///
    /// # Errors
    /// Returns [`Error::DatasetNotFound`] or a kind mismatch.
    fn read_doubles(&self, dataset: &ExternalDataset) -> Result<Vec<f64>>;

    /// Reads a boolean dataset.
    ///
    /// # Errors
    /// Returns [`Error::DatasetNotFound`] or a kind mismatch.
    fn read_booleans(&self, dataset: &ExternalDataset) -> Result<Vec<bool>>;

    /// Reads a string dataset.
    ///
    /// # Errors
    /// Returns [`Error::DatasetNotFound`] or a kind mismatch.
    fn read_strings(&self, dataset: &ExternalDataset) -> Result<Vec<String>>;

    /// Reads a point dataset (three coordinates per point).
    ///
    /// # Errors
    /// Returns [`Error::DatasetNotFound`] or a kind mismatch.
    fn read_points(&self, dataset: &ExternalDataset) -> Result<Vec<Point3d>>;
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Integers(Vec<i64>),
    Doubles(Vec<f64>),
    Booleans(Vec<bool>),
    Strings(Vec<String>),
    Points(Vec<Point3d>),
}

impl Payload {
    fn kind(&self) -> &'static str {
        match self {
            Self::Integers(_) => "integer",
            Self::Doubles(_) => "double",
            Self::Booleans(_) => "boolean",
            Self::Strings(_) => "string",
            Self::Points(_) => "point",
        }
    }
}

/// In-memory [`DatasetSource`] keyed by proxy identity and dataset path.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatasets {
    payloads: HashMap<(ObjectKey, String), Payload>,
}

macro_rules! typed_access {
    ($insert:ident, $read:ident, $variant:ident, $ty:ty, $kind:literal) => {
        /// Stores a payload for the dataset, replacing any previous one.
        pub fn $insert(&mut self, dataset: &ExternalDataset, values: Vec<$ty>) {
            self.payloads
                .insert(Self::key(dataset), Payload::$variant(values));
        }

        fn $read(&self, dataset: &ExternalDataset) -> Result<Vec<$ty>> {
            match self.payloads.get(&Self::key(dataset)) {
                Some(Payload::$variant(values)) => Ok(values.clone()),
                Some(other) => Err(Error::ValueKindMismatch {
                    expected: $kind,
                    actual: other.kind(),
                }),
                None => Err(dataset.not_found()),
            }
        }
    };
}

impl MemoryDatasets {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(dataset: &ExternalDataset) -> (ObjectKey, String) {
        (dataset.proxy.key.clone(), dataset.path_in_file.clone())
    }

    /// Returns the number of stored payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    typed_access!(insert_integers, get_integers, Integers, i64, "integer");
    typed_access!(insert_doubles, get_doubles, Doubles, f64, "double");
    typed_access!(insert_booleans, get_booleans, Booleans, bool, "boolean");
    typed_access!(insert_strings, get_strings, Strings, String, "string");
    typed_access!(insert_points, get_points, Points, Point3d, "point");
}

impl DatasetSource for MemoryDatasets {
    fn read_integers(&self, dataset: &ExternalDataset) -> Result<Vec<i64>> {
        self.get_integers(dataset)
    }

    fn read_doubles(&self, dataset: &ExternalDataset) -> Result<Vec<f64>> {
        self.get_doubles(dataset)
    }

    fn read_booleans(&self, dataset: &ExternalDataset) -> Result<Vec<bool>> {
        self.get_booleans(dataset)
    }

    fn read_strings(&self, dataset: &ExternalDataset) -> Result<Vec<String>> {
        self.get_strings(dataset)
    }

    fn read_points(&self, dataset: &ExternalDataset) -> Result<Vec<Point3d>> {
        self.get_points(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ContentType;

    fn dataset(path: &str) -> ExternalDataset {
        let proxy = DataObjectReference::new(
            ContentType::eml("obj_EpcExternalPartReference"),
            ObjectKey::parse("2f1b4c8e-1111-4a2b-8c3d-4e5f6a7b8c9d"),
        );
        ExternalDataset::new(path, proxy)
    }

    #[test]
    fn test_memory_round_trip() {
        let mut source = MemoryDatasets::new();
        let ds = dataset("/RESQML/grid/zvalues");
        source.insert_doubles(&ds, vec![1.0, 2.5]);
        assert_eq!(source.read_doubles(&ds), Ok(vec![1.0, 2.5]));
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_memory_not_found() {
        let source = MemoryDatasets::new();
        let err = source.read_integers(&dataset("/missing")).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { ref path, .. } if path == "/missing"));
    }

    #[test]
    fn test_memory_kind_mismatch() {
        let mut source = MemoryDatasets::new();
        let ds = dataset("/RESQML/flags");
        source.insert_booleans(&ds, vec![true]);
        assert_eq!(
            source.read_strings(&ds),
            Err(Error::ValueKindMismatch {
                expected: "string",
                actual: "boolean"
            })
        );
    }
}
