//! Error types for RESQML array operations.

use thiserror::Error;

/// Core error type for array codec operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Jagged array offsets violate the encoding invariants.
    #[error("malformed jagged array: {0}")]
    MalformedJaggedArray(JaggedDefect),

    /// Lattice access outside the declared dimension counts.
    #[error("index {index} out of range for dimension {dimension} of size {count}")]
    IndexOutOfRange {
        /// Dimension (axis) being indexed, slowest first.
        dimension: usize,
        /// Requested index along that dimension.
        index: usize,
        /// Number of elements along that dimension.
        count: usize,
    },

    /// Index tuple arity does not match the lattice dimensionality.
    #[error("dimension mismatch: lattice has {expected} dimensions, index has {actual}")]
    DimensionMismatch {
        /// Number of lattice dimensions.
        expected: usize,
        /// Number of index components supplied.
        actual: usize,
    },

    /// Integer lattice arithmetic left the representable range.
    #[error("arithmetic overflow materializing dimension {dimension}")]
    ArithmeticOverflow {
        /// Dimension whose offset overflowed.
        dimension: usize,
    },

    /// The total element count does not fit in `usize`.
    #[error("element count overflows usize")]
    CountOverflow,

    /// Memory for a materialized array could not be reserved.
    #[error("cannot allocate {elements} elements")]
    AllocationFailed {
        /// Requested element count.
        elements: usize,
    },

    /// A regular lattice axis with fewer than two points has no spacing.
    #[error("lattice axis {dimension} has {count} points, at least 2 required")]
    DegenerateAxis {
        /// Offending axis, slowest first.
        dimension: usize,
        /// Requested point count.
        count: usize,
    },

    /// External dataset payload is unavailable.
    #[error("dataset '{path}' not found in '{proxy}'")]
    DatasetNotFound {
        /// Path of the dataset inside the external file.
        path: String,
        /// Key of the proxy object that names the external file.
        proxy: String,
    },

    /// Two arrays that must agree in length do not.
    #[error("length mismatch in {context}: expected {expected}, actual {actual}")]
    LengthMismatch {
        /// What was being combined.
        context: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// An array holds a different value kind than the operation requires.
    #[error("value kind mismatch: expected {expected} values, found {actual}")]
    ValueKindMismatch {
        /// Required kind.
        expected: &'static str,
        /// Kind actually present.
        actual: &'static str,
    },
}

/// The specific jagged-array invariant that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JaggedDefect {
    /// No offsets at all; even an empty jagged array has one offset.
    #[error("offsets array is empty")]
    EmptyOffsets,

    /// The first offset is not zero.
    #[error("first offset is {first}, expected 0")]
    NonZeroStart {
        /// Value found in `offsets[0]`.
        first: usize,
    },

    /// Offsets decrease between two consecutive positions.
    #[error("offset {current} at position {position} is below previous offset {previous}")]
    Decreasing {
        /// Position of the offending offset.
        position: usize,
        /// Offset at `position - 1`.
        previous: usize,
        /// Offset at `position`.
        current: usize,
    },

    /// The last offset does not equal the number of values.
    #[error("last offset is {last} but there are {values} values")]
    LengthMismatch {
        /// Value found in the final offset.
        last: usize,
        /// Number of flat values.
        values: usize,
    },

    /// A cumulative length on the wire is negative.
    #[error("negative cumulative length {value} at position {position}")]
    Negative {
        /// Position of the offending entry.
        position: usize,
        /// Offending value.
        value: i64,
    },
}

impl From<JaggedDefect> for Error {
    fn from(defect: JaggedDefect) -> Self {
        Self::MalformedJaggedArray(defect)
    }
}

/// Result type alias for RESQML core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_index_out_of_range() {
        let err = Error::IndexOutOfRange {
            dimension: 2,
            index: 10,
            count: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("index 10"));
        assert!(msg.contains("dimension 2"));
        assert!(msg.contains("size 4"));
    }

    #[test]
    fn test_error_display_malformed_jagged() {
        let err: Error = JaggedDefect::NonZeroStart { first: 3 }.into();
        assert_eq!(
            err.to_string(),
            "malformed jagged array: first offset is 3, expected 0"
        );
    }

    #[test]
    fn test_error_display_dataset_not_found() {
        let err = Error::DatasetNotFound {
            path: "/RESQML/points".to_string(),
            proxy: "hdf".to_string(),
        };
        assert!(err.to_string().contains("/RESQML/points"));
    }
}
