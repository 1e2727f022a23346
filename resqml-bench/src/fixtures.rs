//! Deterministic inputs shared by the benchmarks.

use resqml_core::{DoubleLatticeArray, IntegerArray, JaggedArray, LatticeAxis, ResqmlJaggedArray};
use resqml_schema::{WriteError, XmlWriter};

/// Builds `count` sub-lists of length `0..=max_len`, cycling through lengths.
#[must_use]
pub fn jagged_sequences(count: usize, max_len: usize) -> Vec<Vec<i64>> {
    (0..count)
        .map(|i| {
            let len = i % (max_len + 1);
            (0..len).map(|j| (i * 31 + j) as i64).collect()
        })
        .collect()
}

/// Builds a regular 2D lattice of `ni` by `nj` depth values.
#[must_use]
pub fn depth_lattice(ni: usize, nj: usize) -> DoubleLatticeArray {
    DoubleLatticeArray::regular(-1500.0, &[(ni, 12.5), (nj, 0.25)])
}

/// Builds a 1D lattice with slowly varying spacing.
#[must_use]
pub fn irregular_lattice(n: usize) -> DoubleLatticeArray {
    let deltas = (0..n.saturating_sub(1)).map(|i| 0.1 + (i % 7) as f64 * 1e-3).collect();
    DoubleLatticeArray::encode(0.0, vec![LatticeAxis::irregular(deltas)])
}

/// Writes an inline integer array of `count` values.
///
/// # Errors
/// Returns `WriteError` if serialization fails.
pub fn integer_xml_document(count: usize) -> Result<String, WriteError> {
    let values = (0..count as i64).map(|v| v * 7 - 1000).collect();
    XmlWriter::default().write_integer_array("Values", &IntegerArray::Xml(values))
}

/// Writes a jagged array of `count` inline sub-lists.
///
/// # Errors
/// Returns `WriteError` if serialization fails.
pub fn jagged_xml_document(count: usize, max_len: usize) -> Result<String, WriteError> {
    let jagged = JaggedArray::encode(jagged_sequences(count, max_len));
    XmlWriter::default().write_jagged_array("NodesPerFace", &ResqmlJaggedArray::from_integers(&jagged))
}
