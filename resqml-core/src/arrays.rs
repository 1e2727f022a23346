//! Concrete array variants for the abstract RESQML array types.
//!
//! The schema models arrays through abstract base types
//! (`AbstractIntegerArray`, `AbstractDoubleArray`, `AbstractPoint3dArray`, ...)
//! with one concrete subtype per storage strategy. Each abstract type becomes a
//! closed enum here; [`IntegerArray::wire_type`] and friends give back the
//! concrete schema type name used for `xsi:type`.

use crate::error::{Error, Result};
use crate::external::{DatasetSource, ExternalDataset};
use crate::jagged::JaggedArray;
use crate::lattice::{
    DoubleLatticeArray, IntegerLatticeArray, LatticeAxis, PointLattice, checked_product, reserve,
};
use crate::point::Point3d;

/// `count` copies of one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantArray<T> {
    /// The repeated value.
    pub value: T,
    /// Number of elements.
    pub count: usize,
}

impl<T: Clone> ConstantArray<T> {
    /// Creates a constant array.
    #[must_use]
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// Materializes the repeated values.
    ///
    /// # Errors
    /// Returns [`Error::AllocationFailed`] if `count` values cannot be held in memory.
    pub fn materialize(&self) -> Result<Vec<T>> {
        let mut values = reserve(self.count)?;
        values.resize(self.count, self.value.clone());
        Ok(values)
    }
}

/// Consecutive integers `value, value + 1, ..` (`count` of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRangeArray {
    /// First value.
    pub value: i64,
    /// Number of elements.
    pub count: usize,
}

impl IntegerRangeArray {
    /// Materializes the range.
    ///
    /// # Errors
    /// Returns [`Error::ArithmeticOverflow`] if the range leaves `i64`.
    pub fn materialize(&self) -> Result<Vec<i64>> {
        IntegerLatticeArray::regular(self.value, &[(self.count, 1)]).materialize()
    }
}

/// Integer values stored in an external dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerExternalArray {
    /// Dataset holding the values.
    pub values: ExternalDataset,
    /// Sentinel used for missing values.
    pub null_value: i64,
}

/// Variants of `AbstractIntegerArray`.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegerArray {
    /// `IntegerConstantArray`.
    Constant(ConstantArray<i64>),
    /// `IntegerRangeArray`.
    Range(IntegerRangeArray),
    /// `IntegerLatticeArray`.
    Lattice(IntegerLatticeArray),
    /// `IntegerXmlArray`: values inline in the document.
    Xml(Vec<i64>),
    /// `IntegerHdf5Array`.
    External(IntegerExternalArray),
}

impl IntegerArray {
    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Constant(_) => "IntegerConstantArray",
            Self::Range(_) => "IntegerRangeArray",
            Self::Lattice(_) => "IntegerLatticeArray",
            Self::Xml(_) => "IntegerXmlArray",
            Self::External(_) => "IntegerHdf5Array",
        }
    }

    /// Returns the element count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Constant(c) => Some(c.count),
            Self::Range(r) => Some(r.count),
            Self::Lattice(l) => l.len(),
            Self::Xml(values) => Some(values.len()),
            Self::External(_) => None,
        }
    }

    /// Returns the null sentinel for externally stored values.
    #[must_use]
    pub fn null_value(&self) -> Option<i64> {
        match self {
            Self::External(e) => Some(e.null_value),
            _ => None,
        }
    }

    /// Materializes the values.
    ///
    /// # Errors
    /// Returns errors from the lattice codec or the dataset source.
    pub fn materialize(&self, source: &dyn DatasetSource) -> Result<Vec<i64>> {
        match self {
            Self::Constant(c) => c.materialize(),
            Self::Range(r) => r.materialize(),
            Self::Lattice(l) => l.materialize(),
            Self::Xml(values) => Ok(values.clone()),
            Self::External(e) => source.read_integers(&e.values),
        }
    }
}

/// Variants of `AbstractDoubleArray`.
#[derive(Debug, Clone, PartialEq)]
pub enum DoubleArray {
    /// `DoubleConstantArray`.
    Constant(ConstantArray<f64>),
    /// `DoubleLatticeArray`.
    Lattice(DoubleLatticeArray),
    /// `DoubleXmlArray`: values inline in the document.
    Xml(Vec<f64>),
    /// `DoubleHdf5Array`.
    External(ExternalDataset),
}

impl DoubleArray {
    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Constant(_) => "DoubleConstantArray",
            Self::Lattice(_) => "DoubleLatticeArray",
            Self::Xml(_) => "DoubleXmlArray",
            Self::External(_) => "DoubleHdf5Array",
        }
    }

    /// Returns the element count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Constant(c) => Some(c.count),
            Self::Lattice(l) => l.len(),
            Self::Xml(values) => Some(values.len()),
            Self::External(_) => None,
        }
    }

    /// Materializes the values.
    ///
    /// # Errors
    /// Returns errors from the dataset source.
    pub fn materialize(&self, source: &dyn DatasetSource) -> Result<Vec<f64>> {
        match self {
            Self::Constant(c) => c.materialize(),
            Self::Lattice(l) => l.materialize(),
            Self::Xml(values) => Ok(values.clone()),
            Self::External(e) => source.read_doubles(e),
        }
    }
}

/// Variants of `AbstractBooleanArray`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanArray {
    /// `BooleanConstantArray`.
    Constant(ConstantArray<bool>),
    /// `BooleanXmlArray`: values inline in the document.
    Xml(Vec<bool>),
    /// `BooleanHdf5Array`.
    External(ExternalDataset),
}

impl BooleanArray {
    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Constant(_) => "BooleanConstantArray",
            Self::Xml(_) => "BooleanXmlArray",
            Self::External(_) => "BooleanHdf5Array",
        }
    }

    /// Returns the element count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Constant(c) => Some(c.count),
            Self::Xml(values) => Some(values.len()),
            Self::External(_) => None,
        }
    }

    /// Materializes the values.
    ///
    /// # Errors
    /// Returns errors from the dataset source.
    pub fn materialize(&self, source: &dyn DatasetSource) -> Result<Vec<bool>> {
        match self {
            Self::Constant(c) => c.materialize(),
            Self::Xml(values) => Ok(values.clone()),
            Self::External(e) => source.read_booleans(e),
        }
    }
}

/// Variants of `AbstractStringArray`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringArray {
    /// `StringXmlArray`: values inline in the document.
    Xml(Vec<String>),
    /// `StringHdf5Array`.
    External(ExternalDataset),
}

impl StringArray {
    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Xml(_) => "StringXmlArray",
            Self::External(_) => "StringHdf5Array",
        }
    }

    /// Returns the element count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Xml(values) => Some(values.len()),
            Self::External(_) => None,
        }
    }

    /// Materializes the values.
    ///
    /// # Errors
    /// Returns errors from the dataset source.
    pub fn materialize(&self, source: &dyn DatasetSource) -> Result<Vec<String>> {
        match self {
            Self::Xml(values) => Ok(values.clone()),
            Self::External(e) => source.read_strings(e),
        }
    }
}

/// Any `AbstractValueArray`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueArray {
    /// Integer values.
    Integer(IntegerArray),
    /// Floating-point values.
    Double(DoubleArray),
    /// Boolean values.
    Boolean(BooleanArray),
    /// String values.
    String(StringArray),
}

impl ValueArray {
    /// Returns the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
        }
    }

    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::Integer(a) => a.wire_type(),
            Self::Double(a) => a.wire_type(),
            Self::Boolean(a) => a.wire_type(),
            Self::String(a) => a.wire_type(),
        }
    }

    /// Returns the element count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Integer(a) => a.count(),
            Self::Double(a) => a.count(),
            Self::Boolean(a) => a.count(),
            Self::String(a) => a.count(),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::ValueKindMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

/// Wire form of a jagged array (`ResqmlJaggedArray`).
///
/// `cumulative_length` holds one entry per element, without the leading zero
/// of [`JaggedArray::offsets`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResqmlJaggedArray {
    /// Flat values of all sub-lists.
    pub elements: ValueArray,
    /// Running total of sub-list lengths.
    pub cumulative_length: IntegerArray,
}

impl ResqmlJaggedArray {
    /// Builds the inline wire form of an integer jagged array.
    #[must_use]
    pub fn from_integers(jagged: &JaggedArray<i64>) -> Self {
        Self {
            elements: ValueArray::Integer(IntegerArray::Xml(jagged.values().to_vec())),
            cumulative_length: IntegerArray::Xml(to_i64(jagged.cumulative_lengths())),
        }
    }

    /// Builds the inline wire form of a floating-point jagged array.
    #[must_use]
    pub fn from_doubles(jagged: &JaggedArray<f64>) -> Self {
        Self {
            elements: ValueArray::Double(DoubleArray::Xml(jagged.values().to_vec())),
            cumulative_length: IntegerArray::Xml(to_i64(jagged.cumulative_lengths())),
        }
    }

    /// Returns the number of sub-lists when known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.cumulative_length.count()
    }

    /// Decodes integer sub-lists.
    ///
    /// # Errors
    /// Returns [`Error::ValueKindMismatch`] for non-integer elements and
    /// [`Error::MalformedJaggedArray`] for inconsistent lengths.
    pub fn integers(&self, source: &dyn DatasetSource) -> Result<JaggedArray<i64>> {
        match &self.elements {
            ValueArray::Integer(a) => self.assemble(a.materialize(source)?, source),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Decodes floating-point sub-lists.
    ///
    /// # Errors
    /// Same conditions as [`ResqmlJaggedArray::integers`].
    pub fn doubles(&self, source: &dyn DatasetSource) -> Result<JaggedArray<f64>> {
        match &self.elements {
            ValueArray::Double(a) => self.assemble(a.materialize(source)?, source),
            other => Err(other.mismatch("double")),
        }
    }

    /// Decodes boolean sub-lists.
    ///
    /// # Errors
    /// Same conditions as [`ResqmlJaggedArray::integers`].
    pub fn booleans(&self, source: &dyn DatasetSource) -> Result<JaggedArray<bool>> {
        match &self.elements {
            ValueArray::Boolean(a) => self.assemble(a.materialize(source)?, source),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Decodes string sub-lists.
    ///
    /// # Errors
    /// Same conditions as [`ResqmlJaggedArray::integers`].
    pub fn strings(&self, source: &dyn DatasetSource) -> Result<JaggedArray<String>> {
        match &self.elements {
            ValueArray::String(a) => self.assemble(a.materialize(source)?, source),
            other => Err(other.mismatch("string")),
        }
    }

    fn assemble<T>(&self, values: Vec<T>, source: &dyn DatasetSource) -> Result<JaggedArray<T>> {
        let cumulative = self.cumulative_length.materialize(source)?;
        JaggedArray::from_cumulative_lengths(&cumulative, values)
    }
}

// Vec lengths never exceed isize::MAX, so the conversion cannot saturate.
fn to_i64(values: &[usize]) -> Vec<i64> {
    values
        .iter()
        .map(|&v| i64::try_from(v).unwrap_or(i64::MAX))
        .collect()
}

/// One axis of a [`Point3dLatticeArray`].
#[derive(Debug, Clone, PartialEq)]
pub struct Point3dOffset {
    /// Direction vector of the axis.
    pub offset: Point3d,
    /// Scalar spacing along the direction; `n` spacings give `n + 1` points.
    pub spacing: DoubleArray,
}

/// Wire form of a point lattice (`Point3dLatticeArray`).
#[derive(Debug, Clone, PartialEq)]
pub struct Point3dLatticeArray {
    /// First point.
    pub origin: Point3d,
    /// One offset per dimension, slowest first.
    pub offsets: Vec<Point3dOffset>,
}

impl Point3dLatticeArray {
    /// Builds a regular point lattice from `(direction, step, count)` triples.
    ///
    /// # Errors
    /// Returns [`Error::DegenerateAxis`] for an axis of fewer than two points,
    /// which has no spacing to record.
    pub fn regular(origin: Point3d, axes: &[(Point3d, f64, usize)]) -> Result<Self> {
        let offsets = axes
            .iter()
            .enumerate()
            .map(|(dimension, &(direction, step, count))| {
                if count < 2 {
                    return Err(Error::DegenerateAxis { dimension, count });
                }
                Ok(Point3dOffset {
                    offset: direction,
                    spacing: DoubleArray::Constant(ConstantArray::new(step, count - 1)),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { origin, offsets })
    }

    /// Returns the point count when it is known without reading a payload
    /// and fits in `usize`.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        let counts = self
            .offsets
            .iter()
            .map(|o| o.spacing.count()?.checked_add(1))
            .collect::<Option<Vec<_>>>()?;
        checked_product(counts)
    }

    /// Resolves the spacings into a [`PointLattice`].
    ///
    /// Constant spacings become regular axes; anything else is materialized as
    /// per-interval deltas.
    ///
    /// # Errors
    /// Returns errors from the dataset source.
    pub fn lattice(&self, source: &dyn DatasetSource) -> Result<PointLattice> {
        let axes = self
            .offsets
            .iter()
            .map(|o| -> Result<(Point3d, LatticeAxis<f64>)> {
                let axis = match &o.spacing {
                    DoubleArray::Constant(c) => LatticeAxis::regular(
                        c.count.checked_add(1).ok_or(Error::CountOverflow)?,
                        c.value,
                    ),
                    other => LatticeAxis::irregular(other.materialize(source)?),
                };
                Ok((o.offset, axis))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PointLattice::encode(self.origin, axes))
    }
}

/// Points whose third coordinate is replaced by separate z values (`Point3dZValueArray`).
#[derive(Debug, Clone, PartialEq)]
pub struct ZValueArray {
    /// Geometry supplying the first two coordinates.
    pub supporting_geometry: Point3dArray,
    /// Replacement third coordinates.
    pub z_values: DoubleArray,
}

/// Variants of `AbstractPoint3dArray`.
#[derive(Debug, Clone, PartialEq)]
pub enum Point3dArray {
    /// `Point3dHdf5Array`: three coordinates per point in a dataset.
    External(ExternalDataset),
    /// `Point3dLatticeArray`.
    Lattice(Point3dLatticeArray),
    /// `Point3dZValueArray`.
    ZValue(Box<ZValueArray>),
}

impl Point3dArray {
    /// Returns the concrete schema type name.
    #[must_use]
    pub const fn wire_type(&self) -> &'static str {
        match self {
            Self::External(_) => "Point3dHdf5Array",
            Self::Lattice(_) => "Point3dLatticeArray",
            Self::ZValue(_) => "Point3dZValueArray",
        }
    }

    /// Returns the point count when it is known without reading a payload.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::External(_) => None,
            Self::Lattice(l) => l.count(),
            Self::ZValue(z) => z
                .z_values
                .count()
                .or_else(|| z.supporting_geometry.count()),
        }
    }

    /// Materializes the points.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] when z values and supporting geometry
    /// disagree, plus any dataset source error.
    pub fn materialize(&self, source: &dyn DatasetSource) -> Result<Vec<Point3d>> {
        match self {
            Self::External(e) => source.read_points(e),
            Self::Lattice(l) => l.lattice(source)?.materialize(),
            Self::ZValue(z) => {
                let points = z.supporting_geometry.materialize(source)?;
                let zs = z.z_values.materialize(source)?;
                if points.len() != zs.len() {
                    return Err(Error::LengthMismatch {
                        context: "Point3dZValueArray",
                        expected: points.len(),
                        actual: zs.len(),
                    });
                }
                Ok(points
                    .into_iter()
                    .zip(zs)
                    .map(|(p, z)| p.with_z(z))
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryDatasets;
    use crate::reference::{ContentType, DataObjectReference, ObjectKey};

    fn hdf(path: &str) -> ExternalDataset {
        ExternalDataset::new(
            path,
            DataObjectReference::new(
                ContentType::eml("obj_EpcExternalPartReference"),
                ObjectKey::parse("0f2e3d4c-5b6a-4978-8695-a4b3c2d1e0f9"),
            ),
        )
    }

    #[test]
    fn test_integer_variants_materialize() {
        let source = MemoryDatasets::new();
        let constant = IntegerArray::Constant(ConstantArray::new(7, 3));
        assert_eq!(constant.materialize(&source), Ok(vec![7, 7, 7]));
        assert_eq!(constant.wire_type(), "IntegerConstantArray");

        let range = IntegerArray::Range(IntegerRangeArray { value: 4, count: 3 });
        assert_eq!(range.materialize(&source), Ok(vec![4, 5, 6]));
        assert_eq!(range.count(), Some(3));

        let lattice = IntegerArray::Lattice(IntegerLatticeArray::regular(0, &[(4, 2)]));
        assert_eq!(lattice.materialize(&source), Ok(vec![0, 2, 4, 6]));
    }

    #[test]
    fn test_external_integer_array() {
        let mut source = MemoryDatasets::new();
        let ds = hdf("/RESQML/cells/parent");
        source.insert_integers(&ds, vec![1, -1, 3]);
        let array = IntegerArray::External(IntegerExternalArray {
            values: ds,
            null_value: -1,
        });
        assert_eq!(array.count(), None);
        assert_eq!(array.null_value(), Some(-1));
        assert_eq!(array.materialize(&source), Ok(vec![1, -1, 3]));
    }

    #[test]
    fn test_jagged_wire_round_trip() {
        let source = MemoryDatasets::new();
        let jagged = JaggedArray::encode(vec![vec![], vec![1i64, 2], vec![]]);
        let wire = ResqmlJaggedArray::from_integers(&jagged);
        assert_eq!(wire.cumulative_length, IntegerArray::Xml(vec![0, 2, 2]));
        assert_eq!(wire.count(), Some(3));
        assert_eq!(wire.integers(&source), Ok(jagged));
    }

    #[test]
    fn test_jagged_wire_kind_mismatch() {
        let source = MemoryDatasets::new();
        let wire = ResqmlJaggedArray::from_doubles(&JaggedArray::encode(vec![vec![1.5]]));
        assert_eq!(
            wire.integers(&source),
            Err(Error::ValueKindMismatch {
                expected: "integer",
                actual: "double"
            })
        );
        assert_eq!(wire.doubles(&source).expect("doubles").to_nested(), vec![vec![1.5]]);
    }

    #[test]
    fn test_jagged_wire_malformed() {
        let source = MemoryDatasets::new();
        let wire = ResqmlJaggedArray {
            elements: ValueArray::Integer(IntegerArray::Xml(vec![1, 2, 3])),
            cumulative_length: IntegerArray::Xml(vec![2, 1, 3]),
        };
        assert!(matches!(
            wire.integers(&source),
            Err(Error::MalformedJaggedArray(_))
        ));
    }

    #[test]
    fn test_point_lattice_wire_regular() {
        let source = MemoryDatasets::new();
        let wire = Point3dLatticeArray::regular(
            Point3d::new(0.0, 0.0, 1000.0),
            &[
                (Point3d::new(0.0, 1.0, 0.0), 100.0, 2),
                (Point3d::new(1.0, 0.0, 0.0), 50.0, 3),
            ],
        )
        .expect("two or more points per axis");
        assert_eq!(wire.count(), Some(6));
        let points = Point3dArray::Lattice(wire)
            .materialize(&source)
            .expect("regular lattice");
        assert_eq!(points.len(), 6);
        assert_eq!(points[5], Point3d::new(100.0, 100.0, 1000.0));
    }

    #[test]
    fn test_point_lattice_external_spacing() {
        let mut source = MemoryDatasets::new();
        let ds = hdf("/RESQML/spacing/i");
        source.insert_doubles(&ds, vec![10.0, 20.0]);
        let wire = Point3dLatticeArray {
            origin: Point3d::ZERO,
            offsets: vec![Point3dOffset {
                offset: Point3d::new(1.0, 0.0, 0.0),
                spacing: DoubleArray::External(ds),
            }],
        };
        assert_eq!(wire.count(), None);
        let lattice = wire.lattice(&source).expect("spacing available");
        assert_eq!(lattice.value_at(&[2]), Ok(Point3d::new(30.0, 0.0, 0.0)));
    }

    #[test]
    fn test_z_value_array() {
        let source = MemoryDatasets::new();
        let support = Point3dArray::Lattice(
            Point3dLatticeArray::regular(Point3d::ZERO, &[(Point3d::new(1.0, 0.0, 0.0), 1.0, 3)])
                .expect("three points"),
        );
        let zvalues = Point3dArray::ZValue(Box::new(ZValueArray {
            supporting_geometry: support.clone(),
            z_values: DoubleArray::Xml(vec![5.0, 6.0, 7.0]),
        }));
        assert_eq!(zvalues.count(), Some(3));
        assert_eq!(
            zvalues.materialize(&source).expect("lengths agree")[2],
            Point3d::new(2.0, 0.0, 7.0)
        );

        let short = Point3dArray::ZValue(Box::new(ZValueArray {
            supporting_geometry: support,
            z_values: DoubleArray::Constant(ConstantArray::new(1.0, 2)),
        }));
        assert_eq!(
            short.materialize(&source),
            Err(Error::LengthMismatch {
                context: "Point3dZValueArray",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_point_lattice_rejects_degenerate_axes() {
        let x = Point3d::new(1.0, 0.0, 0.0);
        let y = Point3d::new(0.0, 1.0, 0.0);
        assert_eq!(
            Point3dLatticeArray::regular(Point3d::ZERO, &[(x, 1.0, 0)]),
            Err(Error::DegenerateAxis {
                dimension: 0,
                count: 0
            })
        );
        assert_eq!(
            Point3dLatticeArray::regular(Point3d::ZERO, &[(x, 1.0, 4), (y, 2.0, 1)]),
            Err(Error::DegenerateAxis {
                dimension: 1,
                count: 1
            })
        );
        let smallest = Point3dLatticeArray::regular(Point3d::ZERO, &[(x, 1.0, 2)])
            .expect("two points");
        assert_eq!(smallest.count(), Some(2));
    }

    #[test]
    fn test_huge_implicit_counts() {
        let steps = 1usize << 32;
        let lattice = IntegerArray::Lattice(IntegerLatticeArray::regular(
            0,
            &[(steps + 1, 1), (steps + 1, 1)],
        ));
        assert_eq!(lattice.count(), None);

        let wire = Point3dLatticeArray {
            origin: Point3d::ZERO,
            offsets: vec![
                Point3dOffset {
                    offset: Point3d::new(1.0, 0.0, 0.0),
                    spacing: DoubleArray::Constant(ConstantArray::new(1.0, steps)),
                },
                Point3dOffset {
                    offset: Point3d::new(0.0, 1.0, 0.0),
                    spacing: DoubleArray::Constant(ConstantArray::new(1.0, steps)),
                },
            ],
        };
        assert_eq!(wire.count(), None);

        let source = MemoryDatasets::new();
        let constant = IntegerArray::Constant(ConstantArray::new(0, usize::MAX / 4));
        assert!(matches!(
            constant.materialize(&source),
            Err(Error::AllocationFailed { .. })
        ));
        assert!(matches!(
            Point3dArray::Lattice(wire).materialize(&source),
            Err(Error::CountOverflow)
        ));
    }
}
