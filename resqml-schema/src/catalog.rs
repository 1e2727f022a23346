//! Built-in descriptor table for the RESQML 2.0 array family.

use crate::descriptor::{FieldDescriptor as F, SchemaRegistry, TypeDescriptor, ValueKind};
use crate::namespace::{COMMON_NS as C, RESQML_NS as R};
use std::sync::LazyLock;

/// `eml:UuidString` facet.
pub const UUID_PATTERN: &str = "[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[1-5][a-fA-F0-9]{3}-[8-9a-bA-B][a-fA-F0-9]{3}-[a-fA-F0-9]{12}";

/// `eml:DescriptionString` length.
pub const TITLE_MAX_LENGTH: usize = 256;

const fn abstract_type(name: &'static str, base: Option<&'static str>) -> TypeDescriptor {
    TypeDescriptor {
        name,
        namespace: R,
        base,
        is_abstract: true,
        fields: &[],
    }
}

macro_rules! resqml_type {
    ($name:literal, $base:literal, [$($field:expr),* $(,)?] $(,)?) => {
        TypeDescriptor {
            name: $name,
            namespace: R,
            base: Some($base),
            is_abstract: false,
            fields: &[$($field),*],
        }
    };
}

/// Types modelled by this crate, in dependency order.
pub static RESQML_V2_TYPES: &[TypeDescriptor] = &[
    // energyml common
    TypeDescriptor {
        name: "DataObjectReference",
        namespace: C,
        base: None,
        is_abstract: false,
        fields: &[
            F::element("content_type", "ContentType", C, ValueKind::String),
            F::element("title", "Title", C, ValueKind::String)
                .optional()
                .max_length(TITLE_MAX_LENGTH),
            F::element("uuid", "UUID", C, ValueKind::Uuid).pattern(UUID_PATTERN),
            F::element("uuid_authority", "UuidAuthority", C, ValueKind::String).optional(),
            F::element("version_string", "VersionString", C, ValueKind::String).optional(),
        ],
    },
    TypeDescriptor {
        name: "Hdf5Dataset",
        namespace: C,
        base: None,
        is_abstract: false,
        fields: &[
            F::element("path_in_hdf_file", "PathInHdfFile", C, ValueKind::String),
            F::element(
                "hdf_proxy",
                "HdfProxy",
                C,
                ValueKind::Complex("DataObjectReference"),
            ),
        ],
    },
    // geometry
    TypeDescriptor {
        name: "Point3d",
        namespace: R,
        base: None,
        is_abstract: false,
        fields: &[
            F::element("coordinate1", "Coordinate1", R, ValueKind::Double),
            F::element("coordinate2", "Coordinate2", R, ValueKind::Double),
            F::element("coordinate3", "Coordinate3", R, ValueKind::Double),
        ],
    },
    // array roots
    abstract_type("AbstractValueArray", None),
    abstract_type("AbstractIntegerArray", Some("AbstractValueArray")),
    abstract_type("AbstractDoubleArray", Some("AbstractValueArray")),
    abstract_type("AbstractBooleanArray", Some("AbstractValueArray")),
    abstract_type("AbstractPoint3dArray", None),
    // integers
    resqml_type!(
        "IntegerConstantArray",
        "AbstractIntegerArray",
        [
            F::element("value", "Value", R, ValueKind::Integer),
            F::element("count", "Count", R, ValueKind::Integer).min_inclusive(1),
        ],
    ),
    resqml_type!(
        "IntegerRangeArray",
        "AbstractIntegerArray",
        [
            F::element("count", "Count", R, ValueKind::Integer).min_inclusive(1),
            F::element("value", "Value", R, ValueKind::Integer),
        ],
    ),
    resqml_type!(
        "IntegerLatticeArray",
        "AbstractIntegerArray",
        [
            F::element("start_value", "StartValue", R, ValueKind::Integer),
            F::element(
                "offset",
                "Offset",
                R,
                ValueKind::Complex("IntegerConstantArray"),
            )
            .unbounded(),
        ],
    ),
    resqml_type!(
        "IntegerXmlArray",
        "AbstractIntegerArray",
        [
            F::element("count_per_value", "CountPerValue", R, ValueKind::Integer)
                .optional()
                .min_inclusive(1),
            F::element("values", "Values", R, ValueKind::IntegerList),
        ],
    ),
    resqml_type!(
        "IntegerHdf5Array",
        "AbstractIntegerArray",
        [
            F::element("null_value", "NullValue", R, ValueKind::Integer),
            F::element("values", "Values", R, ValueKind::Complex("Hdf5Dataset")),
        ],
    ),
    // doubles
    resqml_type!(
        "DoubleConstantArray",
        "AbstractDoubleArray",
        [
            F::element("value", "Value", R, ValueKind::Double),
            F::element("count", "Count", R, ValueKind::Integer).min_inclusive(1),
        ],
    ),
    resqml_type!(
        "DoubleLatticeArray",
        "AbstractDoubleArray",
        [
            F::element("start_value", "StartValue", R, ValueKind::Double),
            F::element(
                "offset",
                "Offset",
                R,
                ValueKind::Complex("DoubleConstantArray"),
            )
            .unbounded(),
        ],
    ),
    resqml_type!(
        "DoubleXmlArray",
        "AbstractDoubleArray",
        [F::element("values", "Values", R, ValueKind::DoubleList)],
    ),
    resqml_type!(
        "DoubleHdf5Array",
        "AbstractDoubleArray",
        [F::element(
            "values",
            "Values",
            R,
            ValueKind::Complex("Hdf5Dataset"),
        )],
    ),
    // booleans
    resqml_type!(
        "BooleanConstantArray",
        "AbstractBooleanArray",
        [
            F::element("value", "Value", R, ValueKind::Boolean),
            F::element("count", "Count", R, ValueKind::Integer).min_inclusive(1),
        ],
    ),
    resqml_type!(
        "BooleanXmlArray",
        "AbstractBooleanArray",
        [F::element("values", "Values", R, ValueKind::BooleanList)],
    ),
    resqml_type!(
        "BooleanHdf5Array",
        "AbstractBooleanArray",
        [F::element(
            "values",
            "Values",
            R,
            ValueKind::Complex("Hdf5Dataset"),
        )],
    ),
    // strings
    resqml_type!(
        "StringXmlArray",
        "AbstractValueArray",
        [F::element("values", "Values", R, ValueKind::String)
            .optional()
            .unbounded()],
    ),
    resqml_type!(
        "StringHdf5Array",
        "AbstractValueArray",
        [F::element(
            "values",
            "Values",
            R,
            ValueKind::Complex("Hdf5Dataset"),
        )],
    ),
    // jagged
    resqml_type!(
        "ResqmlJaggedArray",
        "AbstractValueArray",
        [
            F::element(
                "elements",
                "Elements",
                R,
                ValueKind::Complex("AbstractValueArray"),
            ),
            F::element(
                "cumulative_length",
                "CumulativeLength",
                R,
                ValueKind::Complex("AbstractIntegerArray"),
            ),
        ],
    ),
    // points
    TypeDescriptor {
        name: "Point3dOffset",
        namespace: R,
        base: None,
        is_abstract: false,
        fields: &[
            F::element("offset", "Offset", R, ValueKind::Complex("Point3d")),
            F::element(
                "spacing",
                "Spacing",
                R,
                ValueKind::Complex("AbstractDoubleArray"),
            ),
        ],
    },
    resqml_type!(
        "Point3dHdf5Array",
        "AbstractPoint3dArray",
        [F::element(
            "coordinates",
            "Coordinates",
            R,
            ValueKind::Complex("Hdf5Dataset"),
        )],
    ),
    resqml_type!(
        "Point3dLatticeArray",
        "AbstractPoint3dArray",
        [
            F::element("origin", "Origin", R, ValueKind::Complex("Point3d")),
            F::element("offset", "Offset", R, ValueKind::Complex("Point3dOffset")).unbounded(),
        ],
    ),
    resqml_type!(
        "Point3dZValueArray",
        "AbstractPoint3dArray",
        [
            F::element(
                "supporting_geometry",
                "SupportingGeometry",
                R,
                ValueKind::Complex("AbstractPoint3dArray"),
            ),
            F::element(
                "z_values",
                "ZValues",
                R,
                ValueKind::Complex("AbstractDoubleArray"),
            ),
        ],
    ),
];

static RESQML_V2: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::from_table(RESQML_V2_TYPES).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in descriptor table rejected");
        SchemaRegistry::new()
    })
});

/// Returns the registry of built-in RESQML 2.0 descriptors.
#[must_use]
pub fn resqml_v2() -> &'static SchemaRegistry {
    &RESQML_V2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MaxOccurs;

    #[test]
    fn test_builtin_table_loads() {
        let registry = SchemaRegistry::from_table(RESQML_V2_TYPES).expect("table is consistent");
        assert_eq!(registry.len(), RESQML_V2_TYPES.len());
        assert_eq!(resqml_v2().len(), RESQML_V2_TYPES.len());
    }

    #[test]
    fn test_lattice_offsets_unbounded() {
        let lattice = resqml_v2().get("IntegerLatticeArray").expect("registered");
        let offset = lattice.field("Offset").expect("declared");
        assert_eq!(offset.max_occurs, MaxOccurs::Unbounded);
        assert_eq!(offset.min_occurs, 1);
        assert_eq!(offset.kind, ValueKind::Complex("IntegerConstantArray"));
    }

    #[test]
    fn test_integer_array_family() {
        let names: Vec<_> = resqml_v2()
            .concrete_types_of("AbstractIntegerArray")
            .iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "IntegerConstantArray",
                "IntegerRangeArray",
                "IntegerLatticeArray",
                "IntegerXmlArray",
                "IntegerHdf5Array",
            ]
        );
    }

    #[test]
    fn test_value_array_family_excludes_points() {
        let registry = resqml_v2();
        assert!(registry.is_substitutable("ResqmlJaggedArray", "AbstractValueArray"));
        assert!(registry.is_substitutable("DoubleLatticeArray", "AbstractValueArray"));
        assert!(!registry.is_substitutable("Point3dLatticeArray", "AbstractValueArray"));
        assert!(!registry.is_substitutable("DoubleXmlArray", "AbstractIntegerArray"));
    }

    #[test]
    fn test_common_types_in_common_namespace() {
        let registry = resqml_v2();
        let dataset = registry.get("Hdf5Dataset").expect("registered");
        assert_eq!(dataset.namespace, C);
        assert!(dataset.fields.iter().all(|f| f.namespace == C));
    }

    #[test]
    fn test_uuid_pattern() {
        let regex = resqml_v2().pattern(UUID_PATTERN).expect("compiled");
        assert!(regex.is_match("7a3a5d8e-6f3b-4c1a-9a9e-0b1c2d3e4f50"));
        assert!(!regex.is_match("not-a-uuid"));
        assert!(!regex.is_match("7a3a5d8e-6f3b-4c1a-9a9e-0b1c2d3e4f50x"));
    }
}
