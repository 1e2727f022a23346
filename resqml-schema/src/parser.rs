//! Typed parsing of RESQML array elements.
//!
//! Parsing runs in three stages: [`read_xml`] builds a namespace-resolved
//! tree, [`validate_node`] checks it against the descriptor table, and the
//! mapping functions of [`ArrayParser`] turn the tree into the array types of
//! `resqml-core`, dispatching on `xsi:type`.

use crate::catalog::resqml_v2;
use crate::config::ParserConfig;
use crate::descriptor::SchemaRegistry;
use crate::error::ParseError;
use crate::lexical::{parse_boolean, parse_double, parse_long};
use crate::namespace::QualifiedName;
use crate::node::{XmlNode, read_xml};
use crate::validation::validate_node;
use resqml_core::{
    BooleanArray, ConstantArray, ContentType, DataObjectReference, DoubleArray,
    DoubleLatticeArray, ExternalDataset, IntegerArray, IntegerExternalArray, IntegerLatticeArray,
    IntegerRangeArray, LatticeAxis, ObjectKey, Point3d, Point3dArray, Point3dLatticeArray,
    Point3dOffset, ResqmlJaggedArray, StringArray, ValueArray, ZValueArray,
};

const INTEGER_ARRAY: &str = "AbstractIntegerArray";
const DOUBLE_ARRAY: &str = "AbstractDoubleArray";
const BOOLEAN_ARRAY: &str = "AbstractBooleanArray";
const VALUE_ARRAY: &str = "AbstractValueArray";
const POINT3D_ARRAY: &str = "AbstractPoint3dArray";

/// Parser for RESQML array documents and elements.
#[derive(Debug, Clone)]
pub struct ArrayParser<'r> {
    registry: &'r SchemaRegistry,
    config: ParserConfig,
}

impl ArrayParser<'static> {
    /// Creates a parser over the built-in descriptor table.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self::with_registry(resqml_v2(), config)
    }
}

impl Default for ArrayParser<'static> {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<'r> ArrayParser<'r> {
    /// Creates a parser over a custom descriptor table.
    #[must_use]
    pub fn with_registry(registry: &'r SchemaRegistry, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and validates a document whose root is declared as `declared`.
    ///
    /// A root without `xsi:type` whose element name is itself a registered
    /// concrete type is treated as an instance of that type.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML or validation failure.
    pub fn read_document(&self, xml: &str, declared: &str) -> Result<XmlNode, ParseError> {
        let mut root = read_xml(xml)?;
        if root.xsi_type.is_none()
            && root.local_name() != declared
            && self
                .registry
                .get(root.local_name())
                .is_some_and(|t| !t.is_abstract)
        {
            root.xsi_type = Some(QualifiedName {
                namespace: root.name.namespace.clone(),
                local: root.name.local.clone(),
            });
        }
        if self.config.is_validating() {
            validate_node(self.registry, &root, declared, &self.config)?;
        }
        Ok(root)
    }

    /// Parses an `AbstractIntegerArray` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML, validation failure, or a root
    /// that is not an integer array.
    pub fn parse_integer_array(&self, xml: &str) -> Result<IntegerArray, ParseError> {
        self.integer_array(&self.read_document(xml, INTEGER_ARRAY)?)
    }

    /// Parses an `AbstractDoubleArray` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML, validation failure, or a root
    /// that is not a double array.
    pub fn parse_double_array(&self, xml: &str) -> Result<DoubleArray, ParseError> {
        self.double_array(&self.read_document(xml, DOUBLE_ARRAY)?)
    }

    /// Parses an `AbstractBooleanArray` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML, validation failure, or a root
    /// that is not a boolean array.
    pub fn parse_boolean_array(&self, xml: &str) -> Result<BooleanArray, ParseError> {
        self.boolean_array(&self.read_document(xml, BOOLEAN_ARRAY)?)
    }

    /// Parses a string array document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML, validation failure, or a root
    /// that is not a string array.
    pub fn parse_string_array(&self, xml: &str) -> Result<StringArray, ParseError> {
        self.string_array(&self.read_document(xml, VALUE_ARRAY)?)
    }

    /// Parses any `AbstractValueArray` document other than a jagged array.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML or validation failure.
    pub fn parse_value_array(&self, xml: &str) -> Result<ValueArray, ParseError> {
        self.value_array(&self.read_document(xml, VALUE_ARRAY)?)
    }

    /// Parses an `AbstractPoint3dArray` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML, validation failure, or a root
    /// that is not a point array.
    pub fn parse_point3d_array(&self, xml: &str) -> Result<Point3dArray, ParseError> {
        self.point3d_array(&self.read_document(xml, POINT3D_ARRAY)?)
    }

    /// Parses a `ResqmlJaggedArray` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML or validation failure.
    pub fn parse_jagged_array(&self, xml: &str) -> Result<ResqmlJaggedArray, ParseError> {
        self.jagged_array(&self.read_document(xml, "ResqmlJaggedArray")?)
    }

    /// Parses a `DataObjectReference` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML or validation failure.
    pub fn parse_reference(&self, xml: &str) -> Result<DataObjectReference, ParseError> {
        self.reference(&self.read_document(xml, "DataObjectReference")?)
    }

    /// Parses an `Hdf5Dataset` document.
    ///
    /// # Errors
    /// Returns `ParseError` on malformed XML or validation failure.
    pub fn parse_external_dataset(&self, xml: &str) -> Result<ExternalDataset, ParseError> {
        self.external_dataset(&self.read_document(xml, "Hdf5Dataset")?)
    }

    /// Maps an element onto an [`IntegerArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if the element is not a well-formed integer array.
    pub fn integer_array(&self, node: &XmlNode) -> Result<IntegerArray, ParseError> {
        let type_name = type_of(node, INTEGER_ARRAY);
        tracing::debug!(wire_type = type_name, element = node.local_name(), "integer array");
        match type_name {
            "IntegerConstantArray" => Ok(IntegerArray::Constant(ConstantArray::new(
                long(node, "Value")?,
                count(node, "Count")?,
            ))),
            "IntegerRangeArray" => Ok(IntegerArray::Range(IntegerRangeArray {
                value: long(node, "Value")?,
                count: count(node, "Count")?,
            })),
            "IntegerLatticeArray" => {
                let axes = node
                    .children_named("Offset")
                    .map(|offset| -> Result<LatticeAxis<i64>, ParseError> {
                        Ok(LatticeAxis::regular(steps(offset)?, long(offset, "Value")?))
                    })
                    .collect::<Result<Vec<_>, ParseError>>()?;
                Ok(IntegerArray::Lattice(IntegerLatticeArray::encode(
                    long(node, "StartValue")?,
                    axes,
                )))
            }
            "IntegerXmlArray" => {
                if let Some(per_value) = node.child("CountPerValue")
                    && per_value.text() != "1"
                {
                    tracing::warn!(
                        count_per_value = per_value.text(),
                        "CountPerValue is not kept; values are read as a flat list"
                    );
                }
                Ok(IntegerArray::Xml(self.list(node, parse_long, "an integer")?))
            }
            "IntegerHdf5Array" => Ok(IntegerArray::External(IntegerExternalArray {
                values: self.external_dataset(required(node, "Values")?)?,
                null_value: long(node, "NullValue")?,
            })),
            other => Err(self.mismatch(node, other, INTEGER_ARRAY)),
        }
    }

    /// Maps an element onto a [`DoubleArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if the element is not a well-formed double array.
    pub fn double_array(&self, node: &XmlNode) -> Result<DoubleArray, ParseError> {
        let type_name = type_of(node, DOUBLE_ARRAY);
        tracing::debug!(wire_type = type_name, element = node.local_name(), "double array");
        match type_name {
            "DoubleConstantArray" => Ok(DoubleArray::Constant(ConstantArray::new(
                double(node, "Value")?,
                count(node, "Count")?,
            ))),
            "DoubleLatticeArray" => {
                let axes = node
                    .children_named("Offset")
                    .map(|offset| -> Result<LatticeAxis<f64>, ParseError> {
                        Ok(LatticeAxis::regular(
                            steps(offset)?,
                            double(offset, "Value")?,
                        ))
                    })
                    .collect::<Result<Vec<_>, ParseError>>()?;
                Ok(DoubleArray::Lattice(DoubleLatticeArray::encode(
                    double(node, "StartValue")?,
                    axes,
                )))
            }
            "DoubleXmlArray" => Ok(DoubleArray::Xml(self.list(node, parse_double, "a double")?)),
            "DoubleHdf5Array" => Ok(DoubleArray::External(
                self.external_dataset(required(node, "Values")?)?,
            )),
            other => Err(self.mismatch(node, other, DOUBLE_ARRAY)),
        }
    }

    /// Maps an element onto a [`BooleanArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if the element is not a well-formed boolean array.
    pub fn boolean_array(&self, node: &XmlNode) -> Result<BooleanArray, ParseError> {
        let type_name = type_of(node, BOOLEAN_ARRAY);
        tracing::debug!(wire_type = type_name, element = node.local_name(), "boolean array");
        match type_name {
            "BooleanConstantArray" => Ok(BooleanArray::Constant(ConstantArray::new(
                scalar(node, "Value", parse_boolean, "a boolean")?,
                count(node, "Count")?,
            ))),
            "BooleanXmlArray" => Ok(BooleanArray::Xml(self.list(
                node,
                parse_boolean,
                "a boolean",
            )?)),
            "BooleanHdf5Array" => Ok(BooleanArray::External(
                self.external_dataset(required(node, "Values")?)?,
            )),
            other => Err(self.mismatch(node, other, BOOLEAN_ARRAY)),
        }
    }

    /// Maps an element onto a [`StringArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if the element is not a well-formed string array.
    pub fn string_array(&self, node: &XmlNode) -> Result<StringArray, ParseError> {
        let type_name = type_of(node, VALUE_ARRAY);
        tracing::debug!(wire_type = type_name, element = node.local_name(), "string array");
        match type_name {
            "StringXmlArray" => {
                let values: Vec<String> = node
                    .children_named("Values")
                    .map(|v| v.raw_text().to_string())
                    .collect();
                self.check_limit(node, values.len())?;
                Ok(StringArray::Xml(values))
            }
            "StringHdf5Array" => Ok(StringArray::External(
                self.external_dataset(required(node, "Values")?)?,
            )),
            other => Err(self.mismatch(node, other, "a string array")),
        }
    }

    /// Maps an element onto a [`ValueArray`], choosing the family from `xsi:type`.
    ///
    /// # Errors
    /// Returns `ParseError` for unknown types and for nested jagged arrays.
    pub fn value_array(&self, node: &XmlNode) -> Result<ValueArray, ParseError> {
        let type_name = type_of(node, VALUE_ARRAY);
        if self.registry.is_substitutable(type_name, INTEGER_ARRAY) {
            Ok(ValueArray::Integer(self.integer_array(node)?))
        } else if self.registry.is_substitutable(type_name, DOUBLE_ARRAY) {
            Ok(ValueArray::Double(self.double_array(node)?))
        } else if self.registry.is_substitutable(type_name, BOOLEAN_ARRAY) {
            Ok(ValueArray::Boolean(self.boolean_array(node)?))
        } else if type_name == "ResqmlJaggedArray" {
            Err(ParseError::structure(format!(
                "element '{}' nests a jagged array, which is not supported",
                node.local_name()
            )))
        } else {
            Ok(ValueArray::String(self.string_array(node)?))
        }
    }

    /// Maps an element onto a [`ResqmlJaggedArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if either part is missing or malformed.
    pub fn jagged_array(&self, node: &XmlNode) -> Result<ResqmlJaggedArray, ParseError> {
        tracing::debug!(element = node.local_name(), "jagged array");
        Ok(ResqmlJaggedArray {
            elements: self.value_array(required(node, "Elements")?)?,
            cumulative_length: self.integer_array(required(node, "CumulativeLength")?)?,
        })
    }

    /// Maps an element onto a [`Point3dArray`].
    ///
    /// # Errors
    /// Returns `ParseError` if the element is not a well-formed point array.
    pub fn point3d_array(&self, node: &XmlNode) -> Result<Point3dArray, ParseError> {
        let type_name = type_of(node, POINT3D_ARRAY);
        tracing::debug!(wire_type = type_name, element = node.local_name(), "point array");
        match type_name {
            "Point3dHdf5Array" => Ok(Point3dArray::External(
                self.external_dataset(required(node, "Coordinates")?)?,
            )),
            "Point3dLatticeArray" => {
                let offsets = node
                    .children_named("Offset")
                    .map(|offset| -> Result<Point3dOffset, ParseError> {
                        Ok(Point3dOffset {
                            offset: point3d(required(offset, "Offset")?)?,
                            spacing: self.double_array(required(offset, "Spacing")?)?,
                        })
                    })
                    .collect::<Result<Vec<_>, ParseError>>()?;
                Ok(Point3dArray::Lattice(Point3dLatticeArray {
                    origin: point3d(required(node, "Origin")?)?,
                    offsets,
                }))
            }
            "Point3dZValueArray" => Ok(Point3dArray::ZValue(Box::new(ZValueArray {
                supporting_geometry: self.point3d_array(required(node, "SupportingGeometry")?)?,
                z_values: self.double_array(required(node, "ZValues")?)?,
            }))),
            other => Err(self.mismatch(node, other, POINT3D_ARRAY)),
        }
    }

    /// Maps an `Hdf5Dataset` element onto an [`ExternalDataset`].
    ///
    /// # Errors
    /// Returns `ParseError` if the path or proxy is missing.
    pub fn external_dataset(&self, node: &XmlNode) -> Result<ExternalDataset, ParseError> {
        Ok(ExternalDataset::new(
            required(node, "PathInHdfFile")?.text(),
            self.reference(required(node, "HdfProxy")?)?,
        ))
    }

    /// Maps a `DataObjectReference` element.
    ///
    /// The reference is kept verbatim; nothing is resolved here.
    ///
    /// # Errors
    /// Returns `ParseError` if the content type or UUID is missing.
    pub fn reference(&self, node: &XmlNode) -> Result<DataObjectReference, ParseError> {
        let mut reference = DataObjectReference::new(
            ContentType::new(required(node, "ContentType")?.text()),
            ObjectKey::parse(required(node, "UUID")?.text()),
        );
        reference.title = optional_text(node, "Title");
        reference.uuid_authority = optional_text(node, "UuidAuthority");
        reference.version_string = optional_text(node, "VersionString");
        Ok(reference)
    }

    fn list<T>(
        &self,
        node: &XmlNode,
        parse: fn(&str) -> Option<T>,
        expected: &str,
    ) -> Result<Vec<T>, ParseError> {
        let values = required(node, "Values")?;
        let tokens: Vec<&str> = values.text().split_whitespace().collect();
        self.check_limit(values, tokens.len())?;
        tokens
            .into_iter()
            .map(|token| {
                parse(token).ok_or_else(|| ParseError::invalid_value("Values", token, expected))
            })
            .collect()
    }

    fn check_limit(&self, node: &XmlNode, actual: usize) -> Result<(), ParseError> {
        let limit = self.config.inline_limit();
        if actual > limit {
            return Err(ParseError::LimitExceeded {
                element: node.local_name().to_string(),
                limit,
                actual,
            });
        }
        Ok(())
    }

    fn mismatch(&self, node: &XmlNode, type_name: &str, expected: &str) -> ParseError {
        match self.registry.get(type_name) {
            None => ParseError::UnknownType {
                type_name: type_name.to_string(),
                element: node.local_name().to_string(),
            },
            Some(descriptor) if descriptor.is_abstract => ParseError::AbstractType {
                type_name: type_name.to_string(),
                element: node.local_name().to_string(),
            },
            Some(_) => ParseError::InvalidSubstitution {
                type_name: type_name.to_string(),
                expected: expected.to_string(),
                element: node.local_name().to_string(),
            },
        }
    }
}

/// Parses an integer array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_integer_array`].
pub fn parse_integer_array(xml: &str) -> Result<IntegerArray, ParseError> {
    ArrayParser::default().parse_integer_array(xml)
}

/// Parses a double array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_double_array`].
pub fn parse_double_array(xml: &str) -> Result<DoubleArray, ParseError> {
    ArrayParser::default().parse_double_array(xml)
}

/// Parses a boolean array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_boolean_array`].
pub fn parse_boolean_array(xml: &str) -> Result<BooleanArray, ParseError> {
    ArrayParser::default().parse_boolean_array(xml)
}

/// Parses a string array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_string_array`].
pub fn parse_string_array(xml: &str) -> Result<StringArray, ParseError> {
    ArrayParser::default().parse_string_array(xml)
}

/// Parses any value array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_value_array`].
pub fn parse_value_array(xml: &str) -> Result<ValueArray, ParseError> {
    ArrayParser::default().parse_value_array(xml)
}

/// Parses a point array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_point3d_array`].
pub fn parse_point3d_array(xml: &str) -> Result<Point3dArray, ParseError> {
    ArrayParser::default().parse_point3d_array(xml)
}

/// Parses a jagged array document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_jagged_array`].
pub fn parse_jagged_array(xml: &str) -> Result<ResqmlJaggedArray, ParseError> {
    ArrayParser::default().parse_jagged_array(xml)
}

/// Parses a data object reference document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_reference`].
pub fn parse_reference(xml: &str) -> Result<DataObjectReference, ParseError> {
    ArrayParser::default().parse_reference(xml)
}

/// Parses an external dataset document with the default configuration.
///
/// # Errors
/// See [`ArrayParser::parse_external_dataset`].
pub fn parse_external_dataset(xml: &str) -> Result<ExternalDataset, ParseError> {
    ArrayParser::default().parse_external_dataset(xml)
}

fn type_of<'n>(node: &'n XmlNode, declared: &'n str) -> &'n str {
    node.type_name().unwrap_or(declared)
}

fn required<'n>(node: &'n XmlNode, name: &str) -> Result<&'n XmlNode, ParseError> {
    node.child(name)
        .ok_or_else(|| ParseError::missing_element(name, node.local_name()))
}

fn optional_text(node: &XmlNode, name: &str) -> Option<String> {
    node.child(name).map(|child| child.text().to_string())
}

fn scalar<T>(
    node: &XmlNode,
    name: &str,
    parse: fn(&str) -> Option<T>,
    expected: &str,
) -> Result<T, ParseError> {
    let text = required(node, name)?.text();
    parse(text).ok_or_else(|| ParseError::invalid_value(name, text, expected))
}

fn long(node: &XmlNode, name: &str) -> Result<i64, ParseError> {
    scalar(node, name, parse_long, "an integer")
}

fn double(node: &XmlNode, name: &str) -> Result<f64, ParseError> {
    scalar(node, name, parse_double, "a double")
}

fn count(node: &XmlNode, name: &str) -> Result<usize, ParseError> {
    scalar(
        node,
        name,
        |text| parse_long(text).and_then(|v| usize::try_from(v).ok()),
        "a non-negative count",
    )
}

/// Elements along a lattice axis: the wire `Count` is the number of steps.
fn steps(offset: &XmlNode) -> Result<usize, ParseError> {
    count(offset, "Count")?.checked_add(1).ok_or_else(|| {
        ParseError::invalid_value("Count", required_text(offset, "Count"), "a smaller count")
    })
}

fn required_text<'n>(node: &'n XmlNode, name: &str) -> &'n str {
    node.child(name).map_or("", XmlNode::text)
}

fn point3d(node: &XmlNode) -> Result<Point3d, ParseError> {
    Ok(Point3d::new(
        double(node, "Coordinate1")?,
        double(node, "Coordinate2")?,
        double(node, "Coordinate3")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resqml_core::{DatasetSource, JaggedArray, MemoryDatasets};

    const HEADER: &str = r#"xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2" xmlns:eml="http://www.energistics.org/energyml/data/commonv2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;
    const PROXY_UUID: &str = "7a3a5d8e-6f3b-4c1a-9a9e-0b1c2d3e4f50";

    fn doc(body: &str) -> String {
        body.replacen("HEADER", HEADER, 1)
    }

    fn hdf5(element: &str, path: &str) -> String {
        format!(
            r#"<resqml2:{element}>
                <eml:PathInHdfFile>{path}</eml:PathInHdfFile>
                <eml:HdfProxy>
                    <eml:ContentType>application/x-eml+xml;version=2.0;type=obj_EpcExternalPartReference</eml:ContentType>
                    <eml:Title>Hdf Proxy</eml:Title>
                    <eml:UUID>{PROXY_UUID}</eml:UUID>
                </eml:HdfProxy>
            </resqml2:{element}>"#
        )
    }

    #[test]
    fn test_integer_lattice_count_is_steps() {
        let xml = doc(r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerLatticeArray">
            <resqml2:StartValue>100</resqml2:StartValue>
            <resqml2:Offset><resqml2:Value>10</resqml2:Value><resqml2:Count>2</resqml2:Count></resqml2:Offset>
            <resqml2:Offset><resqml2:Value>1</resqml2:Value><resqml2:Count>3</resqml2:Count></resqml2:Offset>
        </resqml2:Values>"#);
        let array = parse_integer_array(&xml).expect("valid lattice");
        let IntegerArray::Lattice(lattice) = &array else {
            panic!("expected lattice, got {array:?}");
        };
        assert_eq!(lattice.shape(), vec![3, 4]);
        assert_eq!(lattice.value_at(&[2, 3]).expect("in range"), 123);
        assert_eq!(array.count(), Some(12));
    }

    #[test]
    fn test_integer_lattice_huge_count() {
        let xml = doc(r#"<resqml2:Values HEADER xsi:type="resqml2:IntegerLatticeArray">
            <resqml2:StartValue>0</resqml2:StartValue>
            <resqml2:Offset><resqml2:Value>1</resqml2:Value><resqml2:Count>4294967296</resqml2:Count></resqml2:Offset>
            <resqml2:Offset><resqml2:Value>1</resqml2:Value><resqml2:Count>4294967296</resqml2:Count></resqml2:Offset>
        </resqml2:Values>"#);
        let array = parse_integer_array(&xml).expect("valid lattice");
        assert_eq!(array.count(), None);
        let IntegerArray::Lattice(lattice) = &array else {
            panic!("expected lattice, got {array:?}");
        };
        assert_eq!(lattice.value_at(&[1, 1]).expect("in range"), 2);
        let err = array.materialize(&MemoryDatasets::new()).expect_err("too large");
        assert_eq!(err, resqml_core::Error::CountOverflow);
    }

    #[test]
    fn test_integer_constant_and_range() {
        let constant = parse_integer_array(&doc(
            r#"<resqml2:V HEADER xsi:type="resqml2:IntegerConstantArray"><resqml2:Value>-1</resqml2:Value><resqml2:Count>5</resqml2:Count></resqml2:V>"#,
        ))
        .expect("constant");
        assert_eq!(constant, IntegerArray::Constant(ConstantArray::new(-1, 5)));

        let range = parse_integer_array(&doc(
            r#"<resqml2:V HEADER xsi:type="resqml2:IntegerRangeArray"><resqml2:Count>3</resqml2:Count><resqml2:Value>7</resqml2:Value></resqml2:V>"#,
        ))
        .expect("range");
        assert_eq!(
            range.materialize(&MemoryDatasets::new()).expect("inline"),
            vec![7, 8, 9]
        );
    }

    #[test]
    fn test_integer_hdf5_array() {
        let xml = doc(&format!(
            r#"<resqml2:V HEADER xsi:type="resqml2:IntegerHdf5Array"><resqml2:NullValue>-999</resqml2:NullValue>{}</resqml2:V>"#,
            hdf5("Values", "/RESQML/cells")
        ));
        let array = parse_integer_array(&xml).expect("external");
        assert_eq!(array.null_value(), Some(-999));
        let IntegerArray::External(external) = &array else {
            panic!("expected external array");
        };
        assert_eq!(external.values.path_in_file, "/RESQML/cells");
        assert_eq!(
            external.values.proxy.key.to_string(),
            PROXY_UUID
        );
        assert_eq!(
            external.values.proxy.object_type(),
            Some("obj_EpcExternalPartReference")
        );

        let mut source = MemoryDatasets::new();
        source.insert_integers(&external.values, vec![1, 2, 3]);
        assert_eq!(array.materialize(&source).expect("stored"), vec![1, 2, 3]);
    }

    #[test]
    fn test_double_xml_array_special_values() {
        let xml = doc(r#"<resqml2:V HEADER xsi:type="resqml2:DoubleXmlArray"><resqml2:Values>0.5 -INF 1e3</resqml2:Values></resqml2:V>"#);
        let array = parse_double_array(&xml).expect("valid");
        assert_eq!(
            array,
            DoubleArray::Xml(vec![0.5, f64::NEG_INFINITY, 1000.0])
        );
    }

    #[test]
    fn test_boolean_and_string_arrays() {
        let booleans = parse_boolean_array(&doc(
            r#"<resqml2:V HEADER xsi:type="resqml2:BooleanXmlArray"><resqml2:Values>true 0 1</resqml2:Values></resqml2:V>"#,
        ))
        .expect("booleans");
        assert_eq!(booleans, BooleanArray::Xml(vec![true, false, true]));

        let strings = parse_string_array(&doc(
            r#"<resqml2:V HEADER xsi:type="resqml2:StringXmlArray"><resqml2:Values>top sand</resqml2:Values><resqml2:Values>shale</resqml2:Values></resqml2:V>"#,
        ))
        .expect("strings");
        assert_eq!(
            strings,
            StringArray::Xml(vec!["top sand".to_string(), "shale".to_string()])
        );
    }

    #[test]
    fn test_jagged_with_empty_sub_lists() {
        let xml = doc(r#"<resqml2:NodesPerFace HEADER>
            <resqml2:Elements xsi:type="resqml2:IntegerXmlArray"><resqml2:Values>1 2</resqml2:Values></resqml2:Elements>
            <resqml2:CumulativeLength xsi:type="resqml2:IntegerXmlArray"><resqml2:Values>0 2 2</resqml2:Values></resqml2:CumulativeLength>
        </resqml2:NodesPerFace>"#);
        let jagged = parse_jagged_array(&xml).expect("valid jagged");
        assert_eq!(jagged.count(), Some(3));
        let decoded: JaggedArray<i64> = jagged.integers(&MemoryDatasets::new()).expect("inline");
        assert_eq!(decoded.offsets(), &[0, 0, 2, 2]);
        assert_eq!(decoded.values(), &[1, 2]);
        assert_eq!(decoded.into_nested(), vec![vec![], vec![1, 2], vec![]]);
    }

    #[test]
    fn test_point3d_lattice() {
        let xml = doc(r#"<resqml2:Geometry HEADER xsi:type="resqml2:Point3dLatticeArray">
            <resqml2:Origin><resqml2:Coordinate1>0</resqml2:Coordinate1><resqml2:Coordinate2>0</resqml2:Coordinate2><resqml2:Coordinate3>1000</resqml2:Coordinate3></resqml2:Origin>
            <resqml2:Offset>
                <resqml2:Offset><resqml2:Coordinate1>1</resqml2:Coordinate1><resqml2:Coordinate2>0</resqml2:Coordinate2><resqml2:Coordinate3>0</resqml2:Coordinate3></resqml2:Offset>
                <resqml2:Spacing xsi:type="resqml2:DoubleConstantArray"><resqml2:Value>25</resqml2:Value><resqml2:Count>3</resqml2:Count></resqml2:Spacing>
            </resqml2:Offset>
            <resqml2:Offset>
                <resqml2:Offset><resqml2:Coordinate1>0</resqml2:Coordinate1><resqml2:Coordinate2>1</resqml2:Coordinate2><resqml2:Coordinate3>0</resqml2:Coordinate3></resqml2:Offset>
                <resqml2:Spacing xsi:type="resqml2:DoubleXmlArray"><resqml2:Values>10 20</resqml2:Values></resqml2:Spacing>
            </resqml2:Offset>
        </resqml2:Geometry>"#);
        let array = parse_point3d_array(&xml).expect("valid lattice");
        assert_eq!(array.count(), Some(12));
        let points = array.materialize(&MemoryDatasets::new()).expect("inline");
        assert_eq!(points.len(), 12);
        assert_eq!(points[0], Point3d::new(0.0, 0.0, 1000.0));
        assert_eq!(points[11], Point3d::new(75.0, 30.0, 1000.0));
    }

    #[test]
    fn test_point3d_zvalue_over_external() {
        let xml = doc(&format!(
            r#"<resqml2:Geometry HEADER xsi:type="resqml2:Point3dZValueArray">
                <resqml2:SupportingGeometry xsi:type="resqml2:Point3dHdf5Array">{}</resqml2:SupportingGeometry>
                <resqml2:ZValues xsi:type="resqml2:DoubleConstantArray"><resqml2:Value>-5</resqml2:Value><resqml2:Count>2</resqml2:Count></resqml2:ZValues>
            </resqml2:Geometry>"#,
            hdf5("Coordinates", "/RESQML/points")
        ));
        let array = parse_point3d_array(&xml).expect("valid z-value array");
        let Point3dArray::ZValue(z) = &array else {
            panic!("expected z-value array");
        };
        let Point3dArray::External(dataset) = &z.supporting_geometry else {
            panic!("expected external supporting geometry");
        };
        let mut source = MemoryDatasets::new();
        source.insert_points(
            dataset,
            vec![Point3d::new(1.0, 2.0, 0.0), Point3d::new(3.0, 4.0, 0.0)],
        );
        assert_eq!(
            array.materialize(&source).expect("stored"),
            vec![Point3d::new(1.0, 2.0, -5.0), Point3d::new(3.0, 4.0, -5.0)]
        );
        assert!(source.read_points(dataset).is_ok());
    }

    #[test]
    fn test_reference_preserved_verbatim() {
        let xml = doc(r#"<eml:Interpretation HEADER>
            <eml:ContentType>application/x-resqml+xml;version=2.0;type=obj_HorizonInterpretation</eml:ContentType>
            <eml:Title>Top reservoir</eml:Title>
            <eml:UUID>2f1b4c8e-1111-4a2b-8c3d-000000000001</eml:UUID>
            <eml:VersionString>3</eml:VersionString>
        </eml:Interpretation>"#);
        let reference = parse_reference(&xml).expect("valid reference");
        assert_eq!(reference.object_type(), Some("obj_HorizonInterpretation"));
        assert_eq!(reference.title.as_deref(), Some("Top reservoir"));
        assert_eq!(reference.version_string.as_deref(), Some("3"));
        assert_eq!(reference.uuid_authority, None);
        assert!(reference.key.as_uuid().is_some());
    }

    #[test]
    fn test_external_dataset_document() {
        let xml = doc(&hdf5("Values", "/RESQML/x").replacen(
            "<resqml2:Values>",
            "<resqml2:Values HEADER>",
            1,
        ));
        let dataset = parse_external_dataset(&xml).expect("valid dataset");
        assert_eq!(dataset.path_in_file, "/RESQML/x");
        assert_eq!(dataset.proxy.title.as_deref(), Some("Hdf Proxy"));
    }

    #[test]
    fn test_root_type_from_element_name() {
        let xml = doc(r#"<resqml2:IntegerConstantArray HEADER><resqml2:Value>4</resqml2:Value><resqml2:Count>2</resqml2:Count></resqml2:IntegerConstantArray>"#);
        let array = parse_integer_array(&xml).expect("typed by element name");
        assert_eq!(array.wire_type(), "IntegerConstantArray");
    }

    #[test]
    fn test_value_array_dispatch() {
        let xml = doc(r#"<resqml2:V HEADER xsi:type="resqml2:DoubleConstantArray"><resqml2:Value>2.5</resqml2:Value><resqml2:Count>2</resqml2:Count></resqml2:V>"#);
        let array = parse_value_array(&xml).expect("double family");
        assert_eq!(array.kind(), "double");
        assert_eq!(array.count(), Some(2));
    }

    #[test]
    fn test_unvalidated_mapping_still_reports_missing_elements() {
        let parser = ArrayParser::new(ParserConfig::new().validate(false));
        let xml = doc(r#"<resqml2:V HEADER xsi:type="resqml2:IntegerConstantArray"><resqml2:Value>4</resqml2:Value></resqml2:V>"#);
        let err = parser.parse_integer_array(&xml).expect_err("count missing");
        assert!(matches!(err, ParseError::MissingElement { ref element, .. } if element == "Count"));
    }

    #[test]
    fn test_unvalidated_wrong_family() {
        let parser = ArrayParser::new(ParserConfig::new().validate(false));
        let xml = doc(r#"<resqml2:V HEADER xsi:type="resqml2:BooleanXmlArray"><resqml2:Values>true</resqml2:Values></resqml2:V>"#);
        let err = parser.parse_integer_array(&xml).expect_err("boolean array");
        assert!(matches!(err, ParseError::InvalidSubstitution { .. }));
    }

    #[test]
    fn test_unknown_xsi_type() {
        let xml = doc(r#"<resqml2:V HEADER xsi:type="resqml2:Point3dParametricArray"/>"#);
        let err = parse_point3d_array(&xml).expect_err("not modelled");
        assert!(matches!(err, ParseError::UnknownType { .. }));
    }
}
