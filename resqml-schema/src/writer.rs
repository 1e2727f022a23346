//! XML writer for RESQML array elements.
//!
//! Typed arrays are first turned into an [`XmlNode`] tree in the wire form the
//! parser accepts, then serialized with `quick_xml::Writer`. Namespace
//! declarations are emitted once, on the root element.

use crate::config::WriterConfig;
use crate::error::WriteError;
use crate::lexical::{format_boolean, format_double};
use crate::namespace::{COMMON_NS, QualifiedName, RESQML_NS, XSI_NS};
use crate::node::XmlNode;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use resqml_core::{
    BooleanArray, DataObjectReference, DoubleArray, ExternalDataset, IntegerArray, LatticeArray,
    LatticeScalar, Point3d, Point3dArray, ResqmlJaggedArray, StringArray, ValueArray,
};
use std::fmt::Display;

/// Writer for RESQML array documents.
#[derive(Debug, Clone, Default)]
pub struct XmlWriter {
    config: WriterConfig,
}

impl XmlWriter {
    /// Creates a writer.
    #[must_use]
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Returns the writer configuration.
    #[must_use]
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Writes an integer array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if the array has no wire form.
    pub fn write_integer_array(&self, name: &str, array: &IntegerArray) -> Result<String, WriteError> {
        self.write_node(&integer_array_node(resqml(name), array)?)
    }

    /// Writes a double array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if the array has no wire form.
    pub fn write_double_array(&self, name: &str, array: &DoubleArray) -> Result<String, WriteError> {
        self.write_node(&double_array_node(resqml(name), array)?)
    }

    /// Writes a boolean array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if the array has no wire form.
    pub fn write_boolean_array(&self, name: &str, array: &BooleanArray) -> Result<String, WriteError> {
        self.write_node(&boolean_array_node(resqml(name), array)?)
    }

    /// Writes a string array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if serialization fails.
    pub fn write_string_array(&self, name: &str, array: &StringArray) -> Result<String, WriteError> {
        self.write_node(&string_array_node(resqml(name), array))
    }

    /// Writes any value array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if the array has no wire form.
    pub fn write_value_array(&self, name: &str, array: &ValueArray) -> Result<String, WriteError> {
        self.write_node(&value_array_node(resqml(name), array)?)
    }

    /// Writes a jagged array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if either part has no wire form.
    pub fn write_jagged_array(
        &self,
        name: &str,
        array: &ResqmlJaggedArray,
    ) -> Result<String, WriteError> {
        self.write_node(&jagged_array_node(resqml(name), array)?)
    }

    /// Writes a point array as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if the array has no wire form.
    pub fn write_point3d_array(&self, name: &str, array: &Point3dArray) -> Result<String, WriteError> {
        self.write_node(&point3d_array_node(resqml(name), array)?)
    }

    /// Writes a data object reference as the common-namespace element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if serialization fails.
    pub fn write_reference(
        &self,
        name: &str,
        reference: &DataObjectReference,
    ) -> Result<String, WriteError> {
        self.write_node(&reference_node(common(name), reference))
    }

    /// Writes an external dataset handle as the element `name`.
    ///
    /// # Errors
    /// Returns `WriteError` if serialization fails.
    pub fn write_external_dataset(
        &self,
        name: &str,
        dataset: &ExternalDataset,
    ) -> Result<String, WriteError> {
        self.write_node(&dataset_node(resqml(name), dataset))
    }

    /// Serializes an element tree.
    ///
    /// # Errors
    /// Returns `WriteError` if the underlying writer fails.
    pub fn write_node(&self, node: &XmlNode) -> Result<String, WriteError> {
        let prefixes = self.prefixes(node);
        let mut writer = match self.config.indent_width() {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };
        if self.config.has_declaration() {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        write_element(&mut writer, node, &prefixes, true)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Assigns a prefix to every namespace used in the tree.
    fn prefixes(&self, root: &XmlNode) -> Vec<(String, String)> {
        let mut namespaces = Vec::new();
        collect_namespaces(root, &mut namespaces);

        let mut generated = 0usize;
        namespaces
            .into_iter()
            .map(|uri| {
                let prefix = match uri.as_str() {
                    RESQML_NS => self.config.resqml_prefix_str().to_string(),
                    COMMON_NS => self.config.common_prefix_str().to_string(),
                    XSI_NS => "xsi".to_string(),
                    _ => {
                        generated += 1;
                        format!("ns{generated}")
                    }
                };
                (uri, prefix)
            })
            .collect()
    }
}

fn collect_namespaces(node: &XmlNode, out: &mut Vec<String>) {
    let mut add = |namespace: Option<&String>| {
        if let Some(ns) = namespace
            && !out.contains(ns)
        {
            out.push(ns.clone());
        }
    };
    add(node.name.namespace.as_ref());
    if let Some(xsi_type) = &node.xsi_type {
        add(Some(&XSI_NS.to_string()));
        add(xsi_type.namespace.as_ref());
    }
    for attribute in &node.attributes {
        add(attribute.name.namespace.as_ref());
    }
    for child in &node.children {
        collect_namespaces(child, out);
    }
}

fn qualify(name: &QualifiedName, prefixes: &[(String, String)]) -> String {
    let prefix = name
        .namespace
        .as_deref()
        .and_then(|ns| prefixes.iter().find(|(uri, _)| uri == ns))
        .map(|(_, prefix)| prefix.as_str());
    match prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.clone(),
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
    prefixes: &[(String, String)],
    is_root: bool,
) -> Result<(), WriteError> {
    let name = qualify(&node.name, prefixes);
    let mut start = BytesStart::new(name.as_str());
    if is_root {
        for (uri, prefix) in prefixes {
            let key = format!("xmlns:{prefix}");
            start.push_attribute((key.as_str(), uri.as_str()));
        }
    }
    if let Some(xsi_type) = &node.xsi_type {
        let value = qualify(xsi_type, prefixes);
        start.push_attribute(("xsi:type", value.as_str()));
    }
    for attribute in &node.attributes {
        let key = qualify(&attribute.name, prefixes);
        start.push_attribute((key.as_str(), attribute.value.as_str()));
    }

    if node.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !node.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&node.text)))?;
    }
    for child in &node.children {
        write_element(writer, child, prefixes, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    Ok(())
}

fn resqml(local: &str) -> QualifiedName {
    QualifiedName::new(Some(RESQML_NS), local)
}

fn common(local: &str) -> QualifiedName {
    QualifiedName::new(Some(COMMON_NS), local)
}

fn typed(name: QualifiedName, wire_type: &str) -> XmlNode {
    XmlNode::new(name).with_xsi_type(resqml(wire_type))
}

fn leaf(name: QualifiedName, text: impl Display) -> XmlNode {
    XmlNode::new(name).with_text(text.to_string())
}

fn join<T>(values: &[T], format: impl Fn(&T) -> String) -> String {
    values.iter().map(format).collect::<Vec<_>>().join(" ")
}

fn positive_count(wire_type: &str, count: usize) -> Result<usize, WriteError> {
    if count == 0 {
        return Err(WriteError::unrepresentable(wire_type, "Count must be positive"));
    }
    Ok(count)
}

/// Appends `StartValue` and one regular `Offset` per axis.
fn lattice_children<T: LatticeScalar>(
    mut node: XmlNode,
    wire_type: &str,
    lattice: &LatticeArray<T>,
    format: impl Fn(T) -> String,
) -> Result<XmlNode, WriteError> {
    if lattice.axes().is_empty() {
        return Err(WriteError::unrepresentable(wire_type, "a lattice needs at least one axis"));
    }
    node.push_child(leaf(resqml("StartValue"), format(lattice.origin())));
    for (dimension, axis) in lattice.axes().iter().enumerate() {
        let step = axis.step().ok_or_else(|| {
            WriteError::unrepresentable(
                wire_type,
                format!("axis {dimension} has irregular spacing"),
            )
        })?;
        let steps = axis.count().checked_sub(1).filter(|&s| s > 0).ok_or_else(|| {
            WriteError::unrepresentable(
                wire_type,
                format!("axis {dimension} needs at least two elements"),
            )
        })?;
        node.push_child(
            XmlNode::new(resqml("Offset"))
                .with_child(leaf(resqml("Value"), format(step)))
                .with_child(leaf(resqml("Count"), steps)),
        );
    }
    Ok(node)
}

fn integer_array_node(name: QualifiedName, array: &IntegerArray) -> Result<XmlNode, WriteError> {
    let wire_type = array.wire_type();
    let node = typed(name, wire_type);
    Ok(match array {
        IntegerArray::Constant(c) => node
            .with_child(leaf(resqml("Value"), c.value))
            .with_child(leaf(resqml("Count"), positive_count(wire_type, c.count)?)),
        IntegerArray::Range(r) => node
            .with_child(leaf(resqml("Count"), positive_count(wire_type, r.count)?))
            .with_child(leaf(resqml("Value"), r.value)),
        IntegerArray::Lattice(l) => lattice_children(node, wire_type, l, |v| v.to_string())?,
        IntegerArray::Xml(values) => {
            node.with_child(leaf(resqml("Values"), join(values, i64::to_string)))
        }
        IntegerArray::External(e) => node
            .with_child(leaf(resqml("NullValue"), e.null_value))
            .with_child(dataset_node(resqml("Values"), &e.values)),
    })
}

fn double_array_node(name: QualifiedName, array: &DoubleArray) -> Result<XmlNode, WriteError> {
    let wire_type = array.wire_type();
    let node = typed(name, wire_type);
    Ok(match array {
        DoubleArray::Constant(c) => node
            .with_child(leaf(resqml("Value"), format_double(c.value)))
            .with_child(leaf(resqml("Count"), positive_count(wire_type, c.count)?)),
        DoubleArray::Lattice(l) => lattice_children(node, wire_type, l, format_double)?,
        DoubleArray::Xml(values) => {
            node.with_child(leaf(resqml("Values"), join(values, |v| format_double(*v))))
        }
        DoubleArray::External(e) => node.with_child(dataset_node(resqml("Values"), e)),
    })
}

fn boolean_array_node(name: QualifiedName, array: &BooleanArray) -> Result<XmlNode, WriteError> {
    let wire_type = array.wire_type();
    let node = typed(name, wire_type);
    Ok(match array {
        BooleanArray::Constant(c) => node
            .with_child(leaf(resqml("Value"), format_boolean(c.value)))
            .with_child(leaf(resqml("Count"), positive_count(wire_type, c.count)?)),
        BooleanArray::Xml(values) => node.with_child(leaf(
            resqml("Values"),
            join(values, |v| format_boolean(*v).to_string()),
        )),
        BooleanArray::External(e) => node.with_child(dataset_node(resqml("Values"), e)),
    })
}

fn string_array_node(name: QualifiedName, array: &StringArray) -> XmlNode {
    let mut node = typed(name, array.wire_type());
    match array {
        StringArray::Xml(values) => {
            for value in values {
                node.push_child(leaf(resqml("Values"), value));
            }
        }
        StringArray::External(e) => node.push_child(dataset_node(resqml("Values"), e)),
    }
    node
}

fn value_array_node(name: QualifiedName, array: &ValueArray) -> Result<XmlNode, WriteError> {
    match array {
        ValueArray::Integer(a) => integer_array_node(name, a),
        ValueArray::Double(a) => double_array_node(name, a),
        ValueArray::Boolean(a) => boolean_array_node(name, a),
        ValueArray::String(a) => Ok(string_array_node(name, a)),
    }
}

fn jagged_array_node(name: QualifiedName, array: &ResqmlJaggedArray) -> Result<XmlNode, WriteError> {
    Ok(XmlNode::new(name)
        .with_child(value_array_node(resqml("Elements"), &array.elements)?)
        .with_child(integer_array_node(
            resqml("CumulativeLength"),
            &array.cumulative_length,
        )?))
}

fn point3d_node(name: QualifiedName, point: Point3d) -> XmlNode {
    XmlNode::new(name)
        .with_child(leaf(resqml("Coordinate1"), format_double(point.x)))
        .with_child(leaf(resqml("Coordinate2"), format_double(point.y)))
        .with_child(leaf(resqml("Coordinate3"), format_double(point.z)))
}

fn point3d_array_node(name: QualifiedName, array: &Point3dArray) -> Result<XmlNode, WriteError> {
    let node = typed(name, array.wire_type());
    Ok(match array {
        Point3dArray::External(e) => node.with_child(dataset_node(resqml("Coordinates"), e)),
        Point3dArray::Lattice(l) => {
            let mut node = node.with_child(point3d_node(resqml("Origin"), l.origin));
            for offset in &l.offsets {
                node.push_child(
                    XmlNode::new(resqml("Offset"))
                        .with_child(point3d_node(resqml("Offset"), offset.offset))
                        .with_child(double_array_node(resqml("Spacing"), &offset.spacing)?),
                );
            }
            node
        }
        Point3dArray::ZValue(z) => node
            .with_child(point3d_array_node(
                resqml("SupportingGeometry"),
                &z.supporting_geometry,
            )?)
            .with_child(double_array_node(resqml("ZValues"), &z.z_values)?),
    })
}

fn dataset_node(name: QualifiedName, dataset: &ExternalDataset) -> XmlNode {
    XmlNode::new(name)
        .with_child(leaf(common("PathInHdfFile"), &dataset.path_in_file))
        .with_child(reference_node(common("HdfProxy"), &dataset.proxy))
}

fn reference_node(name: QualifiedName, reference: &DataObjectReference) -> XmlNode {
    let mut node =
        XmlNode::new(name).with_child(leaf(common("ContentType"), &reference.content_type));
    if let Some(title) = &reference.title {
        node.push_child(leaf(common("Title"), title));
    }
    node.push_child(leaf(common("UUID"), &reference.key));
    if let Some(authority) = &reference.uuid_authority {
        node.push_child(leaf(common("UuidAuthority"), authority));
    }
    if let Some(version) = &reference.version_string {
        node.push_child(leaf(common("VersionString"), version));
    }
    node
}
