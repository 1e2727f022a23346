//! Parses RESQML array elements, follows their references and writes them back.
//!
//! Run with: `RUST_LOG=debug cargo run --example inspect`

use resqml::prelude::*;

const GRID_POINTS: &str = r#"<resqml2:Points
    xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2"
    xmlns:eml="http://www.energistics.org/energyml/data/commonv2"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:type="resqml2:Point3dZValueArray">
  <resqml2:SupportingGeometry xsi:type="resqml2:Point3dLatticeArray">
    <resqml2:Origin>
      <resqml2:Coordinate1>500000.0</resqml2:Coordinate1>
      <resqml2:Coordinate2>6700000.0</resqml2:Coordinate2>
      <resqml2:Coordinate3>0.0</resqml2:Coordinate3>
    </resqml2:Origin>
    <resqml2:Offset>
      <resqml2:Offset>
        <resqml2:Coordinate1>1.0</resqml2:Coordinate1>
        <resqml2:Coordinate2>0.0</resqml2:Coordinate2>
        <resqml2:Coordinate3>0.0</resqml2:Coordinate3>
      </resqml2:Offset>
      <resqml2:Spacing xsi:type="resqml2:DoubleConstantArray">
        <resqml2:Value>25.0</resqml2:Value>
        <resqml2:Count>2</resqml2:Count>
      </resqml2:Spacing>
    </resqml2:Offset>
    <resqml2:Offset>
      <resqml2:Offset>
        <resqml2:Coordinate1>0.0</resqml2:Coordinate1>
        <resqml2:Coordinate2>1.0</resqml2:Coordinate2>
        <resqml2:Coordinate3>0.0</resqml2:Coordinate3>
      </resqml2:Offset>
      <resqml2:Spacing xsi:type="resqml2:DoubleConstantArray">
        <resqml2:Value>50.0</resqml2:Value>
        <resqml2:Count>1</resqml2:Count>
      </resqml2:Spacing>
    </resqml2:Offset>
  </resqml2:SupportingGeometry>
  <resqml2:ZValues xsi:type="resqml2:DoubleHdf5Array">
    <resqml2:Values>
      <eml:PathInHdfFile>/RESQML/horizon/z</eml:PathInHdfFile>
      <eml:HdfProxy>
        <eml:ContentType>application/x-eml+xml;version=2.0;type=obj_EpcExternalPartReference</eml:ContentType>
        <eml:Title>Hdf Proxy</eml:Title>
        <eml:UUID>2b5d3a43-8b70-4d0b-9c3a-1f5f1cda2d10</eml:UUID>
      </eml:HdfProxy>
    </resqml2:Values>
  </resqml2:ZValues>
</resqml2:Points>"#;

const NODES_PER_FACE: &str = r#"<resqml2:NodesPerFace
    xmlns:resqml2="http://www.energistics.org/energyml/data/resqmlv2"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <resqml2:Elements xsi:type="resqml2:IntegerXmlArray">
    <resqml2:Values>0 1 2 2 1 3 3 1 4 5</resqml2:Values>
  </resqml2:Elements>
  <resqml2:CumulativeLength xsi:type="resqml2:IntegerXmlArray">
    <resqml2:Values>3 6 6 10</resqml2:Values>
  </resqml2:CumulativeLength>
</resqml2:NodesPerFace>"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let parser = ArrayParser::new(ParserConfig::new().max_inline_values(1 << 20));

    // Points: a lattice in XY with Z values held in an external file.
    let points = parser.parse_point3d_array(GRID_POINTS)?;
    let Point3dArray::ZValue(zvalue) = &points else {
        anyhow::bail!("expected a Z-value array, found {}", points.wire_type());
    };
    let DoubleArray::External(z_dataset) = &zvalue.z_values else {
        anyhow::bail!("expected external Z values");
    };

    let mut proxies = ObjectRegistry::new();
    proxies.register(
        z_dataset.proxy.key.clone(),
        "obj_EpcExternalPartReference",
        "horizon.h5",
    );
    let file = proxies.resolve(&z_dataset.proxy)?;
    tracing::info!(file, path = %z_dataset.path_in_file, "resolved Z values");

    let mut datasets = MemoryDatasets::new();
    datasets.insert_doubles(z_dataset, vec![-1200.0, -1210.5, -1221.0, -1198.0, -1207.5, -1219.0]);
    for (i, point) in points.materialize(&datasets)?.iter().enumerate() {
        println!("node {i}: ({:.1}, {:.1}, {:.1})", point.x, point.y, point.z);
    }

    // Faces: a jagged array of node indices, one face per sub-list.
    let faces = parser.parse_jagged_array(NODES_PER_FACE)?;
    let faces = faces.integers(&datasets)?;
    for (i, nodes) in faces.iter().enumerate() {
        println!("face {i}: {nodes:?}");
    }

    let shape = PillarShape::parse_wire("straight")?;
    println!("pillar shape: {shape} ({})", PillarShape::TYPE_NAME);

    let writer = XmlWriter::new(WriterConfig::new().indent(2).declaration(true));
    println!("{}", writer.write_point3d_array("Points", &points)?);
    Ok(())
}
