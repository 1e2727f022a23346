//! RESQML enumeration tables.
//!
//! Every table is closed and carries its wire tokens verbatim, embedded
//! spaces included. Parsing is case-sensitive.

use resqml_derive::WireEnum;

/// Relation of a stratigraphic boundary to the units it separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "BoundaryRelation")]
pub enum BoundaryRelation {
    #[wire(rename = "conformable")]
    Conformable,
    #[wire(rename = "unconformable below and above")]
    UnconformableBelowAndAbove,
    #[wire(rename = "unconformable above")]
    UnconformableAbove,
    #[wire(rename = "unconformable below")]
    UnconformableBelow,
}

/// Shape of the cells of an unstructured or structured grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "CellShape")]
pub enum CellShape {
    #[wire(rename = "tetrahedral")]
    Tetrahedral,
    #[wire(rename = "pyramidal")]
    Pyramidal,
    #[wire(rename = "prism")]
    Prism,
    #[wire(rename = "hexahedral")]
    Hexahedral,
    #[wire(rename = "polyhedral")]
    Polyhedral,
}

/// Geometric mode of a contact between two features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "ContactMode")]
pub enum ContactMode {
    #[wire(rename = "baselap")]
    Baselap,
    #[wire(rename = "erosion")]
    Erosion,
    #[wire(rename = "extended")]
    Extended,
    #[wire(rename = "proportional")]
    Proportional,
}

/// Side of a contact a feature lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "ContactSide")]
pub enum ContactSide {
    #[wire(rename = "footwall")]
    Footwall,
    #[wire(rename = "hanging wall")]
    HangingWall,
    #[wire(rename = "north")]
    North,
    #[wire(rename = "south")]
    South,
    #[wire(rename = "east")]
    East,
    #[wire(rename = "west")]
    West,
    #[wire(rename = "younger")]
    Younger,
    #[wire(rename = "older")]
    Older,
    #[wire(rename = "both")]
    Both,
}

/// Relation verb of a binary contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "ContactVerb")]
pub enum ContactVerb {
    #[wire(rename = "splits")]
    Splits,
    #[wire(rename = "interrupts")]
    Interrupts,
    #[wire(rename = "contains")]
    Contains,
    #[wire(rename = "erodes")]
    Erodes,
    #[wire(rename = "stops at")]
    StopsAt,
    #[wire(rename = "crosses")]
    Crosses,
    #[wire(rename = "includes")]
    Includes,
}

/// Vertical domain of an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "Domain")]
pub enum Domain {
    #[wire(rename = "depth")]
    Depth,
    #[wire(rename = "time")]
    Time,
    #[wire(rename = "mixed")]
    Mixed,
}

/// Kind of a genetic boundary feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "GeologicBoundaryKind")]
pub enum GeologicBoundaryKind {
    #[wire(rename = "fault")]
    Fault,
    #[wire(rename = "geobody")]
    Geobody,
    #[wire(rename = "horizon")]
    Horizon,
}

/// Elements of a representation that properties and subsets can index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "IndexableElements")]
pub enum IndexableElements {
    #[wire(rename = "cells")]
    Cells,
    #[wire(rename = "column edges")]
    ColumnEdges,
    #[wire(rename = "columns")]
    Columns,
    #[wire(rename = "contacts")]
    Contacts,
    #[wire(rename = "coordinate lines")]
    CoordinateLines,
    #[wire(rename = "edges")]
    Edges,
    #[wire(rename = "edges per column")]
    EdgesPerColumn,
    #[wire(rename = "enumerated elements")]
    EnumeratedElements,
    #[wire(rename = "faces")]
    Faces,
    #[wire(rename = "faces per cell")]
    FacesPerCell,
    #[wire(rename = "interval edges")]
    IntervalEdges,
    #[wire(rename = "intervals")]
    Intervals,
    #[wire(rename = "I0")]
    I0,
    #[wire(rename = "I0 edges")]
    I0Edges,
    #[wire(rename = "J0")]
    J0,
    #[wire(rename = "J0 edges")]
    J0Edges,
    #[wire(rename = "layers")]
    Layers,
    #[wire(rename = "nodes")]
    Nodes,
    #[wire(rename = "nodes per cell")]
    NodesPerCell,
    #[wire(rename = "nodes per edge")]
    NodesPerEdge,
    #[wire(rename = "nodes per face")]
    NodesPerFace,
    #[wire(rename = "patches")]
    Patches,
    #[wire(rename = "pillars")]
    Pillars,
    #[wire(rename = "regions")]
    Regions,
    #[wire(rename = "representation")]
    Representation,
    #[wire(rename = "subnodes")]
    Subnodes,
    #[wire(rename = "triangles")]
    Triangles,
}

/// Direction of increasing K in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "KDirection")]
pub enum KDirection {
    #[wire(rename = "down")]
    Down,
    #[wire(rename = "up")]
    Up,
    #[wire(rename = "not monotonic")]
    NotMonotonic,
}

/// Role of a polyline in an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "LineRole")]
pub enum LineRole {
    #[wire(rename = "fault center line")]
    FaultCenterLine,
    #[wire(rename = "pick")]
    Pick,
    #[wire(rename = "inner ring")]
    InnerRing,
    #[wire(rename = "outer ring")]
    OuterRing,
    #[wire(rename = "trajectory")]
    Trajectory,
    #[wire(rename = "interpretation line")]
    InterpretationLine,
    #[wire(rename = "contact")]
    Contact,
    #[wire(rename = "depositional line")]
    DepositionalLine,
    #[wire(rename = "erosion line")]
    ErosionLine,
    #[wire(rename = "contouring")]
    Contouring,
    #[wire(rename = "pillar")]
    Pillar,
}

/// Criterion used to order features in an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "OrderingCriteria")]
pub enum OrderingCriteria {
    #[wire(rename = "age")]
    Age,
    #[wire(rename = "apparent depth")]
    ApparentDepth,
    #[wire(rename = "measured depth")]
    MeasuredDepth,
}

/// Most complex pillar shape of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "PillarShape")]
pub enum PillarShape {
    #[wire(rename = "vertical")]
    Vertical,
    #[wire(rename = "straight")]
    Straight,
    #[wire(rename = "curved")]
    Curved,
}

/// Fluid phase of a rock fluid unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "Phase")]
pub enum Phase {
    #[wire(rename = "aquifer")]
    Aquifer,
    #[wire(rename = "gas cap")]
    GasCap,
    #[wire(rename = "oil column")]
    OilColumn,
    #[wire(rename = "seal")]
    Seal,
}

/// Role of a surface representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "SurfaceRole")]
pub enum SurfaceRole {
    #[wire(rename = "map")]
    Map,
    #[wire(rename = "pick")]
    Pick,
}

/// Kind of throw of a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "ThrowKind")]
pub enum ThrowKind {
    #[wire(rename = "reverse")]
    Reverse,
    #[wire(rename = "normal")]
    Normal,
    #[wire(rename = "thrust")]
    Thrust,
    #[wire(rename = "strike-slip")]
    StrikeSlip,
    #[wire(rename = "scissor")]
    Scissor,
    #[wire(rename = "variable")]
    Variable,
}

/// Property kinds from the RESQML property-kind dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
#[wire(type_name = "ResqmlPropertyKind")]
pub enum ResqmlPropertyKind {
    #[wire(rename = "absorbed dose")]
    AbsorbedDose,
    #[wire(rename = "acceleration linear")]
    AccelerationLinear,
    #[wire(rename = "amount of substance")]
    AmountOfSubstance,
    #[wire(rename = "angle per length")]
    AnglePerLength,
    #[wire(rename = "area")]
    Area,
    #[wire(rename = "categorical")]
    Categorical,
    #[wire(rename = "cell length")]
    CellLength,
    #[wire(rename = "continuous")]
    Continuous,
    #[wire(rename = "density")]
    Density,
    #[wire(rename = "depth")]
    Depth,
    #[wire(rename = "discrete")]
    Discrete,
    #[wire(rename = "dynamic viscosity")]
    DynamicViscosity,
    #[wire(rename = "electric conductivity")]
    ElectricConductivity,
    #[wire(rename = "geological k")]
    GeologicalK,
    #[wire(rename = "length")]
    Length,
    #[wire(rename = "mass")]
    Mass,
    #[wire(rename = "net to gross ratio")]
    NetToGrossRatio,
    #[wire(rename = "permeability rock")]
    PermeabilityRock,
    #[wire(rename = "porosity")]
    Porosity,
    #[wire(rename = "pressure")]
    Pressure,
    #[wire(rename = "saturation")]
    Saturation,
    #[wire(rename = "temperature")]
    Temperature,
    #[wire(rename = "thickness")]
    Thickness,
    #[wire(rename = "transmissibility")]
    Transmissibility,
    #[wire(rename = "volume")]
    Volume,
}
