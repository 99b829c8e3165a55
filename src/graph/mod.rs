mod dual_graph;

pub use dual_graph::{BuildDualGraph, DualGraph, DualVertexData, DualVertexId, Portal};
