use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh.
    pub struct VertexId;
}

/// Role of a vertex in the downward plane sweep.
///
/// Assigned by the partitioner; the set of roles is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Both neighbours below, interior angle below pi.
    Start,
    /// Both neighbours below, interior angle above pi.
    Split,
    /// Both neighbours above, interior angle below pi.
    End,
    /// Both neighbours above, interior angle above pi.
    Merge,
    /// On the left chain: the interior lies to the right of the vertex.
    RegularLeft,
    /// On the right chain: the interior lies to the left of the vertex.
    RegularRight,
}

/// Data associated with a mesh vertex.
///
/// The position never changes after construction.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Position of the vertex in the input polygon.
    pub index: usize,
    /// One half-edge whose origin is this vertex.
    pub incident_edge: Option<HalfEdgeId>,
    /// Sweep role, set during monotone partitioning.
    pub kind: Option<VertexKind>,
}

impl VertexData {
    /// Creates a new, unconnected vertex.
    #[must_use]
    pub fn new(point: Point2, index: usize) -> Self {
        Self {
            point,
            index,
            incident_edge: None,
            kind: None,
        }
    }
}
