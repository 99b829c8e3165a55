use crate::graph::DualVertexId;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the mesh.
    pub struct FaceId;
}

/// Data associated with a face of the subdivision.
///
/// Bounded faces are reached through `outer_component`; the single
/// unbounded face has none and lists its boundary cycles instead.
#[derive(Debug, Clone, Default)]
pub struct FaceData {
    /// One half-edge on the outer boundary of a bounded face.
    pub outer_component: Option<HalfEdgeId>,
    /// Boundary cycles of the unbounded face.
    pub inner_components: Vec<HalfEdgeId>,
    /// Dual-graph vertex, set once the face is a triangle in a dual graph.
    pub dual_vertex: Option<DualVertexId>,
}

impl FaceData {
    /// Creates the unbounded face.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns `true` for the unbounded face.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.outer_component.is_none()
    }
}
