use crate::error::TopologyError;

use super::{FaceId, HalfEdgeId, Mesh, VertexId};

/// Lazy walk around one boundary cycle, following `next` links.
///
/// Yields every half-edge of the cycle once, starting with the one it was
/// created from. A clone taken before iterating replays the same cycle.
#[derive(Debug, Clone)]
pub struct FaceBoundary<'a> {
    mesh: &'a Mesh,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    budget: usize,
}

impl Iterator for FaceBoundary<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let current = self.current?;
        if self.budget == 0 {
            self.current = None;
            return None;
        }
        self.budget -= 1;
        self.current = self
            .mesh
            .half_edges
            .get(current)
            .map(|e| e.next)
            .filter(|&next| next != self.start);
        Some(current)
    }
}

/// Walk over the half-edges leaving a vertex, rotating through `twin(prev(e))`.
#[derive(Debug, Clone)]
pub struct Outgoing<'a> {
    mesh: &'a Mesh,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    budget: usize,
}

impl Iterator for Outgoing<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let current = self.current?;
        if self.budget == 0 {
            self.current = None;
            return None;
        }
        self.budget -= 1;
        self.current = self
            .mesh
            .half_edges
            .get(current)
            .and_then(|e| self.mesh.half_edges.get(e.prev))
            .map(|p| p.twin)
            .filter(|&next| next != self.start);
        Some(current)
    }
}

impl Mesh {
    /// Walks the boundary of a bounded face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or unbounded.
    pub fn boundary(&self, face: FaceId) -> Result<FaceBoundary<'_>, TopologyError> {
        let start = self
            .face(face)?
            .outer_component
            .ok_or_else(|| TopologyError::InvalidTopology("unbounded face has no outer boundary".into()))?;
        Ok(self.boundary_from(start))
    }

    /// Walks the cycle containing `start`.
    ///
    /// The walk never yields more items than the mesh has half-edges,
    /// so a corrupted cycle still terminates.
    #[must_use]
    pub fn boundary_from(&self, start: HalfEdgeId) -> FaceBoundary<'_> {
        FaceBoundary {
            mesh: self,
            start,
            current: Some(start),
            budget: self.half_edges.len(),
        }
    }

    /// Walks the half-edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is missing or has no incident edge.
    pub fn outgoing(&self, vertex: VertexId) -> Result<Outgoing<'_>, TopologyError> {
        let start = self
            .vertex(vertex)?
            .incident_edge
            .ok_or_else(|| TopologyError::InvalidTopology("vertex has no incident edge".into()))?;
        Ok(Outgoing {
            mesh: self,
            start,
            current: Some(start),
            budget: self.half_edges.len(),
        })
    }

    /// The half-edge leaving `vertex` whose incident face is `face`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotOnFace`] if `vertex` is not on the face boundary.
    pub fn outgoing_on_face(&self, vertex: VertexId, face: FaceId) -> Result<HalfEdgeId, TopologyError> {
        for edge in self.outgoing(vertex)? {
            if self.incident_face(edge)? == face {
                return Ok(edge);
            }
        }
        Err(TopologyError::NotOnFace(vertex))
    }
}
