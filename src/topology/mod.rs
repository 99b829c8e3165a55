pub mod face;
pub mod half_edge;
pub mod vertex;

mod build;
mod split;
mod validate;
mod walk;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use vertex::{VertexData, VertexId, VertexKind};
pub use walk::{FaceBoundary, Outgoing};

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Half-edge planar subdivision.
///
/// Vertices, half-edges and faces live in arenas and reference each
/// other via typed IDs (generational indices), so the cyclic
/// twin/next/prev graph needs no shared ownership.
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    outer_face: Option<FaceId>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The unbounded face, if the mesh has been built.
    #[must_use]
    pub fn outer_face(&self) -> Option<FaceId> {
        self.outer_face
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges (twice the number of segments).
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of faces, including the unbounded one.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    /// Iterates over the bounded faces.
    pub fn inner_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces
            .iter()
            .filter(|(_, face)| !face.is_unbounded())
            .map(|(id, _)| id)
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn point(&self, id: VertexId) -> Result<Point2, TopologyError> {
        Ok(self.vertex(id)?.point)
    }

    // --- Half-edge operations ---

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// The next half-edge around the same face.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn next(&self, id: HalfEdgeId) -> Result<HalfEdgeId, TopologyError> {
        Ok(self.half_edge(id)?.next)
    }

    /// The previous half-edge around the same face.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn prev(&self, id: HalfEdgeId) -> Result<HalfEdgeId, TopologyError> {
        Ok(self.half_edge(id)?.prev)
    }

    /// The opposite half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn twin(&self, id: HalfEdgeId) -> Result<HalfEdgeId, TopologyError> {
        Ok(self.half_edge(id)?.twin)
    }

    /// Origin vertex of a half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn origin(&self, id: HalfEdgeId) -> Result<VertexId, TopologyError> {
        Ok(self.half_edge(id)?.origin)
    }

    /// Destination vertex of a half-edge (origin of its twin).
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its twin is not found.
    pub fn destination(&self, id: HalfEdgeId) -> Result<VertexId, TopologyError> {
        self.origin(self.twin(id)?)
    }

    /// Face to the left of a half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found.
    pub fn incident_face(&self, id: HalfEdgeId) -> Result<FaceId, TopologyError> {
        Ok(self.half_edge(id)?.face)
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Vertices around a bounded face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found or is unbounded.
    pub fn face_vertices(&self, id: FaceId) -> Result<Vec<VertexId>, TopologyError> {
        self.boundary(id)?
            .map(|edge| self.origin(edge))
            .collect()
    }

    /// Positions of the vertices around a bounded face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found or is unbounded.
    pub fn face_points(&self, id: FaceId) -> Result<Vec<Point2>, TopologyError> {
        self.face_vertices(id)?
            .into_iter()
            .map(|v| self.point(v))
            .collect()
    }
}
