use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the mesh.
    pub struct HalfEdgeId;
}

/// One direction of a boundary segment.
///
/// The owning face lies to the left of the half-edge.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdgeData {
    /// Vertex the half-edge leaves from.
    pub origin: VertexId,
    /// The opposite half-edge of the same segment.
    pub twin: HalfEdgeId,
    /// Next half-edge around the face.
    pub next: HalfEdgeId,
    /// Previous half-edge around the face.
    pub prev: HalfEdgeId,
    /// Face bounded by this half-edge.
    pub face: FaceId,
}

impl HalfEdgeData {
    /// Creates a half-edge whose links are filled in later.
    #[must_use]
    pub fn new(origin: VertexId, face: FaceId) -> Self {
        Self {
            origin,
            twin: HalfEdgeId::default(),
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
            face,
        }
    }
}
