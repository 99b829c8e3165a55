use slotmap::SlotMap;
use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::topology::{FaceId, HalfEdgeId, Mesh};

slotmap::new_key_type! {
    /// Unique identifier for a vertex of the dual graph.
    pub struct DualVertexId;
}

/// A shared diagonal between two adjacent triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal {
    /// The triangle on the other side.
    pub neighbor: DualVertexId,
    /// The half-edge on this side; its twin bounds the neighbour.
    pub edge: HalfEdgeId,
}

/// One triangle of the mesh seen as a graph node.
#[derive(Debug, Clone)]
pub struct DualVertexData {
    /// The triangular face.
    pub face: FaceId,
    /// Adjacent triangles, one portal per shared diagonal.
    pub portals: Vec<Portal>,
}

/// Triangle adjacency graph layered over a triangulated [`Mesh`].
///
/// Edges exist only across internal diagonals; polygon boundary edges
/// border the unbounded face and produce no neighbour.
#[derive(Debug, Default)]
pub struct DualGraph {
    vertices: SlotMap<DualVertexId, DualVertexData>,
}

impl DualGraph {
    /// Number of dual vertices (triangles).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected dual edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.portals.len()).sum::<usize>() / 2
    }

    /// Iterates over all dual vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = DualVertexId> + '_ {
        self.vertices.keys()
    }

    /// Returns a reference to the dual vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn vertex(&self, id: DualVertexId) -> std::result::Result<&DualVertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("dual vertex".into()))
    }

    /// Triangles adjacent to `id` across a diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the dual vertex is not found.
    pub fn neighbors(&self, id: DualVertexId) -> std::result::Result<Vec<DualVertexId>, TopologyError> {
        Ok(self.vertex(id)?.portals.iter().map(|p| p.neighbor).collect())
    }
}

/// Builds the dual graph of a set of triangular faces.
pub struct BuildDualGraph {
    triangles: Vec<FaceId>,
}

impl BuildDualGraph {
    /// Creates a new `BuildDualGraph` operation.
    #[must_use]
    pub fn new(triangles: Vec<FaceId>) -> Self {
        Self { triangles }
    }

    /// Executes the operation, tagging every triangle with its dual vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is missing or is not a triangle.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<DualGraph> {
        let faces: Vec<FaceId> = mesh.inner_faces().collect();
        for face in faces {
            mesh.face_mut(face)?.dual_vertex = None;
        }

        let mut graph = DualGraph::default();
        for &face in &self.triangles {
            if mesh.boundary(face)?.count() != 3 {
                return Err(TopologyError::InvalidTopology("dual graph face is not a triangle".into()).into());
            }
            let id = graph.vertices.insert(DualVertexData {
                face,
                portals: Vec::with_capacity(3),
            });
            mesh.face_mut(face)?.dual_vertex = Some(id);
        }

        for &face in &self.triangles {
            let Some(this) = mesh.face(face)?.dual_vertex else {
                continue;
            };
            let edges: Vec<HalfEdgeId> = mesh.boundary(face)?.collect();
            for edge in edges {
                let other = mesh.incident_face(mesh.twin(edge)?)?;
                if let Some(neighbor) = mesh.face(other)?.dual_vertex {
                    if let Some(vertex) = graph.vertices.get_mut(this) {
                        vertex.portals.push(Portal { neighbor, edge });
                    }
                }
            }
        }

        debug!(
            triangles = graph.vertex_count(),
            edges = graph.edge_count(),
            "built dual graph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn split_square() -> (Mesh, Vec<FaceId>) {
        let (mut mesh, face) = Mesh::from_polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        let vs = mesh.face_vertices(face).unwrap();
        let other = mesh.split_face(face, vs[0], vs[2]).unwrap();
        (mesh, vec![face, other])
    }

    #[test]
    fn square_has_one_dual_edge() {
        let (mut mesh, triangles) = split_square();
        let graph = BuildDualGraph::new(triangles.clone()).execute(&mut mesh).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = mesh.face(triangles[0]).unwrap().dual_vertex.unwrap();
        let b = mesh.face(triangles[1]).unwrap().dual_vertex.unwrap();
        assert_eq!(graph.neighbors(a).unwrap(), vec![b]);
        assert_eq!(graph.neighbors(b).unwrap(), vec![a]);
    }

    #[test]
    fn portals_are_twins() {
        let (mut mesh, triangles) = split_square();
        let graph = BuildDualGraph::new(triangles).execute(&mut mesh).unwrap();
        let ids: Vec<_> = graph.vertex_ids().collect();
        let pa = graph.vertex(ids[0]).unwrap().portals[0];
        let pb = graph.vertex(ids[1]).unwrap().portals[0];
        assert_eq!(mesh.twin(pa.edge).unwrap(), pb.edge);
        assert_eq!(mesh.incident_face(pa.edge).unwrap(), graph.vertex(ids[0]).unwrap().face);
    }

    #[test]
    fn rejects_non_triangles() {
        let (mut mesh, face) = Mesh::from_polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(BuildDualGraph::new(vec![face]).execute(&mut mesh).is_err());
    }
}
