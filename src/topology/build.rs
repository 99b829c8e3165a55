use crate::error::PolygonError;
use crate::math::Point2;

use super::{FaceData, FaceId, HalfEdgeData, HalfEdgeId, Mesh, VertexData, VertexId};

impl Mesh {
    /// Builds the two-face subdivision of a simple polygon.
    ///
    /// `points` must be in counter-clockwise order (interior to the left).
    /// The result has one bounded face for the interior and one unbounded
    /// face; returns `(mesh, interior_face)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewVertices`] if fewer than three points are given.
    pub fn from_polygon(points: &[Point2]) -> Result<(Self, FaceId), PolygonError> {
        let n = points.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices { count: n });
        }

        let mut mesh = Self::new();
        let inner = mesh.add_face(FaceData::default());
        let outer = mesh.add_face(FaceData::unbounded());

        let vertices: Vec<VertexId> = points
            .iter()
            .enumerate()
            .map(|(i, p)| mesh.add_vertex(VertexData::new(*p, i)))
            .collect();

        // inner[i]: v[i] -> v[i+1] on the interior; outer[i] is its twin.
        let inner_edges: Vec<HalfEdgeId> = (0..n)
            .map(|i| mesh.half_edges.insert(HalfEdgeData::new(vertices[i], inner)))
            .collect();
        let outer_edges: Vec<HalfEdgeId> = (0..n)
            .map(|i| {
                mesh.half_edges
                    .insert(HalfEdgeData::new(vertices[(i + 1) % n], outer))
            })
            .collect();

        for i in 0..n {
            let succ = (i + 1) % n;
            let pred = (i + n - 1) % n;

            let e = &mut mesh.half_edges[inner_edges[i]];
            e.twin = outer_edges[i];
            e.next = inner_edges[succ];
            e.prev = inner_edges[pred];

            // The outer cycle runs clockwise around the polygon.
            let t = &mut mesh.half_edges[outer_edges[i]];
            t.twin = inner_edges[i];
            t.next = outer_edges[pred];
            t.prev = outer_edges[succ];

            mesh.vertices[vertices[i]].incident_edge = Some(inner_edges[i]);
        }

        mesh.faces[inner].outer_component = Some(inner_edges[0]);
        mesh.faces[outer].inner_components.push(outer_edges[0]);
        mesh.outer_face = Some(outer);

        Ok((mesh, inner))
    }
}
