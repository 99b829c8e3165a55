use tracing::trace;

use crate::error::{SweepError, TopologyError};
use crate::math::orient_2d::{area2, is_left};

use super::{FaceData, FaceId, HalfEdgeData, Mesh, VertexId};

impl Mesh {
    /// Inserts the diagonal `v1 - v2` across `face`, splitting it in two.
    ///
    /// The half-edge `v2 -> v1` stays on `face`; the half-edge `v1 -> v2`
    /// bounds the returned new face. Only the two cycles touched are
    /// rewired.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not on the boundary of `face`,
    /// if the vertices coincide, or if they are already adjacent on it.
    pub fn split_face(&mut self, face: FaceId, v1: VertexId, v2: VertexId) -> Result<FaceId, TopologyError> {
        if v1 == v2 {
            return Err(TopologyError::InvalidTopology("diagonal endpoints coincide".into()));
        }
        if self.face(face)?.is_unbounded() {
            return Err(TopologyError::InvalidTopology("cannot split the unbounded face".into()));
        }

        let a = self.outgoing_on_face(v1, face)?;
        let b = self.outgoing_on_face(v2, face)?;
        if self.destination(a)? == v2 || self.destination(b)? == v1 {
            return Err(TopologyError::InvalidTopology("diagonal endpoints are adjacent".into()));
        }
        let a_prev = self.prev(a)?;
        let b_prev = self.prev(b)?;

        let new_face = self.add_face(FaceData::default());
        let d1 = self.half_edges.insert(HalfEdgeData::new(v1, new_face));
        let d2 = self.half_edges.insert(HalfEdgeData::new(v2, face));

        {
            let e = self.half_edge_mut(d1)?;
            e.twin = d2;
            e.prev = a_prev;
            e.next = b;
        }
        {
            let e = self.half_edge_mut(d2)?;
            e.twin = d1;
            e.prev = b_prev;
            e.next = a;
        }
        self.half_edge_mut(a_prev)?.next = d1;
        self.half_edge_mut(b)?.prev = d1;
        self.half_edge_mut(b_prev)?.next = d2;
        self.half_edge_mut(a)?.prev = d2;

        let moved: Vec<_> = self.boundary_from(d1).collect();
        for edge in moved {
            self.half_edge_mut(edge)?.face = new_face;
        }
        self.face_mut(new_face)?.outer_component = Some(d1);
        self.face_mut(face)?.outer_component = Some(d2);

        Ok(new_face)
    }

    /// Finds the bounded face in which the segment `v1 - v2` is a diagonal.
    ///
    /// A face qualifies when both vertices lie on its boundary and the
    /// direction towards `v2` points strictly into the face's corner at `v1`.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing from the mesh.
    pub fn diagonal_face(&self, v1: VertexId, v2: VertexId, tol: f64) -> Result<Option<FaceId>, TopologyError> {
        let origin = self.point(v1)?;
        let target = self.point(v2)?;
        for edge in self.outgoing(v1)? {
            let face = self.incident_face(edge)?;
            if self.face(face)?.is_unbounded() {
                continue;
            }
            let next = self.point(self.destination(edge)?)?;
            let prev = self.point(self.origin(self.prev(edge)?)?)?;

            let into_next = is_left(&origin, &next, &target, tol);
            let from_prev = is_left(&prev, &origin, &target, tol);
            let inside = if area2(&prev, &origin, &next) > 0.0 {
                into_next && from_prev
            } else {
                into_next || from_prev
            };
            if inside && self.outgoing_on_face(v2, face).is_ok() {
                return Ok(Some(face));
            }
        }
        Ok(None)
    }

    /// Splits whichever face holds the diagonal `v1 - v2`, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::NoDiagonalFace`] if no incident face can hold
    /// the diagonal, or a topology error from the split itself.
    pub fn insert_diagonal(&mut self, v1: VertexId, v2: VertexId, tol: f64) -> crate::error::Result<FaceId> {
        let from = self.vertex(v1)?.index;
        let to = self.vertex(v2)?.index;
        let face = self
            .diagonal_face(v1, v2, tol)?
            .ok_or(SweepError::NoDiagonalFace { from, to })?;
        let new_face = self.split_face(face, v1, v2)?;
        trace!(from, to, "inserted diagonal");
        Ok(new_face)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::error::{PolypathError, SweepError};
    use crate::math::{Point2, TOLERANCE};
    use crate::topology::{Mesh, VertexId};

    fn hexagon() -> Vec<Point2> {
        vec![
            Point2::new(2.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 3.0),
            Point2::new(0.0, 1.0),
        ]
    }

    fn vertex(mesh: &Mesh, index: usize) -> VertexId {
        mesh.vertex_ids()
            .find(|&v| mesh.vertex(v).unwrap().index == index)
            .unwrap()
    }

    #[test]
    fn split_creates_two_cycles() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let a = vertex(&mesh, 0);
        let b = vertex(&mesh, 3);
        let new_face = mesh.split_face(face, a, b).unwrap();

        assert_eq!(mesh.face_count(), 3);
        assert_eq!(mesh.half_edge_count(), 14);
        assert_eq!(mesh.face_vertices(face).unwrap().len(), 4);
        assert_eq!(mesh.face_vertices(new_face).unwrap().len(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn new_face_starts_at_diagonal() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let a = vertex(&mesh, 1);
        let b = vertex(&mesh, 4);
        let new_face = mesh.split_face(face, a, b).unwrap();
        let indices: Vec<usize> = mesh
            .face_vertices(new_face)
            .unwrap()
            .into_iter()
            .map(|v| mesh.vertex(v).unwrap().index)
            .collect();
        assert_eq!(indices, vec![1, 4, 5, 0]);
    }

    #[test]
    fn split_rejects_adjacent_vertices() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let a = vertex(&mesh, 0);
        let b = vertex(&mesh, 1);
        assert!(mesh.split_face(face, a, b).is_err());
        assert!(mesh.split_face(face, a, a).is_err());
    }

    #[test]
    fn split_rejects_vertex_off_face() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let (v0, v2, v4) = (vertex(&mesh, 0), vertex(&mesh, 2), vertex(&mesh, 4));
        let new_face = mesh.split_face(face, v0, v2).unwrap();
        // `face` keeps the triangle v2, v0, v1; v4 moved to the new face.
        let v1 = vertex(&mesh, 1);
        assert!(mesh.split_face(face, v1, v4).is_err());
        assert_eq!(mesh.face_vertices(face).unwrap().len(), 3);
        assert_eq!(mesh.face_vertices(new_face).unwrap().len(), 5);
    }

    #[test]
    fn diagonal_face_follows_corner() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let (v0, v2, v3) = (vertex(&mesh, 0), vertex(&mesh, 2), vertex(&mesh, 3));
        mesh.split_face(face, v0, v3).unwrap();

        // v0 - v2 lies in the face that holds v1 and v2.
        let found = mesh.diagonal_face(v0, v2, TOLERANCE).unwrap().unwrap();
        let on_found = mesh.face_vertices(found).unwrap();
        assert!(on_found.contains(&v2));
        assert_eq!(on_found.len(), 4);

        // Vertices that share no face give no diagonal.
        let v5 = vertex(&mesh, 5);
        assert_eq!(mesh.diagonal_face(v2, v5, TOLERANCE).unwrap(), None);
    }

    #[test]
    fn insert_diagonal_needs_a_shared_face() {
        let (mut mesh, face) = Mesh::from_polygon(&hexagon()).unwrap();
        let (v0, v2, v3, v5) = (vertex(&mesh, 0), vertex(&mesh, 2), vertex(&mesh, 3), vertex(&mesh, 5));
        mesh.split_face(face, v0, v3).unwrap();

        let err = mesh.insert_diagonal(v2, v5, TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            PolypathError::Sweep(SweepError::NoDiagonalFace { from: 2, to: 5 })
        ));
        assert_eq!(mesh.face_count(), 3);

        mesh.insert_diagonal(v0, v2, TOLERANCE).unwrap();
        assert_eq!(mesh.face_count(), 4);
        assert!(mesh.validate().is_ok());
    }
}
