use crate::error::{Result, SweepError};
use crate::math::TOLERANCE;
use crate::operations::partition::vertex_kind;
use crate::topology::{FaceId, Mesh, VertexKind};

/// Checks whether a face is monotone with respect to the sweep direction.
///
/// A face is y-monotone exactly when none of its corners is a split or
/// merge vertex.
pub struct IsMonotone {
    face: FaceId,
    tolerance: f64,
}

impl IsMonotone {
    /// Creates a new `IsMonotone` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::AmbiguousOrder`] if a corner cannot be ordered
    /// against a neighbour, or an error if the face is missing.
    pub fn execute(&self, mesh: &Mesh) -> Result<bool> {
        let vertices = mesh.face_vertices(self.face)?;
        let n = vertices.len();
        for i in 0..n {
            let prev = mesh.vertex(vertices[(i + n - 1) % n])?;
            let here = mesh.vertex(vertices[i])?;
            let next = mesh.point(vertices[(i + 1) % n])?;
            let kind = vertex_kind(&prev.point, &here.point, &next, self.tolerance).ok_or(
                SweepError::AmbiguousOrder {
                    first: prev.index,
                    second: here.index,
                },
            )?;
            if matches!(kind, VertexKind::Split | VertexKind::Merge) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn convex_face_is_monotone() {
        let (mesh, face) = Mesh::from_polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(3.0, 4.0),
            Point2::new(-1.0, 3.0),
        ])
        .unwrap();
        assert!(IsMonotone::new(face).execute(&mesh).unwrap());
    }

    #[test]
    fn notch_from_below_is_not_monotone() {
        let (mesh, face) = Mesh::from_polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(!IsMonotone::new(face).execute(&mesh).unwrap());
    }

    #[test]
    fn sideways_notch_is_still_monotone() {
        let (mesh, face) = Mesh::from_polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(IsMonotone::new(face).execute(&mesh).unwrap());
    }
}
