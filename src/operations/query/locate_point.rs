use crate::error::{QueryError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::topology::{FaceId, Mesh};

use super::{convex_containment, Containment};

/// Finds the triangle of a triangulated mesh that contains a point.
///
/// A triangle holding the point strictly inside wins; otherwise the first
/// triangle with the point on its boundary is returned.
pub struct LocatePoint {
    point: Point2,
    tolerance: f64,
}

impl LocatePoint {
    /// Creates a new `LocatePoint` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query over the bounded faces of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PointOutsideMesh`] if no face contains the point.
    pub fn execute(&self, mesh: &Mesh) -> Result<FaceId> {
        let mut boundary_hit = None;
        for face in mesh.inner_faces() {
            let ring = mesh.face_points(face)?;
            match convex_containment(&ring, &self.point, self.tolerance) {
                Containment::Inside => return Ok(face),
                Containment::OnBoundary => {
                    boundary_hit.get_or_insert(face);
                }
                Containment::Outside => {}
            }
        }
        boundary_hit.ok_or_else(|| {
            QueryError::PointOutsideMesh {
                x: self.point.x,
                y: self.point.y,
            }
            .into()
        })
    }
}
