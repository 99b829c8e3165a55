use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::graph::{DualGraph, DualVertexId};
use crate::math::polygon_2d::polyline_length;
use crate::math::{points_equal, Point2, TOLERANCE};
use crate::operations::query::LocatePoint;
use crate::topology::{FaceId, Mesh};

use super::{Corridor, FindCorridor, Funnel};

/// A shortest path inside the polygon.
#[derive(Debug, Clone)]
pub struct ShortestPath {
    points: Vec<Point2>,
    corridor: Corridor,
}

impl ShortestPath {
    /// Path vertices from start to end.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The triangle corridor the path was pulled through.
    #[must_use]
    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    /// Euclidean length of the path.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    /// Number of corners between start and end.
    #[must_use]
    pub fn turning_points(&self) -> usize {
        self.points.len().saturating_sub(2)
    }
}

/// Computes the shortest path between two points of a triangulated polygon.
///
/// Both points are located in the mesh, the fewest-triangle corridor is
/// found over the dual graph, and the funnel pulls the path taut.
pub struct ShortestPathQuery {
    start: Point2,
    end: Point2,
    tolerance: f64,
}

impl ShortestPathQuery {
    /// Creates a new `ShortestPathQuery`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
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
    /// Returns [`crate::error::QueryError::PointOutsideMesh`] if an endpoint
    /// is not inside the triangulation, or
    /// [`crate::error::QueryError::DisconnectedQuery`] if no corridor joins them.
    pub fn execute(&self, mesh: &Mesh, dual: &DualGraph) -> Result<ShortestPath> {
        let start_face = self.locate(mesh, self.start)?;
        let end_face = self.locate(mesh, self.end)?;

        let corridor = FindCorridor::new(dual_vertex(mesh, start_face)?, dual_vertex(mesh, end_face)?)
            .execute(mesh, dual)?;
        let points = if points_equal(&self.start, &self.end, self.tolerance) {
            vec![self.start]
        } else {
            Funnel::between(self.start, corridor.portals(), self.end)
                .with_tolerance(self.tolerance)
                .execute()
        };

        debug!(
            corridor = corridor.len(),
            corners = points.len(),
            "computed shortest path"
        );
        Ok(ShortestPath { points, corridor })
    }

    fn locate(&self, mesh: &Mesh, point: Point2) -> Result<FaceId> {
        LocatePoint::new(point)
            .with_tolerance(self.tolerance)
            .execute(mesh)
    }
}

fn dual_vertex(mesh: &Mesh, face: FaceId) -> Result<DualVertexId> {
    mesh.face(face)?
        .dual_vertex
        .ok_or_else(|| TopologyError::EntityNotFound("dual vertex".into()).into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::{PolypathError, QueryError};
    use crate::math::orient_2d::{orientation, Orientation};
    use crate::math::polygon_2d::polyline_length;
    use crate::math::Point2;
    use crate::operations::triangulate::TriangulatePolygon;
    use crate::triangulation::Triangulation;

    fn triangulate(coords: &[(f64, f64)]) -> Triangulation {
        let points: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        TriangulatePolygon::new(&points).execute().unwrap()
    }

    fn u_shape() -> Triangulation {
        triangulate(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ])
    }

    fn on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
        orientation(a, b, p, 1e-9) == Orientation::Collinear
            && p.x >= a.x.min(b.x) - 1e-9
            && p.x <= a.x.max(b.x) + 1e-9
            && p.y >= a.y.min(b.y) - 1e-9
            && p.y <= a.y.max(b.y) + 1e-9
    }

    #[test]
    fn convex_polygon_gives_straight_line() {
        let tri = triangulate(&[
            (0.0, 0.0),
            (8.0, 0.0),
            (10.0, 4.0),
            (8.0, 8.0),
            (0.0, 8.0),
            (-2.0, 4.0),
        ]);
        let start = Point2::new(-1.0, 4.0);
        let end = Point2::new(9.0, 4.5);
        let path = tri.shortest_path(start, end).unwrap();
        assert_eq!(path.points(), &[start, end]);
        assert_eq!(path.turning_points(), 0);
        assert_relative_eq!(path.length(), (end - start).norm(), epsilon = 1e-12);
    }

    #[test]
    fn u_shape_wraps_around_inner_corners() {
        let tri = u_shape();
        let start = Point2::new(1.0, 5.0);
        let end = Point2::new(5.0, 5.0);
        let path = tri.shortest_path(start, end).unwrap();

        assert_eq!(path.points().first(), Some(&start));
        assert_eq!(path.points().last(), Some(&end));
        assert_eq!(path.turning_points(), 2);
        assert_relative_eq!(path.points()[1].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(path.points()[1].y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(path.points()[2].x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(path.points()[2].y, 2.0, epsilon = 1e-9);
        let expected = 2.0 * 10.0_f64.sqrt() + 2.0;
        assert_relative_eq!(path.length(), expected, epsilon = 1e-9);
    }

    #[test]
    fn funnel_is_no_longer_than_portal_midpoints() {
        let tri = u_shape();
        let start = Point2::new(0.5, 5.5);
        let end = Point2::new(5.5, 4.0);
        let path = tri.shortest_path(start, end).unwrap();
        let reference = path.corridor().midpoint_polyline(start, end);
        assert!(path.length() <= polyline_length(&reference) + 1e-9);
    }

    #[test]
    fn corners_lie_on_portals() {
        let tri = u_shape();
        let start = Point2::new(0.5, 5.5);
        let end = Point2::new(5.5, 5.5);
        let path = tri.shortest_path(start, end).unwrap();
        let portals = path.corridor().portals();
        let inner = &path.points()[1..path.points().len() - 1];
        assert!(!inner.is_empty());
        for corner in inner {
            assert!(portals.iter().any(|(l, r)| on_segment(corner, l, r)));
        }
    }

    #[test]
    fn same_triangle_and_same_point() {
        let tri = u_shape();
        let a = Point2::new(0.5, 0.5);
        let b = Point2::new(0.6, 0.7);
        if tri.locate(a).unwrap() == tri.locate(b).unwrap() {
            assert_eq!(tri.shortest_path(a, b).unwrap().points(), &[a, b]);
        }
        let path = tri.shortest_path(a, a).unwrap();
        assert_eq!(path.points(), &[a]);
        assert_relative_eq!(path.length(), 0.0);
        assert_eq!(path.corridor().len(), 1);
    }

    #[test]
    fn endpoints_on_boundary_are_accepted() {
        let tri = u_shape();
        let path = tri
            .shortest_path(Point2::new(0.0, 3.0), Point2::new(6.0, 3.0))
            .unwrap();
        assert!(path.turning_points() >= 2);
    }

    #[test]
    fn outside_endpoint_is_an_error() {
        let tri = u_shape();
        // Inside the notch of the U, which is not part of the polygon.
        let err = tri
            .shortest_path(Point2::new(1.0, 1.0), Point2::new(3.0, 4.0))
            .unwrap_err();
        assert!(matches!(
            err,
            PolypathError::Query(QueryError::PointOutsideMesh { .. })
        ));
        assert_eq!(
            err.to_string(),
            "point (3, 4) lies outside the triangulated region"
        );
    }
}
