use crate::error::{Result, TopologyError};
use crate::graph::DualGraph;
use crate::math::orient_2d::area2;
use crate::math::{Point2, TOLERANCE};
use crate::operations::path::{ShortestPath, ShortestPathQuery};
use crate::operations::query::LocatePoint;
use crate::topology::{FaceId, Mesh};

/// Parameters controlling polygon preparation and geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Epsilon used by every coordinate and orientation comparison.
    pub tolerance: f64,
    /// Drop repeated and collinear vertices instead of rejecting them.
    pub sanitize: bool,
    /// Reverse clockwise input instead of rejecting it.
    pub reorient: bool,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            sanitize: true,
            reorient: true,
        }
    }
}

impl TriangulationParams {
    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables input sanitising.
    #[must_use]
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Enables or disables reorienting clockwise input.
    #[must_use]
    pub fn with_reorient(mut self, reorient: bool) -> Self {
        self.reorient = reorient;
        self
    }
}

/// A flat triangle list.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions, in the order of the prepared polygon.
    pub vertices: Vec<Point2>,
    /// Triangle indices (each triple is counter-clockwise).
    pub indices: Vec<[u32; 3]>,
}

/// A triangulated simple polygon together with its dual graph.
#[derive(Debug)]
pub struct Triangulation {
    mesh: Mesh,
    polygon: Vec<Point2>,
    triangles: Vec<FaceId>,
    dual: DualGraph,
    partition_diagonals: usize,
    tolerance: f64,
}

impl Triangulation {
    pub(crate) fn new(
        mesh: Mesh,
        polygon: Vec<Point2>,
        triangles: Vec<FaceId>,
        dual: DualGraph,
        partition_diagonals: usize,
        tolerance: f64,
    ) -> Self {
        Self {
            mesh,
            polygon,
            triangles,
            dual,
            partition_diagonals,
            tolerance,
        }
    }

    /// The underlying half-edge mesh.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The polygon as it entered the mesh (after sanitising and reorienting).
    #[must_use]
    pub fn polygon(&self) -> &[Point2] {
        &self.polygon
    }

    /// The triangular faces.
    #[must_use]
    pub fn triangles(&self) -> &[FaceId] {
        &self.triangles
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Triangle adjacency graph.
    #[must_use]
    pub fn dual_graph(&self) -> &DualGraph {
        &self.dual
    }

    /// Number of diagonals in the mesh.
    #[must_use]
    pub fn diagonal_count(&self) -> usize {
        self.mesh.half_edge_count() / 2 - self.polygon.len()
    }

    /// Number of diagonals the monotone partition inserted.
    #[must_use]
    pub fn partition_diagonal_count(&self) -> usize {
        self.partition_diagonals
    }

    /// The three corners of a triangle, counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or not a triangle.
    pub fn triangle_points(&self, face: FaceId) -> Result<[Point2; 3]> {
        match self.mesh.face_points(face)?.as_slice() {
            &[a, b, c] => Ok([a, b, c]),
            _ => Err(TopologyError::InvalidTopology("face is not a triangle".into()).into()),
        }
    }

    /// Triangles sharing a diagonal with `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has no dual vertex.
    pub fn neighbors(&self, face: FaceId) -> Result<Vec<FaceId>> {
        let id = self
            .mesh
            .face(face)?
            .dual_vertex
            .ok_or_else(|| TopologyError::EntityNotFound("dual vertex".into()))?;
        self.dual
            .neighbors(id)?
            .into_iter()
            .map(|n| Ok(self.dual.vertex(n)?.face))
            .collect()
    }

    /// Sum of the triangle areas.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle face is missing.
    pub fn area(&self) -> Result<f64> {
        let mut total = 0.0;
        for &face in &self.triangles {
            let [a, b, c] = self.triangle_points(face)?;
            total += area2(&a, &b, &c) * 0.5;
        }
        Ok(total)
    }

    /// Exports the triangles as an indexed list.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle face is missing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_triangle_mesh(&self) -> Result<TriangleMesh> {
        let mut indices = Vec::with_capacity(self.triangles.len());
        for &face in &self.triangles {
            let corners = self.mesh.face_vertices(face)?;
            let mut tri = [0u32; 3];
            for (slot, &v) in tri.iter_mut().zip(&corners) {
                *slot = self.mesh.vertex(v)?.index as u32;
            }
            indices.push(tri);
        }
        Ok(TriangleMesh {
            vertices: self.polygon.clone(),
            indices,
        })
    }

    /// The triangle containing `point`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::QueryError::PointOutsideMesh`] if no triangle
    /// contains the point.
    pub fn locate(&self, point: Point2) -> Result<FaceId> {
        LocatePoint::new(point)
            .with_tolerance(self.tolerance)
            .execute(&self.mesh)
    }

    /// Shortest path from `start` to `end` inside the polygon.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::QueryError`] if either point is outside
    /// the polygon or the triangles are not connected.
    pub fn shortest_path(&self, start: Point2, end: Point2) -> Result<ShortestPath> {
        ShortestPathQuery::new(start, end)
            .with_tolerance(self.tolerance)
            .execute(&self.mesh, &self.dual)
    }
}
