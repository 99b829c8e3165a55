use tracing::{debug, warn};

use crate::error::{PolygonError, Result};
use crate::graph::BuildDualGraph;
use crate::math::polygon_2d::{check_polygon, remove_collinear, remove_duplicates, signed_area};
use crate::math::Point2;
use crate::operations::partition::MakeMonotone;
use crate::topology::Mesh;
use crate::triangulation::{Triangulation, TriangulationParams};

use super::TriangulateMonotone;

/// Cleans and orients a raw vertex ring so the interior lies to its left.
///
/// # Errors
///
/// Returns a [`PolygonError`] if the ring is unusable under `params`.
pub fn prepare_polygon(
    points: &[Point2],
    params: &TriangulationParams,
) -> std::result::Result<Vec<Point2>, PolygonError> {
    let tol = params.tolerance;
    let mut ring = if params.sanitize {
        let cleaned = remove_collinear(&remove_duplicates(points, tol), tol);
        if cleaned.len() != points.len() {
            warn!(
                input = points.len(),
                kept = cleaned.len(),
                "dropped repeated or collinear vertices"
            );
        }
        cleaned
    } else {
        points.to_vec()
    };

    check_polygon(&ring, tol)?;
    if signed_area(&ring) < 0.0 {
        if !params.reorient {
            return Err(PolygonError::Clockwise);
        }
        ring.reverse();
    }
    Ok(ring)
}

/// Triangulates a simple polygon and builds its dual graph.
///
/// Runs the whole pipeline: mesh construction, monotone partition,
/// per-face monotone triangulation and dual graph construction.
pub struct TriangulatePolygon {
    points: Vec<Point2>,
    params: TriangulationParams,
}

impl TriangulatePolygon {
    /// Creates a new `TriangulatePolygon` operation with default parameters.
    #[must_use]
    pub fn new(points: &[Point2]) -> Self {
        Self {
            points: points.to_vec(),
            params: TriangulationParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: TriangulationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns a [`PolygonError`] for unusable input or a
    /// [`crate::error::SweepError`] if the sweep meets a tie it cannot order.
    pub fn execute(&self) -> Result<Triangulation> {
        let tol = self.params.tolerance;
        let polygon = prepare_polygon(&self.points, &self.params)?;
        let (mut mesh, face) = Mesh::from_polygon(&polygon)?;

        let monotone = MakeMonotone::new(face).with_tolerance(tol).execute(&mut mesh)?;
        let partition_diagonals = monotone.len() - 1;

        let mut triangles = Vec::with_capacity(polygon.len() - 2);
        for face in monotone {
            triangles.extend(TriangulateMonotone::new(face).with_tolerance(tol).execute(&mut mesh)?);
        }
        debug_assert!(mesh.validate().is_ok());

        let dual = BuildDualGraph::new(triangles.clone()).execute(&mut mesh)?;
        debug!(
            vertices = polygon.len(),
            partition_diagonals,
            triangles = triangles.len(),
            "triangulated polygon"
        );
        Ok(Triangulation::new(
            mesh,
            polygon,
            triangles,
            dual,
            partition_diagonals,
            tol,
        ))
    }
}
