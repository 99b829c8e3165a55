use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::math::orient_2d::{is_left, sweep_order};
use crate::math::{Point2, TOLERANCE};
use crate::topology::{FaceId, Mesh, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct ChainVertex {
    id: VertexId,
    point: Point2,
    chain: Chain,
}

/// Triangulates a y-monotone face in linear time.
///
/// Vertices are merged from the two chains in sweep order and processed
/// with a stack of vertices still waiting for diagonals. Every diagonal is
/// inserted into the mesh, so the face ends up split into triangles.
pub struct TriangulateMonotone {
    face: FaceId,
    tolerance: f64,
}

impl TriangulateMonotone {
    /// Creates a new `TriangulateMonotone` operation.
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

    /// Executes the operation, returning the triangular faces that cover
    /// the input face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has fewer than three vertices or if a
    /// diagonal cannot be placed.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<Vec<FaceId>> {
        let sorted = self.sorted_vertices(mesh)?;
        let n = sorted.len();
        let mut faces = vec![self.face];
        if n == 3 {
            return Ok(faces);
        }

        let mut stack: Vec<ChainVertex> = vec![sorted[0], sorted[1]];
        for &current in &sorted[2..n - 1] {
            let Some(&top) = stack.last() else {
                break;
            };
            if top.chain == current.chain {
                let mut last = stack.pop().unwrap_or(top);
                while let Some(&peek) = stack.last() {
                    if !self.sees_past(&current, &last, &peek) {
                        break;
                    }
                    faces.push(mesh.insert_diagonal(current.id, peek.id, self.tolerance)?);
                    last = peek;
                    stack.pop();
                }
                stack.push(last);
            } else {
                // The bottom of the stack is the neighbour of `current` on
                // its own chain, already joined by a polygon edge.
                for waiting in stack.drain(1..).rev() {
                    faces.push(mesh.insert_diagonal(current.id, waiting.id, self.tolerance)?);
                }
                stack.clear();
                stack.push(top);
            }
            stack.push(current);
        }

        let bottom = sorted[n - 1];
        if stack.len() > 2 {
            for waiting in &stack[1..stack.len() - 1] {
                faces.push(mesh.insert_diagonal(bottom.id, waiting.id, self.tolerance)?);
            }
        }

        trace!(vertices = n, triangles = faces.len(), "triangulated monotone face");
        debug_assert_eq!(faces.len(), n - 2);
        Ok(faces)
    }

    /// Vertices of the face in sweep order, tagged with their chain.
    fn sorted_vertices(&self, mesh: &Mesh) -> Result<Vec<ChainVertex>> {
        let ids = mesh.face_vertices(self.face)?;
        let n = ids.len();
        if n < 3 {
            return Err(TopologyError::InvalidTopology("face has fewer than three vertices".into()).into());
        }
        let points = ids
            .iter()
            .map(|&v| mesh.point(v))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let by_sweep = |&a: &usize, &b: &usize| sweep_order(&points[a], &points[b], self.tolerance);
        let top = (0..n).min_by(by_sweep).unwrap_or(0);
        let bottom = (0..n).max_by(by_sweep).unwrap_or(0);

        // Counter-clockwise from the top runs down the left chain.
        let mut vertices = Vec::with_capacity(n);
        let mut chain = Chain::Left;
        for step in 0..n {
            let i = (top + step) % n;
            if i == bottom {
                chain = Chain::Right;
            }
            vertices.push(ChainVertex {
                id: ids[i],
                point: points[i],
                chain,
            });
        }
        vertices.sort_by(|a, b| match sweep_order(&a.point, &b.point, self.tolerance) {
            Ordering::Equal => a.point.x.total_cmp(&b.point.x),
            other => other,
        });
        Ok(vertices)
    }

    /// Whether `current` can see `peek` past `last`, all on one chain.
    fn sees_past(&self, current: &ChainVertex, last: &ChainVertex, peek: &ChainVertex) -> bool {
        match current.chain {
            Chain::Left => is_left(&peek.point, &last.point, &current.point, self.tolerance),
            Chain::Right => is_left(&current.point, &last.point, &peek.point, self.tolerance),
        }
    }
}
