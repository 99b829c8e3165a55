use std::collections::VecDeque;

use slotmap::SecondaryMap;
use tracing::debug;

use crate::error::{QueryError, Result};
use crate::graph::{DualGraph, DualVertexId};
use crate::math::Point2;
use crate::topology::{FaceId, HalfEdgeId, Mesh};

/// The chain of triangles a path has to cross, with the portals between them.
#[derive(Debug, Clone, Default)]
pub struct Corridor {
    triangles: Vec<FaceId>,
    portal_edges: Vec<HalfEdgeId>,
    portals: Vec<(Point2, Point2)>,
}

impl Corridor {
    /// Triangles from the start triangle to the end triangle.
    #[must_use]
    pub fn triangles(&self) -> &[FaceId] {
        &self.triangles
    }

    /// Shared half-edges crossed, each on the side of the triangle left behind.
    #[must_use]
    pub fn portal_edges(&self) -> &[HalfEdgeId] {
        &self.portal_edges
    }

    /// Portal endpoints as `(left, right)` seen when walking the corridor.
    #[must_use]
    pub fn portals(&self) -> &[(Point2, Point2)] {
        &self.portals
    }

    /// Number of triangles in the corridor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the corridor holds no triangle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Polyline from `start` through every portal midpoint to `end`.
    #[must_use]
    pub fn midpoint_polyline(&self, start: Point2, end: Point2) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.portals.len() + 2);
        points.push(start);
        points.extend(self.portals.iter().map(|(l, r)| nalgebra::center(l, r)));
        points.push(end);
        points
    }
}

/// Breadth-first search for the corridor with the fewest triangles.
pub struct FindCorridor {
    start: DualVertexId,
    end: DualVertexId,
}

impl FindCorridor {
    /// Creates a new `FindCorridor` search between two dual vertices.
    #[must_use]
    pub fn new(start: DualVertexId, end: DualVertexId) -> Self {
        Self { start, end }
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DisconnectedQuery`] if the end cannot be reached.
    pub fn execute(&self, mesh: &Mesh, dual: &DualGraph) -> Result<Corridor> {
        // Parent and the portal used to reach each visited vertex.
        let mut reached: SecondaryMap<DualVertexId, Option<(DualVertexId, HalfEdgeId)>> =
            SecondaryMap::new();
        let mut queue = VecDeque::new();
        reached.insert(self.start, None);
        queue.push_back(self.start);

        while let Some(current) = queue.pop_front() {
            if current == self.end {
                break;
            }
            for portal in &dual.vertex(current)?.portals {
                if reached.contains_key(portal.neighbor) {
                    continue;
                }
                reached.insert(portal.neighbor, Some((current, portal.edge)));
                queue.push_back(portal.neighbor);
            }
        }
        if !reached.contains_key(self.end) {
            return Err(QueryError::DisconnectedQuery.into());
        }

        let mut vertices = vec![self.end];
        let mut portal_edges = Vec::new();
        let mut current = self.end;
        while let Some(&Some((parent, edge))) = reached.get(current) {
            vertices.push(parent);
            portal_edges.push(edge);
            current = parent;
        }
        vertices.reverse();
        portal_edges.reverse();

        let triangles = vertices
            .iter()
            .map(|&v| Ok(dual.vertex(v)?.face))
            .collect::<Result<Vec<_>>>()?;
        // Leaving a triangle through edge `o -> d`, `d` is on the left.
        let portals = portal_edges
            .iter()
            .map(|&edge| {
                let left = mesh.point(mesh.destination(edge)?)?;
                let right = mesh.point(mesh.origin(edge)?)?;
                Ok((left, right))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(triangles = triangles.len(), "found corridor");
        Ok(Corridor {
            triangles,
            portal_edges,
            portals,
        })
    }
}
