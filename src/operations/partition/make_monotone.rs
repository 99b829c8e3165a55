use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{Result, SweepError, TopologyError};
use crate::math::orient_2d::sweep_order;
use crate::math::{Point2, TOLERANCE};
use crate::topology::{FaceId, HalfEdgeId, Mesh, VertexId, VertexKind};

use super::classify::classify_vertices;
use super::sweep_status::{StatusEdge, SweepStatus};

/// One vertex of the polygon as met by the sweep.
#[derive(Debug, Clone, Copy)]
struct Event {
    vertex: VertexId,
    index: usize,
    point: Point2,
    kind: VertexKind,
    /// Polygon edge leaving the vertex.
    outgoing: HalfEdgeId,
    /// Polygon edge arriving at the vertex.
    incoming: HalfEdgeId,
    /// Far endpoint of `outgoing`.
    next_point: Point2,
}

/// Partitions a simple polygon face into y-monotone faces.
///
/// Classic plane sweep from top to bottom: every split and merge vertex is
/// resolved by a diagonal to the helper of the edge left of it, and each
/// diagonal is realised with [`Mesh::split_face`].
pub struct MakeMonotone {
    face: FaceId,
    tolerance: f64,
}

impl MakeMonotone {
    /// Creates a new `MakeMonotone` operation.
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

    /// Executes the sweep, returning every face the polygon was split into
    /// (the input face included).
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if the vertex order is ambiguous or the
    /// status structure is missing an edge the sweep requires.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<Vec<FaceId>> {
        classify_vertices(mesh, self.face, self.tolerance)?;
        let events = self.collect_events(mesh)?;

        let mut faces = vec![self.face];
        let mut status = SweepStatus::new(self.tolerance);

        for event in &events {
            trace!(vertex = event.index, kind = ?event.kind, "sweep event");
            match event.kind {
                VertexKind::Start => insert_edge(&mut status, event),
                VertexKind::End => {
                    self.close_edge(mesh, &mut status, event, &mut faces)?;
                }
                VertexKind::Split => {
                    let left = status
                        .left_of(&event.point)
                        .ok_or(SweepError::MissingEdge { vertex: event.index })?;
                    let helper = left.helper;
                    left.helper = event.vertex;
                    self.add_diagonal(mesh, event.vertex, helper, &mut faces)?;
                    insert_edge(&mut status, event);
                }
                VertexKind::Merge => {
                    self.close_edge(mesh, &mut status, event, &mut faces)?;
                    self.update_left_helper(mesh, &mut status, event, &mut faces)?;
                }
                VertexKind::RegularLeft => {
                    self.close_edge(mesh, &mut status, event, &mut faces)?;
                    insert_edge(&mut status, event);
                }
                VertexKind::RegularRight => {
                    self.update_left_helper(mesh, &mut status, event, &mut faces)?;
                }
            }
        }

        debug!(
            vertices = events.len(),
            diagonals = faces.len() - 1,
            "partitioned polygon into monotone faces"
        );
        debug_assert!(mesh.validate().is_ok());
        Ok(faces)
    }

    /// Gathers the classified vertices of the face in sweep order.
    fn collect_events(&self, mesh: &Mesh) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for outgoing in mesh.boundary(self.face)? {
            let vertex = mesh.origin(outgoing)?;
            let data = mesh.vertex(vertex)?;
            let kind = data
                .kind
                .ok_or_else(|| TopologyError::InvalidTopology("vertex not classified".into()))?;
            events.push(Event {
                vertex,
                index: data.index,
                point: data.point,
                kind,
                outgoing,
                incoming: mesh.prev(outgoing)?,
                next_point: mesh.point(mesh.destination(outgoing)?)?,
            });
        }

        events.sort_by(|a, b| {
            sweep_order(&a.point, &b.point, self.tolerance).then(a.index.cmp(&b.index))
        });
        for pair in events.windows(2) {
            if sweep_order(&pair[0].point, &pair[1].point, self.tolerance) == Ordering::Equal {
                return Err(SweepError::AmbiguousOrder {
                    first: pair[0].index,
                    second: pair[1].index,
                }
                .into());
            }
        }
        Ok(events)
    }

    /// Takes the edge ending at `event` off the sweep line, connecting a
    /// pending merge helper first.
    fn close_edge(
        &self,
        mesh: &mut Mesh,
        status: &mut SweepStatus,
        event: &Event,
        faces: &mut Vec<FaceId>,
    ) -> Result<()> {
        let closed = status
            .remove(event.incoming)
            .ok_or(SweepError::MissingEdge { vertex: event.index })?;
        if is_merge(mesh, closed.helper)? {
            self.add_diagonal(mesh, event.vertex, closed.helper, faces)?;
        }
        Ok(())
    }

    /// Makes `event` the helper of the edge to its left, connecting a
    /// pending merge helper first.
    fn update_left_helper(
        &self,
        mesh: &mut Mesh,
        status: &mut SweepStatus,
        event: &Event,
        faces: &mut Vec<FaceId>,
    ) -> Result<()> {
        let left = status
            .left_of(&event.point)
            .ok_or(SweepError::MissingEdge { vertex: event.index })?;
        let helper = left.helper;
        left.helper = event.vertex;
        if is_merge(mesh, helper)? {
            self.add_diagonal(mesh, event.vertex, helper, faces)?;
        }
        Ok(())
    }

    fn add_diagonal(
        &self,
        mesh: &mut Mesh,
        from: VertexId,
        to: VertexId,
        faces: &mut Vec<FaceId>,
    ) -> Result<()> {
        faces.push(mesh.insert_diagonal(from, to, self.tolerance)?);
        Ok(())
    }
}

/// Puts the edge leaving `event` on the sweep line with the event as helper.
fn insert_edge(status: &mut SweepStatus, event: &Event) {
    status.insert(StatusEdge::new(
        event.outgoing,
        event.point,
        event.next_point,
        event.vertex,
    ));
}

fn is_merge(mesh: &Mesh, vertex: VertexId) -> Result<bool> {
    Ok(mesh.vertex(vertex)?.kind == Some(VertexKind::Merge))
}
