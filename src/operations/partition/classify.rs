use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Result, SweepError};
use crate::math::orient_2d::{orientation, sweep_order, Orientation};
use crate::math::Point2;
use crate::topology::{FaceId, Mesh, VertexKind};

/// Sweep role of the corner `prev -> v -> next` of a counter-clockwise boundary.
///
/// Returns `None` when `v` cannot be ordered against a neighbour.
#[must_use]
pub fn vertex_kind(prev: &Point2, v: &Point2, next: &Point2, tol: f64) -> Option<VertexKind> {
    let prev_order = sweep_order(prev, v, tol);
    let next_order = sweep_order(next, v, tol);
    if prev_order == Ordering::Equal || next_order == Ordering::Equal {
        return None;
    }
    let prev_above = prev_order == Ordering::Less;
    let next_above = next_order == Ordering::Less;
    let convex = orientation(prev, v, next, tol) == Orientation::CounterClockwise;

    Some(match (prev_above, next_above) {
        (false, false) if convex => VertexKind::Start,
        (false, false) => VertexKind::Split,
        (true, true) if convex => VertexKind::End,
        (true, true) => VertexKind::Merge,
        (true, false) => VertexKind::RegularLeft,
        (false, true) => VertexKind::RegularRight,
    })
}

/// Labels every vertex on the boundary of `face` with its sweep role.
///
/// # Errors
///
/// Returns [`SweepError::AmbiguousOrder`] if a vertex coincides with a
/// neighbour under the tolerance.
pub fn classify_vertices(mesh: &mut Mesh, face: FaceId, tol: f64) -> Result<()> {
    let vertices = mesh.face_vertices(face)?;
    let n = vertices.len();
    let points = vertices
        .iter()
        .map(|&v| mesh.point(v))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for i in 0..n {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        let kind = vertex_kind(&points[prev], &points[i], &points[next], tol).ok_or_else(|| {
            let other = if sweep_order(&points[prev], &points[i], tol) == Ordering::Equal {
                prev
            } else {
                next
            };
            SweepError::AmbiguousOrder {
                first: mesh.vertex(vertices[i]).map_or(i, |v| v.index),
                second: mesh.vertex(vertices[other]).map_or(other, |v| v.index),
            }
        })?;
        let vertex = mesh.vertex_mut(vertices[i])?;
        vertex.kind = Some(kind);
        trace!(vertex = vertex.index, ?kind, "classified vertex");
    }
    Ok(())
}
