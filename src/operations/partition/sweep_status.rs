use std::cmp::Ordering;

use crate::math::{compare, Point2};
use crate::topology::{HalfEdgeId, VertexId};

/// A polygon edge currently crossing the sweep line.
#[derive(Debug, Clone, Copy)]
pub struct StatusEdge {
    /// The polygon half-edge, directed downwards along the left chain.
    pub edge: HalfEdgeId,
    /// Most recent vertex that sees this edge from the right.
    pub helper: VertexId,
    upper: Point2,
    lower: Point2,
}

impl StatusEdge {
    /// Creates a status entry for the segment `upper -> lower`.
    #[must_use]
    pub fn new(edge: HalfEdgeId, upper: Point2, lower: Point2, helper: VertexId) -> Self {
        Self {
            edge,
            helper,
            upper,
            lower,
        }
    }

    /// X coordinate where the edge crosses the horizontal line at `y`.
    ///
    /// Horizontal edges report their lower (right) endpoint, matching the
    /// x tie-break of the sweep order.
    #[must_use]
    pub fn x_at(&self, y: f64, tol: f64) -> f64 {
        let dy = self.lower.y - self.upper.y;
        if compare(dy, 0.0, tol) == Ordering::Equal {
            return self.lower.x;
        }
        let t = ((y - self.upper.y) / dy).clamp(0.0, 1.0);
        self.upper.x + t * (self.lower.x - self.upper.x)
    }
}

/// Edges intersecting the sweep line, ordered left to right.
///
/// Kept as a sorted vector: positions are found by binary search on the
/// x-crossing at the current sweep height, which is consistent because
/// status edges never cross.
#[derive(Debug, Default)]
pub struct SweepStatus {
    edges: Vec<StatusEdge>,
    tolerance: f64,
}

impl SweepStatus {
    /// Creates an empty status structure.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            edges: Vec::new(),
            tolerance,
        }
    }

    /// Number of edges on the sweep line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge crosses the sweep line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Inserts an edge whose upper endpoint is the current event.
    pub fn insert(&mut self, entry: StatusEdge) {
        let (y, x, tol) = (entry.upper.y, entry.upper.x, self.tolerance);
        let pos = self
            .edges
            .partition_point(|e| compare(e.x_at(y, tol), x, tol) == Ordering::Less);
        self.edges.insert(pos, entry);
    }

    /// Removes the entry for `edge`, returning it.
    pub fn remove(&mut self, edge: HalfEdgeId) -> Option<StatusEdge> {
        let pos = self.edges.iter().position(|e| e.edge == edge)?;
        Some(self.edges.remove(pos))
    }

    /// The edge directly to the left of `point` on the sweep line through it.
    pub fn left_of(&mut self, point: &Point2) -> Option<&mut StatusEdge> {
        let tol = self.tolerance;
        let pos = self
            .edges
            .partition_point(|e| compare(e.x_at(point.y, tol), point.x, tol) == Ordering::Less);
        pos.checked_sub(1).and_then(|i| self.edges.get_mut(i))
    }

    /// Helper of the entry for `edge`, if present.
    #[must_use]
    pub fn helper(&self, edge: HalfEdgeId) -> Option<VertexId> {
        self.edges.iter().find(|e| e.edge == edge).map(|e| e.helper)
    }

    /// Edges on the sweep line, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEdge> {
        self.edges.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use slotmap::SlotMap;

    struct Ids {
        edges: SlotMap<HalfEdgeId, ()>,
        vertices: SlotMap<VertexId, ()>,
    }

    impl Ids {
        fn new() -> Self {
            Self {
                edges: SlotMap::with_key(),
                vertices: SlotMap::with_key(),
            }
        }
        fn edge(&mut self) -> HalfEdgeId {
            self.edges.insert(())
        }
        fn vertex(&mut self) -> VertexId {
            self.vertices.insert(())
        }
    }

    #[test]
    fn x_at_interpolates() {
        let mut ids = Ids::new();
        let e = StatusEdge::new(ids.edge(), Point2::new(0.0, 4.0), Point2::new(4.0, 0.0), ids.vertex());
        assert!((e.x_at(2.0, TOLERANCE) - 2.0).abs() < TOLERANCE);
        assert!((e.x_at(4.0, TOLERANCE)).abs() < TOLERANCE);

        let flat = StatusEdge::new(ids.edge(), Point2::new(0.0, 1.0), Point2::new(3.0, 1.0), ids.vertex());
        assert!((flat.x_at(1.0, TOLERANCE) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn keeps_left_to_right_order() {
        let mut ids = Ids::new();
        let mut status = SweepStatus::new(TOLERANCE);
        let right = ids.edge();
        let left = ids.edge();
        let middle = ids.edge();
        status.insert(StatusEdge::new(right, Point2::new(8.0, 10.0), Point2::new(8.0, 0.0), ids.vertex()));
        status.insert(StatusEdge::new(left, Point2::new(0.0, 10.0), Point2::new(0.0, 0.0), ids.vertex()));
        status.insert(StatusEdge::new(middle, Point2::new(4.0, 6.0), Point2::new(5.0, 0.0), ids.vertex()));

        let order: Vec<HalfEdgeId> = status.iter().map(|e| e.edge).collect();
        assert_eq!(order, vec![left, middle, right]);
        assert_eq!(status.len(), 3);
    }

    #[test]
    fn left_of_finds_nearest_edge() {
        let mut ids = Ids::new();
        let mut status = SweepStatus::new(TOLERANCE);
        let left = ids.edge();
        let right = ids.edge();
        status.insert(StatusEdge::new(left, Point2::new(0.0, 10.0), Point2::new(2.0, 0.0), ids.vertex()));
        status.insert(StatusEdge::new(right, Point2::new(6.0, 10.0), Point2::new(6.0, 0.0), ids.vertex()));

        assert_eq!(status.left_of(&Point2::new(4.0, 5.0)).unwrap().edge, left);
        assert_eq!(status.left_of(&Point2::new(7.0, 5.0)).unwrap().edge, right);
        assert!(status.left_of(&Point2::new(0.5, 5.0)).is_none());
    }

    #[test]
    fn helper_updates_in_place() {
        let mut ids = Ids::new();
        let mut status = SweepStatus::new(TOLERANCE);
        let edge = ids.edge();
        let first = ids.vertex();
        let second = ids.vertex();
        status.insert(StatusEdge::new(edge, Point2::new(0.0, 10.0), Point2::new(0.0, 0.0), first));
        status.left_of(&Point2::new(3.0, 5.0)).unwrap().helper = second;
        assert_eq!(status.helper(edge), Some(second));

        let removed = status.remove(edge).unwrap();
        assert_eq!(removed.helper, second);
        assert!(status.is_empty());
        assert!(status.remove(edge).is_none());
    }
}
