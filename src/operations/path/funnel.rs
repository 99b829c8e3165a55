use tracing::trace;

use crate::math::orient_2d::area2;
use crate::math::{points_equal, Point2, TOLERANCE};

/// Pulls a taut string through a sequence of portals.
///
/// Portals are `(left, right)` pairs as seen walking the corridor; the
/// first should be the degenerate portal `(start, start)` and the last
/// `(end, end)`. The funnel keeps an apex and the current left and right
/// boundary points; whenever one side would cross the other, the crossed
/// point becomes a corner of the path and the new apex.
pub struct Funnel {
    portals: Vec<(Point2, Point2)>,
    tolerance: f64,
}

impl Funnel {
    /// Creates a funnel over explicit portals.
    #[must_use]
    pub fn new(portals: Vec<(Point2, Point2)>) -> Self {
        Self {
            portals,
            tolerance: TOLERANCE,
        }
    }

    /// Creates a funnel from `start` through `inner` portals to `end`.
    #[must_use]
    pub fn between(start: Point2, inner: &[(Point2, Point2)], end: Point2) -> Self {
        let mut portals = Vec::with_capacity(inner.len() + 2);
        portals.push((start, start));
        portals.extend_from_slice(inner);
        portals.push((end, end));
        Self::new(portals)
    }

    /// Sets the tolerance used to detect coincident points.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the funnel, returning the path corners from start to end.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let Some(&(start, _)) = self.portals.first() else {
            return Vec::new();
        };
        let mut path = vec![start];

        let mut apex = start;
        let mut left = start;
        let mut right = start;
        let (mut left_index, mut right_index) = (0, 0);

        let mut i = 1;
        while i < self.portals.len() {
            let (next_left, next_right) = self.portals[i];

            if area2(&apex, &right, &next_right) >= 0.0 {
                if self.same(&apex, &right) || area2(&apex, &left, &next_right) < 0.0 {
                    right = next_right;
                    right_index = i;
                } else {
                    // Right crosses over left: the left point is a corner.
                    self.push_corner(&mut path, left);
                    apex = left;
                    right = left;
                    right_index = left_index;
                    i = left_index + 1;
                    continue;
                }
            }

            if area2(&apex, &left, &next_left) <= 0.0 {
                if self.same(&apex, &left) || area2(&apex, &right, &next_left) > 0.0 {
                    left = next_left;
                    left_index = i;
                } else {
                    // Left crosses over right: the right point is a corner.
                    self.push_corner(&mut path, right);
                    apex = right;
                    left = right;
                    left_index = right_index;
                    i = right_index + 1;
                    continue;
                }
            }
            i += 1;
        }

        if let Some(&(end, _)) = self.portals.last() {
            self.push_corner(&mut path, end);
        }
        trace!(portals = self.portals.len(), corners = path.len(), "pulled string");
        path
    }

    fn same(&self, a: &Point2, b: &Point2) -> bool {
        points_equal(a, b, self.tolerance)
    }

    fn push_corner(&self, path: &mut Vec<Point2>, point: Point2) {
        if path.last().is_some_and(|last| self.same(last, &point)) {
            return;
        }
        path.push(point);
    }
}
