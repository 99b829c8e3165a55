use crate::math::orient_2d::{orientation, Orientation};
use crate::math::Point2;

/// Where a point lies relative to a closed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Strictly inside.
    Inside,
    /// On an edge or a corner, within tolerance.
    OnBoundary,
    /// Strictly outside.
    Outside,
}

/// Classifies `point` against a convex counter-clockwise ring.
///
/// The point is inside when it is strictly left of every directed edge.
#[must_use]
pub fn convex_containment(ring: &[Point2], point: &Point2, tol: f64) -> Containment {
    let n = ring.len();
    let mut on_edge = false;
    for i in 0..n {
        match orientation(&ring[i], &ring[(i + 1) % n], point, tol) {
            Orientation::Clockwise => return Containment::Outside,
            Orientation::Collinear => on_edge = true,
            Orientation::CounterClockwise => {}
        }
    }
    if on_edge {
        Containment::OnBoundary
    } else {
        Containment::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn triangle() -> [Point2; 3] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn tri_state() {
        let t = triangle();
        assert_eq!(convex_containment(&t, &Point2::new(1.0, 1.0), TOLERANCE), Containment::Inside);
        assert_eq!(convex_containment(&t, &Point2::new(2.0, 0.0), TOLERANCE), Containment::OnBoundary);
        assert_eq!(convex_containment(&t, &Point2::new(0.0, 0.0), TOLERANCE), Containment::OnBoundary);
        assert_eq!(convex_containment(&t, &Point2::new(3.0, 3.0), TOLERANCE), Containment::Outside);
    }

    #[test]
    fn collinear_extension_is_outside() {
        // On the line through an edge but beyond its end.
        let t = triangle();
        assert_eq!(convex_containment(&t, &Point2::new(6.0, 0.0), TOLERANCE), Containment::Outside);
    }
}
