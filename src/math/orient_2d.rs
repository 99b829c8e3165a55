use std::cmp::Ordering;

use super::{compare, Point2};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a -> b`.
    Clockwise,
    /// The three points are collinear within tolerance.
    Collinear,
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when the triangle is counter-clockwise.
#[must_use]
pub fn area2(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Classifies the turn `a -> b -> c`.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2, tol: f64) -> Orientation {
    match compare(area2(a, b, c), 0.0, tol) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
    }
}

/// Returns `true` if `c` is strictly left of the directed line `a -> b`.
#[must_use]
pub fn is_left(a: &Point2, b: &Point2, c: &Point2, tol: f64) -> bool {
    orientation(a, b, c, tol) == Orientation::CounterClockwise
}

/// Sweep order: decreasing y, ties broken by increasing x.
///
/// `Less` means `a` is met by a downward sweep before `b`, i.e. `a` is above `b`.
/// `Equal` means the points cannot be told apart within `tol`.
#[must_use]
pub fn sweep_order(a: &Point2, b: &Point2, tol: f64) -> Ordering {
    match compare(a.y, b.y, tol) {
        Ordering::Equal => compare(a.x, b.x, tol),
        other => other.reverse(),
    }
}

/// Returns `true` if `a` comes strictly before `b` in sweep order.
#[must_use]
pub fn is_above(a: &Point2, b: &Point2, tol: f64) -> bool {
    sweep_order(a, b, tol) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn area2_ccw_positive() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!((area2(&a, &b, &c) - 1.0).abs() < TOLERANCE);
        assert!((area2(&a, &c, &b) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn orientation_collinear() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert_eq!(orientation(&a, &b, &c, TOLERANCE), Orientation::Collinear);
        assert!(!is_left(&a, &b, &c, TOLERANCE));
    }

    #[test]
    fn sweep_order_prefers_higher_then_left() {
        let high = Point2::new(5.0, 3.0);
        let low = Point2::new(0.0, 1.0);
        assert_eq!(sweep_order(&high, &low, TOLERANCE), Ordering::Less);

        let left = Point2::new(0.0, 2.0);
        let right = Point2::new(1.0, 2.0);
        assert!(is_above(&left, &right, TOLERANCE));
        assert!(!is_above(&right, &left, TOLERANCE));
    }

    #[test]
    fn sweep_order_equal_points() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + 1e-13, 1.0 - 1e-13);
        assert_eq!(sweep_order(&a, &b, TOLERANCE), Ordering::Equal);
    }
}
