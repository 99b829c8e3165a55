pub mod orient_2d;
pub mod polygon_2d;

use std::cmp::Ordering;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Compares two scalars, treating values closer than `tol` as equal.
#[must_use]
pub fn compare(a: f64, b: f64, tol: f64) -> Ordering {
    if (a - b).abs() <= tol {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Returns `true` if the two points coincide within `tol` on both axes.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2, tol: f64) -> bool {
    compare(a.x, b.x, tol).is_eq() && compare(a.y, b.y, tol).is_eq()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_within_tolerance() {
        assert_eq!(compare(1.0, 1.0 + 1e-12, TOLERANCE), Ordering::Equal);
        assert_eq!(compare(1.0, 2.0, TOLERANCE), Ordering::Less);
        assert_eq!(compare(2.0, 1.0, TOLERANCE), Ordering::Greater);
    }

    #[test]
    fn points_equal_basic() {
        assert!(points_equal(
            &Point2::new(1.0, 2.0),
            &Point2::new(1.0 + 1e-12, 2.0),
            TOLERANCE
        ));
        assert!(!points_equal(
            &Point2::new(1.0, 2.0),
            &Point2::new(1.0, 2.1),
            TOLERANCE
        ));
    }
}
