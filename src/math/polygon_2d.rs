use super::orient_2d::{orientation, Orientation};
use super::{points_equal, Point2};
use crate::error::PolygonError;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Removes consecutive duplicate points, including a closing point equal to the first.
#[must_use]
pub fn remove_duplicates(points: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_some_and(|last| points_equal(last, p, tol)) {
            continue;
        }
        out.push(*p);
    }
    while out.len() > 1 && out.first().zip(out.last()).is_some_and(|(f, l)| points_equal(f, l, tol)) {
        out.pop();
    }
    out
}

/// Removes every vertex that is collinear with its two cyclic neighbours.
#[must_use]
pub fn remove_collinear(points: &[Point2], tol: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        while out.len() >= 2
            && orientation(&out[out.len() - 2], &out[out.len() - 1], p, tol) == Orientation::Collinear
        {
            out.pop();
        }
        out.push(*p);
    }

    // Wrap-around: the seam between the last and the first vertex.
    loop {
        let n = out.len();
        if n < 3 {
            break;
        }
        if orientation(&out[n - 2], &out[n - 1], &out[0], tol) == Orientation::Collinear {
            out.pop();
        } else if orientation(&out[n - 1], &out[0], &out[1], tol) == Orientation::Collinear {
            out.remove(0);
        } else {
            break;
        }
    }
    out
}

/// Checks that a polygon has no repeated or collinear consecutive vertices.
///
/// # Errors
///
/// Returns the first [`PolygonError`] found, in vertex order.
pub fn check_polygon(points: &[Point2], tol: f64) -> Result<(), PolygonError> {
    let n = points.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { count: n });
    }
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        if points_equal(prev, &points[i], tol) {
            return Err(PolygonError::DuplicateVertex { index: i });
        }
    }
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];
        if orientation(prev, &points[i], next, tol) == Orientation::Collinear {
            return Err(PolygonError::CollinearVertex { index: i });
        }
    }
    if signed_area(points).abs() <= tol {
        return Err(PolygonError::ZeroArea);
    }
    Ok(())
}

/// Centroid of a triangle.
#[must_use]
pub fn triangle_centroid(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}
