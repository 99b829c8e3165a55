mod triangulate_monotone;
mod triangulate_polygon;

pub use triangulate_monotone::TriangulateMonotone;
pub use triangulate_polygon::{prepare_polygon, TriangulatePolygon};
