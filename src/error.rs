use thiserror::Error;

use crate::topology::VertexId;

/// Top-level error type for polypath.
#[derive(Debug, Error)]
pub enum PolypathError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Input polygons that cannot be triangulated.
#[derive(Debug, Error, PartialEq)]
pub enum PolygonError {
    #[error("invalid polygon: {count} vertices given, at least 3 required")]
    TooFewVertices { count: usize },

    #[error("invalid polygon: vertex {index} duplicates its predecessor")]
    DuplicateVertex { index: usize },

    #[error("invalid polygon: vertex {index} is collinear with its neighbours")]
    CollinearVertex { index: usize },

    #[error("invalid polygon: enclosed area is zero")]
    ZeroArea,

    #[error("invalid polygon: vertices are in clockwise order")]
    Clockwise,
}

/// Sweep-line failures the epsilon comparator cannot resolve.
#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("degenerate sweep: vertices {first} and {second} have no consistent order")]
    AmbiguousOrder { first: usize, second: usize },

    #[error("degenerate sweep: no status edge found for vertex {vertex}")]
    MissingEdge { vertex: usize },

    #[error("degenerate sweep: no face can hold a diagonal from {from} to {to}")]
    NoDiagonalFace { from: usize, to: usize },
}

/// Errors related to the half-edge structure.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("vertex {0:?} is not on the boundary of the face")]
    NotOnFace(VertexId),
}

/// Failures of point location and path queries.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("point ({x}, {y}) lies outside the triangulated region")]
    PointOutsideMesh { x: f64, y: f64 },

    #[error("start and end triangles are not connected in the dual graph")]
    DisconnectedQuery,
}

/// Convenience type alias for results using [`PolypathError`].
pub type Result<T> = std::result::Result<T, PolypathError>;
