pub mod error;
pub mod graph;
pub mod math;
pub mod operations;
pub mod topology;
pub mod triangulation;

pub use error::{PolypathError, Result};
pub use triangulation::{TriangleMesh, Triangulation, TriangulationParams};
