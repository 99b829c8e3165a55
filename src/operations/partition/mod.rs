mod classify;
mod make_monotone;
mod sweep_status;

pub use classify::{classify_vertices, vertex_kind};
pub use make_monotone::MakeMonotone;
pub use sweep_status::{StatusEdge, SweepStatus};

pub use crate::topology::VertexKind;
