pub mod partition;
pub mod path;
pub mod query;
pub mod triangulate;
