mod corridor;
mod funnel;
mod shortest_path;

pub use corridor::{Corridor, FindCorridor};
pub use funnel::Funnel;
pub use shortest_path::{ShortestPath, ShortestPathQuery};
