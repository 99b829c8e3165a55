mod containment;
mod is_monotone;
mod locate_point;

pub use containment::{convex_containment, Containment};
pub use is_monotone::IsMonotone;
pub use locate_point::LocatePoint;
