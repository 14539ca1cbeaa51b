mod area;
mod closest_point;
mod contains;
mod singular;

pub use area::{Area, SignedArea};
pub use closest_point::{ClosestEdge, ClosestVertex, EdgeHit};
pub use contains::ContainsPoint;
pub use singular::IsSingular;
