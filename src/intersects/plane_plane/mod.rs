pub mod clip_to_boundaries;
pub mod infinite_intersection;
pub mod intersection_plane_plane;
pub mod plane_intersection_error;
pub mod plane_intersection_options;

pub use clip_to_boundaries::*;
pub use infinite_intersection::*;
pub use plane_intersection_error::*;
pub use plane_intersection_options::*;
