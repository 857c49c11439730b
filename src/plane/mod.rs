pub mod plane_id;
pub mod tracked_plane;
pub mod tracking_state;

pub use plane_id::*;
pub use tracked_plane::*;
pub use tracking_state::*;
