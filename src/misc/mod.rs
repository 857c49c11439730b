pub mod floating_point;
pub mod local_frame;
pub mod orientation;
pub mod plane;
pub mod polygon_boundary;
pub mod ray;
pub mod segment;
pub mod tolerance;
pub mod trigonometry;

pub use floating_point::*;
pub use local_frame::*;
pub use orientation::*;
pub use plane::*;
pub use polygon_boundary::*;
pub use ray::*;
pub use segment::*;
pub use tolerance::*;
pub use trigonometry::*;
