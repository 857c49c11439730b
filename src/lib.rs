//! Intersection segments between planar regions tracked by a sensing platform.
//!
//! Plane-plane clipping computes where two finite planes meet, and `IntersectionTracker`
//! keeps a keyed set of those segments in sync with a changing set of planes.
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use plane_edges::prelude::*;
//!
//! let square = |id: u64, normal: Vector3<f64>, u: Vector3<f64>, v: Vector3<f64>| {
//!     let boundary = [(-1., -1.), (1., -1.), (1., 1.), (-1., 1.)]
//!         .iter()
//!         .map(|&(s, t)| Point3::origin() + u * s + v * t)
//!         .collect();
//!     TrackedPlane::new(id, Point3::origin(), normal, boundary)
//! };
//! let floor = square(1, Vector3::y(), Vector3::x(), Vector3::z());
//! let wall = square(2, Vector3::x(), Vector3::y(), Vector3::z());
//!
//! let mut tracker = IntersectionTracker::default();
//! let report = tracker.reconcile(&[floor, wall]);
//! assert_eq!(report.created().collect::<Vec<_>>(), vec![PairKey::new(1, 2)]);
//! assert!((tracker.get(&PairKey::new(2, 1)).unwrap().length() - 2.).abs() < 1e-9);
//! ```

mod intersects;
mod misc;
mod plane;
mod tracker;

pub mod prelude {
    pub use crate::intersects::*;
    pub use crate::misc::*;
    pub use crate::plane::*;
    pub use crate::tracker::*;
}
