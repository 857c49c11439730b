use itertools::Itertools;
use nalgebra::{Isometry3, Point2, Point3, Vector3};

use crate::misc::{FloatingPoint, PlanarPolygon, Plane, Segment};

use super::{PlaneId, TrackingState};

/// A finite planar region estimated by the sensing platform.
/// Pose and boundary are expressed in world space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedPlane<T: FloatingPoint> {
    id: PlaneId,
    center: Point3<T>,
    normal: Vector3<T>,
    /// Closed polygon, the edge from the last vertex back to the first is implicit.
    boundary: Vec<Point3<T>>,
    tracking_state: TrackingState,
}

impl<T: FloatingPoint> TrackedPlane<T> {
    /// Create an actively tracked plane from world-space data.
    pub fn new(
        id: impl Into<PlaneId>,
        center: Point3<T>,
        normal: Vector3<T>,
        boundary: Vec<Point3<T>>,
    ) -> Self {
        Self {
            id: id.into(),
            center,
            normal,
            boundary,
            tracking_state: TrackingState::Tracking,
        }
    }

    /// Create a plane from its pose and a boundary given in plane-local coordinates.
    /// Local boundary points `(x, y)` lie on the pose's local X/Z plane at `(x, 0, y)`,
    /// and the pose's local +Y axis is the plane normal.
    /// ```
    /// use approx::assert_relative_eq;
    /// use nalgebra::{Isometry3, Point2, Point3, Vector3};
    /// use plane_edges::prelude::TrackedPlane;
    ///
    /// // A wall facing +X, one unit away from the origin
    /// let pose = Isometry3::new(
    ///     Vector3::new(1., 0., 0.),
    ///     Vector3::z() * -std::f64::consts::FRAC_PI_2,
    /// );
    /// let plane = TrackedPlane::from_local_boundary(7, &pose, &[Point2::new(0.5, 0.)]);
    /// assert_relative_eq!(plane.normal(), &Vector3::x(), epsilon = 1e-12);
    /// assert_relative_eq!(plane.boundary()[0], Point3::new(1., -0.5, 0.), epsilon = 1e-12);
    /// ```
    pub fn from_local_boundary(
        id: impl Into<PlaneId>,
        pose: &Isometry3<T>,
        local_boundary: &[Point2<T>],
    ) -> Self {
        let boundary = local_boundary
            .iter()
            .map(|p| pose * Point3::new(p.x, T::zero(), p.y))
            .collect();
        Self::new(
            id,
            pose.translation.vector.into(),
            &pose.rotation * Vector3::y(),
            boundary,
        )
    }

    pub fn with_tracking_state(mut self, tracking_state: TrackingState) -> Self {
        self.tracking_state = tracking_state;
        self
    }

    pub fn with_center(mut self, center: Point3<T>) -> Self {
        self.center = center;
        self
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn boundary(&self) -> &[Point3<T>] {
        &self.boundary
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.tracking_state
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking_state.is_tracking()
    }

    /// A boundary needs at least three vertices to enclose any area.
    pub fn has_boundary(&self) -> bool {
        self.boundary.len() >= 3
    }

    /// The infinite plane supporting this region.
    pub fn plane(&self) -> Plane<T> {
        Plane::from_point_and_normal(&self.center, &self.normal)
    }

    /// The boundary flattened into the plane's own 2D frame.
    pub fn polygon(&self) -> Option<PlanarPolygon<T>> {
        PlanarPolygon::new(&self.boundary, self.center, &self.normal)
    }

    /// Iterate the closed boundary edge loop.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.boundary
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| Segment::new(*a, *b))
    }

    /// The boundary loop lifted along the normal by `height_offset`, closed by repeating its first vertex.
    /// Empty when the plane has no boundary yet.
    pub fn outline(&self, height_offset: T) -> Vec<Point3<T>> {
        let lift = self
            .normal
            .try_normalize(T::default_epsilon())
            .unwrap_or_else(Vector3::zeros)
            * height_offset;
        self.boundary
            .iter()
            .chain(self.boundary.first())
            .map(|p| p + lift)
            .collect()
    }
}
