use nalgebra::{Point3, Vector3};

use super::{FloatingPoint, Ray, Segment};

/// An infinite plane in 3D space, `normal · p + constant = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T: FloatingPoint> {
    normal: Vector3<T>,
    constant: T,
}

impl<T: FloatingPoint> Plane<T> {
    pub fn new(normal: Vector3<T>, constant: T) -> Self {
        Self { normal, constant }
    }

    /// Create a plane passing through `point`.
    /// The normal is normalized when it has a usable length and kept as is otherwise.
    pub fn from_point_and_normal(point: &Point3<T>, normal: &Vector3<T>) -> Self {
        let normal = normal
            .try_normalize(T::default_epsilon())
            .unwrap_or(*normal);
        Self {
            normal,
            constant: -normal.dot(&point.coords),
        }
    }

    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    pub fn constant(&self) -> T {
        self.constant
    }

    /// Calculate the signed distance from a point to the plane.
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        self.normal.dot(&point.coords) + self.constant
    }

    /// Find where a finite segment crosses the plane.
    /// * `epsilon` - edges whose unit direction projects on the normal below this are treated as parallel
    /// * `tolerance` - distance allowed beyond the segment's endpoints to absorb rounding
    pub fn intersect_segment(
        &self,
        segment: &Segment<T>,
        epsilon: T,
        tolerance: T,
    ) -> Option<Point3<T>> {
        let dir = segment.end() - segment.start();
        let length = dir.norm();
        if length <= T::default_epsilon() {
            return None;
        }

        let unit = dir / length;
        let denominator = self.normal.dot(&unit);
        if denominator.abs() < epsilon {
            return None;
        }

        let t = -self.signed_distance(segment.start()) / denominator;
        if t < -tolerance || t > length + tolerance {
            return None;
        }

        Some(segment.start() + unit * t)
    }

    /// Find the line shared with another plane.
    /// The origin of the returned ray is the point of the line closest to the world origin,
    /// so it does not depend on which plane comes first.
    /// Returns `None` when the squared length of the normals' cross product is below `epsilon`.
    pub fn intersect_plane(&self, other: &Plane<T>, epsilon: T) -> Option<Ray<T>> {
        let cross = self.normal.cross(&other.normal);
        let denominator = cross.norm_squared();
        if !(denominator >= epsilon) || !denominator.is_finite() {
            return None;
        }

        // n · p = d on both planes
        let (d0, d1) = (-self.constant, -other.constant);
        let origin = (other.normal.cross(&cross) * d0 + cross.cross(&self.normal) * d1) / denominator;
        Some(Ray::new(origin.into(), cross / denominator.sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use super::*;

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane::from_point_and_normal(&Point3::new(0., 1., 0.), &Vector3::new(0., 2., 0.));
        assert_relative_eq!(plane.normal(), Vector3::y());
        assert_relative_eq!(plane.signed_distance(&Point3::new(3., 4., -1.)), 3.);
        assert_relative_eq!(plane.signed_distance(&Point3::origin()), -1.);
    }

    #[test]
    fn segment_crossing() {
        let plane = Plane::from_point_and_normal(&Point3::origin(), &Vector3::x());
        let segment = Segment::new(Point3::new(-1., 0., 2.), Point3::new(3., 0., 2.));
        let p = plane.intersect_segment(&segment, 1e-3, 1e-2).unwrap();
        assert_relative_eq!(p, Point3::new(0., 0., 2.), epsilon = 1e-12);
    }

    #[test]
    fn segment_crossing_rejects_parallel_and_distant_edges() {
        let plane = Plane::from_point_and_normal(&Point3::origin(), &Vector3::x());

        let parallel = Segment::new(Point3::new(1., 0., 0.), Point3::new(1., 0., 5.));
        assert!(plane.intersect_segment(&parallel, 1e-3, 1e-2).is_none());

        let beyond_end = Segment::new(Point3::new(1., 0., 0.), Point3::new(2., 0., 0.));
        assert!(plane.intersect_segment(&beyond_end, 1e-3, 1e-2).is_none());

        let before_start = Segment::new(Point3::new(-2., 0., 0.), Point3::new(-1., 0., 0.));
        assert!(plane.intersect_segment(&before_start, 1e-3, 1e-2).is_none());

        // Within tolerance past the endpoint
        let touching = Segment::new(Point3::new(-1., 0., 0.), Point3::new(-0.005, 0., 0.));
        assert!(plane.intersect_segment(&touching, 1e-3, 1e-2).is_some());
    }

    #[test]
    fn shared_line_lies_on_both_planes() {
        let a = Plane::from_point_and_normal(&Point3::new(1., 2., 3.), &Vector3::new(1., 1., 0.));
        let b = Plane::from_point_and_normal(&Point3::new(-2., 0., 5.), &Vector3::z());

        let ab = a.intersect_plane(&b, 1e-3).unwrap();
        let ba = b.intersect_plane(&a, 1e-3).unwrap();
        assert_relative_eq!(ab.origin(), ba.origin(), epsilon = 1e-12);
        assert_relative_eq!(ab.direction(), &-ba.direction(), epsilon = 1e-12);

        [-3., 0., 2.5].iter().for_each(|&t| {
            let p = ab.point_at(t);
            assert_relative_eq!(a.signed_distance(&p), 0., epsilon = 1e-12);
            assert_relative_eq!(b.signed_distance(&p), 0., epsilon = 1e-12);
        });
    }

    #[test]
    fn parallel_planes_share_no_line() {
        let a = Plane::from_point_and_normal(&Point3::origin(), &Vector3::y());
        let b = Plane::from_point_and_normal(&Point3::new(0., 1., 0.), &-Vector3::y());
        assert!(a.intersect_plane(&b, 1e-3).is_none());
    }
}
