use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// An infinite line in 3D space, described by a reference point and a direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray<T: FloatingPoint> {
    pub(crate) origin: Point3<T>,
    pub(crate) direction: Vector3<T>,
}

impl<T: FloatingPoint> Ray<T> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    pub fn point_at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Project a point onto the line.
    /// Returns the parameter and the projected point.
    /// The direction is expected to be unit length.
    pub fn project(&self, point: &Point3<T>) -> (T, Point3<T>) {
        let t = (point - self.origin).dot(&self.direction);
        (t, self.point_at(t))
    }

    /// Perpendicular distance from a point to the line.
    pub fn distance_to(&self, point: &Point3<T>) -> T {
        let (_, projected) = self.project(point);
        (point - projected).norm()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use super::Ray;

    #[test]
    fn projection_onto_line() {
        let ray = Ray::new(Point3::new(1., 0., 0.), Vector3::z());
        let (t, p) = ray.project(&Point3::new(3., 2., 5.));
        assert_relative_eq!(t, 5.);
        assert_relative_eq!(p, Point3::new(1., 0., 5.));
        assert_relative_eq!(ray.distance_to(&Point3::new(3., 2., 5.)), 8_f64.sqrt());
    }
}
