use nalgebra::{Point2, Point3, Vector3};

use super::FloatingPoint;

/// Orthonormal 2D coordinate frame spanning a plane.
/// Used to run planar predicates on a polygon whatever its orientation in space.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFrame<T: FloatingPoint> {
    origin: Point3<T>,
    u: Vector3<T>,
    v: Vector3<T>,
}

impl<T: FloatingPoint> LocalFrame<T> {
    /// Build a frame on the plane through `origin` with the given normal.
    /// Returns `None` if the normal has no usable length.
    pub fn new(origin: Point3<T>, normal: &Vector3<T>) -> Option<Self> {
        let n = normal.try_normalize(T::default_epsilon())?;

        // Seed with the world axis least aligned with the normal
        let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
        let seed = if ax <= ay && ax <= az {
            Vector3::x()
        } else if ay <= az {
            Vector3::y()
        } else {
            Vector3::z()
        };

        let u = n.cross(&seed).try_normalize(T::default_epsilon())?;
        let v = n.cross(&u);
        Some(Self { origin, u, v })
    }

    pub fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    pub fn u(&self) -> &Vector3<T> {
        &self.u
    }

    pub fn v(&self) -> &Vector3<T> {
        &self.v
    }

    /// Drop the normal component of a point and express it in frame coordinates.
    pub fn project(&self, point: &Point3<T>) -> Point2<T> {
        let d = point - self.origin;
        Point2::new(d.dot(&self.u), d.dot(&self.v))
    }

    /// Lift frame coordinates back into world space.
    pub fn unproject(&self, point: &Point2<T>) -> Point3<T> {
        self.origin + self.u * point.x + self.v * point.y
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Point3, Vector3};

    use super::LocalFrame;

    #[test]
    fn frame_is_orthonormal() {
        let normal = Vector3::new(0.3, -0.8, 0.52).normalize();
        let frame = LocalFrame::new(Point3::new(1., 2., 3.), &normal).unwrap();
        assert_relative_eq!(frame.u().norm(), 1., epsilon = 1e-12);
        assert_relative_eq!(frame.v().norm(), 1., epsilon = 1e-12);
        assert_relative_eq!(frame.u().dot(frame.v()), 0., epsilon = 1e-12);
        assert_relative_eq!(frame.u().dot(&normal), 0., epsilon = 1e-12);
        assert_relative_eq!(frame.v().dot(&normal), 0., epsilon = 1e-12);
    }

    #[test]
    fn project_then_unproject() {
        let frame = LocalFrame::new(Point3::new(0., 0., 1.), &Vector3::x()).unwrap();
        let p = Point2::new(0.25, -1.5);
        assert_relative_eq!(frame.project(&frame.unproject(&p)), p, epsilon = 1e-12);
        // Offsets along the normal vanish
        let q = frame.unproject(&p) + Vector3::x() * 4.;
        assert_relative_eq!(frame.project(&q), p, epsilon = 1e-12);
    }

    #[test]
    fn zero_normal_has_no_frame() {
        assert!(LocalFrame::new(Point3::<f64>::origin(), &Vector3::zeros()).is_none());
    }
}
