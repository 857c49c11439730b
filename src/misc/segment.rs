use nalgebra::Point3;

use super::FloatingPoint;

/// A segment in 3D space.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<T: FloatingPoint> {
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> Segment<T> {
    pub fn new(start: Point3<T>, end: Point3<T>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point3<T> {
        &self.start
    }

    pub fn end(&self) -> &Point3<T> {
        &self.end
    }

    pub fn length(&self) -> T {
        (self.end - self.start).norm()
    }

    /// Check if two segments cover the same points regardless of their direction.
    pub fn coincides(&self, other: &Self, tolerance: T) -> bool {
        let close = |a: &Point3<T>, b: &Point3<T>| (a - b).norm() <= tolerance;
        (close(&self.start, &other.start) && close(&self.end, &other.end))
            || (close(&self.start, &other.end) && close(&self.end, &other.start))
    }

    pub fn into_tuple(self) -> (Point3<T>, Point3<T>) {
        (self.start, self.end)
    }
}
