use itertools::Itertools;
use nalgebra::{Point2, Point3, Vector3};

use super::{orientation, segment_distance, FloatingPoint, LocalFrame, Orientation};

/// A closed 2D polygon given by its vertices, the closing edge is implicit.
#[derive(Debug, Clone)]
pub struct PolygonBoundary<T: FloatingPoint> {
    vertices: Vec<Point2<T>>,
}

impl<T: FloatingPoint> PolygonBoundary<T> {
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &Vec<Point2<T>> {
        &self.vertices
    }

    /// Iterate the closed edge loop `(v[i], v[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2<T>, &Point2<T>)> {
        self.vertices.iter().circular_tuple_windows()
    }

    /// Check if a point lies within `tolerance` of the polygon's outline.
    pub fn is_on_boundary(&self, c: &Point2<T>, tolerance: T) -> bool {
        self.edges()
            .any(|(p0, p1)| segment_distance(c, p0, p1) <= tolerance)
    }

    /// Check if a point is inside the polygon or within `tolerance` of its outline.
    /// Interior points are found by casting a ray along +x and summing the signed edge crossings.
    /// ```
    /// use nalgebra::Point2;
    /// use plane_edges::prelude::PolygonBoundary;
    /// let boundary = PolygonBoundary::new(vec![
    ///   Point2::new(0., 0.),
    ///   Point2::new(1., 0.),
    ///   Point2::new(1., 1.),
    ///   Point2::new(0., 1.),
    /// ]);
    /// assert!(boundary.contains(&Point2::new(0.5, 0.5), 1e-2));
    /// assert!(boundary.contains(&Point2::new(1.005, 0.5), 1e-2));
    /// assert!(!boundary.contains(&Point2::new(0.5, 1.5), 1e-2));
    /// ```
    pub fn contains(&self, c: &Point2<T>, tolerance: T) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        if self.is_on_boundary(c, tolerance) {
            return true;
        }

        let winding_number = self.edges().fold(0_i32, |winding_number, (p0, p1)| {
            if p0.y <= c.y {
                if p1.y > c.y && orientation(p0, p1, c) == Orientation::CounterClockwise {
                    return winding_number + 1;
                }
            } else if p1.y <= c.y && orientation(p0, p1, c) == Orientation::Clockwise {
                return winding_number - 1;
            }
            winding_number
        });
        winding_number != 0
    }
}

impl<T: FloatingPoint> FromIterator<Point2<T>> for PolygonBoundary<T> {
    fn from_iter<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A world-space polygon flattened into its own plane's local frame.
#[derive(Debug, Clone)]
pub struct PlanarPolygon<T: FloatingPoint> {
    frame: LocalFrame<T>,
    boundary: PolygonBoundary<T>,
}

impl<T: FloatingPoint> PlanarPolygon<T> {
    /// Flatten `vertices` onto the plane through `origin` with `normal`.
    /// Returns `None` if the normal has no usable length.
    pub fn new(vertices: &[Point3<T>], origin: Point3<T>, normal: &Vector3<T>) -> Option<Self> {
        let frame = LocalFrame::new(origin, normal)?;
        let boundary = vertices.iter().map(|v| frame.project(v)).collect();
        Some(Self { frame, boundary })
    }

    pub fn frame(&self) -> &LocalFrame<T> {
        &self.frame
    }

    pub fn boundary(&self) -> &PolygonBoundary<T> {
        &self.boundary
    }

    /// Boundary-inclusive containment of a world-space point, ignoring its offset along the normal.
    pub fn contains(&self, point: &Point3<T>, tolerance: T) -> bool {
        self.boundary.contains(&self.frame.project(point), tolerance)
    }
}
