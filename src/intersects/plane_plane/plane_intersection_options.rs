use crate::misc::FloatingPoint;

/// Options for clipping a plane-plane intersection to the planes' boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneIntersectionOptions<T> {
    /// Farthest a boundary vertex may lie from the intersection line, and a projected endpoint from
    /// the line's reference point, when the boundaries do not cross each other.
    max_distance: T,
}

impl<T: FloatingPoint> Default for PlaneIntersectionOptions<T> {
    fn default() -> Self {
        Self {
            max_distance: T::from_literal(10.),
        }
    }
}

impl<T: FloatingPoint> PlaneIntersectionOptions<T> {
    pub fn max_distance(&self) -> T {
        self.max_distance
    }

    pub fn with_max_distance(mut self, max_distance: T) -> Self {
        self.max_distance = max_distance;
        self
    }
}
