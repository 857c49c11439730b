use crate::{intersects::PlaneIntersectionOptions, misc::FloatingPoint};

/// Configuration of an intersection tracker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerOptions<T> {
    /// Pairs whose normals are closer than this angle to parallel or anti-parallel are skipped.
    /// Valid range is (0, 90].
    min_angle_degrees: T,
    /// Range limit of the boundary projection fallback, must be positive.
    max_distance: T,
}

impl<T: FloatingPoint> Default for TrackerOptions<T> {
    fn default() -> Self {
        Self {
            min_angle_degrees: T::from_literal(5.),
            max_distance: T::from_literal(10.),
        }
    }
}

impl<T: FloatingPoint> TrackerOptions<T> {
    pub fn min_angle_degrees(&self) -> T {
        self.min_angle_degrees
    }

    pub fn max_distance(&self) -> T {
        self.max_distance
    }

    pub fn with_min_angle_degrees(mut self, min_angle_degrees: T) -> Self {
        self.min_angle_degrees = min_angle_degrees;
        self
    }

    pub fn with_max_distance(mut self, max_distance: T) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Check that the options are in range.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min_angle_degrees > T::zero() && self.min_angle_degrees <= T::from_literal(90.),
            "min_angle_degrees must be in (0, 90], got {}",
            self.min_angle_degrees
        );
        anyhow::ensure!(
            self.max_distance > T::zero() && self.max_distance.is_finite(),
            "max_distance must be positive and finite, got {}",
            self.max_distance
        );
        Ok(())
    }

    /// Check whether the angle between two normals is far enough from 0° and 180° to form an edge.
    pub fn accepts_angle(&self, angle_degrees: T) -> bool {
        !(angle_degrees < self.min_angle_degrees
            || angle_degrees > T::from_literal(180.) - self.min_angle_degrees)
    }

    pub fn intersection_options(&self) -> PlaneIntersectionOptions<T> {
        PlaneIntersectionOptions::default().with_max_distance(self.max_distance)
    }
}
