//! Fixed geometric tolerances.
//! These are not user configurable: they guard numerically ill-conditioned cases
//! rather than express a policy.

use super::FloatingPoint;

/// Squared magnitude below which a cross product or a projected direction is treated as zero.
/// Used to detect parallel planes and edges parallel to a plane.
pub const GEOMETRIC_EPSILON: f64 = 1e-3;

/// Minimum distance between two endpoints of a valid intersection segment.
/// Points closer than this are also merged when collecting edge crossings.
pub const MINIMUM_SEGMENT_SEPARATION: f64 = 1e-2;

/// Slack allowed beyond an edge's endpoints when accepting a crossing,
/// and around a polygon's boundary when testing containment.
pub const EDGE_PARAMETER_TOLERANCE: f64 = 1e-2;

pub fn geometric_epsilon<T: FloatingPoint>() -> T {
    T::from_literal(GEOMETRIC_EPSILON)
}

pub fn minimum_segment_separation<T: FloatingPoint>() -> T {
    T::from_literal(MINIMUM_SEGMENT_SEPARATION)
}

pub fn edge_parameter_tolerance<T: FloatingPoint>() -> T {
    T::from_literal(EDGE_PARAMETER_TOLERANCE)
}
