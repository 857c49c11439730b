use crate::{
    misc::{geometric_epsilon, FloatingPoint, Ray},
    plane::TrackedPlane,
};

use super::PlaneIntersectionError;

/// Compute the infinite line shared by the planes supporting two regions.
///
/// The direction is `normalize(n1 × n2)`. The reference point is taken on the line through
/// the first center along that direction, offset by the projection of `c2 - c1` onto it.
/// It is a reproducible anchor for the clipping stage, not the point closest to both centers.
///
/// Fails with `ParallelPlanes` when the squared length of the cross product is below
/// the geometric epsilon, which also covers zero-length and non-finite normals.
pub fn compute_infinite_intersection<T: FloatingPoint>(
    a: &TrackedPlane<T>,
    b: &TrackedPlane<T>,
) -> Result<Ray<T>, PlaneIntersectionError> {
    let cross = a.normal().cross(b.normal());
    let norm_squared = cross.norm_squared();

    // Written so that NaN is rejected as well
    if !(norm_squared >= geometric_epsilon()) || !norm_squared.is_finite() {
        return Err(PlaneIntersectionError::ParallelPlanes);
    }

    let direction = cross / norm_squared.sqrt();
    let t = (b.center() - a.center()).dot(&direction);
    let origin = a.center() + direction * t;

    if !origin.coords.iter().all(|c| c.is_finite()) {
        return Err(PlaneIntersectionError::ParallelPlanes);
    }

    Ok(Ray::new(origin, direction))
}
