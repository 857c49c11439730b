use crate::{
    misc::{FloatingPoint, Segment},
    plane::TrackedPlane,
    prelude::Intersects,
};

use super::{clip_to_boundaries, PlaneIntersectionError, PlaneIntersectionOptions};

impl<'a, T: FloatingPoint> Intersects<'a, &'a TrackedPlane<T>> for TrackedPlane<T> {
    type Output = Result<Segment<T>, PlaneIntersectionError>;
    type Option = Option<PlaneIntersectionOptions<T>>;

    /// Find the visible intersection segment between two planar regions
    /// * `other` - The plane to intersect with
    /// * `option` - Clipping options, defaults are used if `None`
    fn find_intersection(&'a self, other: &'a TrackedPlane<T>, option: Self::Option) -> Self::Output {
        let options = option.unwrap_or_default();
        clip_to_boundaries(self, other, options.max_distance())
    }
}
