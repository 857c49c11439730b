use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint, RealField};

/// Find the closest point on a segment
/// * `pt` - point to project
/// * `start` - start point of segment
/// * `end` - end point of segment
///
/// Returns the normalized parameter in [0, 1] along with the point.
pub fn segment_closest_point<T: RealField + Copy, D: DimName>(
    pt: &OPoint<T, D>,
    start: &OPoint<T, D>,
    end: &OPoint<T, D>,
) -> (T, OPoint<T, D>)
where
    DefaultAllocator: Allocator<D>,
{
    let dif = end - start;
    let l = dif.norm();

    if l < T::default_epsilon() {
        return (T::zero(), start.clone());
    }

    let r = dif / l;
    let do2ptr = (pt - start).dot(&r);

    if do2ptr < T::zero() {
        (T::zero(), start.clone())
    } else if do2ptr > l {
        (T::one(), end.clone())
    } else {
        (do2ptr / l, (r * do2ptr + start.coords.clone()).into())
    }
}

/// Distance from a point to a segment.
pub fn segment_distance<T: RealField + Copy, D: DimName>(
    pt: &OPoint<T, D>,
    start: &OPoint<T, D>,
    end: &OPoint<T, D>,
) -> T
where
    DefaultAllocator: Allocator<D>,
{
    let (_, closest) = segment_closest_point(pt, start, end);
    (pt - closest).norm()
}
