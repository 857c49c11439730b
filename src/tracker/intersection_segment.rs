use nalgebra::Point3;

use crate::misc::{FloatingPoint, Segment};

use super::PairKey;

/// A visible intersection between two tracked planes.
/// Endpoints are always farther apart than the minimum segment separation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionSegment<T: FloatingPoint> {
    key: PairKey,
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> IntersectionSegment<T> {
    pub(crate) fn new(key: PairKey, segment: Segment<T>) -> Self {
        let (start, end) = segment.into_tuple();
        Self { key, start, end }
    }

    pub fn key(&self) -> PairKey {
        self.key
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

    pub fn segment(&self) -> Segment<T> {
        Segment::new(self.start, self.end)
    }
}
