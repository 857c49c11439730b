use crate::misc::FloatingPoint;

use super::{IntersectionSegment, PairKey};

/// Consumer of segment changes, typically the presentation layer owning the renderables.
pub trait SegmentSink<T: FloatingPoint> {
    fn on_created(&mut self, segment: &IntersectionSegment<T>);
    fn on_updated(&mut self, segment: &IntersectionSegment<T>);
    fn on_deleted(&mut self, key: PairKey);
}
