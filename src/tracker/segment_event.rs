use crate::misc::FloatingPoint;

use super::{IntersectionSegment, PairKey};

/// A change to the active segment set produced by a reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentEvent<T: FloatingPoint> {
    /// The pair intersects for the first time.
    Created(IntersectionSegment<T>),
    /// The pair still intersects, endpoints were refreshed.
    Updated(IntersectionSegment<T>),
    /// The pair no longer intersects or one of its planes is gone.
    Deleted(PairKey),
}

impl<T: FloatingPoint> SegmentEvent<T> {
    pub fn key(&self) -> PairKey {
        match self {
            SegmentEvent::Created(segment) | SegmentEvent::Updated(segment) => segment.key(),
            SegmentEvent::Deleted(key) => *key,
        }
    }

    pub fn segment(&self) -> Option<&IntersectionSegment<T>> {
        match self {
            SegmentEvent::Created(segment) | SegmentEvent::Updated(segment) => Some(segment),
            SegmentEvent::Deleted(_) => None,
        }
    }
}
