use crate::{intersects::PlaneIntersectionError, misc::FloatingPoint};

use super::{PairKey, SegmentEvent, SegmentSink};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileReport<T: FloatingPoint> {
    /// Created and updated segments in pair scan order, followed by deletions in key order.
    pub(crate) events: Vec<SegmentEvent<T>>,
    /// Pairs that passed the angle filter but produced no segment.
    pub(crate) rejected: Vec<(PairKey, PlaneIntersectionError)>,
    /// Pairs skipped because their normals were too close to parallel.
    pub(crate) skipped: usize,
}

impl<T: FloatingPoint> Default for ReconcileReport<T> {
    fn default() -> Self {
        Self {
            events: vec![],
            rejected: vec![],
            skipped: 0,
        }
    }
}

impl<T: FloatingPoint> ReconcileReport<T> {
    pub fn events(&self) -> &[SegmentEvent<T>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SegmentEvent<T>> {
        self.events
    }

    pub fn rejected(&self) -> &[(PairKey, PlaneIntersectionError)] {
        &self.rejected
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn created(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.events.iter().filter_map(|e| match e {
            SegmentEvent::Created(s) => Some(s.key()),
            _ => None,
        })
    }

    pub fn updated(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.events.iter().filter_map(|e| match e {
            SegmentEvent::Updated(s) => Some(s.key()),
            _ => None,
        })
    }

    pub fn deleted(&self) -> impl Iterator<Item = PairKey> + '_ {
        self.events.iter().filter_map(|e| match e {
            SegmentEvent::Deleted(key) => Some(*key),
            _ => None,
        })
    }

    /// True if the pass created or deleted anything.
    pub fn has_structural_changes(&self) -> bool {
        self.events
            .iter()
            .any(|e| !matches!(e, SegmentEvent::Updated(_)))
    }

    /// Forward every event to a sink, in order.
    pub fn dispatch<S: SegmentSink<T> + ?Sized>(&self, sink: &mut S) {
        self.events.iter().for_each(|e| match e {
            SegmentEvent::Created(s) => sink.on_created(s),
            SegmentEvent::Updated(s) => sink.on_updated(s),
            SegmentEvent::Deleted(key) => sink.on_deleted(*key),
        });
    }
}
