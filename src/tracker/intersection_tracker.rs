use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::{
    intersects::{clip_to_boundaries, PlaneIntersectionError},
    misc::{FloatingPoint, Segment},
    plane::TrackedPlane,
};

use super::{IntersectionSegment, PairKey, ReconcileReport, SegmentEvent, TrackerOptions};

/// Result of evaluating one pair of planes during a pass.
#[derive(Debug, Clone)]
enum PairOutcome<T: FloatingPoint> {
    /// Normals too close to parallel, clipping was not attempted.
    Skipped,
    Clipped(Segment<T>),
    Rejected(PlaneIntersectionError),
}

/// Maintains the set of active intersection segments between tracked planes.
///
/// Every call to [`IntersectionTracker::reconcile`] rescans all pairs of the given snapshot and
/// turns the difference with the previous pass into create / update / delete events.
/// The tracker exclusively owns its segment map, callers serialize passes through `&mut self`.
#[derive(Debug, Clone)]
pub struct IntersectionTracker<T: FloatingPoint> {
    options: TrackerOptions<T>,
    segments: BTreeMap<PairKey, IntersectionSegment<T>>,
}

impl<T: FloatingPoint> Default for IntersectionTracker<T> {
    fn default() -> Self {
        Self {
            options: TrackerOptions::default(),
            segments: BTreeMap::new(),
        }
    }
}

impl<T: FloatingPoint> IntersectionTracker<T> {
    /// Create a tracker with validated options.
    pub fn try_new(options: TrackerOptions<T>) -> anyhow::Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            segments: BTreeMap::new(),
        })
    }

    pub fn options(&self) -> &TrackerOptions<T> {
        &self.options
    }

    /// Replace the options used by subsequent passes.
    /// Active segments are kept until the next pass.
    pub fn try_set_options(&mut self, options: TrackerOptions<T>) -> anyhow::Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn segments(&self) -> impl Iterator<Item = &IntersectionSegment<T>> {
        self.segments.values()
    }

    pub fn get(&self, key: &PairKey) -> Option<&IntersectionSegment<T>> {
        self.segments.get(key)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Run a reconciliation pass over a snapshot of planes with the tracker's options.
    /// * `planes` - every plane currently known, planes not in the `Tracking` state are ignored
    pub fn reconcile(&mut self, planes: &[TrackedPlane<T>]) -> ReconcileReport<T> {
        let options = self.options.clone();
        self.pass(planes, &options)
    }

    /// Run a reconciliation pass with options given for this call only.
    pub fn reconcile_with(
        &mut self,
        planes: &[TrackedPlane<T>],
        options: &TrackerOptions<T>,
    ) -> anyhow::Result<ReconcileReport<T>> {
        options.validate()?;
        Ok(self.pass(planes, options))
    }

    /// Delete every active segment.
    pub fn clear(&mut self) -> ReconcileReport<T> {
        let events = std::mem::take(&mut self.segments)
            .into_keys()
            .map(SegmentEvent::Deleted)
            .collect_vec();
        debug!("cleared {} intersection segments", events.len());
        ReconcileReport {
            events,
            ..Default::default()
        }
    }

    fn pass(&mut self, planes: &[TrackedPlane<T>], options: &TrackerOptions<T>) -> ReconcileReport<T> {
        let planes = tracked_planes(planes);
        let pairs = (0..planes.len())
            .tuple_combinations::<(usize, usize)>()
            .collect_vec();
        let outcomes = evaluate_pairs(&planes, &pairs, options);

        let mut report = ReconcileReport::default();
        let mut seen = BTreeSet::new();

        for ((i, j), outcome) in pairs.into_iter().zip(outcomes) {
            let key = PairKey::new(planes[i].id(), planes[j].id());
            match outcome {
                PairOutcome::Skipped => report.skipped += 1,
                PairOutcome::Rejected(error) => {
                    trace!("pair {} has no segment: {}", key, error);
                    report.rejected.push((key, error));
                }
                PairOutcome::Clipped(segment) => {
                    let segment = IntersectionSegment::new(key, segment);
                    seen.insert(key);
                    let event = match self.segments.insert(key, segment.clone()) {
                        None => SegmentEvent::Created(segment),
                        Some(_) => SegmentEvent::Updated(segment),
                    };
                    report.events.push(event);
                }
            }
        }

        let stale = self
            .segments
            .keys()
            .filter(|key| !seen.contains(*key))
            .copied()
            .collect_vec();
        for key in stale {
            self.segments.remove(&key);
            report.events.push(SegmentEvent::Deleted(key));
        }

        debug!(
            "reconciled {} planes: {} created, {} updated, {} deleted, {} rejected, {} skipped",
            planes.len(),
            report.created().count(),
            report.updated().count(),
            report.deleted().count(),
            report.rejected.len(),
            report.skipped
        );

        report
    }
}

/// Planes taking part in a pass: tracking ones, first occurrence of each id.
fn tracked_planes<T: FloatingPoint>(planes: &[TrackedPlane<T>]) -> Vec<&TrackedPlane<T>> {
    let mut ids = BTreeSet::new();
    planes
        .iter()
        .filter(|plane| plane.is_tracking())
        .filter(|plane| {
            let first = ids.insert(plane.id());
            if !first {
                warn!("duplicate plane id {} in snapshot, keeping the first", plane.id());
            }
            first
        })
        .collect()
}

fn evaluate_pair<T: FloatingPoint>(
    a: &TrackedPlane<T>,
    b: &TrackedPlane<T>,
    options: &TrackerOptions<T>,
) -> PairOutcome<T> {
    let angle = a.normal().angle(b.normal()).to_degrees();
    if !options.accepts_angle(angle) {
        return PairOutcome::Skipped;
    }

    match clip_to_boundaries(a, b, options.max_distance()) {
        Ok(segment) => PairOutcome::Clipped(segment),
        Err(error) => PairOutcome::Rejected(error),
    }
}

#[cfg(not(feature = "rayon"))]
fn evaluate_pairs<T: FloatingPoint>(
    planes: &[&TrackedPlane<T>],
    pairs: &[(usize, usize)],
    options: &TrackerOptions<T>,
) -> Vec<PairOutcome<T>> {
    pairs
        .iter()
        .map(|&(i, j)| evaluate_pair(planes[i], planes[j], options))
        .collect()
}

/// Pairs are independent, results come back in pair order.
#[cfg(feature = "rayon")]
fn evaluate_pairs<T: FloatingPoint>(
    planes: &[&TrackedPlane<T>],
    pairs: &[(usize, usize)],
    options: &TrackerOptions<T>,
) -> Vec<PairOutcome<T>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(i, j)| evaluate_pair(planes[i], planes[j], options))
        .collect()
}
