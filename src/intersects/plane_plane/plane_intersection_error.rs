use thiserror::Error;

/// Why a pair of planes currently has no visible intersection.
/// Every variant is a local outcome for one pair: it may turn into a segment on a later pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PlaneIntersectionError {
    /// The normals are nearly collinear, no intersection line is well defined.
    #[error("planes are parallel")]
    ParallelPlanes,
    /// At least one plane has no boundary polygon yet.
    #[error("plane boundary is empty")]
    EmptyBoundary,
    /// The infinite line exists but no finite segment was found within range.
    #[error("no overlap between plane boundaries")]
    NoOverlap,
    /// The computed endpoints coincide.
    #[error("intersection segment is degenerate")]
    DegenerateSegment,
}
