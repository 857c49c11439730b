/// Tracking quality reported by the sensing platform for a plane.
/// Only `Tracking` planes take part in intersection passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingState {
    /// Not tracked at all.
    None,
    /// Tracked, but the pose may be stale or unreliable.
    Limited,
    /// Actively tracked.
    #[default]
    Tracking,
}

impl TrackingState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingState::Tracking)
    }
}

