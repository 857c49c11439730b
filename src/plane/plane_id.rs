use std::fmt::Display;

/// Stable identifier of a tracked plane.
/// Two 64-bit halves ordered lexicographically, matching the layout of trackable ids
/// reported by the sensing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneId {
    high: u64,
    low: u64,
}

impl PlaneId {
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn low(&self) -> u64 {
        self.low
    }
}

impl From<u64> for PlaneId {
    fn from(low: u64) -> Self {
        Self::new(0, low)
    }
}

impl From<(u64, u64)> for PlaneId {
    fn from((high, low): (u64, u64)) -> Self {
        Self::new(high, low)
    }
}

impl Display for PlaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016X}-{:016X}", self.high, self.low)
    }
}
