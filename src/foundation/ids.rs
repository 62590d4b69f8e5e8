use std::fmt;

/// Arena handle for a region known to the geometry source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Index into per-region tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable identity of anything that receives visual state.
///
/// Regions are addressed by their arena handle. The reading-progress bar has no backing region
/// (the host creates it on demand), so it gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    /// The reading-progress indicator.
    ProgressBar,
    /// A tracked page region.
    Region(RegionId),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgressBar => f.write_str("progress-bar"),
            Self::Region(id) => write!(f, "region:{}", id.0),
        }
    }
}

// String form so `EntityId` works as a JSON object key.
impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<RegionId> for EntityId {
    fn from(id: RegionId) -> Self {
        Self::Region(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
