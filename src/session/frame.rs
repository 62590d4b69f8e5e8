use std::collections::BTreeMap;

use crate::choreography::progress::ReadingProgress;
use crate::foundation::core::ScrollState;
use crate::foundation::ids::{EntityId, RegionId};
use crate::foundation::visual::VisualState;

/// One batched visual-state update, produced per tick.
///
/// Entities are ordered by handle, so two updates computed from the same inputs serialize
/// identically.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameUpdate {
    /// Snapshot the update was computed from.
    pub scroll: ScrollState,
    /// Reading progress, when a content region is declared and measurable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ReadingProgress>,
    /// Target state per entity.
    pub states: BTreeMap<EntityId, VisualState>,
}

impl FrameUpdate {
    pub(crate) fn new(scroll: ScrollState) -> Self {
        Self {
            scroll,
            progress: None,
            states: BTreeMap::new(),
        }
    }

    /// Merge `state` into the entry for `id`; later writers win per field. Empty states are dropped.
    pub(crate) fn put(&mut self, id: impl Into<EntityId>, state: VisualState) {
        if state.is_empty() {
            return;
        }
        self.states.entry(id.into()).or_default().merge(state);
    }

    /// State for a region, if one was emitted.
    pub fn region(&self, id: RegionId) -> Option<&VisualState> {
        self.states.get(&EntityId::Region(id))
    }

    /// Number of entities updated.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` when no entity was updated.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame.rs"]
mod tests;
