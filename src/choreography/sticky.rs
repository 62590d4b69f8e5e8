use crate::foundation::core::{Geometry, ScrollState};
use crate::foundation::ids::RegionId;
use crate::foundation::visual::{StickyMode, VisualState};

/// A region that floats in the window while its container scrolls past.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyEntity {
    /// Sticky region.
    pub region: RegionId,
    /// Container whose bottom edge ends the sticky range.
    pub container: RegionId,
    /// Distance kept from the window top while fixed.
    pub offset: f64,
}

/// Mode and anchor for one sticky region at one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyLayout {
    /// Layout mode.
    pub mode: StickyMode,
    /// `None` while flowing; window-relative while fixed; container-relative while pinned.
    pub anchor_offset_px: Option<f64>,
}

/// Sticky layout for a region at `original_top` with height `entity_height`.
///
/// The fixed range is `[original_top - offset, container_bottom - entity_height - offset)`. When
/// the container is too short for that range to be non-empty the region goes straight from
/// flowing to pinned.
pub fn sticky_layout(
    original_top: f64,
    offset: f64,
    entity_height: f64,
    container: Geometry,
    scroll_top: f64,
) -> StickyLayout {
    let start = original_top - offset;
    let end = container.bottom() - entity_height - offset;

    if scroll_top < start {
        StickyLayout {
            mode: StickyMode::Flowing,
            anchor_offset_px: None,
        }
    } else if scroll_top < end {
        StickyLayout {
            mode: StickyMode::Fixed,
            anchor_offset_px: Some(offset),
        }
    } else {
        StickyLayout {
            mode: StickyMode::PinnedBottom,
            anchor_offset_px: Some(end - container.top + offset),
        }
    }
}

/// Per-entity state kept across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StickyState {
    pinned_width: Option<f64>,
}

impl StickyState {
    /// Width pinned so far, if any.
    pub fn pinned_width(self) -> Option<f64> {
        self.pinned_width
    }

    /// Pin `container_width` the first time a non-flowing mode is seen.
    pub fn observe(&mut self, mode: StickyMode, container_width: f64) -> Option<f64> {
        if mode != StickyMode::Flowing && self.pinned_width.is_none() {
            self.pinned_width = Some(container_width);
        }
        self.pinned_width
    }

    /// Forget the pinned width so the next non-flowing tick re-measures.
    pub fn reset(&mut self) {
        self.pinned_width = None;
    }
}

impl StickyEntity {
    /// Evaluate against the region's and container's cached geometry.
    pub fn evaluate(
        &self,
        state: &mut StickyState,
        geom: Geometry,
        container: Geometry,
        scroll: ScrollState,
    ) -> VisualState {
        let layout = sticky_layout(
            geom.top,
            self.offset,
            geom.height,
            container,
            scroll.scroll_top,
        );
        VisualState {
            position: Some(layout.mode),
            anchor_offset_px: layout.anchor_offset_px,
            width_px: state.observe(layout.mode, container.width),
            ..VisualState::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/sticky.rs"]
mod tests;
