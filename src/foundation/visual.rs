use crate::foundation::core::Translate;

/// Layout mode of a sticky region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickyMode {
    /// Normal document flow; no position override.
    Flowing,
    /// Fixed to the visible window at the anchor offset.
    Fixed,
    /// Positioned against the container, docked to its bottom edge.
    PinnedBottom,
}

/// Transition hint for sinks that animate between successive states.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionHint {
    /// Delay before the transition starts.
    pub delay_secs: f64,
    /// Transition duration; `None` leaves it to external styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Opacity to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_opacity: Option<f64>,
    /// Vertical pixel offset to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_offset_y_px: Option<f64>,
}

/// Target visual state for one entity.
///
/// Every field is optional: `None` means "this component has no opinion", leaving the property to
/// external styling. A state is always produced as a whole value and applied as a unit.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<Translate>,
    /// Uniform scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Horizontal-only scale (progress bars).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// Rotation in degrees, clockwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    /// Sticky layout mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<StickyMode>,
    /// Anchor offset for the sticky mode: from the window top when fixed, from the container top
    /// when pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_offset_px: Option<f64>,
    /// Pinned width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_px: Option<f64>,
    /// Reveal latch / one-shot "animated" marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed: Option<bool>,
    /// Transition hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionHint>,
}

impl VisualState {
    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merge(&mut self, other: VisualState) {
        fn take<T>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }

        take(&mut self.opacity, other.opacity);
        take(&mut self.translate, other.translate);
        take(&mut self.scale, other.scale);
        take(&mut self.scale_x, other.scale_x);
        take(&mut self.rotation_deg, other.rotation_deg);
        take(&mut self.position, other.position);
        take(&mut self.anchor_offset_px, other.anchor_offset_px);
        take(&mut self.width_px, other.width_px);
        take(&mut self.revealed, other.revealed);
        take(&mut self.transition, other.transition);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/visual.rs"]
mod tests;
