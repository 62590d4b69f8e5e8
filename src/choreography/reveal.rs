use crate::foundation::core::{Geometry, ScrollState, Translate};
use crate::foundation::ids::RegionId;
use crate::foundation::visual::{TransitionHint, VisualState};

/// `true` once the region's top edge is more than `margin` pixels above the window bottom.
pub fn crossed_trigger(geom: Geometry, scroll: ScrollState, margin: f64) -> bool {
    geom.top_in_viewport(scroll) < scroll.viewport_height - margin
}

/// One-way "has entered view" latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    /// Latch if the trigger line was crossed; returns the latched value. Never clears.
    pub fn update(&mut self, geom: Geometry, scroll: ScrollState, margin: f64) -> bool {
        self.revealed = self.revealed || crossed_trigger(geom, scroll, margin);
        self.revealed
    }

    /// Current latch value.
    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

/// Delays `base + i * step` for `count` elements entering together.
pub fn stagger_delays(count: usize, base: f64, step: f64) -> Vec<f64> {
    (0..count).map(|i| base + (i as f64) * step).collect()
}

/// Ordered regions revealed on scroll, each with its own latch and stagger delay.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealGroup {
    /// Members in page order.
    pub members: Vec<RegionId>,
    /// Transition delay per member.
    pub delays: Vec<f64>,
}

impl RevealGroup {
    /// Group with delays `i * step`.
    pub fn new(members: Vec<RegionId>, step_secs: f64) -> Self {
        let delays = stagger_delays(members.len(), 0.0, step_secs);
        Self { members, delays }
    }

    /// State for member `index` given its latch value.
    pub fn member_state(&self, index: usize, revealed: bool) -> VisualState {
        VisualState {
            revealed: Some(revealed),
            transition: Some(TransitionHint {
                delay_secs: self.delays.get(index).copied().unwrap_or(0.0),
                ..TransitionHint::default()
            }),
            ..VisualState::default()
        }
    }
}

/// Fires at most once; later notifications are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShotTrigger {
    fired: bool,
}

impl OneShotTrigger {
    /// Returns `true` only for the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the trigger has fired.
    pub fn has_fired(self) -> bool {
        self.fired
    }
}

/// What fires a related-content group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedTrigger {
    /// Fired by the engine once the section's visible fraction crosses the configured threshold.
    #[default]
    Scroll,
    /// Fired only by the host's visibility notifier.
    Notify,
}

/// Timing of the related-content entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelatedTiming {
    /// Delay of the first card.
    pub base_delay_secs: f64,
    /// Delay step between cards.
    pub step_secs: f64,
    /// Entrance duration per card.
    pub duration_secs: f64,
    /// Vertical offset cards enter from.
    pub initial_offset_px: f64,
}

/// "More articles" section revealed once with staggered cards.
#[derive(Clone, Debug, PartialEq)]
pub struct RelatedGroup {
    /// Section whose visibility fires the group.
    pub section: RegionId,
    /// Section title, marked animated when the group fires.
    pub title: Option<RegionId>,
    /// Cards in display order.
    pub cards: Vec<RegionId>,
    /// Trigger source.
    pub trigger: RelatedTrigger,
}

impl RelatedGroup {
    /// Whether a scroll-driven group should fire at this snapshot.
    pub fn scroll_fires(&self, section: Geometry, scroll: ScrollState, threshold: f64) -> bool {
        self.trigger == RelatedTrigger::Scroll
            && section.intersects_viewport(scroll)
            && section.visible_fraction(scroll) >= threshold
    }

    /// Target states once the group has fired.
    pub fn fired_states(&self, timing: RelatedTiming) -> Vec<(RegionId, VisualState)> {
        let mut out = Vec::with_capacity(self.cards.len() + 1);
        if let Some(title) = self.title {
            out.push((
                title,
                VisualState {
                    revealed: Some(true),
                    ..VisualState::default()
                },
            ));
        }

        let delays = stagger_delays(self.cards.len(), timing.base_delay_secs, timing.step_secs);
        for (&card, delay) in self.cards.iter().zip(delays) {
            out.push((
                card,
                VisualState {
                    opacity: Some(1.0),
                    translate: Some(Translate::y_px(0.0)),
                    revealed: Some(true),
                    transition: Some(TransitionHint {
                        delay_secs: delay,
                        duration_secs: Some(timing.duration_secs),
                        from_opacity: Some(0.0),
                        from_offset_y_px: Some(timing.initial_offset_px),
                    }),
                    ..VisualState::default()
                },
            ));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/reveal.rs"]
mod tests;
