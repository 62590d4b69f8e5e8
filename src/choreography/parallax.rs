use crate::foundation::core::{Geometry, ScrollState, Translate};
use crate::foundation::ids::RegionId;
use crate::foundation::math::clamp01;
use crate::foundation::visual::VisualState;

/// Opacity lost per unit of hero fade progress.
const HERO_FADE_RATE: f64 = 1.5;

/// A region translated proportionally to scroll distance.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxEntity {
    /// Translated region.
    pub region: RegionId,
    /// Translation per pixel scrolled.
    pub speed: f64,
    /// `true` for the distinguished hero region.
    pub hero: bool,
    /// Hero content faded out while scrolling through the hero.
    pub content_fade_target: Option<RegionId>,
}

/// States produced for one parallax entity in one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxUpdate {
    /// State for the entity itself.
    pub layer: VisualState,
    /// State for the hero content, when the entity is the hero and declares one.
    pub content: Option<(RegionId, VisualState)>,
}

/// Vertical offset for a given scroll distance.
pub fn parallax_offset(scroll_top: f64, speed: f64) -> f64 {
    scroll_top * speed
}

/// Hero content opacity after scrolling `scroll_top` pixels through a hero of `hero_height`.
///
/// Reaches zero at two thirds of the hero height and stays clamped there.
pub fn hero_content_opacity(scroll_top: f64, hero_height: f64) -> f64 {
    let fade = if hero_height > 0.0 {
        (scroll_top / hero_height).min(1.0)
    } else if scroll_top > 0.0 {
        1.0
    } else {
        0.0
    };
    clamp01(1.0 - fade * HERO_FADE_RATE)
}

impl ParallaxEntity {
    /// Evaluate the entity against its cached geometry.
    ///
    /// Entities entirely outside the window produce no update; the sink keeps whatever it last
    /// applied.
    pub fn evaluate(&self, geom: Geometry, scroll: ScrollState) -> Option<ParallaxUpdate> {
        if !geom.intersects_viewport(scroll) {
            return None;
        }

        let layer = VisualState {
            translate: Some(Translate::y_px(parallax_offset(
                scroll.scroll_top,
                self.speed,
            ))),
            ..VisualState::default()
        };

        let content = match (self.hero, self.content_fade_target) {
            (true, Some(target)) => Some((
                target,
                VisualState {
                    opacity: Some(hero_content_opacity(scroll.scroll_top, geom.height)),
                    ..VisualState::default()
                },
            )),
            _ => None,
        };

        Some(ParallaxUpdate { layer, content })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/parallax.rs"]
mod tests;
