use crate::animation::dispatch::{AnimationKind, ThresholdWindow, apply};
use crate::animation::ease::Ease;
use crate::foundation::core::{Geometry, ScrollState, Translate};
use crate::foundation::ids::RegionId;
use crate::foundation::math::{clamp01, ramp};
use crate::foundation::visual::VisualState;

/// Width of the scene-progress window over which a text element enters.
const TEXT_ENTRY_WINDOW: f64 = 0.1;
/// Vertical distance a text element rises while entering.
const TEXT_RISE_PX: f64 = 20.0;
/// Opacity lost per unit of scene progress once text starts fading out.
const TEXT_FADE_RATE: f64 = 3.0;
/// Share of scene progress spent fading the background in (and out).
const BACKGROUND_EDGE: f64 = 0.1;
/// Background travel across the full scene, in percent of its own height.
const BACKGROUND_TRAVEL_PERCENT: f64 = 30.0;

/// Where a scene sits relative to the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePhase {
    /// Entirely below the window.
    Below,
    /// Top edge inside the window, still sweeping through the entry half.
    Entering,
    /// Whole scene inside the window and the entry half completed.
    FullyVisible,
    /// Window top is inside the scene.
    Exiting,
    /// Entirely above the window.
    Above,
}

/// Classify a scene against a scroll snapshot.
///
/// Entering is tested first; a scene that is wholly inside the window is reported as fully
/// visible once the entry half has been swept.
pub fn classify(geom: Geometry, scroll: ScrollState) -> ScenePhase {
    let top = geom.top;
    let bottom = geom.bottom();
    let scroll_top = scroll.scroll_top;
    let window_bottom = scroll.window_bottom();
    let half = scroll.viewport_height / 2.0;

    if window_bottom > top && scroll_top < top {
        if window_bottom > bottom && window_bottom - top >= half {
            ScenePhase::FullyVisible
        } else {
            ScenePhase::Entering
        }
    } else if scroll_top >= top && scroll_top < bottom {
        ScenePhase::Exiting
    } else if scroll_top >= bottom {
        ScenePhase::Above
    } else {
        ScenePhase::Below
    }
}

/// Distance swept through one half of the scene's progress range, capped at `0.5`.
///
/// A zero-height viewport turns the half into a step.
fn half_ramp(distance: f64, half: f64) -> f64 {
    if half <= 0.0 {
        return if distance > 0.0 { 0.5 } else { 0.0 };
    }
    (distance / half).clamp(0.0, 0.5)
}

/// Scene progress in `[0, 1]`: `[0, 0.5]` while entering, `[0.5, 1]` while exiting.
pub fn scene_progress(geom: Geometry, scroll: ScrollState) -> f64 {
    let half = scroll.viewport_height / 2.0;
    match classify(geom, scroll) {
        ScenePhase::Below => 0.0,
        ScenePhase::Entering => half_ramp(scroll.window_bottom() - geom.top, half),
        ScenePhase::FullyVisible => 0.5,
        ScenePhase::Exiting => 0.5 + half_ramp(scroll.scroll_top - geom.top, half),
        ScenePhase::Above => 1.0,
    }
}

/// Background state: drifts with progress and fades at both ends.
pub fn background_state(progress: f64) -> VisualState {
    let p = clamp01(progress);
    let opacity = if p <= BACKGROUND_EDGE {
        p / BACKGROUND_EDGE
    } else if p >= 1.0 - BACKGROUND_EDGE {
        (1.0 - p) / BACKGROUND_EDGE
    } else {
        1.0
    };
    VisualState {
        opacity: Some(clamp01(opacity)),
        translate: Some(Translate::y_percent((p - 0.5) * BACKGROUND_TRAVEL_PERCENT)),
        ..VisualState::default()
    }
}

/// Stagger timing for a scene's ordered text elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTiming {
    /// Progress at which element `0` starts to appear.
    pub appear_base: f64,
    /// Progress step between consecutive elements.
    pub appear_step: f64,
    /// Progress after which every element fades out.
    pub fade_out: f64,
}

/// State of text element `index` at scene progress `progress`.
pub fn text_state(progress: f64, index: usize, timing: TextTiming) -> VisualState {
    let p = clamp01(progress);
    let appear = timing.appear_base + (index as f64) * timing.appear_step;

    let (opacity, rise) = if p < appear {
        (0.0, TEXT_RISE_PX)
    } else if p < appear + TEXT_ENTRY_WINDOW {
        let t = ramp(p, appear, TEXT_ENTRY_WINDOW);
        (t, TEXT_RISE_PX * (1.0 - t))
    } else if p > timing.fade_out {
        (1.0 - (p - timing.fade_out) * TEXT_FADE_RATE, 0.0)
    } else {
        (1.0, 0.0)
    };

    VisualState {
        opacity: Some(clamp01(opacity)),
        translate: Some(Translate::y_px(rise)),
        ..VisualState::default()
    }
}

/// Named animation bound to a window of scene progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomAnimation {
    /// Animated region.
    pub target: RegionId,
    /// Animation to dispatch.
    pub kind: AnimationKind,
    /// Scene-progress window.
    pub window: ThresholdWindow,
    /// Curve applied to local progress.
    pub ease: Ease,
}

impl CustomAnimation {
    /// State at scene progress `progress`.
    pub fn state(&self, progress: f64) -> VisualState {
        apply(self.kind, self.ease.apply(self.window.local(progress)))
    }
}

/// A scroll-swept narrative region.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Scene region; its geometry drives progress.
    pub region: RegionId,
    /// Ordered text elements.
    pub sub_elements: Vec<RegionId>,
    /// Background layer.
    pub background: Option<RegionId>,
    /// Custom animations, in declaration order.
    pub custom_animations: Vec<CustomAnimation>,
}

/// Everything a scene produces in one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneUpdate {
    /// Phase at this snapshot.
    pub phase: ScenePhase,
    /// Progress at this snapshot.
    pub progress: f64,
    /// States in emission order: background, text, custom animations.
    pub states: Vec<(RegionId, VisualState)>,
}

impl Scene {
    /// Evaluate the scene against its cached geometry.
    pub fn evaluate(&self, geom: Geometry, scroll: ScrollState, timing: TextTiming) -> SceneUpdate {
        let phase = classify(geom, scroll);
        let progress = scene_progress(geom, scroll);

        let mut states =
            Vec::with_capacity(self.sub_elements.len() + self.custom_animations.len() + 1);
        if let Some(bg) = self.background {
            states.push((bg, background_state(progress)));
        }
        for (i, &text) in self.sub_elements.iter().enumerate() {
            states.push((text, text_state(progress, i, timing)));
        }
        for anim in &self.custom_animations {
            let state = anim.state(progress);
            if !state.is_empty() {
                states.push((anim.target, state));
            }
        }

        SceneUpdate {
            phase,
            progress,
            states,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/scene.rs"]
mod tests;
