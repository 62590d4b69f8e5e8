use crate::foundation::core::Translate;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::foundation::math::{clamp01, lerp};
use crate::foundation::visual::VisualState;

/// Closed catalog of named custom animations.
///
/// Names that are not recognized (or absent) map to [`AnimationKind::Passive`], which leaves the
/// target to external styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// `opacity = p`.
    FadeIn,
    /// Slides in from the left edge while fading in.
    SlideInLeft,
    /// Slides in from the right edge while fading in.
    SlideInRight,
    /// Grows from half size while fading in.
    ZoomIn,
    /// One full clockwise turn; opacity untouched.
    Rotate,
    /// No-op.
    #[default]
    #[serde(other)]
    Passive,
}

impl AnimationKind {
    /// Parse a markup-style name (`"fade-in"`, `"zoom-in"`, ...). Unknown names are passive.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "fade-in" => Self::FadeIn,
            "slide-in-left" => Self::SlideInLeft,
            "slide-in-right" => Self::SlideInRight,
            "zoom-in" => Self::ZoomIn,
            "rotate" => Self::Rotate,
            _ => Self::Passive,
        }
    }
}

/// Map a kind and a local progress value to a visual state.
///
/// `progress` is clamped to `[0, 1]` first.
pub fn apply(kind: AnimationKind, progress: f64) -> VisualState {
    let p = clamp01(progress);
    match kind {
        AnimationKind::FadeIn => VisualState {
            opacity: Some(p),
            ..VisualState::default()
        },
        AnimationKind::SlideInLeft => VisualState {
            opacity: Some(p),
            translate: Some(Translate::x_percent(-lerp(100.0, 0.0, p))),
            ..VisualState::default()
        },
        AnimationKind::SlideInRight => VisualState {
            opacity: Some(p),
            translate: Some(Translate::x_percent(lerp(100.0, 0.0, p))),
            ..VisualState::default()
        },
        AnimationKind::ZoomIn => VisualState {
            opacity: Some(p),
            scale: Some(lerp(0.5, 1.0, p)),
            ..VisualState::default()
        },
        AnimationKind::Rotate => VisualState {
            rotation_deg: Some(360.0 * p),
            ..VisualState::default()
        },
        AnimationKind::Passive => VisualState::default(),
    }
}

/// Scene-progress window `[start, end]` over which a custom animation runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThresholdWindow {
    start: f64,
    end: f64,
}

impl ThresholdWindow {
    /// Validated window: both bounds in `[0, 1]` and `start <= end`.
    pub fn new(start: f64, end: f64) -> ChoreoResult<Self> {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ChoreoError::validation(
                "animation thresholds must be in [0, 1]",
            ));
        }
        if start > end {
            return Err(ChoreoError::validation(format!(
                "animation start threshold {start} is after end threshold {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window start.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Window end.
    pub fn end(self) -> f64 {
        self.end
    }

    /// Local progress for a scene progress value.
    ///
    /// Exactly `0` below `start`, exactly `1` above `end`, linear in between. A zero-width window
    /// is a step at `start`.
    pub fn local(self, scene_progress: f64) -> f64 {
        let p = scene_progress;
        if p < self.start {
            return 0.0;
        }
        if p > self.end {
            return 1.0;
        }
        let width = self.end - self.start;
        if width <= 0.0 {
            return 1.0;
        }
        clamp01((p - self.start) / width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dispatch.rs"]
mod tests;
