use crate::foundation::core::{Geometry, ScrollState};
use crate::foundation::math::clamp01;
use crate::foundation::visual::VisualState;

/// Reading progress through the designated content region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadingProgress {
    /// Fraction in `[0, 1]`.
    pub fraction: f64,
    /// Fraction rounded to a whole percentage.
    pub percent: u8,
    /// `fraction` reached the completion threshold.
    pub completed: bool,
}

impl ReadingProgress {
    /// No progress.
    pub const ZERO: Self = Self {
        fraction: 0.0,
        percent: 0,
        completed: false,
    };

    fn from_fraction(fraction: f64, completion_threshold: f64) -> Self {
        let fraction = clamp01(fraction);
        Self {
            fraction,
            percent: (fraction * 100.0).round() as u8,
            completed: fraction >= completion_threshold,
        }
    }

    /// Progress-bar state: horizontal scale equal to the fraction.
    pub fn bar_state(self) -> VisualState {
        VisualState {
            scale_x: Some(self.fraction),
            ..VisualState::default()
        }
    }
}

/// How far the reader has scrolled through `content`.
///
/// Zero before the content's top edge reaches the window top. Content no taller than the window
/// never progresses.
pub fn reading_progress(
    content: Geometry,
    scroll: ScrollState,
    completion_threshold: f64,
) -> ReadingProgress {
    if scroll.scroll_top < content.top {
        return ReadingProgress::ZERO;
    }
    let scrollable = content.height - scroll.viewport_height;
    if scrollable <= 0.0 {
        return ReadingProgress::ZERO;
    }
    let fraction = (scroll.scroll_top - content.top) / scrollable;
    ReadingProgress::from_fraction(fraction, completion_threshold)
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/progress.rs"]
mod tests;
