use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Tunable constants for every choreography component.
///
/// All fields are optional in JSON; missing fields take the [`Default`] value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChoreoConfig {
    /// Distance above the window bottom a region must cross before it is revealed.
    pub reveal_margin_px: f64,
    /// Height of fixed page chrome (site header) supplied by the host.
    pub chrome_height_px: f64,
    /// Extra clearance below the chrome for fixed sticky regions.
    pub sticky_clearance_px: f64,
    /// Parallax speed for entities that do not declare one.
    pub default_parallax_speed: f64,
    /// Parallax speed for the hero entity when it does not declare one.
    pub hero_parallax_speed: f64,
    /// Reading progress at or above which the article counts as completed.
    pub completion_threshold: f64,
    /// Per-member delay step inside a reveal group.
    pub reveal_stagger_secs: f64,
    /// Delay before the first related card starts its entrance.
    pub related_base_delay_secs: f64,
    /// Delay step between consecutive related cards.
    pub related_step_secs: f64,
    /// Duration of a related card's entrance transition.
    pub related_duration_secs: f64,
    /// Vertical offset a related card enters from.
    pub related_initial_offset_px: f64,
    /// Visible fraction of the related section that fires the scroll-driven trigger.
    pub related_visibility_threshold: f64,
    /// Clearance kept between the chrome and an in-page anchor target.
    pub anchor_margin_px: f64,
    /// Scene progress at which the first scene text element starts to appear.
    pub scene_text_appear_base: f64,
    /// Scene progress step between consecutive scene text elements.
    pub scene_text_appear_step: f64,
    /// Scene progress after which scene text starts to fade out.
    pub scene_text_fade_out: f64,
    /// Start threshold for custom animations that do not declare one.
    pub custom_animation_default_start: f64,
    /// End threshold for custom animations that do not declare one.
    pub custom_animation_default_end: f64,
}

impl Default for ChoreoConfig {
    fn default() -> Self {
        Self {
            reveal_margin_px: 150.0,
            chrome_height_px: 0.0,
            sticky_clearance_px: 20.0,
            default_parallax_speed: 0.2,
            hero_parallax_speed: 0.3,
            completion_threshold: 0.99,
            reveal_stagger_secs: 0.05,
            related_base_delay_secs: 0.2,
            related_step_secs: 0.1,
            related_duration_secs: 0.6,
            related_initial_offset_px: 30.0,
            related_visibility_threshold: 0.2,
            anchor_margin_px: 20.0,
            scene_text_appear_base: 0.2,
            scene_text_appear_step: 0.1,
            scene_text_fade_out: 0.7,
            custom_animation_default_start: 0.2,
            custom_animation_default_end: 0.8,
        }
    }
}

impl ChoreoConfig {
    /// Offset used by sticky regions that do not declare one.
    pub fn default_sticky_offset(&self) -> f64 {
        self.chrome_height_px + self.sticky_clearance_px
    }

    /// Reject non-finite values and fractions outside `[0, 1]`.
    pub fn validate(&self) -> ChoreoResult<()> {
        let finite = [
            ("reveal_margin_px", self.reveal_margin_px),
            ("chrome_height_px", self.chrome_height_px),
            ("sticky_clearance_px", self.sticky_clearance_px),
            ("default_parallax_speed", self.default_parallax_speed),
            ("hero_parallax_speed", self.hero_parallax_speed),
            ("reveal_stagger_secs", self.reveal_stagger_secs),
            ("related_base_delay_secs", self.related_base_delay_secs),
            ("related_step_secs", self.related_step_secs),
            ("related_duration_secs", self.related_duration_secs),
            ("related_initial_offset_px", self.related_initial_offset_px),
            ("anchor_margin_px", self.anchor_margin_px),
            ("scene_text_appear_step", self.scene_text_appear_step),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(ChoreoError::validation(format!(
                    "config.{name} must be finite"
                )));
            }
        }

        let fractions = [
            ("completion_threshold", self.completion_threshold),
            ("related_visibility_threshold", self.related_visibility_threshold),
            ("scene_text_appear_base", self.scene_text_appear_base),
            ("scene_text_fade_out", self.scene_text_fade_out),
            (
                "custom_animation_default_start",
                self.custom_animation_default_start,
            ),
            (
                "custom_animation_default_end",
                self.custom_animation_default_end,
            ),
        ];
        for (name, v) in fractions {
            if !(0.0..=1.0).contains(&v) {
                return Err(ChoreoError::validation(format!(
                    "config.{name} must be in [0, 1]"
                )));
            }
        }

        if self.custom_animation_default_start > self.custom_animation_default_end {
            return Err(ChoreoError::validation(
                "config.custom_animation_default_start must be <= custom_animation_default_end",
            ));
        }
        if self.related_duration_secs < 0.0
            || self.reveal_stagger_secs < 0.0
            || self.related_step_secs < 0.0
        {
            return Err(ChoreoError::validation(
                "config transition durations and delays must be >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
