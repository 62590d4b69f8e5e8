use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::dispatch::AnimationKind;
use crate::animation::ease::Ease;
use crate::choreography::reveal::RelatedTrigger;
use crate::foundation::config::ChoreoConfig;
use crate::foundation::core::ScrollState;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::geometry::layout::{PageLayout, PageLayoutDef};
use crate::registry::build::Registry;

/// Declarative choreography, referencing page regions by name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChoreographyDef {
    /// Tunables; every field defaults.
    #[serde(default)]
    pub config: ChoreoConfig,
    /// Article body driving reading progress and the progress bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Distinguished hero region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroDef>,
    /// Plain parallax layers.
    #[serde(default)]
    pub parallax: Vec<ParallaxDef>,
    /// Scroll-revealed groups.
    #[serde(default)]
    pub reveal: Vec<RevealGroupDef>,
    /// Scenes in page order.
    #[serde(default)]
    pub scenes: Vec<SceneDef>,
    /// Sticky regions.
    #[serde(default)]
    pub sticky: Vec<StickyDef>,
    /// "More articles" section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedDef>,
}

/// Hero region: a parallax layer whose content fades out as it scrolls away.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeroDef {
    /// Hero region name.
    pub region: String,
    /// Parallax speed; defaults to `config.hero_parallax_speed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Content faded while scrolling through the hero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Plain parallax layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParallaxDef {
    /// Region name.
    pub region: String,
    /// Parallax speed; defaults to `config.default_parallax_speed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Regions revealed one by one as they cross the trigger line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealGroupDef {
    /// Member region names in page order.
    pub members: Vec<String>,
    /// Delay step between members; defaults to `config.reveal_stagger_secs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_secs: Option<f64>,
}

/// Tableaux scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDef {
    /// Scene region name.
    pub region: String,
    /// Background layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Ordered text elements.
    #[serde(default)]
    pub text: Vec<String>,
    /// Custom animations.
    #[serde(default)]
    pub animations: Vec<AnimationDef>,
}

/// Custom animation bound to a scene-progress window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationDef {
    /// Animated region name.
    pub target: String,
    /// Animation name; unknown names are passive.
    #[serde(default)]
    pub kind: AnimationKind,
    /// Window start; defaults to `config.custom_animation_default_start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Window end; defaults to `config.custom_animation_default_end`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Curve applied to local progress.
    #[serde(default)]
    pub ease: Ease,
}

/// Sticky region.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StickyDef {
    /// Region name.
    pub region: String,
    /// Container name; defaults to the region's layout parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Offset from the window top; defaults to `config.default_sticky_offset()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

/// Related-content section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelatedDef {
    /// Section region name.
    pub section: String,
    /// Section title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Cards in display order.
    #[serde(default)]
    pub cards: Vec<String>,
    /// Trigger source.
    #[serde(default)]
    pub trigger: RelatedTrigger,
}

/// Self-contained page: layout, choreography and the initial viewport.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageDocument {
    /// Initial viewport height.
    pub viewport_height: f64,
    /// Page layout.
    pub layout: PageLayoutDef,
    /// Choreography over the layout's regions.
    pub choreography: ChoreographyDef,
}

impl PageDocument {
    /// Parse a JSON page document.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChoreoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChoreoError::serde(format!("page document parse failed: {e}")))
    }

    /// Read and parse a JSON page document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChoreoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChoreoError::serde(format!("open page document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolve the layout and build the registry against it.
    pub fn build(&self) -> ChoreoResult<(PageLayout, Registry)> {
        let layout = PageLayout::from_def(&self.layout)?;
        let registry = Registry::build(&self.choreography, &layout)?;
        Ok((layout, registry))
    }

    /// Snapshot at `scroll_top` with the document's viewport.
    pub fn scroll_at(&self, scroll_top: f64) -> ScrollState {
        ScrollState::new(scroll_top, self.viewport_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/model.rs"]
mod tests;
