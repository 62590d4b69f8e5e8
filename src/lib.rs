//! Choreo is a scroll-position-driven choreography engine.
//!
//! Given a scroll offset and a viewport height it computes, deterministically, the visual state of
//! every declared page region: reading progress, parallax offsets, reveal latches, tableaux scene
//! progress and the sticky flowing/fixed/pinned lifecycle. It never lays out or paints; the host
//! supplies geometry through a [`GeometrySource`] and applies [`FrameUpdate`]s through a
//! [`VisualSink`].
//!
//! - Describe the choreography as a [`ChoreographyDef`] (usually JSON)
//! - Resolve it against the page with [`Registry::build`]
//! - Drive a [`Choreographer`] with scroll snapshots
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod choreography;
pub(crate) mod geometry;
pub(crate) mod registry;
pub(crate) mod session;

pub use crate::foundation::config::ChoreoConfig;
pub use crate::foundation::core::{Geometry, LengthUnit, Rect, ScrollState, Translate, Vec2};
pub use crate::foundation::error::{ChoreoError, ChoreoResult};
pub use crate::foundation::ids::{EntityId, RegionId};
pub use crate::foundation::visual::{StickyMode, TransitionHint, VisualState};

pub use crate::animation::dispatch::{AnimationKind, ThresholdWindow, apply as apply_animation};
pub use crate::animation::ease::Ease;

pub use crate::choreography::anchor::anchor_scroll_target;
pub use crate::choreography::parallax::{
    ParallaxEntity, ParallaxUpdate, hero_content_opacity, parallax_offset,
};
pub use crate::choreography::progress::{ReadingProgress, reading_progress};
pub use crate::choreography::reveal::{
    OneShotTrigger, RelatedGroup, RelatedTiming, RelatedTrigger, RevealGate, RevealGroup,
    crossed_trigger, stagger_delays,
};
pub use crate::choreography::scene::{
    CustomAnimation, Scene, ScenePhase, SceneUpdate, TextTiming, background_state, classify,
    scene_progress, text_state,
};
pub use crate::choreography::sticky::{StickyEntity, StickyLayout, StickyState, sticky_layout};

pub use crate::geometry::cache::GeometryCache;
pub use crate::geometry::layout::{PageLayout, PageLayoutDef, RegionDef};
pub use crate::geometry::probe::{GeometrySource, RegionNames, probe, try_probe};

pub use crate::registry::build::Registry;
pub use crate::registry::model::{
    AnimationDef, ChoreographyDef, HeroDef, PageDocument, ParallaxDef, RelatedDef,
    RevealGroupDef, SceneDef, StickyDef,
};

pub use crate::session::choreographer::{Choreographer, ChoreographerOpts, RunStats};
pub use crate::session::fingerprint::{UpdateFingerprint, fingerprint_update};
pub use crate::session::frame::FrameUpdate;
pub use crate::session::sink::{InMemorySink, VisualSink};
