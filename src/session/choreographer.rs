use crate::choreography::parallax::ParallaxUpdate;
use crate::choreography::progress::reading_progress;
use crate::choreography::reveal::{OneShotTrigger, RevealGate};
use crate::choreography::sticky::StickyState;
use crate::foundation::core::{Geometry, ScrollState};
use crate::foundation::error::ChoreoResult;
use crate::foundation::ids::{EntityId, RegionId};
use crate::geometry::cache::GeometryCache;
use crate::geometry::probe::GeometrySource;
use crate::registry::build::Registry;
use crate::session::fingerprint::{UpdateFingerprint, fingerprint_update};
use crate::session::frame::FrameUpdate;
use crate::session::sink::VisualSink;

/// Options controlling [`Choreographer`] tick behavior.
#[derive(Clone, Debug)]
pub struct ChoreographerOpts {
    /// Suppress updates whose derived state matches the previous emitted update.
    pub elide_unchanged: bool,
}

impl Default for ChoreographerOpts {
    fn default() -> Self {
        Self {
            elide_unchanged: true,
        }
    }
}

/// Statistics for [`Choreographer::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Snapshots fed in.
    pub ticks_total: u64,
    /// Updates handed to the sink.
    pub updates_emitted: u64,
    /// Ticks whose update matched the previous one.
    pub updates_elided: u64,
}

/// Per-tick scheduler.
///
/// Owns the registry, the geometry cache and the few pieces of state that intentionally survive
/// between ticks: reveal latches, sticky width pins and the related-content trigger. Everything
/// else is recomputed from the latest scroll snapshot.
pub struct Choreographer {
    registry: Registry,
    cache: GeometryCache,
    opts: ChoreographerOpts,

    pending: Option<ScrollState>,
    last_scroll: Option<ScrollState>,
    last_fingerprint: Option<UpdateFingerprint>,

    reveal: Vec<Vec<RevealGate>>,
    sticky: Vec<StickyState>,
    related: OneShotTrigger,
}

impl Choreographer {
    /// Build a scheduler and take the initial geometry snapshot.
    pub fn new<S>(registry: Registry, source: &S) -> Self
    where
        S: GeometrySource + ?Sized,
    {
        Self::with_opts(registry, source, ChoreographerOpts::default())
    }

    /// [`Choreographer::new`] with explicit options.
    #[tracing::instrument(skip_all)]
    pub fn with_opts<S>(registry: Registry, source: &S, opts: ChoreographerOpts) -> Self
    where
        S: GeometrySource + ?Sized,
    {
        let mut cache = GeometryCache::new(registry.tracked_regions());
        let missing = cache.refresh(source);
        tracing::debug!(tracked = cache.tracked().len(), missing, "initial geometry");

        let reveal = registry
            .reveal()
            .iter()
            .map(|g| vec![RevealGate::default(); g.members.len()])
            .collect();
        let sticky = vec![StickyState::default(); registry.sticky().len()];

        Self {
            registry,
            cache,
            opts,
            pending: None,
            last_scroll: None,
            last_fingerprint: None,
            reveal,
            sticky,
            related: OneShotTrigger::default(),
        }
    }

    /// The registry being driven.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Cached geometry of a tracked region.
    pub fn geometry(&self, id: RegionId) -> Option<Geometry> {
        self.cache.get(id)
    }

    /// Queue a snapshot. Only the latest queued snapshot is evaluated.
    pub fn push_scroll(&mut self, scroll: ScrollState) {
        self.pending = Some(scroll);
    }

    /// `true` when a snapshot is waiting for [`Choreographer::tick`].
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluate the pending snapshot.
    ///
    /// Returns `None` when nothing is pending, or when elision is enabled and the derived state
    /// matches the previously emitted update.
    pub fn tick(&mut self) -> Option<FrameUpdate> {
        let scroll = self.pending.take()?;
        let update = self.evaluate(scroll);

        if self.opts.elide_unchanged {
            let fp = fingerprint_update(&update);
            if self.last_fingerprint == Some(fp) {
                tracing::trace!(scroll_top = scroll.scroll_top, "unchanged update elided");
                return None;
            }
            self.last_fingerprint = Some(fp);
        }
        Some(update)
    }

    /// Recompute every entity's state for `scroll`.
    ///
    /// Components run in dependency order: progress, parallax, reveal, scenes, sticky, related.
    /// Entities whose geometry is missing are skipped. Repeated calls with the same snapshot and
    /// geometry produce identical updates.
    pub fn evaluate(&mut self, scroll: ScrollState) -> FrameUpdate {
        self.last_scroll = Some(scroll);
        let cfg = self.registry.config();
        let mut out = FrameUpdate::new(scroll);

        if let Some(content) = self.registry.content() {
            match self.cache.get(content) {
                Some(g) => {
                    let p = reading_progress(g, scroll, cfg.completion_threshold);
                    out.progress = Some(p);
                    out.put(EntityId::ProgressBar, p.bar_state());
                }
                None => skip("content", content),
            }
        }

        for entity in self.registry.parallax() {
            let Some(g) = self.cache.get(entity.region) else {
                skip("parallax", entity.region);
                continue;
            };
            if let Some(ParallaxUpdate { layer, content }) = entity.evaluate(g, scroll) {
                out.put(entity.region, layer);
                if let Some((target, state)) = content {
                    out.put(target, state);
                }
            }
        }

        for (gi, group) in self.registry.reveal().iter().enumerate() {
            for (mi, &member) in group.members.iter().enumerate() {
                let Some(g) = self.cache.get(member) else {
                    skip("reveal", member);
                    continue;
                };
                let revealed = self.reveal[gi][mi].update(g, scroll, cfg.reveal_margin_px);
                out.put(member, group.member_state(mi, revealed));
            }
        }

        let timing = self.registry.text_timing();
        for scene in self.registry.scenes() {
            let Some(g) = self.cache.get(scene.region) else {
                skip("scene", scene.region);
                continue;
            };
            let update = scene.evaluate(g, scroll, timing);
            tracing::trace!(
                region = scene.region.0,
                phase = ?update.phase,
                progress = update.progress,
                "scene"
            );
            for (id, state) in update.states {
                out.put(id, state);
            }
        }

        for (entity, state) in self.registry.sticky().iter().zip(self.sticky.iter_mut()) {
            let (Some(g), Some(container)) =
                (self.cache.get(entity.region), self.cache.get(entity.container))
            else {
                skip("sticky", entity.region);
                continue;
            };
            out.put(entity.region, entity.evaluate(state, g, container, scroll));
        }

        if let Some(group) = self.registry.related() {
            if !self.related.has_fired()
                && let Some(g) = self.cache.get(group.section)
                && group.scroll_fires(g, scroll, cfg.related_visibility_threshold)
            {
                self.related.fire();
                tracing::debug!(section = group.section.0, "related content revealed");
            }
            if self.related.has_fired() {
                for (id, state) in group.fired_states(self.registry.related_timing()) {
                    out.put(id, state);
                }
            }
        }

        out
    }

    /// Re-probe geometry after a viewport resize and clear sticky width pins.
    ///
    /// The last snapshot is re-queued with the new viewport height so the next tick reflects the
    /// new layout.
    #[tracing::instrument(skip(self, source))]
    pub fn resize<S>(&mut self, source: &S, viewport_height: f64)
    where
        S: GeometrySource + ?Sized,
    {
        let missing = self.cache.refresh(source);
        for s in &mut self.sticky {
            s.reset();
        }
        self.last_fingerprint = None;
        self.pending = self
            .pending
            .or(self.last_scroll)
            .map(|s| s.with_viewport(viewport_height));
        tracing::debug!(missing, "geometry refreshed after resize");
    }

    /// Re-probe geometry after late content (images, fonts) changed the layout.
    #[tracing::instrument(skip_all)]
    pub fn load<S>(&mut self, source: &S)
    where
        S: GeometrySource + ?Sized,
    {
        let missing = self.cache.refresh(source);
        self.last_fingerprint = None;
        self.pending = self.pending.or(self.last_scroll);
        tracing::debug!(missing, "geometry refreshed after load");
    }

    /// Host visibility notification for the related-content section.
    ///
    /// Returns `true` only for the first notification; the last snapshot is re-queued so the
    /// reveal shows up on the next tick.
    pub fn notify_related_visible(&mut self) -> bool {
        let fired = self.related.fire();
        if fired {
            self.pending = self.pending.or(self.last_scroll);
        }
        fired
    }

    /// Whether the related-content group has been revealed.
    pub fn related_fired(&self) -> bool {
        self.related.has_fired()
    }

    /// Feed `inputs` through the scheduler one tick each, applying emitted updates to `sink`.
    pub fn run<I>(&mut self, inputs: I, sink: &mut dyn VisualSink) -> ChoreoResult<RunStats>
    where
        I: IntoIterator<Item = ScrollState>,
    {
        let mut stats = RunStats::default();
        sink.begin()?;
        for scroll in inputs {
            stats.ticks_total += 1;
            self.push_scroll(scroll);
            match self.tick() {
                Some(update) => {
                    sink.apply(&update)?;
                    stats.updates_emitted += 1;
                }
                None => stats.updates_elided += 1,
            }
        }
        sink.end()?;
        tracing::debug!(
            ticks = stats.ticks_total,
            emitted = stats.updates_emitted,
            elided = stats.updates_elided,
            "run finished"
        );
        Ok(stats)
    }
}

fn skip(component: &'static str, region: RegionId) {
    tracing::debug!(component, region = region.0, "missing geometry; entity skipped");
}

#[cfg(test)]
#[path = "../../tests/unit/session/choreographer.rs"]
mod tests;
