use std::collections::BTreeMap;

use crate::choreography::parallax::ParallaxEntity;
use crate::choreography::reveal::{RelatedGroup, RelatedTiming, RevealGroup};
use crate::choreography::scene::{CustomAnimation, Scene, TextTiming};
use crate::choreography::sticky::StickyEntity;
use crate::foundation::config::ChoreoConfig;
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::foundation::ids::{EntityId, RegionId};
use crate::geometry::probe::{GeometrySource, RegionNames, try_probe};
use crate::registry::model::ChoreographyDef;
use crate::registry::validate::{
    SchemaError, SchemaErrors, SchemaPathElem, animation_window, validate_choreography,
};

use SchemaPathElem::{Field, Index};

/// Validated choreography with every region name resolved to a handle.
///
/// Read-only once built.
#[derive(Clone, Debug)]
pub struct Registry {
    config: ChoreoConfig,
    content: Option<RegionId>,
    parallax: Vec<ParallaxEntity>,
    reveal: Vec<RevealGroup>,
    scenes: Vec<Scene>,
    sticky: Vec<StickyEntity>,
    related: Option<RelatedGroup>,
    names: BTreeMap<RegionId, String>,
}

struct Resolver<'a, S: ?Sized> {
    source: &'a S,
    names: BTreeMap<RegionId, String>,
    errors: Vec<SchemaError>,
}

impl<S: RegionNames + ?Sized> Resolver<'_, S> {
    fn resolve(&mut self, name: &str, path: &[SchemaPathElem]) -> Option<RegionId> {
        match self.source.region_id(name) {
            Some(id) => {
                self.names.entry(id).or_insert_with(|| name.to_owned());
                Some(id)
            }
            None => {
                self.errors
                    .push(SchemaError::at(path, format!("unknown region \"{name}\"")));
                None
            }
        }
    }

    fn resolve_all(&mut self, names: &[String], path: &[SchemaPathElem]) -> Vec<RegionId> {
        names
            .iter()
            .enumerate()
            .filter_map(|(i, n)| self.resolve(n, &[path, &[Index(i)]].concat()))
            .collect()
    }
}

impl Registry {
    /// Resolve and validate `def` against `source`.
    ///
    /// Every problem is collected and reported together, each prefixed with its `$.path` in the
    /// choreography document.
    #[tracing::instrument(skip_all)]
    pub fn build<S>(def: &ChoreographyDef, source: &S) -> ChoreoResult<Self>
    where
        S: GeometrySource + RegionNames + ?Sized,
    {
        if let Err(errs) = validate_choreography(def) {
            return Err(reject(errs));
        }

        let cfg = &def.config;
        let mut r = Resolver {
            source,
            names: BTreeMap::new(),
            errors: Vec::new(),
        };

        let content = def
            .content
            .as_deref()
            .and_then(|c| r.resolve(c, &[Field("content")]));

        let mut parallax = Vec::with_capacity(def.parallax.len() + 1);
        if let Some(hero) = &def.hero {
            let region = r.resolve(&hero.region, &[Field("hero"), Field("region")]);
            let content_fade_target = hero
                .content
                .as_deref()
                .and_then(|c| r.resolve(c, &[Field("hero"), Field("content")]));
            if let Some(region) = region {
                parallax.push(ParallaxEntity {
                    region,
                    speed: hero.speed.unwrap_or(cfg.hero_parallax_speed),
                    hero: true,
                    content_fade_target,
                });
            }
        }
        for (i, p) in def.parallax.iter().enumerate() {
            let path = [Field("parallax"), Index(i), Field("region")];
            if let Some(region) = r.resolve(&p.region, &path) {
                parallax.push(ParallaxEntity {
                    region,
                    speed: p.speed.unwrap_or(cfg.default_parallax_speed),
                    hero: false,
                    content_fade_target: None,
                });
            }
        }

        let reveal: Vec<RevealGroup> = def
            .reveal
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let members =
                    r.resolve_all(&g.members, &[Field("reveal"), Index(i), Field("members")]);
                RevealGroup::new(members, g.stagger_secs.unwrap_or(cfg.reveal_stagger_secs))
            })
            .collect();

        let mut scenes = Vec::with_capacity(def.scenes.len());
        for (i, s) in def.scenes.iter().enumerate() {
            let path = [Field("scenes"), Index(i)];
            let region = r.resolve(&s.region, &[&path[..], &[Field("region")]].concat());
            let background = s
                .background
                .as_deref()
                .and_then(|b| r.resolve(b, &[&path[..], &[Field("background")]].concat()));
            let sub_elements = r.resolve_all(&s.text, &[&path[..], &[Field("text")]].concat());

            let mut custom_animations = Vec::with_capacity(s.animations.len());
            for (j, a) in s.animations.iter().enumerate() {
                let apath = [&path[..], &[Field("animations"), Index(j), Field("target")]].concat();
                let Some(target) = r.resolve(&a.target, &apath) else {
                    continue;
                };
                // Windows were checked by `validate_choreography`.
                let window = animation_window(a, def)?;
                custom_animations.push(CustomAnimation {
                    target,
                    kind: a.kind,
                    window,
                    ease: a.ease,
                });
            }

            if let Some(region) = region {
                scenes.push((
                    i,
                    Scene {
                        region,
                        sub_elements,
                        background,
                        custom_animations,
                    },
                ));
            }
        }
        check_scene_order(&scenes, source, &mut r.errors);
        let scenes: Vec<Scene> = scenes.into_iter().map(|(_, s)| s).collect();

        let mut sticky = Vec::with_capacity(def.sticky.len());
        for (i, s) in def.sticky.iter().enumerate() {
            let path = [Field("sticky"), Index(i)];
            let Some(region) = r.resolve(&s.region, &[&path[..], &[Field("region")]].concat())
            else {
                continue;
            };
            let container = match s.container.as_deref() {
                Some(c) => r.resolve(c, &[&path[..], &[Field("container")]].concat()),
                None => {
                    let parent = source.offset_parent(region);
                    if parent.is_none() {
                        r.errors.push(SchemaError::at(
                            &[&path[..], &[Field("container")]].concat(),
                            format!(
                                "sticky region \"{}\" has no parent; declare a container",
                                s.region
                            ),
                        ));
                    }
                    parent
                }
            };
            if let Some(container) = container {
                if let Some(name) = source.region_name(container) {
                    r.names.entry(container).or_insert_with(|| name.to_owned());
                }
                sticky.push(StickyEntity {
                    region,
                    container,
                    offset: s.offset.unwrap_or(cfg.default_sticky_offset()),
                });
            }
        }

        let related = def.related.as_ref().and_then(|rd| {
            let section = r.resolve(&rd.section, &[Field("related"), Field("section")]);
            let title = rd
                .title
                .as_deref()
                .and_then(|t| r.resolve(t, &[Field("related"), Field("title")]));
            let cards = r.resolve_all(&rd.cards, &[Field("related"), Field("cards")]);
            section.map(|section| RelatedGroup {
                section,
                title,
                cards,
                trigger: rd.trigger,
            })
        });

        if !r.errors.is_empty() {
            return Err(reject(SchemaErrors { errors: r.errors }));
        }

        let out = Self {
            config: cfg.clone(),
            content,
            parallax,
            reveal,
            scenes,
            sticky,
            related,
            names: r.names,
        };
        tracing::debug!(
            parallax = out.parallax.len(),
            reveal = out.reveal.len(),
            scenes = out.scenes.len(),
            sticky = out.sticky.len(),
            related = out.related.is_some(),
            "registry built"
        );
        Ok(out)
    }

    /// Tunables in effect.
    pub fn config(&self) -> &ChoreoConfig {
        &self.config
    }

    /// Region driving reading progress.
    pub fn content(&self) -> Option<RegionId> {
        self.content
    }

    /// Parallax entities; the hero, when declared, comes first.
    pub fn parallax(&self) -> &[ParallaxEntity] {
        &self.parallax
    }

    /// Reveal groups in declaration order.
    pub fn reveal(&self) -> &[RevealGroup] {
        &self.reveal
    }

    /// Scenes in page order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Sticky entities in declaration order.
    pub fn sticky(&self) -> &[StickyEntity] {
        &self.sticky
    }

    /// Related-content group.
    pub fn related(&self) -> Option<&RelatedGroup> {
        self.related.as_ref()
    }

    /// Scene text stagger timing from the config.
    pub fn text_timing(&self) -> TextTiming {
        TextTiming {
            appear_base: self.config.scene_text_appear_base,
            appear_step: self.config.scene_text_appear_step,
            fade_out: self.config.scene_text_fade_out,
        }
    }

    /// Related-card entrance timing from the config.
    pub fn related_timing(&self) -> RelatedTiming {
        RelatedTiming {
            base_delay_secs: self.config.related_base_delay_secs,
            step_secs: self.config.related_step_secs,
            duration_secs: self.config.related_duration_secs,
            initial_offset_px: self.config.related_initial_offset_px,
        }
    }

    /// Every region whose geometry is read during a tick.
    pub fn tracked_regions(&self) -> Vec<RegionId> {
        let mut out = Vec::new();
        out.extend(self.content);
        out.extend(self.parallax.iter().map(|p| p.region));
        for g in &self.reveal {
            out.extend_from_slice(&g.members);
        }
        out.extend(self.scenes.iter().map(|s| s.region));
        for s in &self.sticky {
            out.push(s.region);
            out.push(s.container);
        }
        out.extend(self.related.as_ref().map(|r| r.section));
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Human-readable label: the region's layout name, or the entity's display form.
    pub fn label(&self, id: EntityId) -> String {
        match id {
            EntityId::Region(r) => self
                .names
                .get(&r)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            EntityId::ProgressBar => id.to_string(),
        }
    }
}

fn reject(errs: SchemaErrors) -> ChoreoError {
    tracing::warn!(errors = errs.errors.len(), "choreography rejected");
    ChoreoError::validation(errs.to_string())
}

/// Scenes must be declared top to bottom; detached scenes are not ordered.
fn check_scene_order<S>(scenes: &[(usize, Scene)], source: &S, errors: &mut Vec<SchemaError>)
where
    S: GeometrySource + ?Sized,
{
    let mut prev: Option<f64> = None;
    for (i, scene) in scenes {
        let Some(geom) = try_probe(source, scene.region) else {
            continue;
        };
        if let Some(p) = prev
            && geom.top < p
        {
            errors.push(SchemaError::at(
                &[Field("scenes"), Index(*i), Field("region")],
                format!(
                    "scene at y={} is declared after a scene at y={p}; scenes must be in page order",
                    geom.top
                ),
            ));
        }
        prev = Some(geom.top);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/build.rs"]
mod tests;
