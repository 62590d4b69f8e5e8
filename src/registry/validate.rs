use std::collections::HashSet;
use std::fmt;

use crate::animation::dispatch::ThresholdWindow;
use crate::foundation::error::ChoreoResult;
use crate::registry::model::{AnimationDef, ChoreographyDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    pub(crate) fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

pub(crate) fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

use SchemaPathElem::{Field, Index};

/// Layout-independent checks: value ranges, windows and duplicates.
///
/// Region names are resolved later against the page layout.
pub(crate) fn validate_choreography(def: &ChoreographyDef) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if let Err(e) = def.config.validate() {
        errors.push(SchemaError::at(&[Field("config")], e.to_string()));
    }

    if let Some(content) = &def.content {
        check_name(content, &[Field("content")], &mut errors);
    }

    if let Some(hero) = &def.hero {
        check_name(&hero.region, &[Field("hero"), Field("region")], &mut errors);
        check_speed(hero.speed, &[Field("hero"), Field("speed")], &mut errors);
        if let Some(content) = &hero.content {
            check_name(content, &[Field("hero"), Field("content")], &mut errors);
            if *content == hero.region {
                errors.push(SchemaError::at(
                    &[Field("hero"), Field("content")],
                    "hero content must be a region inside the hero, not the hero itself",
                ));
            }
        }
    }

    for (i, p) in def.parallax.iter().enumerate() {
        let path = [Field("parallax"), Index(i)];
        check_name(&p.region, &[&path[..], &[Field("region")]].concat(), &mut errors);
        check_speed(p.speed, &[&path[..], &[Field("speed")]].concat(), &mut errors);
        if def.hero.as_ref().is_some_and(|h| h.region == p.region) {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("region")]].concat(),
                format!("region \"{}\" is already the hero", p.region),
            ));
        }
    }

    for (i, g) in def.reveal.iter().enumerate() {
        let path = [Field("reveal"), Index(i)];
        if g.members.is_empty() {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("members")]].concat(),
                "reveal group must have at least one member",
            ));
        }
        for (j, m) in g.members.iter().enumerate() {
            check_name(
                m,
                &[&path[..], &[Field("members"), Index(j)]].concat(),
                &mut errors,
            );
        }
        if let Some(s) = g.stagger_secs
            && !(s.is_finite() && s >= 0.0)
        {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("stagger_secs")]].concat(),
                "stagger_secs must be finite and >= 0",
            ));
        }
    }

    for (i, scene) in def.scenes.iter().enumerate() {
        let path = [Field("scenes"), Index(i)];
        check_name(
            &scene.region,
            &[&path[..], &[Field("region")]].concat(),
            &mut errors,
        );
        for (j, anim) in scene.animations.iter().enumerate() {
            let apath = [&path[..], &[Field("animations"), Index(j)]].concat();
            check_name(
                &anim.target,
                &[&apath[..], &[Field("target")]].concat(),
                &mut errors,
            );
            if let Err(e) = animation_window(anim, def) {
                errors.push(SchemaError::at(&apath, e.to_string()));
            }
        }
    }

    let mut sticky_seen = HashSet::<&str>::new();
    for (i, s) in def.sticky.iter().enumerate() {
        let path = [Field("sticky"), Index(i)];
        check_name(&s.region, &[&path[..], &[Field("region")]].concat(), &mut errors);
        if !sticky_seen.insert(s.region.as_str()) {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("region")]].concat(),
                format!("region \"{}\" is declared sticky more than once", s.region),
            ));
        }
        if s.container.as_deref() == Some(s.region.as_str()) {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("container")]].concat(),
                "sticky region cannot be its own container",
            ));
        }
        if let Some(o) = s.offset
            && !o.is_finite()
        {
            errors.push(SchemaError::at(
                &[&path[..], &[Field("offset")]].concat(),
                "offset must be finite",
            ));
        }
    }

    if let Some(r) = &def.related {
        check_name(&r.section, &[Field("related"), Field("section")], &mut errors);
        for (j, c) in r.cards.iter().enumerate() {
            check_name(
                c,
                &[Field("related"), Field("cards"), Index(j)],
                &mut errors,
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

/// Threshold window of an animation after applying the configured defaults.
pub(crate) fn animation_window(
    anim: &AnimationDef,
    def: &ChoreographyDef,
) -> ChoreoResult<ThresholdWindow> {
    ThresholdWindow::new(
        anim.start.unwrap_or(def.config.custom_animation_default_start),
        anim.end.unwrap_or(def.config.custom_animation_default_end),
    )
}

fn check_name(name: &str, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    if name.trim().is_empty() {
        errors.push(SchemaError::at(path, "region name must be non-empty"));
    }
}

fn check_speed(speed: Option<f64>, path: &[SchemaPathElem], errors: &mut Vec<SchemaError>) {
    if let Some(v) = speed
        && !v.is_finite()
    {
        errors.push(SchemaError::at(path, "speed must be finite"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/validate.rs"]
mod tests;
