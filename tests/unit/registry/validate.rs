use super::*;
use crate::registry::model::{HeroDef, ParallaxDef, SceneDef, StickyDef};

fn messages(def: &ChoreographyDef) -> Vec<String> {
    match validate_choreography(def) {
        Ok(()) => Vec::new(),
        Err(e) => e.errors.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn empty_choreography_is_valid() {
    assert!(validate_choreography(&ChoreographyDef::default()).is_ok());
}

#[test]
fn path_formatting() {
    let path = [Field("scenes"), Index(2), Field("animations"), Index(0)];
    assert_eq!(format_path(&path), "$.scenes[2].animations[0]");
    assert_eq!(format_path(&[]), "$");
}

#[test]
fn backwards_animation_window_is_rejected() {
    let def = ChoreographyDef {
        scenes: vec![SceneDef {
            region: "scene".into(),
            background: None,
            text: Vec::new(),
            animations: vec![AnimationDef {
                target: "logo".into(),
                kind: crate::animation::dispatch::AnimationKind::FadeIn,
                start: Some(0.8),
                end: Some(0.2),
                ease: crate::animation::ease::Ease::Linear,
            }],
        }],
        ..ChoreographyDef::default()
    };
    let msgs = messages(&def);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("$.scenes[0].animations[0]:"), "{msgs:?}");
}

#[test]
fn errors_are_collected_not_short_circuited() {
    let def = ChoreographyDef {
        hero: Some(HeroDef {
            region: "hero".into(),
            speed: Some(f64::NAN),
            content: Some("hero".into()),
        }),
        parallax: vec![ParallaxDef {
            region: "".into(),
            speed: Some(f64::INFINITY),
        }],
        sticky: vec![
            StickyDef {
                region: "aside".into(),
                container: None,
                offset: None,
            },
            StickyDef {
                region: "aside".into(),
                container: None,
                offset: Some(f64::INFINITY),
            },
        ],
        ..ChoreographyDef::default()
    };
    let msgs = messages(&def);
    let has = |prefix: &str| msgs.iter().any(|m| m.starts_with(prefix));
    assert!(has("$.hero.speed:"), "{msgs:?}");
    assert!(has("$.hero.content:"), "{msgs:?}");
    assert!(has("$.parallax[0].region:"), "{msgs:?}");
    assert!(has("$.parallax[0].speed:"), "{msgs:?}");
    assert!(has("$.sticky[1].region:"), "{msgs:?}");
    assert!(has("$.sticky[1].offset:"), "{msgs:?}");
}

#[test]
fn invalid_config_is_reported_under_config() {
    let mut def = ChoreographyDef::default();
    def.config.completion_threshold = 1.5;
    let msgs = messages(&def);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("$.config:"));
}
